//! `yavl bind`: generate types for a grammar's nested structure.

use super::{read_input, write_output};
use anyhow::{Context, Result};
use std::path::Path;
use yavl_codegen::BinderGenerator;
use yavl_validation::Grammar;

pub fn execute(grammar_path: &Path, top_name: &str, output: &Path) -> Result<()> {
    let text = read_input(grammar_path)?;
    let grammar = Grammar::parse(&text, Some(&*grammar_path.to_string_lossy()))
        .with_context(|| format!("Failed to load grammar {}", grammar_path.display()))?;

    let binder = BinderGenerator::new(&grammar, top_name)?;
    let mut code = Vec::new();
    binder.generate(&mut code)?;
    write_output(output, &code)
}
