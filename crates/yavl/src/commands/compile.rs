//! `yavl compile`: generate bindings from a type spec.

use super::{read_input, write_output};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;
use yavl_codegen::{GeneratorOptions, Spec};

#[derive(Debug)]
pub struct CompileArgs {
    pub spec: PathBuf,
    /// `-` for stdout
    pub output: PathBuf,
    pub options: GeneratorOptions,
}

pub fn execute(args: CompileArgs) -> Result<()> {
    let text = read_input(&args.spec)?;
    let spec = Spec::parse(&text, Some(&*args.spec.to_string_lossy()))
        .with_context(|| format!("Failed to load spec {}", args.spec.display()))?;

    let mut code = Vec::new();
    yavl_codegen::generate(&spec, &args.options, &mut code)
        .with_context(|| format!("Failed to generate code for {}", args.spec.display()))?;
    write_output(&args.output, &code)?;

    info!(
        "Compiled {} types from {} into {}",
        spec.types.len(),
        args.spec.display(),
        args.output.display()
    );
    Ok(())
}
