//! `yavl normalize`: parse and re-emit a YAML file.

use super::read_input;
use anyhow::{Context, Result};
use std::path::Path;

pub fn execute(path: &Path) -> Result<()> {
    let text = read_input(path)?;
    let document = yavl_yaml::parse_file(&text, &path.to_string_lossy())
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    println!("{}", yavl_yaml::emit(&document.yaml)?);
    Ok(())
}
