//! `yavl check-spec` and `yavl list-types`.

use super::read_input;
use anyhow::{Context, Result};
use std::path::Path;
use yavl_codegen::Spec;
use yavl_codegen::spec::check_spec;

pub fn check(path: &Path) -> Result<()> {
    let text = read_input(path)?;
    let document = yavl_yaml::parse_file(&text, &path.to_string_lossy())
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    match check_spec(&document.yaml) {
        (true, _) => {
            println!("Validation successful!");
            Ok(())
        }
        (false, message) => {
            println!("Validation failed!");
            if let Some(message) = message {
                println!("{message}");
            }
            anyhow::bail!("{} is not a valid spec", path.display())
        }
    }
}

pub fn list_types(path: &Path) -> Result<()> {
    let text = read_input(path)?;
    let spec = Spec::parse(&text, Some(&*path.to_string_lossy()))
        .with_context(|| format!("Failed to load spec {}", path.display()))?;
    for name in spec.type_names() {
        println!("{name}");
    }
    Ok(())
}
