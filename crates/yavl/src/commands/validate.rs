//! `yavl validate`: check a document against a grammar.

use super::read_input;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;
use yavl_validation::{Grammar, ValidationDiagnostic};

pub fn execute(grammar_path: &Path, input_path: &Path, json: bool) -> Result<()> {
    let grammar_text = read_input(grammar_path)?;
    let grammar = Grammar::parse(&grammar_text, Some(&*grammar_path.to_string_lossy()))
        .with_context(|| format!("Failed to load grammar {}", grammar_path.display()))?;

    let input_text = read_input(input_path)?;
    let document = yavl_yaml::parse_file(&input_text, &input_path.to_string_lossy())
        .with_context(|| format!("Failed to parse {}", input_path.display()))?;

    let validation = grammar.validate(&document);
    let diagnostics: Vec<ValidationDiagnostic> = validation
        .errors
        .iter()
        .map(ValidationDiagnostic::from_validation_error)
        .collect();

    if json {
        let records: Vec<serde_json::Value> =
            diagnostics.iter().map(ValidationDiagnostic::to_json).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for diagnostic in &diagnostics {
            eprintln!("{}", diagnostic.to_text(Some(&input_text)));
        }
    }

    if !validation.ok {
        anyhow::bail!(
            "{} failed validation with {} error(s)",
            input_path.display(),
            diagnostics.len()
        );
    }
    info!("{} is valid", input_path.display());
    Ok(())
}
