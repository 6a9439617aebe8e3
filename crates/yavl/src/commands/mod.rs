//! Command implementations for the yavl CLI
//!
//! Each command reads its inputs, delegates to the library crates and
//! reports the result.

pub mod bind;
pub mod compile;
pub mod normalize;
pub mod spec;
pub mod validate;

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

pub(crate) fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Write generated code to `path`, or to stdout for `-`.
///
/// Callers render the whole file first, so a failed generation never
/// touches an existing output file.
pub(crate) fn write_output(path: &Path, code: &[u8]) -> Result<()> {
    if path.as_os_str() == "-" {
        let mut stdout = io::stdout().lock();
        stdout.write_all(code)?;
        stdout.flush()?;
        return Ok(());
    }
    std::fs::write(path, code).with_context(|| format!("Failed to write {}", path.display()))
}
