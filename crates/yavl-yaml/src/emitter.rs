//! Rendering document trees back to YAML text.

use crate::Result;
use yaml_rust2::{Yaml, YamlEmitter};

/// Render a `Yaml` tree as a YAML document.
///
/// The output starts with the `---` document marker, as produced by
/// `yaml-rust2`, and ends with a newline.
pub fn emit(yaml: &Yaml) -> Result<String> {
    let mut out = String::new();
    {
        let mut emitter = YamlEmitter::new(&mut out);
        emitter.dump(yaml)?;
    }
    out.push('\n');
    Ok(out)
}
