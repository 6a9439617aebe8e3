//! Type-spec code generation.

use crate::emitter::{EmitterRegistry, emit_type};
use crate::error::Result;
use crate::options::GeneratorOptions;
use crate::registry::TypeRegistry;
use crate::spec::Spec;
use crate::writer::CodeWriter;
use std::io::Write;

/// Generate bindings for `spec` with the default emitter registry.
pub fn generate<W: Write>(spec: &Spec, options: &GeneratorOptions, sink: &mut W) -> Result<()> {
    generate_with(spec, options, &EmitterRegistry::with_defaults(), sink)
}

/// Generate bindings for `spec`, resolving `CustomCodeGenerator` in `emitters`.
///
/// Output order is: preamble, then each type's declaration, reader and
/// writer in spec order, then the dispatch block. The whole file is
/// rendered in memory first; `sink` receives nothing if generation fails.
pub fn generate_with<W: Write>(
    spec: &Spec,
    options: &GeneratorOptions,
    emitters: &EmitterRegistry,
    sink: &mut W,
) -> Result<()> {
    let emitter = emitters.resolve(spec.custom_code_generator.as_ref())?;
    let registry = TypeRegistry::from_spec(spec)?;

    let mut out = CodeWriter::buffer();
    emitter.emit_preamble(spec, options, &mut out)?;
    for ty in registry.types() {
        tracing::debug!(type_name = %ty.name, "emitting type");
        emit_type(emitter, ty, options, &mut out)?;
    }
    if options.emit_validator {
        emitter.emit_validator(registry.types(), &mut out)?;
    }

    sink.write_all(&out.into_inner())?;
    tracing::info!(types = registry.len(), "generated bindings");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateError;

    fn render(text: &str, options: GeneratorOptions) -> Result<String> {
        let spec = Spec::parse(text, None)?;
        let mut out = Vec::new();
        generate(&spec, &options, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_failed_generation_writes_nothing() {
        let spec = Spec::parse("Types:\n  Good: [a]\n  Bad: 3\n", None).unwrap();
        let mut out = Vec::new();
        let err = generate(&spec, &GeneratorOptions::default(), &mut out).unwrap_err();
        assert!(matches!(err, GenerateError::BadSchemaShape { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_options_select_blocks() {
        let spec = "Types:\n  Mode: [fast]\n  Cfg:\n    mode: Mode\n";
        let only_decls = render(
            spec,
            GeneratorOptions {
                emit_readers: false,
                emit_writers: false,
                emit_validator: false,
                ..Default::default()
            },
        )
        .unwrap();
        assert!(only_decls.contains("pub enum Mode {"));
        assert!(only_decls.contains("pub struct Cfg {"));
        assert!(!only_decls.contains("yavl_runtime"));

        let no_decls = render(
            spec,
            GeneratorOptions {
                emit_declarations: false,
                ..Default::default()
            },
        )
        .unwrap();
        assert!(!no_decls.contains("pub struct Cfg {"));
        assert!(no_decls.contains("impl yavl_runtime::FromYaml for Cfg {"));
        assert!(no_decls.contains("pub fn validate_simple("));
    }
}
