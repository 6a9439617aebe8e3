//! Emission hooks for the type-spec generator.
//!
//! Every step has a default implementation producing the standard output;
//! a custom emitter overrides only the steps it wants to change and is
//! selected by a spec's `CustomCodeGenerator: [module, name]` entry.

use crate::error::{GenerateError, Result};
use crate::naming::string_literal;
use crate::options::GeneratorOptions;
use crate::registry::{EnumChoice, FieldDef, GeneratedType, TypeKind};
use crate::spec::{CustomCodeGenerator, Spec};
use crate::writer::CodeWriter;
use indexmap::IndexMap;
use std::io;

pub trait TypeEmitter {
    /// Banner, runtime imports and the spec's extra include lines.
    fn emit_preamble(
        &self,
        spec: &Spec,
        options: &GeneratorOptions,
        out: &mut CodeWriter,
    ) -> io::Result<()> {
        out.line("// Generated by yavl from a type spec. Do not edit.")?;
        out.blank()?;
        if options.uses_runtime() {
            out.line("#[allow(unused_imports)]")?;
            out.line("use yavl_runtime::{FromYaml, ToYaml};")?;
            out.blank()?;
        }
        if !spec.extra_includes.is_empty() {
            for include in &spec.extra_includes {
                out.line(include)?;
            }
            out.blank()?;
        }
        Ok(())
    }

    fn emit_map_declaration(
        &self,
        ty: &GeneratedType,
        fields: &[FieldDef],
        out: &mut CodeWriter,
    ) -> io::Result<()> {
        out.line("#[allow(non_snake_case)]")?;
        out.line("#[derive(Debug, Clone, PartialEq)]")?;
        out.line(format!("pub struct {} {{", ty.ident))?;
        for field in fields {
            out.line(format!("pub {}: {},", field.ident, field.rust_type()))?;
        }
        out.line("}")?;
        out.blank()
    }

    /// Strict-keys reader: every required key present, no undeclared keys.
    fn emit_map_reader(
        &self,
        ty: &GeneratedType,
        fields: &[FieldDef],
        out: &mut CodeWriter,
    ) -> io::Result<()> {
        out.line(format!("impl yavl_runtime::FromYaml for {} {{", ty.ident))?;
        out.line("fn from_yaml(input: &yavl_runtime::Yaml) -> yavl_runtime::Result<Self> {")?;
        out.line("const KEYS: &[(&str, bool)] = &[")?;
        for field in fields {
            out.line(format!(
                "({}, {}),",
                string_literal(&field.name),
                field.is_required()
            ))?;
        }
        out.line("];")?;
        out.line(format!(
            "yavl_runtime::check_keys({}, input, KEYS)?;",
            string_literal(&ty.name)
        ))?;
        out.line("Ok(Self {")?;
        for field in fields {
            out.line(format!(
                "{}: yavl_runtime::read_field(input, {})?,",
                field.ident,
                string_literal(&field.name)
            ))?;
        }
        out.line("})")?;
        out.line("}")?;
        out.line("}")?;
        out.blank()
    }

    /// Writer emitting fields in declaration order.
    fn emit_map_writer(
        &self,
        ty: &GeneratedType,
        fields: &[FieldDef],
        out: &mut CodeWriter,
    ) -> io::Result<()> {
        out.line(format!("impl yavl_runtime::ToYaml for {} {{", ty.ident))?;
        out.line("fn to_yaml(&self) -> yavl_runtime::Yaml {")?;
        if fields.is_empty() {
            out.line("yavl_runtime::MapWriter::new().finish()")?;
        } else {
            out.line("let mut output = yavl_runtime::MapWriter::new();")?;
            for field in fields {
                out.line(format!(
                    "output.write_field({}, &self.{});",
                    string_literal(&field.name),
                    field.ident
                ))?;
            }
            out.line("output.finish()")?;
        }
        out.line("}")?;
        out.line("}")?;
        out.blank()
    }

    fn emit_enum_declaration(
        &self,
        ty: &GeneratedType,
        choices: &[EnumChoice],
        out: &mut CodeWriter,
    ) -> io::Result<()> {
        out.line("#[allow(non_camel_case_types)]")?;
        out.line("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]")?;
        out.line(format!("pub enum {} {{", ty.ident))?;
        for choice in choices {
            out.line(format!("{},", choice.ident))?;
        }
        out.line("}")?;
        out.blank()
    }

    /// First matching choice wins; no match is a bad conversion.
    fn emit_enum_reader(
        &self,
        ty: &GeneratedType,
        choices: &[EnumChoice],
        out: &mut CodeWriter,
    ) -> io::Result<()> {
        out.line(format!("impl yavl_runtime::FromYaml for {} {{", ty.ident))?;
        out.line("fn from_yaml(input: &yavl_runtime::Yaml) -> yavl_runtime::Result<Self> {")?;
        out.line("let tmp = <String as yavl_runtime::FromYaml>::from_yaml(input)?;")?;
        out.line("match tmp.as_str() {")?;
        for choice in choices {
            out.line(format!(
                "{} => Ok(Self::{}),",
                string_literal(&choice.value),
                choice.ident
            ))?;
        }
        out.line(format!(
            "_ => Err(yavl_runtime::ConversionError::bad_conversion(input, {})),",
            string_literal(&ty.name)
        ))?;
        out.line("}")?;
        out.line("}")?;
        out.line("}")?;
        out.blank()
    }

    fn emit_enum_writer(
        &self,
        ty: &GeneratedType,
        choices: &[EnumChoice],
        out: &mut CodeWriter,
    ) -> io::Result<()> {
        out.line(format!("impl yavl_runtime::ToYaml for {} {{", ty.ident))?;
        out.line("fn to_yaml(&self) -> yavl_runtime::Yaml {")?;
        out.line("match self {")?;
        for choice in choices {
            out.line(format!(
                "Self::{} => yavl_runtime::Yaml::String({}.to_string()),",
                choice.ident,
                string_literal(&choice.value)
            ))?;
        }
        out.line("}")?;
        out.line("}")?;
        out.line("}")?;
        out.blank()
    }

    /// `get_types`, `symbol_table` and `validate_simple` over every type.
    fn emit_validator(&self, types: &[GeneratedType], out: &mut CodeWriter) -> io::Result<()> {
        out.line("pub fn get_types() -> Vec<&'static str> {")?;
        out.line("vec![")?;
        for ty in types {
            out.line(format!("{},", string_literal(&ty.name)))?;
        }
        out.line("]")?;
        out.line("}")?;
        out.blank()?;

        out.line("pub fn symbol_table() -> &'static yavl_runtime::SymbolTable {")?;
        out.line(
            "static TABLE: std::sync::OnceLock<yavl_runtime::SymbolTable> = std::sync::OnceLock::new();",
        )?;
        out.line("TABLE.get_or_init(|| {")?;
        out.line("yavl_runtime::SymbolTable::new()")?;
        out.indent();
        for ty in types {
            out.line(format!(
                ".register({}, yavl_runtime::validate::<{}>)",
                string_literal(&ty.name),
                ty.ident
            ))?;
        }
        out.dedent();
        out.line("})")?;
        out.line("}")?;
        out.blank()?;

        out.line("pub fn validate_simple(")?;
        out.line("node: &yavl_runtime::Yaml,")?;
        out.line("type_name: &str,")?;
        out.line(") -> yavl_runtime::ValidationOutcome {")?;
        out.line("symbol_table().validate_simple(node, type_name)")?;
        out.line("}")
    }
}

/// The standard output for every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEmitter;

impl TypeEmitter for DefaultEmitter {}

static DEFAULT_EMITTER: DefaultEmitter = DefaultEmitter;

/// Emitters selectable by a spec's `CustomCodeGenerator` entry.
#[derive(Default)]
pub struct EmitterRegistry {
    emitters: IndexMap<CustomCodeGenerator, Box<dyn TypeEmitter>>,
}

impl EmitterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the default emitter under `yavl.CodeGenerator`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("yavl", "CodeGenerator", DefaultEmitter);
        registry
    }

    pub fn register(
        &mut self,
        module: impl Into<String>,
        name: impl Into<String>,
        emitter: impl TypeEmitter + 'static,
    ) {
        let key = CustomCodeGenerator {
            module: module.into(),
            name: name.into(),
        };
        self.emitters.insert(key, Box::new(emitter));
    }

    /// The emitter a spec asks for, or the default when it names none.
    pub fn resolve(&self, custom: Option<&CustomCodeGenerator>) -> Result<&dyn TypeEmitter> {
        let Some(key) = custom else {
            return Ok(&DEFAULT_EMITTER);
        };
        self.emitters
            .get(key)
            .map(|emitter| emitter.as_ref())
            .ok_or_else(|| GenerateError::UnknownCodeGenerator {
                module: key.module.clone(),
                name: key.name.clone(),
            })
    }
}

impl std::fmt::Debug for EmitterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.emitters.keys()).finish()
    }
}

/// Emit the declaration, reader and writer of one type, as enabled.
pub(crate) fn emit_type(
    emitter: &dyn TypeEmitter,
    ty: &GeneratedType,
    options: &GeneratorOptions,
    out: &mut CodeWriter,
) -> io::Result<()> {
    match &ty.kind {
        TypeKind::Map(fields) => {
            if options.emit_declarations {
                emitter.emit_map_declaration(ty, fields, out)?;
            }
            if options.emit_readers {
                emitter.emit_map_reader(ty, fields, out)?;
            }
            if options.emit_writers {
                emitter.emit_map_writer(ty, fields, out)?;
            }
        }
        TypeKind::Enum(choices) => {
            if options.emit_declarations {
                emitter.emit_enum_declaration(ty, choices, out)?;
            }
            if options.emit_readers {
                emitter.emit_enum_reader(ty, choices, out)?;
            }
            if options.emit_writers {
                emitter.emit_enum_writer(ty, choices, out)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TupleStructEmitter;

    impl TypeEmitter for TupleStructEmitter {
        fn emit_map_declaration(
            &self,
            ty: &GeneratedType,
            _fields: &[FieldDef],
            out: &mut CodeWriter,
        ) -> io::Result<()> {
            out.line(format!("pub struct {};", ty.ident))
        }
    }

    fn key(module: &str, name: &str) -> CustomCodeGenerator {
        CustomCodeGenerator {
            module: module.into(),
            name: name.into(),
        }
    }

    #[test]
    fn test_resolve_default_and_custom() {
        let mut registry = EmitterRegistry::with_defaults();
        registry.register("mine", "Tuple", TupleStructEmitter);

        assert!(registry.resolve(None).is_ok());
        assert!(registry.resolve(Some(&key("yavl", "CodeGenerator"))).is_ok());

        let ty = GeneratedType::new_map("Unit", vec![]).unwrap();
        let mut out = CodeWriter::buffer();
        registry
            .resolve(Some(&key("mine", "Tuple")))
            .unwrap()
            .emit_map_declaration(&ty, &[], &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out.into_inner()).unwrap(), "pub struct Unit;\n");
    }

    #[test]
    fn test_unknown_generator() {
        let registry = EmitterRegistry::with_defaults();
        let err = registry.resolve(Some(&key("nowhere", "Gen"))).err().unwrap();
        assert_eq!(err.to_string(), "Unknown custom code generator \"nowhere.Gen\"");
    }

    #[test]
    fn test_enum_reader_falls_back_to_bad_conversion() {
        let ty = GeneratedType::new_enum("Mode", &["fast".into(), "slow".into()]).unwrap();
        let TypeKind::Enum(choices) = &ty.kind else {
            unreachable!()
        };
        let mut out = CodeWriter::buffer();
        DefaultEmitter.emit_enum_reader(&ty, choices, &mut out).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert!(text.contains("            \"fast\" => Ok(Self::fast),\n"));
        assert!(text.contains("bad_conversion(input, \"Mode\")"));
    }
}
