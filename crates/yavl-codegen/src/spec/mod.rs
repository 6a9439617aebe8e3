//! The type-spec document model.
//!
//! ```yaml
//! ExtraIncludes:
//!   - "use std::collections::BTreeMap;"
//! Types:
//!   Color: [red, green, blue]
//!   Pixel:
//!     color: Color
//!     position: "u32[2]"
//! ```
//!
//! The top level is read through the checked-in `SpecType` binding, which is
//! the generator's own output for the spec-of-specs, so unknown or missing
//! top-level keys are reported the same way generated readers report them.

pub mod spec_type;

use crate::error::Result;
use indexmap::IndexMap;
use spec_type::SpecType;
use yavl_runtime::{FromYaml, ValidationOutcome, Yaml};

/// A `(module, name)` pair selecting a registered emitter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomCodeGenerator {
    pub module: String,
    pub name: String,
}

/// A parsed type spec.
#[derive(Debug, Clone, PartialEq)]
pub struct Spec {
    /// Lines emitted verbatim after the preamble
    pub extra_includes: Vec<String>,
    pub custom_code_generator: Option<CustomCodeGenerator>,
    /// Type entries in declaration order
    pub types: IndexMap<String, Yaml>,
}

impl Spec {
    /// Read a spec from a document tree.
    pub fn from_yaml(node: &Yaml) -> Result<Self> {
        let raw = SpecType::from_yaml(node)?;
        Ok(Self {
            extra_includes: raw.ExtraIncludes.unwrap_or_default(),
            custom_code_generator: raw
                .CustomCodeGenerator
                .map(|(module, name)| CustomCodeGenerator { module, name }),
            types: raw.Types,
        })
    }

    /// Parse spec text. Repeated type or field names are rejected by the
    /// parser before the spec is interpreted.
    pub fn parse(content: &str, filename: Option<&str>) -> Result<Self> {
        let yaml = match filename {
            Some(name) => yavl_yaml::parse_file(content, name)?,
            None => yavl_yaml::parse(content)?,
        };
        Self::from_yaml(&yaml.yaml)
    }

    /// Declared type names, in order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }
}

/// Check a document against the spec-of-specs without building a [`Spec`].
pub fn check_spec(node: &Yaml) -> ValidationOutcome {
    spec_type::validate_simple(node, "SpecType")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateError;
    use yavl_runtime::ConversionError;

    #[test]
    fn test_parse_full_spec() {
        let spec = Spec::parse(
            r#"
ExtraIncludes: ["use std::collections::BTreeMap;"]
CustomCodeGenerator: [my_module, MyGenerator]
Types:
  B: [x, y]
  A:
    b: B
"#,
            None,
        )
        .unwrap();
        assert_eq!(spec.extra_includes, vec!["use std::collections::BTreeMap;"]);
        assert_eq!(
            spec.custom_code_generator,
            Some(CustomCodeGenerator {
                module: "my_module".into(),
                name: "MyGenerator".into()
            })
        );
        assert_eq!(spec.type_names().collect::<Vec<_>>(), vec!["B", "A"]);
    }

    #[test]
    fn test_missing_types_key() {
        let err = Spec::parse("ExtraIncludes: []\n", None).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::Spec(ConversionError::MissingKey { ref key, .. }) if key == "Types"
        ));
    }

    #[test]
    fn test_superfluous_top_level_key() {
        let err = Spec::parse("Types: {}\nVersion: 2\n", None).unwrap_err();
        match err {
            GenerateError::Spec(ConversionError::SuperfluousKey { key, type_name }) => {
                assert_eq!(key, "Version");
                assert_eq!(type_name, "SpecType");
            }
            other => panic!("expected SuperfluousKey, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_type_name_rejected_by_parser() {
        let err = Spec::parse("Types:\n  A: [x]\n  A: [y]\n", None).unwrap_err();
        assert!(matches!(err, GenerateError::Yaml(yavl_yaml::Error::DuplicateKey { .. })));
    }

    #[test]
    fn test_check_spec() {
        let good = yavl_yaml::parse("Types: {}").unwrap().yaml;
        assert_eq!(check_spec(&good), (true, None));

        let bad = yavl_yaml::parse("Typez: {}").unwrap().yaml;
        let (ok, message) = check_spec(&bad);
        assert!(!ok);
        assert!(message.unwrap().contains("\"Types\""));
    }
}
