//! Classified view of a spec's `Types` map.

use crate::error::{GenerateError, Result};
use crate::naming::{is_optional_type, rust_field_type, rust_ident};
use crate::spec::Spec;
use yavl_runtime::Yaml;

/// One struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Key in the document
    pub name: String,
    /// Rust identifier for the field
    pub ident: String,
    /// Declared type string, as written in the spec
    pub type_string: String,
}

impl FieldDef {
    pub fn new(name: &str, type_string: &str) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            ident: ident_for(name)?,
            type_string: type_string.to_string(),
        })
    }

    /// Type used in the declaration, with C-style array suffixes rewritten.
    pub fn rust_type(&self) -> String {
        rust_field_type(&self.type_string)
    }

    /// Required unless declared as `Option<..>`.
    pub fn is_required(&self) -> bool {
        !is_optional_type(&self.type_string)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumChoice {
    /// Text in the document
    pub value: String,
    /// Variant identifier
    pub ident: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    Map(Vec<FieldDef>),
    Enum(Vec<EnumChoice>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedType {
    pub name: String,
    pub ident: String,
    pub kind: TypeKind,
}

impl GeneratedType {
    pub fn new_map(name: &str, fields: Vec<FieldDef>) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            ident: ident_for(name)?,
            kind: TypeKind::Map(fields),
        })
    }

    /// Build an enum type. Choices must be unique.
    pub fn new_enum(name: &str, choices: &[String]) -> Result<Self> {
        if choices.is_empty() {
            return Err(GenerateError::bad_shape(name, "an enum needs at least one choice"));
        }
        let mut parsed: Vec<EnumChoice> = Vec::with_capacity(choices.len());
        for value in choices {
            if parsed.iter().any(|c| &c.value == value) {
                return Err(GenerateError::DuplicateChoice {
                    type_name: name.to_string(),
                    choice: value.clone(),
                });
            }
            parsed.push(EnumChoice {
                value: value.clone(),
                ident: ident_for(value)?,
            });
        }
        Ok(Self {
            name: name.to_string(),
            ident: ident_for(name)?,
            kind: TypeKind::Enum(parsed),
        })
    }
}

fn ident_for(name: &str) -> Result<String> {
    rust_ident(name).ok_or_else(|| GenerateError::InvalidIdentifier {
        name: name.to_string(),
    })
}

/// The spec's types, classified and in declaration order.
///
/// Order is never changed: a type that refers to another must be declared
/// after it in the spec.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: Vec<GeneratedType>,
}

impl TypeRegistry {
    pub fn from_spec(spec: &Spec) -> Result<Self> {
        let mut types = Vec::with_capacity(spec.types.len());
        for (name, info) in &spec.types {
            types.push(classify(name, info)?);
        }
        Ok(Self { types })
    }

    pub fn types(&self) -> &[GeneratedType] {
        &self.types
    }

    pub fn get(&self, name: &str) -> Option<&GeneratedType> {
        self.types.iter().find(|t| t.name == name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Mapping ⇒ struct, sequence ⇒ enum, anything else is an error.
fn classify(name: &str, info: &Yaml) -> Result<GeneratedType> {
    match info {
        Yaml::Hash(hash) => {
            let mut fields = Vec::with_capacity(hash.len());
            for (key, value) in hash {
                let field_name = yavl_yaml::scalar_text(key)
                    .ok_or_else(|| GenerateError::bad_shape(name, "field names must be scalars"))?;
                let type_string = value.as_str().ok_or_else(|| {
                    GenerateError::bad_shape(
                        name,
                        format!("type of field \"{}\" must be a string", field_name),
                    )
                })?;
                fields.push(FieldDef::new(&field_name, type_string)?);
            }
            GeneratedType::new_map(name, fields)
        }
        Yaml::Array(items) => {
            let mut choices = Vec::with_capacity(items.len());
            for item in items {
                let choice = yavl_yaml::scalar_text(item)
                    .ok_or_else(|| GenerateError::bad_shape(name, "enum choices must be scalars"))?;
                choices.push(choice);
            }
            GeneratedType::new_enum(name, &choices)
        }
        other => Err(GenerateError::bad_shape(
            name,
            format!(
                "expected a mapping of fields or a list of choices, found {}",
                yavl_yaml::NodeKind::of(other)
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(text: &str) -> Result<TypeRegistry> {
        TypeRegistry::from_spec(&Spec::parse(text, None)?)
    }

    #[test]
    fn test_classification_keeps_order() {
        let r = registry(
            r#"
Types:
  Pixel:
    color: Color
    position: "u32[2]"
    label: Option<String>
  Color: [red, green]
"#,
        )
        .unwrap();
        let names: Vec<_> = r.types().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Pixel", "Color"]);

        let TypeKind::Map(fields) = &r.types()[0].kind else {
            panic!("Pixel should be a map type");
        };
        assert_eq!(fields[1].rust_type(), "[u32; 2]");
        assert!(fields[0].is_required());
        assert!(!fields[2].is_required());
        assert!(matches!(r.get("Color").unwrap().kind, TypeKind::Enum(ref c) if c.len() == 2));
    }

    #[test]
    fn test_scalar_type_entry_is_bad_shape() {
        let err = registry("Types:\n  Alias: u32\n").unwrap_err();
        assert!(matches!(err, GenerateError::BadSchemaShape { ref type_name, .. } if type_name == "Alias"));
    }

    #[test]
    fn test_duplicate_choice() {
        let err = registry("Types:\n  Color: [red, green, red]\n").unwrap_err();
        match err {
            GenerateError::DuplicateChoice { type_name, choice } => {
                assert_eq!(type_name, "Color");
                assert_eq!(choice, "red");
            }
            other => panic!("expected DuplicateChoice, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(matches!(
            registry("Types:\n  Mode: [fast, not-fast]\n").unwrap_err(),
            GenerateError::InvalidIdentifier { ref name } if name == "not-fast"
        ));
        let r = registry("Types:\n  Item:\n    type: String\n").unwrap();
        let TypeKind::Map(fields) = &r.types()[0].kind else {
            panic!("Item should be a map type");
        };
        assert_eq!(fields[0].ident, "r#type");
    }

    #[test]
    fn test_nested_field_type_must_be_string() {
        let err = registry("Types:\n  A:\n    b: {c: u8}\n").unwrap_err();
        assert!(matches!(err, GenerateError::BadSchemaShape { .. }));
    }
}
