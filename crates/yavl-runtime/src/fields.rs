//! Mapping helpers used by generated readers and writers.

use crate::convert::{FromYaml, ToYaml};
use crate::error::{ConversionError, Result};
use yaml_rust2::Yaml;
use yaml_rust2::yaml::Hash as YamlHash;

/// Read mapping member `key` through its `FromYaml` implementation.
///
/// An absent key reads as `Yaml::BadValue`, so optional fields become `None`.
pub fn read_field<T: FromYaml>(node: &Yaml, key: &str) -> Result<T> {
    T::from_yaml(&node[key])
}

/// Strict key check for a generated struct reader.
///
/// `fields` lists every declared key with whether it is required. All
/// required keys are checked before any undeclared key is reported. Only
/// string keys can match a field; `read_field` looks keys up as strings, so
/// a `true:` or `1:` key is always superfluous.
pub fn check_keys(type_name: &str, node: &Yaml, fields: &[(&str, bool)]) -> Result<()> {
    let Yaml::Hash(hash) = node else {
        return Err(ConversionError::bad_conversion(node, type_name));
    };

    let present: Vec<&str> = hash.keys().filter_map(Yaml::as_str).collect();

    for (key, required) in fields {
        if *required && !present.contains(key) {
            return Err(ConversionError::MissingKey {
                key: (*key).to_string(),
                type_name: type_name.to_string(),
            });
        }
    }

    let declared = |key: &Yaml| {
        key.as_str()
            .is_some_and(|key| fields.iter().any(|(name, _)| *name == key))
    };
    if let Some(extra) = hash.keys().find(|key| !declared(*key)) {
        return Err(ConversionError::SuperfluousKey {
            key: yavl_yaml::describe(extra),
            type_name: type_name.to_string(),
        });
    }

    Ok(())
}

/// Builds a mapping node one field at a time, in call order.
#[derive(Debug, Default)]
pub struct MapWriter {
    hash: YamlHash,
}

impl MapWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key: value`. Absent optional values are skipped.
    pub fn write_field<T: ToYaml + ?Sized>(&mut self, key: &str, value: &T) -> &mut Self {
        if !value.is_absent() {
            self.hash.insert(Yaml::String(key.to_string()), value.to_yaml());
        }
        self
    }

    pub fn finish(self) -> Yaml {
        Yaml::Hash(self.hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(text: &str) -> Yaml {
        yavl_yaml::parse(text).unwrap().yaml
    }

    const FIELDS: &[(&str, bool)] = &[("name", true), ("port", true), ("note", false)];

    #[test]
    fn test_check_keys_accepts_exact_and_optional() {
        assert!(check_keys("Server", &yaml("name: a\nport: 1"), FIELDS).is_ok());
        assert!(check_keys("Server", &yaml("name: a\nport: 1\nnote: x"), FIELDS).is_ok());
    }

    #[test]
    fn test_check_keys_missing_before_superfluous() {
        let err = check_keys("Server", &yaml("name: a\nextra: 1"), FIELDS).unwrap_err();
        assert_eq!(
            err,
            ConversionError::MissingKey {
                key: "port".into(),
                type_name: "Server".into()
            }
        );
    }

    #[test]
    fn test_check_keys_superfluous() {
        let err = check_keys("Server", &yaml("name: a\nport: 1\nextra: 1"), FIELDS).unwrap_err();
        assert_eq!(err.to_string(), "Superfluous key \"extra\" during conversion to type \"Server\"");
    }

    #[test]
    fn test_check_keys_only_string_keys_match() {
        const FLAGS: &[(&str, bool)] = &[("true", true), ("1", false)];
        let err = check_keys("Flags", &yaml("true: a"), FLAGS).unwrap_err();
        assert_eq!(
            err,
            ConversionError::MissingKey {
                key: "true".into(),
                type_name: "Flags".into()
            }
        );

        let err = check_keys("Flags", &yaml("\"true\": a\n1: b"), FLAGS).unwrap_err();
        assert_eq!(err.to_string(), "Superfluous key \"1\" during conversion to type \"Flags\"");

        assert!(check_keys("Flags", &yaml("\"true\": a\n\"1\": b"), FLAGS).is_ok());
    }

    #[test]
    fn test_check_keys_requires_mapping() {
        let err = check_keys("Server", &yaml("[1]"), FIELDS).unwrap_err();
        assert!(matches!(err, ConversionError::BadConversion { .. }));
    }

    #[test]
    fn test_read_field_optional() {
        let node = yaml("port: 80");
        let port: u16 = read_field(&node, "port").unwrap();
        let note: Option<String> = read_field(&node, "note").unwrap();
        assert_eq!(port, 80);
        assert_eq!(note, None);
        assert!(read_field::<String>(&node, "note").is_err());
    }

    #[test]
    fn test_map_writer_order_and_omission() {
        let mut writer = MapWriter::new();
        writer
            .write_field("b", &1u8)
            .write_field("skip", &None::<String>)
            .write_field("a", "text");
        assert_eq!(writer.finish(), yaml("b: 1\na: text"));
    }
}
