//! Scalar text helpers shared by the validator and generated readers.

use crate::NodeKind;
use yaml_rust2::Yaml;

/// Interpret a YAML 1.1 boolean word.
pub fn parse_bool_word(s: &str) -> Option<bool> {
    match s {
        "y" | "Y" | "yes" | "Yes" | "YES" | "true" | "True" | "TRUE" | "on" | "On" | "ON" => {
            Some(true)
        }
        "n" | "N" | "no" | "No" | "NO" | "false" | "False" | "FALSE" | "off" | "Off" | "OFF" => {
            Some(false)
        }
        _ => None,
    }
}

/// Text of a scalar node, or `None` for null, containers and missing values.
pub fn scalar_text(yaml: &Yaml) -> Option<String> {
    match yaml {
        Yaml::String(s) | Yaml::Real(s) => Some(s.clone()),
        Yaml::Integer(i) => Some(i.to_string()),
        Yaml::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Short description of a node for error messages: the scalar text, or the
/// node kind in angle brackets.
pub fn describe(yaml: &Yaml) -> String {
    scalar_text(yaml).unwrap_or_else(|| format!("<{}>", NodeKind::of(yaml)))
}
