//! Grammar model for the `map:` / `list:` / leaf dialect.
//!
//! ```yaml
//! map:
//!   name: [string]
//!   port: [{uint: ~}]
//!   mode: [{enum: [fast, slow]}]
//!   hosts:
//!     list: [string]
//! ```

mod parser;
mod types;

pub use types::{Builtin, EnumNode, LeafNode, ListNode, MapField, MapNode, SchemaNode};

use crate::error::SchemaResult;
use crate::validator::{Validation, validate};
use yavl_yaml::YamlWithSourceInfo;

/// A parsed grammar document.
#[derive(Debug, Clone, PartialEq)]
pub struct Grammar {
    pub root: SchemaNode,
}

impl Grammar {
    /// Build a grammar from an already-parsed document tree.
    pub fn from_yaml(yaml: &YamlWithSourceInfo) -> SchemaResult<Self> {
        Ok(Self {
            root: parser::parse_schema_node(yaml)?,
        })
    }

    /// Parse grammar text. `filename` is recorded in error locations.
    pub fn parse(content: &str, filename: Option<&str>) -> SchemaResult<Self> {
        let yaml = match filename {
            Some(name) => yavl_yaml::parse_file(content, name)?,
            None => yavl_yaml::parse(content)?,
        };
        Self::from_yaml(&yaml)
    }

    /// Check `document` against this grammar.
    pub fn validate(&self, document: &YamlWithSourceInfo) -> Validation {
        validate(&self.root, document)
    }
}
