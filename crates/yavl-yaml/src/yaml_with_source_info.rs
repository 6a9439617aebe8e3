//! YAML value with source location tracking.

use crate::{NodeKind, SourceInfo};
use yaml_rust2::Yaml;

/// A YAML node together with the location it was read from.
///
/// The owned `yaml` field is a complete, independent `yaml-rust2` tree, which
/// is what generated readers consume. The private `children` field mirrors its
/// structure so that every nested node can still report where it came from.
#[derive(Debug, Clone)]
pub struct YamlWithSourceInfo {
    /// The complete yaml-rust2 value (owned).
    pub yaml: Yaml,

    /// Source location for this node.
    pub source_info: SourceInfo,

    children: Children,
}

#[derive(Debug, Clone)]
enum Children {
    None,
    Array(Vec<YamlWithSourceInfo>),
    Hash(Vec<YamlHashEntry>),
}

/// A key-value pair in a YAML mapping, both sides source-tracked.
#[derive(Debug, Clone)]
pub struct YamlHashEntry {
    pub key: YamlWithSourceInfo,
    pub value: YamlWithSourceInfo,
}

impl YamlWithSourceInfo {
    /// Create a node for a scalar, null, or other leaf value.
    pub fn new_scalar(yaml: Yaml, source_info: SourceInfo) -> Self {
        Self {
            yaml,
            source_info,
            children: Children::None,
        }
    }

    /// Create a sequence node. The raw `Yaml::Array` is rebuilt from `items`.
    pub fn new_array(source_info: SourceInfo, items: Vec<YamlWithSourceInfo>) -> Self {
        let yaml = Yaml::Array(items.iter().map(|item| item.yaml.clone()).collect());
        Self {
            yaml,
            source_info,
            children: Children::Array(items),
        }
    }

    /// Create a mapping node. The raw `Yaml::Hash` is rebuilt from `entries`,
    /// preserving their order.
    pub fn new_hash(source_info: SourceInfo, entries: Vec<YamlHashEntry>) -> Self {
        let yaml = Yaml::Hash(
            entries
                .iter()
                .map(|entry| (entry.key.yaml.clone(), entry.value.yaml.clone()))
                .collect(),
        );
        Self {
            yaml,
            source_info,
            children: Children::Hash(entries),
        }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::of(&self.yaml)
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self.children, Children::None)
    }

    pub fn is_array(&self) -> bool {
        matches!(self.children, Children::Array(_))
    }

    pub fn is_hash(&self) -> bool {
        matches!(self.children, Children::Hash(_))
    }

    pub fn as_array(&self) -> Option<&[YamlWithSourceInfo]> {
        match &self.children {
            Children::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_hash(&self) -> Option<&[YamlHashEntry]> {
        match &self.children {
            Children::Hash(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a mapping value by string key.
    ///
    /// Returns None if this is not a mapping or the key is absent.
    pub fn get_hash_value(&self, key: &str) -> Option<&YamlWithSourceInfo> {
        self.as_hash()?
            .iter()
            .find(|entry| entry.key.yaml.as_str() == Some(key))
            .map(|entry| &entry.value)
    }

    pub fn get_array_item(&self, index: usize) -> Option<&YamlWithSourceInfo> {
        self.as_array()?.get(index)
    }

    /// Render a scalar as text the way it would be written in a document.
    ///
    /// Returns None for null, sequences and mappings.
    pub fn scalar_text(&self) -> Option<String> {
        crate::scalar::scalar_text(&self.yaml)
    }

    /// Number of children (sequence length or mapping entry count).
    pub fn len(&self) -> usize {
        match &self.children {
            Children::None => 0,
            Children::Array(items) => items.len(),
            Children::Hash(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl YamlHashEntry {
    pub fn new(key: YamlWithSourceInfo, value: YamlWithSourceInfo) -> Self {
        Self { key, value }
    }
}
