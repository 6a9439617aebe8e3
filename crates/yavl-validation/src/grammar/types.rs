// Grammar node types

use std::fmt;
use yavl_yaml::SourceInfo;

/// A node of the grammar tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Map(MapNode),
    List(ListNode),
    Leaf(LeafNode),
}

impl SchemaNode {
    pub fn as_map(&self) -> Option<&MapNode> {
        match self {
            SchemaNode::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListNode> {
        match self {
            SchemaNode::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&LeafNode> {
        match self {
            SchemaNode::Leaf(l) => Some(l),
            _ => None,
        }
    }

    /// Where the node was declared in the grammar text.
    pub fn source_info(&self) -> &SourceInfo {
        match self {
            SchemaNode::Map(m) => &m.source_info,
            SchemaNode::List(l) => &l.source_info,
            SchemaNode::Leaf(LeafNode::Builtin { source_info, .. }) => source_info,
            SchemaNode::Leaf(LeafNode::Enum(e)) => &e.source_info,
        }
    }
}

/// Named fields, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct MapNode {
    pub fields: Vec<MapField>,
    pub source_info: SourceInfo,
}

impl MapNode {
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.node)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapField {
    pub name: String,
    pub node: SchemaNode,
}

/// Homogeneous sequence; every element is checked against `element`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListNode {
    pub element: Box<SchemaNode>,
    pub source_info: SourceInfo,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LeafNode {
    Builtin {
        builtin: Builtin,
        source_info: SourceInfo,
    },
    Enum(EnumNode),
}

/// Closed set of string choices. Duplicates are dropped, first occurrence wins.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumNode {
    pub choices: Vec<String>,
    pub source_info: SourceInfo,
}

impl EnumNode {
    pub fn new(choices: impl IntoIterator<Item = String>, source_info: SourceInfo) -> Self {
        let mut unique: Vec<String> = Vec::new();
        for choice in choices {
            if !unique.contains(&choice) {
                unique.push(choice);
            }
        }
        Self {
            choices: unique,
            source_info,
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.choices.iter().any(|c| c == value)
    }
}

/// Scalar builtin kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    String,
    Int,
    Uint,
    Int64,
    Uint64,
    Bool,
}

impl Builtin {
    pub const ALL: [Builtin; 6] = [
        Builtin::String,
        Builtin::Int,
        Builtin::Uint,
        Builtin::Int64,
        Builtin::Uint64,
        Builtin::Bool,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }

    /// The name used in grammar documents.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::String => "string",
            Builtin::Int => "int",
            Builtin::Uint => "uint",
            Builtin::Int64 => "int64",
            Builtin::Uint64 => "uint64",
            Builtin::Bool => "bool",
        }
    }

    /// The Rust type a binding uses for this builtin.
    pub fn rust_type(self) -> &'static str {
        match self {
            Builtin::String => "String",
            Builtin::Int => "i32",
            Builtin::Uint => "u32",
            Builtin::Int64 => "i64",
            Builtin::Uint64 => "u64",
            Builtin::Bool => "bool",
        }
    }

    /// Inclusive integer range, or `None` for non-integer kinds.
    pub fn integer_range(self) -> Option<(i128, i128)> {
        match self {
            Builtin::Int => Some((i32::MIN.into(), i32::MAX.into())),
            Builtin::Uint => Some((0, u32::MAX.into())),
            Builtin::Int64 => Some((i64::MIN.into(), i64::MAX.into())),
            Builtin::Uint64 => Some((0, u64::MAX.into())),
            Builtin::String | Builtin::Bool => None,
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names_round_trip() {
        for builtin in Builtin::ALL {
            assert_eq!(Builtin::from_name(builtin.name()), Some(builtin));
        }
        assert_eq!(Builtin::from_name("float"), None);
        assert_eq!(Builtin::from_name("enum"), None);
    }

    #[test]
    fn test_enum_choices_deduplicated_in_order() {
        let e = EnumNode::new(
            ["b", "a", "b", "c", "a"].map(String::from),
            SourceInfo::default(),
        );
        assert_eq!(e.choices, vec!["b", "a", "c"]);
        assert!(e.contains("c"));
        assert!(!e.contains("d"));
    }

    #[test]
    fn test_integer_ranges() {
        assert_eq!(Builtin::Uint.integer_range(), Some((0, 4_294_967_295)));
        assert_eq!(Builtin::Bool.integer_range(), None);
    }
}
