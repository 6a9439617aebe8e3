//! Node-kind introspection shared by validators and generated readers.

use yaml_rust2::Yaml;

/// The shape of a document node.
///
/// `Undefined` is what a lookup of an absent mapping key yields
/// (`Yaml::BadValue`), as opposed to an explicit `~`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Undefined,
    Null,
    Scalar,
    Sequence,
    Mapping,
}

impl NodeKind {
    pub fn of(yaml: &Yaml) -> Self {
        match yaml {
            Yaml::BadValue => NodeKind::Undefined,
            Yaml::Null => NodeKind::Null,
            Yaml::Array(_) => NodeKind::Sequence,
            Yaml::Hash(_) => NodeKind::Mapping,
            Yaml::Real(_) | Yaml::Integer(_) | Yaml::String(_) | Yaml::Boolean(_) => {
                NodeKind::Scalar
            }
            // The tree builder never produces aliases; treat one as missing data.
            Yaml::Alias(_) => NodeKind::Undefined,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Undefined => "undefined",
            NodeKind::Null => "null",
            NodeKind::Scalar => "scalar",
            NodeKind::Sequence => "sequence",
            NodeKind::Mapping => "mapping",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
