//! Errors raised while converting documents to typed values.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConversionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The node cannot be represented as the target type
    #[error("Bad conversion from value \"{value}\" to type \"{type_name}\"")]
    BadConversion { value: String, type_name: String },

    /// A declared key is absent
    #[error("Missing key \"{key}\" during conversion to type \"{type_name}\"")]
    MissingKey { key: String, type_name: String },

    /// The document has a key the type does not declare
    #[error("Superfluous key \"{key}\" during conversion to type \"{type_name}\"")]
    SuperfluousKey { key: String, type_name: String },

    /// Fixed-size sequence of the wrong length
    #[error("Invalid sequence length \"{got}\", expected \"{expected}\"")]
    InvalidSequenceLength { expected: usize, got: usize },

    #[error("Duplicate key in set")]
    DuplicateSetItem,

    #[error("Duplicate key in map")]
    DuplicateMapItem,
}

impl ConversionError {
    pub fn bad_conversion(node: &yaml_rust2::Yaml, type_name: impl Into<String>) -> Self {
        ConversionError::BadConversion {
            value: yavl_yaml::describe(node),
            type_name: type_name.into(),
        }
    }
}
