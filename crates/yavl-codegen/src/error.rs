//! Errors raised while reading specs and generating code.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenerateError>;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// A type entry is neither a mapping of fields nor a list of choices
    #[error("Bad schema shape for type \"{type_name}\": {message}")]
    BadSchemaShape { type_name: String, message: String },

    /// An enum lists the same choice twice
    #[error("Duplicate choice \"{choice}\" in enum \"{type_name}\"")]
    DuplicateChoice { type_name: String, choice: String },

    /// A type, field or choice name cannot be used as a Rust identifier
    #[error("\"{name}\" is not a valid identifier")]
    InvalidIdentifier { name: String },

    /// Two different binder types were synthesized with the same name
    #[error("Type name \"{name}\" is synthesized for two different definitions")]
    DuplicateTypeName { name: String },

    /// A synthesized binder type would shadow a type generated fields use
    #[error("Type name \"{name}\" would shadow a type used by generated fields")]
    ReservedTypeName { name: String },

    /// The spec names a custom code generator that has not been registered
    #[error("Unknown custom code generator \"{module}.{name}\"")]
    UnknownCodeGenerator { module: String, name: String },

    /// The spec document does not have the expected top-level keys or shapes
    #[error("Invalid spec: {0}")]
    Spec(#[from] yavl_runtime::ConversionError),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] yavl_yaml::Error),

    #[error("Invalid grammar: {0}")]
    Schema(#[from] yavl_validation::SchemaError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GenerateError {
    pub(crate) fn bad_shape(type_name: &str, message: impl Into<String>) -> Self {
        GenerateError::BadSchemaShape {
            type_name: type_name.to_string(),
            message: message.into(),
        }
    }
}
