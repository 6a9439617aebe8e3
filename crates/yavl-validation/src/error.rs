// Error types for grammar parsing and document validation

use std::fmt;
use thiserror::Error;
use yavl_yaml::SourceInfo;

/// Errors that can occur while reading a grammar document
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The node is neither `map:`, `list:` nor a well-formed leaf spec
    #[error("Bad schema shape at {location}: {message}")]
    BadSchemaShape {
        message: String,
        location: SourceInfo,
    },

    /// A leaf names a kind that is not one of the recognized builtins
    #[error("Unknown builtin type '{name}' at {location}")]
    UnknownBuiltin { name: String, location: SourceInfo },

    /// The grammar text itself could not be parsed
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] yavl_yaml::Error),
}

impl SchemaError {
    pub(crate) fn bad_shape(message: impl Into<String>, location: &SourceInfo) -> Self {
        SchemaError::BadSchemaShape {
            message: message.into(),
            location: location.clone(),
        }
    }
}

/// Result type for grammar parsing operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Structured validation error kinds
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ValidationErrorKind {
    /// The document node has the wrong shape for a `map:` or `list:` grammar
    TypeMismatch { expected: String, got: String },

    /// A key declared by a `map:` grammar is absent from the document
    MissingKey { key: String },

    /// A scalar could not be converted to the declared builtin
    ConversionFailed {
        value: Option<String>,
        got: String,
        expected: String,
    },

    /// A scalar is not one of an enum's choices
    InvalidEnumValue { value: String, allowed: Vec<String> },
}

impl ValidationErrorKind {
    /// Get the error code for this error kind
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationErrorKind::MissingKey { .. } => "Y-1-10",
            ValidationErrorKind::TypeMismatch { .. } => "Y-1-11",
            ValidationErrorKind::InvalidEnumValue { .. } => "Y-1-12",
            ValidationErrorKind::ConversionFailed { .. } => "Y-1-13",
        }
    }

    /// Format a human-readable message from this error kind
    pub fn message(&self) -> String {
        match self {
            ValidationErrorKind::TypeMismatch { expected, got } => {
                format!("Expected {}, got {}", expected, got)
            }
            ValidationErrorKind::MissingKey { key } => {
                format!("Missing required key '{}'", key)
            }
            ValidationErrorKind::ConversionFailed {
                value: Some(value),
                got,
                expected,
            } => {
                format!(
                    "Unable to convert {} '{}' to '{}'",
                    got, value, expected
                )
            }
            ValidationErrorKind::ConversionFailed {
                value: None,
                got,
                expected,
            } => {
                format!("Unable to convert '{}' to '{}'", got, expected)
            }
            ValidationErrorKind::InvalidEnumValue { value, allowed } => {
                format!(
                    "Value must be one of: {}, got '{}'",
                    allowed.join(", "),
                    value
                )
            }
        }
    }
}

/// A single grammar violation with both traversal paths
#[derive(Debug, Clone, PartialEq, Error)]
pub struct ValidationError {
    /// The structured error kind
    pub kind: ValidationErrorKind,
    /// Steps taken through the grammar (e.g. `map.servers.list.map.port`)
    pub grammar_path: GrammarPath,
    /// Position in the document (e.g. `servers[0].port`)
    pub document_path: DocumentPath,
    /// Where the offending node starts
    pub location: SourceInfo,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (at {}, grammar {})",
            self.location,
            self.kind.message(),
            self.document_path,
            self.grammar_path
        )
    }
}

impl ValidationError {
    pub fn new(
        kind: ValidationErrorKind,
        grammar_path: GrammarPath,
        document_path: DocumentPath,
        location: SourceInfo,
    ) -> Self {
        Self {
            kind,
            grammar_path,
            document_path,
            location,
        }
    }

    /// The reason string
    pub fn reason(&self) -> String {
        self.kind.message()
    }

    pub fn error_code(&self) -> &'static str {
        self.kind.error_code()
    }
}

/// Document path (e.g. `servers[0].port`)
///
/// Serializes as the plain list of segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct DocumentPath {
    segments: Vec<PathSegment>,
}

impl DocumentPath {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Push a key segment onto the path
    pub fn push_key(&mut self, key: impl Into<String>) {
        self.segments.push(PathSegment::Key(key.into()));
    }

    /// Push an index segment onto the path
    pub fn push_index(&mut self, index: usize) {
        self.segments.push(PathSegment::Index(index));
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "(root)");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            // Indices attach directly to the preceding key
            if i > 0 && matches!(segment, PathSegment::Key(_)) {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// Grammar path (e.g. `map.servers.list`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrammarPath {
    segments: Vec<String>,
}

impl GrammarPath {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for GrammarPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "(root)")
        } else {
            write!(f, "{}", self.segments.join("."))
        }
    }
}

/// A segment in a document path
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum PathSegment {
    /// Mapping key
    Key(String),
    /// Sequence index
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "{}", key),
            PathSegment::Index(index) => write!(f, "[{}]", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_path_display() {
        let mut path = DocumentPath::new();
        assert_eq!(path.to_string(), "(root)");

        path.push_key("a");
        path.push_key("b");
        assert_eq!(path.to_string(), "a.b");

        path.push_index(0);
        path.push_key("c");
        assert_eq!(path.to_string(), "a.b[0].c");
    }

    #[test]
    fn test_document_path_leading_index() {
        let mut path = DocumentPath::new();
        path.push_index(1);
        assert_eq!(path.to_string(), "[1]");
        path.push_index(2);
        assert_eq!(path.to_string(), "[1][2]");
    }

    #[test]
    fn test_grammar_path_display() {
        let mut path = GrammarPath::new();
        assert_eq!(path.to_string(), "(root)");

        path.push("map");
        path.push("servers");
        path.push("list");
        assert_eq!(path.to_string(), "map.servers.list");
        assert_eq!(path.pop().as_deref(), Some("list"));
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let kinds = [
            ValidationErrorKind::MissingKey { key: "a".into() },
            ValidationErrorKind::TypeMismatch {
                expected: "mapping".into(),
                got: "scalar".into(),
            },
            ValidationErrorKind::InvalidEnumValue {
                value: "D".into(),
                allowed: vec!["A".into()],
            },
            ValidationErrorKind::ConversionFailed {
                value: None,
                got: "sequence".into(),
                expected: "int".into(),
            },
        ];
        let mut codes: Vec<_> = kinds.iter().map(|k| k.error_code()).collect();
        codes.dedup();
        assert_eq!(codes.len(), 4);
    }

    #[test]
    fn test_conversion_message_names_both_types() {
        let kind = ValidationErrorKind::ConversionFailed {
            value: Some("abc".into()),
            got: "scalar".into(),
            expected: "uint".into(),
        };
        assert_eq!(kind.message(), "Unable to convert scalar 'abc' to 'uint'");
    }
}
