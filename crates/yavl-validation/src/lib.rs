// YAML grammar validation
//
// This crate parses the plain `map:` / `list:` / leaf grammar dialect into a
// `SchemaNode` tree and checks documents against it, reporting every
// violation found in a single pass.

pub mod diagnostic;
pub mod error;
pub mod grammar;
pub mod validator;

pub use diagnostic::{SourceRange, ValidationDiagnostic};
pub use error::{
    DocumentPath, GrammarPath, PathSegment, SchemaError, SchemaResult, ValidationError,
    ValidationErrorKind,
};
pub use grammar::{Builtin, EnumNode, Grammar, LeafNode, ListNode, MapField, MapNode, SchemaNode};
pub use validator::{Validation, ValidationContext, validate};
