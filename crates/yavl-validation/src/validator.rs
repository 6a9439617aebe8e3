// Grammar validation engine

use crate::error::{DocumentPath, GrammarPath, ValidationError, ValidationErrorKind};
use crate::grammar::{Builtin, EnumNode, LeafNode, ListNode, MapNode, SchemaNode};
use yaml_rust2::Yaml;
use yavl_yaml::{NodeKind, YamlWithSourceInfo, parse_bool_word};

/// Outcome of checking one document.
///
/// `ok` is false exactly when `errors` is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Validation {
    pub ok: bool,
    pub errors: Vec<ValidationError>,
}

/// Validates a document against a grammar node.
///
/// Every branch is explored; the result lists every violation in traversal
/// order rather than stopping at the first.
pub fn validate(schema: &SchemaNode, document: &YamlWithSourceInfo) -> Validation {
    tracing::debug!(kind = %document.kind(), "validating document");
    let mut context = ValidationContext::new();
    let ok = validate_node(schema, document, &mut context);
    let errors = context.into_errors();
    tracing::debug!(ok, errors = errors.len(), "validation finished");
    Validation { ok, errors }
}

/// Validation context tracks the two traversal paths and collected errors
pub struct ValidationContext {
    grammar_path: GrammarPath,
    document_path: DocumentPath,
    errors: Vec<ValidationError>,
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationContext {
    pub fn new() -> Self {
        Self {
            grammar_path: GrammarPath::new(),
            document_path: DocumentPath::new(),
            errors: Vec::new(),
        }
    }

    /// Record an error at the current position
    pub fn add_error(&mut self, kind: ValidationErrorKind, node: &YamlWithSourceInfo) {
        tracing::trace!(
            document_path = %self.document_path,
            grammar_path = %self.grammar_path,
            "{}",
            kind.message()
        );
        self.errors.push(ValidationError::new(
            kind,
            self.grammar_path.clone(),
            self.document_path.clone(),
            node.source_info.clone(),
        ));
    }

    /// Execute a function with a grammar path step pushed
    pub fn with_grammar_path<F, R>(&mut self, segment: impl Into<String>, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        self.grammar_path.push(segment);
        let result = f(self);
        self.grammar_path.pop();
        result
    }

    /// Execute a function with a document key pushed
    pub fn with_document_key<F, R>(&mut self, key: &str, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        self.document_path.push_key(key);
        let result = f(self);
        self.document_path.pop();
        result
    }

    /// Execute a function with a document index pushed
    pub fn with_document_index<F, R>(&mut self, index: usize, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        self.document_path.push_index(index);
        let result = f(self);
        self.document_path.pop();
        result
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

/// Main validation dispatcher
fn validate_node(
    schema: &SchemaNode,
    document: &YamlWithSourceInfo,
    context: &mut ValidationContext,
) -> bool {
    match schema {
        SchemaNode::Map(map) => {
            context.with_grammar_path("map", |ctx| validate_map(map, document, ctx))
        }
        SchemaNode::List(list) => {
            context.with_grammar_path("list", |ctx| validate_list(list, document, ctx))
        }
        SchemaNode::Leaf(leaf) => validate_leaf(leaf, document, context),
    }
}

fn validate_map(map: &MapNode, document: &YamlWithSourceInfo, context: &mut ValidationContext) -> bool {
    if !document.is_hash() {
        context.add_error(
            ValidationErrorKind::TypeMismatch {
                expected: NodeKind::Mapping.to_string(),
                got: document.kind().to_string(),
            },
            document,
        );
        return false;
    }

    // Undeclared document keys are tolerated here.
    let mut ok = true;
    for field in &map.fields {
        match document.get_hash_value(&field.name) {
            None => {
                context.add_error(
                    ValidationErrorKind::MissingKey {
                        key: field.name.clone(),
                    },
                    document,
                );
                ok = false;
            }
            Some(value) => {
                let field_ok = context.with_grammar_path(field.name.as_str(), |ctx| {
                    ctx.with_document_key(&field.name, |ctx| validate_node(&field.node, value, ctx))
                });
                ok &= field_ok;
            }
        }
    }
    ok
}

fn validate_list(
    list: &ListNode,
    document: &YamlWithSourceInfo,
    context: &mut ValidationContext,
) -> bool {
    let Some(items) = document.as_array() else {
        context.add_error(
            ValidationErrorKind::TypeMismatch {
                expected: NodeKind::Sequence.to_string(),
                got: document.kind().to_string(),
            },
            document,
        );
        return false;
    };

    let mut ok = true;
    for (index, item) in items.iter().enumerate() {
        let item_ok =
            context.with_document_index(index, |ctx| validate_node(&list.element, item, ctx));
        ok &= item_ok;
    }
    ok
}

fn validate_leaf(
    leaf: &LeafNode,
    document: &YamlWithSourceInfo,
    context: &mut ValidationContext,
) -> bool {
    match leaf {
        LeafNode::Builtin { builtin, .. } => validate_builtin(*builtin, document, context),
        LeafNode::Enum(e) => validate_enum(e, document, context),
    }
}

fn validate_builtin(
    builtin: Builtin,
    document: &YamlWithSourceInfo,
    context: &mut ValidationContext,
) -> bool {
    if converts_to(builtin, &document.yaml) {
        return true;
    }
    context.add_error(
        ValidationErrorKind::ConversionFailed {
            value: document.scalar_text(),
            got: document.kind().to_string(),
            expected: builtin.name().to_string(),
        },
        document,
    );
    false
}

fn validate_enum(e: &EnumNode, document: &YamlWithSourceInfo, context: &mut ValidationContext) -> bool {
    let Some(value) = document.scalar_text() else {
        context.add_error(
            ValidationErrorKind::TypeMismatch {
                expected: NodeKind::Scalar.to_string(),
                got: document.kind().to_string(),
            },
            document,
        );
        return false;
    };

    if e.contains(&value) {
        return true;
    }
    context.add_error(
        ValidationErrorKind::InvalidEnumValue {
            value,
            allowed: e.choices.clone(),
        },
        document,
    );
    false
}

/// Whether a scalar is representable as `builtin`.
///
/// Strings holding a number or a boolean word convert the same way an
/// unquoted scalar would.
pub fn converts_to(builtin: Builtin, yaml: &Yaml) -> bool {
    match builtin {
        Builtin::String => matches!(
            yaml,
            Yaml::String(_) | Yaml::Integer(_) | Yaml::Real(_) | Yaml::Boolean(_)
        ),
        Builtin::Bool => match yaml {
            Yaml::Boolean(_) => true,
            Yaml::String(s) => parse_bool_word(s).is_some(),
            _ => false,
        },
        Builtin::Int | Builtin::Uint | Builtin::Int64 | Builtin::Uint64 => {
            let Some((min, max)) = builtin.integer_range() else {
                return false;
            };
            let value = match yaml {
                Yaml::Integer(i) => Some(i128::from(*i)),
                Yaml::String(s) => s.trim().parse::<i128>().ok(),
                _ => None,
            };
            value.is_some_and(|v| (min..=max).contains(&v))
        }
    }
}
