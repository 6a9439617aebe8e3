//! Name-keyed dispatch over generated types.

use crate::convert::FromYaml;
use indexmap::IndexMap;
use yaml_rust2::Yaml;

/// `(ok, message)`; the message is set only when a reader reported an error.
pub type ValidationOutcome = (bool, Option<String>);

/// Round-trip validation entry point stored in a [`SymbolTable`].
pub type Validator = fn(&Yaml) -> ValidationOutcome;

/// Validate `node` by attempting to read it as `T`.
pub fn validate<T: FromYaml>(node: &Yaml) -> ValidationOutcome {
    match T::from_yaml(node) {
        Ok(_) => (true, None),
        Err(err) => (false, Some(err.to_string())),
    }
}

/// Ordered map from type name to validator, built once by generated code.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    validators: IndexMap<&'static str, Validator>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, type_name: &'static str, validator: Validator) -> Self {
        self.validators.insert(type_name, validator);
        self
    }

    /// Registered type names, in registration order.
    pub fn get_types(&self) -> Vec<&'static str> {
        self.validators.keys().copied().collect()
    }

    /// Validate `node` as `type_name`. Unknown names give `(false, None)`.
    pub fn validate_simple(&self, node: &Yaml, type_name: &str) -> ValidationOutcome {
        match self.validators.get(type_name) {
            Some(validator) => validator(node),
            None => (false, None),
        }
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.validators.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}
