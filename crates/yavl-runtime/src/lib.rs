//! # yavl-runtime
//!
//! Conversion layer between `yaml_rust2::Yaml` trees and typed values.
//!
//! Generated bindings implement [`FromYaml`] and [`ToYaml`] for their types and
//! delegate every field to the implementations in this crate, so any field
//! type built from the supported shapes (scalars, `Option`, `Vec`, arrays,
//! tuples, sets and maps) works without the generator knowing about it.
//!
//! ```rust
//! use yavl_runtime::{FromYaml, ToYaml, Yaml};
//!
//! let node = Yaml::Array(vec![Yaml::Integer(1), Yaml::Integer(2)]);
//! let pair: [u8; 2] = FromYaml::from_yaml(&node).unwrap();
//! assert_eq!(pair, [1, 2]);
//! assert_eq!(pair.to_yaml(), node);
//! ```

mod convert;
mod error;
mod fields;
mod symbols;

pub use convert::{FromYaml, ToYaml};
pub use error::{ConversionError, Result};
pub use fields::{MapWriter, check_keys, read_field};
pub use symbols::{SymbolTable, ValidationOutcome, Validator, validate};

pub use yaml_rust2::Yaml;
