//! # yavl-yaml
//!
//! The in-memory document tree shared by the grammar validator and the code
//! generator.
//!
//! `YamlWithSourceInfo` wraps a `yaml-rust2::Yaml` value together with a
//! parallel tree of source locations, so validation errors can point back at
//! the line and column of the offending node while generated readers keep
//! working on the plain `Yaml` value.
//!
//! ## Example
//!
//! ```rust
//! use yavl_yaml::{parse, NodeKind};
//!
//! let doc = parse("name: widget\nsizes: [1, 2]").unwrap();
//! assert_eq!(doc.kind(), NodeKind::Mapping);
//! let sizes = doc.get_hash_value("sizes").unwrap();
//! assert_eq!(sizes.len(), 2);
//! ```

mod emitter;
mod error;
mod kind;
mod parser;
mod scalar;
mod source_info;
mod yaml_with_source_info;

pub use emitter::emit;
pub use error::{Error, Result};
pub use kind::NodeKind;
pub use parser::{parse, parse_file};
pub use scalar::{describe, parse_bool_word, scalar_text};
pub use source_info::SourceInfo;
pub use yaml_with_source_info::{YamlHashEntry, YamlWithSourceInfo};

pub use yaml_rust2::Yaml;
