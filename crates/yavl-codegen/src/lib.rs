//! # yavl-codegen
//!
//! Generates Rust data bindings (types plus `FromYaml`/`ToYaml` impls) from
//! two schema dialects:
//!
//! - **Type specs**: a `Types` mapping where each entry is either a struct
//!   (`field: rust type`) or an enum (a list of choices). See [`generate`].
//! - **Grammars**: the nested `map:` / `list:` dialect, bound to a tree of
//!   types rooted at a caller-chosen name. See [`BinderGenerator`].
//!
//! Generated files depend on the `yavl-runtime` crate.
//!
//! ```rust
//! use yavl_codegen::{GeneratorOptions, Spec, generate};
//!
//! let spec = Spec::parse("Types:\n  Color: [red, green]\n", None).unwrap();
//! let mut out = Vec::new();
//! generate(&spec, &GeneratorOptions::default(), &mut out).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("pub enum Color {"));
//! ```

pub mod binder;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod naming;
pub mod options;
pub mod registry;
pub mod spec;
pub mod writer;

pub use binder::{BinderGenerator, DataNodeDefinition, DataNodeKind, EnumDefinition};
pub use emitter::{DefaultEmitter, EmitterRegistry, TypeEmitter};
pub use error::{GenerateError, Result};
pub use generator::{generate, generate_with};
pub use options::GeneratorOptions;
pub use registry::{EnumChoice, FieldDef, GeneratedType, TypeKind, TypeRegistry};
pub use spec::{CustomCodeGenerator, Spec};
pub use writer::CodeWriter;
