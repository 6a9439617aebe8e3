//! Typed bindings generated by `yavl-codegen` at build time.
//!
//! - [`pixel`] comes from the type spec `specs/pixel.yaml`.
//! - [`service`] is bound from the grammar `grammars/service.yaml`.
//!
//! Read a document with [`yavl_runtime::FromYaml`] and write it back with
//! [`yavl_runtime::ToYaml`]:
//!
//! ```
//! use yavl_bindings::pixel::{Color, Pixel};
//! use yavl_runtime::{FromYaml, ToYaml};
//!
//! let doc = yavl_yaml::parse("color: red\nposition: [1, 2]\n").unwrap();
//! let pixel = Pixel::from_yaml(&doc.yaml).unwrap();
//! assert_eq!(pixel.color, Color::red);
//! assert_eq!(Pixel::from_yaml(&pixel.to_yaml()).unwrap(), pixel);
//! ```

pub mod pixel {
    include!(concat!(env!("OUT_DIR"), "/pixel.rs"));
}

pub mod service {
    include!(concat!(env!("OUT_DIR"), "/service.rs"));
}
