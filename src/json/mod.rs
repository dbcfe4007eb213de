pub mod convert;
mod document;
mod error;
mod interpret;
mod message;
mod shape;
mod view;

/// JSON key-value mapping.
pub type Object = serde_json::Map<String, serde_json::Value>;
/// JSON ordered sequence.
pub type Array = Vec<serde_json::Value>;

/// Converter convention shared by [`interpret_with`] call sites.
pub use convert::Converter;
/// Raw-text decoding boundary.
pub use document::{from_reader, from_slice, from_str};
/// Error and result aliases.
pub use error::{ErrorKind, InterpretError, Result};
/// Key-based and root extraction entry points.
pub use interpret::{have, interpret, interpret_optional, interpret_root, interpret_with};
/// Pluggable error display text.
pub use message::{English, MessageCatalog};
/// Runtime value shapes.
pub use shape::Shape;
/// Typed views over borrowed values.
pub use view::FromJson;
