use crate::json::{ErrorKind, InterpretError};

/// Display-text strategy keyed by error kind.
pub trait MessageCatalog {
	/// Render the message for `kind`, templated with `key` when present.
	fn message(&self, kind: ErrorKind, key: Option<&str>) -> String;
}

/// Built-in English messages; these match [`InterpretError`]'s `Display`.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl MessageCatalog for English {
	fn message(&self, kind: ErrorKind, key: Option<&str>) -> String {
		let key = key.unwrap_or_default();
		match kind {
			ErrorKind::Syntax => "invalid JSON syntax".to_owned(),
			ErrorKind::Malformed => "unexpected JSON structure".to_owned(),
			ErrorKind::Missing => format!("missing JSON [{key}]"),
			ErrorKind::WrongType => format!("wrongly typed JSON [{key}]"),
			ErrorKind::Unreadable => format!("unreadable JSON [{key}]"),
		}
	}
}

impl InterpretError {
	/// Render this error through `catalog`.
	pub fn describe(&self, catalog: &dyn MessageCatalog) -> String {
		catalog.message(self.kind(), self.key())
	}
}
