use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, InterpretError>;

/// Errors produced while interpreting a decoded JSON value.
///
/// The set is closed: every extraction either succeeds or fails with exactly
/// one of these variants.
#[derive(Debug, Error)]
pub enum InterpretError {
	/// The upstream parser rejected the raw document.
	#[error("invalid JSON syntax")]
	Syntax(#[source] serde_json::Error),
	/// Root value did not have the requested shape.
	#[error("unexpected JSON structure")]
	Malformed,
	/// Key is absent from the mapping.
	#[error("missing JSON [{key}]")]
	Missing {
		/// Requested key.
		key: String,
	},
	/// Key is present but its value has another shape.
	#[error("wrongly typed JSON [{key}]")]
	WrongType {
		/// Requested key.
		key: String,
	},
	/// Converter returned no value for the extracted field.
	#[error("unreadable JSON [{key}]")]
	Unreadable {
		/// Requested key.
		key: String,
	},
}

/// Fieldless discriminant of [`InterpretError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// See [`InterpretError::Syntax`].
	Syntax,
	/// See [`InterpretError::Malformed`].
	Malformed,
	/// See [`InterpretError::Missing`].
	Missing,
	/// See [`InterpretError::WrongType`].
	WrongType,
	/// See [`InterpretError::Unreadable`].
	Unreadable,
}

impl ErrorKind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Syntax => "syntax",
			Self::Malformed => "malformed",
			Self::Missing => "missing",
			Self::WrongType => "wrong_type",
			Self::Unreadable => "unreadable",
		}
	}
}

impl InterpretError {
	pub(crate) fn missing(key: &str) -> Self {
		Self::Missing { key: key.to_owned() }
	}

	pub(crate) fn wrong_type(key: &str) -> Self {
		Self::WrongType { key: key.to_owned() }
	}

	pub(crate) fn unreadable(key: &str) -> Self {
		Self::Unreadable { key: key.to_owned() }
	}

	/// Discriminant of this error.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Syntax(_) => ErrorKind::Syntax,
			Self::Malformed => ErrorKind::Malformed,
			Self::Missing { .. } => ErrorKind::Missing,
			Self::WrongType { .. } => ErrorKind::WrongType,
			Self::Unreadable { .. } => ErrorKind::Unreadable,
		}
	}

	/// Offending key for key-based failures.
	pub fn key(&self) -> Option<&str> {
		match self {
			Self::Missing { key } | Self::WrongType { key } | Self::Unreadable { key } => Some(key),
			Self::Syntax(_) | Self::Malformed => None,
		}
	}
}

impl From<serde_json::Error> for InterpretError {
	fn from(err: serde_json::Error) -> Self {
		Self::Syntax(err)
	}
}
