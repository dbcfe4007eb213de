use thiserror::Error;

use jsoninterp::json::{ErrorKind, InterpretError};

/// Failures surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CmdError {
	/// Reading the input document failed.
	#[error("io")]
	Io(#[from] std::io::Error),
	/// Interpreting the document failed.
	#[error(transparent)]
	Interpret(#[from] InterpretError),
	/// Flag combination cannot be applied.
	#[error("usage: {message}")]
	Usage {
		/// Human-readable explanation.
		message: String,
	},
	/// Output encoding failed.
	#[error("encode")]
	Encode(#[source] serde_json::Error),
}

impl CmdError {
	pub(crate) fn usage(message: impl Into<String>) -> Self {
		Self::Usage { message: message.into() }
	}

	/// Process exit code for this failure.
	pub fn exit_code(&self) -> i32 {
		match self {
			Self::Io(_) | Self::Usage { .. } | Self::Encode(_) => 1,
			Self::Interpret(err) => exit_code_for(err.kind()),
		}
	}
}

/// Exit code assigned to each interpretation failure kind.
pub fn exit_code_for(kind: ErrorKind) -> i32 {
	match kind {
		ErrorKind::Syntax => 3,
		ErrorKind::Malformed => 4,
		ErrorKind::Missing => 5,
		ErrorKind::WrongType => 6,
		ErrorKind::Unreadable => 7,
	}
}
