use std::io::Read;
use std::path::Path;

use jsoninterp::json;
use serde_json::Value;

use crate::cmd::error::CmdError;

/// Read and decode a document from `path`, or stdin when `path` is `-`.
pub(crate) fn load_document(path: &Path) -> Result<Value, CmdError> {
	let bytes = if path == Path::new("-") {
		let mut buf = Vec::new();
		std::io::stdin().lock().read_to_end(&mut buf)?;
		buf
	} else {
		std::fs::read(path)?
	};

	tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded document");
	Ok(json::from_slice(&bytes)?)
}
