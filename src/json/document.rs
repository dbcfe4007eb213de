use std::io::Read;

use serde_json::Value;

use crate::json::Result;

/// Decode JSON text; parser failures become [`InterpretError::Syntax`](crate::json::InterpretError::Syntax).
pub fn from_str(input: &str) -> Result<Value> {
	Ok(serde_json::from_str(input)?)
}

/// Decode JSON bytes.
pub fn from_slice(input: &[u8]) -> Result<Value> {
	Ok(serde_json::from_slice(input)?)
}

/// Decode JSON from a reader. IO failures are reported as `Syntax` as well,
/// since `serde_json` does not separate them from the parse.
pub fn from_reader<R: Read>(reader: R) -> Result<Value> {
	Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
	use std::error::Error as _;
	use std::io::{self, Read};

	use super::{from_reader, from_slice, from_str};
	use crate::json::ErrorKind;

	struct BrokenPipe;

	impl Read for BrokenPipe {
		fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
			Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
		}
	}

	#[test]
	fn valid_text_decodes() {
		let value = from_str(r#"{"userId": 1}"#).expect("decodes");
		assert_eq!(value["userId"], 1);
		assert!(from_slice(b"[true]").expect("decodes").is_array());
		assert!(from_reader(&b"null"[..]).expect("decodes").is_null());
	}

	#[test]
	fn parser_failure_maps_to_syntax() {
		for input in [r#"{"a":}"#, "", "[1, 2"] {
			let err = from_str(input).unwrap_err();
			assert_eq!(err.kind(), ErrorKind::Syntax, "input {input:?}");
		}
	}

	#[test]
	fn reader_failure_maps_to_syntax() {
		let err = from_reader(BrokenPipe).unwrap_err();

		assert_eq!(err.kind(), ErrorKind::Syntax);
		let source = err.source().and_then(|source| source.downcast_ref::<serde_json::Error>()).expect("parser error source");
		assert!(source.is_io(), "expected io classification, got {source}");
	}
}
