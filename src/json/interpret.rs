use serde_json::Value;

use crate::json::{FromJson, InterpretError, Object, Result};

/// View a whole document as `T`, failing with [`InterpretError::Malformed`].
///
/// Used to assert the top-level shape before key lookups begin.
pub fn interpret_root<'a, T: FromJson<'a>>(root: &'a Value) -> Result<T> {
	T::from_json(root).ok_or(InterpretError::Malformed)
}

/// Whether `dictionary` holds an entry for `key`.
///
/// Membership only: a key bound to JSON `null` is present.
pub fn have(key: &str, dictionary: &Object) -> bool {
	dictionary.contains_key(key)
}

/// Extract the value at `key` as `T`.
///
/// Fails with [`InterpretError::Missing`] when the key is absent and
/// [`InterpretError::WrongType`] when the stored value has another shape.
pub fn interpret<'a, T: FromJson<'a>>(key: &str, dictionary: &'a Object) -> Result<T> {
	let Some(abstract_value) = dictionary.get(key) else {
		return Err(InterpretError::missing(key));
	};

	T::from_json(abstract_value).ok_or_else(|| InterpretError::wrong_type(key))
}

/// Extract the value at `key` as `T`, then validate or transform it.
///
/// Extraction failures from [`interpret`] propagate unchanged. A converter
/// returning `None` fails with [`InterpretError::Unreadable`]; see
/// [`Converter`](crate::json::Converter) for the convention.
pub fn interpret_with<'a, T, U, F>(key: &str, dictionary: &'a Object, converter: F) -> Result<U>
where
	T: FromJson<'a>,
	F: FnOnce(T) -> Option<U>,
{
	let raw = interpret::<T>(key, dictionary)?;
	converter(raw).ok_or_else(|| InterpretError::unreadable(key))
}

/// Extract the value at `key` as `T` when the key is present.
///
/// Absent keys yield `Ok(None)`; present keys behave as [`interpret`].
pub fn interpret_optional<'a, T: FromJson<'a>>(key: &str, dictionary: &'a Object) -> Result<Option<T>> {
	if !have(key, dictionary) {
		return Ok(None);
	}

	interpret(key, dictionary).map(Some)
}
