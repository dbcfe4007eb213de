use serde_json::{Number, Value};

use crate::json::{Array, Object};

/// Typed view of a borrowed JSON value.
///
/// Each implementation accepts exactly one shape and never coerces between
/// shapes: a string is never a number, a float is never an integer, and an
/// integer that does not fit the target type is rejected.
pub trait FromJson<'a>: Sized {
	/// View `value` as `Self`, or `None` when the shape does not match.
	fn from_json(value: &'a Value) -> Option<Self>;
}

impl<'a> FromJson<'a> for &'a Value {
	fn from_json(value: &'a Value) -> Option<Self> {
		Some(value)
	}
}

impl<'a> FromJson<'a> for () {
	fn from_json(value: &'a Value) -> Option<Self> {
		value.is_null().then_some(())
	}
}

impl<'a> FromJson<'a> for bool {
	fn from_json(value: &'a Value) -> Option<Self> {
		value.as_bool()
	}
}

macro_rules! unsigned_views {
	($($ty:ty),*) => {
		$(
			impl<'a> FromJson<'a> for $ty {
				fn from_json(value: &'a Value) -> Option<Self> {
					value.as_u64().and_then(|raw| <$ty>::try_from(raw).ok())
				}
			}
		)*
	};
}

macro_rules! signed_views {
	($($ty:ty),*) => {
		$(
			impl<'a> FromJson<'a> for $ty {
				fn from_json(value: &'a Value) -> Option<Self> {
					value.as_i64().and_then(|raw| <$ty>::try_from(raw).ok())
				}
			}
		)*
	};
}

unsigned_views!(u8, u16, u32, u64, usize);
signed_views!(i8, i16, i32, i64, isize);

impl<'a> FromJson<'a> for f64 {
	fn from_json(value: &'a Value) -> Option<Self> {
		value.as_f64()
	}
}

impl<'a> FromJson<'a> for &'a Number {
	fn from_json(value: &'a Value) -> Option<Self> {
		match value {
			Value::Number(number) => Some(number),
			_ => None,
		}
	}
}

impl<'a> FromJson<'a> for &'a str {
	fn from_json(value: &'a Value) -> Option<Self> {
		value.as_str()
	}
}

impl<'a> FromJson<'a> for String {
	fn from_json(value: &'a Value) -> Option<Self> {
		value.as_str().map(str::to_owned)
	}
}

impl<'a> FromJson<'a> for &'a Array {
	fn from_json(value: &'a Value) -> Option<Self> {
		value.as_array()
	}
}

impl<'a> FromJson<'a> for &'a [Value] {
	fn from_json(value: &'a Value) -> Option<Self> {
		value.as_array().map(Vec::as_slice)
	}
}

impl<'a> FromJson<'a> for &'a Object {
	fn from_json(value: &'a Value) -> Option<Self> {
		value.as_object()
	}
}
