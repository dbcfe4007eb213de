//! Stock converters for [`interpret_with`](crate::json::interpret_with).

use std::ops::RangeBounds;
use std::str::FromStr;

use url::{ParseError, Url};

/// Fallible validation or transformation applied to an extracted value.
///
/// Returning `None` signals a semantic failure and surfaces as
/// [`InterpretError::Unreadable`](crate::json::InterpretError::Unreadable).
/// Any `FnOnce(T) -> Option<U>` qualifies, so `Option`-returning
/// constructors work without adaptation.
pub trait Converter<T, U>: FnOnce(T) -> Option<U> {}

impl<T, U, F> Converter<T, U> for F where F: FnOnce(T) -> Option<U> {}

/// Identity converter that rejects values outside `range`.
pub fn in_range<T, R>(range: R) -> impl Converter<T, T>
where
	T: PartialOrd,
	R: RangeBounds<T>,
{
	move |value: T| range.contains(&value).then_some(value)
}

/// Parse an absolute URL.
pub fn url(raw: &str) -> Option<Url> {
	Url::parse(raw).ok()
}

/// Base used only to check that a relative reference resolves.
const RELATIVE_BASE: &str = "http://reference.invalid/";

/// URL reference: absolute, or relative to a base chosen by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlReference {
	/// Reference with a scheme.
	Absolute(Url),
	/// Reference without a scheme, kept as written.
	Relative(String),
}

impl std::fmt::Display for UrlReference {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Absolute(url) => f.write_str(url.as_str()),
			Self::Relative(raw) => f.write_str(raw),
		}
	}
}

/// Parse an absolute or relative URL reference.
///
/// Rejects empty input, characters outside the URI character set (spaces
/// included), and malformed percent escapes.
pub fn url_reference(raw: &str) -> Option<UrlReference> {
	if raw.is_empty() || !has_uri_syntax(raw) {
		return None;
	}

	match Url::parse(raw) {
		Ok(url) => Some(UrlReference::Absolute(url)),
		Err(ParseError::RelativeUrlWithoutBase) => {
			Url::parse(RELATIVE_BASE).ok()?.join(raw).ok()?;
			Some(UrlReference::Relative(raw.to_owned()))
		}
		Err(_) => None,
	}
}

fn has_uri_syntax(raw: &str) -> bool {
	let bytes = raw.as_bytes();
	let mut idx = 0_usize;
	while idx < bytes.len() {
		let byte = bytes[idx];
		if byte == b'%' {
			let escaped = bytes.get(idx + 1..idx + 3).is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
			if !escaped {
				return false;
			}
			idx += 3;
			continue;
		}
		if !(byte.is_ascii_alphanumeric() || b"-._~:/?#[]@!$&'()*+,;=".contains(&byte)) {
			return false;
		}
		idx += 1;
	}
	true
}

/// Parse through [`FromStr`], discarding the parse error.
pub fn parse<T: FromStr>(raw: &str) -> Option<T> {
	raw.parse().ok()
}

/// Reject empty strings.
pub fn non_empty(raw: &str) -> Option<&str> {
	(!raw.is_empty()).then_some(raw)
}

#[cfg(test)]
mod tests;
