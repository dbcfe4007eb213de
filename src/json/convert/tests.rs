use std::ops::Bound;

use super::{UrlReference, in_range, non_empty, parse, url, url_reference};

#[test]
fn in_range_is_identity_inside_bounds() {
	assert_eq!(in_range(1_u64..=99)(1), Some(1));
	assert_eq!(in_range(1_u64..=99)(99), Some(99));
	assert_eq!(in_range(1_u64..=99)(150), None);
	assert_eq!(in_range(1_u64..=99)(0), None);
}

#[test]
fn in_range_accepts_open_bound_pairs() {
	let upper_only = (Bound::Unbounded, Bound::Included(2.5_f64));
	assert_eq!(in_range(upper_only)(-10.0), Some(-10.0));
	assert_eq!(in_range(upper_only)(2.75), None);
}

#[test]
fn url_requires_absolute_syntax() {
	let parsed = url("https://via.placeholder.com/150/92c952").expect("absolute url");
	assert_eq!(parsed.host_str(), Some("via.placeholder.com"));

	assert!(url("not a url!!").is_none());
	assert!(url("/relative/path").is_none());
}

#[test]
fn parse_and_non_empty() {
	assert_eq!(parse::<u16>("8080"), Some(8080));
	assert_eq!(parse::<u16>("eighty"), None);
	assert_eq!(non_empty("x"), Some("x"));
	assert_eq!(non_empty(""), None);
}

#[test]
fn url_reference_accepts_relative_forms() {
	assert_eq!(url_reference("images/a.png"), Some(UrlReference::Relative("images/a.png".to_owned())));
	assert_eq!(url_reference("/150/92c952?size=2"), Some(UrlReference::Relative("/150/92c952?size=2".to_owned())));
	assert_eq!(url_reference("a%20b"), Some(UrlReference::Relative("a%20b".to_owned())));

	let absolute = url_reference("https://via.placeholder.com/150/92c952").expect("absolute reference");
	assert!(matches!(&absolute, UrlReference::Absolute(url) if url.host_str() == Some("via.placeholder.com")));
	assert_eq!(absolute.to_string(), "https://via.placeholder.com/150/92c952");
}

#[test]
fn url_reference_rejects_unparseable_text() {
	for raw in ["not a url!!", "", "a b", "100%", "%zz", "tab\there", "caf\u{e9}"] {
		assert_eq!(url_reference(raw), None, "input {raw:?}");
	}
}
