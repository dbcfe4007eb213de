#![allow(missing_docs)]

use jsoninterp::json::{Array, ErrorKind, InterpretError, Object, convert, have, interpret, interpret_root, interpret_with};
use serde_json::{Value, json};
use url::Url;

fn object(value: Value) -> Object {
	match value {
		Value::Object(map) => map,
		other => panic!("expected object literal, got {other}"),
	}
}

fn todo_item() -> Object {
	object(json!({"userId": 1, "id": 1, "title": "delectus aut autem", "completed": false}))
}

#[test]
fn scenario_a_typed_fields_extract() {
	let item = todo_item();

	assert_eq!(interpret::<u64>("userId", &item).expect("userId"), 1);
	assert_eq!(interpret::<String>("title", &item).expect("title"), "delectus aut autem");
}

#[test]
fn scenario_b_absent_container_is_not_present() {
	let item = todo_item();

	assert!(!have("subarray", &item));
}

#[test]
fn scenario_c_range_check_fails_unreadable() {
	let item = object(json!({"id": 150}));

	let err = interpret_with("id", &item, |value: u64| (1..=99).contains(&value).then_some(value)).unwrap_err();
	assert!(matches!(&err, InterpretError::Unreadable { key } if key == "id"));
	assert_eq!(err.to_string(), "unreadable JSON [id]");
}

#[test]
fn scenario_d_failed_url_construction_is_unreadable() {
	let item = object(json!({"thumb": "not a url!!"}));

	let err = interpret_with("thumb", &item, |value: &str| Url::parse(value).ok()).unwrap_err();
	assert!(matches!(&err, InterpretError::Unreadable { key } if key == "thumb"));

	let err = interpret_with("thumb", &item, convert::url).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::Unreadable);
}

#[test]
fn scenario_e_array_root_is_malformed_as_object() {
	let root = json!([{"id": 1}, {"id": 2}]);

	let err = interpret_root::<&Object>(&root).unwrap_err();
	assert!(matches!(err, InterpretError::Malformed));
	assert_eq!(interpret_root::<&Array>(&root).expect("array root").len(), 2);
}

#[test]
fn every_absent_key_is_missing() {
	let item = todo_item();

	for key in ["", "userid", "subarray", "thumb", "title "] {
		assert!(!have(key, &item));
		let err = interpret::<&Value>(key, &item).unwrap_err();
		assert!(matches!(&err, InterpretError::Missing { key: reported } if reported == key));
	}
}

#[test]
fn every_mismatched_shape_is_wrong_type() {
	let item = object(json!({
		"null": null,
		"bool": true,
		"number": 3,
		"string": "s",
		"array": [],
		"object": {}
	}));

	fn check<'a, T: jsoninterp::json::FromJson<'a>>(item: &'a Object, matching: &str) {
		for key in ["null", "bool", "number", "string", "array", "object"] {
			let result = interpret::<T>(key, item);
			if key == matching {
				assert!(result.is_ok(), "{key} should match");
			} else {
				let err = result.err().expect("mismatch fails");
				assert!(matches!(&err, InterpretError::WrongType { key: reported } if reported == key));
			}
		}
	}

	check::<()>(&item, "null");
	check::<bool>(&item, "bool");
	check::<u64>(&item, "number");
	check::<&str>(&item, "string");
	check::<&Array>(&item, "array");
	check::<&Object>(&item, "object");
}

#[test]
fn converter_result_is_returned_as_is() {
	let item = todo_item();

	let words = interpret_with("title", &item, |title: &str| Some(title.split(' ').map(str::to_owned).collect::<Vec<String>>())).expect("split");
	assert_eq!(words, ["delectus", "aut", "autem"]);

	let same = interpret_with("completed", &item, |done: bool| Some(done)).expect("identity");
	assert!(!same);
}
