use std::path::PathBuf;

use jsoninterp::json::{Array, InterpretError, Object, convert, have, interpret, interpret_root, interpret_with};
use serde_json::Value;

use crate::cmd::error::CmdError;
use crate::cmd::util::load_document;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
}

/// Run the to-do item extraction sequence and print one line per step.
pub fn run(args: Args) -> Result<(), CmdError> {
	let document = load_document(&args.path)?;

	for line in walk_todo(&document)? {
		println!("{line}");
	}

	Ok(())
}

/// Extract the fields of a to-do item, stopping at the first failure.
pub(crate) fn walk_todo(document: &Value) -> Result<Vec<String>, InterpretError> {
	let root = interpret_root::<&Object>(document)?;
	let mut lines = Vec::new();

	let user_id = interpret::<u64>("userId", root)?;
	lines.push(format!("userId: {user_id}"));

	let title = interpret::<&str>("title", root)?;
	lines.push(format!("title: {}", Value::from(title)));

	if have("subarray", root) {
		let subarray = interpret::<&Array>("subarray", root)?;
		lines.push(format!("subarray: {} items", subarray.len()));
	} else {
		lines.push("subarray: absent".to_owned());
	}

	let id = interpret_with("id", root, convert::in_range(1_u64..=99))?;
	lines.push(format!("id: {id}"));

	if have("thumb", root) {
		let thumb = interpret_with("thumb", root, convert::url_reference)?;
		lines.push(format!("thumb: {thumb}"));
	} else {
		lines.push("thumb: absent".to_owned());
	}

	tracing::debug!(steps = lines.len(), "walkthrough complete");
	Ok(lines)
}
