use std::path::PathBuf;

use jsoninterp::json::{Object, have, interpret_root};

use crate::cmd::error::CmdError;
use crate::cmd::util::load_document;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub key: String,
}

/// Report whether the root object holds `key`.
pub fn run(args: Args) -> Result<(), CmdError> {
	let Args { path, key } = args;

	let document = load_document(&path)?;
	let root = interpret_root::<&Object>(&document)?;
	println!("{}", have(&key, root));

	Ok(())
}
