#![allow(missing_docs)]

use std::error::Error as _;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

use cmd::error::CmdError;

#[derive(Parser)]
#[command(name = "jsoninterp", about = "Typed field extraction over JSON documents")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Report whether the root object holds a key.
	Have(cmd::have::Args),
	/// Extract one field as a requested type.
	Get(cmd::get::Args),
	/// Run the to-do item extraction sequence.
	Walkthrough(cmd::walkthrough::Args),
}

fn main() {
	init_tracing();

	if let Err(err) = run() {
		let mut message = err.to_string();
		let mut source = err.source();
		while let Some(cause) = source {
			message.push_str(&format!(": {cause}"));
			source = cause.source();
		}
		eprintln!("error: {message}");
		std::process::exit(err.exit_code());
	}
}

fn run() -> Result<(), CmdError> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Have(args) => cmd::have::run(args),
		Commands::Get(args) => cmd::get::run(args),
		Commands::Walkthrough(args) => cmd::walkthrough::run(args),
	}
}

fn init_tracing() {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init();
}
