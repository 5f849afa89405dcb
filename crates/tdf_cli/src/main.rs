#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "tdf", about = "TDF tagged binary record tools")]
struct Cli {
	/// Log decoder/encoder progress to stderr (overridden by `TDF_LOG`).
	#[arg(long, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode a TDF buffer and print its records.
	Decode(cmd::decode::Args),
	/// Encode a JSON document into TDF bytes.
	Encode(cmd::encode::Args),
	/// Pack or unpack a single label.
	#[command(subcommand)]
	Label(cmd::label::Command),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> tdf::codec::Result<()> {
	let cli = Cli::parse();
	cmd::logging::init(cli.verbose);

	match cli.command {
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Encode(args) => cmd::encode::run(args),
		Commands::Label(command) => cmd::label::run(command),
	}
}
