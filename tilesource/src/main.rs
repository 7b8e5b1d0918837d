// Subcommand implementations
mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

// Command-line interface, parsed with clap
#[derive(Parser, Debug)]
#[command(
	author, // Cargo.toml authors
	version, // Cargo.toml version
	about, // Cargo.toml description
	long_about = None, // No long description
	propagate_version = true, // Subcommands accept -V as well
	disable_help_subcommand = true, // Only --help, no help subcommand
)]
struct Cli {
	#[command(subcommand)]
	command: Commands, // Selected subcommand

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>, // -v/-q, defaults to errors only
}

// Available subcommands
#[derive(Subcommand, Debug)]
enum Commands {
	/// Print how configured tile sources are initialized
	Options(tools::options::Subcommand),

	/// Print the options mapping of a TileJSON document
	Tilejson(tools::tilejson::Subcommand),
}

// Parses the arguments, sets up logging and runs the subcommand
fn main() -> Result<()> {
	let cli = Cli::parse();

	// Log level follows the verbosity flag
	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(&cli)
}

// Dispatches to the selected subcommand
fn run(cli: &Cli) -> Result<()> {
	match &cli.command {
		Commands::Options(arguments) => tools::options::run(arguments),
		Commands::Tilejson(arguments) => tools::tilejson::run(arguments),
	}
}
