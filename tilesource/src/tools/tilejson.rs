use anyhow::{Context, Result};
use std::{fs, path::PathBuf};
use tilesource_core::TileSourceConfig;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
/// Print the options mapping of a TileJSON document
pub struct Subcommand {
	/// TileJSON file
	#[arg(value_name = "TILEJSON_FILE")]
	input: PathBuf,

	/// Pretty-print the output
	#[arg(long, default_value_t = false, short = 'p')]
	pretty: bool,
}

pub fn run(args: &Subcommand) -> Result<()> {
	println!("{}", render(args)?);
	Ok(())
}

fn render(args: &Subcommand) -> Result<String> {
	let text = fs::read_to_string(&args.input).with_context(|| format!("Failed to read {:?}", args.input))?;
	let config = TileSourceConfig::from_tilejson(&text)?;
	super::stringify(&config.options().as_json_value()?, args.pretty)
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn print_options() {
		let output = render(&Subcommand {
			input: PathBuf::from("../testdata/tiles.json"),
			pretty: false,
		})
		.unwrap();
		assert_eq!(
			output,
			r#"{"attribution":"© Example","maximumZoomLevel":14,"minimumZoomLevel":0,"tileUrlTemplates":["https://tiles.example.org/{z}/{x}/{y}.pbf"],"tms":true}"#
		);
	}

	#[test]
	fn missing_file() {
		let err = render(&Subcommand {
			input: PathBuf::from("../testdata/missing.json"),
			pretty: false,
		})
		.unwrap_err();
		assert!(err.to_string().starts_with("Failed to read"));
	}
}
