use anyhow::{Result, bail};
use log::info;
use serde_json::{Map, Value};
use std::path::PathBuf;
use tilesource_core::{Config, SourceDefinition};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
/// Print how configured tile sources are initialized
pub struct Subcommand {
	/// YAML file listing the tile sources
	#[arg(value_name = "CONFIG_FILE")]
	config: PathBuf,

	/// Only print the source with this id
	#[arg(long, short)]
	source: Option<String>,

	/// Pretty-print the output
	#[arg(long, default_value_t = false, short = 'p')]
	pretty: bool,
}

pub fn run(args: &Subcommand) -> Result<()> {
	println!("{}", render(args)?);
	Ok(())
}

fn render(args: &Subcommand) -> Result<String> {
	let config = Config::from_path(&args.config)?;

	let sources: Vec<&SourceDefinition> = match &args.source {
		Some(id) => match config.get_source(id) {
			Some(source) => vec![source],
			None => bail!("Unknown source '{id}'"),
		},
		None => config.sources.iter().collect(),
	};
	info!("printing {} of {} sources", sources.len(), config.sources.len());

	let mut output = Map::new();
	for source in sources {
		output.insert(source.id.clone(), serde_json::to_value(source.init())?);
	}
	super::stringify(&Value::Object(output), args.pretty)
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn subcommand(source: Option<&str>, pretty: bool) -> Subcommand {
		Subcommand {
			config: PathBuf::from("../testdata/sources.yml"),
			source: source.map(ToOwned::to_owned),
			pretty,
		}
	}

	#[test]
	fn all_sources() {
		assert_eq!(
			render(&subcommand(None, false)).unwrap(),
			concat!(
				r#"{"demotiles":{"url":"https://demotiles.maplibre.org/tiles/tiles.json"},"#,
				r#""osm":{"options":{"attribution":"© OpenStreetMap contributors","maximumZoomLevel":19,"minimumZoomLevel":0,"tileSize":256,"tileUrlTemplates":["https://tile.openstreetmap.org/{z}/{x}/{y}.png"]},"templates":["https://tile.openstreetmap.org/{z}/{x}/{y}.png"]},"#,
				r#""tms":{"options":{"maximumZoomLevel":14,"minimumZoomLevel":2,"tileUrlTemplates":["https://tiles.example.org/{z}/{x}/{y}.pbf"],"tms":true},"templates":["https://tiles.example.org/{z}/{x}/{y}.pbf"]}}"#
			)
		);
	}

	#[test]
	fn single_source_pretty() {
		assert_eq!(
			render(&subcommand(Some("demotiles"), true)).unwrap(),
			"{\n  \"demotiles\": {\n    \"url\": \"https://demotiles.maplibre.org/tiles/tiles.json\"\n  }\n}"
		);
	}

	#[test]
	fn unknown_source() {
		let err = render(&subcommand(Some("missing"), false)).unwrap_err();
		assert_eq!(err.to_string(), "Unknown source 'missing'");
	}
}
