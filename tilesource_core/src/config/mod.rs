//! YAML configuration listing named tile sources.
//!
//! # Example YAML
//! ```yaml
//! sources:
//!   - id: osm
//!     kind: raster
//!     tile_size: 256
//!     tile_url_templates:
//!       - "https://tile.openstreetmap.org/{z}/{x}/{y}.png"
//!     attribution: "© OpenStreetMap contributors"
//!     max_zoom_level: 19
//!   - id: demotiles
//!     url: "https://demotiles.maplibre.org/tiles/tiles.json"
//! ```

use crate::SourceDefinition;
use anyhow::{Context, Result, ensure};
use log::debug;
use serde::Deserialize;
use std::{
	collections::HashSet,
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// List of tile sources
	#[serde(default)]
	pub sources: Vec<SourceDefinition>,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		let config: Config = serde_yaml_ng::from_reader(reader)?;
		config.check()?;
		Ok(config)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		let config: Config = serde_yaml_ng::from_str(text)?;
		config.check()?;
		Ok(config)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("Failed to open config file {path:?}"))?;
		let config = Config::from_reader(BufReader::new(file)).with_context(|| format!("Failed to read config file {path:?}"))?;
		debug!("loaded {} sources from {path:?}", config.sources.len());
		Ok(config)
	}

	#[must_use]
	pub fn get_source(&self, id: &str) -> Option<&SourceDefinition> {
		self.sources.iter().find(|s| s.id == id)
	}

	/// Source ids must be unique.
	fn check(&self) -> Result<()> {
		let mut ids = HashSet::new();
		for source in &self.sources {
			ensure!(ids.insert(source.id.as_str()), "Duplicate source id '{}'", source.id);
		}
		Ok(())
	}
}
