use super::{SourceInit, TileSourceConfig, TileSourceOption, TileSourceOptions};
use log::{debug, warn};
use serde::Deserialize;

/// Kind of data a tile source delivers.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
	#[default]
	Vector,
	Raster,
}

impl SourceKind {
	#[must_use]
	pub fn as_str(&self) -> &str {
		match self {
			SourceKind::Vector => "vector",
			SourceKind::Raster => "raster",
		}
	}
}

impl std::fmt::Display for SourceKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// A named tile source: its identifier, its kind and the shared tile-source properties.
///
/// YAML example:
/// ```yaml
/// id: osm
/// kind: raster
/// tile_size: 256
/// tile_url_templates:
///   - "https://tile.openstreetmap.org/{z}/{x}/{y}.png"
/// max_zoom_level: 19
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SourceDefinition {
	/// Identifier of the source, referenced by layers.
	pub id: String,

	/// `vector` (default) or `raster`.
	pub kind: SourceKind,

	/// Pixel size of raster tiles. Ignored for vector sources.
	pub tile_size: Option<u16>,

	pub config: TileSourceConfig,
}

impl<'de> Deserialize<'de> for SourceDefinition {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		// `flatten` would swallow unknown keys, so every field is listed here
		#[derive(Deserialize)]
		#[serde(deny_unknown_fields)]
		struct SourceDefinitionHelper {
			id: String,
			#[serde(default)]
			kind: SourceKind,
			#[serde(default)]
			tile_size: Option<u16>,
			#[serde(default)]
			url: Option<String>,
			#[serde(default)]
			tile_url_templates: Vec<String>,
			#[serde(default)]
			attribution: Option<String>,
			#[serde(default)]
			min_zoom_level: Option<f64>,
			#[serde(default)]
			max_zoom_level: Option<f64>,
			#[serde(default)]
			tms: bool,
		}

		let helper = SourceDefinitionHelper::deserialize(deserializer)?;
		Ok(SourceDefinition {
			id: helper.id,
			kind: helper.kind,
			tile_size: helper.tile_size,
			config: TileSourceConfig {
				url: helper.url,
				tile_url_templates: helper.tile_url_templates,
				attribution: helper.attribution,
				min_zoom_level: helper.min_zoom_level,
				max_zoom_level: helper.max_zoom_level,
				tms: helper.tms,
			},
		})
	}
}

impl SourceDefinition {
	#[must_use]
	pub fn new(id: &str, kind: SourceKind, config: TileSourceConfig) -> Self {
		Self {
			id: id.to_owned(),
			kind,
			tile_size: None,
			config,
		}
	}

	/// Options of the shared properties plus [`TileSourceOption::TileSize`] for raster sources.
	#[must_use]
	pub fn options(&self) -> TileSourceOptions {
		let mut options = self.config.options();
		match (self.kind, self.tile_size) {
			(SourceKind::Raster, tile_size) => options.insert_optional(TileSourceOption::TileSize, tile_size),
			(SourceKind::Vector, Some(tile_size)) => {
				warn!("source '{}': tile_size {tile_size} is ignored for vector sources", self.id);
			}
			(SourceKind::Vector, None) => {}
		}
		options
	}

	/// Same as [`TileSourceConfig::init`], but uses [`Self::options`].
	#[must_use]
	pub fn init(&self) -> SourceInit {
		let init = match self.config.init() {
			SourceInit::Templates { templates, .. } => SourceInit::Templates {
				templates,
				options: self.options(),
			},
			remote @ SourceInit::Remote { .. } => remote,
		};
		debug!("source '{}' ({}): remote = {}", self.id, self.kind, init.is_remote());
		init
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::source::TileSourceOptionValue;
	use pretty_assertions::assert_eq;

	fn raster(tile_size: Option<u16>) -> SourceDefinition {
		SourceDefinition {
			tile_size,
			..SourceDefinition::new(
				"osm",
				SourceKind::Raster,
				TileSourceConfig {
					tile_url_templates: vec!["https://tile.openstreetmap.org/{z}/{x}/{y}.png".into()],
					..Default::default()
				},
			)
		}
	}

	#[test]
	fn raster_adds_tile_size() {
		let options = raster(Some(512)).options();
		assert_eq!(
			options.get(TileSourceOption::TileSize),
			Some(&TileSourceOptionValue::Number(512.0))
		);
		assert!(options.contains_key(TileSourceOption::TileUrlTemplates));
	}

	#[test]
	fn raster_without_tile_size() {
		assert!(!raster(None).options().contains_key(TileSourceOption::TileSize));
	}

	#[test]
	fn vector_ignores_tile_size() {
		let mut source = raster(Some(512));
		source.kind = SourceKind::Vector;
		assert_eq!(source.options(), source.config.options());
	}

	#[test]
	fn init_uses_definition_options() {
		let source = raster(Some(256));
		assert_eq!(source.init().options(), Some(&source.options()));
	}

	#[test]
	fn init_remote() {
		let mut source = raster(Some(256));
		source.config.url = Some("https://example.org/tiles.json".into());
		assert!(source.init().is_remote());
	}

	#[test]
	fn deserialize_from_yaml() {
		let source: SourceDefinition = serde_yaml_ng::from_str(
			"id: osm\nkind: raster\ntile_size: 256\ntile_url_templates: ['https://tile.openstreetmap.org/{z}/{x}/{y}.png']\n",
		)
		.unwrap();
		assert_eq!(source, raster(Some(256)));
	}

	#[test]
	fn reject_misspelled_keys() {
		let err = serde_yaml_ng::from_str::<SourceDefinition>("id: a\nmaxzoom: 14\n").unwrap_err();
		assert!(err.to_string().contains("unknown field `maxzoom`"));
	}

	#[test]
	fn kind_defaults_to_vector() {
		let source: SourceDefinition = serde_yaml_ng::from_str("id: v\nurl: https://example.org/tiles.json\n").unwrap();
		assert_eq!(source.kind, SourceKind::Vector);
		assert_eq!(source.kind.to_string(), "vector");
	}
}
