//! The tile-source property bag and its conversion into engine options.
//!
//! A [`TileSourceConfig`] is created when a declarative source element is
//! mounted, updated through its setters whenever the element's properties
//! change, and dropped when the element unmounts. Nothing here validates the
//! values: bad URLs or inverted zoom bounds are reported by the mapping engine
//! once it tries to load the source.
//!
//! # Example
//! ```rust
//! use tilesource_core::{TileSourceConfig, TileSourceOption};
//!
//! let mut config = TileSourceConfig::default();
//! config.set_tile_url_templates(vec!["https://tile.example.org/{z}/{x}/{y}.png".to_string()]);
//! config.set_min_zoom_level(Some(2.0));
//! config.set_max_zoom_level(Some(14.0));
//!
//! let options = config.options();
//! assert_eq!(options.len(), 3);
//! assert!(!options.contains_key(TileSourceOption::Tms));
//! ```

use super::{SourceInit, TileSourceOption, TileSourceOptions};
use crate::types::TileScheme;
use log::{trace, warn};
use serde::Deserialize;

/// Configuration of a tile-based source.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TileSourceConfig {
	/// URL of a TileJSON-like descriptor. Takes precedence over `tile_url_templates`.
	#[serde(default)]
	pub url: Option<String>,

	/// Tile URL templates with `{z}`, `{x}` and `{y}` placeholders.
	#[serde(default)]
	pub tile_url_templates: Vec<String>,

	/// Attribution text displayed with the map.
	#[serde(default)]
	pub attribution: Option<String>,

	/// Inclusive lower zoom bound.
	#[serde(default)]
	pub min_zoom_level: Option<f64>,

	/// Inclusive upper zoom bound.
	#[serde(default)]
	pub max_zoom_level: Option<f64>,

	/// Rows are addressed in TMS order instead of XYZ.
	#[serde(default)]
	pub tms: bool,
}

impl TileSourceConfig {
	pub fn set_url(&mut self, url: Option<String>) {
		self.url = url;
	}

	pub fn set_tile_url_templates(&mut self, templates: Vec<String>) {
		self.tile_url_templates = templates;
	}

	pub fn set_attribution(&mut self, attribution: Option<String>) {
		self.attribution = attribution;
	}

	pub fn set_min_zoom_level(&mut self, zoom: Option<f64>) {
		self.min_zoom_level = zoom;
	}

	pub fn set_max_zoom_level(&mut self, zoom: Option<f64>) {
		self.max_zoom_level = zoom;
	}

	pub fn set_tms(&mut self, tms: bool) {
		self.tms = tms;
	}

	#[must_use]
	pub fn scheme(&self) -> TileScheme {
		TileScheme::from_tms(self.tms)
	}

	/// Builds the options mapping for the mapping engine.
	///
	/// Only set fields produce a key:
	/// - `tile_url_templates` if the list is not empty
	/// - `min_zoom_level` / `max_zoom_level` if `Some`
	/// - `tms` if `true`
	/// - `attribution` if `Some`, passed through unchanged
	///
	/// The mapping is rebuilt on every call, so it always reflects the current fields.
	#[must_use]
	pub fn options(&self) -> TileSourceOptions {
		let mut options = TileSourceOptions::new();

		if !self.tile_url_templates.is_empty() {
			options.insert(TileSourceOption::TileUrlTemplates, self.tile_url_templates.as_slice());
		}
		options.insert_optional(TileSourceOption::MinimumZoomLevel, self.min_zoom_level);
		options.insert_optional(TileSourceOption::MaximumZoomLevel, self.max_zoom_level);
		if self.tms {
			options.insert(TileSourceOption::Tms, true);
		}
		options.insert_optional(TileSourceOption::Attribution, self.attribution.as_deref());

		trace!("tile source options: {:?}", options.keys());
		options
	}

	/// Decides how the engine should create the source.
	///
	/// A set `url` wins; the templates are then ignored and a warning is logged
	/// if any were given. Without a `url` the templates and [`Self::options`]
	/// are used, even if the template list is empty.
	#[must_use]
	pub fn init(&self) -> SourceInit {
		if let Some(url) = &self.url {
			if !self.tile_url_templates.is_empty() {
				warn!(
					"tile source has both a url ({url}) and {} tile url templates, ignoring the templates",
					self.tile_url_templates.len()
				);
			}
			return SourceInit::Remote { url: url.clone() };
		}

		SourceInit::Templates {
			templates: self.tile_url_templates.clone(),
			options: self.options(),
		}
	}
}
