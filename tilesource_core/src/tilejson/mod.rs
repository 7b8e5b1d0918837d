//! Reads a [`TileSourceConfig`] from the text of a TileJSON document.
//!
//! Recognised keys:
//! - `"url"`: descriptor URL, for style sources that point to another TileJSON
//! - `"tiles"`: list of tile URL templates
//! - `"minzoom"` / `"maxzoom"`: zoom bounds
//! - `"attribution"`: attribution text, skipped if empty
//! - `"scheme"`: only `"tms"` sets the TMS flag, any other value keeps XYZ
//!
//! Every other key (`"tilejson"`, `"bounds"`, `"vector_layers"`, ...) is ignored.
//! Fetching the document is left to the caller.
//!
//! # Example
//! ```rust
//! # use tilesource_core::TileSourceConfig;
//! # fn example() -> anyhow::Result<()> {
//! let config = TileSourceConfig::from_tilejson(r#"{
//!   "tilejson": "3.0.0",
//!   "tiles": ["https://tile.example.org/{z}/{x}/{y}.pbf"],
//!   "minzoom": 0,
//!   "maxzoom": 14,
//!   "scheme": "tms"
//! }"#)?;
//! assert!(config.tms);
//! assert_eq!(config.max_zoom_level, Some(14.0));
//! # Ok(())
//! # }
//! ```

use crate::{TileScheme, TileSourceConfig};
use anyhow::{Context, Result, bail};
use log::debug;
use serde_json::{Map, Value};

impl TileSourceConfig {
	/// Parses `text` as a TileJSON document.
	///
	/// # Errors
	/// Returns an error if the text is not a JSON object, or if `"url"`, `"tiles"`,
	/// `"minzoom"`, `"maxzoom"` or `"attribution"` has the wrong type.
	pub fn from_tilejson(text: &str) -> Result<TileSourceConfig> {
		let value: Value = serde_json::from_str(text).context("Failed to parse TileJSON")?;
		let Value::Object(object) = value else {
			bail!("TileJSON must be an object, found {}", json_type(&value));
		};
		TileSourceConfig::from_tilejson_object(&object)
	}

	/// Same as [`Self::from_tilejson`] for an already parsed JSON object.
	pub fn from_tilejson_object(object: &Map<String, Value>) -> Result<TileSourceConfig> {
		let mut config = TileSourceConfig::default();
		for (key, value) in object {
			match key.as_str() {
				"tiles" => config.tile_url_templates = as_string_list(value).context("Failed to parse 'tiles'")?,
				"minzoom" => config.min_zoom_level = Some(as_number(value).context("Failed to parse 'minzoom'")?),
				"maxzoom" => config.max_zoom_level = Some(as_number(value).context("Failed to parse 'maxzoom'")?),
				"url" => config.url = Some(as_str(value).context("Failed to parse 'url'")?.to_owned()),
				"attribution" => {
					let attribution = as_str(value).context("Failed to parse 'attribution'")?;
					if !attribution.is_empty() {
						config.attribution = Some(attribution.to_owned());
					}
				}
				"scheme" => match value.as_str().map(TileScheme::try_from) {
					Some(Ok(scheme)) => config.tms = scheme.is_tms(),
					_ => debug!("unsupported TileJSON scheme {value}, using xyz"),
				},
				_ => debug!("ignoring TileJSON key '{key}'"),
			}
		}
		Ok(config)
	}
}

fn json_type(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

fn as_str(value: &Value) -> Result<&str> {
	value
		.as_str()
		.with_context(|| format!("expected a string, found {}", json_type(value)))
}

fn as_number(value: &Value) -> Result<f64> {
	value
		.as_f64()
		.with_context(|| format!("expected a number, found {}", json_type(value)))
}

fn as_string_list(value: &Value) -> Result<Vec<String>> {
	let Value::Array(array) = value else {
		bail!("expected an array, found {}", json_type(value));
	};
	array.iter().map(|v| as_str(v).map(ToOwned::to_owned)).collect()
}
