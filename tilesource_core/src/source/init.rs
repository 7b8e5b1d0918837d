use super::TileSourceOptions;
use serde::Serialize;

/// How the mapping engine should construct a tile source.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SourceInit {
	/// Load the source from a remote TileJSON-like descriptor.
	Remote { url: String },
	/// Build the source directly from tile URL templates and an options mapping.
	Templates {
		templates: Vec<String>,
		options: TileSourceOptions,
	},
}

impl SourceInit {
	#[must_use]
	pub fn is_remote(&self) -> bool {
		matches!(self, SourceInit::Remote { .. })
	}

	/// Returns the options mapping, if this source is built from templates.
	#[must_use]
	pub fn options(&self) -> Option<&TileSourceOptions> {
		match self {
			SourceInit::Remote { .. } => None,
			SourceInit::Templates { options, .. } => Some(options),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::source::TileSourceOption;

	#[test]
	fn remote_serializes_url_only() {
		let init = SourceInit::Remote {
			url: "https://example.org/tiles.json".into(),
		};
		assert!(init.is_remote());
		assert!(init.options().is_none());
		assert_eq!(
			serde_json::to_string(&init).unwrap(),
			r#"{"url":"https://example.org/tiles.json"}"#
		);
	}

	#[test]
	fn templates_serialize_with_options() {
		let mut options = TileSourceOptions::new();
		options.insert(TileSourceOption::MaximumZoomLevel, 14.0);
		let init = SourceInit::Templates {
			templates: vec!["https://t/{z}/{x}/{y}.png".into()],
			options,
		};
		assert!(!init.is_remote());
		assert_eq!(init.options().map(TileSourceOptions::len), Some(1));
		assert_eq!(
			serde_json::to_string(&init).unwrap(),
			r#"{"templates":["https://t/{z}/{x}/{y}.png"],"options":{"maximumZoomLevel":14}}"#
		);
	}
}
