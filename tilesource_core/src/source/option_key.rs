use enumset::EnumSetType;

/// Keys understood by the mapping engine when it builds a tile source.
///
/// The set is closed on purpose: an options mapping can only ever carry these
/// keys, so a misspelled key is a compile error instead of an option the
/// engine silently ignores.
#[derive(Debug, EnumSetType, PartialOrd, Ord, Hash)]
pub enum TileSourceOption {
	/// List of tile URL templates.
	TileUrlTemplates,
	/// Lowest zoom level at which tiles are available.
	MinimumZoomLevel,
	/// Highest zoom level at which tiles are available.
	MaximumZoomLevel,
	/// Tiles are addressed with the TMS (south-up) row order.
	Tms,
	/// Attribution text shown alongside the map.
	Attribution,
	/// Pixel size of a raster tile.
	TileSize,
}

impl TileSourceOption {
	/// Returns the camel-case key used when the mapping is serialized.
	///
	/// # Examples
	/// ```
	/// use tilesource_core::TileSourceOption;
	/// assert_eq!(TileSourceOption::MinimumZoomLevel.as_str(), "minimumZoomLevel");
	/// ```
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		use TileSourceOption::*;
		match self {
			TileUrlTemplates => "tileUrlTemplates",
			MinimumZoomLevel => "minimumZoomLevel",
			MaximumZoomLevel => "maximumZoomLevel",
			Tms => "tms",
			Attribution => "attribution",
			TileSize => "tileSize",
		}
	}
}

impl std::fmt::Display for TileSourceOption {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use enumset::EnumSet;

	#[test]
	fn keys_are_unique() {
		let keys: Vec<&str> = EnumSet::<TileSourceOption>::all().iter().map(|k| k.as_str()).collect();
		let mut deduped = keys.clone();
		deduped.sort_unstable();
		deduped.dedup();
		assert_eq!(keys.len(), deduped.len());
		assert_eq!(keys.len(), 6);
	}

	#[test]
	fn display() {
		assert_eq!(TileSourceOption::TileUrlTemplates.to_string(), "tileUrlTemplates");
		assert_eq!(TileSourceOption::Tms.to_string(), "tms");
	}
}
