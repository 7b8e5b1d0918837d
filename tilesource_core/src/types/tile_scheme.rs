use anyhow::bail;

/// Tile addressing scheme of a tile source.
///
/// * **`Xyz`** – rows are counted from the north edge (the common "slippy map" layout).
/// * **`Tms`** – rows are counted from the south edge, so the Y axis is flipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TileScheme {
	#[default]
	Xyz,
	Tms,
}

impl TileScheme {
	/// Maps the boolean `tms` property onto a scheme.
	///
	/// # Examples
	/// ```
	/// use tilesource_core::TileScheme;
	/// assert_eq!(TileScheme::from_tms(true), TileScheme::Tms);
	/// assert_eq!(TileScheme::from_tms(false), TileScheme::Xyz);
	/// ```
	#[must_use]
	pub fn from_tms(tms: bool) -> Self {
		if tms { TileScheme::Tms } else { TileScheme::Xyz }
	}

	#[must_use]
	pub fn is_tms(&self) -> bool {
		*self == TileScheme::Tms
	}

	/// Returns the lower-case identifier used by TileJSON's `scheme` field.
	#[must_use]
	pub fn as_str(&self) -> &str {
		match self {
			TileScheme::Xyz => "xyz",
			TileScheme::Tms => "tms",
		}
	}
}

impl std::fmt::Display for TileScheme {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl TryFrom<&str> for TileScheme {
	type Error = anyhow::Error;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Ok(match value.trim().to_lowercase().as_str() {
			"xyz" => TileScheme::Xyz,
			"tms" => TileScheme::Tms,
			_ => bail!("Invalid tile scheme: {value}"),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("xyz", TileScheme::Xyz)]
	#[case("tms", TileScheme::Tms)]
	#[case("TMS", TileScheme::Tms)]
	#[case(" Xyz ", TileScheme::Xyz)]
	fn parse_scheme(#[case] input: &str, #[case] expected: TileScheme) {
		assert_eq!(TileScheme::try_from(input).unwrap(), expected);
	}

	#[test]
	fn parse_invalid_scheme() {
		let err = TileScheme::try_from("wmts").unwrap_err();
		assert_eq!(err.to_string(), "Invalid tile scheme: wmts");
	}

	#[test]
	fn default_is_xyz() {
		assert_eq!(TileScheme::default(), TileScheme::Xyz);
		assert!(!TileScheme::default().is_tms());
	}

	#[test]
	fn display_matches_as_str() {
		assert_eq!(format!("{}", TileScheme::Tms), "tms");
		assert_eq!(TileScheme::Xyz.to_string(), TileScheme::Xyz.as_str());
	}
}
