use super::{TileSourceOption, TileSourceOptionValue};
use anyhow::{Context, Result};
use enumset::EnumSet;
use log::debug;
use serde::{Serialize, Serializer, ser::SerializeMap};
use std::collections::BTreeMap;

/// The options mapping handed to the mapping engine when a tile source is created.
///
/// Keys come from the closed [`TileSourceOption`] set. A key that is absent
/// means "use the engine's default".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TileSourceOptions(BTreeMap<TileSourceOption, TileSourceOptionValue>);

impl TileSourceOptions {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts or replaces the value of `key`.
	pub fn insert<T>(&mut self, key: TileSourceOption, value: T)
	where
		TileSourceOptionValue: From<T>,
	{
		self.0.insert(key, TileSourceOptionValue::from(value));
	}

	/// Inserts `value` only if it is `Some`.
	pub fn insert_optional<T>(&mut self, key: TileSourceOption, value: Option<T>)
	where
		TileSourceOptionValue: From<T>,
	{
		if let Some(value) = value {
			self.insert(key, value);
		}
	}

	#[must_use]
	pub fn get(&self, key: TileSourceOption) -> Option<&TileSourceOptionValue> {
		self.0.get(&key)
	}

	#[must_use]
	pub fn contains_key(&self, key: TileSourceOption) -> bool {
		self.0.contains_key(&key)
	}

	/// Returns the set of keys present in this mapping.
	#[must_use]
	pub fn keys(&self) -> EnumSet<TileSourceOption> {
		self.0.keys().copied().collect()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (TileSourceOption, &TileSourceOptionValue)> {
		self.0.iter().map(|(k, v)| (*k, v))
	}

	/// Converts the mapping into a JSON object keyed by [`TileSourceOption::as_str`].
	///
	/// Numbers that are NaN or infinite have no JSON form; their keys are left out.
	pub fn as_json_value(&self) -> Result<serde_json::Value> {
		serde_json::to_value(self).context("Failed to convert tile source options to JSON")
	}

	/// Compact JSON string of the mapping.
	pub fn as_string(&self) -> Result<String> {
		serde_json::to_string(self).context("Failed to convert tile source options to JSON")
	}
}

impl Serialize for TileSourceOptions {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let entries: Vec<_> = self
			.iter()
			.filter(|(key, value)| {
				let finite = value.as_number().is_none_or(f64::is_finite);
				if !finite {
					debug!("skipping option '{}': {value:?} is not a finite number", key.as_str());
				}
				finite
			})
			.collect();

		let mut map = serializer.serialize_map(Some(entries.len()))?;
		for (key, value) in entries {
			map.serialize_entry(key.as_str(), value)?;
		}
		map.end()
	}
}

impl FromIterator<(TileSourceOption, TileSourceOptionValue)> for TileSourceOptions {
	fn from_iter<I: IntoIterator<Item = (TileSourceOption, TileSourceOptionValue)>>(iter: I) -> Self {
		TileSourceOptions(iter.into_iter().collect())
	}
}
