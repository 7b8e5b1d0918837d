use serde::{Serialize, Serializer};

/// A value stored in a [`TileSourceOptions`](super::TileSourceOptions) mapping.
#[derive(Clone, Debug, PartialEq)]
pub enum TileSourceOptionValue {
	/// A list of strings, e.g. tile URL templates.
	Strings(Vec<String>),
	/// A number, e.g. a zoom level.
	Number(f64),
	/// A flag.
	Bool(bool),
	/// A single string, e.g. attribution text.
	String(String),
}

impl TileSourceOptionValue {
	#[must_use]
	pub fn as_strings(&self) -> Option<&[String]> {
		match self {
			TileSourceOptionValue::Strings(v) => Some(v),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_number(&self) -> Option<f64> {
		match self {
			TileSourceOptionValue::Number(v) => Some(*v),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			TileSourceOptionValue::Bool(v) => Some(*v),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			TileSourceOptionValue::String(v) => Some(v),
			_ => None,
		}
	}

	/// Name of the variant, used in log and error messages.
	#[must_use]
	pub fn get_type(&self) -> &str {
		match self {
			TileSourceOptionValue::Strings(_) => "Strings",
			TileSourceOptionValue::Number(_) => "Number",
			TileSourceOptionValue::Bool(_) => "Bool",
			TileSourceOptionValue::String(_) => "String",
		}
	}
}

impl From<Vec<String>> for TileSourceOptionValue {
	fn from(value: Vec<String>) -> Self {
		TileSourceOptionValue::Strings(value)
	}
}

impl From<&[String]> for TileSourceOptionValue {
	fn from(value: &[String]) -> Self {
		TileSourceOptionValue::Strings(value.to_vec())
	}
}

impl From<f64> for TileSourceOptionValue {
	fn from(value: f64) -> Self {
		TileSourceOptionValue::Number(value)
	}
}

impl From<u16> for TileSourceOptionValue {
	fn from(value: u16) -> Self {
		TileSourceOptionValue::Number(f64::from(value))
	}
}

impl From<bool> for TileSourceOptionValue {
	fn from(value: bool) -> Self {
		TileSourceOptionValue::Bool(value)
	}
}

impl From<&str> for TileSourceOptionValue {
	fn from(value: &str) -> Self {
		TileSourceOptionValue::String(value.to_owned())
	}
}

impl From<String> for TileSourceOptionValue {
	fn from(value: String) -> Self {
		TileSourceOptionValue::String(value)
	}
}

impl Serialize for TileSourceOptionValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			TileSourceOptionValue::Strings(v) => v.serialize(serializer),
			// whole numbers are written without a fraction, so `2.0` becomes `2`
			TileSourceOptionValue::Number(v) if v.fract() == 0.0 && v.abs() < 9.0e15 => serializer.serialize_i64(*v as i64),
			TileSourceOptionValue::Number(v) => serializer.serialize_f64(*v),
			TileSourceOptionValue::Bool(v) => serializer.serialize_bool(*v),
			TileSourceOptionValue::String(v) => serializer.serialize_str(v),
		}
	}
}
