pub mod options;
pub mod tilejson;

use anyhow::Result;
use serde_json::Value;

/// Serializes `value` either compact or indented.
pub fn stringify(value: &Value, pretty: bool) -> Result<String> {
	Ok(if pretty {
		serde_json::to_string_pretty(value)?
	} else {
		serde_json::to_string(value)?
	})
}
