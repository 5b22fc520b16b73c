//! Grid payload decoding
//!
//! Two key spellings are tolerated for backward compatibility:
//! `{headers, data}` and `{columns, Data}`. Any shape mismatch is an
//! [`GridError::Incomplete`] for the whole fetch; there is no partial
//! rendering.

use crate::error::{GridError, Result};
use serde_json::{Map, Value};

/// Column keys starting with this marker are never rendered
pub const RESERVED_MARKER: char = '$';

/// Decoded grid payload: visible column keys plus schemaless rows
#[derive(Debug, Clone, PartialEq)]
pub struct GridPayload {
	/// Ordered column keys, reserved-marker columns already excluded
	pub columns: Vec<String>,
	/// Row records
	pub rows: Vec<Map<String, Value>>,
}

/// Decodes a grid response body
pub fn decode_payload(body: &Value) -> Result<GridPayload> {
	let object = body
		.as_object()
		.ok_or_else(|| GridError::Incomplete("response is not an object".to_string()))?;

	let headers = object
		.get("headers")
		.or_else(|| object.get("columns"))
		.and_then(Value::as_array)
		.ok_or_else(|| GridError::Incomplete("missing header list".to_string()))?;
	let data = object
		.get("data")
		.or_else(|| object.get("Data"))
		.and_then(Value::as_array)
		.ok_or_else(|| GridError::Incomplete("missing row list".to_string()))?;

	let columns: Vec<String> = headers
		.iter()
		.map(|h| {
			h.as_str()
				.map(str::to_string)
				.ok_or_else(|| GridError::Incomplete("non-string column key".to_string()))
		})
		.collect::<Result<_>>()?;
	let columns = columns
		.into_iter()
		.filter(|c| !c.starts_with(RESERVED_MARKER))
		.collect();

	let rows = data
		.iter()
		.map(|row| {
			row.as_object()
				.cloned()
				.ok_or_else(|| GridError::Incomplete("non-object row".to_string()))
		})
		.collect::<Result<_>>()?;

	Ok(GridPayload { columns, rows })
}
