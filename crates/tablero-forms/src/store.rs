//! Schema storage retrieval
//!
//! Persisted form schemas are keyed by `(module_id, assigned_id)`; the
//! renderer retrieves them by the same compound key.

use tablero_proxy::{Proxy, ProxyError};
use tablero_schema::FormSchema;
use tracing::debug;

/// Fetches a persisted schema by its compound key
///
/// `storage_url` is the schema storage root; the key is appended as
/// `/{module_id}/{schema_id}`.
pub async fn fetch_schema(
	proxy: &dyn Proxy,
	storage_url: &str,
	module_id: i64,
	schema_id: i64,
) -> Result<FormSchema, ProxyError> {
	let url = format!(
		"{}/{module_id}/{schema_id}",
		storage_url.trim_end_matches('/')
	);
	let body = proxy.get_json(&url).await?;
	let schema: FormSchema =
		serde_json::from_value(body).map_err(|e| ProxyError::Shape(e.to_string()))?;
	debug!(module_id, schema_id, "schema fetched");
	Ok(schema)
}
