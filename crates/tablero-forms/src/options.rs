//! Remote option provider
//!
//! Resolves a combo field's selectable options with a single GET
//! through the generic proxy. Extraction is purely positional: the
//! first record's first two object keys, in declaration order, are the
//! id field and the label field. Key order survives deserialization
//! because `serde_json` is built with `preserve_order`.

use serde_json::Value;
use tablero_proxy::Proxy;
use tablero_schema::ChoiceOption;
use tracing::warn;

/// Resolves the option list behind `source_url`
///
/// Failure (fetch error, non-array response, empty array, first record
/// with fewer than two keys) logs a warning and yields an empty option
/// set. There is no retry; the field simply stays without options until
/// its host remounts or the URL changes.
pub async fn resolve_options(proxy: &dyn Proxy, source_url: &str) -> Vec<ChoiceOption> {
	let body = match proxy.get_json(source_url).await {
		Ok(body) => body,
		Err(e) => {
			warn!(url = source_url, error = %e, "option resolution failed");
			return vec![];
		}
	};

	extract_options(&body).unwrap_or_else(|reason| {
		warn!(url = source_url, reason, "option response unusable");
		vec![]
	})
}

fn extract_options(body: &Value) -> Result<Vec<ChoiceOption>, &'static str> {
	let records = body.as_array().ok_or("response is not an array")?;
	let first = records.first().ok_or("response array is empty")?;
	let first = first.as_object().ok_or("first record is not an object")?;

	let mut keys = first.keys();
	let id_key = keys.next().ok_or("first record has no keys")?.clone();
	let label_key = keys.next().ok_or("first record has fewer than two keys")?.clone();

	Ok(records
		.iter()
		.filter_map(|record| {
			let record = record.as_object()?;
			Some(ChoiceOption::new(
				scalar_text(record.get(&label_key)?),
				scalar_text(record.get(&id_key)?),
			))
		})
		.collect())
}

fn scalar_text(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}
