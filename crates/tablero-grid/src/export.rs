//! CSV export
//!
//! Export always serializes the unfiltered original row set: the
//! document captures everything fetched, independent of the operator's
//! current filter view.

use crate::error::{GridError, Result};
use crate::filter::cell_text;
use serde_json::{Map, Value};

/// Serializes rows as a quote-escaped comma-separated document
///
/// The header line is the visible column set; each row renders its
/// cells as the operator sees them, empty for missing keys.
pub fn export_csv(columns: &[String], rows: &[Map<String, Value>]) -> Result<String> {
	let mut writer = csv::WriterBuilder::new()
		.quote_style(csv::QuoteStyle::Necessary)
		.from_writer(vec![]);

	writer
		.write_record(columns)
		.map_err(|e| GridError::Export(e.to_string()))?;
	for row in rows {
		let record: Vec<String> = columns
			.iter()
			.map(|c| row.get(c).map(cell_text).unwrap_or_default())
			.collect();
		writer
			.write_record(&record)
			.map_err(|e| GridError::Export(e.to_string()))?;
	}

	let bytes = writer
		.into_inner()
		.map_err(|e| GridError::Export(e.to_string()))?;
	String::from_utf8(bytes).map_err(|e| GridError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn row(pairs: &[(&str, Value)]) -> Map<String, Value> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.clone()))
			.collect()
	}

	#[test]
	fn test_header_and_rows() {
		let columns = vec!["Fecha".to_string(), "Monto".to_string()];
		let rows = vec![row(&[
			("Fecha", json!("01/01/2024 09:00:00 a. m.")),
			("Monto", json!("100")),
		])];

		let csv = export_csv(&columns, &rows).unwrap();
		let lines: Vec<&str> = csv.lines().collect();
		assert_eq!(lines.len(), 2);
		assert_eq!(lines[0], "Fecha,Monto");
		assert_eq!(lines[1], "01/01/2024 09:00:00 a. m.,100");
	}

	#[test]
	fn test_cells_with_commas_are_quoted() {
		let columns = vec!["Nombre".to_string()];
		let rows = vec![row(&[("Nombre", json!("Pérez, Ana \"La Jefa\""))])];

		let csv = export_csv(&columns, &rows).unwrap();
		assert!(csv.lines().nth(1).unwrap().starts_with('"'));
		assert!(csv.contains("\"\"La Jefa\"\""));
	}

	#[test]
	fn test_missing_keys_render_empty() {
		let columns = vec!["A".to_string(), "B".to_string()];
		let rows = vec![row(&[("A", json!("x"))])];
		let csv = export_csv(&columns, &rows).unwrap();
		assert_eq!(csv.lines().nth(1).unwrap(), "x,");
	}
}
