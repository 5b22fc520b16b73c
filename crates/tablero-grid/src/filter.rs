//! Filter accumulation and row matching
//!
//! Filters are `(column, value)` pairs. Distinct pairs AND-combine; a
//! date-range pair encodes its bounds as `"start|end"` ISO dates with
//! either side optionally empty (open-ended). With no column scoped,
//! one global term substring-matches any field of a row.

use crate::dates::{parse_cell_date, parse_iso_bound};
use crate::search::SearchMode;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// One accumulated filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
	/// Column the filter applies to
	pub column: String,
	/// Term, selected value, or `"start|end"` for date ranges
	pub value: String,
}

impl Filter {
	/// Create a filter pair
	pub fn new(column: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			column: column.into(),
			value: value.into(),
		}
	}

	/// Encodes a date-range filter value from its ISO bounds
	pub fn date_range(
		column: impl Into<String>,
		start: Option<&str>,
		end: Option<&str>,
	) -> Self {
		Self {
			column: column.into(),
			value: format!("{}|{}", start.unwrap_or(""), end.unwrap_or("")),
		}
	}
}

/// Cell rendered as text, the way the operator sees it
pub fn cell_text(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
	haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether a row passes one filter under the column's inferred mode
fn matches_filter(row: &Map<String, Value>, filter: &Filter, mode: Option<&SearchMode>) -> bool {
	let cell = row.get(&filter.column).map(cell_text).unwrap_or_default();

	if matches!(mode, Some(SearchMode::DateRange)) {
		let (start, end) = match filter.value.split_once('|') {
			Some(bounds) => bounds,
			None => return false,
		};
		// A malformed cell fails the match; it never aborts filtering.
		let date = match parse_cell_date(&cell) {
			Some(date) => date,
			None => return false,
		};
		if let Some(start) = parse_iso_bound(start) {
			if date < start {
				return false;
			}
		}
		if let Some(end) = parse_iso_bound(end) {
			if date > end {
				return false;
			}
		}
		return true;
	}

	if matches!(mode, Some(SearchMode::Select { .. })) {
		// Closed choice: exact value, with the empty choice matching
		// blank cells.
		return cell == filter.value;
	}

	contains_ci(&cell, &filter.value)
}

/// Whether a row passes every accumulated filter plus the global term
pub fn row_matches(
	row: &Map<String, Value>,
	filters: &[Filter],
	modes: &HashMap<String, SearchMode>,
	global_term: Option<&str>,
) -> bool {
	for filter in filters {
		if !matches_filter(row, filter, modes.get(&filter.column)) {
			return false;
		}
	}
	if let Some(term) = global_term {
		if !term.is_empty() {
			// Any field may contain the term (OR across fields).
			return row.values().any(|v| contains_ci(&cell_text(v), term));
		}
	}
	true
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
	fn test_typing_filter_is_substring_ci() {
		let r = row(&[("Nombre", json!("Ana Martínez"))]);
		let modes = HashMap::new();
		assert!(row_matches(&r, &[Filter::new("Nombre", "martí")], &modes, None));
		assert!(!row_matches(&r, &[Filter::new("Nombre", "lópez")], &modes, None));
	}

	#[test]
	fn test_filters_and_combine() {
		let r = row(&[("A", json!("uno")), ("B", json!("dos"))]);
		let modes = HashMap::new();
		let both = vec![Filter::new("A", "uno"), Filter::new("B", "dos")];
		assert!(row_matches(&r, &both, &modes, None));

		let conflicting = vec![Filter::new("A", "uno"), Filter::new("B", "tres")];
		assert!(!row_matches(&r, &conflicting, &modes, None));
	}

	#[test]
	fn test_select_filter_is_exact() {
		let r = row(&[("Estado", json!("Activo"))]);
		let mut modes = HashMap::new();
		modes.insert(
			"Estado".to_string(),
			SearchMode::Select {
				choices: vec!["Activo".to_string()],
			},
		);
		assert!(row_matches(&r, &[Filter::new("Estado", "Activo")], &modes, None));
		assert!(!row_matches(&r, &[Filter::new("Estado", "Activ")], &modes, None));
	}

	#[test]
	fn test_date_range_includes_and_excludes() {
		let r = row(&[("Fecha", json!("05/06/2024 10:15:00 a. m."))]);
		let mut modes = HashMap::new();
		modes.insert("Fecha".to_string(), SearchMode::DateRange);

		let june = Filter::new("Fecha", "2024-06-01|2024-06-30");
		assert!(row_matches(&r, &[june], &modes, None));

		let from_july = Filter::new("Fecha", "2024-07-01|");
		assert!(!row_matches(&r, &[from_july], &modes, None));
	}

	#[test]
	fn test_open_ended_bounds() {
		let r = row(&[("Fecha", json!("05/06/2024 10:15:00 a. m."))]);
		let mut modes = HashMap::new();
		modes.insert("Fecha".to_string(), SearchMode::DateRange);

		assert!(row_matches(&r, &[Filter::new("Fecha", "|2024-12-31")], &modes, None));
		assert!(row_matches(&r, &[Filter::new("Fecha", "2024-01-01|")], &modes, None));
		assert!(row_matches(&r, &[Filter::new("Fecha", "|")], &modes, None));
	}

	#[test]
	fn test_malformed_date_cell_fails_match() {
		let r = row(&[("Fecha", json!("no es fecha"))]);
		let mut modes = HashMap::new();
		modes.insert("Fecha".to_string(), SearchMode::DateRange);
		assert!(!row_matches(
			&r,
			&[Filter::new("Fecha", "2024-01-01|2024-12-31")],
			&modes,
			None
		));
	}

	#[test]
	fn test_time_of_day_is_discarded() {
		// A late-evening cell still falls on its calendar date.
		let r = row(&[("Fecha", json!("30/06/2024 11:59:59 p. m."))]);
		let mut modes = HashMap::new();
		modes.insert("Fecha".to_string(), SearchMode::DateRange);
		assert!(row_matches(
			&r,
			&[Filter::new("Fecha", "2024-06-30|2024-06-30")],
			&modes,
			None
		));
	}

	#[test]
	fn test_global_term_or_across_fields() {
		let r = row(&[("A", json!("uno")), ("B", json!("dos"))]);
		let modes = HashMap::new();
		assert!(row_matches(&r, &[], &modes, Some("DOS")));
		assert!(!row_matches(&r, &[], &modes, Some("tres")));
		assert!(row_matches(&r, &[], &modes, Some("")));
	}

	#[test]
	fn test_numeric_cells_match_as_text() {
		let r = row(&[("Monto", json!(1500.5))]);
		let modes = HashMap::new();
		assert!(row_matches(&r, &[Filter::new("Monto", "1500")], &modes, None));
	}
}
