//! Per-column search-mode inference
//!
//! A pure function of `(column_name, sampled_values)`: re-running it on
//! unchanged inputs always yields the same mode.

use crate::filter::cell_text;
use serde_json::Value;
use std::collections::BTreeSet;

/// Maximum distinct values for a column to qualify as a closed choice
const SELECT_MAX_UNIQUE: usize = 20;
/// Maximum string length for a value to qualify as a closed choice
const SELECT_MAX_LEN: usize = 50;
/// A column mostly made of blanks falls back to free-text search
const SELECT_MAX_BLANK_RATIO: f64 = 0.8;
/// Column-name token that forces date-range filtering
const DATE_TOKEN: &str = "fecha";

/// Filtering UI strategy for one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMode {
	/// Free-text, case-insensitive substring match
	Typing,
	/// Closed choice of the unique values, alphabetically sorted,
	/// blanks last
	Select { choices: Vec<String> },
	/// Calendar date range with open-ended bounds
	DateRange,
}

/// Whether a sampled value is one of the discarded blank forms:
/// null/missing, empty/whitespace strings, `"null"`, `"undefined"`
fn is_blank(value: &Value) -> bool {
	match value {
		Value::Null => true,
		Value::String(s) => {
			let t = s.trim();
			t.is_empty() || t == "null" || t == "undefined"
		}
		_ => false,
	}
}

/// Closed-choice mode for a column regardless of its data profile
///
/// Used for columns the page descriptor pre-scoped as select filters;
/// the cardinality, length and blank-ratio gates of inference do not
/// apply. Non-string values render the way the operator sees them.
pub fn forced_select_mode(samples: &[Value]) -> SearchMode {
	let mut unique = BTreeSet::new();
	let mut blanks = 0usize;
	for value in samples {
		if is_blank(value) {
			blanks += 1;
		} else {
			unique.insert(cell_text(value));
		}
	}
	let mut choices: Vec<String> = unique.into_iter().collect();
	if blanks > 0 {
		choices.push(String::new());
	}
	SearchMode::Select { choices }
}

/// Infers the search mode for a column from all of its sampled values
///
/// Missing cells must be passed as `Value::Null` so the blank ratio
/// counts them.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tablero_grid::{infer_search_mode, SearchMode};
///
/// let samples = vec![json!("01/01/2024 09:00:00 a. m.")];
/// assert_eq!(infer_search_mode("FechaAlta", &samples), SearchMode::DateRange);
/// ```
pub fn infer_search_mode(column: &str, samples: &[Value]) -> SearchMode {
	if column.to_lowercase().contains(DATE_TOKEN) {
		return SearchMode::DateRange;
	}

	let total = samples.len();
	let blanks = samples.iter().filter(|v| is_blank(v)).count();

	let mut unique = BTreeSet::new();
	let mut all_short_strings = true;
	for value in samples.iter().filter(|v| !is_blank(v)) {
		match value {
			Value::String(s) if s.len() <= SELECT_MAX_LEN => {
				unique.insert(s.clone());
			}
			_ => {
				all_short_strings = false;
				break;
			}
		}
	}

	let blank_ratio = if total == 0 {
		1.0
	} else {
		blanks as f64 / total as f64
	};

	if all_short_strings
		&& !unique.is_empty()
		&& unique.len() <= SELECT_MAX_UNIQUE
		&& blank_ratio < SELECT_MAX_BLANK_RATIO
	{
		let mut choices: Vec<String> = unique.into_iter().collect();
		if blanks > 0 {
			// Blank cells remain selectable, after every real value.
			choices.push(String::new());
		}
		return SearchMode::Select { choices };
	}

	SearchMode::Typing
}
