//! Locale-aware date parsing for grid cells
//!
//! Backend rows carry timestamps as `dd/MM/yyyy hh:mm:ss a. m.` /
//! `p. m.` (12-hour clock with localized meridian markers). Range
//! comparisons discard the time of day and compare calendar dates only.
//! Malformed cells never panic; they simply fail to parse and are
//! excluded from the match.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Parses a grid cell timestamp, e.g. `"05/06/2024 10:15:00 a. m."`
///
/// Meridian markers are matched after stripping dots and spaces, so
/// `"a. m."`, `"a.m."` and `"AM"` all parse.
pub fn parse_cell_datetime(cell: &str) -> Option<NaiveDateTime> {
	let mut parts = cell.split_whitespace();
	let date_part = parts.next()?;
	let time_part = parts.next()?;
	let meridian: String = parts
		.collect::<String>()
		.chars()
		.filter(|c| c.is_ascii_alphabetic())
		.collect::<String>()
		.to_lowercase();

	let pm = match meridian.as_str() {
		"am" => false,
		"pm" => true,
		_ => return None,
	};

	let date = NaiveDate::parse_from_str(date_part, "%d/%m/%Y").ok()?;
	let clock = NaiveTime::parse_from_str(time_part, "%H:%M:%S").ok()?;

	use chrono::Timelike;
	let hour12 = clock.hour();
	if hour12 == 0 || hour12 > 12 {
		return None;
	}
	let hour = (hour12 % 12) + if pm { 12 } else { 0 };
	let time = NaiveTime::from_hms_opt(hour, clock.minute(), clock.second())?;
	Some(NaiveDateTime::new(date, time))
}

/// Calendar date of a grid cell, for range comparisons
pub fn parse_cell_date(cell: &str) -> Option<NaiveDate> {
	parse_cell_datetime(cell).map(|dt| dt.date())
}

/// Parses one ISO bound (`yyyy-MM-dd`) of a date-range filter; an empty
/// bound means open-ended
pub fn parse_iso_bound(bound: &str) -> Option<NaiveDate> {
	if bound.trim().is_empty() {
		return None;
	}
	NaiveDate::parse_from_str(bound.trim(), "%Y-%m-%d").ok()
}
