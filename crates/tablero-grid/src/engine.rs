//! The grid engine
//!
//! Owns the runtime state of one backend-sourced table. All state is
//! exclusive to the instance; filtering, inference and pagination are
//! synchronous recomputations, and only the fetch suspends.

use crate::error::{GridError, Result};
use crate::export::export_csv;
use crate::filter::{row_matches, Filter};
use crate::pagination::Pagination;
use crate::payload::decode_payload;
use crate::search::{forced_select_mode, infer_search_mode, SearchMode};
use serde_json::{Map, Value};
use std::collections::HashMap;
use tablero_proxy::{Proxy, ProxyError};
use tracing::{debug, warn};

/// Render state of the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridState {
	/// Nothing fetched yet
	Empty,
	/// Rows are loaded and renderable
	Ready,
	/// The fetch succeeded but the payload shape was unusable; terminal
	/// for that fetch, no partial rendering
	Incomplete(String),
	/// The fetch itself failed; rendered inline, never propagated
	Failed(String),
}

/// Token tying a fetch to the generation that issued it
///
/// A response carrying a stale generation is discarded, so a rapid
/// succession of `api_url` changes cannot interleave render state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
	generation: u64,
}

/// One data grid bound to a backend URL
pub struct GridEngine {
	api_url: String,
	state: GridState,
	/// Columns the page descriptor pre-scoped as closed-choice filters
	select_columns: Vec<String>,
	columns: Vec<String>,
	rows: Vec<Map<String, Value>>,
	filters: Vec<Filter>,
	global_term: Option<String>,
	search_column: Option<String>,
	modes: HashMap<String, SearchMode>,
	page: usize,
	generation: u64,
}

impl GridEngine {
	/// Creates an engine for a backend URL; nothing is fetched yet
	///
	/// # Examples
	///
	/// ```
	/// use tablero_grid::{GridEngine, GridState};
	///
	/// let grid = GridEngine::new("https://backend/api/clientes");
	/// assert_eq!(*grid.state(), GridState::Empty);
	/// ```
	pub fn new(api_url: impl Into<String>) -> Self {
		Self {
			api_url: api_url.into(),
			state: GridState::Empty,
			select_columns: vec![],
			columns: vec![],
			rows: vec![],
			filters: vec![],
			global_term: None,
			search_column: None,
			modes: HashMap::new(),
			page: 1,
			generation: 0,
		}
	}

	/// Pre-scopes columns as closed-choice filters
	///
	/// Header selection on these columns always yields
	/// [`SearchMode::Select`], bypassing inference. Configuration, not
	/// fetch state: it survives refetches.
	pub fn with_select_columns(mut self, columns: impl IntoIterator<Item = String>) -> Self {
		self.select_columns = columns.into_iter().collect();
		self
	}

	/// The backend URL currently bound
	pub fn api_url(&self) -> &str {
		&self.api_url
	}

	/// Columns pre-scoped as closed-choice filters
	pub fn select_columns(&self) -> &[String] {
		&self.select_columns
	}

	/// Rebinds the backend URL; takes effect on the next load
	pub fn set_api_url(&mut self, api_url: impl Into<String>) {
		self.api_url = api_url.into();
	}

	/// Current render state
	pub fn state(&self) -> &GridState {
		&self.state
	}

	/// Visible column keys
	pub fn columns(&self) -> &[String] {
		&self.columns
	}

	/// The unfiltered row set of the last successful fetch
	pub fn rows(&self) -> &[Map<String, Value>] {
		&self.rows
	}

	/// Accumulated filters
	pub fn filters(&self) -> &[Filter] {
		&self.filters
	}

	/// The column currently scoped for search input, if any
	pub fn search_column(&self) -> Option<&str> {
		self.search_column.as_deref()
	}

	/// The inferred mode of a column, once its header was selected
	pub fn mode_for(&self, column: &str) -> Option<&SearchMode> {
		self.modes.get(column)
	}

	/// Fetches the bound URL through the proxy and applies the response
	pub async fn load(&mut self, proxy: &dyn Proxy) -> Result<()> {
		let ticket = self.begin_fetch();
		let url = self.api_url.clone();
		let result = proxy.get_json(&url).await;
		self.apply_response(ticket, result)
	}

	/// Starts a fetch, superseding any fetch still in flight
	pub fn begin_fetch(&mut self) -> FetchTicket {
		self.generation += 1;
		FetchTicket {
			generation: self.generation,
		}
	}

	/// Applies a fetch response, unless its ticket is stale
	///
	/// On success the grid state is repopulated wholesale: filters,
	/// scoping, inferred modes and pagination all reset because the row
	/// set changed identity.
	pub fn apply_response(
		&mut self,
		ticket: FetchTicket,
		result: std::result::Result<Value, ProxyError>,
	) -> Result<()> {
		if ticket.generation != self.generation {
			debug!(
				stale = ticket.generation,
				current = self.generation,
				"discarding superseded fetch"
			);
			return Ok(());
		}

		let body = match result {
			Ok(body) => body,
			Err(e) => {
				warn!(url = %self.api_url, error = %e, "grid fetch failed");
				self.state = GridState::Failed(e.to_string());
				return Err(GridError::Proxy(e));
			}
		};

		match decode_payload(&body) {
			Ok(payload) => {
				self.columns = payload.columns;
				self.rows = payload.rows;
				self.filters.clear();
				self.global_term = None;
				self.search_column = None;
				self.modes.clear();
				self.page = 1;
				self.state = GridState::Ready;
				Ok(())
			}
			Err(e) => {
				warn!(url = %self.api_url, error = %e, "grid payload incomplete");
				self.state = GridState::Incomplete(e.to_string());
				Err(e)
			}
		}
	}

	/// Header selection: scopes a column for search input, inferring its
	/// mode from all sampled rows
	///
	/// Re-selecting the already-scoped column clears scoping entirely
	/// (toggle semantics). Accumulated filters persist across scoping
	/// changes.
	pub fn select_column(&mut self, column: &str) {
		if self.search_column.as_deref() == Some(column) {
			self.search_column = None;
			return;
		}

		let samples: Vec<Value> = self
			.rows
			.iter()
			.map(|row| row.get(column).cloned().unwrap_or(Value::Null))
			.collect();
		let mode = if self.select_columns.iter().any(|c| c == column) {
			forced_select_mode(&samples)
		} else {
			infer_search_mode(column, &samples)
		};
		self.modes.insert(column.to_string(), mode);
		self.search_column = Some(column.to_string());
	}

	/// Applies a search term
	///
	/// With a column scoped, the term accumulates as a `(column, value)`
	/// filter; without one it becomes the global any-field term. Either
	/// way the filtered set changed, so the page resets to 1.
	pub fn apply_search(&mut self, term: impl Into<String>) {
		let term = term.into();
		match &self.search_column {
			Some(column) => {
				let filter = Filter::new(column.clone(), term);
				if !self.filters.contains(&filter) {
					self.filters.push(filter);
				}
			}
			None => {
				self.global_term = (!term.is_empty()).then_some(term);
			}
		}
		self.page = 1;
	}

	/// Accumulates a date-range filter with ISO bounds, either side
	/// open-ended when `None`
	///
	/// A range filter implies date semantics: a column that never had
	/// its header selected gets [`SearchMode::DateRange`] here, so the
	/// encoded bounds are never substring-matched as text.
	pub fn apply_date_range(&mut self, column: &str, start: Option<&str>, end: Option<&str>) {
		self.modes
			.entry(column.to_string())
			.or_insert(SearchMode::DateRange);
		let filter = Filter::date_range(column, start, end);
		if !self.filters.contains(&filter) {
			self.filters.push(filter);
		}
		self.page = 1;
	}

	/// Drops one accumulated filter pair
	pub fn remove_filter(&mut self, column: &str, value: &str) {
		self.filters
			.retain(|f| !(f.column == column && f.value == value));
		self.page = 1;
	}

	/// Drops every filter and the global term
	pub fn clear_filters(&mut self) {
		self.filters.clear();
		self.global_term = None;
		self.page = 1;
	}

	/// Rows passing every accumulated filter plus the global term
	pub fn filtered_rows(&self) -> Vec<&Map<String, Value>> {
		self.rows
			.iter()
			.filter(|row| {
				row_matches(row, &self.filters, &self.modes, self.global_term.as_deref())
			})
			.collect()
	}

	/// Pagination over the current filtered set
	pub fn pagination(&self) -> Pagination {
		let mut pagination = Pagination::new();
		pagination.set_total_items(self.filtered_rows().len());
		pagination.set_page(self.page);
		pagination
	}

	/// Navigates to a page, clamped into the valid range
	pub fn set_page(&mut self, page: usize) {
		let mut pagination = self.pagination();
		pagination.set_page(page);
		self.page = pagination.current_page;
	}

	/// The filtered rows of the current page
	pub fn page_rows(&self) -> Vec<&Map<String, Value>> {
		let pagination = self.pagination();
		let filtered = self.filtered_rows();
		filtered[pagination.start_index()..pagination.end_index()].to_vec()
	}

	/// Exports the unfiltered original row set as CSV, independent of
	/// the active filter view
	pub fn export(&self) -> Result<String> {
		export_csv(&self.columns, &self.rows)
	}
}
