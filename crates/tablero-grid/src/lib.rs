//! Adaptive data-grid engine for Tablero
//!
//! One [`GridEngine`] renders one backend-sourced table: it fetches
//! rows through the generic proxy, infers a per-column search mode from
//! sampled data, accumulates AND-combined filters, paginates with a
//! fixed page size, and exports the unfiltered row set as CSV.
//!
//! Filtering, inference and pagination are pure, synchronous
//! recomputations; only the fetch suspends. Responses of superseded
//! fetches are discarded by generation token, so a rapid succession of
//! `api_url` changes cannot interleave render state.

pub mod dates;
pub mod engine;
pub mod error;
pub mod export;
pub mod filter;
pub mod pagination;
pub mod payload;
pub mod search;

pub use engine::{FetchTicket, GridEngine, GridState};
pub use error::{GridError, Result};
pub use export::export_csv;
pub use filter::Filter;
pub use pagination::{PageItem, Pagination};
pub use search::{infer_search_mode, SearchMode};
