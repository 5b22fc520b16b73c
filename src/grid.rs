//! Adaptive data-grid engine
//!
//! This module provides access to tablero-grid: one engine per mounted
//! table, covering fetch, per-column search-mode inference, accumulable
//! filters, locale date parsing, pagination and CSV export.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tablero::grid::GridEngine;
//!
//! let mut engine = GridEngine::new(api_url);
//! engine.load(&proxy).await;
//! engine.select_column("Fecha");
//! engine.apply_date_range("2024-01-01", "2024-12-31");
//! let rows = engine.page_rows();
//! ```

// Re-export all tablero-grid functionality
pub use tablero_grid::*;
