//! # Tablero
//!
//! A schema-driven UI generation engine for Rust: dynamic forms, composed
//! pages and adaptive data grids, all described by JSON documents a backend
//! serves at runtime.
//!
//! Tablero splits the engine into focused crates and re-exports them here
//! behind feature flags:
//!
//! - **Schema algebra** (`schema`): the closed set of form field kinds,
//!   form/page documents and their serde representations
//! - **Backend proxy** (`proxy`): the HTTP boundary every remote fetch and
//!   submission goes through, plus a TTL catalog cache
//! - **Forms** (`forms`): the schema builder used to author forms and the
//!   renderer that hosts a filled-in form instance
//! - **Pages** (`pages`): descriptor-to-component composition and page
//!   loading with maintenance fallback
//! - **Grid** (`grid`): the data-grid engine with per-column search-mode
//!   inference, accumulable filters, pagination and CSV export
//!
//! ## Feature Flags
//!
//! - `full` (default) - every layer
//! - `schema` - schema types only
//! - `proxy` - backend proxy and catalog cache
//! - `forms` - builder and renderer (implies `schema`, `proxy`)
//! - `grid` - data-grid engine (implies `schema`, `proxy`)
//! - `pages` - page composition (implies `forms`, `grid`)
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use tablero::prelude::*;
//!
//! let proxy = HttpProxy::new();
//! match load_page(&proxy, "https://backend/pages", "clientes").await {
//!     PageState::Ready(page) => {
//!         for descriptor in &page.components {
//!             let component = compose(descriptor);
//!             println!("{}", component.render());
//!         }
//!     }
//!     PageState::Maintenance => println!("pagina en mantenimiento"),
//! }
//! ```

#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "grid")]
pub mod grid;
#[cfg(feature = "pages")]
pub mod pages;
#[cfg(feature = "proxy")]
pub mod proxy;
#[cfg(feature = "schema")]
pub mod schema;

// Re-export the schema algebra
#[cfg(feature = "schema")]
pub use tablero_schema::{
	ChoiceOption, ComponentDescriptor, FieldKind, FieldSpec, FormSchema, HttpMethod, InputKind,
	ModalSpec, PageSchema, SchemaError, SubmitSpec,
};

// Re-export the backend boundary
#[cfg(feature = "proxy")]
pub use tablero_proxy::{CatalogCache, HttpProxy, Proxy, ProxyError, ProxyRequest, ProxyResponse};

// Re-export form authoring and hosting
#[cfg(feature = "forms")]
pub use tablero_forms::{
	BuilderError, EitherSide, FormRenderer, SchemaBuilder, ValidationError, fetch_schema,
	resolve_options,
};

// Re-export page composition
#[cfg(feature = "pages")]
pub use tablero_pages::{Component, PageState, compose, load_page};

// Re-export the grid engine
#[cfg(feature = "grid")]
pub use tablero_grid::{
	Filter, GridEngine, GridError, GridState, PageItem, Pagination, SearchMode, export_csv,
	infer_search_mode,
};

// Re-export common external dependencies
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json;
pub use tokio;

pub mod prelude {
	// External
	pub use async_trait::async_trait;
	pub use serde::{Deserialize, Serialize};

	// Schema feature - the field algebra and documents
	#[cfg(feature = "schema")]
	pub use crate::{
		ChoiceOption, ComponentDescriptor, FieldKind, FieldSpec, FormSchema, InputKind, PageSchema,
	};

	// Proxy feature - the backend boundary
	#[cfg(feature = "proxy")]
	pub use crate::{HttpProxy, Proxy, ProxyError};

	// Forms feature - authoring and hosting
	#[cfg(feature = "forms")]
	pub use crate::{FormRenderer, SchemaBuilder, ValidationError};

	// Pages feature - composition and loading
	#[cfg(feature = "pages")]
	pub use crate::{Component, PageState, compose, load_page};

	// Grid feature - the data-grid engine
	#[cfg(feature = "grid")]
	pub use crate::{GridEngine, GridState, SearchMode};
}
