//! Form handling for Tablero
//!
//! Three pieces live here:
//! - the remote option provider ([`options`]): resolves a combo field's
//!   choices from a backend catalog through the generic proxy;
//! - the schema builder ([`builder`]): the design-time editor that
//!   mutates a [`tablero_schema::FormSchema`] in memory and persists it;
//! - the renderer ([`renderer`]): the run-time consumer that turns a
//!   schema into live input bindings with conditional nested fields and
//!   either-group validation.
//!
//! The builder and the renderer never run against the same instance;
//! the schema JSON is the only artifact that travels between them.

pub mod builder;
pub mod error;
pub mod options;
pub mod renderer;
pub mod store;

pub use builder::{EitherSide, SchemaBuilder};
pub use error::{BuilderError, ValidationError};
pub use options::resolve_options;
pub use renderer::FormRenderer;
pub use store::fetch_schema;
