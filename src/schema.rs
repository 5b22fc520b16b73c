//! Shared schema model
//!
//! This module provides access to tablero-schema: the persisted JSON
//! artifacts the rest of the engine consumes.
//!
//! - **Field algebra**: the closed set of field kinds a form can carry
//!   (simple, select, combo, either, nest)
//! - **Form documents**: title, description, ordered fields and the
//!   submission target
//! - **Page documents**: ordered component descriptors with tolerant
//!   decoding of unrecognized types
//!
//! ## Example
//!
//! ```rust,ignore
//! use tablero::schema::{FieldKind, FieldSpec, FormSchema, SubmitSpec, HttpMethod};
//!
//! let mut schema = FormSchema::new(
//!     1,
//!     "Alta de cliente",
//!     "",
//!     SubmitSpec {
//!         label: "Guardar".into(),
//!         target_url: "https://backend/clientes".into(),
//!         method: HttpMethod::Post,
//!     },
//! );
//! schema.fields.push(FieldSpec::default_of(FieldKind::Simple, "nombre"));
//! assert!(schema.validate_names().is_ok());
//! ```

// Re-export all tablero-schema functionality
pub use tablero_schema::*;
