//! Schema builder and form renderer
//!
//! This module provides access to tablero-forms: the design-time
//! builder that authors a form schema and the run-time renderer that
//! hosts a filled-in instance of it.
//!
//! - **Builder**: add/retype/remove fields, edit select options,
//!   attach demo values, validate and persist
//! - **Renderer**: live input bindings, remote combo resolution,
//!   conditional nested fields, either-group validation, submission
//!
//! ## Example
//!
//! ```rust,ignore
//! use tablero::forms::FormRenderer;
//!
//! let mut renderer = FormRenderer::new(schema);
//! renderer.resolve_combos(&proxy).await;
//! renderer.set_value("nombre", "Ana");
//! let payload = renderer.submit()?;
//! ```

// Re-export all tablero-forms functionality
pub use tablero_forms::*;
