//! Page composition
//!
//! This module provides access to tablero-pages: loading a page
//! descriptor by slug and instantiating its ordered components.
//!
//! - **Loader**: absent or structurally incomplete descriptors degrade
//!   to a maintenance state instead of an error page
//! - **Composer**: one component per descriptor; unknown types render a
//!   visible placeholder
//! - **Components**: heading, text block, data-grid mount, and button
//!   with a layered form modal
//!
//! ## Example
//!
//! ```rust,ignore
//! use tablero::pages::{compose, load_page, PageState};
//!
//! if let PageState::Ready(page) = load_page(&proxy, base, "clientes").await {
//!     for descriptor in &page.components {
//!         println!("{}", compose(descriptor).render());
//!     }
//! }
//! ```

// Re-export all tablero-pages functionality
pub use tablero_pages::*;
