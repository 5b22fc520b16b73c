//! Page composition for Tablero
//!
//! Interprets a [`tablero_schema::PageSchema`]'s ordered descriptor
//! list and instantiates the matching component: heading, text block,
//! data grid, or button with an embedded form modal. A descriptor this
//! build does not recognize renders a visible placeholder instead of
//! failing the page.

pub mod component;
pub mod compose;
pub mod loader;

pub use component::{ButtonComponent, Component, GridComponent, Heading, TextBlock, Unknown};
pub use compose::compose;
pub use loader::{load_page, PageState};
