//! Generic backend proxy
//!
//! This module provides access to tablero-proxy: the single HTTP
//! boundary every remote fetch and submission goes through, plus a
//! TTL-based catalog cache for resolved option lists.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tablero::proxy::{HttpProxy, Proxy};
//!
//! let proxy = HttpProxy::new();
//! let body = proxy.get_json("https://backend/catalogos/paises").await?;
//! ```

// Re-export all tablero-proxy functionality
pub use tablero_proxy::*;
