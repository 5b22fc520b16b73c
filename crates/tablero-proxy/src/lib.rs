//! Generic backend proxy for Tablero
//!
//! Every network call the engine makes (schema persistence, option
//! resolution, grid data, page descriptors) goes through the [`Proxy`]
//! trait: a single `{method, url, body?}` forwarding contract that
//! returns the upstream status and body verbatim. The engine only ever
//! treats a non-success status as [`ProxyError::Status`]; it never sees
//! the backend's address or auth scheme.

pub mod cache;
pub mod error;
pub mod proxy;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use cache::CatalogCache;
pub use error::{ProxyError, Result};
pub use proxy::{HttpProxy, Proxy, ProxyRequest, ProxyResponse};
