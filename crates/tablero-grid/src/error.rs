//! Grid error types

use tablero_proxy::ProxyError;

/// Errors from the grid engine
#[derive(Debug, thiserror::Error)]
pub enum GridError {
	/// The fetch through the generic proxy failed
	#[error(transparent)]
	Proxy(#[from] ProxyError),
	/// The payload lacked a usable header or row list
	#[error("Incomplete grid data: {0}")]
	Incomplete(String),
	/// CSV serialization failed
	#[error("Export failed: {0}")]
	Export(String),
}

/// Result alias for grid operations
pub type Result<T> = std::result::Result<T, GridError>;
