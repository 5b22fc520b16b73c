//! Proxy error taxonomy
//!
//! Failures here are always recovered at the boundary of the component
//! that issued the call: a failed fetch renders inline as a message,
//! never as a page-wide crash.

/// Errors from the generic proxy
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
	/// Transport-level failure (DNS, connect, timeout)
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),
	/// Upstream answered with a non-success status
	#[error("Upstream returned {status}: {message}")]
	Status { status: u16, message: String },
	/// Response body did not have the expected shape
	#[error("Malformed response: {0}")]
	Shape(String),
}

impl ProxyError {
	/// The original upstream status, when one was received
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Status { status, .. } => Some(*status),
			Self::Network(e) => e.status().map(|s| s.as_u16()),
			Self::Shape(_) => None,
		}
	}
}

/// Result alias for proxy operations
pub type Result<T> = std::result::Result<T, ProxyError>;
