//! Form error types

use tablero_proxy::ProxyError;
use tablero_schema::SchemaError;

/// Submission-time validation failures
///
/// These block submission and are surfaced to the operator; they never
/// mutate persisted state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	/// A required field has no non-empty bound value
	#[error("Field '{field}' is required")]
	Required { field: String },
	/// Neither child of an either group holds a non-empty value
	#[error("Either group requires a value in '{left}' or '{right}'")]
	EitherEmpty { left: String, right: String },
}

/// Builder-time failures
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
	/// The schema itself is defective (duplicate names, duplicate options)
	#[error(transparent)]
	Schema(#[from] SchemaError),
	/// A locally held either demo value pair is entirely empty
	#[error(transparent)]
	Validation(#[from] ValidationError),
	/// Persisting through the proxy failed; the schema stays unsaved
	#[error(transparent)]
	Proxy(#[from] ProxyError),
	/// The storage endpoint answered without an assigned identifier
	#[error("Storage response carried no assigned id: {0}")]
	MissingId(String),
}
