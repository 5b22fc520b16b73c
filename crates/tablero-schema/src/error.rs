//! Error types for schema validation

/// Errors raised while validating a schema document
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
	/// Two addressable fields share the same name within one schema
	#[error("Duplicate field name '{0}' in schema")]
	DuplicateName(String),
	/// Two options of a select field share the same value
	#[error("Duplicate option value '{value}' in field '{field}'")]
	DuplicateOption { field: String, value: String },
}

/// Result alias for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;
