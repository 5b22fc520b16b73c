//! Form schema: the persisted artifact the builder emits and the
//! renderer consumes

use crate::error::{Result, SchemaError};
use crate::field::FieldSpec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// HTTP method for a form's submit target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
	#[serde(rename = "GET")]
	Get,
	#[serde(rename = "POST")]
	Post,
	#[serde(rename = "PUT")]
	Put,
	#[serde(rename = "DELETE")]
	Delete,
}

impl HttpMethod {
	/// Uppercase wire representation
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Post => "POST",
			Self::Put => "PUT",
			Self::Delete => "DELETE",
		}
	}
}

/// Submit action of a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitSpec {
	/// Button label
	pub label: String,
	/// Absolute URL the host dispatches the value map to
	#[serde(rename = "targetUrl")]
	pub target_url: String,
	/// HTTP method for the dispatch
	pub method: HttpMethod,
}

/// A complete form descriptor
///
/// Created by the schema builder, serialized once, then treated as
/// immutable. A renderer instance keeps its own flat value map; the
/// schema itself never holds live input state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
	/// Module the schema belongs to (part of its storage key)
	#[serde(rename = "moduleId")]
	pub module_id: i64,
	/// Form title
	pub title: String,
	/// Free-form description shown above the fields
	pub description: String,
	/// Ordered field list
	pub fields: Vec<FieldSpec>,
	/// Submit action
	pub submit: SubmitSpec,
}

impl FormSchema {
	/// Create an empty schema for a module
	///
	/// # Examples
	///
	/// ```
	/// use tablero_schema::{FormSchema, HttpMethod, SubmitSpec};
	///
	/// let schema = FormSchema::new(
	/// 	3,
	/// 	"Alta de cliente",
	/// 	"Registro de clientes nuevos",
	/// 	SubmitSpec {
	/// 		label: "Guardar".to_string(),
	/// 		target_url: "https://backend/api/clientes".to_string(),
	/// 		method: HttpMethod::Post,
	/// 	},
	/// );
	/// assert_eq!(schema.module_id, 3);
	/// assert!(schema.fields.is_empty());
	/// ```
	pub fn new(
		module_id: i64,
		title: impl Into<String>,
		description: impl Into<String>,
		submit: SubmitSpec,
	) -> Self {
		Self {
			module_id,
			title: title.into(),
			description: description.into(),
			fields: vec![],
			submit,
		}
	}

	/// Every addressable leaf name in the schema, in field order
	pub fn field_names(&self) -> Vec<&str> {
		let mut names = vec![];
		for field in &self.fields {
			field.collect_names(&mut names);
		}
		names
	}

	/// Finds a leaf field spec by name
	pub fn find_field(&self, name: &str) -> Option<&FieldSpec> {
		self.fields.iter().find_map(|f| f.find_leaf(name))
	}

	/// Validates that all addressable field names are unique
	///
	/// A collision is a builder-time defect and is reported, never
	/// silently tolerated.
	pub fn validate_names(&self) -> Result<()> {
		let mut seen = HashSet::new();
		for name in self.field_names() {
			if !seen.insert(name) {
				return Err(SchemaError::DuplicateName(name.to_string()));
			}
		}
		Ok(())
	}

	/// Validates that every select field's options are unique by value
	pub fn validate_options(&self) -> Result<()> {
		fn check(field: &FieldSpec) -> Result<()> {
			match field {
				FieldSpec::Select { name, options, .. } => {
					let mut seen = HashSet::new();
					for opt in options {
						if !seen.insert(opt.value.as_str()) {
							return Err(SchemaError::DuplicateOption {
								field: name.clone(),
								value: opt.value.clone(),
							});
						}
					}
					Ok(())
				}
				FieldSpec::Either { left, right } => {
					check(left)?;
					check(right)
				}
				FieldSpec::Nest { father, child } => {
					check(father)?;
					child.as_deref().map(check).unwrap_or(Ok(()))
				}
				_ => Ok(()),
			}
		}
		self.fields.iter().try_for_each(check)
	}
}
