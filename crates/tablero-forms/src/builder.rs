//! Form schema builder
//!
//! The design-time editor: it keeps a [`FormSchema`] in memory under
//! interactive edits and persists the aggregate as JSON through the
//! generic proxy. Switching a field's kind is destructive: the field is
//! reinitialized to the requested kind's default shape and nothing from
//! the previous kind survives.

use crate::error::{BuilderError, ValidationError};
use serde_json::Value;
use std::collections::HashMap;
use tablero_proxy::{Proxy, ProxyError, ProxyRequest};
use tablero_schema::{ChoiceOption, FieldKind, FieldSpec, FormSchema, SubmitSpec};
use tracing::{debug, warn};

/// Which child of an either group an edit addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EitherSide {
	Left,
	Right,
}

/// Interactive editor over an in-progress [`FormSchema`]
pub struct SchemaBuilder {
	schema: FormSchema,
	next_field: usize,
	/// Prospective test values the operator typed against either
	/// children. Validated at submit time when present; the renderer's
	/// own bound-value validation remains the authoritative check.
	demo_values: HashMap<String, String>,
}

impl SchemaBuilder {
	/// Start a builder for a module
	///
	/// # Examples
	///
	/// ```
	/// use tablero_forms::SchemaBuilder;
	/// use tablero_schema::{HttpMethod, SubmitSpec};
	///
	/// let builder = SchemaBuilder::new(1, "Alta", "", SubmitSpec {
	/// 	label: "Guardar".to_string(),
	/// 	target_url: "https://backend/api/alta".to_string(),
	/// 	method: HttpMethod::Post,
	/// });
	/// assert!(builder.schema().fields.is_empty());
	/// ```
	pub fn new(
		module_id: i64,
		title: impl Into<String>,
		description: impl Into<String>,
		submit: SubmitSpec,
	) -> Self {
		Self {
			schema: FormSchema::new(module_id, title, description, submit),
			next_field: 0,
			demo_values: HashMap::new(),
		}
	}

	/// Resume editing an existing schema
	pub fn from_schema(schema: FormSchema) -> Self {
		Self {
			schema,
			next_field: 0,
			demo_values: HashMap::new(),
		}
	}

	/// The schema under edit
	pub fn schema(&self) -> &FormSchema {
		&self.schema
	}

	/// Appends a default text field with a fresh unique name, returning
	/// its index
	pub fn add_field(&mut self) -> usize {
		let name = self.generate_name();
		self.schema
			.fields
			.push(FieldSpec::default_of(FieldKind::Simple, &name));
		self.schema.fields.len() - 1
	}

	/// Reinitializes the field at `index` to the default shape of `kind`
	///
	/// This is a destructive structural transition: options, source
	/// URLs and either/nest children of the previous kind are discarded
	/// and switching back never recovers them.
	pub fn set_field_kind(&mut self, index: usize, kind: FieldKind) {
		let name = self.generate_name();
		if let Some(slot) = self.schema.fields.get_mut(index) {
			*slot = FieldSpec::default_of(kind, &name);
		}
	}

	/// Removes the field at `index`
	pub fn remove_field(&mut self, index: usize) {
		if index < self.schema.fields.len() {
			self.schema.fields.remove(index);
		}
	}

	/// Replaces the leaf spec at `index` (label, placeholder, required
	/// edits on simple/select/combo fields)
	pub fn set_field(&mut self, index: usize, spec: FieldSpec) {
		if let Some(slot) = self.schema.fields.get_mut(index) {
			*slot = spec;
		}
	}

	/// Appends an empty option to the select field at `index`; no-op on
	/// any other kind
	pub fn add_option(&mut self, index: usize) {
		if let Some(FieldSpec::Select { options, .. }) = self.schema.fields.get_mut(index) {
			options.push(ChoiceOption::new("", ""));
		}
	}

	/// Removes one option of the select field at `index`; no-op elsewhere
	pub fn remove_option(&mut self, index: usize, option_index: usize) {
		if let Some(FieldSpec::Select { options, .. }) = self.schema.fields.get_mut(index) {
			if option_index < options.len() {
				options.remove(option_index);
			}
		}
	}

	/// Rewrites one option of the select field at `index`; no-op elsewhere
	pub fn set_option(
		&mut self,
		index: usize,
		option_index: usize,
		label: impl Into<String>,
		value: impl Into<String>,
	) {
		if let Some(FieldSpec::Select { options, .. }) = self.schema.fields.get_mut(index) {
			if let Some(option) = options.get_mut(option_index) {
				option.label = label.into();
				option.value = value.into();
			}
		}
	}

	/// Mutable access to an either child for in-place edits
	///
	/// Returns `None` when the field at `index` is not an either group.
	pub fn either_child_mut(&mut self, index: usize, side: EitherSide) -> Option<&mut FieldSpec> {
		match self.schema.fields.get_mut(index) {
			Some(FieldSpec::Either { left, right }) => Some(match side {
				EitherSide::Left => left.as_mut(),
				EitherSide::Right => right.as_mut(),
			}),
			_ => None,
		}
	}

	/// Mutable access to a nest father for in-place edits
	pub fn nest_father_mut(&mut self, index: usize) -> Option<&mut FieldSpec> {
		match self.schema.fields.get_mut(index) {
			Some(FieldSpec::Nest { father, .. }) => Some(father.as_mut()),
			_ => None,
		}
	}

	/// Mutable access to a nest child, auto-initializing an absent child
	/// to a default text field on first edit
	pub fn nest_child_mut(&mut self, index: usize) -> Option<&mut FieldSpec> {
		let name = self.generate_name();
		match self.schema.fields.get_mut(index) {
			Some(FieldSpec::Nest { child, .. }) => {
				if child.is_none() {
					*child = Some(Box::new(FieldSpec::default_of(FieldKind::Simple, &name)));
				}
				child.as_deref_mut()
			}
			_ => None,
		}
	}

	/// Records a prospective test value against an either child
	pub fn set_demo_value(&mut self, field_name: impl Into<String>, value: impl Into<String>) {
		self.demo_values.insert(field_name.into(), value.into());
	}

	/// Validates and persists the schema through the proxy
	///
	/// Validation covers name uniqueness, option uniqueness, and the
	/// builder's own either demo values where the operator supplied any.
	/// On success the assigned persisted identifier is returned; on any
	/// failure the schema is left unsaved.
	pub async fn submit(&self, proxy: &dyn Proxy, storage_url: &str) -> Result<i64, BuilderError> {
		self.schema.validate_names()?;
		self.schema.validate_options()?;
		self.validate_demo_values()?;

		let body = serde_json::to_value(&self.schema)
			.map_err(|e| ProxyError::Shape(e.to_string()))?;
		let response = proxy.send(ProxyRequest::post(storage_url, body)).await?;
		if !response.is_success() {
			warn!(status = response.status, "schema persistence rejected");
			return Err(BuilderError::Proxy(ProxyError::Status {
				status: response.status,
				message: response.body.to_string(),
			}));
		}

		let id = assigned_id(&response.body)
			.ok_or_else(|| BuilderError::MissingId(response.body.to_string()))?;
		debug!(id, module_id = self.schema.module_id, "schema persisted");
		Ok(id)
	}

	// Demo validation only sees values the operator typed here; bound
	// values are validated by the renderer at run time.
	fn validate_demo_values(&self) -> Result<(), ValidationError> {
		for field in &self.schema.fields {
			if let FieldSpec::Either { left, right } = field {
				let (Some(l), Some(r)) = (left.name(), right.name()) else {
					continue;
				};
				let l_demo = self.demo_values.get(l);
				let r_demo = self.demo_values.get(r);
				if l_demo.is_none() && r_demo.is_none() {
					continue;
				}
				let filled = |v: Option<&String>| v.is_some_and(|s| !s.trim().is_empty());
				if !filled(l_demo) && !filled(r_demo) {
					return Err(ValidationError::EitherEmpty {
						left: l.to_string(),
						right: r.to_string(),
					});
				}
			}
		}
		Ok(())
	}

	fn generate_name(&mut self) -> String {
		let taken: Vec<String> = self
			.schema
			.field_names()
			.into_iter()
			.map(str::to_string)
			.collect();
		loop {
			self.next_field += 1;
			let candidate = format!("field_{}", self.next_field);
			if !taken.contains(&candidate) {
				return candidate;
			}
		}
	}
}

fn assigned_id(body: &Value) -> Option<i64> {
	match body {
		Value::Number(n) => n.as_i64(),
		Value::Object(map) => map.get("id").and_then(Value::as_i64),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tablero_proxy::testing::StaticProxy;
	use tablero_schema::{HttpMethod, InputKind};

	fn builder() -> SchemaBuilder {
		SchemaBuilder::new(
			1,
			"Alta",
			"",
			SubmitSpec {
				label: "Guardar".to_string(),
				target_url: "https://backend/api/alta".to_string(),
				method: HttpMethod::Post,
			},
		)
	}

	#[test]
	fn test_add_field_defaults_to_simple_text() {
		let mut b = builder();
		let i = b.add_field();
		assert!(matches!(
			&b.schema().fields[i],
			FieldSpec::Simple { input: InputKind::Text, .. }
		));
	}

	#[test]
	fn test_auto_names_are_unique() {
		let mut b = builder();
		b.add_field();
		b.add_field();
		b.add_field();
		assert!(b.schema().validate_names().is_ok());
	}

	#[test]
	fn test_kind_switch_is_destructive() {
		let mut b = builder();
		let i = b.add_field();

		b.set_field_kind(i, FieldKind::Select);
		b.add_option(i);
		b.set_option(i, 0, "Activo", "a");

		b.set_field_kind(i, FieldKind::Combo);
		assert!(matches!(
			&b.schema().fields[i],
			FieldSpec::Combo { source_url, .. } if source_url.is_empty()
		));

		// Switching back never recovers the discarded options.
		b.set_field_kind(i, FieldKind::Select);
		assert!(matches!(
			&b.schema().fields[i],
			FieldSpec::Select { options, .. } if options.is_empty()
		));
	}

	#[test]
	fn test_option_edits_are_noops_on_other_kinds() {
		let mut b = builder();
		let i = b.add_field();
		b.add_option(i);
		b.set_option(i, 0, "x", "y");
		b.remove_option(i, 0);
		assert!(matches!(&b.schema().fields[i], FieldSpec::Simple { .. }));
	}

	#[test]
	fn test_nest_child_auto_initializes_on_first_edit() {
		let mut b = builder();
		let i = b.add_field();
		b.set_field_kind(i, FieldKind::Nest);
		assert!(matches!(
			&b.schema().fields[i],
			FieldSpec::Nest { child: None, .. }
		));

		let child = b.nest_child_mut(i).unwrap();
		assert!(matches!(child, FieldSpec::Simple { .. }));
		assert!(matches!(
			&b.schema().fields[i],
			FieldSpec::Nest { child: Some(_), .. }
		));
	}

	#[tokio::test]
	async fn test_submit_persists_and_surfaces_id() {
		let mut b = builder();
		b.add_field();

		let proxy = StaticProxy::new()
			.with_json("https://backend/api/schemas", serde_json::json!({"id": 42}));
		let id = b.submit(&proxy, "https://backend/api/schemas").await.unwrap();
		assert_eq!(id, 42);

		let sent = proxy.requests();
		assert_eq!(sent.len(), 1);
		assert_eq!(sent[0].body.as_ref().unwrap()["moduleId"], 1);
	}

	#[tokio::test]
	async fn test_submit_failure_reports_status() {
		let b = builder();
		let proxy = StaticProxy::new().with_status("https://backend/api/schemas", 500, "boom");
		let err = b
			.submit(&proxy, "https://backend/api/schemas")
			.await
			.unwrap_err();
		assert!(matches!(
			err,
			BuilderError::Proxy(ProxyError::Status { status: 500, .. })
		));
	}

	#[tokio::test]
	async fn test_submit_rejects_duplicate_names() {
		let mut b = builder();
		let i = b.add_field();
		let j = b.add_field();
		b.set_field(i, FieldSpec::default_of(FieldKind::Simple, "dup"));
		b.set_field(j, FieldSpec::default_of(FieldKind::Simple, "dup"));

		let proxy = StaticProxy::new();
		assert!(matches!(
			b.submit(&proxy, "https://x").await.unwrap_err(),
			BuilderError::Schema(_)
		));
		// Nothing was sent: validation failed before persistence.
		assert!(proxy.requests().is_empty());
	}

	#[tokio::test]
	async fn test_demo_values_validated_only_when_present() {
		let mut b = builder();
		let i = b.add_field();
		b.set_field_kind(i, FieldKind::Either);

		let proxy = StaticProxy::new().with_json("https://x", serde_json::json!(7));
		// No demo values at all: the either group passes at build time.
		assert_eq!(b.submit(&proxy, "https://x").await.unwrap(), 7);

		// Blank demo values on both sides: rejected.
		let names: Vec<String> = b.schema().field_names().iter().map(|s| s.to_string()).collect();
		b.set_demo_value(names[0].clone(), "  ");
		b.set_demo_value(names[1].clone(), "");
		assert!(matches!(
			b.submit(&proxy, "https://x").await.unwrap_err(),
			BuilderError::Validation(ValidationError::EitherEmpty { .. })
		));

		// One side filled: accepted again.
		b.set_demo_value(names[0].clone(), "algo");
		assert!(b.submit(&proxy, "https://x").await.is_ok());
	}
}
