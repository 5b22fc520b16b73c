//! Schema-driven form renderer
//!
//! Interprets one [`FormSchema`] and produces live input bindings: a
//! flat value map keyed by field name, independent of the nested schema
//! shape. Nest children mount only while their father holds a value,
//! and hiding a child evicts its entry so no stale value survives a
//! hide/show cycle. Submission runs either-group and required-field
//! validation and yields the final value map; dispatching it is the
//! host's responsibility, not the renderer's.

use crate::error::ValidationError;
use crate::options::resolve_options;
use serde_json::{Map, Value};
use tablero_proxy::Proxy;
use tablero_schema::{ChoiceOption, FieldSpec, FormSchema, InputKind};
use tracing::warn;

/// JavaScript-style truthiness over JSON values: empty strings, zero,
/// `false` and `null` are falsy
fn truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
		Value::String(s) => !s.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}

/// Keystroke filtering for numeric inputs: digits plus a single decimal
/// point
fn filter_numeric(raw: &str) -> String {
	let mut seen_point = false;
	raw.chars()
		.filter(|c| {
			if c.is_ascii_digit() {
				true
			} else if *c == '.' && !seen_point {
				seen_point = true;
				true
			} else {
				false
			}
		})
		.collect()
}

/// Live form instance over one immutable schema
pub struct FormRenderer {
	schema: FormSchema,
	values: Map<String, Value>,
	resolved: std::collections::HashMap<String, Vec<ChoiceOption>>,
	default_source_url: Option<String>,
}

impl FormRenderer {
	/// Create a renderer over a schema with no bound values
	///
	/// # Examples
	///
	/// ```
	/// use tablero_forms::FormRenderer;
	/// use tablero_schema::{FieldKind, FieldSpec, FormSchema, HttpMethod, SubmitSpec};
	///
	/// let mut schema = FormSchema::new(1, "Alta", "", SubmitSpec {
	/// 	label: "Guardar".to_string(),
	/// 	target_url: "https://backend/api/alta".to_string(),
	/// 	method: HttpMethod::Post,
	/// });
	/// schema.fields.push(FieldSpec::default_of(FieldKind::Simple, "nombre"));
	///
	/// let renderer = FormRenderer::new(schema);
	/// assert!(renderer.values().is_empty());
	/// ```
	pub fn new(schema: FormSchema) -> Self {
		Self {
			schema,
			values: Map::new(),
			resolved: std::collections::HashMap::new(),
			default_source_url: None,
		}
	}

	/// Sets the deployment-wide catalog URL used by combo fields whose
	/// own `source_url` is empty
	pub fn with_default_source_url(mut self, url: impl Into<String>) -> Self {
		self.default_source_url = Some(url.into());
		self
	}

	/// The schema this renderer interprets
	pub fn schema(&self) -> &FormSchema {
		&self.schema
	}

	/// The live value map; unset fields are absent, not null
	pub fn values(&self) -> &Map<String, Value> {
		&self.values
	}

	/// Resolves every combo field's options through the proxy
	///
	/// Fields whose resolution fails keep an empty option set; there is
	/// no retry until the host remounts.
	pub async fn resolve_combos(&mut self, proxy: &dyn Proxy) {
		let mut combos = vec![];
		for field in &self.schema.fields {
			collect_combos(field, &mut combos);
		}
		for (name, source_url) in combos {
			let url = if source_url.is_empty() {
				match &self.default_source_url {
					Some(default) => default.clone(),
					None => {
						warn!(field = %name, "combo without source url and no default");
						continue;
					}
				}
			} else {
				source_url
			};
			let options = resolve_options(proxy, &url).await;
			self.resolved.insert(name, options);
		}
	}

	/// Options currently available for a select or combo field
	pub fn options_for(&self, name: &str) -> &[ChoiceOption] {
		match self.schema.find_field(name) {
			Some(FieldSpec::Select { options, .. }) => options,
			Some(FieldSpec::Combo { .. }) => self
				.resolved
				.get(name)
				.map(Vec::as_slice)
				.unwrap_or_default(),
			_ => &[],
		}
	}

	/// Binds a raw input value to a field, applying per-kind coercion
	///
	/// Numbers pass keystroke filtering and are stored as floats (or
	/// removed when cleared); empty text clears the entry. After every
	/// bind, values of unmounted nest children are evicted.
	pub fn set_value(&mut self, name: &str, raw: &str) {
		let coerced = match self.schema.find_field(name) {
			Some(FieldSpec::Simple { input, .. }) => match input {
				InputKind::Number => {
					let filtered = filter_numeric(raw);
					filtered.parse::<f64>().ok().map(Value::from)
				}
				InputKind::Checkbox => Some(Value::Bool(raw == "true" || raw == "on")),
				_ => (!raw.is_empty()).then(|| Value::String(raw.to_string())),
			},
			Some(FieldSpec::Select { .. }) | Some(FieldSpec::Combo { .. }) => {
				(!raw.is_empty()).then(|| Value::String(raw.to_string()))
			}
			_ => {
				warn!(field = name, "bind to unknown field ignored");
				return;
			}
		};

		match coerced {
			Some(value) => {
				self.values.insert(name.to_string(), value);
			}
			None => {
				self.values.remove(name);
			}
		}
		self.evict_hidden();
	}

	/// Toggles a checkbox field
	pub fn set_checked(&mut self, name: &str, checked: bool) {
		if matches!(
			self.schema.find_field(name),
			Some(FieldSpec::Simple { input: InputKind::Checkbox, .. })
		) {
			self.values.insert(name.to_string(), Value::Bool(checked));
			self.evict_hidden();
		}
	}

	/// Binds a file field; only the selected file's name is retained
	pub fn set_file(&mut self, name: &str, file_name: &str) {
		if matches!(
			self.schema.find_field(name),
			Some(FieldSpec::Simple { input: InputKind::File, .. })
		) {
			if file_name.is_empty() {
				self.values.remove(name);
			} else {
				self.values
					.insert(name.to_string(), Value::String(file_name.to_string()));
			}
			self.evict_hidden();
		}
	}

	/// Whether the named field is currently mounted
	pub fn is_mounted(&self, name: &str) -> bool {
		self.mounted_leaves().iter().any(|f| f.name() == Some(name))
	}

	/// The bound value, or the implicit first-option default for select
	/// fields the user never touched
	pub fn effective_value(&self, name: &str) -> Option<Value> {
		if let Some(value) = self.values.get(name) {
			return Some(value.clone());
		}
		match self.schema.find_field(name) {
			Some(FieldSpec::Select { options, .. }) => options
				.first()
				.map(|opt| Value::String(opt.value.clone())),
			_ => None,
		}
	}

	/// Validates and yields the final value map
	///
	/// Fails with [`ValidationError`] when a mounted required field is
	/// empty or when neither child of an either group holds a value. No
	/// network call happens here.
	pub fn submit(&self) -> Result<Map<String, Value>, ValidationError> {
		self.validate()?;

		let mut out = Map::new();
		for leaf in self.mounted_leaves() {
			let Some(name) = leaf.name() else { continue };
			if let Some(value) = self.effective_value(name) {
				out.insert(name.to_string(), value);
			}
		}
		Ok(out)
	}

	fn validate(&self) -> Result<(), ValidationError> {
		for leaf in self.mounted_leaves() {
			let Some(name) = leaf.name() else { continue };
			if leaf.required() && !self.effective_value(name).as_ref().is_some_and(truthy) {
				return Err(ValidationError::Required {
					field: name.to_string(),
				});
			}
		}
		for field in &self.schema.fields {
			self.validate_either(field)?;
		}
		Ok(())
	}

	fn validate_either(&self, field: &FieldSpec) -> Result<(), ValidationError> {
		match field {
			FieldSpec::Either { left, right } => {
				self.validate_either(left)?;
				self.validate_either(right)?;
				if !self.subtree_effective_truthy(left) && !self.subtree_effective_truthy(right) {
					return Err(ValidationError::EitherEmpty {
						left: first_name(left),
						right: first_name(right),
					});
				}
				Ok(())
			}
			FieldSpec::Nest { father, child } => {
				self.validate_either(father)?;
				child
					.as_deref()
					.map(|c| self.validate_either(c))
					.unwrap_or(Ok(()))
			}
			_ => Ok(()),
		}
	}

	// Nest gating reads bound values only: a select father the user
	// never touched does not mount its child.
	fn subtree_truthy(&self, field: &FieldSpec) -> bool {
		let mut names = vec![];
		field.collect_names(&mut names);
		names
			.iter()
			.any(|n| self.values.get(*n).is_some_and(truthy))
	}

	// Either groups instead count what submit() emits, so a select
	// child's implicit first-option default satisfies the group.
	fn subtree_effective_truthy(&self, field: &FieldSpec) -> bool {
		let mut names = vec![];
		field.collect_names(&mut names);
		names
			.iter()
			.any(|n| self.effective_value(n).as_ref().is_some_and(truthy))
	}

	// Mounted leaves in schema order: every simple/select/combo leaf
	// reachable with nest gating applied against the live values.
	fn mounted_leaves(&self) -> Vec<&FieldSpec> {
		let mut out = vec![];
		for field in &self.schema.fields {
			self.mount_into(field, &mut out);
		}
		out
	}

	fn mount_into<'a>(&'a self, field: &'a FieldSpec, out: &mut Vec<&'a FieldSpec>) {
		match field {
			FieldSpec::Simple { .. } | FieldSpec::Select { .. } | FieldSpec::Combo { .. } => {
				out.push(field);
			}
			FieldSpec::Either { left, right } => {
				self.mount_into(left, out);
				self.mount_into(right, out);
			}
			FieldSpec::Nest { father, child } => {
				self.mount_into(father, out);
				if let Some(child) = child {
					if self.subtree_truthy(father) {
						self.mount_into(child, out);
					}
				}
			}
		}
	}

	// Removes entries of unmounted fields. Unmounting one child can in
	// turn unmount a nest hanging below it, so this iterates to a fixed
	// point.
	fn evict_hidden(&mut self) {
		loop {
			let mounted: Vec<String> = self
				.mounted_leaves()
				.iter()
				.filter_map(|f| f.name().map(str::to_string))
				.collect();
			let schema_names: Vec<String> = self
				.schema
				.field_names()
				.iter()
				.map(|s| s.to_string())
				.collect();
			let before = self.values.len();
			self.values
				.retain(|key, _| mounted.contains(key) || !schema_names.contains(key));
			if self.values.len() == before {
				break;
			}
		}
	}

	/// Renders the mounted fields as structural, escaped HTML
	pub fn render(&self) -> String {
		use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

		let mut html = String::new();
		html.push_str(&format!(
			"<form data-module=\"{}\">\n<h2>{}</h2>\n<p>{}</p>\n",
			self.schema.module_id,
			text(&self.schema.title),
			text(&self.schema.description),
		));
		for field in &self.schema.fields {
			self.render_field(field, &mut html);
		}
		html.push_str(&format!(
			"<button type=\"submit\" formaction=\"{}\" formmethod=\"{}\">{}</button>\n</form>\n",
			attr(&self.schema.submit.target_url),
			self.schema.submit.method.as_str(),
			text(&self.schema.submit.label),
		));
		html
	}

	fn render_field(&self, field: &FieldSpec, html: &mut String) {
		use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

		match field {
			FieldSpec::Simple {
				label,
				name,
				input,
				placeholder,
				required,
			} => {
				let value = self.values.get(name);
				html.push_str(&format!("<label for=\"{}\">{}</label>\n", attr(name), text(label)));
				match input {
					InputKind::Textarea => {
						html.push_str(&format!(
							"<textarea name=\"{}\"{}>{}</textarea>\n",
							attr(name),
							if *required { " required" } else { "" },
							text(value.and_then(Value::as_str).unwrap_or("")),
						));
					}
					InputKind::Checkbox => {
						let checked = value.is_some_and(truthy);
						html.push_str(&format!(
							"<input type=\"checkbox\" name=\"{}\"{} />\n",
							attr(name),
							if checked { " checked" } else { "" },
						));
					}
					_ => {
						let rendered = match value {
							Some(Value::String(s)) => s.clone(),
							Some(other) => other.to_string(),
							None => String::new(),
						};
						html.push_str(&format!(
							"<input type=\"{}\" name=\"{}\" value=\"{}\"{}{} />\n",
							input.as_str(),
							attr(name),
							attr(&rendered),
							placeholder
								.as_deref()
								.map(|p| format!(" placeholder=\"{}\"", attr(p)))
								.unwrap_or_default(),
							if *required { " required" } else { "" },
						));
					}
				}
			}
			FieldSpec::Select { label, name, .. } | FieldSpec::Combo { label, name, .. } => {
				let selected = self.effective_value(name);
				let selected = selected.as_ref().and_then(Value::as_str);
				html.push_str(&format!("<label for=\"{}\">{}</label>\n", attr(name), text(label)));
				html.push_str(&format!("<select name=\"{}\">\n", attr(name)));
				for option in self.options_for(name) {
					html.push_str(&format!(
						"<option value=\"{}\"{}>{}</option>\n",
						attr(&option.value),
						if selected == Some(option.value.as_str()) {
							" selected"
						} else {
							""
						},
						text(&option.label),
					));
				}
				html.push_str("</select>\n");
			}
			FieldSpec::Either { left, right } => {
				html.push_str("<div class=\"either\">\n");
				self.render_field(left, html);
				self.render_field(right, html);
				html.push_str("</div>\n");
			}
			FieldSpec::Nest { father, child } => {
				self.render_field(father, html);
				if let Some(child) = child {
					if self.subtree_truthy(father) {
						self.render_field(child, html);
					}
				}
			}
		}
	}
}

fn collect_combos(field: &FieldSpec, out: &mut Vec<(String, String)>) {
	match field {
		FieldSpec::Combo {
			name, source_url, ..
		} => out.push((name.clone(), source_url.clone())),
		FieldSpec::Either { left, right } => {
			collect_combos(left, out);
			collect_combos(right, out);
		}
		FieldSpec::Nest { father, child } => {
			collect_combos(father, out);
			if let Some(child) = child {
				collect_combos(child, out);
			}
		}
		_ => {}
	}
}

fn first_name(field: &FieldSpec) -> String {
	let mut names = vec![];
	field.collect_names(&mut names);
	names.first().map(|s| s.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use tablero_proxy::testing::StaticProxy;
	use tablero_schema::{HttpMethod, SubmitSpec};

	fn schema_with(fields: Vec<FieldSpec>) -> FormSchema {
		let mut schema = FormSchema::new(
			1,
			"Alta",
			"",
			SubmitSpec {
				label: "Guardar".to_string(),
				target_url: "https://backend/api/alta".to_string(),
				method: HttpMethod::Post,
			},
		);
		schema.fields = fields;
		schema
	}

	fn simple(name: &str, input: InputKind) -> FieldSpec {
		FieldSpec::Simple {
			label: name.to_string(),
			name: name.to_string(),
			input,
			placeholder: None,
			required: false,
		}
	}

	#[rstest]
	#[case("12a.5.0x", "12.50")]
	#[case("-3", "3")]
	#[case("1.2.3", "1.23")]
	#[case("abc", "")]
	fn test_numeric_keystrokes_filtered(#[case] raw: &str, #[case] kept: &str) {
		assert_eq!(filter_numeric(raw), kept);
	}

	#[test]
	fn test_number_keystroke_filtering() {
		let mut r = FormRenderer::new(schema_with(vec![simple("monto", InputKind::Number)]));

		r.set_value("monto", "12a.5.0x");
		assert_eq!(r.values().get("monto"), Some(&Value::from(12.50)));

		r.set_value("monto", "");
		assert!(r.values().get("monto").is_none());
	}

	#[test]
	fn test_file_retains_only_name() {
		let mut r = FormRenderer::new(schema_with(vec![simple("adjunto", InputKind::File)]));
		r.set_file("adjunto", "informe.pdf");
		assert_eq!(
			r.values().get("adjunto"),
			Some(&Value::String("informe.pdf".to_string()))
		);
	}

	#[test]
	fn test_select_first_option_implicitly_selected() {
		let schema = schema_with(vec![FieldSpec::Select {
			label: "Estado".to_string(),
			name: "estado".to_string(),
			required: false,
			options: vec![ChoiceOption::new("A", "a"), ChoiceOption::new("B", "b")],
		}]);
		let r = FormRenderer::new(schema);

		assert_eq!(
			r.effective_value("estado"),
			Some(Value::String("a".to_string()))
		);
		let html = r.render();
		assert!(html.contains("<option value=\"a\" selected>"));

		let out = r.submit().unwrap();
		assert_eq!(out["estado"], "a");
	}

	#[test]
	fn test_empty_select_renders_without_options() {
		let schema = schema_with(vec![FieldSpec::Select {
			label: "Vacio".to_string(),
			name: "vacio".to_string(),
			required: false,
			options: vec![],
		}]);
		let r = FormRenderer::new(schema);
		assert!(r.render().contains("<select name=\"vacio\">"));
		assert!(r.submit().unwrap().is_empty());
	}

	#[test]
	fn test_either_requires_one_side() {
		let schema = schema_with(vec![FieldSpec::Either {
			left: Box::new(simple("telefono", InputKind::Text)),
			right: Box::new(simple("correo", InputKind::Email)),
		}]);
		let mut r = FormRenderer::new(schema);

		assert!(matches!(
			r.submit(),
			Err(ValidationError::EitherEmpty { .. })
		));

		r.set_value("correo", "a@b.c");
		let out = r.submit().unwrap();
		assert_eq!(out["correo"], "a@b.c");
		assert!(!out.contains_key("telefono"));
	}

	#[test]
	fn test_either_select_default_satisfies_group() {
		// An untouched select submits its first option, so the either
		// group it belongs to is never empty.
		let schema = schema_with(vec![FieldSpec::Either {
			left: Box::new(FieldSpec::Select {
				label: "Tipo".to_string(),
				name: "tipo".to_string(),
				required: false,
				options: vec![
					ChoiceOption::new("Persona", "p"),
					ChoiceOption::new("Empresa", "e"),
				],
			}),
			right: Box::new(simple("detalle", InputKind::Text)),
		}]);
		let r = FormRenderer::new(schema);

		let out = r.submit().unwrap();
		assert_eq!(out["tipo"], "p");
		assert!(!out.contains_key("detalle"));
	}

	#[test]
	fn test_nest_child_mounts_only_when_father_bound() {
		let schema = schema_with(vec![FieldSpec::Nest {
			father: Box::new(simple("pais", InputKind::Text)),
			child: Some(Box::new(simple("provincia", InputKind::Text))),
		}]);
		let mut r = FormRenderer::new(schema);

		assert!(!r.is_mounted("provincia"));
		r.set_value("pais", "ES");
		assert!(r.is_mounted("provincia"));
	}

	#[test]
	fn test_nest_hide_evicts_stale_child_value() {
		let schema = schema_with(vec![FieldSpec::Nest {
			father: Box::new(simple("pais", InputKind::Text)),
			child: Some(Box::new(simple("provincia", InputKind::Text))),
		}]);
		let mut r = FormRenderer::new(schema);

		// Repeated show/hide cycles never leave a residual child value.
		for _ in 0..3 {
			r.set_value("pais", "ES");
			r.set_value("provincia", "Madrid");
			assert!(r.values().contains_key("provincia"));

			r.set_value("pais", "");
			assert!(!r.values().contains_key("provincia"));
			assert!(!r.submit().unwrap().contains_key("provincia"));
		}
	}

	#[test]
	fn test_chained_nest_eviction_cascades() {
		let schema = schema_with(vec![FieldSpec::Nest {
			father: Box::new(simple("a", InputKind::Text)),
			child: Some(Box::new(FieldSpec::Nest {
				father: Box::new(simple("b", InputKind::Text)),
				child: Some(Box::new(simple("c", InputKind::Text))),
			})),
		}]);
		let mut r = FormRenderer::new(schema);

		r.set_value("a", "1");
		r.set_value("b", "2");
		r.set_value("c", "3");
		assert!(r.is_mounted("c"));

		// Clearing the outer father unmounts the whole chain.
		r.set_value("a", "");
		assert!(r.values().is_empty());
	}

	#[test]
	fn test_required_field_blocks_submission() {
		let schema = schema_with(vec![FieldSpec::Simple {
			label: "Nombre".to_string(),
			name: "nombre".to_string(),
			input: InputKind::Text,
			placeholder: None,
			required: true,
		}]);
		let mut r = FormRenderer::new(schema);

		assert!(matches!(
			r.submit(),
			Err(ValidationError::Required { field }) if field == "nombre"
		));
		r.set_value("nombre", "Ana");
		assert!(r.submit().is_ok());
	}

	#[test]
	fn test_hidden_required_child_does_not_block() {
		let schema = schema_with(vec![FieldSpec::Nest {
			father: Box::new(simple("pais", InputKind::Text)),
			child: Some(Box::new(FieldSpec::Simple {
				label: String::new(),
				name: "provincia".to_string(),
				input: InputKind::Text,
				placeholder: None,
				required: true,
			})),
		}]);
		let r = FormRenderer::new(schema);
		// The child is unmounted, so its required flag is not in play.
		assert!(r.submit().is_ok());
	}

	#[tokio::test]
	async fn test_combo_resolution_uses_field_url() {
		let schema = schema_with(vec![FieldSpec::Combo {
			label: "Provincia".to_string(),
			name: "provincia".to_string(),
			required: false,
			source_url: "https://x/provincias".to_string(),
		}]);
		let proxy = StaticProxy::new().with_json(
			"https://x/provincias",
			serde_json::json!([{"id": 1, "nombre": "Madrid"}]),
		);

		let mut r = FormRenderer::new(schema);
		r.resolve_combos(&proxy).await;
		assert_eq!(r.options_for("provincia").len(), 1);
		assert_eq!(r.options_for("provincia")[0].label, "Madrid");
	}

	#[tokio::test]
	async fn test_combo_falls_back_to_default_url() {
		let schema = schema_with(vec![FieldSpec::Combo {
			label: "Catalogo".to_string(),
			name: "catalogo".to_string(),
			required: false,
			source_url: String::new(),
		}]);
		let proxy = StaticProxy::new().with_json(
			"https://x/catalogo-general",
			serde_json::json!([{"id": "g", "nombre": "General"}]),
		);

		let mut r = FormRenderer::new(schema)
			.with_default_source_url("https://x/catalogo-general");
		r.resolve_combos(&proxy).await;
		assert_eq!(r.options_for("catalogo").len(), 1);
	}

	#[test]
	fn test_render_escapes_markup() {
		let schema = schema_with(vec![FieldSpec::Simple {
			label: "<b>Nombre</b>".to_string(),
			name: "nombre".to_string(),
			input: InputKind::Text,
			placeholder: None,
			required: false,
		}]);
		let html = FormRenderer::new(schema).render();
		assert!(html.contains("&lt;b&gt;Nombre&lt;/b&gt;"));
		assert!(!html.contains("<b>Nombre</b>"));
	}
}
