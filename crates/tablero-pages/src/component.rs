//! Core component trait and the typed components

use tablero_forms::{fetch_schema, FormRenderer};
use tablero_grid::GridEngine;
use tablero_proxy::{Proxy, ProxyError};
use tablero_schema::ModalSpec;

/// Base interface for all page components
pub trait Component: Send + Sync {
	/// Returns the component's name (for debugging)
	fn name(&self) -> &'static str;

	/// Renders the component to an HTML string
	fn render(&self) -> String;
}

/// Section heading
pub struct Heading {
	/// Heading text
	pub text: String,
	/// Heading level, 1 through 6; defaults to 1
	pub level: u8,
}

impl Component for Heading {
	fn name(&self) -> &'static str {
		"heading"
	}

	fn render(&self) -> String {
		let level = self.level.clamp(1, 6);
		format!(
			"<h{level}>{}</h{level}>\n",
			html_escape::encode_text(&self.text)
		)
	}
}

/// Free text block
pub struct TextBlock {
	/// Paragraph text
	pub text: String,
}

impl Component for TextBlock {
	fn name(&self) -> &'static str {
		"text"
	}

	fn render(&self) -> String {
		format!("<p>{}</p>\n", html_escape::encode_text(&self.text))
	}
}

/// Data grid mount
///
/// The composer carries the backend URL and the operator's pre-scoped
/// select-filter columns into the grid; the engine itself lives in
/// `tablero-grid` and is instantiated per mount.
pub struct GridComponent {
	/// Backend data URL
	pub api_url: String,
	/// Column names pre-scoped as select filters
	pub select_filters: Vec<String>,
}

impl GridComponent {
	/// Instantiates a fresh, unfetched engine for this mount, carrying
	/// the pre-scoped select-filter columns into it
	pub fn engine(&self) -> GridEngine {
		GridEngine::new(self.api_url.clone())
			.with_select_columns(self.select_filters.iter().cloned())
	}
}

impl Component for GridComponent {
	fn name(&self) -> &'static str {
		"grid"
	}

	fn render(&self) -> String {
		format!(
			"<div class=\"grid\" data-api-url=\"{}\"></div>\n",
			html_escape::encode_double_quoted_attribute(&self.api_url)
		)
	}
}

/// Action button, optionally opening a layered form modal
pub struct ButtonComponent {
	/// Button label
	pub label: String,
	/// Referenced schema for the modal, if any
	pub modal: Option<ModalSpec>,
}

impl ButtonComponent {
	/// Opens the modal: fetches the referenced schema and hosts a fresh
	/// renderer over it
	///
	/// Every open constructs a new renderer, so closing the overlay
	/// discards the previous renderer's in-memory state unconditionally;
	/// there is no draft persistence.
	pub async fn open_form(
		&self,
		proxy: &dyn Proxy,
		storage_url: &str,
	) -> Result<Option<FormRenderer>, ProxyError> {
		let Some(modal) = &self.modal else {
			return Ok(None);
		};
		let schema = fetch_schema(proxy, storage_url, modal.module_id, modal.schema_id).await?;
		Ok(Some(FormRenderer::new(schema)))
	}
}

impl Component for ButtonComponent {
	fn name(&self) -> &'static str {
		"button"
	}

	fn render(&self) -> String {
		format!(
			"<button type=\"button\">{}</button>\n",
			html_escape::encode_text(&self.label)
		)
	}
}

/// Visible placeholder for a descriptor type this build does not know
pub struct Unknown {
	/// The unrecognized `type` value
	pub type_name: String,
}

impl Component for Unknown {
	fn name(&self) -> &'static str {
		"unknown"
	}

	fn render(&self) -> String {
		format!(
			"<div class=\"unknown-component\">Componente desconocido: {}</div>\n",
			html_escape::encode_text(&self.type_name)
		)
	}
}
