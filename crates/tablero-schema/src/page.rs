//! Page composition descriptors
//!
//! A page is an ordered list of typed component descriptors. Descriptor
//! decoding is tolerant: an unrecognized `type` becomes
//! [`ComponentDescriptor::Unknown`] so a single bad descriptor cannot
//! take down the whole page.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

/// Reference to a form schema a button modal opens on demand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalSpec {
	/// Assigned identifier of the persisted schema
	#[serde(rename = "id")]
	pub schema_id: i64,
	/// Module the schema is stored under
	#[serde(rename = "moduleId")]
	pub module_id: i64,
}

/// One typed component of a page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ComponentDescriptor {
	/// Section heading
	Heading {
		text: String,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		level: Option<u8>,
	},
	/// Free text block
	Text { text: String },
	/// Data grid bound to a backend URL
	Grid {
		#[serde(rename = "apiUrl")]
		api_url: String,
		/// Column names the operator wants pre-scoped as select filters
		#[serde(rename = "selectFilters", default)]
		select_filters: Vec<String>,
	},
	/// Action button, optionally opening a form modal
	Button {
		label: String,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		modal: Option<ModalSpec>,
	},
	/// Catch-all for descriptors whose `type` this build does not know
	Unknown { type_name: String },
}

// Known variants deserialize through the tagged enum; anything that does
// not fit degrades to `Unknown` carrying the original type string.
impl<'de> Deserialize<'de> for ComponentDescriptor {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(tag = "type", rename_all = "lowercase")]
		enum Known {
			Heading {
				text: String,
				#[serde(default)]
				level: Option<u8>,
			},
			Text {
				text: String,
			},
			Grid {
				#[serde(rename = "apiUrl")]
				api_url: String,
				#[serde(rename = "selectFilters", default)]
				select_filters: Vec<String>,
			},
			Button {
				label: String,
				#[serde(default)]
				modal: Option<ModalSpec>,
			},
		}

		let value = serde_json::Value::deserialize(deserializer)?;
		match serde_json::from_value::<Known>(value.clone()) {
			Ok(Known::Heading { text, level }) => Ok(Self::Heading { text, level }),
			Ok(Known::Text { text }) => Ok(Self::Text { text }),
			Ok(Known::Grid {
				api_url,
				select_filters,
			}) => Ok(Self::Grid {
				api_url,
				select_filters,
			}),
			Ok(Known::Button { label, modal }) => Ok(Self::Button { label, modal }),
			Err(_) => Ok(Self::Unknown {
				type_name: value
					.get("type")
					.and_then(|t| t.as_str())
					.unwrap_or("")
					.to_string(),
			}),
		}
	}
}

/// A page descriptor: loaded once per navigated path, immutable for the
/// page's lifetime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSchema {
	/// Page title
	pub title: String,
	/// Ordered component list
	pub components: Vec<ComponentDescriptor>,
}
