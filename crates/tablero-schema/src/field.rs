//! The form-field type algebra
//!
//! [`FieldSpec`] is a closed sum type: every consumption site (builder
//! edits, rendering, validation) matches exhaustively, so "impossible"
//! combinations such as an either group carrying stray select options
//! cannot be represented.

use serde::{Deserialize, Serialize};

/// Input widget kind for a [`FieldSpec::Simple`] field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
	/// Single-line text input
	Text,
	/// Email address input
	Email,
	/// Password input
	Password,
	/// Numeric input (digits and a single decimal point)
	Number,
	/// Date input
	Date,
	/// Multi-line text input
	Textarea,
	/// Boolean checkbox
	Checkbox,
	/// File selector (only the file name is retained)
	File,
}

impl InputKind {
	/// HTML input type attribute for this kind
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Email => "email",
			Self::Password => "password",
			Self::Number => "number",
			Self::Date => "date",
			Self::Textarea => "textarea",
			Self::Checkbox => "checkbox",
			Self::File => "file",
		}
	}
}

/// One selectable option of a select field: a `(label, value)` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
	/// Text shown to the operator
	pub label: String,
	/// Value stored when the option is chosen
	pub value: String,
}

impl ChoiceOption {
	/// Create a new option pair
	///
	/// # Examples
	///
	/// ```
	/// use tablero_schema::ChoiceOption;
	///
	/// let opt = ChoiceOption::new("Active", "active");
	/// assert_eq!(opt.label, "Active");
	/// assert_eq!(opt.value, "active");
	/// ```
	pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			value: value.into(),
		}
	}
}

/// Discriminant of a [`FieldSpec`] variant, used for builder kind switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
	/// Plain input field
	Simple,
	/// Closed choice with inline options
	Select,
	/// Choice resolved from a remote source at render time
	Combo,
	/// Field pair where at least one sibling must hold a value
	Either,
	/// Parent/child pair where the child renders only while the parent
	/// holds a value
	Nest,
}

/// One node in the form-field type algebra
///
/// `Either` and `Nest` never carry a label or name of their own; all
/// addressable names live on the `Simple`/`Select`/`Combo` leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldSpec {
	/// Plain input field
	Simple {
		label: String,
		name: String,
		#[serde(rename = "inputKind")]
		input: InputKind,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		placeholder: Option<String>,
		#[serde(default)]
		required: bool,
	},
	/// Closed choice from an inline option list, unique by value
	Select {
		label: String,
		name: String,
		#[serde(default)]
		required: bool,
		#[serde(default)]
		options: Vec<ChoiceOption>,
	},
	/// Choice whose options are resolved from `source_url` at render time
	Combo {
		label: String,
		name: String,
		#[serde(default)]
		required: bool,
		#[serde(rename = "sourceUrl")]
		source_url: String,
	},
	/// Field pair: valid when at least one child holds a non-empty value
	Either {
		left: Box<FieldSpec>,
		right: Box<FieldSpec>,
	},
	/// Dependent pair: `child` renders only while `father` holds a value.
	/// The child may be absent while the schema is still being built.
	Nest {
		father: Box<FieldSpec>,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		child: Option<Box<FieldSpec>>,
	},
}

impl FieldSpec {
	/// Default shape of a given kind, with the supplied leaf name
	///
	/// Used by the builder both for new fields and for destructive kind
	/// switches. `Either` children receive `{name}_left` / `{name}_right`;
	/// a `Nest` starts with only a father and no child.
	///
	/// # Examples
	///
	/// ```
	/// use tablero_schema::{FieldKind, FieldSpec, InputKind};
	///
	/// let field = FieldSpec::default_of(FieldKind::Simple, "field_1");
	/// assert_eq!(field.name(), Some("field_1"));
	/// assert!(matches!(
	/// 	field,
	/// 	FieldSpec::Simple { input: InputKind::Text, .. }
	/// ));
	/// ```
	pub fn default_of(kind: FieldKind, name: &str) -> Self {
		match kind {
			FieldKind::Simple => Self::Simple {
				label: String::new(),
				name: name.to_string(),
				input: InputKind::Text,
				placeholder: None,
				required: false,
			},
			FieldKind::Select => Self::Select {
				label: String::new(),
				name: name.to_string(),
				required: false,
				options: vec![],
			},
			FieldKind::Combo => Self::Combo {
				label: String::new(),
				name: name.to_string(),
				required: false,
				source_url: String::new(),
			},
			FieldKind::Either => Self::Either {
				left: Box::new(Self::default_of(
					FieldKind::Simple,
					&format!("{name}_left"),
				)),
				right: Box::new(Self::default_of(
					FieldKind::Simple,
					&format!("{name}_right"),
				)),
			},
			FieldKind::Nest => Self::Nest {
				father: Box::new(Self::default_of(FieldKind::Simple, name)),
				child: None,
			},
		}
	}

	/// The kind discriminant of this field
	pub fn kind(&self) -> FieldKind {
		match self {
			Self::Simple { .. } => FieldKind::Simple,
			Self::Select { .. } => FieldKind::Select,
			Self::Combo { .. } => FieldKind::Combo,
			Self::Either { .. } => FieldKind::Either,
			Self::Nest { .. } => FieldKind::Nest,
		}
	}

	/// The addressable name of this node, if it has one
	///
	/// `Either` and `Nest` have no name of their own and return `None`.
	pub fn name(&self) -> Option<&str> {
		match self {
			Self::Simple { name, .. } | Self::Select { name, .. } | Self::Combo { name, .. } => {
				Some(name)
			}
			Self::Either { .. } | Self::Nest { .. } => None,
		}
	}

	/// Whether this leaf is marked required (composites return `false`)
	pub fn required(&self) -> bool {
		match self {
			Self::Simple { required, .. }
			| Self::Select { required, .. }
			| Self::Combo { required, .. } => *required,
			Self::Either { .. } | Self::Nest { .. } => false,
		}
	}

	/// Collects every addressable leaf name under this node, in order
	pub fn collect_names<'a>(&'a self, out: &mut Vec<&'a str>) {
		match self {
			Self::Simple { name, .. } | Self::Select { name, .. } | Self::Combo { name, .. } => {
				out.push(name);
			}
			Self::Either { left, right } => {
				left.collect_names(out);
				right.collect_names(out);
			}
			Self::Nest { father, child } => {
				father.collect_names(out);
				if let Some(child) = child {
					child.collect_names(out);
				}
			}
		}
	}

	/// Finds the leaf spec with the given name under this node
	pub fn find_leaf(&self, target: &str) -> Option<&FieldSpec> {
		match self {
			Self::Simple { name, .. } | Self::Select { name, .. } | Self::Combo { name, .. } => {
				(name == target).then_some(self)
			}
			Self::Either { left, right } => {
				left.find_leaf(target).or_else(|| right.find_leaf(target))
			}
			Self::Nest { father, child } => father
				.find_leaf(target)
				.or_else(|| child.as_deref().and_then(|c| c.find_leaf(target))),
		}
	}
}
