//! Shared schema model for Tablero
//!
//! This crate holds the persisted JSON artifacts the rest of the engine
//! consumes: the form-field type algebra ([`FieldSpec`]), the form
//! descriptor ([`FormSchema`]), and the page composition descriptors
//! ([`PageSchema`], [`ComponentDescriptor`]).
//!
//! The types here carry no behavior beyond construction, validation and
//! (de)serialization. Schemas are trusted, same-deployment documents;
//! there is no cross-version compatibility layer.

pub mod error;
pub mod field;
pub mod form;
pub mod page;

pub use error::{Result, SchemaError};
pub use field::{ChoiceOption, FieldKind, FieldSpec, InputKind};
pub use form::{FormSchema, HttpMethod, SubmitSpec};
pub use page::{ComponentDescriptor, ModalSpec, PageSchema};
