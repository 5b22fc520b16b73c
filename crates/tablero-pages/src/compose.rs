//! Descriptor-to-component dispatch

use crate::component::{ButtonComponent, Component, GridComponent, Heading, TextBlock, Unknown};
use tablero_schema::ComponentDescriptor;

/// Instantiates the component matching one descriptor
///
/// Every descriptor yields a component; unknown types yield a visible
/// placeholder so one bad descriptor never takes down the page.
pub fn compose(descriptor: &ComponentDescriptor) -> Box<dyn Component> {
	match descriptor {
		ComponentDescriptor::Heading { text, level } => Box::new(Heading {
			text: text.clone(),
			level: level.unwrap_or(1),
		}),
		ComponentDescriptor::Text { text } => Box::new(TextBlock { text: text.clone() }),
		ComponentDescriptor::Grid {
			api_url,
			select_filters,
		} => Box::new(GridComponent {
			api_url: api_url.clone(),
			select_filters: select_filters.clone(),
		}),
		ComponentDescriptor::Button { label, modal } => Box::new(ButtonComponent {
			label: label.clone(),
			modal: modal.clone(),
		}),
		ComponentDescriptor::Unknown { type_name } => Box::new(Unknown {
			type_name: type_name.clone(),
		}),
	}
}
