//! Page descriptor loading
//!
//! A page descriptor is retrieved by slug path. Absence or structural
//! incompleteness yields a maintenance placeholder state, not an error
//! page.

use tablero_proxy::Proxy;
use tablero_schema::PageSchema;
use tracing::warn;

/// Outcome of a page load
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
	/// The descriptor is usable
	Ready(PageSchema),
	/// Absent or structurally incomplete descriptor
	Maintenance,
}

/// Loads the page descriptor for a slug
///
/// Any fetch failure, missing `title`/`components`, or undecodable body
/// degrades to [`PageState::Maintenance`].
pub async fn load_page(proxy: &dyn Proxy, base_url: &str, slug: &str) -> PageState {
	let url = format!("{}/{}", base_url.trim_end_matches('/'), slug);
	let body = match proxy.get_json(&url).await {
		Ok(body) => body,
		Err(e) => {
			warn!(slug, error = %e, "page descriptor fetch failed");
			return PageState::Maintenance;
		}
	};

	// Structural check first: both keys must exist for the page to be
	// considered present at all.
	let complete = body.get("title").is_some() && body.get("components").is_some();
	if !complete {
		warn!(slug, "page descriptor incomplete");
		return PageState::Maintenance;
	}

	match serde_json::from_value::<PageSchema>(body) {
		Ok(page) => PageState::Ready(page),
		Err(e) => {
			warn!(slug, error = %e, "page descriptor undecodable");
			PageState::Maintenance
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tablero_proxy::testing::StaticProxy;

	#[tokio::test]
	async fn test_ready_page() {
		let proxy = StaticProxy::new().with_json(
			"https://x/pages/clientes",
			serde_json::json!({"title": "Clientes", "components": []}),
		);
		let state = load_page(&proxy, "https://x/pages/", "clientes").await;
		assert!(matches!(state, PageState::Ready(p) if p.title == "Clientes"));
	}

	#[tokio::test]
	async fn test_absent_page_is_maintenance() {
		let proxy = StaticProxy::new();
		let state = load_page(&proxy, "https://x/pages", "nada").await;
		assert_eq!(state, PageState::Maintenance);
	}

	#[tokio::test]
	async fn test_incomplete_page_is_maintenance() {
		let proxy = StaticProxy::new()
			.with_json("https://x/pages/rota", serde_json::json!({"title": "Rota"}));
		let state = load_page(&proxy, "https://x/pages", "rota").await;
		assert_eq!(state, PageState::Maintenance);
	}
}
