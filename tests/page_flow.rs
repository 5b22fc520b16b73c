//! End-to-end flow: page descriptor to grid interaction to export

use serde_json::json;
use tablero::grid::{GridState, SearchMode};
use tablero::pages::{GridComponent, PageState, compose, load_page};
use tablero::proxy::testing::StaticProxy;
use tablero::schema::ComponentDescriptor;

fn backend() -> StaticProxy {
	StaticProxy::new()
		.with_json(
			"https://backend/pages/movimientos",
			json!({
				"title": "Movimientos",
				"components": [
					{"type": "heading", "text": "Movimientos"},
					{
						"type": "grid",
						"apiUrl": "https://backend/api/movimientos",
						"selectFilters": ["Monto"]
					}
				]
			}),
		)
		.with_json(
			"https://backend/api/movimientos",
			json!({
				"columns": ["Fecha", "Monto"],
				"data": [
					{"Fecha": "15/03/2024 10:30:00 a. m.", "Monto": 1500.5},
					{"Fecha": "20/11/2023 05:45:00 p. m.", "Monto": 200}
				]
			}),
		)
}

#[tokio::test]
async fn test_page_to_grid_to_export() {
	let proxy = backend();

	// Load the page and find its grid descriptor.
	let page = match load_page(&proxy, "https://backend/pages", "movimientos").await {
		PageState::Ready(page) => page,
		PageState::Maintenance => panic!("page should be ready"),
	};
	assert_eq!(page.title, "Movimientos");

	let grid_descriptor = page
		.components
		.iter()
		.find(|d| matches!(d, ComponentDescriptor::Grid { .. }))
		.unwrap();
	assert_eq!(compose(grid_descriptor).name(), "grid");

	// Mount the engine from the descriptor and fetch.
	let ComponentDescriptor::Grid {
		api_url,
		select_filters,
	} = grid_descriptor
	else {
		unreachable!()
	};
	let mount = GridComponent {
		api_url: api_url.clone(),
		select_filters: select_filters.clone(),
	};
	let mut grid = mount.engine();
	assert_eq!(grid.select_columns(), ["Monto"]);
	grid.load(&proxy).await.unwrap();
	assert_eq!(*grid.state(), GridState::Ready);
	assert_eq!(grid.columns(), ["Fecha", "Monto"]);

	// The pre-scoped column is a closed choice over its rendered values.
	grid.select_column("Monto");
	assert!(matches!(
		grid.mode_for("Monto"),
		Some(SearchMode::Select { choices }) if choices == &["1500.5", "200"]
	));
	grid.select_column("Monto"); // unscope

	// Header click on a date column infers a range mode.
	grid.select_column("Fecha");
	assert_eq!(grid.mode_for("Fecha"), Some(&SearchMode::DateRange));

	// A 2024 range keeps the March row and drops the 2023 one.
	grid.apply_date_range("Fecha", Some("2024-01-01"), Some("2024-12-31"));
	let visible = grid.filtered_rows();
	assert_eq!(visible.len(), 1);
	assert_eq!(visible[0]["Monto"], json!(1500.5));

	// Export stays on the original fetched set, filters notwithstanding.
	let csv = grid.export().unwrap();
	let lines: Vec<&str> = csv.lines().collect();
	assert_eq!(lines.len(), 3);
	assert_eq!(lines[0], "Fecha,Monto");
	assert!(lines.iter().any(|l| l.contains("20/11/2023")));
}

#[tokio::test]
async fn test_absent_page_degrades_to_maintenance() {
	let proxy = StaticProxy::new();
	let state = load_page(&proxy, "https://backend/pages", "inexistente").await;
	assert_eq!(state, PageState::Maintenance);
}
