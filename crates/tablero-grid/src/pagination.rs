//! Grid pagination
//!
//! Fixed page size, 1-based page index, and a page strip with ellipsis
//! compaction: the first and last page always show, plus a window of
//! two pages around the current one.

/// Fixed grid page size
pub const PAGE_SIZE: usize = 10;

/// One slot of the rendered page strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
	/// A navigable page number
	Page(usize),
	/// A gap of skipped pages
	Ellipsis,
}

/// Pagination state over the filtered row count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
	/// Number of items per page
	pub per_page: usize,
	/// Current page number (1-indexed)
	pub current_page: usize,
	/// Total number of items
	pub total_items: usize,
}

impl Pagination {
	/// Creates pagination with the fixed grid page size
	pub fn new() -> Self {
		Self {
			per_page: PAGE_SIZE,
			current_page: 1,
			total_items: 0,
		}
	}

	/// Returns the total number of pages
	pub fn total_pages(&self) -> usize {
		if self.total_items == 0 {
			0
		} else {
			self.total_items.div_ceil(self.per_page)
		}
	}

	/// Returns the start index for the current page (0-indexed)
	pub fn start_index(&self) -> usize {
		(self.current_page.saturating_sub(1)) * self.per_page
	}

	/// Returns the end index for the current page (exclusive, 0-indexed)
	pub fn end_index(&self) -> usize {
		(self.start_index() + self.per_page).min(self.total_items)
	}

	/// Sets the current page, clamping into the valid range
	///
	/// Requesting a page past the end lands on the last valid page.
	pub fn set_page(&mut self, page: usize) {
		self.current_page = page.max(1).min(self.total_pages().max(1));
	}

	/// Updates the item count, re-clamping the current page
	pub fn set_total_items(&mut self, total_items: usize) {
		self.total_items = total_items;
		self.set_page(self.current_page);
	}

	/// Resets to the first page (the filtered set changed)
	pub fn reset(&mut self) {
		self.current_page = 1;
	}

	/// The page strip with ellipsis compaction
	///
	/// # Examples
	///
	/// ```
	/// use tablero_grid::{PageItem, Pagination};
	///
	/// let mut p = Pagination::new();
	/// p.set_total_items(95); // 10 pages
	/// p.set_page(5);
	/// assert_eq!(p.page_items(), vec![
	/// 	PageItem::Page(1),
	/// 	PageItem::Ellipsis,
	/// 	PageItem::Page(3),
	/// 	PageItem::Page(4),
	/// 	PageItem::Page(5),
	/// 	PageItem::Page(6),
	/// 	PageItem::Page(7),
	/// 	PageItem::Ellipsis,
	/// 	PageItem::Page(10),
	/// ]);
	/// ```
	pub fn page_items(&self) -> Vec<PageItem> {
		let total = self.total_pages();
		let current = self.current_page;
		let mut items = vec![];
		let mut gap = false;
		for page in 1..=total {
			let shown =
				page == 1 || page == total || page.abs_diff(current) <= 2;
			if shown {
				if gap {
					items.push(PageItem::Ellipsis);
					gap = false;
				}
				items.push(PageItem::Page(page));
			} else {
				gap = true;
			}
		}
		items
	}
}

impl Default for Pagination {
	fn default() -> Self {
		Self::new()
	}
}
