//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information like match highlight ranges,
//! formatted prices, and tab selection state.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.

use crate::domain::Category;

/// Complete UI view model for rendering.
///
/// Contains all display information needed to render the plugin UI. When
/// `status` is set (fetch pending or failed), the renderer shows a bare
/// status screen and ignores the rest.
#[derive(Debug, Clone)]
pub struct MenuViewModel {
    /// Dish rows to display in the table (already windowed).
    pub rows: Vec<DishRow>,

    /// Index of the selected row within `rows`.
    pub selected_index: usize,

    /// Header information (title, dish count, fetched-ago stamp).
    pub header: HeaderInfo,

    /// Category tab bar with exactly one tab selected.
    pub filter_bar: FilterBarInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Full-screen status (loading or fetch failure), replacing the menu.
    pub status: Option<StatusInfo>,

    /// Search bar information, present only in search mode.
    pub search_bar: Option<SearchBarInfo>,
}

/// Display information for a single dish row.
#[derive(Debug, Clone)]
pub struct DishRow {
    /// Dish name, possibly truncated for the NAME column.
    pub name: String,

    /// Lowercased meal-type tag for the TYPE column.
    pub kind: String,

    /// Formatted price for the PRICE column, empty when absent.
    pub price: String,

    /// Whether this row is currently selected.
    pub is_selected: bool,

    /// Character ranges of query matches within `name`.
    ///
    /// Each tuple is `(start, end)` in character indices, exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Category tab bar display information.
///
/// The tabs are rendered in order with exactly one marked selected.
#[derive(Debug, Clone)]
pub struct FilterBarInfo {
    /// Tabs in display order (`all breakfast lunch dinner`).
    pub tabs: Vec<Category>,

    /// The tab currently marked selected.
    pub selected: Category,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "j/k: navigate  /: search  q: quit").
    pub keybindings: String,
}

/// Full-screen status display information.
///
/// Shown instead of the menu while the fetch is pending or after it failed.
#[derive(Debug, Clone)]
pub struct StatusInfo {
    /// Primary message ("Loading..." or the fetch failure message).
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,

    /// Whether this is the error state (styled with the error color).
    pub is_error: bool,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}
