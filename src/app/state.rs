//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin,
//! along with the single filter transition function and UI view model
//! generation. It serves as the single source of truth for all transient UI state.
//!
//! # Architecture
//!
//! `AppState` consolidates the transient UI state into one structure: the
//! fetch phase, the full collection, the most recent filter, and the derived
//! visible view. The full
//! collection is set exactly once on successful decode and never mutated;
//! every filter action replaces the visible view through [`AppState::apply_filter`].
//!
//! # State Components
//!
//! - **Menu**: Full collection of decoded food items, in endpoint order
//! - **Visible**: Derived view after the most recent filter, `None` when no view exists
//! - **Phase**: Fetch lifecycle (`Idle → Loading → Ready/Error`)
//! - **Filter**: Which of the two independent filter modes ran last
//! - **Selection**: Cursor position within the visible view
//! - **Input Mode**: Controls keybinding interpretation and UI layout

use super::filter;
use super::modes::{FilterState, InputMode};
use crate::domain::{fetched_ago, Category, FoodItem, FETCH_FAILURE_MESSAGE};
use crate::menu::MenuPhase;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DishRow, FilterBarInfo, FooterInfo, HeaderInfo, MenuViewModel, SearchBarInfo, StatusInfo,
};

/// Fixed width of the NAME column in the dish table.
const NAME_COLUMN_WIDTH: usize = 32;

/// Central application state container.
///
/// Holds all transient UI state including the fetched menu, filter state,
/// selection, and mode information. Mutated by the event handler in response
/// to user input and fetch results. View models are computed on-demand from
/// state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Full collection of decoded food items, in endpoint order.
    ///
    /// Set exactly once by `set_menu()` on successful decode and never
    /// mutated thereafter.
    pub menu: Vec<FoodItem>,

    /// The derived visible view, replaced (never mutated in place) by
    /// `apply_filter()`.
    ///
    /// `None` means no view exists: before the fetch completes, or after the
    /// empty-query quirk fires. When `Some`, always an order-preserving
    /// subset of `menu`.
    pub visible: Option<Vec<FoodItem>>,

    /// Observable phase of the single menu fetch.
    pub phase: MenuPhase,

    /// The most recently applied filter; drives `apply_filter()`.
    pub filter: FilterState,

    /// Which category tab is marked selected. Exactly one at a time.
    ///
    /// Updated only by category selection; typing a search query leaves the
    /// tab highlight where it was.
    pub selected_category: Category,

    /// Current search query string.
    ///
    /// Accumulated by `Char` events, reduced by `Backspace` events, cleared
    /// by `ExitSearch` and `Escape` events.
    pub search_query: String,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Zero-based index of the selected row within the visible view.
    ///
    /// Clamped to valid bounds by `apply_filter()`. Wraps around during
    /// navigation via `move_selection_up/down()`.
    pub selected_index: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Configured menu endpoint URL, target of the single fetch.
    pub menu_url: String,

    /// Unix timestamp of the successful fetch, for the header's "fetched
    /// just now" stamp. `None` until the menu is ready.
    pub fetched_at: Option<i64>,
}

impl AppState {
    /// Creates a new application state in the `Idle` phase.
    ///
    /// All collections start empty; the `all` tab is selected.
    #[must_use]
    pub fn new(menu_url: String, theme: Theme) -> Self {
        Self {
            menu: vec![],
            visible: None,
            phase: MenuPhase::Idle,
            filter: FilterState::default(),
            selected_category: Category::All,
            search_query: String::new(),
            input_mode: InputMode::Normal,
            selected_index: 0,
            theme,
            menu_url,
            fetched_at: None,
        }
    }

    /// Populates the collection from a successful fetch.
    ///
    /// Transitions the phase to `Ready` and sets the visible view to the full
    /// collection. The collection is set exactly once: a second call is
    /// ignored with a warning, preserving the immutability invariant.
    pub fn set_menu(&mut self, items: Vec<FoodItem>) {
        if self.phase == MenuPhase::Ready {
            tracing::warn!("menu already populated, ignoring duplicate load");
            return;
        }

        tracing::debug!(item_count = items.len(), "menu ready");
        self.menu = items;
        self.visible = Some(self.menu.clone());
        self.phase = MenuPhase::Ready;
        self.fetched_at = Some(chrono::Utc::now().timestamp());
    }

    /// Records a terminal fetch failure.
    ///
    /// The phase carries the static user-visible message; `detail` goes to
    /// the trace log only. No retry path exists.
    pub fn fail_fetch(&mut self, detail: &str) {
        tracing::error!(detail = %detail, "menu fetch failed");
        self.phase = MenuPhase::Error(FETCH_FAILURE_MESSAGE.to_string());
        self.visible = None;
    }

    /// Selects a category tab and replaces the visible view.
    ///
    /// Moves the tab highlight (exactly one selected at a time), records the
    /// category as the most recent filter, and discards any search results.
    pub fn select_category(&mut self, tag: Category) {
        self.selected_category = tag;
        self.filter = FilterState::Category(tag);
        self.apply_filter();
    }

    /// Records the current search query as the most recent filter and
    /// replaces the visible view.
    pub fn apply_query(&mut self) {
        self.filter = FilterState::Query(self.search_query.clone());
        self.apply_filter();
    }

    /// The single filter transition function.
    ///
    /// Derives `visible` from the full collection according to the most
    /// recent filter. The branch on [`FilterState`] is the explicit home of
    /// the "search and category do not compose" behavior: whichever filter
    /// ran last wins outright.
    ///
    /// Clamps `selected_index` to the new view's bounds.
    pub fn apply_filter(&mut self) {
        let _span = tracing::debug_span!("apply_filter",
            total_items = self.menu.len(),
            filter = ?self.filter,
        )
        .entered();

        self.visible = match &self.filter {
            FilterState::Category(tag) => Some(filter::by_category(&self.menu, *tag)),
            // Empty query: no view at all, not the full collection.
            FilterState::Query(text) => filter::by_query(&self.menu, text),
        };

        let visible_len = self.visible.as_ref().map_or(0, Vec::len);
        if visible_len == 0 {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(visible_len - 1);
        }

        tracing::debug!(visible_count = visible_len, "filter applied");
    }

    /// Returns the visible rows as a slice, empty when no view exists.
    #[must_use]
    pub fn visible_items(&self) -> &[FoodItem] {
        self.visible.as_deref().unwrap_or(&[])
    }

    /// Moves the selection cursor down by one row, wrapping to the top.
    ///
    /// No-op when the visible view is empty or absent.
    pub fn move_selection_down(&mut self) {
        let len = self.visible_items().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the selection cursor up by one row, wrapping to the bottom.
    ///
    /// No-op when the visible view is empty or absent.
    pub fn move_selection_up(&mut self) {
        let len = self.visible_items().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns a reference to the currently selected item, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&FoodItem> {
        self.visible_items().get(self.selected_index)
    }

    /// Computes a renderable UI view model from current state and terminal
    /// dimensions.
    ///
    /// While the fetch is pending or failed, the view model carries only a
    /// status screen. Once ready, it carries the full chrome: header, filter
    /// tabs, optional search bar, windowed dish rows, and footer.
    ///
    /// # Windowing
    ///
    /// 1. Calculate available rows after subtracting UI chrome
    /// 2. Center the window around the selected index
    /// 3. Shift the window near the list edges to maximize visible rows
    /// 4. Compute the relative selection index within the window
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> MenuViewModel {
        if let Some(status) = self.compute_status() {
            return MenuViewModel {
                rows: vec![],
                selected_index: 0,
                header: self.compute_header(),
                filter_bar: self.compute_filter_bar(),
                footer: self.compute_footer(),
                status: Some(status),
                search_bar: None,
            };
        }

        let visible = self.visible_items();
        let available_rows = self.calculate_available_rows(rows).max(1);

        let mut window_start = self.selected_index.saturating_sub(available_rows / 2);
        let window_end = (window_start + available_rows).min(visible.len());

        let actual_count = window_end - window_start;
        if actual_count < available_rows && visible.len() >= available_rows {
            window_start = window_end.saturating_sub(available_rows);
        }

        let highlight_query = match (&self.input_mode, &self.filter) {
            (InputMode::Search(_), FilterState::Query(text)) if !text.is_empty() => {
                Some(text.as_str())
            }
            _ => None,
        };

        let dish_rows: Vec<DishRow> = visible[window_start..window_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, item)| {
                self.compute_dish_row(item, window_start + relative_idx, highlight_query)
            })
            .collect();

        MenuViewModel {
            rows: dish_rows,
            selected_index: self.selected_index.saturating_sub(window_start),
            header: self.compute_header(),
            filter_bar: self.compute_filter_bar(),
            footer: self.compute_footer(),
            status: None,
            search_bar: self.compute_search_bar(),
        }
    }

    /// Computes a display row for a single item within the visible window.
    fn compute_dish_row(
        &self,
        item: &FoodItem,
        absolute_idx: usize,
        highlight_query: Option<&str>,
    ) -> DishRow {
        let name = if item.name.chars().count() > NAME_COLUMN_WIDTH - 2 {
            let kept = crate::ui::helpers::truncate_chars(&item.name, NAME_COLUMN_WIDTH - 5);
            format!("{kept}...")
        } else {
            item.name.clone()
        };

        let highlight_ranges =
            highlight_query.map_or_else(Vec::new, |query| filter::match_ranges(&name, query));

        DishRow {
            name,
            kind: item.kind.to_lowercase(),
            price: item.price.map_or_else(String::new, format_price),
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    /// Returns the full-screen status to render instead of the menu, if any.
    fn compute_status(&self) -> Option<StatusInfo> {
        match &self.phase {
            MenuPhase::Idle | MenuPhase::Loading => Some(StatusInfo {
                message: "Loading...".to_string(),
                subtitle: "Fetching the menu".to_string(),
                is_error: false,
            }),
            MenuPhase::Error(message) => Some(StatusInfo {
                message: message.clone(),
                subtitle: "Restart the plugin to try again".to_string(),
                is_error: true,
            }),
            MenuPhase::Ready => None,
        }
    }

    /// Computes header information: title, dish count, fetched-ago stamp.
    fn compute_header(&self) -> HeaderInfo {
        let title = match (&self.phase, self.fetched_at) {
            (MenuPhase::Ready, Some(at)) => {
                let count = self.visible_items().len();
                format!(" Snackbar ({count} dishes, fetched {}) ", fetched_ago(at))
            }
            _ => " Snackbar ".to_string(),
        };
        HeaderInfo { title }
    }

    /// Computes the category tab bar with exactly one tab marked selected.
    fn compute_filter_bar(&self) -> FilterBarInfo {
        FilterBarInfo {
            tabs: Category::ALL.to_vec(),
            selected: self.selected_category,
        }
    }

    /// Computes footer keybindings text based on the current input mode.
    fn compute_footer(&self) -> FooterInfo {
        use super::modes::SearchFocus;

        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: to results  Type to filter".to_string()
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  j/k: navigate".to_string()
            }
            InputMode::Normal => {
                "j/k: navigate  1-4: category  /: search  q: quit".to_string()
            }
        };

        FooterInfo { keybindings }
    }

    /// Computes search bar state if in search mode.
    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.search_query.clone(),
            })
        } else {
            None
        }
    }

    /// Calculates available rows for the dish list after subtracting UI chrome.
    ///
    /// Chrome is blank line, header, two borders, filter bar, table header,
    /// and footer (7 rows), plus the 3-row search box when search is active.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(7),
            InputMode::Search(_) => total_rows.saturating_sub(10),
        }
    }
}

/// Formats a price for the PRICE column.
///
/// Whole amounts print without decimals ("$10"), fractional amounts with two
/// ("$9.50").
fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("${price:.0}")
    } else {
        format!("${price:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::SearchFocus;

    fn ready_state() -> AppState {
        let mut state = AppState::new("http://localhost:9000".to_string(), Theme::default());
        state.set_menu(vec![
            FoodItem::new("Pancake".to_string(), "Breakfast".to_string()),
            FoodItem::new("Burger".to_string(), "Lunch".to_string()),
            FoodItem::new("Grilled Salmon".to_string(), "Dinner".to_string()),
        ]);
        state
    }

    #[test]
    fn set_menu_populates_both_views_identically() {
        let state = ready_state();
        assert_eq!(state.phase, MenuPhase::Ready);
        assert_eq!(state.visible.as_ref().unwrap(), &state.menu);
        assert!(state.fetched_at.is_some());
    }

    #[test]
    fn menu_is_set_exactly_once() {
        let mut state = ready_state();
        let original = state.menu.clone();
        state.set_menu(vec![FoodItem::new("Sushi".to_string(), "Dinner".to_string())]);
        assert_eq!(state.menu, original);
    }

    #[test]
    fn fail_fetch_is_terminal_with_static_message() {
        let mut state = AppState::new("http://localhost:9000".to_string(), Theme::default());
        state.fail_fetch("connection refused");
        assert_eq!(state.phase, MenuPhase::Error("Unable to fetch data".to_string()));
        assert!(state.visible.is_none());
    }

    #[test]
    fn select_category_moves_tab_highlight_and_filters() {
        let mut state = ready_state();
        state.select_category(Category::Lunch);
        assert_eq!(state.selected_category, Category::Lunch);
        let names: Vec<&str> = state.visible_items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Burger"]);
    }

    #[test]
    fn search_does_not_move_tab_highlight() {
        let mut state = ready_state();
        state.select_category(Category::Dinner);
        state.search_query = "pan".to_string();
        state.apply_query();
        assert_eq!(state.selected_category, Category::Dinner);
    }

    #[test]
    fn most_recent_filter_wins_query_over_category() {
        let mut state = ready_state();
        state.select_category(Category::Dinner);
        state.search_query = "pan".to_string();
        state.apply_query();
        // The dinner restriction does not compose with the search.
        let names: Vec<&str> = state.visible_items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Pancake"]);
    }

    #[test]
    fn most_recent_filter_wins_category_over_query() {
        let mut state = ready_state();
        state.search_query = "salmon".to_string();
        state.apply_query();
        state.select_category(Category::All);
        assert_eq!(state.visible.as_ref().unwrap(), &state.menu);
    }

    #[test]
    fn clearing_the_query_leaves_no_view() {
        let mut state = ready_state();
        state.search_query = "pan".to_string();
        state.apply_query();
        state.search_query.clear();
        state.apply_query();
        assert!(state.visible.is_none());
        assert!(state.visible_items().is_empty());
    }

    #[test]
    fn selection_wraps_and_clamps() {
        let mut state = ready_state();
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);

        state.selected_index = 2;
        state.select_category(Category::Lunch);
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_item().unwrap().name, "Burger");
    }

    #[test]
    fn viewmodel_shows_status_until_ready() {
        let state = AppState::new("http://localhost:9000".to_string(), Theme::default());
        let vm = state.compute_viewmodel(24, 80);
        let status = vm.status.unwrap();
        assert_eq!(status.message, "Loading...");
        assert!(!status.is_error);
        assert!(vm.rows.is_empty());
    }

    #[test]
    fn viewmodel_shows_error_screen_and_no_rows_after_failure() {
        let mut state = AppState::new("http://localhost:9000".to_string(), Theme::default());
        state.fail_fetch("boom");
        let vm = state.compute_viewmodel(24, 80);
        let status = vm.status.unwrap();
        assert_eq!(status.message, "Unable to fetch data");
        assert!(status.is_error);
        assert!(vm.rows.is_empty());
    }

    #[test]
    fn viewmodel_marks_exactly_one_tab_selected() {
        let mut state = ready_state();
        state.select_category(Category::Lunch);
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.filter_bar.selected, Category::Lunch);
        let selected: Vec<_> = vm
            .filter_bar
            .tabs
            .iter()
            .filter(|tab| **tab == vm.filter_bar.selected)
            .collect();
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn viewmodel_highlights_query_matches_while_searching() {
        let mut state = ready_state();
        state.input_mode = InputMode::Search(SearchFocus::Typing);
        state.search_query = "bur".to_string();
        state.apply_query();
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.rows.len(), 1);
        assert_eq!(vm.rows[0].highlight_ranges, vec![(0, 3)]);
    }

    #[test]
    fn viewmodel_windows_around_selection() {
        let mut state = AppState::new("http://localhost:9000".to_string(), Theme::default());
        let items: Vec<FoodItem> = (0..50)
            .map(|i| FoodItem::new(format!("Dish {i:02}"), "lunch".to_string()))
            .collect();
        state.set_menu(items);
        state.selected_index = 40;

        // 24 terminal rows leave 17 for the list in normal mode.
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.rows.len(), 17);
        assert!(vm.rows[vm.selected_index].is_selected);
        assert!(vm.rows.iter().any(|row| row.name == "Dish 40"));
    }

    #[test]
    fn multibyte_names_truncate_on_char_boundaries() {
        let mut state = AppState::new("http://localhost:9000".to_string(), Theme::default());
        // 16 chars but 32 bytes; fits the NAME column and must render intact.
        let short = "é".repeat(16);
        // 40 chars; must truncate without splitting a character.
        let long = "é".repeat(40);
        state.set_menu(vec![
            FoodItem::new(short.clone(), "lunch".to_string()),
            FoodItem::new(long, "dinner".to_string()),
        ]);

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.rows[0].name, short);
        assert_eq!(vm.rows[1].name.chars().count(), NAME_COLUMN_WIDTH - 2);
        assert!(vm.rows[1].name.ends_with("..."));
    }

    #[test]
    fn prices_drop_trailing_zero_decimals() {
        assert_eq!(format_price(10.0), "$10");
        assert_eq!(format_price(9.5), "$9.50");
    }
}
