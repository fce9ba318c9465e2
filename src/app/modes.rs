//! Input mode and filter mode state types for the application.
//!
//! This module defines the state machine enums that control user interaction
//! modes and which filter drives the visible view. These types determine which
//! keybindings are active and how input is processed.
//!
//! # State Machine
//!
//! The application operates in one of two primary input modes:
//! - **Normal**: Default navigation and tab-switching mode
//! - **Search**: Active search with typing or result navigation focus
//!
//! The filter state records which of the two independent filter modes ran most
//! recently; they do not compose.

use crate::domain::Category;

/// Focus state within search mode.
///
/// Determines whether search input is being typed or filtered results are
/// being navigated. Controls which keybindings are active during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to Navigating).
    Typing,

    /// User is navigating through filtered search results.
    ///
    /// Accepts j/k for movement and / to return to Typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and search bar visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and tab-switching mode.
    ///
    /// Available keybindings: j/k (navigate), 1-4 or a/b/l/d (category tabs),
    /// / (search), q (quit).
    Normal,

    /// Active search mode with focus state.
    ///
    /// Contains a [`SearchFocus`] variant indicating whether the user is typing
    /// or navigating results. Footer displays search-specific keybindings.
    Search(SearchFocus),
}

/// The most recently applied filter.
///
/// The two filter modes are independent: running a search does not narrow the
/// selected category's view, and selecting a category discards the search
/// results. Whichever variant is stored here drives the visible view, making
/// the non-composition an explicit branch in `AppState::apply_filter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterState {
    /// A category tab was selected last.
    Category(Category),

    /// A search query was typed last.
    Query(String),
}

impl Default for FilterState {
    /// Starts on the `all` tab, mirroring the initially selected button.
    fn default() -> Self {
        Self::Category(Category::All)
    }
}
