//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! permission results, and fetch results, translating them into state changes
//! and action sequences. It serves as the primary control flow coordinator
//! for the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (`main.rs` maps Zellij events)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Filtering**: `SelectCategory`, `Char`, `Backspace`
//! - **Mode Switching**: `SearchMode`, `FocusSearchBar`, `FocusResults`,
//!   `ExitSearch`, `Escape`
//! - **Fetch Lifecycle**: `PermissionsResult`, `MenuLoaded`, `MenuFetchFailed`

use crate::app::modes::{InputMode, SearchFocus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{Category, FoodItem};
use crate::menu::MenuPhase;

/// Events triggered by user input, permission grants, or fetch results.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves the selection cursor down by one row (wraps to top).
    KeyDown,
    /// Moves the selection cursor up by one row (wraps to bottom).
    KeyUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Selects a category tab, replacing the visible view.
    SelectCategory(Category),
    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Moves focus from the search input to the result list.
    FocusResults,
    /// Exits search mode, clearing the query.
    ExitSearch,
    /// Appends a character to the search query (search-as-you-type).
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears search state and returns to normal mode.
    Escape,

    /// Reports the result of the `WebAccess` permission request.
    ///
    /// A grant while the menu phase is still `Idle` triggers the single
    /// fetch; a denial is a terminal fetch failure (the plugin can never
    /// reach the endpoint).
    PermissionsResult {
        /// Whether the permission was granted.
        granted: bool,
    },

    /// Carries the decoded menu after a successful fetch.
    MenuLoaded {
        /// Validated food items in endpoint order.
        items: Vec<FoodItem>,
    },

    /// Reports a terminal fetch failure.
    ///
    /// Carries the underlying detail for the trace log; the user only ever
    /// sees the static failure message.
    MenuFetchFailed {
        /// Description of the failure (status, transport error, bad body).
        error: String,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// This is the primary event handler that coordinates all state transitions and
/// side effects. It pattern-matches on event types, calls state mutation methods,
/// and collects actions to be executed by the plugin runtime.
///
/// # Returns
///
/// A `(should_render, actions)` pair: whether the UI must re-render, and the
/// side effects to execute in sequence.
///
/// # Errors
///
/// Returns errors from state mutation methods. All current transitions are
/// infallible, so the `Result` exists for the runtime's error logging path.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SelectCategory(tag) => {
            tracing::debug!(category = tag.as_str(), "category tab selected");
            state.select_category(*tag);
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query = String::new();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }

            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch | Event::Escape => {
            // Exiting search leaves the visible view exactly as the most
            // recent filter produced it; only the input state resets.
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.search_query = String::new();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, "search query updated");
            state.apply_query();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.search_query.pop();
            state.apply_query();
            Ok((true, vec![]))
        }
        Event::PermissionsResult { granted } => {
            if !granted {
                tracing::warn!("web access denied, menu cannot be fetched");
                state.fail_fetch("WebAccess permission denied");
                return Ok((true, vec![]));
            }

            if state.phase != MenuPhase::Idle {
                tracing::debug!(phase = ?state.phase, "fetch already issued, ignoring grant");
                return Ok((false, vec![]));
            }

            tracing::debug!(url = %state.menu_url, "issuing menu fetch");
            state.phase = MenuPhase::Loading;
            Ok((
                true,
                vec![Action::FetchMenu {
                    url: state.menu_url.clone(),
                }],
            ))
        }
        Event::MenuLoaded { items } => {
            state.set_menu(items.clone());
            Ok((true, vec![]))
        }
        Event::MenuFetchFailed { error } => {
            state.fail_fetch(error);
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::Theme;

    fn idle_state() -> AppState {
        AppState::new("http://localhost:9000".to_string(), Theme::default())
    }

    fn loaded_state() -> AppState {
        let mut state = idle_state();
        state.set_menu(vec![
            FoodItem::new("Pancake".to_string(), "Breakfast".to_string()),
            FoodItem::new("Burger".to_string(), "Lunch".to_string()),
        ]);
        state
    }

    #[test]
    fn permission_grant_issues_exactly_one_fetch() {
        let mut state = idle_state();

        let (_, actions) =
            handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
        assert_eq!(
            actions,
            vec![Action::FetchMenu {
                url: "http://localhost:9000".to_string()
            }]
        );
        assert_eq!(state.phase, MenuPhase::Loading);

        // A duplicate grant must not refetch.
        let (_, actions) =
            handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn permission_denial_is_a_fetch_failure() {
        let mut state = idle_state();
        handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();
        assert_eq!(state.phase, MenuPhase::Error("Unable to fetch data".to_string()));
    }

    #[test]
    fn menu_loaded_transitions_to_ready() {
        let mut state = idle_state();
        state.phase = MenuPhase::Loading;

        let items = vec![FoodItem::new("Ramen".to_string(), "lunch".to_string())];
        let (render, actions) =
            handle_event(&mut state, &Event::MenuLoaded { items: items.clone() }).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.phase, MenuPhase::Ready);
        assert_eq!(state.menu, items);
        assert_eq!(state.visible.as_ref().unwrap(), &items);
    }

    #[test]
    fn fetch_failure_surfaces_static_message() {
        let mut state = idle_state();
        state.phase = MenuPhase::Loading;

        handle_event(
            &mut state,
            &Event::MenuFetchFailed {
                error: "status 502".to_string(),
            },
        )
        .unwrap();
        assert_eq!(state.phase, MenuPhase::Error("Unable to fetch data".to_string()));
    }

    #[test]
    fn typing_filters_on_every_change_event() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::SearchMode).unwrap();

        for c in "bur".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        let names: Vec<&str> = state.visible_items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Burger"]);

        // Backspacing to an empty query leaves the absent view (quirk).
        for _ in 0..3 {
            handle_event(&mut state, &Event::Backspace).unwrap();
        }
        assert!(state.visible.is_none());
    }

    #[test]
    fn chars_outside_search_mode_are_ignored() {
        let mut state = loaded_state();
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn category_selection_marks_exactly_one_tab() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::SelectCategory(Category::Lunch)).unwrap();
        assert_eq!(state.selected_category, Category::Lunch);

        handle_event(&mut state, &Event::SelectCategory(Category::All)).unwrap();
        assert_eq!(state.selected_category, Category::All);
        assert_eq!(state.visible.as_ref().unwrap(), &state.menu);
    }

    #[test]
    fn focus_results_with_empty_query_returns_to_normal() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn escape_resets_input_but_not_the_view() {
        let mut state = loaded_state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('p')).unwrap();
        let view_before = state.visible.clone();

        handle_event(&mut state, &Event::Escape).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.search_query.is_empty());
        assert_eq!(state.visible, view_before);
    }

    #[test]
    fn quit_emits_close_focus() {
        let mut state = loaded_state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
