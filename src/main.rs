//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Snackbar
//! library and the Zellij plugin system. It implements the `ZellijPlugin`
//! trait to handle Zellij events and lifecycle.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `PermissionRequestResult`, and
//!    `WebRequestResult` events
//! 3. **Permission Grant**: Issue the single menu fetch via `web_request`
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! Zellij events are translated to library events:
//!
//! - `Key(Down)` → `Event::KeyDown`
//! - `Key(Esc)` → `Event::ExitSearch` (in search mode)
//! - `PermissionRequestResult` → `Event::PermissionsResult { granted }`
//! - `WebRequestResult` → `Event::MenuLoaded` / `Event::MenuFetchFailed`
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! In normal mode:
//! - `j`/`Down`: Move down
//! - `k`/`Up`: Move up
//! - `1`-`4` or `a`/`b`/`l`/`d`: Select category tab
//! - `/`: Enter search mode
//! - `q`: Close plugin
//!
//! In search mode:
//! - printable characters: Type into the query
//! - `Enter`: Move focus to the result list
//! - `Esc`: Exit search
//! - `/`: Return to search input

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use snackbar::menu::decode_menu;
use snackbar::{
    handle_event, Action, Category, Config, Event as AppEvent, InputMode, SearchFocus,
};

// Register plugin with Zellij
register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` for the Zellij plugin lifecycle.
struct State {
    /// Core application state from library layer.
    app: snackbar::app::AppState,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: snackbar::initialize(&default_config),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Called once during plugin startup. Parses configuration, initializes
    /// application state, requests permissions, and subscribes to events.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `WebAccess`: Fetch the menu from the configured endpoint
    ///
    /// # Subscriptions
    ///
    /// - `Key`: Keyboard input
    /// - `PermissionRequestResult`: Gate for issuing the fetch
    /// - `WebRequestResult`: Menu endpoint response
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        snackbar::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        tracing::debug!(menu_url = %config.menu_url, "parsed configuration");
        self.app = snackbar::initialize(&config);
        tracing::debug!("app state initialized");

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess]);

        tracing::debug!("subscribing to events");
        subscribe(&[
            EventType::Key,
            EventType::PermissionRequestResult,
            EventType::WebRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to `handle_event`,
    /// and executes resulting actions. Returns `true` if the UI should re-render.
    ///
    /// # Parameters
    ///
    /// * `event` - Zellij event to process
    ///
    /// # Returns
    ///
    /// - `true` if the plugin UI should re-render
    /// - `false` if the event was ignored or resulted in no state changes
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        tracing::debug!(event = %event_name, "processing event");

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                AppEvent::PermissionsResult {
                    granted: matches!(permissions, PermissionStatus::Granted),
                }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, _context) => {
                Self::map_web_request_result(status, &body)
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Delegates to the library's rendering layer.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in rows
    /// * `cols` - Terminal width in columns
    fn render(&mut self, rows: usize, cols: usize) {
        snackbar::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<AppEvent> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(AppEvent::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(AppEvent::KeyUp);
        }

        Some(match key.bare_key {
            BareKey::Down => AppEvent::KeyDown,
            BareKey::Up => AppEvent::KeyUp,
            BareKey::Esc => match self.app.input_mode {
                InputMode::Search(_) => AppEvent::ExitSearch,
                InputMode::Normal => AppEvent::Escape,
            },
            BareKey::Enter => match self.app.input_mode {
                InputMode::Search(SearchFocus::Typing) => AppEvent::FocusResults,
                _ => return None,
            },
            BareKey::Backspace => AppEvent::Backspace,
            BareKey::Char('/') => match self.app.input_mode {
                InputMode::Normal => AppEvent::SearchMode,
                InputMode::Search(_) => AppEvent::FocusSearchBar,
            },
            BareKey::Char(c) if self.app.input_mode == InputMode::Search(SearchFocus::Typing) => {
                AppEvent::Char(c)
            }
            BareKey::Char('j') => AppEvent::KeyDown,
            BareKey::Char('k') => AppEvent::KeyUp,
            BareKey::Char('q') => AppEvent::CloseFocus,
            BareKey::Char(c) => Self::map_category_key(c)?,
            _ => return None,
        })
    }

    /// Maps category tab keybindings (`1`-`4`, `a`/`b`/`l`/`d`).
    fn map_category_key(c: char) -> Option<AppEvent> {
        let tag = match c {
            '1' | 'a' => Category::All,
            '2' | 'b' => Category::Breakfast,
            '3' | 'l' => Category::Lunch,
            '4' | 'd' => Category::Dinner,
            _ => return None,
        };
        Some(AppEvent::SelectCategory(tag))
    }

    /// Maps web request results to application events.
    ///
    /// Any non-2xx status or undecodable body is a terminal fetch failure;
    /// the detail only reaches the trace log.
    fn map_web_request_result(status: u16, body: &[u8]) -> AppEvent {
        tracing::debug!(status = status, body_len = body.len(), "web request result event");

        if !(200..=299).contains(&status) {
            return AppEvent::MenuFetchFailed {
                error: format!("menu endpoint returned HTTP {status}"),
            };
        }

        match decode_menu(body) {
            Ok(items) => AppEvent::MenuLoaded { items },
            Err(e) => AppEvent::MenuFetchFailed {
                error: e.to_string(),
            },
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Close plugin pane
    /// - `FetchMenu`: Issue the single GET against the menu endpoint
    ///
    /// # Parameters
    ///
    /// * `action` - Action to execute
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchMenu { ref url } => {
                tracing::debug!(url = %url, "fetching menu");
                web_request(
                    url.clone(),
                    HttpVerb::Get,
                    BTreeMap::new(),
                    Vec::new(),
                    BTreeMap::new(),
                );
            }
        }
    }
}
