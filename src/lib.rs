//! Snackbar: a Zellij plugin for browsing a food menu from a local endpoint.
//!
//! Snackbar fetches a JSON menu once on load and renders it as a filterable
//! terminal list:
//! - Category tabs (`all`, `breakfast`, `lunch`, `dinner`) with exactly one
//!   selected at a time
//! - Incremental free-text search over dish names
//! - A three-phase fetch lifecycle with a static failure screen
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Filter engine
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Menu Layer    │
//! │ (ui/)         │   │ (menu/)       │
//! │ - Rendering   │   │ - Fetch phase │
//! │ - Theming     │   │ - Decode +    │
//! │ - Components  │   │   validation  │
//! └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Food item model (domain/food)                    │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber                               │
//! │  - Rotating log file                                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/snackbar.wasm" {
//!         menu_url "http://localhost:9000"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize tracing,
//!    create `AppState`, request the `WebAccess` permission, subscribe to
//!    events
//! 2. **Permission Grant**: the event handler transitions `Idle → Loading`
//!    and emits the single `FetchMenu` action, executed as a `web_request`
//! 3. **Web Result**: the response body is decoded and validated into food
//!    items (`Ready`), or the failure screen is shown (`Error`)
//! 4. **Browsing**: category tabs and search replace the visible view; the
//!    full collection is never mutated
//!
//! # Key Design Decisions
//!
//! ## Single Fetch, No Retry
//!
//! The menu is fetched exactly once per plugin session. A failure is terminal
//! and surfaces one static message; reloading the plugin is the retry.
//!
//! ## Independent Filters
//!
//! Category and search filters do not compose: whichever ran most recently
//! produces the visible view, and an empty search query produces no view at
//! all. Both behaviors are deliberate and covered by tests.
//!
//! ## Immutable View Models
//!
//! UI rendering uses computed view models for a clear separation between
//! state and display, keeping windowing and match highlighting testable.
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod menu;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, FilterState, InputMode, SearchFocus};
pub use domain::{Category, FoodItem, Result, SnackbarError};
pub use menu::MenuPhase;
pub use ui::Theme;

use std::collections::BTreeMap;

/// Default menu endpoint, matching the local development server.
pub const DEFAULT_MENU_URL: &str = "http://localhost:9000";

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/snackbar.wasm" {
///     menu_url "http://localhost:9000"
///     theme "catppuccin-latte"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the menu endpoint.
    ///
    /// The plugin issues a single GET against this URL expecting a JSON
    /// array of food items. Default: [`DEFAULT_MENU_URL`].
    pub menu_url: String,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for the log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu_url: DEFAULT_MENU_URL.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. This function extracts typed values with
    /// fallback defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `menu_url`: trimmed string, trailing `/` stripped; empty values fall
    ///   back to the default
    /// - `theme`: String → `Option<String>`
    /// - `theme_file`: String → `Option<String>`
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use snackbar::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("menu_url".to_string(), "http://localhost:9000/".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.menu_url, "http://localhost:9000");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let menu_url = config
            .get("menu_url")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_MENU_URL.to_string());

        Self {
            menu_url,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Creates a new `AppState` in the `Idle` phase with the resolved theme
/// (from file, name, or default) and the configured menu endpoint. The fetch
/// itself is issued later, once Zellij grants web access.
///
/// # Example
///
/// ```rust
/// use snackbar::{initialize, Config, MenuPhase};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.phase, MenuPhase::Idle);
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing snackbar plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(config.menu_url.clone(), theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_when_map_is_empty() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.menu_url, DEFAULT_MENU_URL);
        assert!(config.theme_name.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn config_normalizes_menu_url() {
        let mut map = BTreeMap::new();
        map.insert("menu_url".to_string(), "  http://10.0.0.2:9000/  ".to_string());
        assert_eq!(Config::from_zellij(&map).menu_url, "http://10.0.0.2:9000");

        map.insert("menu_url".to_string(), "   ".to_string());
        assert_eq!(Config::from_zellij(&map).menu_url, DEFAULT_MENU_URL);
    }

    #[test]
    fn initialize_resolves_named_theme_with_fallback() {
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-latte");

        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }

    #[test]
    fn initialize_prefers_theme_file_over_name() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut theme = Theme::from_name("catppuccin-latte").unwrap();
        theme.name = "custom".to_string();
        file.write_all(toml::to_string(&theme).unwrap().as_bytes()).unwrap();

        let config = Config {
            theme_name: Some("catppuccin-mocha".to_string()),
            theme_file: Some(file.path().to_string_lossy().to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme.name, "custom");
    }
}
