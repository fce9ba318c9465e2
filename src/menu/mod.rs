//! Menu fetch lifecycle and decode boundary.
//!
//! This module owns the data-store side of the plugin: the observable phases
//! of the single menu fetch and the decoding of its response body into
//! validated domain items.
//!
//! # Lifecycle
//!
//! ```text
//! Idle ──permission granted──▶ Loading ──2xx + valid body──▶ Ready
//!                                  │
//!                                  └──anything else──▶ Error(message)
//! ```
//!
//! The fetch is issued exactly once, from the `Idle` phase. A failure is
//! terminal for the session: there is no retry, and no timeout is enforced,
//! so a hung request leaves the plugin in `Loading` indefinitely.
//!
//! # Modules
//!
//! - [`decode`]: Response-body validation and decoding

pub mod decode;

pub use decode::decode_menu;

/// Observable phase of the menu fetch.
///
/// Stored in `AppState` and consulted by the renderer (to show the loading
/// and error screens) and by the event handler (to guarantee the fetch is
/// issued exactly once).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MenuPhase {
    /// Plugin loaded, fetch not yet issued (waiting on the Zellij
    /// `WebAccess` permission grant).
    #[default]
    Idle,

    /// The single `web_request` has been issued; awaiting its result event.
    Loading,

    /// Response decoded successfully; the collection is populated.
    Ready,

    /// Fetch or decode failed. Terminal for the session.
    ///
    /// The string is the static user-visible message
    /// ([`crate::domain::FETCH_FAILURE_MESSAGE`]); detail lives in the
    /// trace log only.
    Error(String),
}
