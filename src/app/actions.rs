//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or system events.
//! Actions bridge pure state transformations and effectful operations like
//! hiding the plugin pane or issuing the menu fetch.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The plugin runtime
//! executes these actions in sequence via the action processor in `main.rs`.

/// Commands representing side effects to be executed by the plugin runtime.
///
/// Actions are produced by the event handler and executed by the action
/// processor. They represent the boundary between pure state transformations
/// and effectful Zellij API calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly requests to exit the plugin (pressing 'q').
    CloseFocus,

    /// Issues the single HTTP GET against the menu endpoint.
    ///
    /// Emitted exactly once, when Zellij grants the `WebAccess` permission
    /// while the menu phase is still `Idle`. The result arrives later as a
    /// `WebRequestResult` event.
    FetchMenu {
        /// Fully qualified endpoint URL.
        url: String,
    },
}
