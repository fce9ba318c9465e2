//! Domain layer for the Snackbar plugin.
//!
//! This module contains the core domain types and business logic for the plugin,
//! independent of Zellij-specific APIs or infrastructure concerns. It follows
//! domain-driven design principles by keeping business rules isolated from external
//! dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`food`]: Food item model and category tags
//!
//! # Examples
//!
//! ```
//! use snackbar::domain::{Category, FoodItem, Result};
//!
//! fn pancake() -> Result<FoodItem> {
//!     Ok(FoodItem::new("Pancake".to_string(), "Breakfast".to_string()))
//! }
//! ```

pub mod error;
pub mod food;

pub use error::{Result, SnackbarError, FETCH_FAILURE_MESSAGE};
pub use food::{fetched_ago, Category, FoodItem};
