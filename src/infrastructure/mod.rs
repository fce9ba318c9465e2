//! Infrastructure layer for platform-specific utilities.
//!
//! Currently only sandbox path handling lives here; the module exists to keep
//! Zellij-environment concerns out of the domain and application layers.

pub mod paths;

pub use paths::get_data_dir;
