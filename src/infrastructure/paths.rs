//! Path utilities for the Zellij sandbox environment.
//!
//! This module provides the plugin's data directory location in the Zellij
//! plugin sandbox, where the host filesystem is mounted under `/host`.

use std::path::PathBuf;

/// Returns the data directory used for the plugin's log files.
///
/// The directory is located at `/host/.cache/zellij/snackbar` in the Zellij
/// sandbox. `/host` points to the cwd of the last focused terminal, or the
/// folder where Zellij was started if that's not available; started from a
/// home directory terminal this resolves to `~/.cache/zellij/snackbar`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.cache/zellij").join("snackbar")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_lives_under_the_sandbox_mount() {
        let dir = get_data_dir();
        assert!(dir.starts_with("/host/.cache/zellij"));
        assert!(dir.ends_with("snackbar"));
    }
}
