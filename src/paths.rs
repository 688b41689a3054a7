//! Platform-specific filesystem path helpers.

use std::path::PathBuf;

/// Path to the agidash debug log file.
///
/// This is located in the OS temp directory.
#[must_use]
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("agidash.log")
}

/// Locate the user's home directory without pulling in external crates.
///
/// Unix-family only, like the `xdg-open`/`open` browser hand-off.
#[must_use]
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Directory where agidash keeps its configuration file.
///
/// Honors `XDG_CONFIG_HOME` when set, otherwise `~/.config/agidash`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME") {
        return PathBuf::from(dir).join("agidash");
    }

    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("agidash")
}
