//! Configuration and look of showroom: settings file, config/log paths and
//! the colour palette.

/// Path resolution for config directories.
mod paths;
/// Settings loading and parsing.
mod settings;
/// Theme and settings type definitions.
mod types;

pub use paths::{config_dir, logs_dir, session_path};
pub use settings::{parse_settings, settings};
pub use types::{DEFAULT_PAGE_SIZE, DEFAULT_SHOWCASE_BRANDS, SessionStoreKind, Settings, Theme};

/// Palette used by the renderer.
#[must_use]
pub fn theme() -> Theme {
    Theme::default()
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// Serializes tests that mutate `HOME`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
