use std::fs;
use std::num::NonZeroUsize;

use crate::theme::paths::resolve_settings_config_path;
use crate::theme::types::{SessionStoreKind, Settings};
use crate::util::config::{parse_bool, parse_key_value, skip_comment_or_empty};

/// What: Load user settings from `settings.conf` under HOME/XDG.
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when the file is missing,
///   and keeps defaults for any key that is absent or invalid.
#[must_use]
pub fn settings() -> Settings {
    let mut out = Settings::default();
    let Some(path) = resolve_settings_config_path() else {
        tracing::debug!("[Config] No settings.conf found; using defaults");
        return out;
    };
    match fs::read_to_string(&path) {
        Ok(content) => {
            parse_settings(&content, &mut out);
            tracing::debug!(path = %path.display(), "[Config] Settings loaded");
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "[Config] Failed to read settings");
        }
    }
    out
}

/// What: Apply `key = value` lines from `content` onto `settings`.
///
/// Details:
/// - Unknown keys and unparsable values are logged and ignored.
/// - `page_size = 0` is rejected; the page size is always at least one.
/// - `showcase_brands` is a comma-separated list; blank entries are dropped.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        match key.as_str() {
            "page_size" | "items_per_page" => {
                match val.parse::<usize>().ok().and_then(NonZeroUsize::new) {
                    Some(n) => settings.page_size = n,
                    None => tracing::warn!(value = %val, "[Config] Invalid page_size"),
                }
            }
            "data_source" | "catalog" => {
                if !val.is_empty() {
                    settings.data_source = val;
                }
            }
            "reset_page_on_search" => match parse_bool(&val) {
                Some(b) => settings.reset_page_on_search = b,
                None => tracing::warn!(value = %val, "[Config] Invalid reset_page_on_search"),
            },
            "session_store" => match SessionStoreKind::from_config_key(&val) {
                Some(kind) => settings.session_store = kind,
                None => tracing::warn!(value = %val, "[Config] Invalid session_store"),
            },
            "showcase_brands" | "showcase" => {
                let brands: Vec<String> = val
                    .split(',')
                    .map(str::trim)
                    .filter(|b| !b.is_empty())
                    .map(str::to_string)
                    .collect();
                if brands.is_empty() {
                    tracing::warn!(value = %val, "[Config] Empty showcase_brands; keeping defaults");
                } else {
                    settings.showcase_brands = brands;
                }
            }
            other => tracing::debug!(key = other, "[Config] Ignoring unknown setting"),
        }
    }
}
