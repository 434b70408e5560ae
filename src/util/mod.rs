//! Small helpers shared by the renderer, CLI and config loader.

pub mod config;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Truncate `s` so it occupies at most `max` terminal columns.
///
/// Inputs:
/// - `s`: Text to fit
/// - `max`: Column budget
///
/// Output:
/// - `s` unchanged if it fits, otherwise a prefix followed by `…`.
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let budget = max - 1;
    let mut used = 0usize;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Current local time formatted for log lines ("YYYY-MM-DD-T HH:MM:SS").
#[must_use]
pub fn log_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string()
}
