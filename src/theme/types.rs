use std::num::NonZeroUsize;

use ratatui::style::Color;

/// Colour palette used by every pane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Darkest background shade for deep contrast areas.
    pub crust: Color,
    /// Subtle surface color for component backgrounds.
    pub surface1: Color,
    /// Border color.
    pub surface2: Color,
    /// Muted text and titles.
    pub overlay1: Color,
    /// Secondary muted text.
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Dimmed foreground text.
    pub subtext0: Color,
    /// Focus accent.
    pub sapphire: Color,
    /// Price and headline accent.
    pub mauve: Color,
    /// Healthy stock.
    pub green: Color,
    /// Low stock and notices.
    pub yellow: Color,
    /// Errors.
    pub red: Color,
    /// Highlight background for the selected card.
    pub lavender: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            overlay2: Color::Rgb(0x93, 0x99, 0xb2),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

/// Where the recently viewed queue is kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStoreKind {
    /// `session.json` under the config directory; survives restarts.
    File,
    /// Process memory only; the queue ends with the session.
    #[default]
    Memory,
}

impl SessionStoreKind {
    /// Parse a settings value (`file` / `memory`), case-insensitive.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" | "disk" => Some(Self::File),
            "memory" | "mem" | "none" => Some(Self::Memory),
            _ => None,
        }
    }
}

/// User-configurable settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Cards per inventory page.
    pub page_size: NonZeroUsize,
    /// Catalog location (file path or URL).
    pub data_source: String,
    /// Whether editing the search term jumps back to page 1.
    pub reset_page_on_search: bool,
    /// Backing store for the recently viewed queue.
    pub session_store: SessionStoreKind,
    /// Brands listed in the showcase overlay, in display order. Brands without stock
    /// are still listed and open the "coming soon" notice.
    pub showcase_brands: Vec<String>,
}

/// Showcase line-up when `showcase_brands` is not configured.
pub const DEFAULT_SHOWCASE_BRANDS: [&str; 7] = [
    "Bentley",
    "Mercedes-Benz",
    "Porsche",
    "Ferrari",
    "Rolls-Royce",
    "Range Rover",
    "BMW",
];

/// Cards per page when nothing is configured.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(n) => n,
    None => NonZeroUsize::MIN,
};

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            data_source: "cars.json".to_string(),
            reset_page_on_search: true,
            session_store: SessionStoreKind::default(),
            showcase_brands: DEFAULT_SHOWCASE_BRANDS
                .iter()
                .map(|b| (*b).to_string())
                .collect(),
        }
    }
}
