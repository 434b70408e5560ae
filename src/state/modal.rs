//! Modal dialog state for the UI.

use crate::logic::Comparison;
use crate::state::types::RecordId;

/// Overlay currently drawn above the inventory grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    /// No overlay.
    #[default]
    None,
    /// Detail card for one vehicle, looked up by id at render time.
    Detail {
        /// Vehicle being shown.
        id: RecordId,
    },
    /// Side-by-side table built from the compare selection.
    Compare {
        /// Resolved vehicles and spec rows.
        comparison: Comparison,
    },
    /// Brand/category dropdown.
    Brands {
        /// Highlighted entry of `AppState::brand_options`.
        cursor: usize,
    },
    /// Brand showcase; lists configured brands whether or not they have stock.
    Showcase {
        /// Highlighted entry of `Settings::showcase_brands`.
        cursor: usize,
    },
    /// Brand without stock.
    ComingSoon {
        /// Brand that was opened.
        brand: String,
    },
    /// Key reference.
    Help,
}

impl Modal {
    /// Whether an overlay is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Whether the overlay is a pick list driven by the cursor keys and Enter.
    #[must_use]
    pub const fn is_picker(&self) -> bool {
        matches!(self, Self::Brands { .. } | Self::Showcase { .. })
    }
}
