//! Session state: value types, modal overlays and the `AppState` controller.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use modal::Modal;
pub use types::{
    ALL_BRANDS, ColorOption, FilterState, Focus, RecordId, SelectionChange, VehicleRecord,
};
