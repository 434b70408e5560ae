//! Library entry for showroom exposing the catalog engine for integration tests.

pub mod app;
pub mod args;
pub mod error;
pub mod events;
pub mod logic;
pub mod state;
pub mod store;
pub mod theme;
pub mod ui;
pub mod util;
