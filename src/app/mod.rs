//! Showroom application runtime.
//!
//! Loads the catalog once, builds the session state and drives the TUI
//! event loop until the user quits.

/// Startup options and initial session state.
mod init;
/// Event loop and terminal input thread.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use init::{Launch, initial_state, open_session_store};
pub use runtime::run;
