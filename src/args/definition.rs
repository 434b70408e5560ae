//! Command-line argument definition and processing.

use std::num::NonZeroUsize;

use clap::Parser;

use crate::app::Launch;
use crate::theme::{SessionStoreKind, Settings};

/// Showroom - browse, filter and compare a vehicle inventory from the terminal
#[derive(Parser, Debug)]
#[command(name = "showroom")]
#[command(version)]
#[command(about = "Browse, filter and compare a vehicle inventory from the terminal", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Catalog JSON file path or http(s) URL (overrides `data_source` in settings.conf)
    #[arg(short, long)]
    pub data: Option<String>,

    /// Start with this brand or category selected
    #[arg(short, long)]
    pub brand: Option<String>,

    /// Start with this search term
    #[arg(short, long)]
    pub search: Option<String>,

    /// Start on this page (1-based)
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Cards per page (overrides `page_size` in settings.conf)
    #[arg(long)]
    pub page_size: Option<NonZeroUsize>,

    /// Print the selected page to stdout and exit instead of starting the TUI
    #[arg(short, long)]
    pub list: bool,

    /// Forget the recently viewed list before starting
    #[arg(long)]
    pub clear_session: bool,

    /// Keep the recently viewed list in memory only, even with `session_store = file`
    #[arg(long)]
    pub ephemeral: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Merge parsed arguments over the loaded settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `settings`: Settings from `settings.conf` (or defaults)
///
/// Output:
/// - `Launch` with CLI values taking precedence over the config file.
///
/// Details:
/// - `--ephemeral` forces the in-memory session store.
#[must_use]
pub fn launch_from_args(args: &Args, mut settings: Settings) -> Launch {
    if let Some(data) = &args.data {
        settings.data_source.clone_from(data);
    }
    if let Some(n) = args.page_size {
        settings.page_size = n;
    }
    if args.ephemeral {
        settings.session_store = SessionStoreKind::Memory;
    }
    tracing::debug!(
        data = %settings.data_source,
        page_size = settings.page_size.get(),
        store = ?settings.session_store,
        "[Args] Effective settings"
    );
    Launch {
        settings,
        brand: args.brand.clone(),
        search: args.search.clone(),
        page: args.page,
        clear_session: args.clear_session,
    }
}
