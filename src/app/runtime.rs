use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

use crate::store::{DataSource, load_store};
use crate::ui::{render_load_error, ui};

use super::init::{Launch, initial_state, open_session_store};
use super::terminal::{restore_terminal, setup_terminal};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the showroom TUI end-to-end: load the catalog, set up the terminal, drive the
/// event loop and restore the terminal on exit.
///
/// Inputs:
/// - `launch`: Effective settings and initial filter values
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - The catalog is fetched exactly once. A load failure is not an `Err`: the blocking
///   "inventory unavailable" screen is shown until the user quits.
/// - `SHOWROOM_TEST_HEADLESS=1` skips raw mode, drawing and the input thread.
pub async fn run(launch: Launch) -> Result<()> {
    let headless = std::env::var("SHOWROOM_TEST_HEADLESS").ok().as_deref() == Some("1");
    let source = DataSource::parse(&launch.settings.data_source);
    tracing::info!(source = %source, "[Runtime] Loading catalog");
    let loaded = load_store(&source).await;

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<CEvent>();
    let event_thread_cancelled = Arc::new(AtomicBool::new(false));
    spawn_event_thread(headless, event_tx.clone(), event_thread_cancelled.clone());

    match loaded {
        Ok(store) => {
            tracing::info!(records = store.len(), "[Runtime] Catalog loaded");
            let kv = open_session_store(launch.settings.session_store);
            let mut app = initial_state(store, &launch, kv);
            loop {
                if let Some(t) = terminal.as_mut() {
                    let _ = t.draw(|f| ui(f, &mut app));
                }
                let Some(ev) = event_rx.recv().await else {
                    break;
                };
                if crate::events::handle_event(ev, &mut app) {
                    break;
                }
            }
        }
        Err(err) => {
            tracing::error!(source = %source, error = %err, "[Runtime] Catalog load failed");
            let message = err.to_string();
            loop {
                if let Some(t) = terminal.as_mut() {
                    let _ = t.draw(|f| render_load_error(f, &message));
                }
                let Some(ev) = event_rx.recv().await else {
                    break;
                };
                if is_quit_event(&ev) {
                    break;
                }
            }
        }
    }

    event_thread_cancelled.store(true, Ordering::Relaxed);
    drop(event_tx);
    if !headless {
        restore_terminal()?;
    }
    tracing::debug!("[Runtime] Main loop exited");
    Ok(())
}

/// `q`, Esc or Ctrl-C.
fn is_quit_event(ev: &CEvent) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    ke.kind == KeyEventKind::Press
        && (matches!(ke.code, KeyCode::Char('q') | KeyCode::Esc)
            || (ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL)))
}

/// What: Spawn the blocking thread that forwards terminal events.
///
/// Inputs:
/// - `headless`: When `true`, skip spawning the thread
/// - `event_tx`: Channel sender for terminal events
/// - `cancelled`: Flag checked between polls so the thread exits with the loop
///
/// Details:
/// - Polls with a 50ms timeout; exits once cancelled or the receiver is dropped.
fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    // transient read errors
                    Err(_) => {}
                },
                Ok(false) | Err(_) => {}
            }
        }
    });
}
