#![cfg(test)]
// End-to-end runtime smoke test (headless)
// - Starts showroom::app::run in the background against a temporary catalog.
// - Runs with SHOWROOM_TEST_HEADLESS=1 to bypass raw TTY setup/restore.
// - Asserts the task does not panic. If it finishes, it must return Ok(()).
// - If still running after the wait, aborts the task and asserts the join was a clean cancel.

use std::io::Write;
use std::time::Duration;

use showroom::app::Launch;
use showroom::theme::{SessionStoreKind, Settings};

async fn run_briefly(launch: Launch) {
    let handle = tokio::spawn(async move { showroom::app::run(launch).await });
    tokio::time::sleep(Duration::from_millis(50)).await;

    if handle.is_finished() {
        match handle.await {
            Ok(run_result) => {
                if let Err(e) = run_result {
                    panic!("app::run returned error early: {e:?}");
                }
                return;
            }
            Err(join_err) => panic!("app::run task panicked: {join_err}"),
        }
    }

    handle.abort();
    match handle.await {
        Ok(run_result) => {
            if let Err(e) = run_result {
                panic!("app::run completed with error on abort race: {e:?}");
            }
        }
        Err(join_err) => {
            assert!(
                join_err.is_cancelled(),
                "app::run join error should be cancellation, got: {join_err}"
            );
        }
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_initializes_and_runs_without_panic() {
    unsafe {
        std::env::set_var("SHOWROOM_TEST_HEADLESS", "1");
    }
    let mut catalog = tempfile::NamedTempFile::new().expect("temp file");
    catalog
        .write_all(br#"[{"id": 1, "name": "M4", "brand": "BMW", "price": "$84,000"}]"#)
        .expect("write catalog");

    let launch = Launch {
        settings: Settings {
            data_source: catalog.path().display().to_string(),
            session_store: SessionStoreKind::Memory,
            ..Settings::default()
        },
        ..Launch::default()
    };
    run_briefly(launch).await;
}

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_survives_load_failure() {
    unsafe {
        std::env::set_var("SHOWROOM_TEST_HEADLESS", "1");
    }
    let launch = Launch {
        settings: Settings {
            data_source: "/nonexistent/showroom/cars.json".to_string(),
            session_store: SessionStoreKind::Memory,
            ..Settings::default()
        },
        ..Launch::default()
    };
    run_briefly(launch).await;
}
