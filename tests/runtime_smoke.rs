#![cfg(test)]
// End-to-end runtime smoke test (headless)
// - Starts nook::app::run() in the background under a temp HOME.
// - Runs with NOOK_TEST_HEADLESS=1 to bypass raw TTY setup/restore.
// - Waits briefly to allow initialization, the registry scan, and a tick.
// - Asserts the task does not panic. If it finishes, it must return Ok(()).
// - If still running after the wait, aborts the task and asserts the join
//   was a clean cancel.

use std::time::Duration;

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_initializes_and_runs_without_panic() {
    let home = tempfile::tempdir().unwrap();
    unsafe {
        std::env::set_var("NOOK_TEST_HEADLESS", "1");
        std::env::set_var("HOME", home.path());
    }

    let handle = tokio::spawn(async { nook::app::run().await });

    // Allow a minimal window for initialization: prefs load, worker
    // spawns, the registry result, and at least one clock tick.
    tokio::time::sleep(Duration::from_millis(150)).await;

    if handle.is_finished() {
        match handle.await {
            Ok(run_result) => {
                if let Err(e) = run_result {
                    panic!("app::run returned error early: {e:?}");
                }
                return;
            }
            Err(join_err) => {
                panic!("app::run task panicked: {join_err}");
            }
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
            assert!(join_err.is_cancelled(), "expected clean cancel: {join_err}");
        }
    }
}
