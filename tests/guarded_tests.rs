use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use assert_matches::assert_matches;
use telepulse_datasource::storage::memory::MemoryStore;
use telepulse_datasource::{DsError, GuardedOutcome, Mode, ModeController};

fn controller(mode: Mode) -> ModeController {
    ModeController::with_mode(Arc::new(MemoryStore::new()), mode)
}

#[tokio::test]
async fn run_guarded_routes_to_simulated() {
    let ctrl = controller(Mode::Simulated);
    let live_calls = Arc::new(AtomicUsize::new(0));

    let counter = live_calls.clone();
    let value = ctrl
        .run_guarded(
            || async { Ok("simulated") },
            || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok("live")
            },
        )
        .await
        .unwrap();

    assert_eq!(value, "simulated");
    assert_eq!(live_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn run_guarded_routes_to_live() {
    let ctrl = controller(Mode::Live);
    let sim_calls = Arc::new(AtomicUsize::new(0));

    let counter = sim_calls.clone();
    let value = ctrl
        .run_guarded(
            || async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok("simulated")
            },
            || async { Ok("live") },
        )
        .await
        .unwrap();

    assert_eq!(value, "live");
    assert_eq!(sim_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn mode_is_read_at_call_time_not_resolution_time() {
    let ctrl = controller(Mode::Simulated);

    let flipper = ctrl.clone();
    let value = ctrl
        .run_guarded(
            || async move {
                // Switch mid-flight; the already-selected path completes.
                flipper.set_mode(Mode::Live);
                tokio::task::yield_now().await;
                Ok("simulated")
            },
            || async { Ok("live") },
        )
        .await
        .unwrap();

    assert_eq!(value, "simulated");
    assert_eq!(ctrl.mode(), Mode::Live);
}

#[tokio::test]
async fn run_simulated_skips_in_live_mode() {
    let ctrl = controller(Mode::Live);
    let sim_calls = Arc::new(AtomicUsize::new(0));

    let counter = sim_calls.clone();
    let outcome: GuardedOutcome<u32> = ctrl
        .run_simulated(|| async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(7)
        })
        .await
        .unwrap();

    assert!(outcome.is_skipped());
    assert_eq!(outcome.completed(), None);
    assert_eq!(sim_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn run_simulated_completes_in_simulated_mode() {
    let ctrl = controller(Mode::Simulated);
    let outcome = ctrl.run_simulated(|| async { Ok(7u32) }).await.unwrap();
    assert_eq!(outcome, GuardedOutcome::Completed(7));
}

#[tokio::test]
async fn assert_simulated_carries_context() {
    let ctrl = controller(Mode::Live);
    let err = ctrl.assert_simulated("channel_overview").unwrap_err();
    assert_matches!(
        err,
        DsError::ModeAssertion { ref context, mode } if context == "channel_overview" && mode == Mode::Live
    );

    ctrl.set_mode(Mode::Simulated);
    assert!(ctrl.assert_simulated("channel_overview").is_ok());
}

#[tokio::test]
async fn load_simulated_returns_none_in_live_mode_without_running_loader() {
    let ctrl = controller(Mode::Live);
    let loader_calls = Arc::new(AtomicUsize::new(0));

    let counter = loader_calls.clone();
    let result: Option<Vec<u8>> = ctrl
        .load_simulated("demo_payload", || async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(vec![1, 2, 3])
        })
        .await
        .unwrap();

    assert_eq!(result, None);
    assert_eq!(loader_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn load_simulated_returns_loader_value_in_simulated_mode() {
    let ctrl = controller(Mode::Simulated);
    let result = ctrl
        .load_simulated("demo_payload", || async { Ok(vec![1u8, 2, 3]) })
        .await
        .unwrap();
    assert_eq!(result, Some(vec![1, 2, 3]));
}

#[tokio::test]
async fn load_simulated_propagates_loader_errors_unchanged() {
    let ctrl = controller(Mode::Simulated);
    let result: telepulse_datasource::DsResult<Option<u32>> = ctrl
        .load_simulated("demo_payload", || async {
            Err(DsError::invalid_input("malformed dataset"))
        })
        .await;

    assert_matches!(
        result,
        Err(DsError::InvalidInput(ref msg)) if msg == "malformed dataset"
    );
}
