use std::sync::Arc;

use chrono::NaiveDate;

use telepulse_datasource::simulated::{channels, growth, posts};
use telepulse_datasource::storage::memory::MemoryStore;
use telepulse_datasource::{DsError, Mode, ModeController};

fn controller(mode: Mode) -> ModeController {
    ModeController::with_mode(Arc::new(MemoryStore::new()), mode)
}

#[tokio::test]
async fn datasets_load_through_the_guarded_loader() {
    let ctrl = controller(Mode::Simulated);

    let loader_ctrl = ctrl.clone();
    let directory = ctrl
        .load_simulated("channel_directory", || async move {
            channels::channel_directory(&loader_ctrl, 42, 8)
        })
        .await
        .unwrap()
        .expect("simulated mode loads the dataset");

    assert_eq!(directory.len(), 8);
}

#[tokio::test]
async fn loader_is_skipped_in_live_mode() {
    let ctrl = controller(Mode::Live);

    let loader_ctrl = ctrl.clone();
    let directory = ctrl
        .load_simulated("channel_directory", || async move {
            channels::channel_directory(&loader_ctrl, 42, 8)
        })
        .await
        .unwrap();

    assert!(directory.is_none());
}

#[tokio::test]
async fn datasets_assert_simulated_mode_themselves() {
    // Reaching a generator with a live controller is a programming error
    // and must fail loudly, not fabricate data.
    let ctrl = controller(Mode::Live);

    assert!(matches!(
        channels::channel_directory(&ctrl, 1, 3),
        Err(DsError::ModeAssertion { .. })
    ));
    assert!(matches!(
        growth::subscriber_growth(&ctrl, 1, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), 3, 100),
        Err(DsError::ModeAssertion { .. })
    ));
    assert!(matches!(
        posts::post_history(&ctrl, 1, 1, 3),
        Err(DsError::ModeAssertion { .. })
    ));
}

#[tokio::test]
async fn same_seed_same_data_across_controllers() {
    let a = channels::channel_directory(&controller(Mode::Simulated), 99, 12).unwrap();
    let b = channels::channel_directory(&controller(Mode::Simulated), 99, 12).unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn growth_series_is_usable_for_charting() {
    let ctrl = controller(Mode::Simulated);
    let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let series = growth::subscriber_growth(&ctrl, 5, start, 90, 25_000).unwrap();

    assert_eq!(series.len(), 90);
    assert_eq!(series.first().unwrap().date, start);
    // Serializes cleanly for the dashboard API shim
    let json = serde_json::to_string(&series).unwrap();
    assert!(json.contains("\"subscribers\""));
}
