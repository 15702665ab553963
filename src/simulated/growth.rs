#![cfg(feature = "simulated-data")]

//! Simulated subscriber-growth series for the dashboard charts.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::core::ModeController;
use crate::error::Result;

/// One day of the simulated growth series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthPoint {
    /// Day the sample covers.
    pub date: NaiveDate,
    /// Subscriber count at end of day.
    pub subscribers: u64,
    /// Subscribers gained during the day.
    pub joined: u32,
    /// Subscribers lost during the day.
    pub left: u32,
}

/// Generates a deterministic per-day subscriber series.
///
/// Days are consecutive starting at `start`; each point's `subscribers`
/// equals the previous day's count plus `joined` minus `left` (floored at
/// zero). Fails with a mode assertion unless the controller is in
/// simulated mode.
pub fn subscriber_growth(
    controller: &ModeController,
    seed: u64,
    start: NaiveDate,
    days: usize,
    starting_subscribers: u64,
) -> Result<Vec<GrowthPoint>> {
    controller.assert_simulated("simulated::growth::subscriber_growth")?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut series = Vec::with_capacity(days);
    let mut subscribers = starting_subscribers;

    for offset in 0..days {
        let joined = rng.gen_range(0..250);
        let left = rng.gen_range(0..120);
        subscribers = (subscribers + joined as u64).saturating_sub(left as u64);
        series.push(GrowthPoint {
            date: start + Duration::days(offset as i64),
            subscribers,
            joined,
            left,
        });
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;
    use crate::types::Mode;
    use std::sync::Arc;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    #[test]
    fn days_are_consecutive() {
        let ctrl = ModeController::with_mode(Arc::new(MemoryStore::new()), Mode::Simulated);
        let series = subscriber_growth(&ctrl, 9, start(), 30, 10_000).unwrap();
        assert_eq!(series.len(), 30);
        for pair in series.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    #[test]
    fn counts_are_internally_consistent() {
        let ctrl = ModeController::with_mode(Arc::new(MemoryStore::new()), Mode::Simulated);
        let series = subscriber_growth(&ctrl, 9, start(), 60, 10_000).unwrap();
        let mut prev = 10_000u64;
        for point in series {
            let expected = (prev + point.joined as u64).saturating_sub(point.left as u64);
            assert_eq!(point.subscribers, expected);
            prev = point.subscribers;
        }
    }

    #[test]
    fn refuses_to_run_in_live_mode() {
        let ctrl = ModeController::with_mode(Arc::new(MemoryStore::new()), Mode::Live);
        assert!(subscriber_growth(&ctrl, 9, start(), 5, 100).is_err());
    }
}
