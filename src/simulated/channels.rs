#![cfg(feature = "simulated-data")]

//! Simulated channel directory for the dashboard's channel list.

use fake::faker::company::en::CompanyName;
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::core::{ChannelId, ModeController};
use crate::error::Result;

/// One row of the simulated channel directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSummary {
    /// Channel identifier.
    pub id: ChannelId,
    /// Public `@username` of the channel.
    pub username: String,
    /// Display title.
    pub title: String,
    /// Current subscriber count.
    pub subscribers: u64,
    /// Average daily post reach.
    pub daily_reach: u64,
    /// Citation index (how often other channels reference this one).
    pub citation_index: f64,
}

/// Generates a deterministic directory of demo channels.
///
/// The same `seed` and `count` always produce the same rows. Fails with a
/// mode assertion unless the controller is in simulated mode.
pub fn channel_directory(
    controller: &ModeController,
    seed: u64,
    count: usize,
) -> Result<Vec<ChannelSummary>> {
    controller.assert_simulated("simulated::channels::channel_directory")?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = Vec::with_capacity(count);
    for i in 0..count {
        let title: String = CompanyName().fake_with_rng(&mut rng);
        let username = format!(
            "{}_{}",
            title
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_lowercase(),
            i
        );
        let subscribers = rng.gen_range(1_000..=500_000);
        // Reach is a slice of the audience, never more than the audience
        let daily_reach = (subscribers as f64 * rng.gen_range(0.15..0.65)) as u64;
        rows.push(ChannelSummary {
            id: 1_000_000 + i as ChannelId,
            username,
            title,
            subscribers,
            daily_reach,
            citation_index: (rng.gen_range(1.0..800.0_f64) * 10.0).round() / 10.0,
        });
    }
    Ok(rows)
}
