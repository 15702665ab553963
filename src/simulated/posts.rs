#![cfg(feature = "simulated-data")]

//! Simulated post statistics for the channel detail tables.

use chrono::{DateTime, Duration, TimeZone, Utc};
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::core::{ChannelId, ModeController};
use crate::error::Result;

/// Statistics of one simulated channel post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostStats {
    /// Message identifier within the channel.
    pub message_id: u64,
    /// First line of the post text.
    pub preview: String,
    /// Publication timestamp.
    pub published_at: DateTime<Utc>,
    /// View counter.
    pub views: u64,
    /// Forward counter.
    pub forwards: u32,
    /// Total reactions.
    pub reactions: u32,
}

/// Generates deterministic post statistics for a channel, newest first.
///
/// The channel id participates in the RNG seed so different channels get
/// different histories from the same seed. Fails with a mode assertion
/// unless the controller is in simulated mode.
pub fn post_history(
    controller: &ModeController,
    seed: u64,
    channel: ChannelId,
    count: usize,
) -> Result<Vec<PostStats>> {
    controller.assert_simulated("simulated::posts::post_history")?;

    let mut rng = StdRng::seed_from_u64(seed ^ channel as u64);
    // Fixed anchor keeps the series reproducible across runs
    let anchor = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();

    let mut posts = Vec::with_capacity(count);
    // Cumulative gap keeps the series strictly oldest-growing
    let mut age_hours: i64 = 0;
    for i in 0..count {
        age_hours += rng.gen_range(3..18);
        let views = rng.gen_range(500..80_000) + age_hours as u64 * 25;
        posts.push(PostStats {
            message_id: (count - i) as u64,
            preview: Sentence(3..9).fake_with_rng(&mut rng),
            published_at: anchor - Duration::hours(age_hours),
            views,
            forwards: rng.gen_range(0..(views / 50).max(1) as u32),
            reactions: rng.gen_range(0..(views / 20).max(1) as u32),
        });
    }

    Ok(posts)
}
