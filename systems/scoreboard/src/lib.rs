#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that records final scores off the world's event stream.
//!
//! The scoreboard owns the leaderboard state: an ordered list of the most
//! recent final scores capped at [`HISTORY_CAPACITY`] entries, plus a
//! separately tracked high score that only moves when strictly exceeded.
//! Adapters persist the [`ScoreHistory`] whenever [`Scoreboard::handle`]
//! reports that a result was recorded.

use crown_rush_core::Event;
use serde::{Deserialize, Serialize};

/// Maximum number of historical scores retained on the leaderboard.
pub const HISTORY_CAPACITY: usize = 10;

/// Ordered record of recent final scores plus the all-time high score.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreHistory {
    recent: Vec<u32>,
    high_score: u32,
}

impl ScoreHistory {
    /// Rebuilds a history from persisted parts, enforcing the capacity cap.
    ///
    /// Oversized lists keep their newest entries. A high score smaller than
    /// the stored scores is raised to match, so a truncated or stale scalar
    /// never understates the leaderboard.
    #[must_use]
    pub fn from_parts(recent: Vec<u32>, high_score: u32) -> Self {
        let mut recent = recent;
        if recent.len() > HISTORY_CAPACITY {
            let _ = recent.drain(..recent.len() - HISTORY_CAPACITY);
        }
        let observed_max = recent.iter().copied().max().unwrap_or(0);
        Self {
            high_score: high_score.max(observed_max),
            recent,
        }
    }

    /// Appends a final score, dropping the oldest entry past capacity.
    ///
    /// Returns `true` when the high score was strictly exceeded.
    pub fn record(&mut self, score: u32) -> bool {
        self.recent.push(score);
        if self.recent.len() > HISTORY_CAPACITY {
            let _ = self.recent.remove(0);
        }

        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }

    /// Recent final scores in the order they were recorded.
    #[must_use]
    pub fn recent(&self) -> &[u32] {
        &self.recent
    }

    /// Highest score ever recorded.
    #[must_use]
    pub const fn high_score(&self) -> u32 {
        self.high_score
    }
}

/// Pure system that folds `GameEnded` events into the score history.
#[derive(Clone, Debug, Default)]
pub struct Scoreboard {
    history: ScoreHistory,
}

impl Scoreboard {
    /// Creates a scoreboard seeded with a previously persisted history.
    #[must_use]
    pub fn new(history: ScoreHistory) -> Self {
        Self { history }
    }

    /// Consumes world events, recording every completed session.
    ///
    /// Returns `true` when at least one result was recorded and the backing
    /// store should be refreshed.
    pub fn handle(&mut self, events: &[Event]) -> bool {
        let mut recorded = false;
        for event in events {
            if let Event::GameEnded { score, .. } = event {
                let _ = self.history.record(*score);
                recorded = true;
            }
        }
        recorded
    }

    /// Read-only access to the leaderboard state.
    #[must_use]
    pub fn history(&self) -> &ScoreHistory {
        &self.history
    }
}
