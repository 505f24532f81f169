//! Victory and termination tracking.
//!
//! Each player has a tri-state victory status. A flag rush that ends next to
//! an enemy piece is only `Pending`: the opponent gets exactly one move to
//! capture the Flag before the win is confirmed. The game-over latch is set
//! by the first confirmation and never cleared; later confirmations are
//! ignored.

use serde::{Deserialize, Serialize};

use super::engine::GameResult;
use crate::core::{PlayerId, PlayerMap};

/// Per-player victory status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VictoryStatus {
    /// No claim to victory.
    #[default]
    None,
    /// Flag reached the far edge next to an enemy; confirmed unless the
    /// opponent captures it on their next move.
    Pending,
    /// The player has won.
    Confirmed,
}

/// How a match was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VictoryCause {
    /// The opposing Flag was eliminated.
    FlagCaptured,
    /// The Flag reached the far edge with no enemy beside it.
    FlagRush,
    /// The Flag reached the far edge beside an enemy and survived the
    /// opponent's reply.
    FlagRushHeld,
}

/// Per-player victory flags plus the game-over latch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VictoryTracker {
    status: PlayerMap<VictoryStatus>,
    result: Option<GameResult>,
}

impl VictoryTracker {
    /// Create a tracker with no claims.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Victory status of a player.
    #[must_use]
    pub fn status(&self, player: PlayerId) -> VictoryStatus {
        self.status[player]
    }

    /// Check if a player has won.
    #[must_use]
    pub fn is_confirmed(&self, player: PlayerId) -> bool {
        self.status[player] == VictoryStatus::Confirmed
    }

    /// Check if the game-over latch is set.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Confirm a player's victory and latch game over.
    ///
    /// Returns `false` without change if the game is already over.
    pub fn confirm(&mut self, player: PlayerId, cause: VictoryCause) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.status[player] = VictoryStatus::Confirmed;
        self.result = Some(GameResult { winner: player, cause });
        true
    }

    /// Record a challenged flag rush.
    pub fn mark_pending(&mut self, player: PlayerId) {
        if !self.is_game_over() {
            self.status[player] = VictoryStatus::Pending;
        }
    }

    /// Confirm a pending flag rush that survived the opponent's move.
    ///
    /// Returns `true` if the pending claim was promoted.
    pub fn promote_pending(&mut self, player: PlayerId) -> bool {
        self.status[player] == VictoryStatus::Pending
            && self.confirm(player, VictoryCause::FlagRushHeld)
    }
}
