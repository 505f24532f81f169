//! Rules engine trait.
//!
//! The rules are expressed as a transition function from
//! `(state, player, intent)` to `(state, outcome)`:
//! - What intents are legal
//! - How intents modify state
//! - Win conditions

use serde::{Deserialize, Serialize};

use super::outcome::Outcome;
use super::victory::VictoryCause;
use crate::core::{ArmyConfig, GameState, Intent, PlayerId};

/// Result of a completed game.
///
/// Every finished match has exactly one winner: the only way two pieces
/// leave the board together is a draw between equal ranks, and the two Flags
/// never draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    /// The winning player.
    pub winner: PlayerId,
    /// How the game was won.
    pub cause: VictoryCause,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `transition` must not touch its input state; rejected intents return
///   the state unchanged
/// - `legal_intents`: return empty if the player can't act
/// - `is_terminal`: return None if the game continues
pub trait RulesEngine {
    /// Get the army configuration.
    fn config(&self) -> &ArmyConfig;

    /// Apply an intent to a copy of `state`.
    ///
    /// Returns the successor state and what happened. When the outcome is a
    /// rejection, the returned state equals the input.
    fn transition(
        &self,
        state: &GameState,
        player: PlayerId,
        intent: &Intent,
    ) -> (GameState, Outcome);

    /// Enumerate every intent that would currently be applied for a player.
    fn legal_intents(&self, state: &GameState, player: PlayerId) -> Vec<Intent>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.result()
    }

    // === Convenience Methods ===

    /// Apply an intent in place.
    ///
    /// The state is replaced only when the intent is applied, so a rejected
    /// intent never leaves a partial mutation behind.
    fn apply_intent(&self, state: &mut GameState, player: PlayerId, intent: &Intent) -> Outcome {
        let (next, outcome) = self.transition(state, player, intent);
        if outcome.is_applied() {
            *state = next;
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult {
            winner: PlayerId::Two,
            cause: VictoryCause::FlagRush,
        };
        assert!(!result.is_winner(PlayerId::One));
        assert!(result.is_winner(PlayerId::Two));
    }
}
