//! Owned per-match handle.
//!
//! A `Match` pairs one engine with one state. Every submission takes
//! `&mut self`, so a single match can never see two operations interleaved;
//! independent matches share nothing and may live on different threads.

use tracing::debug_span;

use super::game::{GeneralsBuilder, GeneralsGame};
use super::setup::random_deployment;
use crate::board::PieceId;
use crate::core::{GameRng, GameState, Intent, PlayerId, Tile};
use crate::rules::{GameResult, Outcome, RulesEngine};
use crate::view::PlayerView;

/// One match of Game of the Generals.
#[derive(Clone, Debug)]
pub struct Match {
    game: GeneralsGame,
    state: GameState,
}

impl Match {
    /// Start a match from a configured builder.
    #[must_use]
    pub fn new(builder: GeneralsBuilder) -> Self {
        let (game, state) = builder.build();
        Self { game, state }
    }

    /// Start a match with the classic army, player one moving first.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(GeneralsBuilder::new())
    }

    /// The rules engine.
    #[must_use]
    pub fn game(&self) -> &GeneralsGame {
        &self.game
    }

    /// The canonical state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Submit any intent for `player`.
    pub fn submit(&mut self, player: PlayerId, intent: &Intent) -> Outcome {
        let _span = debug_span!("submit", %player).entered();
        self.game.apply_intent(&mut self.state, player, intent)
    }

    /// Place a piece on a tile of `player`'s frame, or withdraw it with `None`.
    pub fn submit_placement(
        &mut self,
        player: PlayerId,
        piece: PieceId,
        tile: Option<Tile>,
    ) -> Outcome {
        self.submit(player, &Intent::Place { piece, tile })
    }

    /// Signal readiness.
    pub fn submit_ready(&mut self, player: PlayerId) -> Outcome {
        self.submit(player, &Intent::Ready)
    }

    /// Move a piece to a tile of `player`'s frame.
    pub fn submit_move(&mut self, player: PlayerId, piece: PieceId, tile: Option<Tile>) -> Outcome {
        self.submit(player, &Intent::Move { piece, tile })
    }

    /// Deploy `player`'s remaining pieces at random; returns how many were placed.
    pub fn deploy_randomly(&mut self, player: PlayerId, rng: &mut GameRng) -> usize {
        random_deployment(&self.state, player, rng)
            .iter()
            .filter(|intent| self.submit(player, intent).is_applied())
            .count()
    }

    /// Intents `player` may currently submit.
    #[must_use]
    pub fn legal_intents(&self, player: PlayerId) -> Vec<Intent> {
        self.game.legal_intents(&self.state, player)
    }

    /// `player`'s view of the match.
    #[must_use]
    pub fn view(&self, player: PlayerId) -> PlayerView {
        self.game.view(&self.state, player)
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.game.is_terminal(&self.state)
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_game_over()
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;
    use crate::rules::Illegal;

    #[test]
    fn test_match_lifecycle() {
        let mut game = Match::classic();
        let mut rng = GameRng::new(3);

        assert_eq!(game.deploy_randomly(PlayerId::One, &mut rng), 21);
        assert_eq!(game.deploy_randomly(PlayerId::Two, &mut rng), 21);
        assert!(game.submit_ready(PlayerId::One).is_applied());
        assert!(!game.view(PlayerId::Two).my_turn);
        assert!(game.view(PlayerId::Two).opponent_ready);
        assert!(game.submit_ready(PlayerId::Two).is_applied());

        assert_eq!(game.state().phase(), Phase::Play);
        assert!(!game.legal_intents(PlayerId::One).is_empty());
        assert!(game.legal_intents(PlayerId::Two).is_empty());
        assert_eq!(game.result(), None);
    }

    #[test]
    fn test_submissions_are_player_tagged() {
        let mut game = Match::classic();

        let placed = game.submit_placement(PlayerId::Two, PieceId(0), Some(Tile::new(5, 0)));
        assert!(placed.is_applied());
        assert_eq!(
            game.submit_move(PlayerId::Two, PieceId(0), Some(Tile::new(4, 0))),
            Outcome::RejectedIllegal(Illegal::WrongPhase { expected: Phase::Play })
        );
        // Player two's (5, 0) is canonical (2, 8).
        assert_eq!(
            game.state().board().piece_at(Tile::new(2, 8)).map(|piece| piece.owner),
            Some(PlayerId::Two)
        );
    }
}
