//! Match state.
//!
//! `GameState` is everything one match knows: the board with both armies,
//! readiness, whose turn it is, elimination history, the last observed
//! enemy move per player, and the victory tracker.
//!
//! Fields are read through accessors. Mutators are crate-private: only the
//! rules change a match, one intent at a time.
//!
//! Uses `im` persistent vectors for the elimination histories so the state
//! stays cheap to clone for pure transitions.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::config::ArmyConfig;
use super::player::{PlayerId, PlayerMap};
use crate::board::{Board, PieceId};
use crate::rules::{GameResult, VictoryTracker};

/// Match phase.
///
/// Derived from readiness: play begins the instant both players are ready,
/// and readiness is never withdrawn, so the transition happens once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Players place their armies on their home rows.
    Deployment,
    /// Players alternate single-step moves.
    Play,
}

/// Full state of one match, in the canonical frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,

    /// Player to move. Meaningful once play has begun.
    turn: PlayerId,

    ready: PlayerMap<bool>,

    /// Identities removed from each player's own army, in elimination order.
    eliminated: PlayerMap<Vector<PieceId>>,

    /// Most recent enemy move, in each observer's own frame.
    last_opponent_move: PlayerMap<Option<MoveRecord>>,

    victory: VictoryTracker,

    /// Number of moves applied during play.
    moves_played: u32,
}

impl GameState {
    /// Create a fresh match: empty board, two undeployed armies.
    #[must_use]
    pub fn new(army: &ArmyConfig, first_player: PlayerId) -> Self {
        Self {
            board: Board::new(army),
            turn: first_player,
            ready: PlayerMap::with_value(false),
            eliminated: PlayerMap::with_default(),
            last_opponent_move: PlayerMap::with_value(None),
            victory: VictoryTracker::new(),
            moves_played: 0,
        }
    }

    // === Queries ===

    /// The board and both armies.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.ready.all(|ready| *ready) {
            Phase::Play
        } else {
            Phase::Deployment
        }
    }

    /// Player to move.
    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    /// Check if it is `player`'s turn.
    #[must_use]
    pub fn is_turn(&self, player: PlayerId) -> bool {
        self.turn == player
    }

    /// Check if a player has signalled readiness.
    #[must_use]
    pub fn is_ready(&self, player: PlayerId) -> bool {
        self.ready[player]
    }

    /// Identities of `player`'s pieces that have been eliminated, in order.
    #[must_use]
    pub fn eliminated(&self, player: PlayerId) -> &Vector<PieceId> {
        &self.eliminated[player]
    }

    /// The last enemy move `player` has observed, in `player`'s frame.
    #[must_use]
    pub fn last_opponent_move(&self, player: PlayerId) -> Option<MoveRecord> {
        self.last_opponent_move[player]
    }

    /// Victory tracker.
    #[must_use]
    pub fn victory(&self) -> &VictoryTracker {
        &self.victory
    }

    /// Check if the game-over latch is set.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.victory.is_game_over()
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.victory.result()
    }

    /// Number of moves applied during play.
    #[must_use]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    // === Mutation (rules only) ===

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn victory_mut(&mut self) -> &mut VictoryTracker {
        &mut self.victory
    }

    pub(crate) fn set_ready(&mut self, player: PlayerId) {
        self.ready[player] = true;
    }

    pub(crate) fn record_elimination(&mut self, owner: PlayerId, piece: PieceId) {
        self.eliminated[owner].push_back(piece);
    }

    pub(crate) fn observe_move(&mut self, observer: PlayerId, record: Option<MoveRecord>) {
        self.last_opponent_move[observer] = record;
    }

    pub(crate) fn pass_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    pub(crate) fn count_move(&mut self) {
        self.moves_played += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tile;

    #[test]
    fn test_new_state() {
        let state = GameState::new(&ArmyConfig::classic(), PlayerId::One);

        assert_eq!(state.phase(), Phase::Deployment);
        assert_eq!(state.turn(), PlayerId::One);
        assert!(!state.is_game_over());
        assert_eq!(state.moves_played(), 0);
        for player in PlayerId::all() {
            assert!(!state.is_ready(player));
            assert!(state.eliminated(player).is_empty());
            assert_eq!(state.last_opponent_move(player), None);
        }
    }

    #[test]
    fn test_phase_follows_readiness() {
        let mut state = GameState::new(&ArmyConfig::classic(), PlayerId::One);

        state.set_ready(PlayerId::Two);
        assert_eq!(state.phase(), Phase::Deployment);

        state.set_ready(PlayerId::One);
        assert_eq!(state.phase(), Phase::Play);
    }

    #[test]
    fn test_elimination_history_is_ordered() {
        let mut state = GameState::new(&ArmyConfig::classic(), PlayerId::One);
        state.record_elimination(PlayerId::Two, PieceId(4));
        state.record_elimination(PlayerId::Two, PieceId(1));

        let history: Vec<_> = state.eliminated(PlayerId::Two).iter().copied().collect();
        assert_eq!(history, vec![PieceId(4), PieceId(1)]);
        assert!(state.eliminated(PlayerId::One).is_empty());
    }

    #[test]
    fn test_pass_turn_and_observe() {
        let mut state = GameState::new(&ArmyConfig::classic(), PlayerId::Two);
        state.pass_turn();
        assert!(state.is_turn(PlayerId::One));

        let record = MoveRecord::new(Tile::new(5, 0), Tile::new(4, 0));
        state.observe_move(PlayerId::Two, Some(record));
        assert_eq!(state.last_opponent_move(PlayerId::Two), Some(record));
        state.observe_move(PlayerId::Two, None);
        assert_eq!(state.last_opponent_move(PlayerId::Two), None);
    }

    #[test]
    fn test_state_serde_round_trip() {
        let mut state = GameState::new(&ArmyConfig::classic(), PlayerId::One);
        state.board_mut().place(PlayerId::One, PieceId(3), Tile::new(6, 6)).unwrap();
        state.record_elimination(PlayerId::One, PieceId(7));

        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
