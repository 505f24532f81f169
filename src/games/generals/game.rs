//! Game of the Generals rules.

use tracing::debug;

use super::{deployment, movement};
use crate::core::{home_rows, ArmyConfig, GameState, Intent, Phase, PlayerId, Tile, BOARD_COLUMNS};
use crate::rules::{Event, Illegal, Outcome, Rejection, RulesEngine};
use crate::view::{player_view, PlayerView};

/// Game of the Generals rules engine.
///
/// Holds only immutable configuration; all match data lives in
/// [`GameState`], so one engine can drive any number of matches.
#[derive(Clone, Debug)]
pub struct GeneralsGame {
    army: ArmyConfig,
    first_player: PlayerId,
}

/// Builder for creating a GeneralsGame.
#[derive(Clone, Debug)]
pub struct GeneralsBuilder {
    army: ArmyConfig,
    first_player: PlayerId,
}

impl Default for GeneralsBuilder {
    fn default() -> Self {
        Self {
            army: ArmyConfig::classic(),
            first_player: PlayerId::One,
        }
    }
}

impl GeneralsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom army composition.
    pub fn army(mut self, army: ArmyConfig) -> Self {
        self.army = army;
        self
    }

    /// Choose who moves first once play begins.
    pub fn first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Build the game and initial state.
    pub fn build(self) -> (GeneralsGame, GameState) {
        let game = GeneralsGame {
            army: self.army,
            first_player: self.first_player,
        };
        let state = game.new_state();
        (game, state)
    }
}

impl GeneralsGame {
    /// Player who moves first once play begins.
    #[must_use]
    pub fn first_player(&self) -> PlayerId {
        self.first_player
    }

    /// Create a fresh match state for this game.
    #[must_use]
    pub fn new_state(&self) -> GameState {
        GameState::new(&self.army, self.first_player)
    }

    /// Build a player's view of a match.
    #[must_use]
    pub fn view(&self, state: &GameState, player: PlayerId) -> PlayerView {
        player_view(state, player)
    }

    /// Apply an intent to `state`, which is discarded by the caller on error.
    fn apply(
        &self,
        state: &mut GameState,
        player: PlayerId,
        intent: &Intent,
    ) -> Result<Event, Rejection> {
        if state.is_game_over() {
            return Err(Illegal::GameOver.into());
        }

        match *intent {
            Intent::Place { piece, tile } => deployment::place(state, player, piece, tile),
            Intent::Ready => deployment::ready(state, player),
            Intent::Move { piece, tile } => movement::step(&self.army, state, player, piece, tile),
        }
    }

    fn legal_placements(&self, state: &GameState, player: PlayerId, intents: &mut Vec<Intent>) {
        let board = state.board();
        let empty_home_tiles: Vec<Tile> = home_rows(player)
            .flat_map(|row| (0..BOARD_COLUMNS).map(move |column| Tile::new(row, column)))
            .filter(|tile| board.is_empty(*tile))
            .collect();

        for piece in board.army(player).iter().filter(|piece| !piece.is_eliminated()) {
            intents.extend(
                empty_home_tiles
                    .iter()
                    .map(|tile| Intent::place(piece.id, tile.to_frame(player))),
            );
            if piece.is_deployed() {
                intents.push(Intent::withdraw(piece.id));
            }
        }
    }

    fn legal_moves(&self, state: &GameState, player: PlayerId, intents: &mut Vec<Intent>) {
        let board = state.board();
        for piece in board.deployed(player) {
            let Some(from) = piece.position() else {
                continue;
            };
            for to in from.orthogonal_neighbors() {
                let blocked = board.occupant(to).is_some_and(|occupant| occupant.owner == player);
                if !blocked {
                    intents.push(Intent::step(piece.id, to.to_frame(player)));
                }
            }
        }
    }
}

impl RulesEngine for GeneralsGame {
    fn config(&self) -> &ArmyConfig {
        &self.army
    }

    fn transition(
        &self,
        state: &GameState,
        player: PlayerId,
        intent: &Intent,
    ) -> (GameState, Outcome) {
        let mut next = state.clone();
        match self.apply(&mut next, player, intent) {
            Ok(event) => (next, Outcome::Applied(event)),
            Err(rejection) => {
                debug!(%player, ?intent, %rejection, "intent rejected");
                (state.clone(), Outcome::from(Err::<Event, _>(rejection)))
            }
        }
    }

    fn legal_intents(&self, state: &GameState, player: PlayerId) -> Vec<Intent> {
        if state.is_game_over() {
            return vec![];
        }

        let mut intents = Vec::new();
        match state.phase() {
            Phase::Deployment => {
                if !state.is_ready(player) {
                    intents.push(Intent::Ready);
                }
                self.legal_placements(state, player, &mut intents);
            }
            Phase::Play => {
                if state.is_turn(player) {
                    self.legal_moves(state, player, &mut intents);
                }
            }
        }
        intents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceId;
    use crate::rules::{Malformed, VictoryCause};

    #[test]
    fn test_game_creation() {
        let (game, state) = GeneralsBuilder::new().first_player(PlayerId::Two).build();

        assert_eq!(game.first_player(), PlayerId::Two);
        assert_eq!(state.turn(), PlayerId::Two);
        assert_eq!(state.phase(), Phase::Deployment);
        assert_eq!(game.config().composition().len(), 21);
    }

    #[test]
    fn test_legal_intents_in_deployment() {
        let (game, state) = GeneralsBuilder::new().build();

        let intents = game.legal_intents(&state, PlayerId::One);

        // Ready plus 21 pieces times 27 home tiles, no withdrawals yet.
        assert_eq!(intents.len(), 1 + 21 * 27);
        assert!(intents.contains(&Intent::Ready));
        assert!(intents.contains(&Intent::place(PieceId(0), Tile::new(5, 0))));
        assert!(!intents.contains(&Intent::place(PieceId(0), Tile::new(4, 0))));
    }

    #[test]
    fn test_legal_intents_are_applied() {
        let (game, state) = GeneralsBuilder::new().build();

        for intent in game.legal_intents(&state, PlayerId::Two).into_iter().take(40) {
            let (_, outcome) = game.transition(&state, PlayerId::Two, &intent);
            assert!(outcome.is_applied(), "{intent:?} gave {outcome:?}");
        }
    }

    #[test]
    fn test_transition_leaves_input_untouched() {
        let (game, state) = GeneralsBuilder::new().build();
        let before = state.clone();

        let intent = Intent::place(PieceId(3), Tile::new(6, 6));
        let (next, outcome) = game.transition(&state, PlayerId::One, &intent);

        assert!(outcome.is_applied());
        assert_eq!(state, before);
        assert_ne!(next, before);
    }

    #[test]
    fn test_rejected_transition_returns_same_state() {
        let (game, state) = GeneralsBuilder::new().build();

        let intent = Intent::place(PieceId(25), Tile::new(6, 6));
        let (next, outcome) = game.transition(&state, PlayerId::One, &intent);

        assert_eq!(outcome, Outcome::RejectedMalformed(Malformed::UnknownPiece(PieceId(25))));
        assert_eq!(next, state);
    }

    #[test]
    fn test_terminal_state_rejects_everything() {
        let (game, mut state) = GeneralsBuilder::new().build();
        state.victory_mut().confirm(PlayerId::One, VictoryCause::FlagCaptured);

        assert!(game.legal_intents(&state, PlayerId::Two).is_empty());
        assert_eq!(
            game.apply_intent(&mut state, PlayerId::Two, &Intent::Ready),
            Outcome::RejectedIllegal(Illegal::GameOver)
        );
        assert_eq!(game.is_terminal(&state).map(|result| result.winner), Some(PlayerId::One));
    }
}
