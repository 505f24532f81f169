//! Perspective projection.
//!
//! A view shows the board from one player's seat: player two's view is the
//! canonical board rotated by 180°, and every occupied cell reports only
//! whether the piece is an enemy and its identity. Ranks never leave the
//! engine through a view.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::{Board, PieceId};
use crate::core::{GameState, MoveRecord, Phase, PlayerId, Tile, BOARD_COLUMNS, BOARD_ROWS};

/// What a player may see of an occupied cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileView {
    /// The piece belongs to the opponent.
    pub is_enemy: bool,
    /// Rank-opaque identity.
    pub piece: PieceId,
}

/// Board-shaped view, indexed `[row][column]` in the viewer's frame.
pub type BoardView = [[Option<TileView>; BOARD_COLUMNS as usize]; BOARD_ROWS as usize];

/// Project the board into `viewer`'s frame with ranks redacted.
#[must_use]
pub fn project(board: &Board, viewer: PlayerId) -> BoardView {
    let mut view: BoardView = [[None; BOARD_COLUMNS as usize]; BOARD_ROWS as usize];
    for (tile, piece) in board.occupied() {
        let seen = tile.to_frame(viewer);
        view[usize::from(seen.row)][usize::from(seen.column)] = Some(TileView {
            is_enemy: piece.owner != viewer,
            piece: piece.id,
        });
    }
    view
}

/// Look up one tile of a projected board.
#[must_use]
pub fn tile_view(view: &BoardView, tile: Tile) -> Option<TileView> {
    if !tile.is_on_board() {
        return None;
    }
    view[usize::from(tile.row)][usize::from(tile.column)]
}

/// Everything the session layer may show to one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    /// Who is looking.
    pub viewer: PlayerId,
    /// The board in the viewer's frame.
    pub board: BoardView,
    /// Player to move.
    pub turn: PlayerId,
    /// It is the viewer's turn.
    pub my_turn: bool,
    /// Current phase.
    pub phase: Phase,
    /// The opponent has signalled readiness.
    pub opponent_ready: bool,
    /// Identities of the viewer's own eliminated pieces.
    pub eliminated: Vector<PieceId>,
    /// Identities of the opponent's eliminated pieces.
    pub captured: Vector<PieceId>,
    /// Most recent enemy move, in the viewer's frame.
    pub last_opponent_move: Option<MoveRecord>,
    /// The viewer has won.
    pub victory: bool,
    /// The game-over latch is set.
    pub game_over: bool,
}

/// Build `viewer`'s view of a match.
#[must_use]
pub fn player_view(state: &GameState, viewer: PlayerId) -> PlayerView {
    let opponent = viewer.opponent();
    PlayerView {
        viewer,
        board: project(state.board(), viewer),
        turn: state.turn(),
        my_turn: state.is_turn(viewer),
        phase: state.phase(),
        opponent_ready: state.is_ready(opponent),
        eliminated: state.eliminated(viewer).clone(),
        captured: state.eliminated(opponent).clone(),
        last_opponent_move: state.last_opponent_move(viewer),
        victory: state.victory().is_confirmed(viewer),
        game_over: state.is_game_over(),
    }
}
