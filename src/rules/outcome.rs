//! Operation outcomes.
//!
//! Every intent is either applied atomically or rejected with no state
//! change. Rejections distinguish malformed input (the intent names no
//! piece or no tile) from well-formed intents the rules forbid.
//!
//! Tiles inside events are expressed in the acting player's frame.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{BoardError, PieceId};
use crate::combat::CombatOutcome;
use crate::core::{MoveRecord, Phase, Tile};

/// The intent does not describe anything on this board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum Malformed {
    /// Piece identity outside 0-20.
    #[error("no piece with identity {0}")]
    UnknownPiece(PieceId),

    /// Tile coordinates outside the 8×9 board.
    #[error("tile {0} is off the board")]
    TileOffBoard(Tile),
}

/// The intent is well formed but the rules forbid it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum Illegal {
    /// The game is over; nothing may change any more.
    #[error("the game is over")]
    GameOver,

    /// The intent belongs to another phase.
    #[error("only allowed during the {expected:?} phase")]
    WrongPhase { expected: Phase },

    /// Another player is to move.
    #[error("it is not this player's turn")]
    NotYourTurn,

    /// The piece has been removed from play.
    #[error("piece {0} is eliminated")]
    PieceEliminated(PieceId),

    /// The piece is not on the board.
    #[error("piece {0} is not deployed")]
    PieceNotDeployed(PieceId),

    /// Moves must end on the board.
    #[error("a move needs a destination on the board")]
    DestinationOffBoard,

    /// Deployment is restricted to the player's home rows.
    #[error("tile {0} is outside the home rows")]
    OutsideHomeRows(Tile),

    /// Deployment needs an empty tile.
    #[error("tile {0} is occupied")]
    TileOccupied(Tile),

    /// A piece cannot move onto a friendly piece.
    #[error("tile {0} holds a friendly piece")]
    OwnPieceAtDestination(Tile),

    /// Pieces move exactly one tile, orthogonally.
    #[error("destination is {distance} tiles away, moves are one step")]
    NotAdjacent { distance: u16 },

    /// Readiness is signalled once.
    #[error("player is already ready")]
    AlreadyReady,
}

/// Why an intent was not applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    /// See [`Malformed`].
    #[error("malformed intent: {0}")]
    Malformed(#[from] Malformed),

    /// See [`Illegal`].
    #[error("illegal intent: {0}")]
    Illegal(#[from] Illegal),
}

impl From<BoardError> for Rejection {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::UnknownPiece(piece) => Malformed::UnknownPiece(piece).into(),
            BoardError::OffBoard(tile) => Malformed::TileOffBoard(tile).into(),
            BoardError::Eliminated(piece) => Illegal::PieceEliminated(piece).into(),
            BoardError::Occupied(tile) => Illegal::TileOccupied(tile).into(),
        }
    }
}

/// Result of a flag reaching the far edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlagRush {
    /// No enemy beside the Flag: immediate win.
    Unchallenged,
    /// An enemy stands beside the Flag: win pending the opponent's reply.
    Challenged,
}

/// What an applied intent did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    /// A piece was deployed.
    Placed { piece: PieceId, tile: Tile },

    /// A piece was taken back off the board during deployment.
    Withdrawn { piece: PieceId },

    /// The player signalled readiness.
    Readied {
        /// Both players are now ready and play has begun.
        play_started: bool,
    },

    /// A piece moved onto an empty tile.
    Advanced {
        piece: PieceId,
        record: MoveRecord,
        /// Set when the move was a flag rush.
        flag_rush: Option<FlagRush>,
    },

    /// A piece attacked an enemy piece.
    Engaged {
        piece: PieceId,
        defender: PieceId,
        record: MoveRecord,
        result: CombatOutcome,
    },
}

/// Outcome of submitting an intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The intent was applied.
    Applied(Event),
    /// The intent was ignored because it is malformed.
    RejectedMalformed(Malformed),
    /// The intent was ignored because the rules forbid it.
    RejectedIllegal(Illegal),
}

impl Outcome {
    /// Check if the intent was applied.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    /// The applied event, if any.
    #[must_use]
    pub fn event(&self) -> Option<&Event> {
        match self {
            Outcome::Applied(event) => Some(event),
            _ => None,
        }
    }
}

impl From<Result<Event, Rejection>> for Outcome {
    fn from(result: Result<Event, Rejection>) -> Self {
        match result {
            Ok(event) => Outcome::Applied(event),
            Err(Rejection::Malformed(reason)) => Outcome::RejectedMalformed(reason),
            Err(Rejection::Illegal(reason)) => Outcome::RejectedIllegal(reason),
        }
    }
}
