//! Board invariants - sanity checks that detect bugs.
//!
//! These should never trigger: `Board` primitives maintain them. Tests and
//! property tests run them after every operation.
//!
//! - every occupied cell points at a live piece whose position is that cell
//! - every deployed piece is pointed at by the cell at its position
//! - eliminated pieces are off the board

use thiserror::Error;

use super::grid::Board;
use crate::core::{PlayerId, Tile};

/// Invariant violation error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invariant violation: {message}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl InvariantViolation {
    fn new(message: String) -> Self {
        Self { message }
    }
}

/// Check all board invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(board: &Board) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for tile in Tile::all() {
        let Some(occupant) = board.occupant(tile) else {
            continue;
        };
        match board.piece(occupant.owner, occupant.piece) {
            None => violations.push(InvariantViolation::new(format!(
                "cell {tile} points at unknown piece {} of {}",
                occupant.piece, occupant.owner
            ))),
            Some(piece) if piece.is_eliminated() => violations.push(InvariantViolation::new(format!(
                "cell {tile} points at eliminated piece {} of {}",
                piece.id, piece.owner
            ))),
            Some(piece) if piece.position() != Some(tile) => {
                violations.push(InvariantViolation::new(format!(
                    "cell {tile} holds piece {} of {} whose position is {:?}",
                    piece.id,
                    piece.owner,
                    piece.position()
                )));
            }
            Some(_) => {}
        }
    }

    for player in PlayerId::all() {
        for piece in board.army(player) {
            if piece.owner != player {
                violations.push(InvariantViolation::new(format!(
                    "piece {} in the army of {player} is owned by {}",
                    piece.id, piece.owner
                )));
            }
            if piece.is_eliminated() && piece.is_deployed() {
                violations.push(InvariantViolation::new(format!(
                    "eliminated piece {} of {player} is still positioned",
                    piece.id
                )));
            }
            if let Some(tile) = piece.position() {
                let occupant = board.occupant(tile);
                if occupant.map(|o| (o.owner, o.piece)) != Some((player, piece.id)) {
                    violations.push(InvariantViolation::new(format!(
                        "piece {} of {player} claims {tile} but the cell holds {occupant:?}",
                        piece.id
                    )));
                }
            }
        }
    }

    violations
}
