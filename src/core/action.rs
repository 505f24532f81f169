//! Player intents and move records.
//!
//! An intent is what a player asks the engine to do. Tiles inside an intent
//! are expressed in the acting player's own frame; the engine converts them
//! to the canonical frame before applying any rule.
//!
//! Intents are plain data and may be malformed (unknown identity, tile off
//! the board). The engine reports such intents as malformed rather than
//! panicking.

use serde::{Deserialize, Serialize};

use super::tile::Tile;
use crate::board::PieceId;

/// A request from one player.
///
/// ## Example
///
/// ```
/// use generals_engine::core::{Intent, Tile};
/// use generals_engine::board::PieceId;
///
/// let deploy = Intent::place(PieceId(3), Tile::new(6, 4));
/// let withdraw = Intent::withdraw(PieceId(3));
/// let advance = Intent::step(PieceId(3), Tile::new(5, 4));
/// assert_ne!(deploy, withdraw);
/// assert!(matches!(advance, Intent::Move { .. }));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Intent {
    /// Deployment: put a piece on a home-row tile, or take it back off the
    /// board when `tile` is `None`.
    Place {
        /// Piece identity.
        piece: PieceId,
        /// Destination in the mover's frame, or `None` to withdraw.
        tile: Option<Tile>,
    },

    /// Deployment: signal that this player's army is in position.
    Ready,

    /// Play: move a piece one tile, attacking if an enemy occupies it.
    Move {
        /// Piece identity.
        piece: PieceId,
        /// Destination in the mover's frame. `None` is never legal.
        tile: Option<Tile>,
    },
}

impl Intent {
    /// Deploy a piece to a tile.
    #[must_use]
    pub const fn place(piece: PieceId, tile: Tile) -> Self {
        Intent::Place {
            piece,
            tile: Some(tile),
        }
    }

    /// Withdraw a deployed piece.
    #[must_use]
    pub const fn withdraw(piece: PieceId) -> Self {
        Intent::Place { piece, tile: None }
    }

    /// Move a piece one step.
    #[must_use]
    pub const fn step(piece: PieceId, tile: Tile) -> Self {
        Intent::Move {
            piece,
            tile: Some(tile),
        }
    }
}

/// An observed move: origin and destination.
///
/// Stored per observer, already converted into the observer's frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Where the piece started.
    pub from: Tile,
    /// Where the piece tried to go.
    pub to: Tile,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub const fn new(from: Tile, to: Tile) -> Self {
        Self { from, to }
    }

    /// Express a canonical record in `player`'s frame.
    #[must_use]
    pub const fn to_frame(self, player: super::PlayerId) -> Self {
        Self {
            from: self.from.to_frame(player),
            to: self.to.to_frame(player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_intent_constructors() {
        assert_eq!(
            Intent::place(PieceId(1), Tile::new(5, 0)),
            Intent::Place {
                piece: PieceId(1),
                tile: Some(Tile::new(5, 0))
            }
        );
        assert_eq!(
            Intent::withdraw(PieceId(1)),
            Intent::Place {
                piece: PieceId(1),
                tile: None
            }
        );
    }

    #[test]
    fn test_intent_wire_format() {
        let json = r#"{"kind":"move","piece":20,"tile":{"row":4,"column":2}}"#;
        let intent: Intent = serde_json::from_str(json).unwrap();
        assert_eq!(intent, Intent::step(PieceId(20), Tile::new(4, 2)));

        let ready: Intent = serde_json::from_str(r#"{"kind":"ready"}"#).unwrap();
        assert_eq!(ready, Intent::Ready);

        let withdraw: Intent =
            serde_json::from_str(r#"{"kind":"place","piece":3,"tile":null}"#).unwrap();
        assert_eq!(withdraw, Intent::withdraw(PieceId(3)));
    }

    #[test]
    fn test_move_record_frames() {
        let record = MoveRecord::new(Tile::new(5, 0), Tile::new(4, 0));
        assert_eq!(record.to_frame(PlayerId::One), record);
        assert_eq!(
            record.to_frame(PlayerId::Two),
            MoveRecord::new(Tile::new(2, 8), Tile::new(3, 8))
        );
    }
}
