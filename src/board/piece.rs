//! Pieces - runtime piece state.
//!
//! A `Piece` is one of the 21 soldiers of an army. Its identity and rank are
//! fixed for the whole match; its position changes during deployment and
//! play, and it may be eliminated exactly once.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, RankId, Tile};

/// Number of pieces in each army.
pub const ARMY_SIZE: usize = 21;

/// Stable, rank-opaque piece identity (0-20), unique per owner.
///
/// Both players see the same identity for a piece, so it can be used to
/// correlate a piece across views without revealing its rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub u8);

impl PieceId {
    /// Identity slot reserved for the Flag.
    pub const FLAG: PieceId = PieceId(20);

    /// Check if this identity names a piece of the army.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < ARMY_SIZE
    }

    /// Index into an army.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every identity of an army.
    pub fn all() -> impl Iterator<Item = PieceId> {
        (0..ARMY_SIZE as u8).map(PieceId)
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece in a match.
///
/// `position` is `None` while the piece is undeployed or after it has been
/// eliminated. Only [`Board`](super::Board) changes it, keeping the board
/// cells in sync.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// Owning player.
    pub owner: PlayerId,

    /// Rank, fixed for the piece's lifetime.
    pub rank: RankId,

    /// Identity within the owner's army.
    pub id: PieceId,

    position: Option<Tile>,

    eliminated: bool,
}

impl Piece {
    /// Create an undeployed piece.
    #[must_use]
    pub fn new(owner: PlayerId, id: PieceId, rank: RankId) -> Self {
        Self {
            owner,
            rank,
            id,
            position: None,
            eliminated: false,
        }
    }

    /// Current canonical position, if on the board.
    #[must_use]
    pub fn position(&self) -> Option<Tile> {
        self.position
    }

    /// Check if the piece is on the board.
    #[must_use]
    pub fn is_deployed(&self) -> bool {
        self.position.is_some()
    }

    /// Check if the piece has been removed from play.
    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    pub(super) fn set_position(&mut self, position: Option<Tile>) {
        self.position = position;
    }

    pub(super) fn mark_eliminated(&mut self) {
        self.position = None;
        self.eliminated = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_id_validity() {
        assert!(PieceId(0).is_valid());
        assert!(PieceId::FLAG.is_valid());
        assert!(!PieceId(21).is_valid());
        assert_eq!(PieceId::all().count(), ARMY_SIZE);
        assert_eq!(PieceId::all().last(), Some(PieceId::FLAG));
    }

    #[test]
    fn test_new_piece_is_off_board() {
        let piece = Piece::new(PlayerId::One, PieceId(4), RankId(3));

        assert!(!piece.is_deployed());
        assert!(!piece.is_eliminated());
        assert_eq!(piece.position(), None);
    }

    #[test]
    fn test_elimination_clears_position() {
        let mut piece = Piece::new(PlayerId::Two, PieceId(4), RankId(3));
        piece.set_position(Some(Tile::new(1, 1)));
        assert!(piece.is_deployed());

        piece.mark_eliminated();
        assert!(piece.is_eliminated());
        assert!(!piece.is_deployed());
    }

    #[test]
    fn test_piece_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&PieceId(7)).unwrap(), "7");
    }
}
