//! The board grid and both armies.
//!
//! `Board` owns the 8×9 cell grid together with every piece, so the
//! bidirectional link between them can only be changed through its
//! primitives:
//!
//! - `place`: put a piece on an empty tile (vacating its previous tile)
//! - `clear`: take a piece off the board without eliminating it
//! - `eliminate`: take a piece off the board for good
//!
//! Each primitive validates before touching anything, so a failed call leaves
//! the board unchanged.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::piece::{Piece, PieceId};
use crate::core::{ArmyConfig, PlayerId, PlayerMap, Tile, BOARD_COLUMNS, BOARD_ROWS};

/// Reference from a cell to the piece standing on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occupant {
    /// Owning player.
    pub owner: PlayerId,
    /// Piece identity.
    pub piece: PieceId,
}

/// Errors from board primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The identity names no piece of the army.
    #[error("no piece {0} in the army")]
    UnknownPiece(PieceId),

    /// The piece has already been removed from play.
    #[error("piece {0} is eliminated")]
    Eliminated(PieceId),

    /// The tile lies outside the board.
    #[error("tile {0} is off the board")]
    OffBoard(Tile),

    /// Another piece stands on the tile.
    #[error("tile {0} is occupied")]
    Occupied(Tile),
}

type Cells = [[Option<Occupant>; BOARD_COLUMNS as usize]; BOARD_ROWS as usize];

/// Board cells plus both armies, in the canonical frame.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: Cells,
    armies: PlayerMap<Vec<Piece>>,
}

impl Board {
    /// Create an empty board with two full, undeployed armies.
    #[must_use]
    pub fn new(army: &ArmyConfig) -> Self {
        let armies = PlayerMap::new(|owner| {
            PieceId::all()
                .map(|id| Piece::new(owner, id, army.rank_of(id)))
                .collect()
        });

        Self {
            cells: [[None; BOARD_COLUMNS as usize]; BOARD_ROWS as usize],
            armies,
        }
    }

    // === Queries ===

    /// Get a piece by owner and identity.
    #[must_use]
    pub fn piece(&self, owner: PlayerId, id: PieceId) -> Option<&Piece> {
        self.armies[owner].get(id.index())
    }

    /// Get a player's whole army, indexed by identity.
    #[must_use]
    pub fn army(&self, owner: PlayerId) -> &[Piece] {
        &self.armies[owner]
    }

    /// Get the occupant of a canonical tile.
    ///
    /// Off-board tiles are never occupied.
    #[must_use]
    pub fn occupant(&self, tile: Tile) -> Option<Occupant> {
        if !tile.is_on_board() {
            return None;
        }
        self.cells[usize::from(tile.row)][usize::from(tile.column)]
    }

    /// Get the piece standing on a canonical tile.
    #[must_use]
    pub fn piece_at(&self, tile: Tile) -> Option<&Piece> {
        self.occupant(tile)
            .and_then(|occupant| self.piece(occupant.owner, occupant.piece))
    }

    /// Check if a canonical tile is empty.
    #[must_use]
    pub fn is_empty(&self, tile: Tile) -> bool {
        self.occupant(tile).is_none()
    }

    /// Iterate over occupied tiles and their pieces, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Tile, &Piece)> {
        Tile::all().filter_map(move |tile| self.piece_at(tile).map(|piece| (tile, piece)))
    }

    /// Iterate over a player's pieces currently on the board.
    pub fn deployed(&self, owner: PlayerId) -> impl Iterator<Item = &Piece> {
        self.armies[owner].iter().filter(|piece| piece.is_deployed())
    }

    // === Primitives ===

    /// Put a piece on an empty tile, vacating the tile it stood on.
    ///
    /// Returns the tile the piece left, if it was deployed.
    ///
    /// # Errors
    ///
    /// Fails without changing anything if the piece is unknown or eliminated,
    /// or if the tile is off the board or occupied.
    pub fn place(
        &mut self,
        owner: PlayerId,
        id: PieceId,
        tile: Tile,
    ) -> Result<Option<Tile>, BoardError> {
        let piece = self.piece(owner, id).ok_or(BoardError::UnknownPiece(id))?;
        if piece.is_eliminated() {
            return Err(BoardError::Eliminated(id));
        }
        if !tile.is_on_board() {
            return Err(BoardError::OffBoard(tile));
        }
        if !self.is_empty(tile) {
            return Err(BoardError::Occupied(tile));
        }

        let previous = piece.position();
        if let Some(from) = previous {
            *self.cell_mut(from) = None;
        }
        *self.cell_mut(tile) = Some(Occupant { owner, piece: id });
        self.armies[owner][id.index()].set_position(Some(tile));
        Ok(previous)
    }

    /// Take a piece off the board without eliminating it.
    ///
    /// Returns the tile the piece left, if it was deployed.
    ///
    /// # Errors
    ///
    /// Fails if the piece is unknown or already eliminated.
    pub fn clear(&mut self, owner: PlayerId, id: PieceId) -> Result<Option<Tile>, BoardError> {
        let piece = self.piece(owner, id).ok_or(BoardError::UnknownPiece(id))?;
        if piece.is_eliminated() {
            return Err(BoardError::Eliminated(id));
        }

        let previous = piece.position();
        if let Some(from) = previous {
            *self.cell_mut(from) = None;
        }
        self.armies[owner][id.index()].set_position(None);
        Ok(previous)
    }

    /// Remove a piece from play.
    ///
    /// Returns the tile the piece stood on, if it was deployed.
    ///
    /// # Errors
    ///
    /// Fails if the piece is unknown or already eliminated.
    pub fn eliminate(&mut self, owner: PlayerId, id: PieceId) -> Result<Option<Tile>, BoardError> {
        let previous = self.clear(owner, id)?;
        self.armies[owner][id.index()].mark_eliminated();
        debug!(%owner, piece = %id, ?previous, "piece eliminated");
        Ok(previous)
    }

    fn cell_mut(&mut self, tile: Tile) -> &mut Option<Occupant> {
        &mut self.cells[usize::from(tile.row)][usize::from(tile.column)]
    }
}
