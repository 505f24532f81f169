//! Board coordinates and player frames.
//!
//! ## Frames
//!
//! Every tile a player submits or receives is expressed in that player's own
//! frame. Player one's frame is the canonical frame; player two's frame is the
//! canonical frame rotated by 180°:
//!
//! ```text
//! (row, column) -> (7 - row, 8 - column)
//! ```
//!
//! The rotation is an involution, so the same operation converts in both
//! directions. In its own frame each player deploys into rows 5-7 and
//! advances toward row 0.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;

/// Number of rows on the board.
pub const BOARD_ROWS: u8 = 8;

/// Number of columns on the board.
pub const BOARD_COLUMNS: u8 = 9;

/// Number of rows in each player's deployment territory.
pub const HOME_ROW_DEPTH: u8 = 3;

/// A board coordinate.
///
/// Tiles are plain data: a tile received from a caller may lie outside the
/// board, which `is_on_board` detects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tile {
    /// Row (0 = top of the canonical frame).
    pub row: u8,
    /// Column (0 = left of the canonical frame).
    pub column: u8,
}

impl Tile {
    /// Create a new tile.
    #[must_use]
    pub const fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Check if this tile lies inside the 8×9 board.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.row < BOARD_ROWS && self.column < BOARD_COLUMNS
    }

    /// Rotate the tile by 180° around the board centre.
    ///
    /// Only meaningful for on-board tiles.
    #[must_use]
    pub const fn rotated(self) -> Self {
        Self {
            row: BOARD_ROWS - 1 - self.row,
            column: BOARD_COLUMNS - 1 - self.column,
        }
    }

    /// Convert a canonical tile into `player`'s frame.
    #[must_use]
    pub const fn to_frame(self, player: PlayerId) -> Self {
        match player {
            PlayerId::One => self,
            PlayerId::Two => self.rotated(),
        }
    }

    /// Convert a tile in `player`'s frame into the canonical frame.
    #[must_use]
    pub const fn from_frame(self, player: PlayerId) -> Self {
        // The rotation is its own inverse.
        self.to_frame(player)
    }

    /// Manhattan distance between two tiles.
    #[must_use]
    pub const fn distance(self, other: Tile) -> u16 {
        self.row.abs_diff(other.row) as u16 + self.column.abs_diff(other.column) as u16
    }

    /// Orthogonally adjacent tiles that lie on the board.
    #[must_use]
    pub fn orthogonal_neighbors(self) -> SmallVec<[Tile; 4]> {
        let mut result = SmallVec::new();
        if self.row > 0 {
            result.push(Tile::new(self.row - 1, self.column)); // up
        }
        if self.row + 1 < BOARD_ROWS {
            result.push(Tile::new(self.row + 1, self.column)); // down
        }
        result.extend(self.horizontal_neighbors());
        result
    }

    /// Left and right neighbours that lie on the board.
    ///
    /// Edge tiles have a single horizontal neighbour.
    #[must_use]
    pub fn horizontal_neighbors(self) -> SmallVec<[Tile; 2]> {
        let mut result = SmallVec::new();
        if self.column > 0 {
            result.push(Tile::new(self.row, self.column - 1));
        }
        if self.column + 1 < BOARD_COLUMNS {
            result.push(Tile::new(self.row, self.column + 1));
        }
        result
    }

    /// Iterate over every tile of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Tile> {
        (0..BOARD_ROWS).flat_map(|row| (0..BOARD_COLUMNS).map(move |column| Tile::new(row, column)))
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Canonical rows a player may deploy into.
#[must_use]
pub const fn home_rows(player: PlayerId) -> RangeInclusive<u8> {
    match player {
        PlayerId::One => (BOARD_ROWS - HOME_ROW_DEPTH)..=(BOARD_ROWS - 1),
        PlayerId::Two => 0..=(HOME_ROW_DEPTH - 1),
    }
}

/// Canonical row forming the opponent's home edge, the target of a flag rush.
#[must_use]
pub const fn far_edge(player: PlayerId) -> u8 {
    match player {
        PlayerId::One => 0,
        PlayerId::Two => BOARD_ROWS - 1,
    }
}
