//! Board and piece registry.
//!
//! The board is an 8×9 grid of optional piece references. Each piece records
//! its own position. The two views are kept in sync by `Board`, whose
//! primitives are the only way to move a piece:
//!
//! - `place(owner, id, tile)`
//! - `clear(owner, id)`
//! - `eliminate(owner, id)`

pub mod grid;
pub mod invariants;
pub mod piece;

pub use grid::{Board, BoardError, Occupant};
pub use invariants::{check_invariants, InvariantViolation};
pub use piece::{Piece, PieceId, ARMY_SIZE};
