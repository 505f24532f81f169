//! Player-facing views.
//!
//! Views are read-only snapshots in the viewer's own frame with ranks
//! redacted.

mod projection;

pub use projection::{player_view, project, tile_view, BoardView, PlayerView, TileView};
