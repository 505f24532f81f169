//! Game of the Generals.
//!
//! Two armies of 21 pieces on an 8×9 board:
//! - Each player deploys on their three home rows, then signals readiness
//! - Players alternate single-step orthogonal moves
//! - Stepping onto an enemy triggers rank-based combat
//! - Capturing the enemy Flag wins, and so does a Flag reaching the far
//!   edge without being captured on the following move

mod deployment;
mod game;
mod matchup;
mod movement;
mod setup;

pub use game::{GeneralsBuilder, GeneralsGame};
pub use matchup::Match;
pub use setup::random_deployment;
