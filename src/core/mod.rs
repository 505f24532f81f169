//! Core engine types: players, tiles and frames, ranks, intents, RNG, state.
//!
//! This module contains the building blocks every other module uses. Ranks
//! and army composition are configured via `ArmyConfig` rather than
//! hardcoded.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;
pub mod tile;

pub use action::{Intent, MoveRecord};
pub use config::{ArmyConfig, ArmyDefinition, ConfigError, RankConfig, RankId};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use state::{GameState, Phase};
pub use tile::{far_edge, home_rows, Tile, BOARD_COLUMNS, BOARD_ROWS, HOME_ROW_DEPTH};
