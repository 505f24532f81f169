//! # generals-engine
//!
//! Authoritative rules engine for the Game of the Generals, a two-player,
//! hidden-rank board game in the Stratego family.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Rules are a function from `(state, player, intent)`
//!    to `(state, outcome)`. A rejected intent never leaves a partial change.
//!
//! 2. **Explicit Outcomes**: Every intent is applied, rejected as malformed or
//!    rejected as illegal, and the caller can tell which.
//!
//! 3. **Per-Player Frames**: Players submit and receive tiles in their own
//!    frame; player two's frame is the board rotated by 180°.
//!
//! 4. **Fog of War**: Views reveal identities and ownership, never ranks.
//!
//! ## Modules
//!
//! - `core`: Players, tiles, army configuration, intents, state, RNG
//! - `board`: Pieces and the board grid with its consistency invariant
//! - `combat`: Rank-based combat resolution
//! - `view`: Perspective projection for each player
//! - `rules`: RulesEngine trait, outcomes and victory tracking
//! - `games`: The Game of the Generals rules and per-match handle
//!
//! ## Example
//!
//! ```
//! use generals_engine::{GameRng, Match, PlayerId, PieceId, Tile};
//!
//! let mut game = Match::classic();
//! let mut rng = GameRng::new(42);
//! game.deploy_randomly(PlayerId::One, &mut rng);
//! game.deploy_randomly(PlayerId::Two, &mut rng);
//! game.submit_ready(PlayerId::One);
//! game.submit_ready(PlayerId::Two);
//!
//! // Nothing stands three rows ahead of any piece in the first turn.
//! let outcome = game.submit_move(PlayerId::One, PieceId(0), Some(Tile::new(1, 0)));
//! assert!(!outcome.is_applied());
//! assert!(game.view(PlayerId::One).my_turn);
//! ```

pub mod board;
pub mod combat;
pub mod core;
pub mod games;
pub mod rules;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    ArmyConfig, ArmyDefinition, ConfigError, GameRng, GameState, Intent, MoveRecord, Phase,
    PlayerId, PlayerMap, RankConfig, RankId, Tile,
};

pub use crate::board::{check_invariants, Board, InvariantViolation, Piece, PieceId, ARMY_SIZE};

pub use crate::combat::{resolve, CombatOutcome};

pub use crate::view::{player_view, project, BoardView, PlayerView, TileView};

pub use crate::rules::{
    Event, FlagRush, GameResult, Illegal, Malformed, Outcome, Rejection, RulesEngine, VictoryCause,
    VictoryStatus, VictoryTracker,
};

pub use crate::games::generals::{random_deployment, GeneralsBuilder, GeneralsGame, Match};
