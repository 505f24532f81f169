//! Rules engine trait, operation outcomes and victory tracking.
//!
//! Games implement `RulesEngine` to define:
//! - Legal intents for each game state
//! - How intents modify state
//! - Win conditions
//!
//! Every operation reports an `Outcome`; rejected intents never change state.

pub mod engine;
pub mod outcome;
pub mod victory;

pub use engine::{GameResult, RulesEngine};
pub use outcome::{Event, FlagRush, Illegal, Malformed, Outcome, Rejection};
pub use victory::{VictoryCause, VictoryStatus, VictoryTracker};
