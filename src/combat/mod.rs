//! Combat resolver.
//!
//! Stepping onto an enemy-occupied tile starts an engagement, resolved purely
//! from the two ranks by `resolve`.

pub mod resolver;

pub use resolver::{resolve, CombatOutcome};
