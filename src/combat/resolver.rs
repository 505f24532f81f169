//! Combat resolution.
//!
//! Combat compares two ranks. Rules, in priority order:
//!
//! 1. Spy attacking Private: the Private wins.
//! 2. Private attacking Spy: the Private wins.
//! 3. Flag attacking Flag: the attacker wins.
//! 4. Otherwise the stronger rank wins; equal strengths eliminate both.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::{ArmyConfig, RankId};

/// Result of one engagement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatOutcome {
    /// Defender removed, attacker takes the tile.
    AttackerWins,
    /// Both pieces removed, the tile is left empty.
    Draw,
    /// Attacker removed, defender keeps the tile.
    DefenderWins,
}

/// Resolve an attack of `attacker` on `defender`.
///
/// Pure: depends only on the two ranks and the configured rank table.
#[must_use]
pub fn resolve(attacker: RankId, defender: RankId, army: &ArmyConfig) -> CombatOutcome {
    if attacker == army.spy() && defender == army.private() {
        return CombatOutcome::DefenderWins;
    }
    if defender == army.spy() && attacker == army.private() {
        return CombatOutcome::AttackerWins;
    }
    if attacker == army.flag() && defender == army.flag() {
        return CombatOutcome::AttackerWins;
    }

    match army.strength(attacker).cmp(&army.strength(defender)) {
        Ordering::Greater => CombatOutcome::AttackerWins,
        Ordering::Less => CombatOutcome::DefenderWins,
        Ordering::Equal => CombatOutcome::Draw,
    }
}
