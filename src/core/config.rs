//! Rank ordering and army composition.
//!
//! The engine never hardcodes ranks. An army is configured at startup by
//! providing:
//! - a rank table: names with strength values,
//! - a composition: which rank occupies each of the 21 identity slots,
//! - the distinguished ranks Flag, Spy and Private used by combat overrides.
//!
//! `ArmyDefinition` is the raw, serde-loadable form. `ArmyConfig` is the
//! validated form the engine consumes; it guarantees exactly one Flag, always
//! at identity slot 20.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{PieceId, ARMY_SIZE};

/// Rank identifier: an index into the configured rank table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RankId(pub u8);

impl RankId {
    /// Create a new rank ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for RankId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rank({})", self.0)
    }
}

/// Configuration for a single rank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Rank name, used as the token in compositions.
    pub name: String,

    /// Combat strength. Higher beats lower; equal strengths draw.
    pub strength: i32,
}

impl RankConfig {
    /// Create a new rank configuration.
    pub fn new(name: impl Into<String>, strength: i32) -> Self {
        Self {
            name: name.into(),
            strength,
        }
    }
}

/// Raw army definition, as supplied by the session layer.
///
/// Compositions reference ranks by name. Validate with
/// [`ArmyConfig::from_definition`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmyDefinition {
    /// Rank table.
    pub ranks: Vec<RankConfig>,

    /// Rank name for each identity slot (0-20).
    pub composition: Vec<String>,

    /// Name of the Flag rank.
    pub flag: String,

    /// Name of the Spy rank.
    pub spy: String,

    /// Name of the Private rank.
    pub private: String,
}

/// Army configuration loading errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The composition does not have one rank per identity slot.
    #[error("army composition must have {expected} slots, found {found}")]
    WrongArmySize { expected: usize, found: usize },

    /// Two ranks share a name.
    #[error("rank `{0}` is defined more than once")]
    DuplicateRank(String),

    /// A composition or distinguished-rank token names no configured rank.
    #[error("unknown rank `{0}`")]
    UnknownRank(String),

    /// Flag, Spy and Private must be three different ranks.
    #[error("distinguished ranks must be distinct, `{0}` is used twice")]
    DistinguishedRankReused(String),

    /// The composition must contain exactly one Flag.
    #[error("army composition must contain exactly one flag, found {0}")]
    FlagCount(usize),

    /// The Flag must occupy the last identity slot.
    #[error("flag must occupy slot {expected}, found at slot {found}")]
    FlagSlot { expected: u8, found: usize },

    /// The rank table cannot be indexed by `RankId`.
    #[error("at most 256 ranks are supported, found {0}")]
    TooManyRanks(usize),
}

/// Validated army configuration.
///
/// ## Example
///
/// ```
/// use generals_engine::core::ArmyConfig;
/// use generals_engine::board::PieceId;
///
/// let army = ArmyConfig::classic();
/// assert_eq!(army.rank_of(PieceId::FLAG), army.flag());
/// assert!(army.strength(army.spy()) > army.strength(army.private()));
/// ```
#[derive(Clone, Debug)]
pub struct ArmyConfig {
    ranks: Vec<RankConfig>,
    by_name: FxHashMap<String, RankId>,
    composition: [RankId; ARMY_SIZE],
    flag: RankId,
    spy: RankId,
    private: RankId,
}

impl ArmyConfig {
    /// Validate a raw army definition.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first problem found.
    pub fn from_definition(definition: &ArmyDefinition) -> Result<Self, ConfigError> {
        if definition.ranks.len() > usize::from(u8::MAX) + 1 {
            return Err(ConfigError::TooManyRanks(definition.ranks.len()));
        }

        let mut by_name = FxHashMap::default();
        for (index, rank) in definition.ranks.iter().enumerate() {
            // Bounded by the TooManyRanks check above.
            let id = RankId(index as u8);
            if by_name.insert(rank.name.clone(), id).is_some() {
                return Err(ConfigError::DuplicateRank(rank.name.clone()));
            }
        }

        let lookup = |name: &str| {
            by_name
                .get(name)
                .copied()
                .ok_or_else(|| ConfigError::UnknownRank(name.to_string()))
        };

        let flag = lookup(&definition.flag)?;
        let spy = lookup(&definition.spy)?;
        let private = lookup(&definition.private)?;
        if spy == flag {
            return Err(ConfigError::DistinguishedRankReused(definition.spy.clone()));
        }
        if private == flag || private == spy {
            return Err(ConfigError::DistinguishedRankReused(definition.private.clone()));
        }

        if definition.composition.len() != ARMY_SIZE {
            return Err(ConfigError::WrongArmySize {
                expected: ARMY_SIZE,
                found: definition.composition.len(),
            });
        }

        let mut composition = [flag; ARMY_SIZE];
        for (slot, token) in definition.composition.iter().enumerate() {
            composition[slot] = lookup(token)?;
        }

        let flags: Vec<usize> = composition
            .iter()
            .enumerate()
            .filter(|(_, rank)| **rank == flag)
            .map(|(slot, _)| slot)
            .collect();
        match flags.as_slice() {
            [slot] if *slot == PieceId::FLAG.index() => {}
            [slot] => {
                return Err(ConfigError::FlagSlot {
                    expected: PieceId::FLAG.0,
                    found: *slot,
                })
            }
            _ => return Err(ConfigError::FlagCount(flags.len())),
        }

        Ok(Self {
            ranks: definition.ranks.clone(),
            by_name,
            composition,
            flag,
            spy,
            private,
        })
    }

    /// The standard Game of the Generals army.
    ///
    /// Fifteen ranks from Flag (weakest) to Spy (strongest); two Spies, six
    /// Privates, one of every officer rank and the Flag in slot 20.
    #[must_use]
    pub fn classic() -> Self {
        Self::from_definition(&Self::classic_definition())
            .unwrap_or_else(|err| unreachable!("classic army is valid: {err}"))
    }

    /// The raw definition behind [`ArmyConfig::classic`].
    #[must_use]
    pub fn classic_definition() -> ArmyDefinition {
        const RANKS: [&str; 15] = [
            "Flag",
            "Private",
            "Sergeant",
            "Second Lieutenant",
            "First Lieutenant",
            "Captain",
            "Major",
            "Lieutenant Colonel",
            "Colonel",
            "Brigadier General",
            "Major General",
            "Lieutenant General",
            "General",
            "General of the Army",
            "Spy",
        ];

        let ranks = RANKS
            .iter()
            .zip(0..)
            .map(|(name, strength)| RankConfig::new(*name, strength))
            .collect();

        let mut composition: Vec<String> = vec!["Spy".to_string(), "Spy".to_string()];
        composition.extend(RANKS[2..14].iter().rev().map(ToString::to_string));
        composition.extend(std::iter::repeat("Private".to_string()).take(6));
        composition.push("Flag".to_string());

        ArmyDefinition {
            ranks,
            composition,
            flag: "Flag".to_string(),
            spy: "Spy".to_string(),
            private: "Private".to_string(),
        }
    }

    /// Rank occupying an identity slot.
    ///
    /// `piece` must be a valid identity (0-20).
    #[must_use]
    pub fn rank_of(&self, piece: PieceId) -> RankId {
        self.composition[piece.index()]
    }

    /// Full composition, indexed by identity.
    #[must_use]
    pub fn composition(&self) -> &[RankId; ARMY_SIZE] {
        &self.composition
    }

    /// Combat strength of a rank.
    #[must_use]
    pub fn strength(&self, rank: RankId) -> i32 {
        self.ranks
            .get(usize::from(rank.0))
            .map_or(i32::MIN, |config| config.strength)
    }

    /// Name of a rank.
    #[must_use]
    pub fn rank_name(&self, rank: RankId) -> Option<&str> {
        self.ranks.get(usize::from(rank.0)).map(|config| config.name.as_str())
    }

    /// Look up a rank by name.
    #[must_use]
    pub fn rank_by_name(&self, name: &str) -> Option<RankId> {
        self.by_name.get(name).copied()
    }

    /// The Flag rank.
    #[must_use]
    pub fn flag(&self) -> RankId {
        self.flag
    }

    /// The Spy rank.
    #[must_use]
    pub fn spy(&self) -> RankId {
        self.spy
    }

    /// The Private rank.
    #[must_use]
    pub fn private(&self) -> RankId {
        self.private
    }

    /// Check if a rank is the Flag.
    #[must_use]
    pub fn is_flag(&self, rank: RankId) -> bool {
        rank == self.flag
    }
}

impl Default for ArmyConfig {
    fn default() -> Self {
        Self::classic()
    }
}
