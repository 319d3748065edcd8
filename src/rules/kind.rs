//! The four closed rule categories.
//!
//! Each category is a finite enum, so an invalid ordinal is unrepresentable
//! once a value exists. Raw integers only appear at the serialization
//! boundary, via `From<_> for u8` / `TryFrom<u8>`.
//!
//! Every category has a canonical uppercase token form:
//! - [`KoRule`]: `SIMPLE`, `POSITIONAL`, `SITUATIONAL`, `SPIGHT`
//! - [`ScoringRule`]: `AREA`, `TERRITORY`
//! - [`TaxRule`]: `NONE`, `SEKI`, `ALL`
//! - [`WhiteHandicapBonus`]: `ZERO`, `N`, `N-1`
//!
//! `Display` renders the token; `FromStr` parses it case-sensitively.
//! There is no case-folding here; lenient matching exists only for preset
//! names, never for rule tokens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::RulesError;

/// Which board-repetition states are forbidden after a capture.
///
/// Semantics are consumed by the engine's legality checker; this type only
/// provides identity and text forms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum KoRule {
    /// Forbid only the immediate single-stone recapture.
    #[default]
    Simple,
    /// Forbid recreating any previous board position.
    Positional,
    /// Forbid recreating any previous position with the same player to move.
    Situational,
    /// Spight's rule: repetition restrictions apply to non-pass moves only.
    Spight,
}

impl KoRule {
    /// Every variant, in ordinal order.
    pub const ALL: [KoRule; 4] = [
        KoRule::Simple,
        KoRule::Positional,
        KoRule::Situational,
        KoRule::Spight,
    ];

    /// Category name used in error messages.
    pub const CATEGORY: &'static str = "ko rule";

    /// The canonical uppercase token for this variant.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            KoRule::Simple => "SIMPLE",
            KoRule::Positional => "POSITIONAL",
            KoRule::Situational => "SITUATIONAL",
            KoRule::Spight => "SPIGHT",
        }
    }
}

impl fmt::Display for KoRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for KoRule {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, RulesError> {
        match s {
            "SIMPLE" => Ok(KoRule::Simple),
            "POSITIONAL" => Ok(KoRule::Positional),
            "SITUATIONAL" => Ok(KoRule::Situational),
            "SPIGHT" => Ok(KoRule::Spight),
            _ => Err(RulesError::invalid_rule(KoRule::CATEGORY, s)),
        }
    }
}

impl From<KoRule> for u8 {
    fn from(value: KoRule) -> u8 {
        value as u8
    }
}

impl TryFrom<u8> for KoRule {
    type Error = RulesError;

    fn try_from(value: u8) -> Result<Self, RulesError> {
        KoRule::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| RulesError::invalid_rule(KoRule::CATEGORY, value.to_string()))
    }
}

/// Whether the final score counts stones plus territory, or territory plus
/// captures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ScoringRule {
    /// Living stones on the board + surrounded empty territory.
    #[default]
    Area,
    /// Surrounded empty territory + prisoners, excluding live stones.
    Territory,
}

impl ScoringRule {
    /// Every variant, in ordinal order.
    pub const ALL: [ScoringRule; 2] = [ScoringRule::Area, ScoringRule::Territory];

    /// Category name used in error messages.
    pub const CATEGORY: &'static str = "scoring rule";

    /// The canonical uppercase token for this variant.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            ScoringRule::Area => "AREA",
            ScoringRule::Territory => "TERRITORY",
        }
    }
}

impl fmt::Display for ScoringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ScoringRule {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, RulesError> {
        match s {
            "AREA" => Ok(ScoringRule::Area),
            "TERRITORY" => Ok(ScoringRule::Territory),
            _ => Err(RulesError::invalid_rule(ScoringRule::CATEGORY, s)),
        }
    }
}

impl From<ScoringRule> for u8 {
    fn from(value: ScoringRule) -> u8 {
        value as u8
    }
}

impl TryFrom<u8> for ScoringRule {
    type Error = RulesError;

    fn try_from(value: u8) -> Result<Self, RulesError> {
        ScoringRule::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| RulesError::invalid_rule(ScoringRule::CATEGORY, value.to_string()))
    }
}

/// Which points are excluded ("taxed") from area scoring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TaxRule {
    /// No exclusions.
    #[default]
    None,
    /// Exclude points belonging to groups in seki.
    Seki,
    /// Exclude two points per group (ancient/stone scoring).
    All,
}

impl TaxRule {
    /// Every variant, in ordinal order.
    pub const ALL: [TaxRule; 3] = [TaxRule::None, TaxRule::Seki, TaxRule::All];

    /// Category name used in error messages.
    pub const CATEGORY: &'static str = "tax rule";

    /// The canonical uppercase token for this variant.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            TaxRule::None => "NONE",
            TaxRule::Seki => "SEKI",
            TaxRule::All => "ALL",
        }
    }
}

impl fmt::Display for TaxRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for TaxRule {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, RulesError> {
        match s {
            "NONE" => Ok(TaxRule::None),
            "SEKI" => Ok(TaxRule::Seki),
            "ALL" => Ok(TaxRule::All),
            _ => Err(RulesError::invalid_rule(TaxRule::CATEGORY, s)),
        }
    }
}

impl From<TaxRule> for u8 {
    fn from(value: TaxRule) -> u8 {
        value as u8
    }
}

impl TryFrom<u8> for TaxRule {
    type Error = RulesError;

    fn try_from(value: u8) -> Result<Self, RulesError> {
        TaxRule::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| RulesError::invalid_rule(TaxRule::CATEGORY, value.to_string()))
    }
}

/// How many bonus points White receives for the N handicap stones Black
/// placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum WhiteHandicapBonus {
    /// No compensation.
    #[default]
    Zero,
    /// One point per handicap stone.
    N,
    /// One point per handicap stone beyond the first.
    NMinusOne,
}

impl WhiteHandicapBonus {
    /// Every variant, in ordinal order.
    pub const ALL: [WhiteHandicapBonus; 3] = [
        WhiteHandicapBonus::Zero,
        WhiteHandicapBonus::N,
        WhiteHandicapBonus::NMinusOne,
    ];

    /// Category name used in error messages.
    pub const CATEGORY: &'static str = "white handicap bonus";

    /// The canonical uppercase token for this variant.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            WhiteHandicapBonus::Zero => "ZERO",
            WhiteHandicapBonus::N => "N",
            WhiteHandicapBonus::NMinusOne => "N-1",
        }
    }

    /// True for the zero-compensation variant. Used by the JSON encoder's
    /// omit-if-zero convention.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        matches!(self, WhiteHandicapBonus::Zero)
    }
}

impl fmt::Display for WhiteHandicapBonus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for WhiteHandicapBonus {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, RulesError> {
        match s {
            "ZERO" => Ok(WhiteHandicapBonus::Zero),
            "N" => Ok(WhiteHandicapBonus::N),
            "N-1" => Ok(WhiteHandicapBonus::NMinusOne),
            _ => Err(RulesError::invalid_rule(WhiteHandicapBonus::CATEGORY, s)),
        }
    }
}

impl From<WhiteHandicapBonus> for u8 {
    fn from(value: WhiteHandicapBonus) -> u8 {
        value as u8
    }
}

impl TryFrom<u8> for WhiteHandicapBonus {
    type Error = RulesError;

    fn try_from(value: u8) -> Result<Self, RulesError> {
        WhiteHandicapBonus::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| {
                RulesError::invalid_rule(WhiteHandicapBonus::CATEGORY, value.to_string())
            })
    }
}
