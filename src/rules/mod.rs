//! Rule configuration for a single game.
//!
//! This module defines the mutable ruleset governing one game instance:
//! which ko rule applies, how scoring is computed, tax treatment of
//! groups, handicap compensation for White, suicide legality, and komi.
//! It is a pure value library: no board, move legality, or scoring
//! computation lives here. The engine consumes a [`Ruleset`] as an opaque
//! validated snapshot.
//!
//! - `kind`: the four closed rule categories and their token forms
//! - `ruleset`: the aggregate value, derived properties, text/JSON forms
//! - `presets`: named rule families (Japanese, Chinese, AGA, ...)
//! - `update`: key/value incremental updates
//! - `error`: [`RulesError`]

pub mod error;
pub mod kind;
pub mod presets;
pub mod ruleset;
pub mod update;

pub use error::{Result, RulesError};
pub use kind::{KoRule, ScoringRule, TaxRule, WhiteHandicapBonus};
pub use ruleset::Ruleset;
