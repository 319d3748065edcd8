//! # go-rules
//!
//! Ruleset configuration for a Go engine: the rule vocabulary, named
//! presets for real-world rule families, and text/JSON renderings.
//!
//! ## Design Principles
//!
//! 1. **Closed vocabulary**: every rule category is a finite enum, so an
//!    invalid rule value is unrepresentable by construction. Integer
//!    ordinals exist only at the JSON boundary.
//!
//! 2. **Value semantics**: a [`Ruleset`] is a small `Copy` value with no
//!    owned resources. Mutation happens only through explicit update
//!    calls, so the engine can treat a snapshot as immutable per turn.
//!
//! 3. **Configuration only**: no board, no move legality, no scoring
//!    computation, no I/O. The engine consumes the validated value.
//!
//! ## Example
//!
//! ```
//! use go_rules::{Ruleset, KoRule};
//!
//! let mut rules = Ruleset::from_preset("chinese");
//! rules.apply_update("ko", "SITUATIONAL").unwrap();
//! assert_eq!(rules.ko_rule, KoRule::Situational);
//! assert_eq!(
//!     rules.to_string(),
//!     "Ko Rule: SITUATIONAL, Scoring Rule: AREA, Tax Rule: NONE, \
//!      White Handicap Bonus: N, White Handicap Bonus: N, Komi: 7.5"
//! );
//! ```
//!
//! ## Modules
//!
//! - `rules`: the full configuration surface

pub mod rules;

// Re-export the public surface at the crate root.
pub use crate::rules::{
    KoRule, Result, Ruleset, RulesError, ScoringRule, TaxRule, WhiteHandicapBonus,
};
