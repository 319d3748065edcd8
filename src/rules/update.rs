//! Incremental key/value updates to a ruleset.
//!
//! Configuration surfaces (GTP, APIs, UIs) hand rules over one field at a
//! time as text. [`Ruleset::apply_update`] parses a single key/value pair
//! and mutates the receiver in place; a failed parse leaves the receiver
//! untouched.

use super::error::{Result, RulesError};
use super::ruleset::Ruleset;

/// Strict boolean parser for update values.
///
/// Accepts exactly `"true"`, `"True"`, `"false"`, `"False"`.
fn parse_bool(s: &str) -> Result<bool> {
    match s {
        "true" | "True" => Ok(true),
        "false" | "False" => Ok(false),
        _ => Err(RulesError::InvalidBooleanLiteral(s.to_string())),
    }
}

impl Ruleset {
    /// Set one named field from its text form, in place.
    ///
    /// Recognized keys: `ko`, `scoring`, `tax`, `suicide`, `hasButton`,
    /// `whiteHandicapBonus`, `friendlyPassOk`. Enum fields take the
    /// canonical uppercase tokens; boolean fields take the strict literals
    /// accepted by the boolean parser. Returns the mutated receiver for
    /// chaining; on any parse failure the receiver is unchanged.
    ///
    /// The key `score` is also accepted, as a deprecated no-op: legacy
    /// clients sent it where they meant `scoring`, and the historical
    /// behavior was to swallow it without mutating anything. It succeeds
    /// without touching the ruleset, so callers that care must send
    /// `scoring`.
    ///
    /// ```
    /// use go_rules::Ruleset;
    ///
    /// let mut rules = Ruleset::tromp_taylorish();
    /// rules.apply_update("suicide", "true").unwrap();
    /// assert!(rules.multi_stone_suicide);
    /// ```
    pub fn apply_update(&mut self, key: &str, value: &str) -> Result<&mut Self> {
        match key {
            "ko" => self.ko_rule = value.parse()?,
            "scoring" => self.scoring_rule = value.parse()?,
            "score" => {} // deprecated alias; accepted but never mutates
            "tax" => self.tax_rule = value.parse()?,
            "suicide" => self.multi_stone_suicide = parse_bool(value)?,
            "hasButton" => self.has_button = parse_bool(value)?,
            "whiteHandicapBonus" => self.white_handicap_bonus = value.parse()?,
            "friendlyPassOk" => self.friendly_pass_ok = parse_bool(value)?,
            _ => return Err(RulesError::UnknownUpdateKey(key.to_string())),
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::kind::{KoRule, TaxRule};

    #[test]
    fn test_update_enum_fields() {
        let mut rules = Ruleset::tromp_taylorish();
        rules.apply_update("ko", "SPIGHT").unwrap();
        assert_eq!(rules.ko_rule, KoRule::Spight);

        rules.apply_update("tax", "SEKI").unwrap();
        assert_eq!(rules.tax_rule, TaxRule::Seki);
    }

    #[test]
    fn test_update_bool_fields() {
        let mut rules = Ruleset::tromp_taylorish();
        rules.apply_update("suicide", "true").unwrap();
        assert!(rules.multi_stone_suicide);

        // Capitalized literals are also accepted.
        rules.apply_update("hasButton", "True").unwrap();
        assert!(rules.has_button);
        rules.apply_update("friendlyPassOk", "False").unwrap();
        assert!(!rules.friendly_pass_ok);
    }

    #[test]
    fn test_update_failure_leaves_receiver_unchanged() {
        let mut rules = Ruleset::tromp_taylorish();
        let before = rules;

        let err = rules.apply_update("suicide", "maybe").unwrap_err();
        assert!(matches!(err, RulesError::InvalidBooleanLiteral(_)));
        assert_eq!(rules, before);

        let err = rules.apply_update("ko", "positional").unwrap_err();
        assert!(matches!(err, RulesError::InvalidRule { .. }));
        assert_eq!(rules, before);
    }

    #[test]
    fn test_unknown_key() {
        let mut rules = Ruleset::tromp_taylorish();
        let err = rules.apply_update("bogusKey", "x").unwrap_err();
        match err {
            RulesError::UnknownUpdateKey(key) => assert_eq!(key, "bogusKey"),
            other => panic!("expected UnknownUpdateKey, got {other:?}"),
        }
    }

    #[test]
    fn test_score_alias_is_accepted_noop() {
        let mut rules = Ruleset::tromp_taylorish();
        let before = rules;
        rules.apply_update("score", "TERRITORY").unwrap();
        assert_eq!(rules, before);
    }

    #[test]
    fn test_update_returns_receiver_for_chaining() {
        let mut rules = Ruleset::tromp_taylorish();
        rules
            .apply_update("ko", "SIMPLE")
            .and_then(|r| r.apply_update("scoring", "TERRITORY"))
            .unwrap();
        assert_eq!(rules.ko_rule, KoRule::Simple);
    }
}
