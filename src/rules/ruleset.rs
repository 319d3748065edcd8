//! The ruleset aggregate value.
//!
//! A [`Ruleset`] bundles the four rule categories with three booleans and
//! the komi into one validated configuration snapshot. Downstream game
//! logic treats it as immutable per turn; mutation only happens through
//! explicit calls ([`Ruleset::apply_update`]), never implicitly.
//!
//! ## Text forms
//!
//! - `Display` / [`Ruleset::to_string_no_komi`]: the human-readable form
//!   consumed by logs and UIs. The exact byte layout is load-bearing for
//!   existing consumers, including the repeated White Handicap Bonus
//!   clause for non-zero bonuses; see the unit tests.
//! - [`Ruleset::to_json`] / [`Ruleset::from_json`]: the machine-readable
//!   form. Rule categories are encoded as their integer ordinals here, and
//!   `whiteHandicapBonus`/`komi` are omitted when they hold their zero
//!   value. Anything needing the token form should go through `Display`
//!   and `FromStr` instead.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::kind::{KoRule, ScoringRule, TaxRule, WhiteHandicapBonus};

/// Complete rule configuration for a single game.
///
/// Construct one directly with [`Ruleset::new`], look one up by name with
/// [`Ruleset::from_preset`], or start from an existing value and call
/// [`Ruleset::apply_update`].
///
/// ```
/// use go_rules::{Ruleset, ScoringRule};
///
/// let rules = Ruleset::from_preset("japanese");
/// assert_eq!(rules.scoring_rule, ScoringRule::Territory);
/// assert_eq!(rules.komi, 6.5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ruleset {
    /// Which board repetitions are forbidden.
    #[serde(rename = "ko")]
    pub ko_rule: KoRule,

    /// Area or territory counting.
    #[serde(rename = "scoring")]
    pub scoring_rule: ScoringRule,

    /// Scoring-point exclusions.
    #[serde(rename = "tax")]
    pub tax_rule: TaxRule,

    /// White's compensation for handicap stones.
    #[serde(
        rename = "whiteHandicapBonus",
        default,
        skip_serializing_if = "WhiteHandicapBonus::is_zero"
    )]
    pub white_handicap_bonus: WhiteHandicapBonus,

    /// Whether multi-stone suicide is a legal move.
    #[serde(rename = "suicide")]
    pub multi_stone_suicide: bool,

    /// Whether the button (a half-point parity device) is in play.
    #[serde(rename = "hasButton")]
    pub has_button: bool,

    /// Whether a friendly pass ends the game without penalty.
    #[serde(rename = "friendlyPassOk")]
    pub friendly_pass_ok: bool,

    /// Compensation points for White. Typically an integer or half-integer;
    /// see [`Ruleset::komi_is_int_or_half_int`]. Not enforced here.
    #[serde(default, skip_serializing_if = "komi_is_zero")]
    pub komi: f32,
}

fn komi_is_zero(komi: &f32) -> bool {
    *komi == 0.0
}

impl Ruleset {
    /// Conventional komi under territory scoring.
    pub const KOMI_DEFAULT: f32 = 6.5;

    /// Lowest komi accepted from user input.
    pub const MIN_USER_KOMI: f32 = -150.0;

    /// Highest komi accepted from user input.
    pub const MAX_USER_KOMI: f32 = 150.0;

    /// Construct a ruleset from explicit field values.
    ///
    /// Pure aggregation: the enum fields are already valid by construction
    /// and komi is deliberately not range- or parity-checked (see the
    /// advisory predicates below).
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub const fn new(
        ko_rule: KoRule,
        scoring_rule: ScoringRule,
        tax_rule: TaxRule,
        white_handicap_bonus: WhiteHandicapBonus,
        multi_stone_suicide: bool,
        has_button: bool,
        friendly_pass_ok: bool,
        komi: f32,
    ) -> Self {
        Self {
            ko_rule,
            scoring_rule,
            tax_rule,
            white_handicap_bonus,
            multi_stone_suicide,
            has_button,
            friendly_pass_ok,
            komi,
        }
    }

    /// Compare every field except komi.
    ///
    /// Used where komi is negotiated separately from rule identity, e.g.
    /// when deciding whether two games were played under "the same rules".
    #[must_use]
    pub fn equals_ignoring_komi(&self, other: &Ruleset) -> bool {
        self.ko_rule == other.ko_rule
            && self.scoring_rule == other.scoring_rule
            && self.tax_rule == other.tax_rule
            && self.white_handicap_bonus == other.white_handicap_bonus
            && self.multi_stone_suicide == other.multi_stone_suicide
            && self.has_button == other.has_button
            && self.friendly_pass_ok == other.friendly_pass_ok
    }

    /// Whether the final score must come out to a whole number.
    ///
    /// True exactly when komi's integrality and the button disagree: an
    /// integer komi without a button, or a fractional komi with one.
    ///
    /// ```
    /// use go_rules::Ruleset;
    ///
    /// let mut rules = Ruleset::tromp_taylorish();
    /// rules.komi = 6.0;
    /// assert!(rules.game_result_will_be_integer());
    /// rules.komi = 6.5;
    /// assert!(!rules.game_result_will_be_integer());
    /// ```
    #[must_use]
    pub fn game_result_will_be_integer(&self) -> bool {
        // Non-finite komi (a prior construction error) never counts as
        // integral.
        let komi_is_integer = self.komi.is_finite() && self.komi.trunc() == self.komi;
        komi_is_integer != self.has_button
    }

    /// Advisory predicate: is `komi` a finite integer or half-integer?
    ///
    /// Callers validating user-supplied komi should check this before
    /// constructing or updating a ruleset. It is intentionally not enforced
    /// by [`Ruleset::new`], so experimental komi values stay constructible.
    #[must_use]
    pub fn komi_is_int_or_half_int(komi: f32) -> bool {
        komi.is_finite() && (komi * 2.0).trunc() == komi * 2.0
    }

    /// Advisory predicate: is `komi` within the range accepted from users?
    ///
    /// Same advisory-only contract as [`Ruleset::komi_is_int_or_half_int`].
    #[must_use]
    pub fn komi_is_in_user_range(komi: f32) -> bool {
        (Self::MIN_USER_KOMI..=Self::MAX_USER_KOMI).contains(&komi)
    }

    /// Human-readable rendering without the komi clause.
    ///
    /// A non-zero White Handicap Bonus appears twice, once in the fixed
    /// leading section and once as a trailing flag. Existing consumers
    /// parse this layout byte-for-byte, so the repetition stays.
    #[must_use]
    pub fn to_string_no_komi(&self) -> String {
        let mut out = String::new();
        out.push_str("Ko Rule: ");
        out.push_str(self.ko_rule.token());
        out.push_str(", Scoring Rule: ");
        out.push_str(self.scoring_rule.token());
        out.push_str(", Tax Rule: ");
        out.push_str(self.tax_rule.token());
        out.push_str(", White Handicap Bonus: ");
        out.push_str(self.white_handicap_bonus.token());
        if self.multi_stone_suicide {
            out.push_str(", Suicide Allowed");
        }
        if self.has_button {
            out.push_str(", Has Button");
        }
        if !self.white_handicap_bonus.is_zero() {
            out.push_str(", White Handicap Bonus: ");
            out.push_str(self.white_handicap_bonus.token());
        }
        if self.friendly_pass_ok {
            out.push_str(", Friendly Pass OK");
        }
        out
    }

    /// Serialize to the JSON wire form.
    ///
    /// Rule categories come out as integer ordinals; `whiteHandicapBonus`
    /// and `komi` are omitted when zero.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Deserialize from the JSON wire form produced by [`Ruleset::to_json`].
    ///
    /// Omitted fields read back as their zero values.
    pub fn from_json(bytes: &[u8]) -> Result<Ruleset> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl fmt::Display for Ruleset {
    /// The no-komi rendering followed by a komi clause. Komi prints as the
    /// shortest decimal that round-trips (`7.5`, `7`, `6.5`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Komi: {}", self.to_string_no_komi(), self.komi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equals_ignoring_komi() {
        let mut a = Ruleset::tromp_taylorish();
        let mut b = Ruleset::tromp_taylorish();
        b.komi = 0.5;
        assert!(a.equals_ignoring_komi(&b));
        assert_ne!(a, b);

        a.has_button = true;
        assert!(!a.equals_ignoring_komi(&b));
    }

    #[test]
    fn test_game_result_will_be_integer() {
        let mut rules = Ruleset::tromp_taylorish();

        rules.komi = 6.0;
        rules.has_button = false;
        assert!(rules.game_result_will_be_integer());

        rules.komi = 6.5;
        assert!(!rules.game_result_will_be_integer());

        rules.has_button = true;
        assert!(rules.game_result_will_be_integer());

        rules.komi = 6.0;
        assert!(!rules.game_result_will_be_integer());
    }

    #[test]
    fn test_komi_is_int_or_half_int() {
        assert!(Ruleset::komi_is_int_or_half_int(7.5));
        assert!(Ruleset::komi_is_int_or_half_int(7.0));
        assert!(Ruleset::komi_is_int_or_half_int(0.0));
        assert!(Ruleset::komi_is_int_or_half_int(-6.5));
        assert!(!Ruleset::komi_is_int_or_half_int(7.25));
        assert!(!Ruleset::komi_is_int_or_half_int(f32::NAN));
        assert!(!Ruleset::komi_is_int_or_half_int(f32::INFINITY));
    }

    #[test]
    fn test_komi_user_range() {
        assert!(Ruleset::komi_is_in_user_range(Ruleset::KOMI_DEFAULT));
        assert!(Ruleset::komi_is_in_user_range(-150.0));
        assert!(Ruleset::komi_is_in_user_range(150.0));
        assert!(!Ruleset::komi_is_in_user_range(150.5));
        assert!(!Ruleset::komi_is_in_user_range(f32::NAN));
    }

    #[test]
    fn test_display_default_preset() {
        let rules = Ruleset::tromp_taylorish();
        assert_eq!(
            rules.to_string(),
            "Ko Rule: POSITIONAL, Scoring Rule: AREA, Tax Rule: NONE, \
             White Handicap Bonus: ZERO, Komi: 7.5"
        );
    }

    #[test]
    fn test_display_flags_and_repeated_bonus() {
        let rules = Ruleset::from_preset("new zealand");
        assert_eq!(
            rules.to_string(),
            "Ko Rule: SITUATIONAL, Scoring Rule: AREA, Tax Rule: NONE, \
             White Handicap Bonus: ZERO, Suicide Allowed, Friendly Pass OK, Komi: 7.5"
        );

        // Non-zero bonus shows up twice, with the button flag in between.
        let rules = Ruleset::from_preset("aga-button");
        assert_eq!(
            rules.to_string(),
            "Ko Rule: SITUATIONAL, Scoring Rule: AREA, Tax Rule: NONE, \
             White Handicap Bonus: N-1, Has Button, White Handicap Bonus: N-1, \
             Friendly Pass OK, Komi: 7"
        );
    }

    #[test]
    fn test_json_omits_zero_fields() {
        let rules = Ruleset::new(
            KoRule::Positional,
            ScoringRule::Area,
            TaxRule::None,
            WhiteHandicapBonus::Zero,
            false,
            false,
            false,
            0.0,
        );
        let json = String::from_utf8(rules.to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"ko":1,"scoring":0,"tax":0,"suicide":false,"hasButton":false,"friendlyPassOk":false}"#
        );
    }

    #[test]
    fn test_json_includes_nonzero_fields() {
        let rules = Ruleset::from_preset("chinese");
        let json = String::from_utf8(rules.to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"ko":0,"scoring":0,"tax":0,"whiteHandicapBonus":1,"suicide":false,"hasButton":false,"friendlyPassOk":false,"komi":7.5}"#
        );
    }

    #[test]
    fn test_json_round_trip() {
        let rules = Ruleset::from_preset("aga");
        let bytes = rules.to_json().unwrap();
        assert_eq!(Ruleset::from_json(&bytes).unwrap(), rules);

        // Omitted fields read back as zero values.
        let sparse: Ruleset = Ruleset::from_json(
            br#"{"ko":0,"scoring":1,"tax":1,"suicide":false,"hasButton":false,"friendlyPassOk":false}"#,
        )
        .unwrap();
        assert_eq!(sparse.white_handicap_bonus, WhiteHandicapBonus::Zero);
        assert_eq!(sparse.komi, 0.0);
    }

    #[test]
    fn test_json_rejects_out_of_range_ordinal() {
        let result = Ruleset::from_json(
            br#"{"ko":9,"scoring":0,"tax":0,"suicide":false,"hasButton":false,"friendlyPassOk":false}"#,
        );
        assert!(result.is_err());
    }
}
