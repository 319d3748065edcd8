//! Named preset catalog for real-world rule families.
//!
//! Preset names are matched leniently: surrounding whitespace is trimmed,
//! hyphens, underscores, and internal spaces are stripped, and the result
//! is lowercased before lookup. `"Chinese"`, `"chi nese"`, and `"CHI-NESE"`
//! all resolve to the same preset.
//!
//! [`Ruleset::from_preset`] is total: an unrecognized or empty name falls
//! back to the Tromp-Taylor-ish default, so the return value alone cannot
//! distinguish "unknown name" from an explicit Tromp-Taylor request. Use
//! [`Ruleset::try_from_preset`] where that distinction matters.

use super::kind::{KoRule, ScoringRule, TaxRule, WhiteHandicapBonus};
use super::ruleset::Ruleset;

impl Ruleset {
    /// Tromp-Taylor-like rules: positional superko, area scoring, no tax,
    /// komi 7.5. The fallback for unrecognized preset names.
    #[must_use]
    pub const fn tromp_taylorish() -> Ruleset {
        Ruleset::new(
            KoRule::Positional,
            ScoringRule::Area,
            TaxRule::None,
            WhiteHandicapBonus::Zero,
            false,
            false,
            false,
            7.5,
        )
    }

    /// Simple-ko territory rules with seki tax, komi 7.5.
    ///
    /// Only reachable as an explicit constructor; no preset name resolves
    /// to it.
    #[must_use]
    pub const fn simple_territory() -> Ruleset {
        Ruleset::new(
            KoRule::Simple,
            ScoringRule::Territory,
            TaxRule::Seki,
            WhiteHandicapBonus::Zero,
            false,
            false,
            false,
            7.5,
        )
    }

    /// Resolve a preset name, falling back to [`Ruleset::tromp_taylorish`]
    /// for anything unrecognized (including the empty string).
    ///
    /// ```
    /// use go_rules::Ruleset;
    ///
    /// assert_eq!(Ruleset::from_preset("AGA"), Ruleset::from_preset("aga"));
    /// assert_eq!(Ruleset::from_preset("bogus"), Ruleset::tromp_taylorish());
    /// ```
    #[must_use]
    pub fn from_preset(name: &str) -> Ruleset {
        Ruleset::try_from_preset(name).unwrap_or_else(Ruleset::tromp_taylorish)
    }

    /// Resolve a preset name, then override komi with a separately
    /// negotiated value.
    #[must_use]
    pub fn from_preset_with_komi(name: &str, komi: f32) -> Ruleset {
        let mut rules = Ruleset::from_preset(name);
        rules.komi = komi;
        rules
    }

    /// Strict preset resolution: `None` for unrecognized names.
    ///
    /// `"tromp-taylor-ish"` (in any separator/case spelling) is a
    /// recognized name here, so callers can still request the default
    /// explicitly.
    #[must_use]
    pub fn try_from_preset(name: &str) -> Option<Ruleset> {
        let key = normalize_preset_name(name);
        let rules = match key.as_str() {
            "tromptaylorish" => Ruleset::tromp_taylorish(),
            "japanese" | "korean" => Ruleset::new(
                KoRule::Simple,
                ScoringRule::Territory,
                TaxRule::Seki,
                WhiteHandicapBonus::Zero,
                false,
                false,
                false,
                6.5,
            ),
            "chinese" => Ruleset::new(
                KoRule::Simple,
                ScoringRule::Area,
                TaxRule::None,
                WhiteHandicapBonus::N,
                false,
                false,
                false,
                7.5,
            ),
            "chineseogs" | "chinesekgs" => Ruleset::new(
                KoRule::Positional,
                ScoringRule::Area,
                TaxRule::None,
                WhiteHandicapBonus::N,
                false,
                false,
                true,
                7.5,
            ),
            "ancientarea" | "stonescoring" => Ruleset::new(
                KoRule::Simple,
                ScoringRule::Area,
                TaxRule::All,
                WhiteHandicapBonus::Zero,
                false,
                false,
                true,
                7.5,
            ),
            "ancientterritory" => Ruleset::new(
                KoRule::Simple,
                ScoringRule::Territory,
                TaxRule::All,
                WhiteHandicapBonus::Zero,
                false,
                false,
                false,
                6.5,
            ),
            "agabutton" => Ruleset::new(
                KoRule::Situational,
                ScoringRule::Area,
                TaxRule::None,
                WhiteHandicapBonus::NMinusOne,
                false,
                true,
                true,
                7.0,
            ),
            "aga" | "bga" | "french" => Ruleset::new(
                KoRule::Situational,
                ScoringRule::Area,
                TaxRule::None,
                WhiteHandicapBonus::NMinusOne,
                false,
                false,
                true,
                7.5,
            ),
            "newzealand" | "nz" => Ruleset::new(
                KoRule::Situational,
                ScoringRule::Area,
                TaxRule::None,
                WhiteHandicapBonus::Zero,
                true,
                false,
                true,
                7.5,
            ),
            "goe" | "ing" => Ruleset::new(
                KoRule::Positional,
                ScoringRule::Area,
                TaxRule::None,
                WhiteHandicapBonus::Zero,
                true,
                false,
                true,
                7.5,
            ),
            _ => return None,
        };
        Some(rules)
    }
}

/// Trim, strip separators, and lowercase a preset name for lookup.
fn normalize_preset_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        assert_eq!(normalize_preset_name("  Chinese "), "chinese");
        assert_eq!(normalize_preset_name("CHI-NESE"), "chinese");
        assert_eq!(normalize_preset_name("chi nese"), "chinese");
        assert_eq!(normalize_preset_name("new_zealand"), "newzealand");
        assert_eq!(normalize_preset_name(""), "");
    }

    #[test]
    fn test_lenient_fallback() {
        let default = Ruleset::tromp_taylorish();
        assert_eq!(Ruleset::from_preset("not-a-real-ruleset"), default);
        assert_eq!(Ruleset::from_preset(""), default);
    }

    #[test]
    fn test_strict_resolution() {
        assert!(Ruleset::try_from_preset("not-a-real-ruleset").is_none());
        assert!(Ruleset::try_from_preset("").is_none());
        assert_eq!(
            Ruleset::try_from_preset("Tromp-Taylor-ish"),
            Some(Ruleset::tromp_taylorish())
        );
        // The explicit-constructor preset has no name.
        assert!(Ruleset::try_from_preset("simple territory").is_none());
    }

    #[test]
    fn test_komi_override() {
        let rules = Ruleset::from_preset_with_komi("japanese", 0.5);
        assert_eq!(rules.komi, 0.5);
        assert!(rules.equals_ignoring_komi(&Ruleset::from_preset("japanese")));
    }
}
