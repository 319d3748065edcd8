//! Error types for ruleset parsing and serialization.
//!
//! All failures are value-returning and local: nothing here aborts the
//! process or is worth retrying, since every input is deterministic text.
//! Callers are expected to surface these directly to whatever collected
//! the offending input (a config UI, an API request, a GTP client).

use thiserror::Error;

/// Errors produced when parsing or serializing ruleset configuration.
#[derive(Debug, Error)]
pub enum RulesError {
    /// A rule token did not match any variant of its category.
    ///
    /// Carries the category name (e.g. `"ko rule"`) so the caller can tell
    /// which field rejected the input.
    #[error("{input:?} is not a valid {rule}")]
    InvalidRule {
        /// Human-readable name of the rule category that rejected the input.
        rule: &'static str,
        /// The rejected input text.
        input: String,
    },

    /// A boolean field received something other than the strict literals
    /// `"true"`/`"True"`/`"false"`/`"False"`.
    #[error("{0:?} is not a boolean literal (expected \"true\" or \"false\")")]
    InvalidBooleanLiteral(String),

    /// An update key was not in the recognized set.
    #[error("{0:?} is not a valid rule key")]
    UnknownUpdateKey(String),

    /// JSON serialization or deserialization failed.
    ///
    /// Not expected in practice (every field is a finite discrete or
    /// primitive type), but the contract allows it for future field types.
    #[error("ruleset serialization failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl RulesError {
    /// Build an [`RulesError::InvalidRule`] for the given category.
    pub(crate) fn invalid_rule(rule: &'static str, input: impl Into<String>) -> Self {
        RulesError::InvalidRule {
            rule,
            input: input.into(),
        }
    }
}

/// Convenience result type for ruleset operations.
pub type Result<T> = std::result::Result<T, RulesError>;
