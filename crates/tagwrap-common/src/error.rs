//! Error and warning types shared by the tagwrap crates.
//!
//! Errors are caller contract violations: the engine is pure and
//! deterministic, so the same input always fails the same way and there is
//! nothing to retry. Warnings describe degenerate input that was still
//! handled and are carried on the result next to the computed bounds.

use serde::Serialize;
use thiserror::Error;

/// A contract violation detected at the public API boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WrapError {
    /// An argument violated the documented preconditions of the call.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// Human readable description of the violated constraint.
        reason: String,
    },
}

impl WrapError {
    /// Shorthand for building an [`WrapError::InvalidArgument`].
    #[must_use]
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type alias for engine operations.
pub type WrapResult<T> = Result<T, WrapError>;

/// A soft diagnostic raised while wrapping. Never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WrapWarning {
    /// A run of content without any whitespace is wider than the limit and
    /// was emitted as an oversized line instead of being split.
    #[error("unbreakable token '{token}' is {width}px wide, exceeding the {limit}px limit")]
    UnbreakableToken {
        /// The overflowing line content, markup stripped.
        token: String,
        /// Measured width of the token.
        width: u32,
        /// The width limit the token exceeds.
        limit: u32,
    },
}
