//! Common utilities for the tagwrap engine.
//!
//! This crate provides shared infrastructure used by all tagwrap components:
//! - **Errors** - caller contract violations raised by the public API
//! - **Warnings** - soft, non-fatal diagnostics attached to results
//! - **Warning System** - colored, deduplicated terminal output

pub mod error;
pub mod warning;

pub use error::{WrapError, WrapResult, WrapWarning};
