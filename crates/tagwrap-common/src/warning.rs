//! Engine warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times
//! when many labels are re-measured with the same degenerate text.
//! The registry only decides what gets printed; it never feeds back into a
//! wrap result, so concurrent callers stay independent of each other.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Record a warning, returning whether it had not been seen before.
fn record(key: String) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Warn about degenerate input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Wrap", "unbreakable token 'aaaaaaaa' is 240px wide");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record(format!("[{component}] {message}")) {
        eprintln!("{YELLOW}[tagwrap {component}] ⚠ {message}{RESET}");
    }
}

/// Clear all recorded warnings so they are reported again.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deduplicates_until_cleared() {
        let key = "[Test] record dedup".to_string();
        assert!(record(key.clone()));
        assert!(!record(key.clone()));
        clear_warnings();
        assert!(record(key));
    }

    #[test]
    fn test_warn_once_does_not_panic_on_repeat() {
        warn_once("Test", "repeated message");
        warn_once("Test", "repeated message");
    }
}
