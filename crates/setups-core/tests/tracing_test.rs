//! Tests for the setups tracing setup.

use std::collections::HashSet;
use std::sync::Mutex;

use setups_core::tracing::fields;
use setups_core::tracing::setup::{default_filter, init_tracing, resolve_filter};

/// Serializes tests that touch SETUPS_LOG.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

fn rendered(verbose: bool) -> String {
    resolve_filter(verbose).to_string().to_lowercase()
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing(false);
    init_tracing(true);
    init_tracing(false);
}

#[test]
fn test_invalid_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("SETUPS_LOG", "this_is_garbage=not_a_level");
    let quiet = rendered(false);
    let verbose = rendered(true);
    std::env::remove_var("SETUPS_LOG");

    assert!(quiet.contains("setups_core=warn"), "got {quiet}");
    assert!(verbose.contains("setups_core=debug"), "got {verbose}");
    assert!(!quiet.contains("this_is_garbage"));
}

#[test]
fn test_unset_filter_uses_default() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::remove_var("SETUPS_LOG");
    let filter = rendered(false);
    assert!(filter.contains("setups_cli=warn"), "got {filter}");
}

#[test]
fn test_valid_filter_is_honoured() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("SETUPS_LOG", "setups_core::config=trace");
    let filter = rendered(false);
    std::env::remove_var("SETUPS_LOG");

    assert!(filter.contains("setups_core::config=trace"), "got {filter}");
    assert!(!filter.contains("setups_core=warn"));
}

#[test]
fn test_default_filter_levels() {
    assert!(default_filter(false).contains("setups_core=warn"));
    assert!(default_filter(true).contains("setups_core=debug"));
}

#[test]
fn test_field_names_are_distinct() {
    let names = [
        fields::PROJECT,
        fields::LICENSE,
        fields::LICENSE_ATTEMPTS,
        fields::PATH,
        fields::BYTES,
    ];
    let unique: HashSet<&str> = names.iter().copied().collect();
    assert_eq!(unique.len(), names.len());
    assert!(names.iter().all(|n| !n.is_empty() && !n.contains(' ')));
}
