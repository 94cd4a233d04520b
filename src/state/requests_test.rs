use super::*;

#[test]
fn a_fresh_token_is_current() {
    let mut generation = Generation::default();
    let token = generation.begin();
    assert!(generation.is_current(token));
}

#[test]
fn a_newer_dispatch_invalidates_older_tokens() {
    let mut generation = Generation::default();
    let first = generation.begin();
    let second = generation.begin();
    assert!(!generation.is_current(first));
    assert!(generation.is_current(second));
}

#[test]
fn invalidate_discards_outstanding_tokens() {
    let mut generation = Generation::default();
    let token = generation.begin();
    generation.invalidate();
    assert!(!generation.is_current(token));
}

#[test]
fn last_write_wins_is_closed() {
    // Simulates: dispatch A, dispatch B, response A arrives late.
    let mut generation = Generation::default();
    let a = generation.begin();
    let b = generation.begin();
    // Late response for A must be dropped; B's is applied.
    assert!(!generation.is_current(a));
    assert!(generation.is_current(b));
}
