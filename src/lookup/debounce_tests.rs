//! Tests for the debounce timer
//!
//! Deadlines are checked with explicit instants rather than sleeps.

use std::time::{Duration, Instant};

use super::*;

#[test]
fn test_poll_before_deadline_yields_nothing() {
    let mut debouncer = Debouncer::new(600);
    debouncer.schedule("寶".to_string());

    assert!(debouncer.is_pending());
    assert_eq!(debouncer.poll_at(Instant::now()), None);
    assert!(debouncer.is_pending());
}

#[test]
fn test_poll_after_deadline_takes_query_once() {
    let mut debouncer = Debouncer::new(600);
    debouncer.schedule("寶".to_string());

    let later = Instant::now() + Duration::from_millis(601);
    assert_eq!(debouncer.poll_at(later), Some("寶".to_string()));

    // A settled query fires exactly once
    assert_eq!(debouncer.poll_at(later), None);
    assert!(!debouncer.is_pending());
}

#[test]
fn test_rapid_edits_keep_only_final_value() {
    let mut debouncer = Debouncer::new(600);
    debouncer.schedule("寶".to_string());
    debouncer.schedule("寶島".to_string());
    debouncer.schedule("寶島眼".to_string());

    let later = Instant::now() + Duration::from_secs(2);
    assert_eq!(debouncer.poll_at(later), Some("寶島眼".to_string()));
    assert_eq!(debouncer.poll_at(later), None);
}

#[test]
fn test_reschedule_pushes_deadline_out() {
    let mut debouncer = Debouncer::new(600);
    debouncer.schedule("a".to_string());
    let first_deadline = Instant::now() + Duration::from_millis(300);

    // Second edit mid-window; the first deadline must no longer fire
    debouncer.schedule("ab".to_string());
    assert_eq!(debouncer.poll_at(first_deadline), None);
}

#[test]
fn test_cancel_discards_pending_query() {
    let mut debouncer = Debouncer::new(600);
    debouncer.schedule("寶".to_string());
    debouncer.cancel();

    assert!(!debouncer.is_pending());
    let later = Instant::now() + Duration::from_secs(2);
    assert_eq!(debouncer.poll_at(later), None);
}

#[test]
fn test_zero_window_settles_immediately() {
    let mut debouncer = Debouncer::new(0);
    debouncer.schedule("q".to_string());
    assert_eq!(debouncer.poll(), Some("q".to_string()));
}
