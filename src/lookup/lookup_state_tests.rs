//! Tests for generation stamping and hit sanitizing

use proptest::prelude::*;

use super::*;

#[test]
fn test_begin_request_increments_generation() {
    let mut lookup = LookupState::new(5);
    let first = lookup.begin_request();
    let second = lookup.begin_request();

    assert_eq!(second, first + 1);
    assert!(lookup.is_searching());
}

#[test]
fn test_only_latest_generation_accepted() {
    let mut lookup = LookupState::new(5);
    let stale = lookup.begin_request();
    let current = lookup.begin_request();

    // Responses arrive out of order: current first, stale later
    assert!(lookup.accept(current));
    assert!(!lookup.accept(stale));
}

#[test]
fn test_stale_response_after_current_is_discarded() {
    let mut lookup = LookupState::new(5);
    let stale = lookup.begin_request();
    let current = lookup.begin_request();

    // Stale reply arrives before the current one
    assert!(!lookup.accept(stale));
    assert!(lookup.is_searching());
    assert!(lookup.accept(current));
    assert!(!lookup.is_searching());
}

#[test]
fn test_invalidate_makes_in_flight_reply_stale() {
    let mut lookup = LookupState::new(5);
    let generation = lookup.begin_request();

    lookup.invalidate();
    assert!(!lookup.is_searching());
    assert!(!lookup.accept(generation));
}

#[test]
fn test_sanitize_dedups_keeping_first_occurrence() {
    let lookup = LookupState::new(5);
    let hits = vec![
        CompanyHit::with_industry("寶雅", "百貨零售業"),
        CompanyHit::new("寶島眼鏡"),
        CompanyHit::new("寶雅"), // duplicate, later occurrence dropped
    ];

    let clean = lookup.sanitize(hits);
    assert_eq!(clean.len(), 2);
    assert_eq!(clean[0].name, "寶雅");
    assert_eq!(clean[0].industry.as_deref(), Some("百貨零售業"));
    assert_eq!(clean[1].name, "寶島眼鏡");
}

#[test]
fn test_sanitize_caps_at_max_suggestions() {
    let lookup = LookupState::new(5);
    let hits: Vec<CompanyHit> = (0..9).map(|i| CompanyHit::new(format!("公司{i}"))).collect();

    let clean = lookup.sanitize(hits);
    assert_eq!(clean.len(), 5);
    assert_eq!(clean[0].name, "公司0");
    assert_eq!(clean[4].name, "公司4");
}

// Sanitized output never exceeds the cap, never contains duplicate names,
// and preserves input order.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_sanitize_invariants(
        names in prop::collection::vec("[a-f]{1,3}", 0..20),
        cap in 1usize..8,
    ) {
        let lookup = LookupState::new(cap);
        let hits: Vec<CompanyHit> = names.iter().map(CompanyHit::new).collect();
        let clean = lookup.sanitize(hits);

        prop_assert!(clean.len() <= cap);
        for (i, hit) in clean.iter().enumerate() {
            prop_assert!(clean[..i].iter().all(|h| h.name != hit.name));
        }

        // Order preserved: positions in the input are strictly increasing
        let mut last_pos = None;
        for hit in &clean {
            let pos = names.iter().position(|n| n == &hit.name).unwrap();
            if let Some(prev) = last_pos {
                prop_assert!(pos > prev);
            }
            last_pos = Some(pos);
        }
    }
}
