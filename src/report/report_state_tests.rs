//! Tests for report state transitions

use super::*;
use crate::ai::ReportItem;

fn sample_report(tag: &str) -> ReportData {
    ReportData {
        trends: vec![ReportItem {
            title: format!("【趨勢 {tag}】"),
            content: "內容".to_string(),
        }],
        pain_points: vec![ReportItem {
            title: format!("痛點 {tag}"),
            content: "內容".to_string(),
        }],
    }
}

#[test]
fn test_starts_empty_and_idle() {
    let state = ReportState::new();
    assert!(state.report().is_none());
    assert!(!state.is_loading());
}

#[test]
fn test_start_keeps_previous_report_visible() {
    let mut state = ReportState::new();
    state.complete(sample_report("一"));

    state.start();
    assert!(state.is_loading());
    assert_eq!(state.report().unwrap().pain_points[0].title, "痛點 一");
}

#[test]
fn test_complete_replaces_report() {
    let mut state = ReportState::new();
    state.complete(sample_report("一"));
    state.start();
    state.complete(sample_report("二"));

    assert!(!state.is_loading());
    assert_eq!(state.report().unwrap().pain_points[0].title, "痛點 二");
}

#[test]
fn test_failure_leaves_previous_report_unchanged() {
    let mut state = ReportState::new();
    state.complete(sample_report("一"));
    state.start();
    state.fail();

    assert!(!state.is_loading());
    assert_eq!(state.report().unwrap().pain_points[0].title, "痛點 一");
}
