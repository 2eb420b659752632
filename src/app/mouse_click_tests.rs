//! Tests for mouse click handling

use std::sync::mpsc::{self, Receiver, Sender};

use crate::ai::{AiRequest, AiResponse, CompanyHit, ReportData, ReportItem};
use crate::app::state::{App, Focus, set_text};
use crate::config::Config;
use crate::layout::Region;
use crate::lookup::Debouncer;

use super::handle_click;

fn test_app() -> (App, Receiver<AiRequest>, Sender<AiResponse>) {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let mut app = App::new(Config::default());
    app.debouncer = Debouncer::new(0);
    app.set_channels(request_tx, response_rx);
    (app, request_rx, response_tx)
}

fn sample_report() -> ReportData {
    ReportData {
        trends: vec![ReportItem {
            title: "【全通路】".to_string(),
            content: "線上線下整合加速。".to_string(),
        }],
        pain_points: vec![ReportItem {
            title: "庫存預測失準".to_string(),
            content: "需求波動放大。".to_string(),
        }],
    }
}

#[test]
fn test_click_suggestion_row_confirms_regardless_of_cursor() {
    let (mut app, rx, _tx) = test_app();
    app.dropdown.set_suggestions(vec![
        CompanyHit::with_industry("寶雅", "百貨零售業"),
        CompanyHit::with_industry("寶島眼鏡", "眼鏡零售"),
    ]);
    assert_eq!(app.dropdown.cursor(), None);

    handle_click(&mut app, Some(Region::SuggestionRow(1)));

    assert_eq!(app.company_query(), "寶島眼鏡");
    assert_eq!(app.industry.label(), "眼鏡零售");
    assert!(!app.dropdown.is_open());
    // The confirmation dispatches a background blurb fetch
    assert!(matches!(rx.try_recv().unwrap(), AiRequest::Background { .. }));
}

#[test]
fn test_click_out_of_range_row_is_noop() {
    let (mut app, rx, _tx) = test_app();
    app.dropdown
        .set_suggestions(vec![CompanyHit::new("寶雅")]);

    handle_click(&mut app, Some(Region::SuggestionRow(5)));

    assert!(app.dropdown.is_open());
    assert_eq!(app.company_query(), "");
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_click_field_moves_focus() {
    let (mut app, _rx, _tx) = test_app();
    assert_eq!(app.focus, Focus::Company);

    handle_click(&mut app, Some(Region::Notes));
    assert_eq!(app.focus, Focus::Notes);

    handle_click(&mut app, Some(Region::Industry));
    assert_eq!(app.focus, Focus::Industry);
}

#[test]
fn test_click_away_from_company_closes_dropdown() {
    let (mut app, _rx, _tx) = test_app();
    app.dropdown
        .set_suggestions(vec![CompanyHit::new("寶雅")]);

    handle_click(&mut app, Some(Region::Notes));

    assert!(!app.dropdown.is_open());
}

#[test]
fn test_click_report_button_dispatches_request() {
    let (mut app, rx, _tx) = test_app();
    set_text(&mut app.company, "寶雅");

    handle_click(&mut app, Some(Region::ReportButton));

    assert!(app.report.is_loading());
    assert!(matches!(rx.try_recv().unwrap(), AiRequest::Report { .. }));
}

#[test]
fn test_click_solution_button_requires_report() {
    let (mut app, rx, _tx) = test_app();
    set_text(&mut app.company, "寶雅");

    handle_click(&mut app, Some(Region::SolutionButton));
    assert!(app.notification.is_visible());
    assert!(rx.try_recv().is_err());

    app.notification.dismiss();
    app.report.complete(sample_report());
    handle_click(&mut app, Some(Region::SolutionButton));
    assert!(matches!(rx.try_recv().unwrap(), AiRequest::Solution { .. }));
}

#[test]
fn test_click_dismisses_notification_before_anything_else() {
    let (mut app, rx, _tx) = test_app();
    set_text(&mut app.company, "寶雅");
    app.notification.error("生成報告時發生錯誤，請稍後再試。");

    handle_click(&mut app, Some(Region::ReportButton));

    assert!(!app.notification.is_visible());
    // The click only dismissed; no report was requested
    assert!(!app.report.is_loading());
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_click_nowhere_is_noop() {
    let (mut app, _rx, _tx) = test_app();
    handle_click(&mut app, None);
    assert_eq!(app.focus, Focus::Company);
}
