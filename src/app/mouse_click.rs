//! Mouse click handling
//!
//! A click on a dropdown row is place-cursor-and-confirm as one atomic
//! action; it is resolved before any focus change, so the dropdown is never
//! torn down under a pending selection.

use super::state::{App, Focus};
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>) {
    if app.notification.is_visible() {
        app.notification.dismiss();
        return;
    }

    match region {
        Some(Region::SuggestionRow(index)) => {
            if let Some(hit) = app.dropdown.confirm_at(index) {
                app.confirm_suggestion(hit);
            }
        }
        Some(Region::Industry) => app.set_focus(Focus::Industry),
        Some(Region::Company) => app.set_focus(Focus::Company),
        Some(Region::Notes) => app.set_focus(Focus::Notes),
        Some(Region::ReportButton) => app.request_report(),
        Some(Region::SolutionButton) => app.request_solution(),
        None => {}
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
