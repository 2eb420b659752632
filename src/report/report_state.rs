//! Report state
//!
//! A failed generation leaves the previously displayed report untouched; the
//! new report only replaces the old one on success.

use crate::ai::ReportData;

/// Industry report state
#[derive(Debug, Default)]
pub struct ReportState {
    report: Option<ReportData>,
    loading: bool,
}

impl ReportState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&self) -> Option<&ReportData> {
        self.report.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Mark a generation request in flight; the previous report stays visible
    pub fn start(&mut self) {
        self.loading = true;
    }

    /// Replace the report with a freshly generated one
    pub fn complete(&mut self, data: ReportData) {
        self.report = Some(data);
        self.loading = false;
    }

    /// Generation failed: keep whatever was displayed before
    pub fn fail(&mut self) {
        self.loading = false;
    }
}

#[cfg(test)]
#[path = "report_state_tests.rs"]
mod report_state_tests;
