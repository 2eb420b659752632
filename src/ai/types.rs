//! Payload types for the Gemini collaborator boundary
//!
//! These shapes are the stable contract between the UI and the AI worker:
//! lookup hits, the structured report, the structured solution, and the
//! request/response messages carried over the worker channels.

use serde::Deserialize;

/// A single company candidate returned by the lookup collaborator
///
/// The industry label is optional: the lookup prompt asks for it, but the
/// model does not always supply one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyHit {
    pub name: String,
    pub industry: Option<String>,
}

impl CompanyHit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            industry: None,
        }
    }

    pub fn with_industry(name: impl Into<String>, industry: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            industry: Some(industry.into()),
        }
    }
}

/// One trend or pain-point entry in a generated report
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportItem {
    pub title: String,
    pub content: String,
}

/// Structured industry report returned by the report collaborator
///
/// Field names match the JSON schema sent with the request (camelCase).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub trends: Vec<ReportItem>,
    pub pain_points: Vec<ReportItem>,
}

impl ReportData {
    /// Comma-joined pain-point titles, used as input for the solution request
    pub fn pain_point_titles(&self) -> String {
        self.pain_points
            .iter()
            .map(|p| p.title.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Structured solution recommendation returned by the solution collaborator
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionData {
    pub title: String,
    pub description: String,
    pub department: String,
    pub reason: String,
    pub sales_pitch: String,
    pub target_pain_point: String,
}

/// Request messages sent to the AI worker thread
#[derive(Debug)]
pub enum AiRequest {
    /// Company-name lookup for the autocomplete dropdown
    Lookup {
        query: String,
        /// Generation stamp; only the latest generation's reply may be applied
        generation: u64,
    },
    /// Background blurb for a just-confirmed company
    Background {
        company: String,
        /// Selection generation; a re-selection makes earlier replies stale
        generation: u64,
    },
    /// Industry trend / pain-point report
    Report {
        company: String,
        industry: String,
        notes: String,
    },
    /// Vendor solution recommendation matched to the report's pain points
    Solution {
        company: String,
        industry: String,
        pain_points: String,
    },
}

/// Response messages received from the AI worker thread
#[derive(Debug)]
pub enum AiResponse {
    /// Lookup result; an empty list is valid and closes the dropdown.
    /// Lookup failures arrive as an empty list (best-effort tier).
    Suggestions {
        hits: Vec<CompanyHit>,
        generation: u64,
    },
    /// Background blurb; failures arrive as a fallback text (best-effort tier)
    Background { text: String, generation: u64 },
    /// Report result; errors are user-facing and carried through
    Report(Result<ReportData, String>),
    /// Solution result; errors are user-facing and carried through
    Solution(Result<SolutionData, String>),
}
