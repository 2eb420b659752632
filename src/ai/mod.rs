//! Gemini collaborator boundary
//!
//! Everything AI-backed lives here: the HTTP client, the prompts, the worker
//! thread, and the payload types shared with the UI.

pub mod prompts;
pub mod provider;
pub mod types;
pub mod worker;

pub use provider::{AiError, GeminiClient};
pub use types::{AiRequest, AiResponse, CompanyHit, ReportData, ReportItem, SolutionData};
pub use worker::spawn_worker;
