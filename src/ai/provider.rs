//! AI provider abstraction
//!
//! Defines the AiError types and the Gemini client used for all three
//! collaborator calls (lookup, background, report/solution generation).

use thiserror::Error;

mod gemini;

pub use gemini::GeminiClient;

/// Errors that can occur during AI operations
#[derive(Debug, Error)]
pub enum AiError {
    /// AI is not configured (missing API key)
    #[error("AI not configured: {0}")]
    NotConfigured(String),

    /// Network error during API request
    #[error("Network error: {0}")]
    Network(String),

    /// API returned an error response
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Failed to parse API response
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_status_code() {
        let err = AiError::Api {
            code: 429,
            message: "quota exceeded".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("429"));
        assert!(text.contains("quota exceeded"));
    }

    #[test]
    fn test_not_configured_display() {
        let err = AiError::NotConfigured("missing API key".to_string());
        assert!(err.to_string().contains("missing API key"));
    }
}
