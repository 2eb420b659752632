//! Google Gemini API client
//!
//! Calls the `generateContent` REST endpoint. Lookup and background requests
//! use the flash model with Google Search grounding; report and solution
//! requests use the pro model with a JSON response schema.

use serde_json::{Value, json};

use super::AiError;
use crate::ai::types::{CompanyHit, ReportData, SolutionData};
use crate::config::GeminiConfig;

/// Gemini API endpoint base
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Google Gemini API client
#[derive(Debug)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    flash_model: String,
    pro_model: String,
}

impl GeminiClient {
    /// Create a Gemini client from configuration
    ///
    /// Returns an error if the API key is missing or empty.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, AiError> {
        let api_key = config
            .api_key
            .as_ref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                AiError::NotConfigured(
                    "Missing API key: set GEMINI_API_KEY or api_key in [gemini] config"
                        .to_string(),
                )
            })?;

        Ok(Self {
            // No request timeout: a slow lookup just keeps the spinner visible
            http: reqwest::Client::new(),
            api_key: api_key.clone(),
            flash_model: config.flash_model.clone(),
            pro_model: config.pro_model.clone(),
        })
    }

    /// Search for real company names matching the query
    ///
    /// Uses the flash model with Google Search grounding. The caller treats
    /// any error as "no suggestions".
    pub async fn search_companies(&self, query: &str) -> Result<Vec<CompanyHit>, AiError> {
        let body = build_grounded_body(&crate::ai::prompts::company_lookup(query));
        let text = self.generate(&self.flash_model, body).await?;
        Ok(parse_company_lines(&text))
    }

    /// Fetch a short background blurb for a confirmed company
    pub async fn fetch_background(&self, company: &str) -> Result<String, AiError> {
        let body = build_grounded_body(&crate::ai::prompts::company_background(company));
        let text = self.generate(&self.flash_model, body).await?;
        Ok(text.trim().to_string())
    }

    /// Generate the industry trend / pain-point report
    pub async fn generate_report(
        &self,
        company: &str,
        industry: &str,
        notes: &str,
    ) -> Result<ReportData, AiError> {
        let prompt = crate::ai::prompts::report(company, industry, notes);
        let body = build_structured_body(&prompt, report_schema());
        let text = self.generate(&self.pro_model, body).await?;
        serde_json::from_str(text.trim()).map_err(|e| AiError::Parse(e.to_string()))
    }

    /// Generate the vendor solution recommendation
    pub async fn generate_solution(
        &self,
        company: &str,
        industry: &str,
        pain_points: &str,
    ) -> Result<SolutionData, AiError> {
        let prompt = crate::ai::prompts::solution(company, industry, pain_points);
        let body = build_structured_body(&prompt, solution_schema());
        let text = self.generate(&self.pro_model, body).await?;
        serde_json::from_str(text.trim()).map_err(|e| AiError::Parse(e.to_string()))
    }

    /// POST a generateContent request and return the concatenated response text
    async fn generate(&self, model: &str, body: Value) -> Result<String, AiError> {
        let url = format!("{GEMINI_API_BASE}/{model}:generateContent?key={}", self.api_key);

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AiError::Api {
                code: status.as_u16(),
                message,
            });
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| AiError::Parse(e.to_string()))?;

        extract_text(&json)
            .ok_or_else(|| AiError::Parse("Response contains no candidate text".to_string()))
    }
}

/// Build a request body with Google Search grounding (plain-text response)
fn build_grounded_body(prompt: &str) -> Value {
    json!({
        "contents": [
            {
                "role": "user",
                "parts": [{ "text": prompt }]
            }
        ],
        "tools": [{ "google_search": {} }]
    })
}

/// Build a request body constrained to a JSON response schema
fn build_structured_body(prompt: &str, schema: Value) -> Value {
    json!({
        "contents": [
            {
                "role": "user",
                "parts": [{ "text": prompt }]
            }
        ],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": schema
        }
    })
}

/// Response schema for the report request ({trends, painPoints})
fn report_schema() -> Value {
    let item = json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "content": { "type": "STRING" }
        },
        "required": ["title", "content"]
    });

    json!({
        "type": "OBJECT",
        "properties": {
            "trends": { "type": "ARRAY", "items": item },
            "painPoints": { "type": "ARRAY", "items": item }
        },
        "required": ["trends", "painPoints"]
    })
}

/// Response schema for the solution request
fn solution_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "department": { "type": "STRING" },
            "reason": { "type": "STRING" },
            "salesPitch": { "type": "STRING" },
            "targetPainPoint": { "type": "STRING" }
        },
        "required": [
            "title", "description", "department",
            "reason", "salesPitch", "targetPainPoint"
        ]
    })
}

/// Extract and concatenate the candidate text parts from a generateContent
/// response
fn extract_text(json: &Value) -> Option<String> {
    let parts = json
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect();

    if text.is_empty() { None } else { Some(text) }
}

/// Parse lookup response lines into company hits
///
/// The model is asked for "名稱｜產業類別" lines without numbering, but it
/// sometimes numbers or bullets the list anyway. Blank lines are dropped;
/// a missing industry segment yields a name-only hit.
fn parse_company_lines(text: &str) -> Vec<CompanyHit> {
    text.lines()
        .map(strip_list_marker)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let mut segments = line.splitn(2, ['｜', '|']);
            let name = segments.next().unwrap_or("").trim().to_string();
            let industry = segments
                .next()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from);
            CompanyHit { name, industry }
        })
        .filter(|hit| !hit.name.is_empty())
        .collect()
}

/// Strip a leading list marker ("1. ", "2、", "- ", "* ") from a line
fn strip_list_marker(line: &str) -> &str {
    let line = line.trim();

    if let Some(rest) = line.strip_prefix('-').or_else(|| line.strip_prefix('*')) {
        return rest.trim_start();
    }

    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest
            .strip_prefix('.')
            .or_else(|| rest.strip_prefix('、'))
            .or_else(|| rest.strip_prefix(')'))
        {
            return rest.trim_start();
        }
    }

    line
}

#[cfg(test)]
#[path = "gemini_tests.rs"]
mod gemini_tests;
