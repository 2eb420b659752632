//! AI worker thread
//!
//! Handles Gemini requests in a background thread so the UI never blocks.
//! Receives requests via channel, makes HTTP calls through a current-thread
//! tokio runtime, and sends responses back to the main thread.
//!
//! Two error tiers: lookup and background failures degrade to neutral
//! results (empty list / fallback text) and are only logged; report and
//! solution failures are carried back to the UI as errors.

use std::sync::mpsc::{Receiver, Sender};

use super::provider::{AiError, GeminiClient};
use super::types::{AiRequest, AiResponse};
use crate::config::GeminiConfig;

/// Fallback notes text when the background fetch fails
pub const BACKGROUND_FALLBACK: &str = "無法取得背景資訊，請手動輸入。";

/// Spawn the AI worker thread
///
/// The client is created eagerly from config; a missing API key is not fatal
/// here — lookups degrade silently and generation requests report the
/// configuration error when the user actually triggers one.
pub fn spawn_worker(
    config: &GeminiConfig,
    request_rx: Receiver<AiRequest>,
    response_tx: Sender<AiResponse>,
) {
    let client_result = GeminiClient::from_config(config);

    std::thread::spawn(move || {
        worker_loop(client_result, request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    client_result: Result<GeminiClient, AiError>,
    request_rx: Receiver<AiRequest>,
    response_tx: Sender<AiResponse>,
) {
    let client = match client_result {
        Ok(c) => Some(c),
        Err(e) => {
            log::debug!("Gemini client not configured: {}", e);
            None
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("Failed to build worker runtime: {}", e);
            return;
        }
    };

    while let Ok(request) = request_rx.recv() {
        let response = runtime.block_on(handle_request(&client, request));
        if response_tx.send(response).is_err() {
            // Main thread disconnected
            break;
        }
    }

    log::debug!("AI worker thread shutting down");
}

/// Dispatch a single request to the Gemini client
async fn handle_request(client: &Option<GeminiClient>, request: AiRequest) -> AiResponse {
    match request {
        AiRequest::Lookup { query, generation } => {
            let hits = match client {
                Some(c) => c.search_companies(&query).await.unwrap_or_else(|e| {
                    log::debug!("Company lookup failed: {}", e);
                    Vec::new()
                }),
                None => Vec::new(),
            };
            AiResponse::Suggestions { hits, generation }
        }
        AiRequest::Background {
            company,
            generation,
        } => {
            let text = match client {
                Some(c) => c.fetch_background(&company).await.unwrap_or_else(|e| {
                    log::debug!("Background fetch failed: {}", e);
                    BACKGROUND_FALLBACK.to_string()
                }),
                None => BACKGROUND_FALLBACK.to_string(),
            };
            AiResponse::Background { text, generation }
        }
        AiRequest::Report {
            company,
            industry,
            notes,
        } => {
            let result = match client {
                Some(c) => c
                    .generate_report(&company, &industry, &notes)
                    .await
                    .map_err(|e| e.to_string()),
                None => Err(not_configured_message()),
            };
            AiResponse::Report(result)
        }
        AiRequest::Solution {
            company,
            industry,
            pain_points,
        } => {
            let result = match client {
                Some(c) => c
                    .generate_solution(&company, &industry, &pain_points)
                    .await
                    .map_err(|e| e.to_string()),
                None => Err(not_configured_message()),
            };
            AiResponse::Solution(result)
        }
    }
}

fn not_configured_message() -> String {
    AiError::NotConfigured(
        "Set GEMINI_API_KEY or add api_key to the [gemini] config section".to_string(),
    )
    .to_string()
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
