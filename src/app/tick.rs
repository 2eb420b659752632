//! Event-loop tick processing
//!
//! The event loop calls `on_tick` between input polls: settled debounce
//! queries become lookup requests, and worker responses are drained and
//! applied. All stale-result suppression happens here via the generation
//! stamps — a late reply for a superseded query or selection never touches
//! visible state.

use super::state::{App, NOTES_LIMIT, set_text};
use crate::ai::{AiRequest, AiResponse};

impl App {
    /// Process timers and worker responses for one tick
    pub fn on_tick(&mut self) {
        if let Some(query) = self.debouncer.poll() {
            let generation = self.lookup.begin_request();
            self.send_request(AiRequest::Lookup { query, generation });
        }

        let mut batch = Vec::new();
        if let Some(rx) = &self.response_rx {
            while let Ok(response) = rx.try_recv() {
                batch.push(response);
            }
        }
        for response in batch {
            self.apply_response(response);
        }
    }

    /// Apply one worker response to visible state
    pub(crate) fn apply_response(&mut self, response: AiResponse) {
        match response {
            AiResponse::Suggestions { hits, generation } => {
                if self.lookup.accept(generation) {
                    let hits = self.lookup.sanitize(hits);
                    self.dropdown.set_suggestions(hits);
                }
            }
            AiResponse::Background { text, generation } => {
                if generation == self.selection_generation && self.background_loading {
                    self.background_loading = false;
                    let capped: String = text.chars().take(NOTES_LIMIT).collect();
                    set_text(&mut self.notes, &capped);
                } else {
                    log::debug!("Discarding stale background blurb");
                }
            }
            AiResponse::Report(Ok(data)) => {
                self.report.complete(data);
                // A fresh report invalidates any solution matched to the old one
                self.solution.clear();
            }
            AiResponse::Report(Err(message)) => {
                log::debug!("Report generation failed: {}", message);
                self.report.fail();
                self.notification.error("生成報告時發生錯誤，請稍後再試。");
            }
            AiResponse::Solution(Ok(data)) => {
                self.solution.complete(data);
            }
            AiResponse::Solution(Err(message)) => {
                log::debug!("Solution generation failed: {}", message);
                self.solution.fail();
                self.notification.error("生成解決方案失敗。");
            }
        }
    }
}

#[cfg(test)]
#[path = "tick_tests.rs"]
mod tick_tests;
