//! Lookup request lifecycle
//!
//! A monotonically increasing generation counter stamps every issued lookup;
//! only the response matching the current generation may reach the dropdown.
//! Responses for superseded generations are discarded on arrival — the
//! transport request itself is never aborted.

use crate::ai::CompanyHit;

/// Generation-stamped lookup state
#[derive(Debug)]
pub struct LookupState {
    /// Latest issued generation; responses with any other stamp are stale
    generation: u64,
    /// Generation of the request currently in flight, if any
    in_flight: Option<u64>,
    /// Dropdown cap (config `lookup.max_suggestions`)
    max_suggestions: usize,
}

impl LookupState {
    pub fn new(max_suggestions: usize) -> Self {
        Self {
            generation: 0,
            in_flight: None,
            max_suggestions,
        }
    }

    /// Stamp a new outgoing request and return its generation
    pub fn begin_request(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.in_flight = Some(self.generation);
        self.generation
    }

    /// Invalidate any in-flight request (advisory cancellation)
    ///
    /// Bumps the generation so a late reply can never match, and clears the
    /// searching indicator.
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.in_flight = None;
    }

    /// Check a response stamp against the current generation
    ///
    /// Returns true exactly when the response is current; a current response
    /// also ends the in-flight indicator.
    pub fn accept(&mut self, generation: u64) -> bool {
        if generation == self.generation {
            self.in_flight = None;
            true
        } else {
            log::debug!(
                "Discarding stale lookup response (generation {} != {})",
                generation,
                self.generation
            );
            false
        }
    }

    /// True while a lookup for the current generation is in flight
    pub fn is_searching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Deduplicate hits by name (first occurrence wins, collaborator order
    /// kept) and cap the list at `max_suggestions`
    pub fn sanitize(&self, hits: Vec<CompanyHit>) -> Vec<CompanyHit> {
        let mut seen: Vec<CompanyHit> = Vec::with_capacity(self.max_suggestions);
        for hit in hits {
            if seen.len() == self.max_suggestions {
                break;
            }
            if seen.iter().all(|s| s.name != hit.name) {
                seen.push(hit);
            }
        }
        seen
    }
}

#[cfg(test)]
#[path = "lookup_state_tests.rs"]
mod lookup_state_tests;
