//! Dropdown selection state machine
//!
//! Idle (closed) or Open over the current suggestion list, with a cursor in
//! [-1, len-1] (`None` = nothing highlighted). Confirmation clears the list,
//! resets the cursor, and arms a one-shot guard: the guard consumes exactly
//! one subsequent query-change evaluation so the dropdown does not reopen
//! for the value that was just chosen.

use crate::ai::CompanyHit;

/// Dropdown state for the company autocomplete
#[derive(Debug, Default)]
pub struct DropdownState {
    suggestions: Vec<CompanyHit>,
    /// Highlighted row; `None` is the -1 "nothing highlighted" position
    cursor: Option<usize>,
    /// One-shot latch armed by confirmation
    guard: bool,
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the suggestion list
    ///
    /// An empty list closes the dropdown; a non-empty list opens it with the
    /// cursor reset.
    pub fn set_suggestions(&mut self, hits: Vec<CompanyHit>) {
        self.suggestions = hits;
        self.cursor = None;
    }

    /// Close the dropdown and drop the suggestions (Escape / blur / empty query)
    pub fn close(&mut self) {
        self.suggestions.clear();
        self.cursor = None;
    }

    pub fn is_open(&self) -> bool {
        !self.suggestions.is_empty()
    }

    pub fn suggestions(&self) -> &[CompanyHit] {
        &self.suggestions
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// ArrowDown: -1 goes to 0; the last index is absorbing
    pub fn move_down(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.cursor = Some(match self.cursor {
            None => 0,
            Some(i) => (i + 1).min(self.suggestions.len() - 1),
        });
    }

    /// ArrowUp: index 0 is absorbing; a -1 cursor stays put
    pub fn move_up(&mut self) {
        if let Some(i) = self.cursor {
            self.cursor = Some(i.saturating_sub(1));
        }
    }

    /// Enter: confirm the cursored entry; with no highlight this is a no-op
    /// and the dropdown stays open
    pub fn confirm_cursor(&mut self) -> Option<CompanyHit> {
        self.confirm_at(self.cursor?)
    }

    /// Pointer click: place-cursor-and-confirm as one atomic action, for any
    /// row regardless of the current cursor
    pub fn confirm_at(&mut self, index: usize) -> Option<CompanyHit> {
        let hit = self.suggestions.get(index)?.clone();
        self.suggestions.clear();
        self.cursor = None;
        self.guard = true;
        Some(hit)
    }

    /// Consume the one-shot guard; true exactly once after a confirmation
    pub fn consume_guard(&mut self) -> bool {
        std::mem::take(&mut self.guard)
    }

    #[cfg(test)]
    pub fn guard_armed(&self) -> bool {
        self.guard
    }
}

#[cfg(test)]
#[path = "dropdown_state_tests.rs"]
mod dropdown_state_tests;
