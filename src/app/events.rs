use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::mouse_click;
use super::state::{App, Focus, NOTES_LIMIT};
use crate::layout::region_at;

impl App {
    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Ctrl+C: exit, even under a notification
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // A visible notification blocks the form until dismissed
        if self.notification.is_visible() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.notification.dismiss();
            }
            return;
        }

        // Global actions
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('r') => {
                    self.request_report();
                    return;
                }
                KeyCode::Char('s') => {
                    self.request_solution();
                    return;
                }
                _ => {}
            }
        }
        match key.code {
            KeyCode::Tab => {
                self.cycle_focus(true);
                return;
            }
            KeyCode::BackTab => {
                self.cycle_focus(false);
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Industry => self.handle_industry_key(key),
            Focus::Company => self.handle_company_key(key),
            Focus::Notes => self.handle_notes_key(key),
        }
    }

    /// Handle mouse events (left click only)
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let region = region_at(&self.regions, mouse.column, mouse.row);
            mouse_click::handle_click(self, region);
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let next = match (self.focus, forward) {
            (Focus::Industry, true) => Focus::Company,
            (Focus::Company, true) => Focus::Notes,
            (Focus::Notes, true) => Focus::Industry,
            (Focus::Industry, false) => Focus::Notes,
            (Focus::Company, false) => Focus::Industry,
            (Focus::Notes, false) => Focus::Company,
        };
        self.set_focus(next);
    }

    fn handle_industry_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Left => self.industry.prev(),
            KeyCode::Down | KeyCode::Right => self.industry.next(),
            _ => {}
        }
    }

    fn handle_company_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down if self.dropdown.is_open() => self.dropdown.move_down(),
            KeyCode::Up if self.dropdown.is_open() => self.dropdown.move_up(),
            KeyCode::Enter => {
                // Enter with nothing highlighted is a no-op; the dropdown
                // stays open
                if let Some(hit) = self.dropdown.confirm_cursor() {
                    self.confirm_suggestion(hit);
                }
            }
            KeyCode::Esc => self.dropdown.close(),
            _ => {
                if self.company.input(key) {
                    self.on_company_changed();
                }
            }
        }
    }

    fn handle_notes_key(&mut self, key: KeyEvent) {
        let inserts = matches!(key.code, KeyCode::Char(_) | KeyCode::Enter)
            && !key.modifiers.contains(KeyModifiers::CONTROL);
        if inserts && self.notes_len() >= NOTES_LIMIT {
            return;
        }
        self.notes.input(key);
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
