//! Autocomplete dropdown rendering
//!
//! Renders the suggestion popup directly below the company input field, with
//! the cursored row highlighted and the industry label (when known) as a
//! dimmed suffix. Widths are measured with unicode-width so CJK names size
//! the popup correctly.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::widgets::popup;

const MAX_POPUP_WIDTH: u16 = 60;
const POPUP_BORDER_WIDTH: u16 = 2;
const POPUP_BORDER_HEIGHT: u16 = 2;
const INDUSTRY_SPACING: usize = 2;

/// Render the dropdown popup below the company input field
pub fn render_dropdown(app: &App, frame: &mut Frame, input_area: Rect) -> Option<Rect> {
    let suggestions = app.dropdown.suggestions();
    if suggestions.is_empty() {
        return None;
    }

    let popup_height = suggestions.len() as u16 + POPUP_BORDER_HEIGHT;
    let max_row_width = suggestions
        .iter()
        .map(|hit| {
            let industry_width = hit
                .industry
                .as_deref()
                .map(|label| label.width() + INDUSTRY_SPACING)
                .unwrap_or(0);
            hit.name.width() + industry_width
        })
        .max()
        .unwrap_or(20) as u16;
    let popup_width = (max_row_width + POPUP_BORDER_WIDTH + 2).min(MAX_POPUP_WIDTH);

    let popup_area =
        popup::popup_below_anchor(frame.area(), input_area, popup_width, popup_height);

    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .map(|(i, hit)| {
            let highlighted = app.dropdown.cursor() == Some(i);
            let name_style = if highlighted {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let mut spans = vec![Span::styled(format!(" {}", hit.name), name_style)];
            if let Some(label) = &hit.industry {
                let label_style = if highlighted {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                spans.push(Span::styled(format!("  {label}"), label_style));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" 建議公司名稱 ")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    popup::clear_area(frame, popup_area);
    frame.render_widget(list, popup_area);
    Some(popup_area)
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
