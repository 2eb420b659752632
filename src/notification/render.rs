use ratatui::{
    Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::state::NotificationState;
use crate::widgets::popup;

const MAX_WIDTH: u16 = 56;
const MIN_WIDTH: u16 = 24;

/// Render the notification popup centered over the UI
pub fn render_notification(state: &NotificationState, frame: &mut Frame) {
    let Some((kind, message)) = state.current() else {
        return;
    };

    let width = (message.width() as u16 + 4).clamp(MIN_WIDTH, MAX_WIDTH);
    // Rough wrapped-line estimate plus borders and the hint line
    let inner_width = width.saturating_sub(2).max(1);
    let text_lines = (message.width() as u16).div_ceil(inner_width);
    let height = text_lines + 3;

    let area = popup::centered_popup(frame.area(), width, height);
    popup::clear_area(frame, area);

    let lines = vec![
        Line::from(message.to_string()),
        Line::from(Span::styled(
            "按 Esc 關閉",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 通知 ")
        .border_style(Style::default().fg(kind.color()));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
