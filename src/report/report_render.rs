//! Report pane rendering
//!
//! Trends on the left, pain points on the right, as wrapped paragraphs.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::report_state::ReportState;
use crate::ai::ReportItem;

/// Render the report pane (or its loading/empty placeholder)
pub fn render_report(state: &ReportState, frame: &mut Frame, area: Rect) {
    let Some(report) = state.report() else {
        let placeholder = if state.is_loading() {
            "正在生成深度分析報告..."
        } else {
            "輸入公司後按 Ctrl+R 生成產業分析報告"
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" 分析報告 ")
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(
            Paragraph::new(placeholder)
                .block(block)
                .style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    };

    let panes = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let title = if state.is_loading() {
        " 產業趨勢 (更新中...) "
    } else {
        " 產業趨勢 "
    };
    render_items(frame, panes[0], title, &report.trends, Color::Cyan);
    render_items(frame, panes[1], " 客戶痛點 ", &report.pain_points, Color::Yellow);
}

fn render_items(frame: &mut Frame, area: Rect, title: &str, items: &[ReportItem], accent: Color) {
    let mut lines: Vec<Line> = Vec::new();
    for item in items {
        lines.push(Line::from(Span::styled(
            item.title.clone(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(item.content.clone()));
        lines.push(Line::default());
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(Style::default().fg(accent));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
