//! Solution pane rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::solution_state::SolutionState;

/// Render the recommended solution (or its loading/empty placeholder)
pub fn render_solution(state: &SolutionState, frame: &mut Frame, area: Rect) {
    let Some(solution) = state.solution() else {
        let placeholder = if state.is_loading() {
            "媒合精誠解決方案中..."
        } else {
            "生成報告後按 Ctrl+S 產出精誠推薦解決方案"
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" 精誠推薦解決方案 ")
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(
            Paragraph::new(placeholder)
                .block(block)
                .style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    };

    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(Span::styled(
            solution.title.clone(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(solution.description.clone()),
        Line::default(),
        Line::from(vec![
            Span::styled("執行單位：", label),
            Span::raw(solution.department.clone()),
        ]),
        Line::from(vec![
            Span::styled("對應痛點：", label),
            Span::raw(solution.target_pain_point.clone()),
        ]),
        Line::from(vec![
            Span::styled("推薦理由：", label),
            Span::raw(solution.reason.clone()),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("業務話術：", label),
            Span::styled(
                solution.sales_pitch.clone(),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 精誠推薦解決方案 ")
        .border_style(Style::default().fg(Color::Magenta));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
