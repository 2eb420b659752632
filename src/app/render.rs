use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::state::{App, Focus};
use crate::autocomplete::render_dropdown;
use crate::notification::render_notification;
use crate::report::render_report;
use crate::solution::render_solution;

impl App {
    /// Render the UI and refresh the mouse hit-test regions
    pub fn render(&mut self, frame: &mut Frame) {
        let rows = Layout::vertical([
            Constraint::Length(2), // header + key hints
            Constraint::Length(3), // industry + company
            Constraint::Length(4), // notes
            Constraint::Length(3), // action buttons
            Constraint::Min(8),    // report + solution
        ])
        .split(frame.area());

        let form = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[1]);
        let buttons = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[3]);
        let results =
            Layout::horizontal([Constraint::Percentage(58), Constraint::Percentage(42)])
                .split(rows[4]);

        self.regions.industry = form[0];
        self.regions.company = form[1];
        self.regions.notes = rows[2];
        self.regions.report_button = buttons[0];
        self.regions.solution_button = buttons[1];

        self.render_header(frame, rows[0]);
        self.render_industry(frame, form[0]);
        self.render_company(frame, form[1]);
        self.render_notes(frame, rows[2]);
        self.render_buttons(frame, buttons[0], buttons[1]);
        render_report(&self.report, frame, results[0]);
        render_solution(&self.solution, frame, results[1]);

        // Overlays last: dropdown over the form, notification over everything
        self.regions.dropdown = render_dropdown(self, frame, form[1]);
        render_notification(&self.notification, frame);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Salescope — Sales AI Research Assistant",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Tab 切換欄位 · ↑↓ 選擇 · Enter 確認 · Ctrl+R 生成報告 · Ctrl+S 解決方案 · Ctrl+C 離開",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn border_color(&self, focus: Focus) -> Color {
        if self.focus == focus {
            Color::Cyan
        } else {
            Color::DarkGray
        }
    }

    fn render_industry(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" 產業領域 ")
            .border_style(Style::default().fg(self.border_color(Focus::Industry)));

        let selector = Line::from(vec![
            Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                self.industry.label().to_string(),
                Style::default().fg(Color::White),
            ),
            Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
        ]);

        frame.render_widget(
            Paragraph::new(selector)
                .block(block)
                .alignment(Alignment::Center),
            area,
        );
    }

    fn render_company(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.lookup.is_searching() {
            " 公司名稱關鍵字 (搜尋中…) "
        } else {
            " 公司名稱關鍵字 "
        };
        self.company.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(self.border_color(Focus::Company))),
        );
        frame.render_widget(&self.company, area);
    }

    fn render_notes(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.background_loading {
            format!(" 補充資料 (AI 取得中…) {}/50 ", self.notes_len())
        } else {
            format!(" 補充資料 {}/50 ", self.notes_len())
        };
        self.notes.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(self.border_color(Focus::Notes))),
        );
        frame.render_widget(&self.notes, area);
    }

    fn render_buttons(&self, frame: &mut Frame, report_area: Rect, solution_area: Rect) {
        let report_ready = !self.report.is_loading()
            && !self.background_loading
            && !self.company_query().trim().is_empty();
        let report_label = if self.report.is_loading() {
            "正在生成深度分析報告..."
        } else {
            "自動生成報告 (Ctrl+R)"
        };
        render_button(frame, report_area, report_label, report_ready);

        let solution_ready = self.report.report().is_some() && !self.solution.is_loading();
        let solution_label = if self.solution.is_loading() {
            "媒合精誠解決方案中..."
        } else {
            "產出精誠推薦解決方案 (Ctrl+S)"
        };
        render_button(frame, solution_area, solution_label, solution_ready);
    }
}

fn render_button(frame: &mut Frame, area: Rect, label: &str, ready: bool) {
    let color = if ready { Color::Green } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(
        Paragraph::new(Span::styled(label, Style::default().fg(color)))
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
