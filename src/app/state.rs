use std::sync::mpsc::{Receiver, Sender};

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::ai::{AiRequest, AiResponse, CompanyHit};
use crate::autocomplete::DropdownState;
use crate::config::Config;
use crate::industry::IndustryState;
use crate::layout::LayoutRegions;
use crate::lookup::{Debouncer, LookupState};
use crate::notification::NotificationState;
use crate::report::ReportState;
use crate::solution::SolutionState;

/// Notes field hard cap (the background blurb prompt asks for 45 characters)
pub const NOTES_LIMIT: usize = 50;

/// Notes placeholder shown while the background blurb is being fetched
pub const BACKGROUND_PLACEHOLDER: &str = "正在分析客戶背景...";

/// Which form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Industry,
    Company,
    Notes,
}

/// Application state
pub struct App {
    pub config: Config,
    pub focus: Focus,
    pub industry: IndustryState,
    pub company: TextArea<'static>,
    pub notes: TextArea<'static>,
    pub debouncer: Debouncer,
    pub lookup: LookupState,
    pub dropdown: DropdownState,
    pub report: ReportState,
    pub solution: SolutionState,
    pub notification: NotificationState,
    pub regions: LayoutRegions,
    /// Stamps background-blurb fetches; a re-selection makes earlier replies stale
    pub selection_generation: u64,
    pub background_loading: bool,
    pub request_tx: Option<Sender<AiRequest>>,
    pub response_rx: Option<Receiver<AiResponse>>,
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance from loaded configuration
    pub fn new(config: Config) -> Self {
        let mut company = TextArea::default();
        company.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" 公司名稱關鍵字 ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        company.set_cursor_line_style(Style::default());
        company.set_placeholder_text("搜尋公司 (如：寶雅, 聯發科)");

        let mut notes = TextArea::default();
        notes.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" 補充資料 ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        notes.set_cursor_line_style(Style::default());
        notes.set_placeholder_text("點選公司後，AI 將自動生成背景簡介...");

        let debouncer = Debouncer::new(config.lookup.debounce_ms);
        let lookup = LookupState::new(config.lookup.max_suggestions);

        Self {
            config,
            focus: Focus::Company,
            industry: IndustryState::new(),
            company,
            notes,
            debouncer,
            lookup,
            dropdown: DropdownState::new(),
            report: ReportState::new(),
            solution: SolutionState::new(),
            notification: NotificationState::new(),
            regions: LayoutRegions::default(),
            selection_generation: 0,
            background_loading: false,
            request_tx: None,
            response_rx: None,
            should_quit: false,
        }
    }

    /// Set the channel handles for communication with the AI worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<AiRequest>,
        response_rx: Receiver<AiResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current company query text
    pub fn company_query(&self) -> &str {
        self.company.lines()[0].as_ref()
    }

    /// Current notes text
    pub fn notes_text(&self) -> String {
        self.notes.lines().join("\n")
    }

    pub fn notes_len(&self) -> usize {
        self.notes.lines().iter().map(|l| l.chars().count()).sum()
    }

    /// Move focus, tearing down the dropdown when the company field is left
    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus == Focus::Company && focus != Focus::Company {
            self.dropdown.close();
        }
        self.focus = focus;
    }

    /// Evaluate a company query change
    ///
    /// The guard latch consumes exactly one evaluation after a confirmation
    /// so the dropdown does not reopen for the value that was just chosen.
    /// An empty query clears suggestions immediately and issues no request.
    pub fn on_company_changed(&mut self) {
        if self.dropdown.consume_guard() {
            self.debouncer.cancel();
            return;
        }

        let query = self.company_query().to_string();
        if query.trim().is_empty() {
            self.debouncer.cancel();
            self.lookup.invalidate();
            self.dropdown.close();
            return;
        }

        self.debouncer.schedule(query);
    }

    /// Apply a confirmed suggestion
    ///
    /// Atomic effects: input text set to the entry name, industry field
    /// updated from metadata, dropdown already cleared and guard armed by the
    /// caller's confirm, pending lookups invalidated, background blurb fetch
    /// dispatched.
    pub fn confirm_suggestion(&mut self, hit: CompanyHit) {
        set_text(&mut self.company, &hit.name);
        if let Some(label) = hit.industry {
            self.industry.set_label(label);
        }

        self.debouncer.cancel();
        self.lookup.invalidate();
        // The programmatic text change is evaluated like any other; the
        // guard swallows it
        self.on_company_changed();

        self.selection_generation = self.selection_generation.wrapping_add(1);
        self.background_loading = true;
        set_text(&mut self.notes, BACKGROUND_PLACEHOLDER);
        self.send_request(AiRequest::Background {
            company: hit.name,
            generation: self.selection_generation,
        });
    }

    /// Kick off report generation (Ctrl+R / report button)
    pub fn request_report(&mut self) {
        if self.report.is_loading() || self.background_loading {
            return;
        }

        let company = self.company_query().trim().to_string();
        if company.is_empty() {
            self.notification.info("請先輸入或選擇公司名稱");
            return;
        }

        let industry = self.industry.label().to_string();
        let notes = self.notes_text();
        self.report.start();
        self.send_request(AiRequest::Report {
            company,
            industry,
            notes,
        });
    }

    /// Kick off solution matching (Ctrl+S / solution button)
    pub fn request_solution(&mut self) {
        if self.solution.is_loading() || self.report.is_loading() {
            return;
        }

        let Some(report) = self.report.report() else {
            self.notification.info("請先生成分析報告");
            return;
        };
        let pain_points = report.pain_point_titles();

        let company = self.company_query().trim().to_string();
        let industry = self.industry.label().to_string();
        self.solution.start();
        self.send_request(AiRequest::Solution {
            company,
            industry,
            pain_points,
        });
    }

    pub(crate) fn send_request(&mut self, request: AiRequest) {
        if let Some(tx) = &self.request_tx {
            if tx.send(request).is_err() {
                log::debug!("AI worker channel closed");
            }
        } else {
            log::debug!("No AI worker attached; dropping request");
        }
    }
}

/// Replace a textarea's contents with the given text
pub(crate) fn set_text(textarea: &mut TextArea<'static>, text: &str) {
    textarea.select_all();
    textarea.cut();
    textarea.insert_str(text);
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
