//! Industry report: state and rendering

mod report_render;
mod report_state;

pub use report_render::render_report;
pub use report_state::ReportState;
