//! Transient, dismissible notices
//!
//! One notice at a time, centered over the UI; while visible it blocks form
//! input until dismissed with Esc, Enter, or a click.

mod render;
mod state;

pub use render::render_notification;
pub use state::{NotificationKind, NotificationState};
