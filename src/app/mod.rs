mod events;
mod mouse_click;
mod render;
mod state;
mod tick;

// Re-export public types
pub use state::{App, Focus};
