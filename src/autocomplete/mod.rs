//! Company autocomplete: dropdown state machine and popup rendering

mod autocomplete_render;
mod dropdown_state;

pub use autocomplete_render::render_dropdown;
pub use dropdown_state::DropdownState;
