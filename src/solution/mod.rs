//! Vendor solution recommendation: state and rendering

mod solution_render;
mod solution_state;

pub use solution_render::render_solution;
pub use solution_state::SolutionState;
