//! Solution recommendation state
//!
//! Same error contract as the report: failures keep the previous solution.

use crate::ai::SolutionData;

/// Vendor solution state
#[derive(Debug, Default)]
pub struct SolutionState {
    solution: Option<SolutionData>,
    loading: bool,
}

impl SolutionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn solution(&self) -> Option<&SolutionData> {
        self.solution.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn start(&mut self) {
        self.loading = true;
    }

    pub fn complete(&mut self, data: SolutionData) {
        self.solution = Some(data);
        self.loading = false;
    }

    pub fn fail(&mut self) {
        self.loading = false;
    }

    /// Drop the solution (it belongs to the report it was matched against)
    pub fn clear(&mut self) {
        self.solution = None;
        self.loading = false;
    }
}
