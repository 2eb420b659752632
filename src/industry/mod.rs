//! Industry field state
//!
//! Six preset labels cycled with the arrow keys, but the field holds an
//! arbitrary label: a confirmed autocomplete entry that carries industry
//! metadata overwrites it with exactly that label.

/// Preset industry labels offered by the selector
pub const INDUSTRIES: [&str; 6] = [
    "零售與電商",
    "金融保險",
    "製造業",
    "醫療保健",
    "科技與資訊",
    "物流運籌",
];

/// Industry field state
#[derive(Debug)]
pub struct IndustryState {
    label: String,
    /// Preset index the cycle keys continue from
    preset: usize,
}

impl IndustryState {
    pub fn new() -> Self {
        Self {
            label: INDUSTRIES[0].to_string(),
            preset: 0,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Cycle to the next preset (wraps)
    pub fn next(&mut self) {
        self.preset = (self.preset + 1) % INDUSTRIES.len();
        self.label = INDUSTRIES[self.preset].to_string();
    }

    /// Cycle to the previous preset (wraps)
    pub fn prev(&mut self) {
        self.preset = (self.preset + INDUSTRIES.len() - 1) % INDUSTRIES.len();
        self.label = INDUSTRIES[self.preset].to_string();
    }

    /// Overwrite the label from autocomplete metadata
    ///
    /// If the label happens to be a preset, cycling continues from it;
    /// otherwise the preset index is left where it was.
    pub fn set_label(&mut self, label: String) {
        if let Some(index) = INDUSTRIES.iter().position(|&preset| preset == label) {
            self.preset = index;
        }
        self.label = label;
    }
}

impl Default for IndustryState {
    fn default() -> Self {
        Self::new()
    }
}
