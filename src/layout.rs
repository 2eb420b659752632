//! Layout module for tracking UI component regions
//!
//! Rendering records where each component landed; `region_at()` maps a mouse
//! position back to the component. Dropdown rows are resolved to their
//! suggestion index. The dropdown is checked first so a click on a row
//! confirms the suggestion before any focus change tears the dropdown down.

use ratatui::layout::Rect;

/// UI regions that react to mouse clicks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Industry,
    Company,
    Notes,
    /// One row inside the autocomplete dropdown (0-based suggestion index)
    SuggestionRow(usize),
    ReportButton,
    SolutionButton,
}

/// Rendered component rects, refreshed every frame
#[derive(Debug, Default)]
pub struct LayoutRegions {
    pub industry: Rect,
    pub company: Rect,
    pub notes: Rect,
    pub dropdown: Option<Rect>,
    pub report_button: Rect,
    pub solution_button: Rect,
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Determine which component is at the given screen position
pub fn region_at(regions: &LayoutRegions, x: u16, y: u16) -> Option<Region> {
    // Dropdown overlays the form, so it wins
    if let Some(dropdown) = regions.dropdown
        && contains(dropdown, x, y)
    {
        // Rows start below the top border
        let row = y.saturating_sub(dropdown.y);
        if row >= 1 && row < dropdown.height.saturating_sub(1) {
            return Some(Region::SuggestionRow((row - 1) as usize));
        }
        return None;
    }

    if contains(regions.industry, x, y) {
        return Some(Region::Industry);
    }
    if contains(regions.company, x, y) {
        return Some(Region::Company);
    }
    if contains(regions.notes, x, y) {
        return Some(Region::Notes);
    }
    if contains(regions.report_button, x, y) {
        return Some(Region::ReportButton);
    }
    if contains(regions.solution_button, x, y) {
        return Some(Region::SolutionButton);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions() -> LayoutRegions {
        LayoutRegions {
            industry: Rect::new(0, 3, 40, 3),
            company: Rect::new(40, 3, 40, 3),
            notes: Rect::new(0, 6, 80, 4),
            dropdown: None,
            report_button: Rect::new(0, 10, 40, 1),
            solution_button: Rect::new(40, 10, 40, 1),
        }
    }

    #[test]
    fn test_fields_hit() {
        let regions = regions();
        assert_eq!(region_at(&regions, 5, 4), Some(Region::Industry));
        assert_eq!(region_at(&regions, 45, 4), Some(Region::Company));
        assert_eq!(region_at(&regions, 10, 7), Some(Region::Notes));
        assert_eq!(region_at(&regions, 5, 10), Some(Region::ReportButton));
        assert_eq!(region_at(&regions, 75, 10), Some(Region::SolutionButton));
    }

    #[test]
    fn test_miss_returns_none() {
        let regions = regions();
        assert_eq!(region_at(&regions, 0, 0), None);
        assert_eq!(region_at(&regions, 79, 23), None);
    }

    #[test]
    fn test_dropdown_rows_win_over_underlying_fields() {
        let mut regions = regions();
        // Dropdown popup overlapping the notes field
        regions.dropdown = Some(Rect::new(40, 6, 30, 7));

        assert_eq!(region_at(&regions, 45, 7), Some(Region::SuggestionRow(0)));
        assert_eq!(region_at(&regions, 45, 9), Some(Region::SuggestionRow(2)));
        // Borders resolve to nothing, not to the field underneath
        assert_eq!(region_at(&regions, 45, 6), None);
        assert_eq!(region_at(&regions, 45, 12), None);
    }
}
