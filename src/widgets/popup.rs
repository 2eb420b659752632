use ratatui::{Frame, layout::Rect, widgets::Clear};

pub fn centered_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    let popup_x = (frame_area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (frame_area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Anchor a popup directly below a field, clipped to the frame
pub fn popup_below_anchor(frame_area: Rect, anchor: Rect, width: u16, height: u16) -> Rect {
    let popup_y = anchor.y + anchor.height;
    let available_height = frame_area.height.saturating_sub(popup_y);

    Rect {
        x: anchor.x,
        y: popup_y.min(frame_area.height),
        width: width.min(frame_area.width.saturating_sub(anchor.x)),
        height: height.min(available_height),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
