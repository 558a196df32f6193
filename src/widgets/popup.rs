use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup directly beneath `anchor`, clamped to `bounds`
pub fn popup_below_anchor(anchor: Rect, width: u16, height: u16, x_offset: u16, bounds: Rect) -> Rect {
    let popup_x = anchor.x + x_offset;
    let popup_y = anchor.bottom();
    let space_below = bounds.bottom().saturating_sub(popup_y);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(anchor.width.saturating_sub(x_offset * 2)),
        height: height.min(space_below),
    }
}

pub fn popup_above_anchor(anchor: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let popup_x = anchor.x + x_offset;
    let popup_y = anchor.y.saturating_sub(height);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(anchor.width.saturating_sub(x_offset * 2)),
        height: height.min(anchor.y),
    }
}

/// Place beneath the anchor when it fits, otherwise above if there is more room
pub fn popup_near_anchor(anchor: Rect, width: u16, height: u16, x_offset: u16, bounds: Rect) -> Rect {
    let below = popup_below_anchor(anchor, width, height, x_offset, bounds);
    if below.height >= height {
        return below;
    }
    let above = popup_above_anchor(anchor, width, height, x_offset);
    if above.height > below.height { above } else { below }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
