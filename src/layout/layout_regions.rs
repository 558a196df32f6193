use ratatui::layout::Rect;

/// A component under a screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Text input of the field at this index
    Input(usize),
    /// A suggestion row of a binding's popup
    SuggestionRow { binding: usize, row: usize },
    /// Popup border or blank space below the last row
    SuggestionBox(usize),
}

/// Where a binding's popup was drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupRegion {
    pub binding: usize,
    pub area: Rect,
    /// Index of the first visible suggestion
    pub offset: usize,
    pub row_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    pub inputs: Vec<(usize, Rect)>,
    pub popups: Vec<PopupRegion>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
        self.popups.clear();
    }

    pub fn set_input(&mut self, field: usize, area: Rect) {
        self.inputs.push((field, area));
    }

    pub fn set_popup(&mut self, popup: PopupRegion) {
        self.popups.push(popup);
    }

    pub fn input_area(&self, field: usize) -> Option<Rect> {
        self.inputs
            .iter()
            .find(|(index, _)| *index == field)
            .map(|(_, area)| *area)
    }
}
