//! Tests for layout regions and hit-testing

use ratatui::layout::Rect;

use super::*;

fn regions_with_popup() -> LayoutRegions {
    let mut regions = LayoutRegions::new();
    regions.set_input(0, Rect::new(0, 1, 60, 3));
    regions.set_input(1, Rect::new(0, 4, 60, 3));
    regions.set_popup(PopupRegion {
        binding: 0,
        area: Rect::new(2, 4, 30, 5),
        offset: 0,
        row_count: 2,
    });
    regions
}

#[test]
fn test_click_on_input() {
    let regions = regions_with_popup();
    assert_eq!(region_at(&regions, 10, 2), Some(Region::Input(0)));
}

#[test]
fn test_popup_covers_input_below() {
    let regions = regions_with_popup();
    // Row 5 is the first suggestion row, drawn over input 1
    assert_eq!(
        region_at(&regions, 10, 5),
        Some(Region::SuggestionRow { binding: 0, row: 0 })
    );
    assert_eq!(
        region_at(&regions, 10, 6),
        Some(Region::SuggestionRow { binding: 0, row: 1 })
    );
}

#[test]
fn test_popup_border_and_blank_rows() {
    let regions = regions_with_popup();
    assert_eq!(region_at(&regions, 10, 4), Some(Region::SuggestionBox(0)));
    assert_eq!(region_at(&regions, 10, 7), Some(Region::SuggestionBox(0)));
    assert_eq!(region_at(&regions, 2, 5), Some(Region::SuggestionBox(0)));
}

#[test]
fn test_input_beside_popup() {
    let regions = regions_with_popup();
    assert_eq!(region_at(&regions, 50, 5), Some(Region::Input(1)));
}

#[test]
fn test_row_offset_is_applied() {
    let mut regions = LayoutRegions::new();
    regions.set_popup(PopupRegion {
        binding: 2,
        area: Rect::new(0, 0, 20, 5),
        offset: 4,
        row_count: 3,
    });
    assert_eq!(
        region_at(&regions, 5, 2),
        Some(Region::SuggestionRow { binding: 2, row: 5 })
    );
}

#[test]
fn test_empty_space() {
    let regions = regions_with_popup();
    assert_eq!(region_at(&regions, 70, 20), None);
}

#[test]
fn test_clear_and_input_area() {
    let mut regions = regions_with_popup();
    assert_eq!(regions.input_area(1), Some(Rect::new(0, 4, 60, 3)));
    regions.clear();
    assert!(regions.input_area(1).is_none());
    assert!(regions.popups.is_empty());
}
