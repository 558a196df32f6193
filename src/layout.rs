//! Layout module for tracking UI component regions
//!
//! `LayoutRegions` records where inputs and suggestion popups were drawn in
//! the last frame, and `region_at()` resolves a screen position to the
//! component under it. Popups are drawn over inputs, so they win hit-tests.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, PopupRegion, Region};

#[cfg(test)]
#[path = "layout/layout_tests.rs"]
mod layout_tests;
