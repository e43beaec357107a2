//! Region tracking for mouse interactions
//!
//! Render code records where each component landed this frame; the mouse
//! handler asks which component is under a click position.

use ratatui::layout::Rect;

/// UI components a mouse event can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    SearchInput,
    Suggestions,
    Results,
    Tabs,
    Detail,
}

/// Screen areas of the components, refreshed on every render
#[derive(Debug, Default)]
pub struct LayoutRegions {
    pub search_input: Option<Rect>,
    pub suggestions: Option<Rect>,
    pub results: Option<Rect>,
    pub tabs: Option<Rect>,
    pub detail: Option<Rect>,
}

impl LayoutRegions {
    /// Forget last frame's areas before re-recording them
    pub fn reset(&mut self) {
        *self = LayoutRegions::default();
    }
}

fn contains(area: Option<Rect>, x: u16, y: u16) -> bool {
    area.is_some_and(|rect| {
        x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
    })
}

/// Which component is at the given screen position
///
/// The suggestion popup overlays other components, so it is checked first.
pub fn region_at(regions: &LayoutRegions, x: u16, y: u16) -> Option<Region> {
    if contains(regions.suggestions, x, y) {
        Some(Region::Suggestions)
    } else if contains(regions.search_input, x, y) {
        Some(Region::SearchInput)
    } else if contains(regions.tabs, x, y) {
        Some(Region::Tabs)
    } else if contains(regions.results, x, y) {
        Some(Region::Results)
    } else if contains(regions.detail, x, y) {
        Some(Region::Detail)
    } else {
        None
    }
}
