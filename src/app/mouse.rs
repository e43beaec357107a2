use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use super::state::{App, DetailTab, Focus};
use crate::layout::{Region, region_at};

impl App {
    /// Handle a mouse event; everything except left-click presses is ignored
    pub fn handle_mouse_event(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if self.notification.is_visible() {
            self.notification.dismiss();
            return;
        }

        let (x, y) = (event.column, event.row);
        match region_at(&self.regions, x, y) {
            Some(Region::Suggestions) => self.click_suggestion(y),
            Some(Region::SearchInput) => self.set_focus(Focus::SearchInput),
            Some(Region::Results) => self.click_result(y),
            Some(Region::Tabs) => self.click_tab(x),
            Some(Region::Detail) => self.set_focus(Focus::Results),
            None => {}
        }
    }

    fn click_suggestion(&mut self, y: u16) {
        let Some(area) = self.regions.suggestions else {
            return;
        };
        // First content row sits below the popup border
        let Some(row) = (y - area.y).checked_sub(1) else {
            return;
        };
        if let Some(text) = self.autocomplete.suggestion_at(row as usize) {
            let text = text.to_string();
            self.adopt_suggestion(&text);
            self.set_focus(Focus::SearchInput);
        }
    }

    fn click_result(&mut self, y: u16) {
        self.set_focus(Focus::Results);
        let Some(area) = self.regions.results else {
            return;
        };
        let Some(row) = (y - area.y).checked_sub(1) else {
            return;
        };
        if (row as usize) < self.search_results.len() {
            self.select_drug(row as usize);
        }
    }

    fn click_tab(&mut self, x: u16) {
        self.set_focus(Focus::Results);
        let Some(area) = self.regions.tabs else {
            return;
        };
        if let Some(tab) = tab_at(area, x) {
            self.select_tab(tab);
        }
    }
}

/// Map a click column inside the tab bar to a tab
///
/// Mirrors how the `Tabs` widget lays titles out: one cell of padding on
/// each side of a title, one divider cell between tabs.
fn tab_at(area: Rect, x: u16) -> Option<DetailTab> {
    let mut offset = area.x.saturating_add(1);
    for tab in DetailTab::ALL {
        let width = tab.title().width() as u16 + 2;
        if x >= offset && x < offset + width {
            return Some(tab);
        }
        offset = offset.saturating_add(width + 1);
    }
    None
}
