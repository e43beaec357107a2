//! Suggestion dropdown rendering
//!
//! Draws the suggestion list just below the search field, with the matched
//! substring of each entry emphasized.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::highlight::highlight_line;
use super::state::AutocompleteState;
use crate::widgets::popup;

const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const MIN_POPUP_WIDTH: u16 = 24;

/// Render the suggestion dropdown below the search field
///
/// Returns the popup area so the caller can record it for mouse
/// hit-testing, or `None` when nothing was drawn.
pub fn render_popup(
    state: &AutocompleteState,
    query: &str,
    frame: &mut Frame,
    input_area: Rect,
) -> Option<Rect> {
    if !state.is_visible() || state.suggestions().is_empty() {
        return None;
    }

    let suggestions = state.suggestions();
    let popup_height = suggestions.len() as u16 + POPUP_BORDER_HEIGHT;
    let max_text_width = suggestions
        .iter()
        .map(|s| s.width() as u16)
        .max()
        .unwrap_or(0);
    let popup_width = (max_text_width + POPUP_PADDING).max(MIN_POPUP_WIDTH);

    let popup_area = popup::popup_below_anchor(input_area, frame.area(), popup_width, popup_height);

    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            let line = if state.active_index() == Some(i) {
                // Highlighted row: high-contrast, match emphasis via bold only
                let style = Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan);
                let mut line = highlight_line(
                    suggestion,
                    query,
                    style,
                    style.add_modifier(Modifier::BOLD),
                );
                line.spans.insert(0, Span::styled("► ", style));
                line
            } else {
                let base = Style::default().fg(Color::White).bg(Color::Black);
                let mut line = highlight_line(
                    suggestion,
                    query,
                    base,
                    Style::default()
                        .fg(Color::Yellow)
                        .bg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                );
                line.spans.insert(0, Span::styled("  ", base));
                line
            };
            ListItem::new(line)
        })
        .collect();

    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, popup_area);
    Some(popup_area)
}
