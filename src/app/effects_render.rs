//! Side effects tab
//!
//! Two columns: common effects on the left, serious on the right. The
//! frequency and severity strings are free text from the API; styling
//! falls back to a neutral color for values it does not recognize.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::state::App;
use crate::api::SideEffect;

pub(super) fn severity_color(severity: &str) -> Color {
    match severity.to_ascii_lowercase().as_str() {
        "mild" => Color::Green,
        "moderate" => Color::Yellow,
        "severe" | "serious" => Color::Red,
        _ => Color::Gray,
    }
}

pub(super) fn frequency_color(frequency: &str) -> Color {
    match frequency.to_ascii_lowercase().as_str() {
        "very common" | "common" => Color::Cyan,
        "uncommon" => Color::Blue,
        "rare" | "very rare" => Color::Magenta,
        _ => Color::Gray,
    }
}

impl App {
    pub(super) fn render_side_effects_tab(&self, frame: &mut Frame, area: Rect) {
        let Some(details) = self.detail_or_placeholder(frame, area) else {
            return;
        };
        let effects = &details.side_effects;

        let [common_area, serious_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);

        render_effect_list(frame, common_area, " Common ", Color::DarkGray, &effects.common_side_effects);
        render_effect_list(frame, serious_area, " Serious ", Color::Red, &effects.serious_side_effects);
    }
}

fn render_effect_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border: Color,
    effects: &[SideEffect],
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(Style::default().fg(border));

    if effects.is_empty() {
        let paragraph = Paragraph::new("None reported.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = effects
        .iter()
        .map(|effect| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{}  ", effect.effect)),
                Span::styled(
                    effect.frequency.clone(),
                    Style::default().fg(frequency_color(&effect.frequency)),
                ),
                Span::raw("  "),
                Span::styled(
                    effect.severity.clone(),
                    Style::default().fg(severity_color(&effect.severity)),
                ),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::app::test_support::{test_app, test_details, test_drug};

    #[test]
    fn test_severity_colors() {
        assert_eq!(severity_color("mild"), Color::Green);
        assert_eq!(severity_color("Moderate"), Color::Yellow);
        assert_eq!(severity_color("SEVERE"), Color::Red);
        assert_eq!(severity_color("unknown-ish"), Color::Gray);
    }

    #[test]
    fn test_frequency_colors() {
        assert_eq!(frequency_color("common"), Color::Cyan);
        assert_eq!(frequency_color("Rare"), Color::Magenta);
        assert_eq!(frequency_color(""), Color::Gray);
    }

    #[test]
    fn test_effects_rendered_in_columns() {
        let mut app = test_app();
        app.search_results = vec![test_drug("Ibuprofen")];
        app.select_drug(0);
        let mut details = test_details("Ibuprofen");
        details.side_effects.common_side_effects = vec![SideEffect {
            effect: "Nausea".to_string(),
            frequency: "common".to_string(),
            severity: "mild".to_string(),
        }];
        details.side_effects.serious_side_effects = vec![SideEffect {
            effect: "GI bleeding".to_string(),
            frequency: "rare".to_string(),
            severity: "severe".to_string(),
        }];
        app.details = Some(details);

        let mut terminal = Terminal::new(TestBackend::new(100, 15)).unwrap();
        terminal
            .draw(|frame| app.render_side_effects_tab(frame, frame.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Nausea"));
        assert!(text.contains("GI bleeding"));
        assert!(text.contains("Common"));
        assert!(text.contains("Serious"));
    }

    #[test]
    fn test_empty_lists_say_none_reported() {
        let mut app = test_app();
        app.search_results = vec![test_drug("Ibuprofen")];
        app.select_drug(0);
        app.details = Some(test_details("Ibuprofen"));

        let mut terminal = Terminal::new(TestBackend::new(100, 10)).unwrap();
        terminal
            .draw(|frame| app.render_side_effects_tab(frame, frame.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("None reported."));
    }
}
