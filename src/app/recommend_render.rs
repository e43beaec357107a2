//! Recommendations tab

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::state::App;

impl App {
    pub(super) fn render_recommendations_tab(&self, frame: &mut Frame, area: Rect) {
        let Some(details) = self.detail_or_placeholder(frame, area) else {
            return;
        };
        let recommendations = &details.recommendations.recommendations;

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Alternatives to {} ", details.recommendations.original_drug));

        if recommendations.is_empty() {
            let paragraph = Paragraph::new("No recommendations for this drug.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let items: Vec<ListItem> = recommendations
            .iter()
            .map(|rec| {
                let header = Line::from(vec![
                    Span::styled(
                        rec.name.clone(),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {:.0}% similar", rec.similarity_score * 100.0),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]);
                let reason = Line::from(format!("  {}", rec.reason));
                ListItem::new(vec![header, reason, Line::default()])
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}
