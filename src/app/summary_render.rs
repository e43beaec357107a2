//! Community insights tab
//!
//! Renders the locally bundled summary record for the selected drug. The
//! data never comes from the network; a drug without a record gets an
//! empty state.

use std::collections::BTreeMap;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::App;
use crate::dataset::DrugSummary;

const MAX_THEMES: usize = 8;
const MAX_COMMUNITIES: usize = 5;
const MAX_EXAMPLES: usize = 2;

impl App {
    pub(super) fn render_summary_tab(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let Some(summary) = &self.summary else {
            let paragraph =
                Paragraph::new("No community insights available for this drug.")
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block);
            frame.render_widget(paragraph, area);
            return;
        };

        if let Some(error) = &summary.error {
            let lines = vec![
                Line::from(Span::styled(
                    "Analysis unavailable",
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(error.clone()),
            ];
            frame.render_widget(Paragraph::new(lines).block(block), area);
            return;
        }

        let paragraph = Paragraph::new(summary_lines(summary))
            .wrap(Wrap { trim: false })
            .block(block);
        frame.render_widget(paragraph, area);
    }
}

fn summary_lines(summary: &DrugSummary) -> Vec<Line<'_>> {
    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{} posts analyzed", summary.total_posts), heading),
            Span::styled(
                format!(
                    "   {} communities · {} themes   as of {}",
                    summary.subreddit_distribution.len(),
                    summary.key_themes.len(),
                    summary.analysis_date
                ),
                dim,
            ),
        ]),
        Line::default(),
        Line::from(summary.summary.as_str()),
        Line::default(),
        Line::from(Span::styled("Sentiment", heading)),
        sentiment_bar("positive", summary.sentiment_analysis.average_positive, Color::Green),
        sentiment_bar("neutral ", summary.sentiment_analysis.average_neutral, Color::Yellow),
        sentiment_bar("negative", summary.sentiment_analysis.average_negative, Color::Red),
    ];

    if !summary.key_themes.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Key themes", heading)));
        let themes: Vec<&str> = summary
            .key_themes
            .iter()
            .take(MAX_THEMES)
            .map(String::as_str)
            .collect();
        lines.push(Line::from(themes.join("  ·  ")));
    }

    let communities = top_communities(&summary.subreddit_distribution, MAX_COMMUNITIES);
    if !communities.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Top communities", heading)));
        for (name, posts) in communities {
            lines.push(Line::from(vec![
                Span::raw(format!("  r/{name}")),
                Span::styled(format!("  {posts} posts"), dim),
            ]));
        }
    }

    push_examples(&mut lines, "Positive experiences", &summary.post_examples.positive_experiences, Color::Green);
    push_examples(&mut lines, "Neutral discussions", &summary.post_examples.neutral_discussions, Color::Yellow);
    push_examples(&mut lines, "Negative experiences", &summary.post_examples.negative_experiences, Color::Red);

    lines
}

fn push_examples<'a>(lines: &mut Vec<Line<'a>>, label: &'a str, examples: &'a [String], color: Color) {
    if examples.is_empty() {
        return;
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        label,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    for example in examples.iter().take(MAX_EXAMPLES) {
        lines.push(Line::from(format!("  “{example}”")));
    }
}

/// Fixed-width bar with the fraction printed alongside
fn sentiment_bar(label: &str, fraction: f64, color: Color) -> Line<'static> {
    const BAR_WIDTH: usize = 20;
    let filled = (fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    Line::from(vec![
        Span::raw(format!("  {label} ")),
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled(
            "░".repeat(BAR_WIDTH - filled),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(format!(" {:.0}%", fraction * 100.0)),
    ])
}

/// Communities ranked by post count, then name for ties
fn top_communities(distribution: &BTreeMap<String, u64>, limit: usize) -> Vec<(&String, u64)> {
    let mut entries: Vec<(&String, u64)> = distribution.iter().map(|(k, v)| (k, *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::app::test_support::{test_app, test_drug};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_top_communities_ranked_by_count() {
        let mut distribution = BTreeMap::new();
        distribution.insert("AskDocs".to_string(), 5);
        distribution.insert("migraine".to_string(), 20);
        distribution.insert("ChronicPain".to_string(), 20);
        distribution.insert("Supplements".to_string(), 1);

        let top = top_communities(&distribution, 3);
        let names: Vec<&str> = top.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["ChronicPain", "migraine", "AskDocs"]);
    }

    #[test]
    fn test_sentiment_bar_scales() {
        let line = sentiment_bar("positive", 0.5, Color::Green);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text.matches('█').count(), 10);
        assert_eq!(text.matches('░').count(), 10);
        assert!(text.contains("50%"));
    }

    #[test]
    fn test_sentiment_bar_clamps_out_of_range() {
        let line = sentiment_bar("positive", 1.7, Color::Green);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text.matches('█').count(), 20);
    }

    #[test]
    fn test_summary_tab_renders_record() {
        let mut app = test_app();
        app.search_results = vec![test_drug("Ibuprofen")];
        app.select_drug(0);
        assert!(app.summary.is_some());

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| app.render_summary_tab(frame, frame.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("12 posts analyzed"));
        assert!(text.contains("Mostly positive discussions."));
        assert!(text.contains("r/AskDocs"));
        assert!(text.contains("Works fast."));
    }

    #[test]
    fn test_summary_tab_empty_state() {
        let mut app = test_app();
        app.search_results = vec![test_drug("Zzzetine")];
        app.select_drug(0);
        assert!(app.summary.is_none());

        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
        terminal
            .draw(|frame| app.render_summary_tab(frame, frame.area()))
            .unwrap();

        assert!(buffer_text(&terminal).contains("No community insights available"));
    }

    #[test]
    fn test_summary_tab_error_state() {
        let mut app = test_app();
        app.search_results = vec![test_drug("Ibuprofen")];
        app.select_drug(0);
        if let Some(summary) = app.summary.as_mut() {
            summary.error = Some("Token limit exceeded".to_string());
        }

        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
        terminal
            .draw(|frame| app.render_summary_tab(frame, frame.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Analysis unavailable"));
        assert!(text.contains("Token limit exceeded"));
    }
}
