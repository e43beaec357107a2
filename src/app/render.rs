//! Top-level frame layout
//!
//! Splits the screen into the search field, the result list and the detail
//! pane, records each component's area for mouse hit-testing, and hands the
//! detail area to the active tab's renderer.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs},
};

use super::state::{App, DetailTab, Focus};
use crate::autocomplete;
use crate::notification;

const FOCUSED_BORDER: Color = Color::Cyan;
const BLURRED_BORDER: Color = Color::DarkGray;

impl App {
    /// Render the whole frame
    pub fn render(&mut self, frame: &mut Frame) {
        self.regions.reset();

        let [header_area, search_area, body_area, hints_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let [results_area, detail_area] =
            Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
                .areas(body_area);

        self.regions.search_input = Some(search_area);
        self.regions.results = Some(results_area);

        self.render_header(frame, header_area);
        self.render_search_input(frame, search_area);
        self.render_results(frame, results_area);
        self.render_detail(frame, detail_area);
        self.render_hints(frame, hints_area);

        // Drawn last so it overlays the panes below the search field
        let query = self.query().to_string();
        self.regions.suggestions =
            autocomplete::render_popup(&self.autocomplete, &query, frame, search_area);

        notification::render_notification(&self.notification, frame);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            " rxscope ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )];
        if self.is_loading() {
            spans.push(Span::styled(
                format!(" {} Loading…", self.spinner.glyph()),
                Style::default().fg(Color::Yellow),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_search_input(&mut self, frame: &mut Frame, area: Rect) {
        let border = if self.focus == Focus::SearchInput {
            FOCUSED_BORDER
        } else {
            BLURRED_BORDER
        };
        self.input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search for a drug ")
                .border_style(Style::default().fg(border)),
        );
        frame.render_widget(&self.input, area);
    }

    fn render_results(&self, frame: &mut Frame, area: Rect) {
        let border = if self.focus == Focus::Results {
            FOCUSED_BORDER
        } else {
            BLURRED_BORDER
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Results ({}) ", self.search_results.len()))
            .border_style(Style::default().fg(border));

        if self.search_results.is_empty() {
            let message = if self.pending_search_id.is_some() {
                "Searching…"
            } else {
                "Type a drug name and press Enter to search."
            };
            let paragraph = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let items: Vec<ListItem> = self
            .search_results
            .iter()
            .enumerate()
            .map(|(i, drug)| {
                let mut spans = vec![Span::raw(drug.name.clone())];
                if !drug.drug_class.is_empty() {
                    spans.push(Span::styled(
                        format!("  {}", drug.drug_class),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                spans.push(Span::styled(
                    format!("  [{} {:.0}%]", drug.match_type, drug.match_score),
                    Style::default().fg(Color::DarkGray),
                ));
                let mut line = Line::from(spans);
                let is_selected = self
                    .selected
                    .as_ref()
                    .is_some_and(|s| s.drugbank_id == drug.drugbank_id);
                if i == self.result_cursor && self.focus == Focus::Results {
                    line = line.style(Style::default().fg(Color::Black).bg(Color::Cyan));
                } else if is_selected {
                    line = line.style(Style::default().add_modifier(Modifier::BOLD));
                }
                ListItem::new(line)
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }

    fn render_detail(&mut self, frame: &mut Frame, area: Rect) {
        let Some(drug) = self.selected.clone() else {
            let block = Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .border_style(Style::default().fg(BLURRED_BORDER));
            let paragraph = Paragraph::new("Select a drug to see details.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        };

        let [info_area, tabs_area, content_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        self.regions.tabs = Some(tabs_area);
        self.regions.detail = Some(content_area);

        self.render_drug_info(frame, info_area, &drug);
        self.render_tab_bar(frame, tabs_area);

        match self.active_tab {
            DetailTab::Summary => self.render_summary_tab(frame, content_area),
            DetailTab::Sentiment => self.render_sentiment_tab(frame, content_area),
            DetailTab::Recommendations => self.render_recommendations_tab(frame, content_area),
            DetailTab::SideEffects => self.render_side_effects_tab(frame, content_area),
        }
    }

    /// Details for the network-backed tabs, or a placeholder when the
    /// fetch has not completed
    pub(super) fn detail_or_placeholder(
        &self,
        frame: &mut Frame,
        area: Rect,
    ) -> Option<&crate::api::DrugDetails> {
        if let Some(details) = &self.details {
            return Some(details);
        }
        let message = if self.pending_details_id.is_some() {
            format!("{} Fetching details…", self.spinner.glyph())
        } else {
            "No details loaded.".to_string()
        };
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
        None
    }

    fn render_drug_info(&self, frame: &mut Frame, area: Rect, drug: &crate::api::Drug) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", drug.name))
            .border_style(Style::default().fg(BLURRED_BORDER));

        let mut lines = Vec::new();
        let mut first = Vec::new();
        if !drug.generic_name.is_empty() {
            first.push(Span::styled(
                drug.generic_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }
        if !drug.drug_class.is_empty() {
            if !first.is_empty() {
                first.push(Span::raw("  ·  "));
            }
            first.push(Span::styled(
                drug.drug_class.clone(),
                Style::default().fg(Color::Magenta),
            ));
        }
        if !first.is_empty() {
            lines.push(Line::from(first));
        }
        if !drug.brand_names.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("Brands: {}", drug.brand_names.join(", ")),
                Style::default().fg(Color::DarkGray),
            )));
        }
        if !drug.description.is_empty() {
            lines.push(Line::from(drug.description.clone()));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<&str> = DetailTab::ALL.iter().map(|tab| tab.title()).collect();
        let selected = DetailTab::ALL
            .iter()
            .position(|tab| *tab == self.active_tab)
            .unwrap_or(0);
        let tabs = Tabs::new(titles)
            .select(selected)
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect) {
        let hints = match self.focus {
            Focus::SearchInput => " Enter: search  ↑↓: suggestions  Tab: results  Ctrl+C: quit",
            Focus::Results => " ↑↓: move  Enter: select  ←→/1-4: tabs  /: search  q: quit",
        };
        frame.render_widget(
            Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}
