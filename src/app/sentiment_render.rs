//! Sentiment tab
//!
//! Metric cards up top, the daily trend chart in the middle, the aggregate
//! distribution and per-day breakdown below.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, List, ListItem, Paragraph},
};

use super::state::App;
use crate::api::SentimentPoint;

/// Day-over-day movement of the positive share
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Trend {
    Improving,
    Declining,
    Stable,
}

impl Trend {
    fn label(self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Declining => "declining",
            Trend::Stable => "stable",
        }
    }

    fn color(self) -> Color {
        match self {
            Trend::Improving => Color::Green,
            Trend::Declining => Color::Red,
            Trend::Stable => Color::Yellow,
        }
    }
}

const TREND_THRESHOLD: f64 = 0.05;

/// Compare the last two days of positive share; small moves read as stable
pub(super) fn trend(points: &[SentimentPoint]) -> Trend {
    let [.., previous, latest] = points else {
        return Trend::Stable;
    };
    let delta = latest.positive - previous.positive;
    if delta > TREND_THRESHOLD {
        Trend::Improving
    } else if delta < -TREND_THRESHOLD {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

pub(super) fn average(points: &[SentimentPoint], pick: fn(&SentimentPoint) -> f64) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    points.iter().map(pick).sum::<f64>() / points.len() as f64
}

impl App {
    pub(super) fn render_sentiment_tab(&self, frame: &mut Frame, area: Rect) {
        let Some(details) = self.detail_or_placeholder(frame, area) else {
            return;
        };
        let sentiment = &details.sentiment;

        if sentiment.sentiment_data.is_empty() {
            let paragraph = Paragraph::new("No sentiment data for this drug.")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(paragraph, area);
            return;
        }

        let [cards_area, chart_area, bottom_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(8),
        ])
        .areas(area);
        let [distribution_area, daily_area] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(bottom_area);

        self.render_metric_cards(frame, cards_area, sentiment);
        render_trend_chart(frame, chart_area, &sentiment.sentiment_data);
        render_distribution(frame, distribution_area, &sentiment.sentiment_data);
        render_daily_breakdown(frame, daily_area, &sentiment.sentiment_data);
    }

    fn render_metric_cards(
        &self,
        frame: &mut Frame,
        area: Rect,
        sentiment: &crate::api::SentimentResponse,
    ) {
        let points = &sentiment.sentiment_data;
        let trend = trend(points);
        let cards = [
            (
                "Overall".to_string(),
                format!("{} ({:.2})", sentiment.overall_sentiment, sentiment.sentiment_score),
                Color::Cyan,
            ),
            ("Trend".to_string(), trend.label().to_string(), trend.color()),
            (
                "Avg positive".to_string(),
                format!("{:.0}%", average(points, |p| p.positive) * 100.0),
                Color::Green,
            ),
            (
                "Avg negative".to_string(),
                format!("{:.0}%", average(points, |p| p.negative) * 100.0),
                Color::Red,
            ),
        ];

        let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
        for ((label, value, color), column) in cards.into_iter().zip(columns.iter()) {
            let block = Block::default()
                .borders(Borders::ALL)
                .title(format!(" {label} "))
                .border_style(Style::default().fg(Color::DarkGray));
            let line = Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
            frame.render_widget(Paragraph::new(line).block(block), *column);
        }
    }
}

fn render_trend_chart(frame: &mut Frame, area: Rect, points: &[SentimentPoint]) {
    let to_series = |pick: fn(&SentimentPoint) -> f64| -> Vec<(f64, f64)> {
        points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, pick(p) * 100.0))
            .collect()
    };
    let positive = to_series(|p| p.positive);
    let neutral = to_series(|p| p.neutral);
    let negative = to_series(|p| p.negative);

    let datasets = vec![
        Dataset::default()
            .name("positive")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&positive),
        Dataset::default()
            .name("neutral")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&neutral),
        Dataset::default()
            .name("negative")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&negative),
    ];

    let max_x = (points.len().saturating_sub(1)).max(1) as f64;
    let x_labels = vec![
        Span::raw(points.first().map(|p| p.date.as_str()).unwrap_or("").to_string()),
        Span::raw(points.last().map(|p| p.date.as_str()).unwrap_or("").to_string()),
    ];

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(" Trend "))
        .x_axis(
            Axis::default()
                .bounds([0.0, max_x])
                .labels(x_labels)
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, 100.0])
                .labels(["0", "50", "100"])
                .style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(chart, area);
}

fn render_distribution(frame: &mut Frame, area: Rect, points: &[SentimentPoint]) {
    let to_bar = |label: &'static str, value: f64, color: Color| {
        Bar::default()
            .label(Line::from(label))
            .value((value * 100.0).round() as u64)
            .style(Style::default().fg(color))
    };
    let group = BarGroup::default().bars(&[
        to_bar("pos", average(points, |p| p.positive), Color::Green),
        to_bar("neu", average(points, |p| p.neutral), Color::Yellow),
        to_bar("neg", average(points, |p| p.negative), Color::Red),
    ]);

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(" Distribution "))
        .bar_width(5)
        .bar_gap(2)
        .max(100)
        .data(group);
    frame.render_widget(chart, area);
}

fn render_daily_breakdown(frame: &mut Frame, area: Rect, points: &[SentimentPoint]) {
    let items: Vec<ListItem> = points
        .iter()
        .rev()
        .map(|p| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{}  ", p.date)),
                Span::styled(format!("+{:.0}% ", p.positive * 100.0), Style::default().fg(Color::Green)),
                Span::styled(format!("={:.0}% ", p.neutral * 100.0), Style::default().fg(Color::Yellow)),
                Span::styled(format!("-{:.0}% ", p.negative * 100.0), Style::default().fg(Color::Red)),
                Span::styled(format!("({} posts)", p.post_count), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" By day "));
    frame.render_widget(list, area);
}
