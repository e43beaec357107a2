use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::NotificationState;
use crate::widgets::popup;

const NOTIFICATION_WIDTH: u16 = 50;
const NOTIFICATION_HEIGHT: u16 = 5;

/// Render the notification as a centered popup, if one is visible
pub fn render_notification(state: &NotificationState, frame: &mut Frame) {
    let Some(message) = state.message() else {
        return;
    };

    let area = popup::centered_popup(frame.area(), NOTIFICATION_WIDTH, NOTIFICATION_HEIGHT);
    popup::clear_area(frame, area);

    let paragraph = Paragraph::new(message)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Error (Esc to dismiss) ")
                .border_style(Style::default().fg(Color::Red)),
        );

    frame.render_widget(paragraph, area);
}
