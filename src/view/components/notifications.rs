//! src/view/components/notifications.rs
//! ============================================================================
//! # Notifications: Stacked Toasts
//!
//! Drawn top-right over whatever is beneath, newest at the bottom. Only
//! entries still in the visible phase are drawn; leaving entries wait for
//! their sweep unrendered.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::model::app_state::AppState;
use crate::model::notifications::Severity;
use crate::view::theme::Palette;

const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 3;

pub struct Notifications;

impl Notifications {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect, palette: &Palette) {
        let mut y = area.y + 1;
        for notification in app.notifications.visible() {
            if y + TOAST_HEIGHT > area.bottom() {
                break;
            }
            let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
            let rect = Rect::new(area.right().saturating_sub(width + 1), y, width, TOAST_HEIGHT);
            y += TOAST_HEIGHT;

            let (color, tag) = match notification.severity {
                Severity::Info => (palette.directory, "info"),
                Severity::Success => (palette.success, "ok"),
                Severity::Error => (palette.error, "error"),
            };

            frame.render_widget(Clear, rect);
            let toast = Paragraph::new(Line::from(Span::styled(
                notification.message.clone(),
                Style::default().fg(palette.foreground),
            )))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(format!(" {tag} "))
                    .style(palette.base_style()),
            );
            frame.render_widget(toast, rect);
        }
    }
}
