//! src/view/components/dialog.rs
//! ============================================================================
//! # Dialog: The Modal Confirmation Overlay
//!
//! Centered, drawn over a cleared region. A destructive dialog gets the error
//! border; a requested text field renders below the message, with the
//! still-selected prefill highlighted whole.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::model::app_state::AppState;
use crate::view::theme::Palette;

pub struct Dialog;

impl Dialog {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect, palette: &Palette) {
        let Some(session) = app.dialogs.current() else {
            return;
        };

        let message_lines = session.spec.message.lines().count() as u16;
        let height = (message_lines + 5).clamp(9, area.height);
        let overlay = centered_rect(50, height, area);
        frame.render_widget(Clear, overlay);

        let border = if session.spec.destructive {
            Style::default().fg(palette.error)
        } else {
            Style::default().fg(palette.accent)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} ", session.spec.title))
            .style(palette.base_style());
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(2),    // message
                Constraint::Length(2), // input field
                Constraint::Length(1), // buttons
            ])
            .split(inner);

        let message = Paragraph::new(session.spec.message.clone())
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(palette.foreground));
        frame.render_widget(message, chunks[0]);

        if let Some(label) = &session.spec.input_label {
            let value_style = if session.input_selected() {
                // Prefill still selected: the next keystroke replaces it.
                Style::default()
                    .bg(palette.accent)
                    .fg(palette.background)
            } else {
                Style::default().fg(palette.foreground)
            };
            let field = Paragraph::new(Line::from(vec![
                Span::styled(format!("{label} "), Style::default().fg(palette.muted)),
                Span::styled(session.input.clone(), value_style),
                Span::styled("█", Style::default().fg(palette.accent)),
            ]));
            frame.render_widget(field, chunks[1]);
        }

        let confirm_style = if session.spec.destructive {
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD)
        };
        let buttons = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("[Enter] {}", session.spec.confirm_label),
                confirm_style,
            ),
            Span::raw("   "),
            Span::styled(
                format!("[Esc] {}", session.spec.cancel_label),
                Style::default().fg(palette.muted),
            ),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(buttons, chunks[2]);
    }
}

fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
