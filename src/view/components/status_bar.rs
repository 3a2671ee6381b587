//! src/view/components/status_bar.rs
//! ============================================================================
//! # StatusBar: Keymap Hints and Scope Summary

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::app_state::AppState;
use crate::view::theme::Palette;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect, palette: &Palette) {
        let hints = [
            "[Tab] Focus",
            "[Enter] Open",
            "[m] Menu",
            "[r] Rename",
            "[d] Delete",
            "[n/N] New",
            "[Alt+1-9] Crumb",
            "[Ctrl+F] Filters",
            "[Ctrl+X] Dismiss",
            "[t] Theme",
            "[Ctrl+Q] Quit",
        ]
        .join("  ");

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(30)])
            .split(area);

        let left = Paragraph::new(Line::from(Span::styled(
            format!(" {hints}"),
            Style::default().fg(palette.muted),
        )))
        .alignment(Alignment::Left);

        let scope = match app.search.current_dir() {
            Some(dir) => format!("in {dir} "),
            None => format!("{} root(s) ", app.search.roots().len()),
        };
        let right = Paragraph::new(Line::from(Span::styled(
            scope,
            Style::default().fg(palette.directory),
        )))
        .alignment(Alignment::Right);

        frame.render_widget(left, chunks[0]);
        frame.render_widget(right, chunks[1]);
    }
}
