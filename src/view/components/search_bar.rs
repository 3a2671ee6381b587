//! src/view/components/search_bar.rs
//! ============================================================================
//! # SearchBar: Query Input with Loading and Count Indicators
//!
//! The input buffer is drawn verbatim with a trailing cursor cell while
//! focused. The right side of the title line carries the loading spinner text
//! or the last completed result count.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::app_state::AppState;
use crate::model::ui_state::Focus;
use crate::view::theme::Palette;

pub struct SearchBar;

impl SearchBar {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect, palette: &Palette) {
        let focused = app.ui.focus == Focus::SearchBar && !app.dialogs.is_open();

        let status = if app.search.is_loading() {
            Span::styled(" Searching... ", Style::default().fg(palette.warning))
        } else if let Some(count) = app.search.result_count() {
            let label = match count {
                0 => " No results ".to_string(),
                1 => " 1 result ".to_string(),
                n => format!(" {n} results "),
            };
            Span::styled(label, Style::default().fg(palette.muted))
        } else {
            Span::raw("")
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.focus_border(focused))
            .title(" Search ")
            .title_alignment(Alignment::Left)
            .title_top(Line::from(status).right_aligned());

        let mut spans = vec![Span::styled(
            app.search.input().to_string(),
            Style::default().fg(palette.foreground),
        )];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(palette.accent)));
        } else if app.search.input().is_empty() {
            spans.push(Span::styled(
                "Type to search...",
                Style::default().fg(palette.muted),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, area);
    }
}
