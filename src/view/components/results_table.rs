//! src/view/components/results_table.rs
//! ============================================================================
//! # ResultsTable: The Single Visible Result Set
//!
//! Renders whatever the coordinator currently holds: name with icon, parent
//! path, formatted size and modified time. An empty completed search shows
//! the no-results placeholder; before any search at all, a short hint.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::model::app_state::AppState;
use crate::model::ui_state::Focus;
use crate::view::icons;
use crate::view::theme::Palette;

pub struct ResultsTable;

impl ResultsTable {
    pub fn render(frame: &mut Frame<'_>, app: &mut AppState, area: Rect, palette: &Palette) {
        let focused = app.ui.focus == Focus::Results && !app.dialogs.is_open();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.focus_border(focused))
            .title(" Results ");

        if app.search.results().is_empty() {
            let hint = match app.search.result_count() {
                Some(_) => "No files found",
                None => "Search above, or press a root number to browse",
            };
            let placeholder = Paragraph::new(hint)
                .style(Style::default().fg(palette.muted))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(placeholder, area);
            return;
        }

        let header = Row::new(vec!["Name", "Location", "Size", "Modified"]).style(
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        );

        let rows = app.search.results().iter().map(|entry| {
            let name_style = if entry.is_directory {
                Style::default()
                    .fg(palette.directory)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.foreground)
            };
            let icon = icons::for_entry(entry.icon_class.as_deref(), entry.is_directory);

            Row::new(vec![
                Cell::from(format!("{icon} {}", entry.display_name)).style(name_style),
                Cell::from(entry.parent_path.clone())
                    .style(Style::default().fg(palette.muted)),
                Cell::from(entry.size_formatted.clone()),
                Cell::from(entry.modified_formatted.clone()),
            ])
        });

        let widths = [
            Constraint::Percentage(35),
            Constraint::Percentage(35),
            Constraint::Length(10),
            Constraint::Percentage(20),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(palette.selection_style())
            .column_spacing(1);

        frame.render_stateful_widget(table, area, &mut app.ui.table);
    }
}
