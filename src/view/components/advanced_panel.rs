//! src/view/components/advanced_panel.rs
//! ============================================================================
//! # AdvancedPanel: Search Filters
//!
//! Visible only while toggled open. The focused field carries the accent
//! marker; checkboxes render as `[x]`, text fields show their raw buffer (bad
//! input simply never reaches the wire).

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::controller::event_loop::FILE_TYPE_OPTIONS;
use crate::model::app_state::AppState;
use crate::model::ui_state::{FilterField, Focus};
use crate::view::theme::Palette;

pub struct AdvancedPanel;

impl AdvancedPanel {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect, palette: &Palette) {
        let focused = app.ui.focus == Focus::Filters && !app.dialogs.is_open();
        let filters = app.search.filters();
        let field = app.ui.filter_field;

        let marker = |f: FilterField| {
            if focused && field == f {
                Span::styled("▸ ", Style::default().fg(palette.accent))
            } else {
                Span::raw("  ")
            }
        };
        let checkbox = |on: bool| if on { "[x]" } else { "[ ]" };

        let types_line = {
            let mut spans = vec![marker(FilterField::FileTypes), Span::raw("Types: ")];
            for (i, kind) in FILE_TYPE_OPTIONS.iter().enumerate() {
                let active = filters.file_types.contains(*kind);
                let style = if active {
                    Style::default()
                        .fg(palette.success)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(palette.muted)
                };
                spans.push(Span::styled(format!("{}:{kind} ", i + 1), style));
            }
            Line::from(spans)
        };

        let toggles_line = Line::from(vec![
            marker(FilterField::CaseSensitive),
            Span::raw(format!("{} Case sensitive   ", checkbox(filters.case_sensitive))),
            marker(FilterField::IncludeHidden),
            Span::raw(format!("{} Hidden files   ", checkbox(filters.include_hidden))),
            marker(FilterField::UseRegex),
            Span::raw(format!("{} Regex", checkbox(filters.use_regex))),
        ]);

        let text_field = |f: FilterField, label: &str, value: &str| {
            let style = if focused && field == f {
                Style::default().fg(palette.foreground)
            } else {
                Style::default().fg(palette.muted)
            };
            vec![
                marker(f),
                Span::raw(format!("{label} ")),
                Span::styled(format!("[{value:<10}]"), style),
                Span::raw("  "),
            ]
        };

        let mut date_spans = text_field(FilterField::DateFrom, "From:", &filters.date_from);
        date_spans.extend(text_field(FilterField::DateTo, "To:", &filters.date_to));
        let date_line = Line::from(date_spans);

        let mut size_spans = text_field(FilterField::SizeMin, "Min:", &filters.size_min);
        size_spans.extend(text_field(FilterField::SizeMax, "Max:", &filters.size_max));
        size_spans.push(marker(FilterField::SizeUnit));
        size_spans.push(Span::styled(
            format!("Unit: {}", filters.size_unit.label()),
            Style::default().fg(palette.warning),
        ));
        let size_line = Line::from(size_spans);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.focus_border(focused))
            .title(" Filters ");

        let paragraph =
            Paragraph::new(vec![types_line, toggles_line, date_line, size_line]).block(block);
        frame.render_widget(paragraph, area);
    }
}
