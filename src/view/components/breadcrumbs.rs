//! src/view/components/breadcrumbs.rs
//! ============================================================================
//! # Breadcrumbs: Current Directory Trail
//!
//! One line, root segment first, separators between. Hidden (blank) while no
//! directory scope is active.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::app_state::AppState;
use crate::view::theme::Palette;

pub struct Breadcrumbs;

impl Breadcrumbs {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect, palette: &Palette) {
        let crumbs = app.search.breadcrumbs();
        if crumbs.is_empty() {
            return;
        }

        let mut spans: Vec<Span<'_>> = vec![Span::raw(" ")];
        for (i, crumb) in crumbs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" › ", Style::default().fg(palette.muted)));
            }
            let style = if i + 1 == crumbs.len() {
                Style::default()
                    .fg(palette.foreground)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.directory)
            };
            spans.push(Span::styled(crumb.label.clone(), style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
