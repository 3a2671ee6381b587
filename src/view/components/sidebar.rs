//! src/view/components/sidebar.rs
//! ============================================================================
//! # Sidebar: Search Roots
//!
//! Lists the active search roots with the digit that navigates into each.
//! Collapsible; the collapsed state is persisted.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::model::app_state::AppState;
use crate::view::theme::Palette;

pub struct Sidebar;

impl Sidebar {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect, palette: &Palette) {
        let items: Vec<ListItem<'_>> = app
            .search
            .roots()
            .iter()
            .enumerate()
            .map(|(i, root)| {
                let active = app.search.current_dir() == Some(root.as_str());
                let style = if active {
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(palette.foreground)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{} ", i + 1),
                        Style::default().fg(palette.muted),
                    ),
                    Span::styled(root.clone(), style),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.muted))
                .title(" Paths [p: add] "),
        );
        frame.render_widget(list, area);
    }
}
