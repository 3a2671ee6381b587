//! src/view/components/context_menu.rs
//! ============================================================================
//! # ContextMenu: Per-Row Operation Popup
//!
//! Anchored next to the results area at the row it was opened on. The bound
//! entry's name is the title so the target is unambiguous.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

use crate::model::app_state::AppState;
use crate::model::ui_state::CONTEXT_MENU_ITEMS;
use crate::view::theme::Palette;

pub struct ContextMenu;

impl ContextMenu {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, results_area: Rect, palette: &Palette) {
        let Some(menu) = &app.ui.context_menu else {
            return;
        };
        let Some(entry) = app.search.results().get(menu.entry_index) else {
            return;
        };

        let height = CONTEXT_MENU_ITEMS.len() as u16 + 2;
        let width = 20u16.min(results_area.width);
        // Next to the anchored row, clamped into the results area.
        let y = (results_area.y + 1 + menu.entry_index as u16)
            .min(results_area.bottom().saturating_sub(height));
        let x = results_area.x + results_area.width / 3;
        let rect = Rect::new(x, y, width, height.min(results_area.height));

        let items: Vec<ListItem<'_>> = CONTEXT_MENU_ITEMS
            .iter()
            .map(|(label, _)| ListItem::new(Line::raw(*label)))
            .collect();

        let mut state = ListState::default();
        state.select(Some(menu.selected));

        frame.render_widget(Clear, rect);
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.accent))
                    .title(format!(" {} ", entry.display_name))
                    .style(palette.base_style()),
            )
            .highlight_style(palette.selection_style());
        frame.render_stateful_widget(list, rect, &mut state);
    }
}
