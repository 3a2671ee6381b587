//! src/view/ui.rs
//! ============================================================================
//! # View: TUI Render Orchestrator
//!
//! One pass per frame: fixed chrome top to bottom, then the overlays in
//! priority order (context menu under dialog under notifications, matching
//! the keyboard priority in the controller).

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::model::app_state::AppState;
use crate::view::components::advanced_panel::AdvancedPanel;
use crate::view::components::breadcrumbs::Breadcrumbs;
use crate::view::components::context_menu::ContextMenu;
use crate::view::components::dialog::Dialog;
use crate::view::components::notifications::Notifications;
use crate::view::components::results_table::ResultsTable;
use crate::view::components::search_bar::SearchBar;
use crate::view::components::sidebar::Sidebar;
use crate::view::components::status_bar::StatusBar;
use crate::view::theme::Palette;

const SIDEBAR_WIDTH: u16 = 26;
const FILTER_PANEL_HEIGHT: u16 = 6;

pub struct View;

impl View {
    /// Draws the full UI for one frame; called from the `terminal.draw`
    /// callback.
    pub fn redraw(frame: &mut Frame<'_>, app: &mut AppState) {
        let palette = Palette::for_theme(app.config.theme);
        let full = frame.area();
        frame.render_widget(
            ratatui::widgets::Block::default().style(palette.base_style()),
            full,
        );

        let filter_height = if app.search.advanced_open() {
            FILTER_PANEL_HEIGHT
        } else {
            0
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),             // search bar
                Constraint::Length(1),             // breadcrumbs
                Constraint::Length(filter_height), // advanced filters
                Constraint::Min(3),                // sidebar + results
                Constraint::Length(1),             // status bar
            ])
            .split(full);

        SearchBar::render(frame, app, chunks[0], &palette);
        Breadcrumbs::render(frame, app, chunks[1], &palette);
        if app.search.advanced_open() {
            AdvancedPanel::render(frame, app, chunks[2], &palette);
        }

        let results_area = Self::middle(frame, app, chunks[3], &palette);
        StatusBar::render(frame, app, chunks[4], &palette);

        ContextMenu::render(frame, app, results_area, &palette);
        Dialog::render(frame, app, full, &palette);
        Notifications::render(frame, app, full, &palette);
    }

    /// Sidebar (unless collapsed) plus the results table; returns the table's
    /// area for overlay anchoring.
    fn middle(frame: &mut Frame<'_>, app: &mut AppState, area: Rect, palette: &Palette) -> Rect {
        if app.config.sidebar_collapsed {
            ResultsTable::render(frame, app, area, palette);
            return area;
        }
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)])
            .split(area);
        Sidebar::render(frame, app, chunks[0], palette);
        ResultsTable::render(frame, app, chunks[1], palette);
        chunks[1]
    }
}
