//! src/model/ui_state.rs
//! ============================================================================
//! # UiState: Focus, Selection, and Transient Overlays
//!
//! Pure view-side state with no backend interaction: which pane owns the
//! keyboard, which result row is selected, whether the singleton context menu
//! is open and on which row, and which advanced-filter field is being edited.

use ratatui::widgets::TableState;

use crate::model::file_ops::OperationKind;

/// Panes that can own the keyboard. Dialogs and the context menu take
/// priority over all of these while open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    SearchBar,
    Results,
    Filters,
}

impl Focus {
    /// Tab order; the filter pane is skipped while the panel is closed.
    pub fn next(self, filters_open: bool) -> Self {
        match self {
            Focus::SearchBar => Focus::Results,
            Focus::Results if filters_open => Focus::Filters,
            Focus::Results => Focus::SearchBar,
            Focus::Filters => Focus::SearchBar,
        }
    }
}

/// Editable fields of the advanced panel, in visual order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterField {
    #[default]
    FileTypes,
    CaseSensitive,
    IncludeHidden,
    UseRegex,
    DateFrom,
    DateTo,
    SizeMin,
    SizeMax,
    SizeUnit,
}

impl FilterField {
    pub const ALL: [FilterField; 9] = [
        FilterField::FileTypes,
        FilterField::CaseSensitive,
        FilterField::IncludeHidden,
        FilterField::UseRegex,
        FilterField::DateFrom,
        FilterField::DateTo,
        FilterField::SizeMin,
        FilterField::SizeMax,
        FilterField::SizeUnit,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// True for the fields edited as free text.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            FilterField::DateFrom
                | FilterField::DateTo
                | FilterField::SizeMin
                | FilterField::SizeMax
        )
    }
}

/// What a context-menu entry does when chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Operation(OperationKind),
    Properties,
}

/// Entries of the per-row context menu, in display order.
pub const CONTEXT_MENU_ITEMS: [(&str, MenuAction); 6] = [
    ("Open", MenuAction::Operation(OperationKind::Open)),
    ("Copy to...", MenuAction::Operation(OperationKind::Copy)),
    ("Move to...", MenuAction::Operation(OperationKind::Move)),
    ("Rename", MenuAction::Operation(OperationKind::Rename)),
    ("Delete", MenuAction::Operation(OperationKind::Delete)),
    ("Properties", MenuAction::Properties),
];

/// The singleton context menu: at most one open, bound to one result row.
/// Opening for a different row replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenu {
    pub entry_index: usize,
    pub selected: usize,
}

impl ContextMenu {
    pub fn new(entry_index: usize) -> Self {
        Self {
            entry_index,
            selected: 0,
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % CONTEXT_MENU_ITEMS.len();
    }

    pub fn select_prev(&mut self) {
        self.selected =
            (self.selected + CONTEXT_MENU_ITEMS.len() - 1) % CONTEXT_MENU_ITEMS.len();
    }

    pub fn chosen(&self) -> MenuAction {
        CONTEXT_MENU_ITEMS[self.selected].1
    }
}

#[derive(Debug, Default)]
pub struct UiState {
    pub focus: Focus,
    pub table: TableState,
    pub context_menu: Option<ContextMenu>,
    pub filter_field: FilterField,
}

impl UiState {
    pub fn selected(&self) -> Option<usize> {
        self.table.selected()
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.table.select(None);
            return;
        }
        let next = match self.table.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.table.select(Some(next));
    }

    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            self.table.select(None);
            return;
        }
        let prev = self.table.selected().map_or(0, |i| i.saturating_sub(1));
        self.table.select(Some(prev));
    }

    /// Fresh results invalidate the selection and any open menu.
    pub fn reset_for_new_results(&mut self, len: usize) {
        self.context_menu = None;
        self.table.select(if len == 0 { None } else { Some(0) });
    }

    /// Open the menu for the currently selected row; reopening on another row
    /// replaces the existing menu.
    pub fn open_context_menu(&mut self) {
        if let Some(index) = self.table.selected() {
            self.context_menu = Some(ContextMenu::new(index));
        }
    }

    pub fn close_context_menu(&mut self) {
        self.context_menu = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_clamps_to_the_result_range() {
        let mut ui = UiState::default();
        ui.select_next(3);
        ui.select_next(3);
        ui.select_next(3);
        ui.select_next(3);
        assert_eq!(ui.selected(), Some(2));

        ui.select_prev(3);
        ui.select_prev(3);
        ui.select_prev(3);
        assert_eq!(ui.selected(), Some(0));

        ui.select_next(0);
        assert_eq!(ui.selected(), None);
    }

    #[test]
    fn new_results_reset_selection_and_close_the_menu() {
        let mut ui = UiState::default();
        ui.select_next(5);
        ui.open_context_menu();
        assert!(ui.context_menu.is_some());

        ui.reset_for_new_results(2);
        assert!(ui.context_menu.is_none());
        assert_eq!(ui.selected(), Some(0));

        ui.reset_for_new_results(0);
        assert_eq!(ui.selected(), None);
    }

    #[test]
    fn reopening_the_menu_rebinds_it_to_the_new_row() {
        let mut ui = UiState::default();
        ui.select_next(5);
        ui.open_context_menu();
        assert_eq!(ui.context_menu.as_ref().unwrap().entry_index, 0);

        ui.select_next(5);
        ui.open_context_menu();
        assert_eq!(ui.context_menu.as_ref().unwrap().entry_index, 1);
    }

    #[test]
    fn context_menu_selection_wraps() {
        let mut menu = ContextMenu::new(0);
        menu.select_prev();
        assert_eq!(menu.selected, CONTEXT_MENU_ITEMS.len() - 1);
        menu.select_next();
        assert_eq!(menu.selected, 0);
        assert_eq!(menu.chosen(), MenuAction::Operation(OperationKind::Open));
    }

    #[test]
    fn tab_order_skips_the_closed_filter_pane() {
        assert_eq!(Focus::SearchBar.next(false), Focus::Results);
        assert_eq!(Focus::Results.next(false), Focus::SearchBar);
        assert_eq!(Focus::Results.next(true), Focus::Filters);
        assert_eq!(Focus::Filters.next(true), Focus::SearchBar);
    }
}
