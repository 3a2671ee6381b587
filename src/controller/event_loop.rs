//! src/controller/event_loop.rs
//! ============================================================================
//! # Controller: Action Dispatch and Key Routing
//!
//! The controller owns the single action channel. Terminal events are pumped
//! into it alongside timer firings and task settlements, so every state
//! mutation happens here, one action at a time, under one lock. Key routing
//! is strictly prioritized: a live dialog owns the keyboard, then an open
//! context menu, then whichever pane has focus.

use std::sync::Arc;

use crossterm::event::{Event as TermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, error};

use crate::controller::actions::Action;
use crate::error::AppError;
use crate::model::app_state::AppState;
use crate::model::dialog::{DialogDecision, DialogIntent, DialogSpec};
use crate::model::file_ops::OperationKind;
use crate::model::search::Settlement;
use crate::model::ui_state::{FilterField, Focus, MenuAction};

/// Preset kinds toggled by number keys while the file-type filter row is
/// focused. Order matches the rendered row.
pub const FILE_TYPE_OPTIONS: [&str; 6] = [
    "documents", "images", "videos", "audio", "archives", "code",
];

pub struct Controller {
    app: Arc<Mutex<AppState>>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl Controller {
    pub fn new(app: Arc<Mutex<AppState>>, action_rx: mpsc::UnboundedReceiver<Action>) -> Self {
        Self { app, action_rx }
    }

    /// Pump crossterm events into the action channel until it closes.
    pub fn spawn_terminal_events(action_tx: mpsc::UnboundedSender<Action>) {
        tokio::spawn(async move {
            let mut events = EventStream::new();
            while let Some(event) = events.next().await {
                let action = match event {
                    Ok(TermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        Some(Action::Key(key))
                    }
                    Ok(TermEvent::Resize(w, h)) => Some(Action::Resize(w, h)),
                    Ok(_) => None,
                    Err(e) => {
                        error!("terminal event stream error: {e}");
                        break;
                    }
                };
                if let Some(action) = action {
                    if action_tx.send(action).is_err() {
                        break;
                    }
                }
            }
        });
    }

    pub async fn next_action(&mut self) -> Option<Action> {
        self.action_rx.recv().await
    }

    /// Apply one action to the app state.
    pub async fn dispatch_action(&self, action: Action) {
        let mut guard = self.app.lock().await;
        let app = &mut *guard;

        match action {
            Action::Key(key) => handle_key(app, key),
            Action::Resize(_, _) => {}
            Action::Quit => app.should_quit = true,
            Action::DebounceElapsed { generation } => app.search.debounce_elapsed(generation),
            Action::SearchSettled { seq, outcome } => settle_search(app, seq, outcome),
            Action::OperationSettled { kind, outcome } => settle_operation(app, kind, outcome),
            Action::NotificationTimeout { id } => app.notifications.timeout(id),
            Action::NotificationSwept { id } => app.notifications.swept(id),
            Action::DialogSwept { id } => app.dialogs.swept(id),
        }

        app.redraw = true;
    }
}

fn settle_search(
    app: &mut AppState,
    seq: u64,
    outcome: Result<Vec<crate::api::protocol::ResultEntry>, String>,
) {
    match app.search.settled(seq, outcome) {
        Settlement::Applied { count } => app.ui.reset_for_new_results(count),
        Settlement::Failed(error) => {
            app.notifications.error(format!("Search failed: {error}"));
        }
        Settlement::Stale => {}
    }
}

/// Reconcile a settled file operation: success notifies and refreshes the
/// listing (Open excepted); failure notifies with the server's message or the
/// operation's fallback, and never refreshes.
fn settle_operation(
    app: &mut AppState,
    kind: OperationKind,
    outcome: Result<(), Option<String>>,
) {
    match outcome {
        Ok(()) => {
            app.notifications.success(kind.success_message());
            if kind.mutates() {
                app.search.refresh();
            }
        }
        Err(message) => {
            app.notifications
                .error(message.unwrap_or_else(|| kind.fallback_error().to_string()));
        }
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Global shortcuts first.
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        app.should_quit = true;
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('x') {
        app.notifications.close_oldest();
        return;
    }

    if app.dialogs.is_open() {
        handle_dialog_key(app, key);
        return;
    }
    if app.ui.context_menu.is_some() {
        handle_context_menu_key(app, key);
        return;
    }

    if key.code == KeyCode::Tab {
        app.ui.focus = app.ui.focus.next(app.search.advanced_open());
        return;
    }

    match app.ui.focus {
        Focus::SearchBar => handle_search_bar_key(app, key),
        Focus::Results => handle_results_key(app, key),
        Focus::Filters => handle_filter_key(app, key),
    }
}

fn handle_dialog_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            if let Some(decision) = app.dialogs.confirm() {
                route_decision(app, decision);
            }
        }
        KeyCode::Esc => {
            if let Some(decision) = app.dialogs.cancel() {
                route_decision(app, decision);
            }
        }
        KeyCode::Char(c) => {
            if let Some(session) = app.dialogs.current_mut() {
                session.type_char(c);
            }
        }
        KeyCode::Backspace => {
            if let Some(session) = app.dialogs.current_mut() {
                session.backspace();
            }
        }
        _ => {}
    }
}

fn route_decision(app: &mut AppState, decision: DialogDecision) {
    match decision.intent {
        DialogIntent::Operation(op_id) => {
            if decision.confirmed {
                if let Err(error) = app.ops.confirmed(op_id, decision.value) {
                    notify_rejection(app, error);
                }
            } else {
                app.ops.cancelled(op_id);
            }
        }
        DialogIntent::AddSearchRoot => {
            if decision.confirmed {
                if let Some(value) = decision.value {
                    app.add_search_root(&value);
                }
            }
        }
        DialogIntent::Info => {}
    }
}

fn handle_context_menu_key(app: &mut AppState, key: KeyEvent) {
    let Some(menu) = app.ui.context_menu.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc => app.ui.close_context_menu(),
        KeyCode::Up => menu.select_prev(),
        KeyCode::Down => menu.select_next(),
        KeyCode::Enter => {
            let action = menu.chosen();
            let index = menu.entry_index;
            app.ui.close_context_menu();
            app.ui.table.select(Some(index));
            match action {
                MenuAction::Operation(kind) => start_operation(app, kind),
                MenuAction::Properties => show_properties(app),
            }
        }
        // Any other interaction dismisses the menu.
        _ => app.ui.close_context_menu(),
    }
}

fn show_properties(app: &mut AppState) {
    let Some(entry) = app
        .ui
        .selected()
        .and_then(|i| app.search.results().get(i))
        .cloned()
    else {
        return;
    };
    let kind = if entry.is_directory { "Folder" } else { "File" };
    let spec = DialogSpec {
        title: "Properties".to_string(),
        message: format!(
            "{}\nLocation: {}\nType: {kind}\nSize: {}\nModified: {}",
            entry.display_name, entry.parent_path, entry.size_formatted, entry.modified_formatted
        ),
        input_label: None,
        input_value: String::new(),
        confirm_label: "OK".to_string(),
        cancel_label: "Close".to_string(),
        destructive: false,
        intent: DialogIntent::Info,
    };
    if let Err(error) = app.dialogs.open(spec) {
        debug!("properties dialog rejected: {error}");
    }
}

fn handle_search_bar_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let open = !app.search.advanced_open();
            app.search.set_advanced_open(open);
        }
        KeyCode::Char(c) => app.search.push_char(c),
        KeyCode::Backspace => app.search.backspace(),
        KeyCode::Enter => app.search.submit_explicit(),
        KeyCode::Esc => app.search.set_input(""),
        KeyCode::Down => app.ui.focus = Focus::Results,
        _ => {}
    }
}

fn handle_results_key(app: &mut AppState, key: KeyEvent) {
    let len = app.search.results().len();
    match key.code {
        KeyCode::Up => app.ui.select_prev(len),
        KeyCode::Down => app.ui.select_next(len),
        KeyCode::Enter => activate_selection(app),
        KeyCode::Backspace => app.search.navigate_up(),
        KeyCode::F(5) => app.search.refresh(),
        KeyCode::Char('m') => app.ui.open_context_menu(),
        KeyCode::Char('i') => show_properties(app),
        KeyCode::Char('o') => start_operation(app, OperationKind::Open),
        KeyCode::Char('c') => start_operation(app, OperationKind::Copy),
        KeyCode::Char('v') => start_operation(app, OperationKind::Move),
        KeyCode::Char('r') => start_operation(app, OperationKind::Rename),
        KeyCode::Char('d') | KeyCode::Delete => start_operation(app, OperationKind::Delete),
        KeyCode::Char('n') => start_operation(app, OperationKind::CreateFile),
        KeyCode::Char('N') => start_operation(app, OperationKind::CreateFolder),
        KeyCode::Char('p') => open_add_root_dialog(app),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('s') => app.toggle_sidebar(),
        KeyCode::Char(c @ '1'..='9') if key.modifiers.contains(KeyModifiers::ALT) => {
            app.search.navigate_to_crumb((c as usize) - ('1' as usize));
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            if let Some(root) = app.search.roots().get(index).cloned() {
                app.search.navigate(&root);
            }
        }
        _ => {}
    }
}

fn activate_selection(app: &mut AppState) {
    let Some(entry) = app
        .ui
        .selected()
        .and_then(|i| app.search.results().get(i))
        .cloned()
    else {
        return;
    };
    if entry.is_directory {
        app.search.navigate(&entry.full_path);
    } else {
        start_operation(app, OperationKind::Open);
    }
}

fn start_operation(app: &mut AppState, kind: OperationKind) {
    let target = app
        .ui
        .selected()
        .and_then(|i| app.search.results().get(i))
        .cloned();
    let working_dir = app.search.working_dir();
    match app
        .ops
        .request(kind, target.as_ref(), working_dir, &mut app.dialogs)
    {
        Ok(()) => {}
        Err(AppError::DialogBusy) => {
            // Dropped by design; the live dialog keeps the keyboard anyway.
            debug!("{} dropped: dialog busy", kind.title());
        }
        Err(error) => notify_rejection(app, error),
    }
}

fn notify_rejection(app: &mut AppState, error: AppError) {
    match error {
        AppError::Rejected(message) => {
            app.notifications.error(message);
        }
        other => {
            app.notifications.error(other.to_string());
        }
    }
}

fn open_add_root_dialog(app: &mut AppState) {
    let spec = DialogSpec {
        title: "Add Search Path".to_string(),
        message: "Enter a directory to include in searches:".to_string(),
        input_label: Some("Directory Path:".to_string()),
        input_value: String::new(),
        confirm_label: "Add".to_string(),
        cancel_label: "Cancel".to_string(),
        destructive: false,
        intent: DialogIntent::AddSearchRoot,
    };
    if let Err(error) = app.dialogs.open(spec) {
        debug!("add-root dialog rejected: {error}");
    }
}

fn handle_filter_key(app: &mut AppState, key: KeyEvent) {
    let field = app.ui.filter_field;
    match key.code {
        KeyCode::Up => app.ui.filter_field = field.prev(),
        KeyCode::Down => app.ui.filter_field = field.next(),
        KeyCode::Enter => app.search.submit_explicit(),
        KeyCode::Char(' ') => match field {
            FilterField::CaseSensitive => {
                let filters = app.search.filters_mut();
                filters.case_sensitive = !filters.case_sensitive;
            }
            FilterField::IncludeHidden => {
                let filters = app.search.filters_mut();
                filters.include_hidden = !filters.include_hidden;
            }
            FilterField::UseRegex => {
                let filters = app.search.filters_mut();
                filters.use_regex = !filters.use_regex;
            }
            FilterField::SizeUnit => {
                let filters = app.search.filters_mut();
                filters.size_unit = filters.size_unit.next();
            }
            _ => {}
        },
        KeyCode::Char(c @ '1'..='6') if field == FilterField::FileTypes => {
            let index = (c as usize) - ('1' as usize);
            app.search
                .filters_mut()
                .toggle_file_type(FILE_TYPE_OPTIONS[index]);
        }
        KeyCode::Char(c) if field.is_text() => {
            edit_filter_text(app, field, Some(c));
        }
        KeyCode::Backspace if field.is_text() => {
            edit_filter_text(app, field, None);
        }
        _ => {}
    }
}

fn edit_filter_text(app: &mut AppState, field: FilterField, c: Option<char>) {
    let filters = app.search.filters_mut();
    let buffer = match field {
        FilterField::DateFrom => &mut filters.date_from,
        FilterField::DateTo => &mut filters.date_to,
        FilterField::SizeMin => &mut filters.size_min,
        FilterField::SizeMax => &mut filters.size_max,
        _ => return,
    };
    match c {
        Some(c) => buffer.push(c),
        None => {
            buffer.pop();
        }
    }
}
