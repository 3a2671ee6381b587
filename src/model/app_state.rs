//! src/model/app_state.rs
//! ============================================================================
//! # AppState: The Owning Aggregate
//!
//! Single mutable owner of every sub-model. The controller locks this once
//! per action; sub-models talk to each other only through methods here, never
//! by holding references to one another.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

use crate::api::client::Backend;
use crate::config::config::Config;
use crate::controller::actions::Action;
use crate::model::dialog::DialogService;
use crate::model::file_ops::FileOpOrchestrator;
use crate::model::notifications::NotificationCenter;
use crate::model::search::SearchCoordinator;
use crate::model::ui_state::UiState;

pub struct AppState {
    pub config: Config,
    pub search: SearchCoordinator,
    pub ops: FileOpOrchestrator,
    pub dialogs: DialogService,
    pub notifications: NotificationCenter,
    pub ui: UiState,
    pub should_quit: bool,
    /// Set by any state change the view must reflect; cleared after a draw.
    pub redraw: bool,
}

impl AppState {
    pub fn new(
        config: Config,
        backend: Arc<dyn Backend>,
        actions: UnboundedSender<Action>,
    ) -> Self {
        let search = SearchCoordinator::new(
            Arc::clone(&backend),
            actions.clone(),
            config.debounce_delay,
            config.path_history.clone(),
        );
        let ops = FileOpOrchestrator::new(backend, actions.clone());
        let dialogs = DialogService::new(actions.clone(), config.transition_delay);
        let notifications = NotificationCenter::new(actions, config.transition_delay);

        Self {
            config,
            search,
            ops,
            dialogs,
            notifications,
            ui: UiState::default(),
            should_quit: false,
            redraw: true,
        }
    }

    /// Add a search root to the active scope and the persisted history.
    pub fn add_search_root(&mut self, path: &str) {
        let path = path.trim();
        if path.is_empty() {
            self.notifications.error("Path cannot be empty");
            return;
        }
        info!("adding search root {path}");
        self.search.add_root(path);
        self.config.remember_path(path);
        self.persist_config();
        self.notifications.success(format!("Added search path: {path}"));
    }

    pub fn toggle_theme(&mut self) {
        self.config.theme = self.config.theme.toggled();
        self.persist_config();
    }

    pub fn toggle_sidebar(&mut self) {
        self.config.sidebar_collapsed = !self.config.sidebar_collapsed;
        self.persist_config();
    }

    /// Fire-and-forget save; persistence failures are logged, never surfaced.
    pub fn persist_config(&self) {
        let config = self.config.clone();
        tokio::spawn(async move {
            if let Err(error) = config.save().await {
                warn!("failed to persist config: {error}");
            }
        });
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("search", &self.search)
            .field("ops", &self.ops)
            .field("should_quit", &self.should_quit)
            .finish()
    }
}
