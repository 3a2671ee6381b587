//! lib.rs — Main Library Entry for the fastique Terminal Client
//! -----------------------------------------------
//! Explicitly exposes the api, config, controller, model, and view modules.
//! Only re-export what you want public in the library crate root.

/// --- Error handling (unified error type for app) ---
pub mod error;

/// --- Outbound calls: wire protocol and HTTP transport ---
pub mod api {
    pub mod client;
    pub mod protocol;
}

/// --- Configuration: persisted client state (theme, roots, layout) ---
pub mod config {
    pub mod config;
}

/// --- Controller/event loop (main async event handling) ---
pub mod controller {
    pub mod actions;
    pub mod event_loop;
}

/// --- State/data models (MVC model) ---
pub mod model {
    pub mod app_state;
    pub mod dialog;
    pub mod file_ops;
    pub mod notifications;
    pub mod search;
    pub mod ui_state;
}

/// --- UI rendering: all view logic and components ---
pub mod view {
    pub mod icons;
    pub mod theme;
    pub mod ui; // main UI orchestrator
    pub mod components {
        pub mod advanced_panel;
        pub mod breadcrumbs;
        pub mod context_menu;
        pub mod dialog;
        pub mod notifications;
        pub mod results_table;
        pub mod search_bar;
        pub mod sidebar;
        pub mod status_bar;
    }
    pub use ui::View;
}

/// --- Timers and small helpers ---
pub mod util {
    pub mod debounce;
}

pub mod logging;
pub use logging::Logger;

/// --- Crate-level re-exports for the most important types ---
pub use error::AppError;
pub use model::app_state::AppState;
