//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Centralized Application Events
//!
//! Defines the `Action` enum, which represents all user inputs, timer
//! firings, and background-task settlements the application can respond to.
//! Every suspension point in the app (an outbound call, a timer) reports back
//! through exactly one of these variants, so the controller is the single
//! place where ordering and staleness are decided.

use crossterm::event::KeyEvent;

use crate::api::protocol::ResultEntry;
use crate::model::file_ops::OperationKind;

/// A high-level event the controller dispatches against the app state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A keyboard event.
    Key(KeyEvent),
    /// A terminal resize event.
    Resize(u16, u16),
    /// Quit the application.
    Quit,
    /// The search-input debounce timer fired. Stale generations are ignored.
    DebounceElapsed { generation: u64 },
    /// A search call settled. `seq` identifies the dispatch; responses to
    /// superseded dispatches are discarded.
    SearchSettled {
        seq: u64,
        outcome: Result<Vec<ResultEntry>, String>,
    },
    /// A file-operation call settled. `Err` carries the server-supplied
    /// message when there was one.
    OperationSettled {
        kind: OperationKind,
        outcome: Result<(), Option<String>>,
    },
    /// A notification's auto-dismiss timer fired.
    NotificationTimeout { id: u64 },
    /// A dismissed notification's transition delay elapsed; remove it.
    NotificationSwept { id: u64 },
    /// A decided dialog's transition delay elapsed; release it.
    DialogSwept { id: u64 },
}
