//! src/model/notifications.rs
//! ============================================================================
//! # NotificationCenter: Transient Status Messages
//!
//! Multiple notifications may coexist, each independently timed. Identity is
//! the numeric id handed out by `show`, never the message text, so duplicate
//! messages stack. Dismissal is two-phase: the "visible" flag drops first
//! (the view stops drawing it), and the entry is removed after the fixed
//! transition delay. Auto-dismiss and explicit close race safely: only the
//! first path to run the visible→leaving transition schedules the sweep, so
//! removal happens exactly once.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::controller::actions::Action;
use crate::util::debounce::schedule;

pub const DEFAULT_DURATION_MS: i64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    /// False once dismissal has begun; the sweep removes the entry later.
    pub visible: bool,
}

#[derive(Debug)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    next_id: u64,
    actions: UnboundedSender<Action>,
    transition: Duration,
}

impl NotificationCenter {
    pub fn new(actions: UnboundedSender<Action>, transition: Duration) -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
            actions,
            transition,
        }
    }

    /// Currently visible notifications, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter().filter(|n| n.visible)
    }

    /// Show a notification. `duration_ms <= 0` means never auto-dismiss.
    /// Returns the handle used for explicit close.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity, duration_ms: i64) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            message: message.into(),
            severity,
            visible: true,
        });

        if duration_ms > 0 {
            schedule(
                Duration::from_millis(duration_ms as u64),
                self.actions.clone(),
                Action::NotificationTimeout { id },
            );
        }
        id
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.show(message, Severity::Info, DEFAULT_DURATION_MS)
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.show(message, Severity::Success, DEFAULT_DURATION_MS)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.show(message, Severity::Error, DEFAULT_DURATION_MS)
    }

    /// Explicit close. No-op if the notification is already leaving or gone.
    pub fn close(&mut self, id: u64) {
        self.begin_dismiss(id);
    }

    /// Explicitly close the oldest visible notification, if any.
    pub fn close_oldest(&mut self) {
        if let Some(id) = self.items.iter().find(|n| n.visible).map(|n| n.id) {
            self.begin_dismiss(id);
        }
    }

    /// Auto-dismiss timer fired. No-op if already closed explicitly.
    pub fn timeout(&mut self, id: u64) {
        self.begin_dismiss(id);
    }

    /// Transition delay elapsed; drop the entry.
    pub fn swept(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    fn begin_dismiss(&mut self, id: u64) {
        let Some(item) = self.items.iter_mut().find(|n| n.id == id) else {
            return;
        };
        if !item.visible {
            // The other dismissal path got here first.
            return;
        }
        item.visible = false;
        debug!("notification {id} leaving");
        schedule(
            self.transition,
            self.actions.clone(),
            Action::NotificationSwept { id },
        );
    }
}
