//! src/model/dialog.rs
//! ============================================================================
//! # DialogService: One Modal at a Time
//!
//! A dialog session is a single user decision: confirm (with the text field's
//! value if one was requested) or cancel (no value). At most one live session
//! exists; opening another while one is undecided is rejected with
//! `DialogBusy` and the requesting operation is dropped before any side
//! effect. A decided session is never reusable: deciding takes it out of the
//! service immediately, and the id lingers in a teardown list for the fixed
//! transition delay, so a dismiss animation has time to play out.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;
use uuid::Uuid;

use crate::controller::actions::Action;
use crate::error::AppError;
use crate::util::debounce::schedule;

/// What the controller should do with the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogIntent {
    /// Confirm/cancel a pending file operation.
    Operation(Uuid),
    /// Add a search root to the scope and path history.
    AddSearchRoot,
    /// Read-only details (entry properties); the decision is discarded.
    Info,
}

/// Everything needed to open a session. `input_label` requests a single-line
/// text field, pre-filled with `input_value`; `destructive` switches the
/// confirm button to warning style.
#[derive(Debug, Clone)]
pub struct DialogSpec {
    pub title: String,
    pub message: String,
    pub input_label: Option<String>,
    pub input_value: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub destructive: bool,
    pub intent: DialogIntent,
}

/// A live session. The input buffer starts pre-selected: the first edit
/// replaces the pre-filled value wholesale, like a focused-and-selected
/// text field.
#[derive(Debug, Clone)]
pub struct DialogSession {
    pub id: u64,
    pub spec: DialogSpec,
    pub input: String,
    input_selected: bool,
}

impl DialogSession {
    pub fn has_input(&self) -> bool {
        self.spec.input_label.is_some()
    }

    /// True while the prefill is still selected (the view renders it
    /// highlighted).
    pub fn input_selected(&self) -> bool {
        self.input_selected
    }

    pub fn type_char(&mut self, c: char) {
        if !self.has_input() {
            return;
        }
        if self.input_selected {
            self.input.clear();
            self.input_selected = false;
        }
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        if !self.has_input() {
            return;
        }
        if self.input_selected {
            self.input.clear();
            self.input_selected = false;
        } else {
            self.input.pop();
        }
    }
}

/// The user's decision, routed by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogDecision {
    pub intent: DialogIntent,
    /// `Some` only when the session requested a text field and the user
    /// confirmed.
    pub value: Option<String>,
    pub confirmed: bool,
}

#[derive(Debug)]
pub struct DialogService {
    current: Option<DialogSession>,
    /// Ids awaiting their teardown sweep. Nothing renders these; they keep
    /// the decided-but-not-released phase observable.
    closing: Vec<u64>,
    next_id: u64,
    actions: UnboundedSender<Action>,
    transition: Duration,
}

impl DialogService {
    pub fn new(actions: UnboundedSender<Action>, transition: Duration) -> Self {
        Self {
            current: None,
            closing: Vec::new(),
            next_id: 0,
            actions,
            transition,
        }
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&DialogSession> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut DialogSession> {
        self.current.as_mut()
    }

    /// Open a fresh session. Rejected while another session is undecided.
    pub fn open(&mut self, spec: DialogSpec) -> Result<u64, AppError> {
        if self.current.is_some() {
            debug!("dialog open rejected: another session is live");
            return Err(AppError::DialogBusy);
        }
        self.next_id += 1;
        let id = self.next_id;
        let input_selected = spec.input_label.is_some() && !spec.input_value.is_empty();
        self.current = Some(DialogSession {
            id,
            input: spec.input_value.clone(),
            input_selected,
            spec,
        });
        Ok(id)
    }

    /// Confirm resolves with the text field's current value, or no value when
    /// no field was requested.
    pub fn confirm(&mut self) -> Option<DialogDecision> {
        let session = self.current.take()?;
        let value = session.has_input().then(|| session.input.clone());
        self.teardown(session.id);
        Some(DialogDecision {
            intent: session.spec.intent,
            value,
            confirmed: true,
        })
    }

    /// Cancel resolves with no value.
    pub fn cancel(&mut self) -> Option<DialogDecision> {
        let session = self.current.take()?;
        self.teardown(session.id);
        Some(DialogDecision {
            intent: session.spec.intent,
            value: None,
            confirmed: false,
        })
    }

    /// Transition delay elapsed for a decided session.
    pub fn swept(&mut self, id: u64) {
        self.closing.retain(|&closing| closing != id);
    }

    fn teardown(&mut self, id: u64) {
        self.closing.push(id);
        schedule(
            self.transition,
            self.actions.clone(),
            Action::DialogSwept { id },
        );
    }
}
