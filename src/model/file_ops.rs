//! src/model/file_ops.rs
//! ============================================================================
//! # FileOpOrchestrator: Confirm, Request, Reconcile
//!
//! Every mutating operation follows one lifecycle: a dialog session gathers
//! the user's confirmation (and destination/name where one is needed), the
//! confirmed session is consumed into exactly one outbound request, and the
//! settlement is reconciled by the controller (success notification plus a
//! refresh of the current listing, or an error notification and no refresh).
//! Open is the exception: it has no dialog and no refresh.
//!
//! Failed or cancelled operations never mutate the result set locally; the
//! listing only changes through a fresh search.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::api::client::Backend;
use crate::api::protocol::{FileOpRequest, ResultEntry};
use crate::controller::actions::Action;
use crate::error::AppError;
use crate::model::dialog::{DialogIntent, DialogService, DialogSpec};

/// The seven server-backed operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Open,
    Copy,
    Move,
    Rename,
    Delete,
    CreateFile,
    CreateFolder,
}

impl OperationKind {
    pub fn title(self) -> &'static str {
        match self {
            OperationKind::Open => "Open File",
            OperationKind::Copy => "Copy File",
            OperationKind::Move => "Move File",
            OperationKind::Rename => "Rename File",
            OperationKind::Delete => "Delete File",
            OperationKind::CreateFile => "Create New File",
            OperationKind::CreateFolder => "Create New Folder",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            OperationKind::Open => "File opened",
            OperationKind::Copy => "File copied successfully",
            OperationKind::Move => "File moved successfully",
            OperationKind::Rename => "File renamed successfully",
            OperationKind::Delete => "File moved to trash",
            OperationKind::CreateFile => "File created successfully",
            OperationKind::CreateFolder => "Folder created successfully",
        }
    }

    /// Shown when the server rejects without a message of its own.
    pub fn fallback_error(self) -> &'static str {
        match self {
            OperationKind::Open => "Failed to open file",
            OperationKind::Copy => "Failed to copy file",
            OperationKind::Move => "Failed to move file",
            OperationKind::Rename => "Failed to rename file",
            OperationKind::Delete => "Failed to delete file",
            OperationKind::CreateFile => "Failed to create file",
            OperationKind::CreateFolder => "Failed to create folder",
        }
    }

    /// Mutating operations trigger a listing refresh after success; Open
    /// leaves the listing alone.
    pub fn mutates(self) -> bool {
        !matches!(self, OperationKind::Open)
    }
}

/// An operation that has opened its dialog and awaits the user's decision.
#[derive(Debug, Clone)]
struct PendingOperation {
    kind: OperationKind,
    /// Full path of the targeted entry; empty for the create operations.
    source_path: String,
    /// Directory the create operations resolve their new entry against.
    working_dir: Option<String>,
}

pub struct FileOpOrchestrator {
    backend: Arc<dyn Backend>,
    actions: UnboundedSender<Action>,
    pending: HashMap<Uuid, PendingOperation>,
}

impl FileOpOrchestrator {
    pub fn new(backend: Arc<dyn Backend>, actions: UnboundedSender<Action>) -> Self {
        Self {
            backend,
            actions,
            pending: HashMap::new(),
        }
    }

    /// Start an operation. Open dispatches immediately; everything else opens
    /// a dialog and parks the operation until the decision comes back. While
    /// another dialog is live this fails with `DialogBusy` and the operation
    /// is dropped before any side effect.
    pub fn request(
        &mut self,
        kind: OperationKind,
        target: Option<&ResultEntry>,
        working_dir: Option<String>,
        dialogs: &mut DialogService,
    ) -> Result<(), AppError> {
        let needs_target = !matches!(
            kind,
            OperationKind::CreateFile | OperationKind::CreateFolder
        );
        if needs_target && target.is_none() {
            return Err(AppError::Rejected("no entry selected".to_string()));
        }

        if let (OperationKind::Open, Some(entry)) = (kind, target) {
            self.dispatch(
                kind,
                FileOpRequest::Open {
                    path: entry.full_path.clone(),
                },
            );
            return Ok(());
        }

        let id = Uuid::new_v4();
        let spec = dialog_spec_for(kind, target, working_dir.as_deref(), id);
        dialogs.open(spec)?;

        self.pending.insert(
            id,
            PendingOperation {
                kind,
                source_path: target.map(|e| e.full_path.clone()).unwrap_or_default(),
                working_dir,
            },
        );
        Ok(())
    }

    /// The dialog was confirmed. Consumes the pending operation and issues its
    /// one request; an empty required value rejects without a request.
    pub fn confirmed(&mut self, op_id: Uuid, value: Option<String>) -> Result<(), AppError> {
        let Some(op) = self.pending.remove(&op_id) else {
            debug!("confirmation for unknown operation {op_id}");
            return Ok(());
        };

        let value = value.map(|v| v.trim().to_string());
        if matches!(value.as_deref(), Some("")) {
            return Err(AppError::Rejected(format!(
                "{} requires a value",
                op.kind.title()
            )));
        }

        let req = match op.kind {
            OperationKind::Open => unreachable!("open never parks a pending operation"),
            OperationKind::Copy => FileOpRequest::Copy {
                source: op.source_path,
                destination: value.unwrap_or_default(),
            },
            OperationKind::Move => FileOpRequest::Move {
                source: op.source_path,
                destination: value.unwrap_or_default(),
            },
            OperationKind::Rename => FileOpRequest::Rename {
                path: op.source_path,
                new_name: value.unwrap_or_default(),
            },
            OperationKind::Delete => FileOpRequest::Delete {
                path: op.source_path,
            },
            OperationKind::CreateFile | OperationKind::CreateFolder => {
                let Some(dir) = op.working_dir.as_deref() else {
                    return Err(AppError::Rejected(
                        "no directory to create in".to_string(),
                    ));
                };
                let path = join_path(dir, value.as_deref().unwrap_or_default());
                if op.kind == OperationKind::CreateFile {
                    FileOpRequest::CreateFile { path }
                } else {
                    FileOpRequest::CreateFolder { path }
                }
            }
        };

        self.dispatch(op.kind, req);
        Ok(())
    }

    /// The dialog was cancelled: drop the operation without a request or a
    /// notification.
    pub fn cancelled(&mut self, op_id: Uuid) {
        if self.pending.remove(&op_id).is_some() {
            debug!("operation {op_id} cancelled");
        }
    }

    fn dispatch(&self, kind: OperationKind, req: FileOpRequest) {
        info!("dispatching {} -> {}", kind.title(), req.endpoint());
        let backend = Arc::clone(&self.backend);
        let tx = self.actions.clone();
        tokio::spawn(async move {
            let outcome = match backend.file_op(&req).await {
                Ok(resp) if resp.success => Ok(()),
                Ok(resp) => Err(resp.message),
                Err(error) => {
                    warn!("{} transport failure: {error}", req.endpoint());
                    Err(None)
                }
            };
            let _ = tx.send(Action::OperationSettled { kind, outcome });
        });
    }
}

impl std::fmt::Debug for FileOpOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileOpOrchestrator")
            .field("pending", &self.pending.len())
            .finish()
    }
}

fn dialog_spec_for(
    kind: OperationKind,
    target: Option<&ResultEntry>,
    working_dir: Option<&str>,
    id: Uuid,
) -> DialogSpec {
    let name = target.map(|e| e.display_name.as_str()).unwrap_or_default();
    let source = target.map(|e| e.full_path.as_str()).unwrap_or_default();
    let intent = DialogIntent::Operation(id);

    match kind {
        OperationKind::Open => unreachable!("open has no dialog"),
        OperationKind::Copy => DialogSpec {
            title: kind.title().to_string(),
            message: format!("Copy \"{name}\" to:"),
            input_label: Some("Destination Path:".to_string()),
            input_value: source.to_string(),
            confirm_label: "Copy".to_string(),
            cancel_label: "Cancel".to_string(),
            destructive: false,
            intent,
        },
        OperationKind::Move => DialogSpec {
            title: kind.title().to_string(),
            message: format!("Move \"{name}\" to:"),
            input_label: Some("Destination Path:".to_string()),
            input_value: source.to_string(),
            confirm_label: "Move".to_string(),
            cancel_label: "Cancel".to_string(),
            destructive: false,
            intent,
        },
        OperationKind::Rename => DialogSpec {
            title: kind.title().to_string(),
            message: format!("Rename \"{name}\" to:"),
            input_label: Some("New Name:".to_string()),
            input_value: name.to_string(),
            confirm_label: "Rename".to_string(),
            cancel_label: "Cancel".to_string(),
            destructive: false,
            intent,
        },
        OperationKind::Delete => DialogSpec {
            title: kind.title().to_string(),
            message: format!(
                "Are you sure you want to delete \"{name}\"? It will be moved to the trash."
            ),
            input_label: None,
            input_value: String::new(),
            confirm_label: "Delete".to_string(),
            cancel_label: "Cancel".to_string(),
            destructive: true,
            intent,
        },
        OperationKind::CreateFile => DialogSpec {
            title: kind.title().to_string(),
            message: format!("Create a new file in {}:", working_dir.unwrap_or("/")),
            input_label: Some("File Name:".to_string()),
            input_value: "New File.txt".to_string(),
            confirm_label: "Create".to_string(),
            cancel_label: "Cancel".to_string(),
            destructive: false,
            intent,
        },
        OperationKind::CreateFolder => DialogSpec {
            title: kind.title().to_string(),
            message: format!("Create a new folder in {}:", working_dir.unwrap_or("/")),
            input_label: Some("Folder Name:".to_string()),
            input_value: "New Folder".to_string(),
            confirm_label: "Create".to_string(),
            cancel_label: "Cancel".to_string(),
            destructive: false,
            intent,
        },
    }
}

/// Join with the separator style already used by `dir`.
fn join_path(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        return name.to_string();
    }
    let sep = if dir.contains('\\') { '\\' } else { '/' };
    let trimmed = dir.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        format!("{sep}{name}")
    } else {
        format!("{trimmed}{sep}{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::protocol::{OpResponse, SearchRequest, SearchResponse};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    #[derive(Default)]
    struct RecordingBackend {
        ops: Mutex<Vec<FileOpRequest>>,
        responses: Mutex<VecDeque<OpResponse>>,
    }

    impl RecordingBackend {
        fn respond_with(&self, resp: OpResponse) {
            self.responses.lock().unwrap().push_back(resp);
        }
    }

    #[async_trait]
    impl Backend for RecordingBackend {
        async fn search(&self, _req: &SearchRequest) -> Result<SearchResponse, AppError> {
            Ok(SearchResponse { results: vec![] })
        }

        async fn file_op(&self, req: &FileOpRequest) -> Result<OpResponse, AppError> {
            self.ops.lock().unwrap().push(req.clone());
            Ok(self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(OpResponse {
                    success: true,
                    message: None,
                }))
        }
    }

    fn entry() -> ResultEntry {
        ResultEntry {
            full_path: "/data/report.txt".to_string(),
            display_name: "report.txt".to_string(),
            parent_path: "/data".to_string(),
            is_directory: false,
            size_formatted: "1 KB".to_string(),
            modified_formatted: "2024-01-01".to_string(),
            icon_class: None,
        }
    }

    struct Fixture {
        ops: FileOpOrchestrator,
        dialogs: DialogService,
        backend: Arc<RecordingBackend>,
        rx: UnboundedReceiver<Action>,
    }

    fn fixture() -> Fixture {
        let backend = Arc::new(RecordingBackend::default());
        let (tx, rx) = mpsc::unbounded_channel();
        Fixture {
            ops: FileOpOrchestrator::new(
                Arc::clone(&backend) as Arc<dyn Backend>,
                tx.clone(),
            ),
            dialogs: DialogService::new(tx, Duration::from_millis(300)),
            backend,
            rx,
        }
    }

    impl Fixture {
        /// Confirm the live dialog and feed the decision back in.
        fn confirm(&mut self) {
            let decision = self.dialogs.confirm().unwrap();
            let DialogIntent::Operation(op_id) = decision.intent else {
                panic!("expected an operation intent");
            };
            self.ops.confirmed(op_id, decision.value).unwrap();
        }

        fn recorded(&self) -> Vec<FileOpRequest> {
            self.backend.ops.lock().unwrap().clone()
        }

        fn settlement(&mut self) -> Option<Action> {
            while let Ok(action) = self.rx.try_recv() {
                if matches!(action, Action::OperationSettled { .. }) {
                    return Some(action);
                }
            }
            None
        }
    }

    async fn settle_spawned_calls() {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn confirmed_delete_issues_exactly_one_request() {
        let mut fx = fixture();
        let entry = entry();

        fx.ops
            .request(OperationKind::Delete, Some(&entry), None, &mut fx.dialogs)
            .unwrap();
        assert!(fx.dialogs.current().unwrap().spec.destructive);

        fx.confirm();
        settle_spawned_calls().await;

        assert_eq!(
            fx.recorded(),
            vec![FileOpRequest::Delete {
                path: "/data/report.txt".to_string()
            }]
        );
        assert_eq!(
            fx.settlement(),
            Some(Action::OperationSettled {
                kind: OperationKind::Delete,
                outcome: Ok(()),
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_dialog_issues_nothing() {
        let mut fx = fixture();
        let entry = entry();

        fx.ops
            .request(OperationKind::Delete, Some(&entry), None, &mut fx.dialogs)
            .unwrap();
        let decision = fx.dialogs.cancel().unwrap();
        let DialogIntent::Operation(op_id) = decision.intent else {
            panic!("expected an operation intent");
        };
        fx.ops.cancelled(op_id);
        settle_spawned_calls().await;

        assert!(fx.recorded().is_empty());
        assert!(fx.settlement().is_none());
        assert!(fx.ops.pending.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn rename_with_unchanged_name_still_submits() {
        let mut fx = fixture();
        let entry = entry();

        fx.ops
            .request(OperationKind::Rename, Some(&entry), None, &mut fx.dialogs)
            .unwrap();
        // Confirm the prefilled name untouched.
        fx.confirm();
        settle_spawned_calls().await;

        assert_eq!(
            fx.recorded(),
            vec![FileOpRequest::Rename {
                path: "/data/report.txt".to_string(),
                new_name: "report.txt".to_string(),
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn copy_sends_the_entered_destination_verbatim() {
        let mut fx = fixture();
        let entry = entry();

        fx.ops
            .request(OperationKind::Copy, Some(&entry), None, &mut fx.dialogs)
            .unwrap();
        let session = fx.dialogs.current_mut().unwrap();
        // The prefill is the source path, selected; typing replaces it. A full
        // destination path doubles as copy-with-rename.
        assert_eq!(session.input, "/data/report.txt");
        for c in "/backup/renamed.txt".chars() {
            session.type_char(c);
        }
        fx.confirm();
        settle_spawned_calls().await;

        assert_eq!(
            fx.recorded(),
            vec![FileOpRequest::Copy {
                source: "/data/report.txt".to_string(),
                destination: "/backup/renamed.txt".to_string(),
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn move_confirmed_untouched_targets_the_source_path() {
        let mut fx = fixture();
        let entry = entry();

        fx.ops
            .request(OperationKind::Move, Some(&entry), None, &mut fx.dialogs)
            .unwrap();
        fx.confirm();
        settle_spawned_calls().await;

        assert_eq!(
            fx.recorded(),
            vec![FileOpRequest::Move {
                source: "/data/report.txt".to_string(),
                destination: "/data/report.txt".to_string(),
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn create_resolves_against_the_working_directory() {
        let mut fx = fixture();

        fx.ops
            .request(
                OperationKind::CreateFolder,
                None,
                Some("/data/projects".to_string()),
                &mut fx.dialogs,
            )
            .unwrap();
        fx.confirm();
        settle_spawned_calls().await;

        assert_eq!(
            fx.recorded(),
            vec![FileOpRequest::CreateFolder {
                path: "/data/projects/New Folder".to_string()
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn busy_dialog_rejects_before_any_side_effect() {
        let mut fx = fixture();
        let entry = entry();

        fx.ops
            .request(OperationKind::Rename, Some(&entry), None, &mut fx.dialogs)
            .unwrap();
        let err = fx
            .ops
            .request(OperationKind::Delete, Some(&entry), None, &mut fx.dialogs)
            .unwrap_err();

        assert!(matches!(err, AppError::DialogBusy));
        assert_eq!(fx.ops.pending.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_required_value_rejects_without_a_request() {
        let mut fx = fixture();
        let entry = entry();

        fx.ops
            .request(OperationKind::Rename, Some(&entry), None, &mut fx.dialogs)
            .unwrap();
        let session = fx.dialogs.current_mut().unwrap();
        session.backspace(); // wipes the selected prefill

        let decision = fx.dialogs.confirm().unwrap();
        let DialogIntent::Operation(op_id) = decision.intent else {
            panic!("expected an operation intent");
        };
        let err = fx.ops.confirmed(op_id, decision.value).unwrap_err();
        settle_spawned_calls().await;

        assert!(matches!(err, AppError::Rejected(_)));
        assert!(fx.recorded().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn server_rejection_settles_with_the_server_message() {
        let mut fx = fixture();
        let entry = entry();
        fx.backend.respond_with(OpResponse {
            success: false,
            message: Some("Permission denied".to_string()),
        });

        fx.ops
            .request(OperationKind::Delete, Some(&entry), None, &mut fx.dialogs)
            .unwrap();
        fx.confirm();
        settle_spawned_calls().await;

        assert_eq!(
            fx.settlement(),
            Some(Action::OperationSettled {
                kind: OperationKind::Delete,
                outcome: Err(Some("Permission denied".to_string())),
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn open_dispatches_without_a_dialog() {
        let mut fx = fixture();
        let entry = entry();

        fx.ops
            .request(OperationKind::Open, Some(&entry), None, &mut fx.dialogs)
            .unwrap();
        settle_spawned_calls().await;

        assert!(!fx.dialogs.is_open());
        assert_eq!(
            fx.recorded(),
            vec![FileOpRequest::Open {
                path: "/data/report.txt".to_string()
            }]
        );
    }
}
