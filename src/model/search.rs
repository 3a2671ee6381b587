//! src/model/search.rs
//! ============================================================================
//! # SearchCoordinator: The "Current Query" State Machine
//!
//! Owns the single visible result set and the current query/path scope.
//! Debounces keystrokes, suppresses duplicate debounced dispatches, tags every
//! dispatch with a sequence number, and discards responses to superseded
//! dispatches when they eventually arrive. No other component mutates the
//! result set; the orchestrator's post-mutation refresh comes back through
//! [`SearchCoordinator::refresh`].
//!
//! There is no true request cancellation: superseding a query only means the
//! stale response is ignored on arrival, and "cancelling" a debounce means the
//! timer's firing is ignored.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

use crate::api::client::Backend;
use crate::api::protocol::{ResultEntry, SearchRequest};
use crate::controller::actions::Action;
use crate::util::debounce::Debouncer;

/// Minimum trimmed length before a debounced dispatch is considered.
pub const MIN_QUERY_LEN: usize = 2;

/// Unit selector for the size filter fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SizeUnit {
    #[default]
    B,
    Kb,
    Mb,
    Gb,
}

impl SizeUnit {
    pub fn multiplier(self) -> f64 {
        match self {
            SizeUnit::B => 1.0,
            SizeUnit::Kb => 1024.0,
            SizeUnit::Mb => 1024.0 * 1024.0,
            SizeUnit::Gb => 1024.0 * 1024.0 * 1024.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeUnit::B => "B",
            SizeUnit::Kb => "KB",
            SizeUnit::Mb => "MB",
            SizeUnit::Gb => "GB",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SizeUnit::B => SizeUnit::Kb,
            SizeUnit::Kb => SizeUnit::Mb,
            SizeUnit::Mb => SizeUnit::Gb,
            SizeUnit::Gb => SizeUnit::B,
        }
    }
}

/// Advanced filter fields, kept as the user typed them. Parsing happens at
/// dispatch time, like reading form inputs; unparsable text means the filter
/// is simply not attached.
#[derive(Debug, Clone, Default)]
pub struct AdvancedFilters {
    pub file_types: BTreeSet<String>,
    pub case_sensitive: bool,
    pub include_hidden: bool,
    pub use_regex: bool,
    /// `YYYY-MM-DD`, empty = unset.
    pub date_from: String,
    pub date_to: String,
    /// Numeric field text, empty = unset.
    pub size_min: String,
    pub size_max: String,
    pub size_unit: SizeUnit,
}

impl AdvancedFilters {
    pub fn toggle_file_type(&mut self, kind: &str) {
        if !self.file_types.remove(kind) {
            self.file_types.insert(kind.to_string());
        }
    }

    /// Size bounds normalized to bytes: unset min defaults to 0, unset max to
    /// the maximum representable size. `None` when both fields are empty.
    pub fn size_range(&self) -> Option<(u64, u64)> {
        let min = parse_size_field(&self.size_min);
        let max = parse_size_field(&self.size_max);
        if min.is_none() && max.is_none() {
            return None;
        }
        let scale = |value: f64| (value * self.size_unit.multiplier()) as u64;
        Some((
            min.map(scale).unwrap_or(0),
            max.map(scale).unwrap_or(u64::MAX),
        ))
    }

    /// `None` when both date fields are empty or unparsable.
    pub fn date_range(&self) -> Option<(Option<NaiveDate>, Option<NaiveDate>)> {
        let from = NaiveDate::parse_from_str(self.date_from.trim(), "%Y-%m-%d").ok();
        let to = NaiveDate::parse_from_str(self.date_to.trim(), "%Y-%m-%d").ok();
        if from.is_none() && to.is_none() {
            return None;
        }
        Some((from, to))
    }

    fn apply_to(&self, req: &mut SearchRequest) {
        if !self.file_types.is_empty() {
            req.file_types = Some(self.file_types.iter().cloned().collect());
        }
        req.case_sensitive = Some(self.case_sensitive);
        req.include_hidden = Some(self.include_hidden);
        req.use_regex = Some(self.use_regex);
        req.date_range = self.date_range();
        req.size_range = self.size_range();
    }
}

fn parse_size_field(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// One clickable segment of the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    pub path: String,
}

/// Root segment plus one segment per path component.
pub fn breadcrumb_trail(path: &str) -> Vec<Breadcrumb> {
    let windows = path.contains('\\');
    let sep = if windows { '\\' } else { '/' };

    let mut crumbs = vec![Breadcrumb {
        label: "Home".to_string(),
        path: "/".to_string(),
    }];

    let mut acc = String::new();
    for part in path.split(['/', '\\']).filter(|p| !p.trim().is_empty()) {
        if acc.is_empty() {
            if windows && part.ends_with(':') {
                acc = format!("{part}{sep}");
            } else {
                acc = format!("{sep}{part}");
            }
        } else {
            if !acc.ends_with(sep) {
                acc.push(sep);
            }
            acc.push_str(part);
        }
        crumbs.push(Breadcrumb {
            label: part.to_string(),
            path: acc.clone(),
        });
    }
    crumbs
}

/// How a submission was triggered. Explicit submissions skip the duplicate
/// guard so the user can force a manual refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitMode {
    Debounced,
    Explicit,
}

/// The query a dispatch was accepted with; replayed by `refresh`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AcceptedQuery {
    text: String,
    paths: Vec<String>,
}

/// What the controller should do after a settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// Results replaced; `count` feeds the indicator (0 renders the
    /// no-results placeholder).
    Applied { count: usize },
    /// Transport or decode failure; prior results untouched.
    Failed(String),
    /// Response to a superseded dispatch; discarded.
    Stale,
}

pub struct SearchCoordinator {
    backend: Arc<dyn Backend>,
    actions: UnboundedSender<Action>,
    debounce: Debouncer,

    input: String,
    /// Active search roots when no directory scope is set.
    roots: Vec<String>,
    /// Directory scope from navigation; overrides `roots`.
    current_dir: Option<String>,
    breadcrumbs: Vec<Breadcrumb>,

    advanced_open: bool,
    filters: AdvancedFilters,

    /// Sequence number of the newest dispatch; stale settlements are those
    /// carrying an older number.
    seq: u64,
    /// True while the newest dispatch is unsettled (drives the loading
    /// indicator).
    in_flight: bool,
    last_accepted: Option<AcceptedQuery>,

    results: Vec<ResultEntry>,
    /// `Some` once any search has completed successfully.
    completed_count: Option<usize>,
}

impl SearchCoordinator {
    pub fn new(
        backend: Arc<dyn Backend>,
        actions: UnboundedSender<Action>,
        debounce_delay: Duration,
        roots: Vec<String>,
    ) -> Self {
        Self {
            backend,
            actions,
            debounce: Debouncer::new(debounce_delay),
            input: String::new(),
            roots,
            current_dir: None,
            breadcrumbs: Vec::new(),
            advanced_open: false,
            filters: AdvancedFilters::default(),
            seq: 0,
            in_flight: false,
            last_accepted: None,
            results: Vec::new(),
            completed_count: None,
        }
    }

    // --- Input editing (restarts the debounce timer) ---

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.after_edit();
    }

    pub fn backspace(&mut self) {
        self.input.pop();
        self.after_edit();
    }

    /// Replace the whole buffer (paste, tests).
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.after_edit();
    }

    fn after_edit(&mut self) {
        // Below the minimum length nothing is scheduled at all; prior results
        // stay on screen.
        if self.input.trim().chars().count() < MIN_QUERY_LEN {
            self.debounce.cancel();
            return;
        }
        let generation = self.debounce.arm();
        crate::util::debounce::schedule(
            self.debounce.delay(),
            self.actions.clone(),
            Action::DebounceElapsed { generation },
        );
    }

    /// Debounce timer fired; ignored unless it is the latest generation.
    pub fn debounce_elapsed(&mut self, generation: u64) {
        if !self.debounce.accepts(generation) {
            return;
        }
        self.submit(SubmitMode::Debounced);
    }

    /// Explicit submission (form submit / manual refresh keystroke).
    pub fn submit_explicit(&mut self) {
        self.debounce.cancel();
        self.submit(SubmitMode::Explicit);
    }

    fn submit(&mut self, mode: SubmitMode) {
        let text = self.input.trim().to_string();
        match mode {
            SubmitMode::Debounced => {
                if text.chars().count() < MIN_QUERY_LEN {
                    return;
                }
                // Unchanged from the last accepted query: drop. The in-flight
                // dispatch (if any) already covers this text.
                if self
                    .last_accepted
                    .as_ref()
                    .is_some_and(|accepted| accepted.text == text)
                {
                    debug!("debounced dispatch dropped: query unchanged");
                    return;
                }
            }
            SubmitMode::Explicit => {
                // Empty input is a skipped validation, not an error.
                if text.is_empty() {
                    return;
                }
            }
        }

        let paths = self.scope_paths();
        self.dispatch(text, paths);
    }

    /// Directory navigation is a special case of search submission: clear the
    /// text query, scope to the directory, rebuild the trail, and issue an
    /// explicit listing search (the empty query is allowed through here).
    pub fn navigate(&mut self, path: &str) {
        info!("navigating to {path}");
        self.debounce.cancel();
        self.input.clear();
        self.current_dir = Some(path.to_string());
        self.breadcrumbs = breadcrumb_trail(path);
        self.dispatch(String::new(), vec![path.to_string()]);
    }

    /// Navigate one breadcrumb segment up, if there is one.
    pub fn navigate_up(&mut self) {
        if self.breadcrumbs.len() >= 2 {
            let parent = self.breadcrumbs[self.breadcrumbs.len() - 2].path.clone();
            self.navigate(&parent);
        }
    }

    /// Jump straight to a breadcrumb segment, however deep the trail is.
    pub fn navigate_to_crumb(&mut self, index: usize) {
        if let Some(crumb) = self.breadcrumbs.get(index) {
            let path = crumb.path.clone();
            self.navigate(&path);
        }
    }

    /// Re-run the last accepted query/navigation (post-mutation refresh).
    pub fn refresh(&mut self) {
        if let Some(accepted) = self.last_accepted.clone() {
            self.dispatch(accepted.text, accepted.paths);
        }
    }

    fn dispatch(&mut self, text: String, paths: Vec<String>) {
        self.seq += 1;
        let seq = self.seq;
        self.in_flight = true;
        self.last_accepted = Some(AcceptedQuery {
            text: text.clone(),
            paths: paths.clone(),
        });

        let mut req = SearchRequest::plain(text, paths);
        if self.advanced_open {
            self.filters.apply_to(&mut req);
        }

        info!("dispatching search #{seq}: {:?} in {:?}", req.query, req.paths);

        let backend = Arc::clone(&self.backend);
        let tx = self.actions.clone();
        tokio::spawn(async move {
            let outcome = backend
                .search(&req)
                .await
                .map(|resp| resp.results)
                .map_err(|e| e.to_string());
            let _ = tx.send(Action::SearchSettled { seq, outcome });
        });
    }

    /// Apply a settlement. Only the newest dispatch may settle the pending
    /// flag; older responses are discarded whole.
    pub fn settled(
        &mut self,
        seq: u64,
        outcome: Result<Vec<ResultEntry>, String>,
    ) -> Settlement {
        if seq != self.seq {
            debug!("discarding stale response to search #{seq} (newest is #{})", self.seq);
            return Settlement::Stale;
        }
        self.in_flight = false;
        match outcome {
            Ok(results) => {
                let count = results.len();
                self.results = results;
                self.completed_count = Some(count);
                Settlement::Applied { count }
            }
            Err(error) => {
                warn!("search #{seq} failed: {error}");
                Settlement::Failed(error)
            }
        }
    }

    fn scope_paths(&self) -> Vec<String> {
        match &self.current_dir {
            Some(dir) => vec![dir.clone()],
            None => self.roots.clone(),
        }
    }

    // --- Read access for the view and orchestrator ---

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    pub fn results(&self) -> &[ResultEntry] {
        &self.results
    }

    /// `None` until the first successful search completes.
    pub fn result_count(&self) -> Option<usize> {
        self.completed_count
    }

    pub fn breadcrumbs(&self) -> &[Breadcrumb] {
        &self.breadcrumbs
    }

    pub fn current_dir(&self) -> Option<&str> {
        self.current_dir.as_deref()
    }

    /// Directory that create/copy dialogs resolve against: the navigation
    /// scope, falling back to the first active root.
    pub fn working_dir(&self) -> Option<String> {
        self.current_dir
            .clone()
            .or_else(|| self.roots.first().cloned())
    }

    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    pub fn add_root(&mut self, path: &str) {
        let path = path.trim();
        if path.is_empty() || self.roots.iter().any(|r| r == path) {
            return;
        }
        self.roots.push(path.to_string());
    }

    // --- Advanced panel ---

    pub fn advanced_open(&self) -> bool {
        self.advanced_open
    }

    pub fn set_advanced_open(&mut self, open: bool) {
        self.advanced_open = open;
    }

    pub fn filters(&self) -> &AdvancedFilters {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut AdvancedFilters {
        &mut self.filters
    }
}

impl std::fmt::Debug for SearchCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchCoordinator")
            .field("input", &self.input)
            .field("current_dir", &self.current_dir)
            .field("seq", &self.seq)
            .field("in_flight", &self.in_flight)
            .field("results", &self.results.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::protocol::{FileOpRequest, OpResponse, SearchResponse};
    use crate::error::AppError;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    #[derive(Default)]
    struct RecordingBackend {
        searches: Mutex<Vec<SearchRequest>>,
    }

    #[async_trait]
    impl Backend for RecordingBackend {
        async fn search(&self, req: &SearchRequest) -> Result<SearchResponse, AppError> {
            self.searches.lock().unwrap().push(req.clone());
            Ok(SearchResponse { results: vec![] })
        }

        async fn file_op(&self, _req: &FileOpRequest) -> Result<OpResponse, AppError> {
            Ok(OpResponse {
                success: true,
                message: None,
            })
        }
    }

    fn entry(name: &str) -> ResultEntry {
        ResultEntry {
            full_path: format!("/data/{name}"),
            display_name: name.to_string(),
            parent_path: "/data".to_string(),
            is_directory: false,
            size_formatted: "1 KB".to_string(),
            modified_formatted: "2024-01-01".to_string(),
            icon_class: None,
        }
    }

    fn coordinator() -> (
        SearchCoordinator,
        Arc<RecordingBackend>,
        UnboundedReceiver<Action>,
    ) {
        let backend = Arc::new(RecordingBackend::default());
        let (tx, rx) = mpsc::unbounded_channel();
        let coordinator = SearchCoordinator::new(
            Arc::clone(&backend) as Arc<dyn Backend>,
            tx,
            Duration::from_millis(300),
            vec!["/data".to_string()],
        );
        (coordinator, backend, rx)
    }

    /// Feed every DebounceElapsed currently queued back into the coordinator.
    fn pump_debounce(coordinator: &mut SearchCoordinator, rx: &mut UnboundedReceiver<Action>) {
        while let Ok(action) = rx.try_recv() {
            if let Action::DebounceElapsed { generation } = action {
                coordinator.debounce_elapsed(generation);
            }
        }
    }

    async fn settle_spawned_calls() {
        // Let the dispatched backend futures run on the paused runtime.
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    fn recorded(backend: &RecordingBackend) -> Vec<SearchRequest> {
        backend.searches.lock().unwrap().clone()
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_typing_dispatches_only_the_last_query() {
        let (mut coordinator, backend, mut rx) = coordinator();

        for c in "report".chars() {
            coordinator.push_char(c);
        }
        // 100 ms later (inside the quiet period) the user finishes the word.
        tokio::time::sleep(Duration::from_millis(100)).await;
        coordinator.push_char('s');

        // Wait out every timer, then deliver the firings.
        tokio::time::sleep(Duration::from_millis(400)).await;
        pump_debounce(&mut coordinator, &mut rx);
        settle_spawned_calls().await;

        let calls = recorded(&backend);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].query, "reports");
        assert_eq!(calls[0].paths, vec!["/data".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn short_input_schedules_nothing() {
        let (mut coordinator, backend, mut rx) = coordinator();

        coordinator.push_char('r');
        tokio::time::sleep(Duration::from_millis(400)).await;
        pump_debounce(&mut coordinator, &mut rx);
        settle_spawned_calls().await;

        assert!(recorded(&backend).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn whitespace_only_explicit_submit_is_skipped() {
        let (mut coordinator, backend, _rx) = coordinator();

        coordinator.set_input("   ");
        coordinator.submit_explicit();
        settle_spawned_calls().await;

        assert!(recorded(&backend).is_empty());
        assert!(!coordinator.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn debounced_duplicate_is_dropped_but_explicit_resubmit_goes_through() {
        let (mut coordinator, backend, mut rx) = coordinator();

        coordinator.set_input("report");
        tokio::time::sleep(Duration::from_millis(400)).await;
        pump_debounce(&mut coordinator, &mut rx);
        settle_spawned_calls().await;
        assert_eq!(recorded(&backend).len(), 1);

        // Re-typing the same text: the debounced firing is suppressed.
        coordinator.set_input("report");
        tokio::time::sleep(Duration::from_millis(400)).await;
        pump_debounce(&mut coordinator, &mut rx);
        settle_spawned_calls().await;
        assert_eq!(recorded(&backend).len(), 1);

        // Manual refresh with identical text is always allowed through.
        coordinator.submit_explicit();
        settle_spawned_calls().await;
        assert_eq!(recorded(&backend).len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_response_never_overwrites_the_superseding_one() {
        let (mut coordinator, _backend, _rx) = coordinator();

        coordinator.set_input("alpha");
        coordinator.submit_explicit(); // seq 1
        coordinator.set_input("beta");
        coordinator.submit_explicit(); // seq 2, supersedes

        // B's response arrives first and is applied.
        let settlement = coordinator.settled(2, Ok(vec![entry("beta.txt")]));
        assert_eq!(settlement, Settlement::Applied { count: 1 });
        assert!(!coordinator.is_loading());

        // A's response arrives later and must be discarded.
        let settlement = coordinator.settled(1, Ok(vec![entry("alpha.txt")]));
        assert_eq!(settlement, Settlement::Stale);
        assert_eq!(coordinator.results()[0].display_name, "beta.txt");
    }

    #[tokio::test(start_paused = true)]
    async fn failure_leaves_existing_results_intact() {
        let (mut coordinator, _backend, _rx) = coordinator();

        coordinator.set_input("docs");
        coordinator.submit_explicit();
        coordinator.settled(1, Ok(vec![entry("doc.txt")]));

        coordinator.submit_explicit();
        let settlement = coordinator.settled(2, Err("connection refused".into()));
        assert!(matches!(settlement, Settlement::Failed(_)));
        assert!(!coordinator.is_loading());
        assert_eq!(coordinator.results().len(), 1);
        assert_eq!(coordinator.result_count(), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn navigation_clears_query_and_lists_the_directory() {
        let (mut coordinator, backend, _rx) = coordinator();

        coordinator.set_input("old query");
        coordinator.navigate("/data/projects/reports");
        settle_spawned_calls().await;

        assert_eq!(coordinator.input(), "");
        let labels: Vec<&str> = coordinator
            .breadcrumbs()
            .iter()
            .map(|b| b.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Home", "data", "projects", "reports"]);

        let calls = recorded(&backend);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].query, "");
        assert_eq!(calls[0].paths, vec!["/data/projects/reports".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn navigate_up_truncates_to_the_previous_segment() {
        let (mut coordinator, backend, _rx) = coordinator();

        coordinator.navigate("/data/projects");
        coordinator.navigate_up();
        settle_spawned_calls().await;

        let calls = recorded(&backend);
        assert_eq!(calls[1].paths, vec!["/data".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn crumb_jump_skips_intermediate_segments() {
        let (mut coordinator, backend, _rx) = coordinator();

        coordinator.navigate("/data/projects/2024/reports");
        coordinator.navigate_to_crumb(1); // "data"
        coordinator.navigate_to_crumb(9); // out of range, ignored
        settle_spawned_calls().await;

        let calls = recorded(&backend);
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].paths, vec!["/data".to_string()]);
        assert_eq!(coordinator.current_dir(), Some("/data"));
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_replays_the_last_accepted_query() {
        let (mut coordinator, backend, _rx) = coordinator();

        coordinator.set_input("budget");
        coordinator.submit_explicit();
        coordinator.refresh();
        settle_spawned_calls().await;

        let calls = recorded(&backend);
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
    }

    #[tokio::test(start_paused = true)]
    async fn filters_attach_only_while_the_panel_is_open() {
        let (mut coordinator, backend, _rx) = coordinator();

        coordinator.filters_mut().size_min = "1".into();
        coordinator.filters_mut().size_max = "5".into();
        coordinator.filters_mut().size_unit = SizeUnit::Mb;
        coordinator.filters_mut().case_sensitive = true;

        coordinator.set_input("video");
        coordinator.submit_explicit();

        coordinator.set_advanced_open(true);
        coordinator.submit_explicit();
        settle_spawned_calls().await;

        let calls = recorded(&backend);
        assert_eq!(calls[0].size_range, None);
        assert_eq!(calls[0].case_sensitive, None);
        assert_eq!(calls[1].size_range, Some((1_048_576, 5_242_880)));
        assert_eq!(calls[1].case_sensitive, Some(true));
    }

    #[test]
    fn size_bounds_default_to_zero_and_max() {
        let mut filters = AdvancedFilters::default();
        filters.size_unit = SizeUnit::Mb;
        filters.size_max = "5".into();
        assert_eq!(filters.size_range(), Some((0, 5_242_880)));

        filters.size_min = "1".into();
        filters.size_max = String::new();
        assert_eq!(filters.size_range(), Some((1_048_576, u64::MAX)));

        filters.size_min = String::new();
        assert_eq!(filters.size_range(), None);
    }

    #[test]
    fn breadcrumb_trail_handles_windows_drives() {
        let crumbs = breadcrumb_trail("C:\\Users\\docs");
        let paths: Vec<&str> = crumbs.iter().map(|b| b.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "C:\\", "C:\\Users", "C:\\Users\\docs"]);
    }

    #[test]
    fn add_root_ignores_blanks_and_duplicates() {
        let backend = Arc::new(RecordingBackend::default());
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut coordinator = SearchCoordinator::new(
            backend as Arc<dyn Backend>,
            tx,
            Duration::from_millis(300),
            vec![],
        );

        coordinator.add_root("/srv");
        coordinator.add_root("  ");
        coordinator.add_root("/srv");
        assert_eq!(coordinator.roots(), &["/srv".to_string()]);
    }
}
