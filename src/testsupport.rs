//! Shared test fixtures: scripted transport, fixed host surface, recording
//! render sink and a temp-dir helper.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::error::TransportError;
use crate::session::{FailureKind, HostSurface};
use crate::transcript::{InputLine, TranscriptEntry};
use crate::transport::{CommandRequest, CommandTransport};
use crate::ui::render::RenderSink;
use crate::ui::theme::Theme;

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("webterm-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Transport that replays queued results and records every request.
///
/// An empty queue answers with an empty body.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<String, TransportError>>>,
    requests: Mutex<Vec<CommandRequest>>,
    gate: Option<Arc<Semaphore>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport that holds every response until a permit is added.
    pub fn gated() -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        let transport = Self {
            gate: Some(Arc::clone(&gate)),
            ..Self::default()
        };
        (transport, gate)
    }

    pub fn push_ok(&self, body: &str) {
        self.push(Ok(body.to_string()));
    }

    /// Queue a failure reported under a collaborator status string.
    pub fn push_failure_status(&self, status: &str) {
        self.push(Err(TransportError::Reported(FailureKind::from_status(status))));
    }

    pub fn push(&self, result: Result<String, TransportError>) {
        self.responses
            .lock()
            .expect("responses lock")
            .push_back(result);
    }

    pub fn requests(&self) -> Vec<CommandRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }
}

#[async_trait]
impl CommandTransport for MockTransport {
    async fn send(&self, request: &CommandRequest) -> Result<String, TransportError> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());
        if let Some(gate) = &self.gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
        self.responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

/// Host surface with a fixed container height and selection state.
#[derive(Debug, Clone, Copy)]
pub struct FixedSurface {
    height: u32,
    selection: bool,
}

impl FixedSurface {
    pub fn new(height: u32) -> Self {
        Self {
            height,
            selection: false,
        }
    }

    pub fn with_selection(mut self, selection: bool) -> Self {
        self.selection = selection;
        self
    }
}

impl HostSurface for FixedSurface {
    fn container_inner_height(&self) -> u32 {
        self.height
    }

    fn has_text_selection(&self) -> bool {
        self.selection
    }
}

#[derive(Default)]
struct Recorded {
    entries: Vec<TranscriptEntry>,
    inputs: Vec<InputLine>,
    themes: Vec<&'static str>,
}

/// Render sink that records every notification; clones share the record.
#[derive(Clone, Default)]
pub struct RecordingSink {
    inner: Arc<Mutex<Recorded>>,
}

impl RecordingSink {
    pub fn entries(&self) -> Vec<TranscriptEntry> {
        self.inner.lock().expect("sink lock").entries.clone()
    }

    pub fn inputs(&self) -> Vec<InputLine> {
        self.inner.lock().expect("sink lock").inputs.clone()
    }

    pub fn theme_names(&self) -> Vec<&'static str> {
        self.inner.lock().expect("sink lock").themes.clone()
    }
}

impl RenderSink for RecordingSink {
    fn entry_appended(&self, entry: &TranscriptEntry) {
        self.inner
            .lock()
            .expect("sink lock")
            .entries
            .push(entry.clone());
    }

    fn input_changed(&self, input: &InputLine) {
        self.inner
            .lock()
            .expect("sink lock")
            .inputs
            .push(input.clone());
    }

    fn theme_applied(&self, theme: &Theme) {
        self.inner.lock().expect("sink lock").themes.push(theme.name());
    }
}
