//! Coalescing synchronization between document text and the rendered preview.

use std::fmt;
use std::sync::Arc;

use log::{debug, trace, warn};

use crate::codec;
use crate::gate::{ReadinessGate, RendererState};
use crate::{Effect, HostCommand};

/// Immutable full text of the document at one point in time.
///
/// Cloning is cheap; the latest and pending slots share one allocation.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DocumentSnapshot(Arc<str>);

impl DocumentSnapshot {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Document text stays out of logs.
impl fmt::Debug for DocumentSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocumentSnapshot({} bytes)", self.0.len())
    }
}

impl From<String> for DocumentSnapshot {
    fn from(text: String) -> Self {
        Self(text.into())
    }
}

impl From<&str> for DocumentSnapshot {
    fn from(text: &str) -> Self {
        Self(text.into())
    }
}

/// State of one preview: renderer readiness, the latest known document and
/// the single pending render request.
///
/// Every operation returns the [`Effect`] the host must carry out. A render
/// dispatch is only ever produced while the gate is ready; earlier snapshots
/// collapse into one pending request that is flushed once on readiness.
#[derive(Clone, Debug, Default)]
pub struct SyncPipeline {
    gate: ReadinessGate,
    latest: Option<DocumentSnapshot>,
    pending: Option<DocumentSnapshot>,
}

impl SyncPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gate(&self) -> &ReadinessGate {
        &self.gate
    }

    pub fn state(&self) -> RendererState {
        self.gate.state()
    }

    /// The most recent document seen, whether or not it was rendered.
    pub fn latest(&self) -> Option<&DocumentSnapshot> {
        self.latest.as_ref()
    }

    /// The document waiting for the renderer to become ready.
    pub fn pending(&self) -> Option<&DocumentSnapshot> {
        self.pending.as_ref()
    }

    /// Record new document text and render it if the renderer is ready.
    pub fn on_content_changed(&mut self, snapshot: impl Into<DocumentSnapshot>) -> Effect {
        let snapshot = snapshot.into();
        self.latest = Some(snapshot.clone());

        if self.gate.is_ready() {
            dispatch(&snapshot)
        } else {
            if let Some(previous) = self.pending.replace(snapshot) {
                trace!("superseding pending {previous:?}");
            }
            Effect::none()
        }
    }

    /// Flush the pending request, or replay the latest document after a reload.
    pub fn on_renderer_ready(&mut self) -> Effect {
        if let Some(snapshot) = self.pending.take() {
            dispatch(&snapshot)
        } else if let Some(snapshot) = &self.latest {
            debug!("replaying latest document after reload");
            dispatch(snapshot)
        } else {
            Effect::none()
        }
    }

    /// Handle the host's load-completion signal.
    ///
    /// Only the signal that actually makes the renderer ready triggers a
    /// flush; duplicates are ignored.
    pub fn on_load_completed(&mut self, status: i32) -> Effect {
        if status != 0 && !(200..300).contains(&status) {
            warn!("preview document loaded with status {status}");
        }

        if self.gate.mark_ready() {
            self.on_renderer_ready()
        } else {
            Effect::none()
        }
    }

    /// Replace the host document, holding renders back until it has loaded.
    pub fn begin_reload(&mut self, document: String) -> Effect {
        self.gate.reset();
        self.gate.mark_loading_started();
        Effect::just(HostCommand::LoadDocument(document))
    }
}

fn dispatch(snapshot: &DocumentSnapshot) -> Effect {
    debug!("dispatching render of {} bytes", snapshot.len());
    Effect::just(HostCommand::ExecuteScript(codec::render_script(snapshot.as_str())))
}
