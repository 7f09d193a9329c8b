//! Readiness tracking for the embedded renderer.

use log::trace;

/// Whether the renderer can currently accept render calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RendererState {
    /// No document is loaded, or the loaded one is about to be replaced.
    #[default]
    Uninitialized,
    /// A document has been handed to the host and is still loading.
    Loading,
    /// The document finished loading; render calls may be dispatched.
    Ready,
}

/// Gate that holds render dispatch back until the renderer has initialized.
///
/// ```text
/// Uninitialized --mark_loading_started--> Loading --mark_ready--> Ready
///       ^                                                           |
///       +---------------------------- reset -----------------------+
/// ```
#[derive(Clone, Debug, Default)]
pub struct ReadinessGate {
    state: RendererState,
}

impl ReadinessGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RendererState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == RendererState::Ready
    }

    /// Record that a document has been handed to the host.
    pub fn mark_loading_started(&mut self) {
        self.state = RendererState::Loading;
    }

    /// Record a load-completion signal.
    ///
    /// Returns `true` only when this call performed the `Loading -> Ready`
    /// transition. Repeated signals, and signals arriving while no load is in
    /// flight, leave the state untouched and return `false`.
    pub fn mark_ready(&mut self) -> bool {
        match self.state {
            RendererState::Loading => {
                self.state = RendererState::Ready;
                true
            }
            state => {
                trace!("ignoring load completion while {state:?}");
                false
            }
        }
    }

    /// Forget readiness ahead of a document reload.
    pub fn reset(&mut self) {
        self.state = RendererState::Uninitialized;
    }
}
