//! Renderer host abstraction for the embedded browser surface.

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// The embedded browser surface the preview is drawn in.
///
/// Implement this trait on top of whatever web view the host editor offers
/// (JCEF, wry, WebView2, ...). Both calls must return without waiting for the
/// browser: completion of [`load_document`](Self::load_document) is reported
/// back through [`Emitter::load_completed`](crate::Emitter::load_completed),
/// and scripts are fire-and-forget.
///
/// # Example
///
/// ```rust
/// use markmap_preview::RendererHost;
///
/// struct ConsoleHost;
///
/// impl RendererHost for ConsoleHost {
///     fn load_document(&mut self, html: String) {
///         println!("loading {} bytes of html", html.len());
///     }
///
///     fn execute_script(&mut self, script: String) {
///         println!("running {script}");
///     }
/// }
/// ```
pub trait RendererHost {
    /// Replace the current document.
    fn load_document(&mut self, html: String);

    /// Run a script against the current document.
    fn execute_script(&mut self, script: String);
}

impl<H: RendererHost + ?Sized> RendererHost for Box<H> {
    fn load_document(&mut self, html: String) {
        (**self).load_document(html);
    }

    fn execute_script(&mut self, script: String) {
        (**self).execute_script(script);
    }
}

#[cfg(any(test, feature = "testing"))]
/// A call recorded by [`RecordingHost`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostCall {
    LoadDocument(String),
    ExecuteScript(String),
}

#[cfg(any(test, feature = "testing"))]
/// Host that records every call for assertions.
///
/// Only available with the `testing` feature.
///
/// Clones share the same recording, so keep one clone in the test and hand
/// the other to the runtime.
///
/// # Example
///
/// ```rust
/// use markmap_preview::{codec, RecordingHost, RendererHost};
///
/// let host = RecordingHost::new();
/// let mut runtime_side = host.clone();
///
/// runtime_side.execute_script(codec::render_script("# Hello"));
///
/// assert_eq!(host.dispatched_snapshots(), vec!["# Hello".to_string()]);
/// ```
#[derive(Clone)]
pub struct RecordingHost {
    calls: Arc<Mutex<Vec<HostCall>>>,
}

#[cfg(any(test, feature = "testing"))]
impl RendererHost for RecordingHost {
    fn load_document(&mut self, html: String) {
        self.calls.lock().push(HostCall::LoadDocument(html));
    }

    fn execute_script(&mut self, script: String) {
        self.calls.lock().push(HostCall::ExecuteScript(script));
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl RecordingHost {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Access the recorded calls with a closure.
    pub fn with_calls<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<HostCall>) -> R,
    {
        let calls = self.calls.lock();
        f(&calls)
    }

    /// Every document handed to the host, oldest first.
    pub fn documents(&self) -> Vec<String> {
        self.with_calls(|calls| {
            calls
                .iter()
                .filter_map(|call| match call {
                    HostCall::LoadDocument(html) => Some(html.clone()),
                    HostCall::ExecuteScript(_) => None,
                })
                .collect()
        })
    }

    /// Every script handed to the host, oldest first.
    pub fn scripts(&self) -> Vec<String> {
        self.with_calls(|calls| {
            calls
                .iter()
                .filter_map(|call| match call {
                    HostCall::ExecuteScript(script) => Some(script.clone()),
                    HostCall::LoadDocument(_) => None,
                })
                .collect()
        })
    }

    /// Decoded document text of every render dispatch, oldest first.
    ///
    /// Scripts that carry no render payload are skipped.
    pub fn dispatched_snapshots(&self) -> Vec<String> {
        self.scripts()
            .iter()
            .filter_map(|script| crate::codec::payload_from_script(script))
            .filter_map(|payload| crate::codec::decode(payload).ok())
            .collect()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}
