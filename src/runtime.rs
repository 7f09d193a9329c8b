//! The preview runtime that orchestrates the event loop.

use core::ops::ControlFlow;

use flume::Receiver;
use log::{debug, info};

use crate::event::coalesce;
use crate::{AssetSource, Emitter, PreviewEvent, RendererHost, SyncPipeline, TemplateProvider, ThemeSource};

/// The runtime that keeps one preview in sync with its document.
///
/// This is the core of the crate. It:
/// 1. Builds the themed document via [`TemplateProvider::build`] and loads it
/// 2. Receives host notifications through its [`Emitter`]
/// 3. Feeds them to the [`SyncPipeline`]
/// 4. Applies the resulting [`Effect`](crate::Effect)s to the [`RendererHost`]
///
/// Events can be emitted from any thread, but they are queued on a channel
/// and applied sequentially on the task polling [`PreviewRuntime::run`], so
/// pipeline state never needs a lock.
///
/// For testing with manual control, use [`TestPreviewRuntime`] with a
/// [`crate::RecordingHost`].
///
/// # Type Parameters
///
/// * `Host` - The embedded browser surface (implements [`RendererHost`])
/// * `Theme` - Access to the current host theme (implements [`ThemeSource`])
/// * `Assets` - Source of the library scripts (implements [`AssetSource`])
pub struct PreviewRuntime<Host, Theme, Assets>
where
    Host: RendererHost,
    Theme: ThemeSource,
    Assets: AssetSource,
{
    pipeline: SyncPipeline,
    templates: TemplateProvider<Assets>,
    theme: Theme,
    host: Host,
    event_receiver: Receiver<PreviewEvent>,
    emitter: Emitter<PreviewEvent>,
}

impl<Host, Theme, Assets> PreviewRuntime<Host, Theme, Assets>
where
    Host: RendererHost,
    Theme: ThemeSource,
    Assets: AssetSource,
{
    /// Create a new runtime.
    ///
    /// Nothing is loaded into the host until [`PreviewRuntime::run`] is called,
    /// but events may already be emitted; they queue up until then.
    pub fn new(host: Host, theme: Theme, templates: TemplateProvider<Assets>) -> Self {
        let (event_sender, event_receiver) = flume::unbounded();

        PreviewRuntime {
            pipeline: SyncPipeline::new(),
            templates,
            theme,
            host,
            event_receiver,
            emitter: Emitter::new(event_sender),
        }
    }

    /// A handle for host callbacks to report changes through.
    pub fn emitter(&self) -> Emitter<PreviewEvent> {
        self.emitter.clone()
    }

    pub fn pipeline(&self) -> &SyncPipeline {
        &self.pipeline
    }

    /// Load the initial document and process events until
    /// [`PreviewEvent::Dispose`].
    ///
    /// Every wake-up drains all queued events and collapses bursts of content
    /// changes before applying them, so a slow host only ever sees the newest
    /// text.
    pub async fn run(&mut self) {
        self.reload();

        while let Ok(event) = self.event_receiver.recv_async().await {
            let mut events = vec![event];
            events.extend(self.event_receiver.try_iter());
            if self.apply(events).is_break() {
                break;
            }
        }

        debug!("preview runtime stopped");
    }

    fn apply(&mut self, events: Vec<PreviewEvent>) -> ControlFlow<()> {
        for event in coalesce(events) {
            self.step(event)?;
        }
        ControlFlow::Continue(())
    }

    fn step(&mut self, event: PreviewEvent) -> ControlFlow<()> {
        let effect = match event {
            PreviewEvent::ContentChanged(snapshot) => self.pipeline.on_content_changed(snapshot),
            PreviewEvent::LoadCompleted(status) => self.pipeline.on_load_completed(status),
            PreviewEvent::ThemeChanged => {
                info!("host theme changed, rebuilding preview document");
                self.reload();
                return ControlFlow::Continue(());
            }
            PreviewEvent::Dispose => return ControlFlow::Break(()),
        };

        effect.execute(&mut self.host);
        ControlFlow::Continue(())
    }

    fn reload(&mut self) {
        let theme = self.theme.sample();
        let document = self.templates.build(&theme);
        self.pipeline.begin_reload(document).execute(&mut self.host);
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test runtime driver for manual event processing control.
///
/// Only available with the `testing` feature or during tests.
///
/// Returned by [`TestPreviewRuntime::run`]. Events emitted through
/// [`emitter`](Self::emitter) stay queued until
/// [`process_events`](Self::process_events) is called.
pub struct TestPreviewDriver<Host, Theme, Assets>
where
    Host: RendererHost,
    Theme: ThemeSource,
    Assets: AssetSource,
{
    runtime: PreviewRuntime<Host, Theme, Assets>,
}

#[cfg(any(test, feature = "testing"))]
impl<Host, Theme, Assets> TestPreviewDriver<Host, Theme, Assets>
where
    Host: RendererHost,
    Theme: ThemeSource,
    Assets: AssetSource,
{
    pub fn emitter(&self) -> Emitter<PreviewEvent> {
        self.runtime.emitter()
    }

    pub fn pipeline(&self) -> &SyncPipeline {
        self.runtime.pipeline()
    }

    /// Process all queued events, coalescing them exactly as
    /// [`PreviewRuntime::run`] does for a single wake-up.
    ///
    /// Returns `false` once a [`PreviewEvent::Dispose`] has been processed.
    pub fn process_events(&mut self) -> bool {
        let events: Vec<PreviewEvent> = self.runtime.event_receiver.try_iter().collect();
        self.runtime.apply(events).is_continue()
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test runtime with manual event processing control.
///
/// Only available with the `testing` feature or during tests.
///
/// ```rust
/// use markmap_preview::{
///     PreviewConfig, RecordingHost, Rgb, TemplateProvider, TestPreviewRuntime, ThemeSnapshot,
///     DirectoryAssets,
/// };
///
/// let host = RecordingHost::new();
/// let theme = || ThemeSnapshot::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));
/// let templates = TemplateProvider::new(DirectoryAssets::new(["/nonexistent"]), PreviewConfig::default());
///
/// let mut driver = TestPreviewRuntime::new(host.clone(), theme, templates).run();
/// driver.emitter().content_changed("# Plan");
/// driver.emitter().load_completed(200);
/// driver.process_events();
///
/// assert_eq!(host.dispatched_snapshots(), vec!["# Plan".to_string()]);
/// ```
pub struct TestPreviewRuntime<Host, Theme, Assets>
where
    Host: RendererHost,
    Theme: ThemeSource,
    Assets: AssetSource,
{
    runtime: PreviewRuntime<Host, Theme, Assets>,
}

#[cfg(any(test, feature = "testing"))]
impl<Host, Theme, Assets> TestPreviewRuntime<Host, Theme, Assets>
where
    Host: RendererHost,
    Theme: ThemeSource,
    Assets: AssetSource,
{
    pub fn new(host: Host, theme: Theme, templates: TemplateProvider<Assets>) -> Self {
        TestPreviewRuntime {
            runtime: PreviewRuntime::new(host, theme, templates),
        }
    }

    /// Load the initial document and return a driver for manual event processing.
    pub fn run(mut self) -> TestPreviewDriver<Host, Theme, Assets> {
        self.runtime.reload();

        TestPreviewDriver {
            runtime: self.runtime,
        }
    }
}
