//! Event emitter handed to host callbacks.

use flume::Sender;

use crate::PreviewEvent;

/// Handle for feeding host notifications into a preview runtime.
///
/// Clone it into every host callback (document listener, browser load
/// handler, theme listener). `Emitter` wraps a channel sender, so it is cheap
/// to clone and safe to use from any thread; the runtime applies the events
/// one at a time in the order they were sent.
///
/// # Example
///
/// ```rust
/// use markmap_preview::{
///     EmbeddedAssets, PreviewConfig, PreviewRuntime, RendererHost, Rgb,
///     TemplateProvider, ThemeSnapshot,
/// };
///
/// struct NullHost;
///
/// impl RendererHost for NullHost {
///     fn load_document(&mut self, _html: String) {}
///     fn execute_script(&mut self, _script: String) {}
/// }
///
/// let theme = || ThemeSnapshot::new(Rgb::new(0x2b, 0x2b, 0x2b), Rgb::new(0xbb, 0xbb, 0xbb));
/// let templates = TemplateProvider::new(EmbeddedAssets, PreviewConfig::default());
/// let runtime = PreviewRuntime::new(NullHost, theme, templates);
///
/// let emitter = runtime.emitter();
/// std::thread::spawn(move || {
///     emitter.content_changed("# Roadmap\n## Q1");
///     emitter.load_completed(200);
///     emitter.dispose();
/// });
/// ```
pub struct Emitter<Event: Send>(pub(crate) Sender<Event>);

impl<Event: Send> Clone for Emitter<Event> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<Event: Send> Emitter<Event> {
    /// Create a new emitter from a channel sender.
    pub(crate) fn new(sender: Sender<Event>) -> Self {
        Self(sender)
    }

    /// Emit an event.
    ///
    /// Events sent after the runtime has been dropped are discarded.
    pub fn emit(&self, event: Event) {
        self.0.send(event).ok();
    }
}

impl Emitter<PreviewEvent> {
    /// The document text changed; `text` is the full buffer.
    pub fn content_changed(&self, text: impl Into<crate::DocumentSnapshot>) {
        self.emit(PreviewEvent::ContentChanged(text.into()));
    }

    /// The renderer host finished loading the current document.
    pub fn load_completed(&self, status: i32) {
        self.emit(PreviewEvent::LoadCompleted(status));
    }

    /// The host theme changed; the runtime samples the new colors itself.
    pub fn theme_changed(&self) {
        self.emit(PreviewEvent::ThemeChanged);
    }

    /// The preview is closing; the runtime stops after this event.
    pub fn dispose(&self) {
        self.emit(PreviewEvent::Dispose);
    }
}
