//! Declarative description of the work the renderer host must perform.

use crate::RendererHost;

/// A single outbound call into the renderer host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostCommand {
    /// Replace the host's document with a freshly generated one.
    LoadDocument(String),
    /// Run a script against the currently loaded document.
    ExecuteScript(String),
}

/// Ordered batch of [`HostCommand`]s.
///
/// Pipeline operations never talk to the host directly. They return an
/// `Effect` describing what should happen, and the runtime applies it with
/// [`Effect::execute`]. This keeps every state transition testable without a
/// browser.
///
/// # Example
///
/// ```rust
/// use markmap_preview::{Effect, HostCommand};
///
/// // Load a document, then talk to it
/// let effect = Effect::batch(vec![
///     Effect::just(HostCommand::LoadDocument("<html></html>".to_string())),
///     Effect::just(HostCommand::ExecuteScript("void 0".to_string())),
/// ]);
/// assert_eq!(effect.commands().len(), 2);
///
/// // Nothing to do
/// assert!(Effect::none().is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct Effect(Vec<HostCommand>);

impl Effect {
    /// An effect that does nothing.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// An effect issuing exactly one command.
    pub fn just(command: HostCommand) -> Self {
        Self(vec![command])
    }

    /// Concatenate effects, preserving their order.
    pub fn batch(effects: Vec<Effect>) -> Self {
        Self(effects.into_iter().flat_map(|effect| effect.0).collect())
    }

    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    pub fn commands(&self) -> &[HostCommand] {
        &self.0
    }

    /// Hand every command to the host, in order.
    ///
    /// The host is expected to return immediately; script execution and
    /// document loading complete asynchronously on its side.
    pub fn execute<H: RendererHost + ?Sized>(self, host: &mut H) {
        for command in self.0 {
            match command {
                HostCommand::LoadDocument(html) => host.load_document(html),
                HostCommand::ExecuteScript(script) => host.execute_script(script),
            }
        }
    }
}
