//! Notifications the preview runtime reacts to.

use crate::DocumentSnapshot;

/// Inbound notification from the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewEvent {
    /// The document changed. Carries the whole text, not a diff.
    ContentChanged(DocumentSnapshot),
    /// The renderer host finished loading a document, with its status code.
    LoadCompleted(i32),
    /// The host theme changed.
    ThemeChanged,
    /// The preview is being closed.
    Dispose,
}

/// Collapse runs of consecutive [`PreviewEvent::ContentChanged`] into the
/// last one of each run.
///
/// Only the final text of a burst matters for a live preview. Other events
/// keep their position so readiness and reload ordering is unchanged.
pub(crate) fn coalesce(events: Vec<PreviewEvent>) -> Vec<PreviewEvent> {
    let mut coalesced: Vec<PreviewEvent> = Vec::with_capacity(events.len());
    for event in events {
        let supersedes = matches!(
            (coalesced.last(), &event),
            (Some(PreviewEvent::ContentChanged(_)), PreviewEvent::ContentChanged(_))
        );
        if supersedes {
            coalesced.pop();
        }
        coalesced.push(event);
    }
    coalesced
}
