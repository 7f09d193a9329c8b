//! Live preview of Markdown documents as [markmap](https://markmap.js.org)
//! mind maps inside an embedded browser surface.
//!
//! The host editor supplies three things: a [`RendererHost`] that can load a
//! document and run scripts, a [`ThemeSource`] that reports the current
//! colors, and callbacks that forward document edits, load completions and
//! theme changes through an [`Emitter`]. The [`PreviewRuntime`] takes it from
//! there: it builds the themed page, holds renders back until the page is
//! ready, coalesces bursts of edits so only the newest text is drawn, and
//! replays the current document after every theme-triggered reload.
//!
//! ## Example
//!
//! ```rust
//! use markmap_preview::{
//!     DirectoryAssets, PreviewConfig, PreviewRuntime, RendererHost, Rgb, TemplateProvider,
//!     ThemeSnapshot,
//! };
//!
//! struct LoggingHost;
//!
//! impl RendererHost for LoggingHost {
//!     fn load_document(&mut self, html: String) {
//!         println!("load {} bytes", html.len());
//!     }
//!
//!     fn execute_script(&mut self, script: String) {
//!         println!("run {} bytes", script.len());
//!     }
//! }
//!
//! let theme = || ThemeSnapshot::new(Rgb::new(0x2b, 0x2b, 0x2b), Rgb::new(0xa9, 0xb7, 0xc6));
//! let assets = DirectoryAssets::new(["resources/markmap", "resources/markmap/static"]);
//! let templates = TemplateProvider::new(assets, PreviewConfig::default());
//!
//! let mut runtime = PreviewRuntime::new(LoggingHost, theme, templates);
//!
//! // Wire these into the editor's document listener, the browser's load
//! // handler and the theme listener.
//! let emitter = runtime.emitter();
//! emitter.content_changed("# Project\n## Goals\n## Risks");
//! emitter.load_completed(200);
//! emitter.dispose();
//!
//! // Run the event loop on your executor of choice.
//! futures::executor::block_on(runtime.run());
//! ```

// Module declarations
mod assets;
pub mod codec;
mod config;
mod effect;
mod emitter;
mod error;
mod event;
mod gate;
mod host;
mod pipeline;
mod runtime;
mod template;
mod theme;

// Public re-exports
pub use assets::{AssetSource, DirectoryAssets, EmbeddedAssets, LIBRARY_ASSETS};
pub use config::{MarkmapOptions, PreviewConfig, DEFAULT_PLACEHOLDER};
pub use effect::{Effect, HostCommand};
pub use emitter::Emitter;
pub use error::{PreviewError, Result};
pub use event::PreviewEvent;
pub use gate::{ReadinessGate, RendererState};
pub use host::RendererHost;
pub use pipeline::{DocumentSnapshot, SyncPipeline};
pub use runtime::PreviewRuntime;
pub use template::{fallback_document, TemplateProvider, FALLBACK_ERROR_MARKER};
pub use theme::{Rgb, ThemePalette, ThemeSnapshot, ThemeSource};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use host::{HostCall, RecordingHost};
#[cfg(any(test, feature = "testing"))]
pub use runtime::{TestPreviewDriver, TestPreviewRuntime};
