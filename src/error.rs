//! Error types for the preview pipeline.

use std::path::PathBuf;
use std::string::FromUtf8Error;

/// Errors raised while preparing a preview document or decoding a payload.
///
/// None of these ever escape the synchronization loop: asset failures degrade
/// to the themed fallback document, and render failures stay inside the page.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// A required library script could not be located.
    #[error("asset {name:?} not found (searched: {searched})")]
    AssetMissing { name: String, searched: String },

    /// A library script exists but could not be read.
    #[error("failed to read asset {}", path.display())]
    AssetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A library script is not valid UTF-8.
    #[error("asset {name:?} is not valid UTF-8")]
    AssetEncoding {
        name: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("render payload is not valid base64")]
    PayloadDecode(#[from] base64::DecodeError),

    #[error("render payload is not valid UTF-8")]
    PayloadUtf8(#[from] FromUtf8Error),

    #[error("invalid preview configuration")]
    Config(#[from] serde_json::Error),

    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
}

pub type Result<T> = core::result::Result<T, PreviewError>;
