//! Lookup of the static markmap library scripts.

use std::io::ErrorKind;
use std::path::PathBuf;

use log::trace;
use rust_embed::RustEmbed;

use crate::error::{PreviewError, Result};

/// Library scripts inlined into every preview document, base dependency first.
pub const LIBRARY_ASSETS: [&str; 3] = ["d3.min.js", "markmap-view.min.js", "markmap-lib.min.js"];

/// Source of the static scripts the preview document inlines.
#[cfg_attr(test, mockall::automock)]
pub trait AssetSource {
    /// Load the asset called `name` as text.
    fn load(&self, name: &str) -> Result<String>;
}

/// Assets embedded from `assets/markmap/` at compile time.
#[derive(RustEmbed)]
#[folder = "assets/markmap/"]
pub struct EmbeddedAssets;

impl AssetSource for EmbeddedAssets {
    fn load(&self, name: &str) -> Result<String> {
        let file = Self::get(name).ok_or_else(|| PreviewError::AssetMissing {
            name: name.to_string(),
            searched: "embedded assets".to_string(),
        })?;

        String::from_utf8(file.data.into_owned()).map_err(|source| PreviewError::AssetEncoding {
            name: name.to_string(),
            source,
        })
    }
}

/// Assets read from disk, trying each root directory in order.
#[derive(Clone, Debug)]
pub struct DirectoryAssets {
    roots: Vec<PathBuf>,
}

impl DirectoryAssets {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }
}

impl AssetSource for DirectoryAssets {
    fn load(&self, name: &str) -> Result<String> {
        for root in &self.roots {
            let path = root.join(name);
            match std::fs::read(&path) {
                Ok(bytes) => {
                    return String::from_utf8(bytes).map_err(|source| PreviewError::AssetEncoding {
                        name: name.to_string(),
                        source,
                    });
                }
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    trace!("asset {name} not under {}", root.display());
                }
                Err(source) => return Err(PreviewError::AssetRead { path, source }),
            }
        }

        Err(PreviewError::AssetMissing {
            name: name.to_string(),
            searched: self
                .roots
                .iter()
                .map(|root| root.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_assets_try_roots_in_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::write(second.path().join("d3.min.js"), "var d3 = {};").unwrap();
        std::fs::write(second.path().join("markmap-lib.min.js"), "second").unwrap();
        std::fs::write(first.path().join("markmap-lib.min.js"), "first").unwrap();

        let assets = DirectoryAssets::new([first.path(), second.path()]);

        assert_eq!(assets.load("d3.min.js").unwrap(), "var d3 = {};");
        assert_eq!(assets.load("markmap-lib.min.js").unwrap(), "first");
    }

    #[test]
    fn directory_assets_report_every_searched_root() {
        let root = tempfile::tempdir().unwrap();
        let assets = DirectoryAssets::new([root.path()]);

        match assets.load("markmap-view.min.js") {
            Err(PreviewError::AssetMissing { name, searched }) => {
                assert_eq!(name, "markmap-view.min.js");
                assert!(searched.contains(&root.path().display().to_string()));
            }
            other => panic!("expected AssetMissing, got {other:?}"),
        }
    }

    #[test]
    fn directory_assets_reject_non_utf8() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("d3.min.js"), [0xffu8, 0xfe]).unwrap();

        let assets = DirectoryAssets::new([root.path()]);

        assert!(matches!(
            assets.load("d3.min.js"),
            Err(PreviewError::AssetEncoding { .. })
        ));
    }

    #[test]
    fn embedded_assets_miss_unknown_names() {
        assert!(matches!(
            EmbeddedAssets.load("no-such-library.js"),
            Err(PreviewError::AssetMissing { .. })
        ));
    }
}
