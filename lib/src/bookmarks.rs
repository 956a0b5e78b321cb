use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{MarktreeError, Result};

/// One node of the bookmark tree, in the Chromium on-disk JSON shape.
///
/// An empty `url` marks a folder; a non-empty `url` marks a leaf bookmark.
/// Real files never populate both `url` and `children`, but nothing here
/// relies on that. Extra per-node fields (`type`, `id`, `date_added`, ...)
/// are ignored on decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookmarkNode {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub children: Vec<BookmarkNode>,
}

impl BookmarkNode {
    pub fn is_folder(&self) -> bool {
        self.url.is_empty()
    }
}

/// The three named top-level trees of a Chromium bookmarks file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookmarkRoots {
    #[serde(default)]
    pub bookmark_bar: BookmarkNode,
    #[serde(default)]
    pub other: BookmarkNode,
    #[serde(default)]
    pub synced: BookmarkNode,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookmarkFile {
    #[serde(default)]
    pub roots: BookmarkRoots,
}

/// Read and decode a bookmarks file in one shot.
///
/// Read and decode failures stay distinguishable: `FileRead` carries the
/// io error, `Parse` the decoder message. No partial results.
pub fn load_bookmarks(path: &Path) -> Result<BookmarkFile> {
    let mut data = fs::read(path).map_err(|source| MarktreeError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let file: BookmarkFile = simd_json::serde::from_slice(&mut data)?;
    Ok(file)
}
