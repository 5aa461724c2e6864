//! Types for the sprite metadata model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::SpriteError;
use crate::grid;

/// Frame-grid and pivot metadata for one sprite-sheet image.
///
/// A freshly discovered image starts as an empty placeholder and is filled
/// in as the user edits. Serialized field order follows declaration order
/// so sidecar diffs stay stable; absent fields are omitted entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_count_x: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_count_y: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_x: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_y: Option<i32>,
}

impl SpriteEntry {
    /// An entry is complete once all four grid fields are present.
    /// Navigation trees highlight incomplete entries; the highlight clears
    /// on the incomplete-to-complete transition.
    pub fn is_complete(&self) -> bool {
        self.frame_width.is_some()
            && self.frame_height.is_some()
            && self.frame_count_x.is_some()
            && self.frame_count_y.is_some()
    }

    /// Pivot to display when none is stored yet: the frame center or the
    /// top-left corner, depending on the configured editor variant.
    pub fn effective_origin(&self, centered: bool) -> (i32, i32) {
        match (self.origin_x, self.origin_y) {
            (Some(x), Some(y)) => (x, y),
            _ if centered => grid::center_origin(
                self.frame_width.unwrap_or(1),
                self.frame_height.unwrap_or(1),
            ),
            _ => (0, 0),
        }
    }
}

/// Which pair of grid fields the user just edited. The other pair is
/// derived, never stored as independent truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEdit {
    /// Frame counts are authoritative; sizes are recomputed.
    Counts { x: u32, y: u32 },
    /// Frame sizes are authoritative; counts are recomputed.
    Sizes { width: u32, height: u32 },
}

/// Result of applying a field edit to an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryUpdate {
    /// The entry as stored after the edit.
    pub entry: SpriteEntry,
    /// True exactly when this edit took the entry from incomplete to
    /// complete.
    pub became_complete: bool,
}

/// In-memory dataset for one root folder.
///
/// Membership comes from the filesystem scan; values come from the sidecar
/// and from user edits. Keys are POSIX-style paths relative to `root`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteDataset {
    /// Folder the dataset was scanned from.
    pub root: PathBuf,
    /// Discovered image paths in scan order.
    pub image_paths: Vec<String>,
    /// Metadata per discovered image, keyed like `image_paths`.
    pub entries: BTreeMap<String, SpriteEntry>,
}

impl SpriteDataset {
    /// Entry for a relative image path, if the image was discovered.
    pub fn entry(&self, path: &str) -> Option<&SpriteEntry> {
        self.entries.get(path)
    }

    /// Absolute path for a dataset key.
    pub fn absolute_path(&self, path: &str) -> PathBuf {
        self.root.join(Path::new(path))
    }

    /// Number of discovered images.
    pub fn len(&self) -> usize {
        self.image_paths.len()
    }

    /// True when the scan found no images.
    pub fn is_empty(&self) -> bool {
        self.image_paths.is_empty()
    }
}

/// Outcome of a folder load: the merged dataset, plus a warning when an
/// existing sidecar could not be used and the values fell back to empty.
#[derive(Debug)]
pub struct LoadedDataset {
    pub dataset: SpriteDataset,
    pub sidecar_warning: Option<SpriteError>,
}
