//! Dataset loading, saving, and mutation.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::DatasetConfig;
use crate::error::{SpriteError, SpriteResult};
use crate::grid;
use crate::state::types::{EntryUpdate, FrameEdit, LoadedDataset, SpriteDataset, SpriteEntry};

/// Scan `root` recursively for sprite-sheet images.
///
/// Files of each directory are visited in sorted order before its
/// subdirectories, which are themselves visited in sorted order — the same
/// order a directory tree shows them. Returned paths are relative to
/// `root` with `/` separators.
pub fn scan_images(root: &Path, extensions: &[String]) -> SpriteResult<Vec<String>> {
    let mut found = Vec::new();
    scan_dir(root, root, extensions, &mut found)?;
    Ok(found)
}

fn scan_dir(
    root: &Path,
    dir: &Path,
    extensions: &[String],
    found: &mut Vec<String>,
) -> SpriteResult<()> {
    let mut files = Vec::new();
    let mut subdirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            subdirs.push(path);
        } else {
            files.push(path);
        }
    }
    files.sort();
    subdirs.sort();

    for path in files {
        if has_image_extension(&path, extensions) {
            found.push(relative_key(root, &path));
        }
    }
    for path in subdirs {
        scan_dir(root, &path, extensions, found)?;
    }
    Ok(())
}

fn has_image_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
}

/// Dataset key for a discovered file: relative to the root, `/`-separated
/// regardless of platform.
fn relative_key(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Load the dataset for `root`: a fresh filesystem scan merged with the
/// sidecar file, if one exists.
///
/// The scan is authoritative for membership, the sidecar for per-entry
/// values. Entries for vanished images are dropped from memory (the file
/// keeps them until the next save); newly discovered images get an empty
/// placeholder. A missing sidecar is normal. An unreadable or malformed
/// sidecar degrades to an empty value set, with the error surfaced in
/// [`LoadedDataset::sidecar_warning`] so the caller can show it.
pub fn load_dataset(root: &Path, config: &DatasetConfig) -> SpriteResult<LoadedDataset> {
    let image_paths = scan_images(root, &config.image_extensions)?;
    debug!(images = image_paths.len(), root = %root.display(), "scanned folder");

    let sidecar_path = root.join(&config.sidecar_name);
    let (loaded, sidecar_warning) = match read_sidecar(&sidecar_path) {
        Ok(map) => (map, None),
        Err(e) => {
            warn!("Failed to load {}: {e}", sidecar_path.display());
            (BTreeMap::new(), Some(e))
        }
    };

    let mut entries = BTreeMap::new();
    for key in &image_paths {
        entries.insert(key.clone(), loaded.get(key).cloned().unwrap_or_default());
    }

    info!(
        images = image_paths.len(),
        known = entries.values().filter(|e| e.is_complete()).count(),
        "loaded dataset from {}",
        root.display()
    );
    Ok(LoadedDataset {
        dataset: SpriteDataset {
            root: root.to_path_buf(),
            image_paths,
            entries,
        },
        sidecar_warning,
    })
}

/// Re-scan the dataset's own folder, keeping sidecar values for images
/// that still exist ("Refresh Folder").
pub fn reload_dataset(ds: &SpriteDataset, config: &DatasetConfig) -> SpriteResult<LoadedDataset> {
    load_dataset(&ds.root, config)
}

fn read_sidecar(path: &Path) -> SpriteResult<BTreeMap<String, SpriteEntry>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| SpriteError::Sidecar {
        path: path.display().to_string(),
        source,
    })
}

/// Serialize the dataset back to its sidecar file.
///
/// Entries are written as pretty-printed JSON keyed by relative path, with
/// a fixed field order per entry so the file diffs cleanly. The content
/// goes to a temporary sibling first and is renamed over the old sidecar,
/// so a failed write leaves the previous file intact.
pub fn save_dataset(ds: &SpriteDataset, config: &DatasetConfig) -> SpriteResult<PathBuf> {
    if ds.entries.is_empty() {
        return Err(SpriteError::Validation("No data to export".into()));
    }
    if ds.image_paths.is_empty() {
        return Err(SpriteError::Validation("No images loaded".into()));
    }

    let json = serde_json::to_string_pretty(&ds.entries).map_err(|source| SpriteError::Sidecar {
        path: config.sidecar_name.clone(),
        source,
    })?;

    let sidecar_path = ds.root.join(&config.sidecar_name);
    let tmp_path = sidecar_path.with_extension("json.tmp");
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, &sidecar_path)?;

    info!(entries = ds.entries.len(), "saved {}", sidecar_path.display());
    Ok(sidecar_path)
}

/// Apply a field edit to the entry for `path`.
///
/// The edited pair is stored as given and the other pair is recomputed
/// from the image dimensions, so the two never disagree. Reports whether
/// the entry just gained all four grid fields.
pub fn update_entry(
    ds: &mut SpriteDataset,
    path: &str,
    image_size: (u32, u32),
    edit: FrameEdit,
) -> SpriteResult<EntryUpdate> {
    let (image_width, image_height) = image_size;
    if image_width == 0 || image_height == 0 {
        return Err(SpriteError::Validation(format!(
            "Image has no pixels: {image_width}x{image_height}"
        )));
    }

    let (frame_width, frame_height, count_x, count_y) = match edit {
        FrameEdit::Counts { x, y } => {
            let (fw, fh) = grid::derive_from_counts(image_width, image_height, x, y)?;
            (fw, fh, x, y)
        }
        FrameEdit::Sizes { width, height } => {
            let (cx, cy) = grid::derive_from_sizes(image_width, image_height, width, height)?;
            (width, height, cx, cy)
        }
    };

    let entry = ds
        .entries
        .get_mut(path)
        .ok_or_else(|| SpriteError::Validation(format!("Unknown image path: {path}")))?;
    let was_complete = entry.is_complete();
    entry.frame_width = Some(frame_width);
    entry.frame_height = Some(frame_height);
    entry.frame_count_x = Some(count_x);
    entry.frame_count_y = Some(count_y);

    Ok(EntryUpdate {
        entry: entry.clone(),
        became_complete: !was_complete,
    })
}

/// Store the origin marker position for `path`.
///
/// Drag input arrives in image space but may be fractional; pivots are
/// pixel-snapped, so both coordinates are rounded to the nearest integer
/// before storing. Grid fields are untouched.
pub fn move_origin_point(
    ds: &mut SpriteDataset,
    path: &str,
    x: f64,
    y: f64,
) -> SpriteResult<(i32, i32)> {
    let entry = ds
        .entries
        .get_mut(path)
        .ok_or_else(|| SpriteError::Validation(format!("Unknown image path: {path}")))?;
    let snapped = (x.round() as i32, y.round() as i32);
    entry.origin_x = Some(snapped.0);
    entry.origin_y = Some(snapped.1);
    Ok(snapped)
}
