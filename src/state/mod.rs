//! Dataset state and persistence.
//!
//! This module contains the sprite metadata model and its operations:
//! - Per-image frame-grid and pivot entries
//! - The per-folder dataset keyed by relative image path
//! - Sidecar load/merge/prune and save
//! - Field-edit and origin-marker mutations

mod dataset;
mod types;

pub use dataset::*;
pub use types::*;
