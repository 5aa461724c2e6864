//! Sprite-sheet frame metadata store.
//!
//! Everything a sprite-frame editor front-end needs short of widgets:
//! dataset load/merge/save against a per-folder JSON sidecar, frame-grid
//! derivation arithmetic for count and size edits, pixel-snapped origin
//! handling with zoom-space transforms, and persisted application
//! configuration.
//!
//! All operations are synchronous and run on the caller's thread; the
//! front-end owns the event loop and calls in from its handlers.

pub mod config;
pub mod error;
pub mod grid;
pub mod state;
pub mod view;

pub use error::{SpriteError, SpriteResult};
pub use state::{EntryUpdate, FrameEdit, LoadedDataset, SpriteDataset, SpriteEntry};
pub use view::{MarkerSnap, ViewState};
