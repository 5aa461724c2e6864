//! Frame-grid arithmetic shared by both edit directions.
//!
//! A sprite sheet is an even grid: the user edits either the frame counts
//! or the frame sizes, and the other pair is derived by floored integer
//! division. Nothing here touches the dataset; these are the pure
//! functions the field-edit handlers call.

use crate::error::{SpriteError, SpriteResult};

/// Frame size from frame counts, floor semantics.
///
/// Counts come from user input; callers clamp non-positive text to 1 with
/// [`clamp_count`] before invoking, so a zero here is a programming error
/// surfaced as a validation failure. Derived sizes are clamped to at
/// least 1 so grid fields stay positive when a count exceeds the image
/// dimension.
pub fn derive_from_counts(
    image_width: u32,
    image_height: u32,
    count_x: u32,
    count_y: u32,
) -> SpriteResult<(u32, u32)> {
    if count_x == 0 || count_y == 0 {
        return Err(SpriteError::Validation(format!(
            "Frame counts must be positive, got {count_x}x{count_y}"
        )));
    }
    Ok(((image_width / count_x).max(1), (image_height / count_y).max(1)))
}

/// Frame counts from frame size, floor semantics.
///
/// The inverse of [`derive_from_counts`]; the same positivity contract
/// applies to the frame size, and derived counts are clamped to at
/// least 1 when a frame is larger than the image.
pub fn derive_from_sizes(
    image_width: u32,
    image_height: u32,
    frame_width: u32,
    frame_height: u32,
) -> SpriteResult<(u32, u32)> {
    if frame_width == 0 || frame_height == 0 {
        return Err(SpriteError::Validation(format!(
            "Frame size must be positive, got {frame_width}x{frame_height}"
        )));
    }
    Ok(((image_width / frame_width).max(1), (image_height / frame_height).max(1)))
}

/// Clamp-to-1 rule for count and size fields: the UI treats zero or
/// negative input as 1 before any derivation runs.
pub fn clamp_count(raw: i64) -> u32 {
    raw.clamp(1, i64::from(u32::MAX)) as u32
}

/// Centered pivot for a frame of the given size.
pub fn center_origin(frame_width: u32, frame_height: u32) -> (i32, i32) {
    ((frame_width / 2) as i32, (frame_height / 2) as i32)
}

/// Tolerant numeric parsing for form fields.
///
/// Accepts integer or float text and truncates toward zero; anything else
/// is `None`, which callers treat as "no edit yet" rather than an error.
pub fn parse_field(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.trunc() as i64)
}
