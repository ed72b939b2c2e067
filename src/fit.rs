// src/fit.rs
//! Largest-fit dimension computation.
//!
//! Pure geometry: given a source extent and resolved limits, compute the
//! largest proportionally-scaled target that satisfies every bound. The
//! system only ever downsizes; a region smaller than its limits is
//! requested at its native size.

use crate::descriptor::ApiGeneration;
use crate::limits::SizeLimits;
use crate::types::Dimensions;

/// Compute the largest permissible target dimensions for a source extent.
///
/// Two stages. The linear stage scales by
/// `min(maxWidth/width, maxHeight/height, 1.0)` and truncates each axis.
/// The area stage then corrects by `sqrt(maxArea/area)` when the truncated
/// result still exceeds the area bound. Area cannot be folded into the
/// linear factor without distorting the aspect ratio.
/// Only the v3 generation has declared area semantics, so v2 never receives
/// the correction even when an area figure is present in the limits.
///
/// Truncation (floor) is used at every step, matching the behavior of the
/// servers this client was tuned against.
pub fn fit_dimensions(
    source: Dimensions,
    limits: &SizeLimits,
    generation: ApiGeneration,
) -> Dimensions {
    let scale = (limits.max_width as f64 / source.width as f64)
        .min(limits.max_height as f64 / source.height as f64)
        .min(1.0);

    let mut width = (source.width as f64 * scale).floor() as u32;
    let mut height = (source.height as f64 * scale).floor() as u32;

    if generation.is_new_generation() {
        if let Some(max_area) = limits.max_area {
            let area = width as u64 * height as u64;
            if area > max_area {
                let correction = (max_area as f64 / area as f64).sqrt();
                width = (width as f64 * correction).floor() as u32;
                height = (height as f64 * correction).floor() as u32;
            }
        }
    }

    Dimensions::new(width, height)
}
