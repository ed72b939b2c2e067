// src/request.rs
//! Image API request assembly.
//!
//! Turns a resolved target size and the caller's region back into the
//! `{base}/{region}/{size}/{rotation}/{quality}.{format}` path the Image API
//! expects. Rotation and quality/format are fixed; only region and size are
//! negotiated.

use crate::constants::{QUALITY_FORMAT, ROTATION_NONE};
use crate::descriptor::ApiGeneration;
use crate::region::RegionSelector;
use crate::types::{BaseUri, Dimensions};

/// One fully assembled image request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    /// The region path segment, e.g. `full` or `pct:15,30,25,30`.
    pub region: String,
    /// The size path segment, e.g. `max`, `full`, or `670,1000`.
    pub size: String,
    /// The complete request path.
    pub path: String,
}

/// Assemble the request path for a resolved target.
///
/// The size parameter is the generation's maximum keyword when, and only
/// when, the target exactly equals the region's native extent; the server
/// then serves its best rendition without an explicit size. Any actual
/// scaling forces an explicit `w,h` pair; single-dimension and percentage
/// size forms are never emitted.
pub fn build_request(
    base: &BaseUri,
    target: Dimensions,
    region_native: Dimensions,
    selector: &RegionSelector,
    generation: ApiGeneration,
) -> ImageRequest {
    let region = selector.to_string();

    let size = if target == region_native {
        generation.size_keyword().to_string()
    } else {
        format!("{},{}", target.width, target.height)
    };

    let path = format!(
        "{}/{}/{}/{}/{}",
        base.as_str(),
        region,
        size,
        ROTATION_NONE,
        QUALITY_FORMAT
    );

    ImageRequest { region, size, path }
}
