// src/limits.rs
//! Effective size-limit resolution.
//!
//! Merges three sources of truth into one constraint set: the region's own
//! pixel extent, the server-declared limits (whose location in the document
//! depends on the API generation), and the handler's absolute ceiling. The
//! merge is spelled out as separate steps: the mirrored
//! `maxHeight := maxWidth` default and the caller-ceiling-wins rule are each
//! easy to invert when folded into one combined `min()` expression.

use crate::config::HandlerConfig;
use crate::descriptor::{ApiGeneration, ImageInfo};
use crate::types::Dimensions;

/// The tightest width/height/area bounds for one resolution call.
///
/// `max_area` stays `None` when neither the server nor the handler declares
/// an area bound; area is not constrained unless someone constrains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeLimits {
    pub max_width: u32,
    pub max_height: u32,
    pub max_area: Option<u64>,
}

impl SizeLimits {
    /// Resolve the effective limits for one region of one image.
    ///
    /// Never fails: degenerate (zero) values are not rejected here, they
    /// flow through and produce zero-sized targets downstream.
    pub fn resolve(
        info: &ImageInfo,
        region: Dimensions,
        generation: ApiGeneration,
        config: &HandlerConfig,
    ) -> Self {
        // The region's own extent is the unconstrained upper bound.
        let mut max_width = region.width;
        let mut max_height = region.height;
        let mut max_area: Option<u64> = None;

        // Server-declared limits. v3 puts them at the top level of the
        // descriptor; v2 carries the same three fields inside a profile
        // extension object, with identical semantics.
        let (declared_width, declared_height, declared_area) = match generation {
            ApiGeneration::V3 => (info.max_width, info.max_height, info.max_area),
            ApiGeneration::V2 => (
                info.profile_limit_u32("maxWidth"),
                info.profile_limit_u32("maxHeight"),
                info.profile_limit_u64("maxArea"),
            ),
        };

        if let Some(declared) = declared_width {
            max_width = max_width.min(declared);
        }
        match (declared_height, declared_width) {
            (Some(declared), _) => max_height = max_height.min(declared),
            // Absent maxHeight means equal to maxWidth.
            (None, Some(mirrored)) => max_height = max_height.min(mirrored),
            (None, None) => {}
        }
        if let Some(declared) = declared_area {
            max_area = Some(declared);
        }

        // The caller's ceiling always wins over the server's, never the
        // reverse.
        max_width = max_width.min(config.max_dimension);
        max_height = max_height.min(config.max_dimension);
        max_area = match (max_area, config.max_area) {
            (Some(declared), Some(ceiling)) => Some(declared.min(ceiling)),
            (Some(declared), None) => Some(declared),
            (None, Some(ceiling)) => Some(ceiling),
            (None, None) => None,
        };

        Self {
            max_width,
            max_height,
            max_area,
        }
    }
}
