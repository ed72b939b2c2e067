// src/region.rs
//! Region selector grammar: the whole image, or a percentage rectangle.
//!
//! Callers identify a sub-rectangle either with the `full` sentinel or with
//! `pct:x,y,width,height`, four real numbers in percent of the native
//! dimensions. Parsing is strict: anything that is neither the sentinel nor
//! a well-formed percentage rectangle is a syntax error, and rectangles that
//! leave the image are bounds errors.

use crate::constants::{FULL_REGION, PCT_PREFIX};
use crate::error::AppError;
use crate::types::Dimensions;
use regex::Regex;
use std::fmt;

/// Caller-supplied region of one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegionSelector {
    /// The whole image.
    Full,
    /// A percentage rectangle relative to the native dimensions.
    Percent(PercentRegion),
}

/// Percentage rectangle with the invariant `x+width <= 100`,
/// `y+height <= 100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RegionSelector {
    /// Parse a caller-supplied selector.
    ///
    /// An absent, empty, or `full` selector is always the whole image and
    /// never an error.
    pub fn parse(selector: Option<&str>) -> Result<Self, AppError> {
        let raw = match selector {
            None => return Ok(Self::Full),
            Some(s) => s.trim(),
        };
        if raw.is_empty() || raw == FULL_REGION {
            return Ok(Self::Full);
        }

        lazy_static::lazy_static! {
            static ref PCT_REGION: Regex = Regex::new(r"^pct:([^,]+),([^,]+),([^,]+),([^,]+)$")
                .expect("percentage-region pattern is valid");
        }

        let caps = PCT_REGION.captures(raw).ok_or_else(|| {
            AppError::InvalidRegionSyntax(format!(
                "expected '{}' or '{}x,y,width,height', got '{}'",
                FULL_REGION, PCT_PREFIX, raw
            ))
        })?;

        let mut coords = [0f64; 4];
        for (slot, cap) in coords.iter_mut().zip(caps.iter().skip(1)) {
            let text = cap.map(|m| m.as_str().trim()).unwrap_or_default();
            let value: f64 = text.parse().map_err(|_| {
                AppError::InvalidRegionSyntax(format!("'{}' is not a number in '{}'", text, raw))
            })?;
            // NaN/inf would slip past the ordered bounds comparisons below.
            if !value.is_finite() {
                return Err(AppError::InvalidRegionSyntax(format!(
                    "'{}' is not a finite number in '{}'",
                    text, raw
                )));
            }
            *slot = value;
        }

        let region = PercentRegion {
            x: coords[0],
            y: coords[1],
            width: coords[2],
            height: coords[3],
        };
        region.check_bounds()?;
        Ok(Self::Percent(region))
    }

    #[allow(dead_code)] // Used by library consumers
    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full)
    }

    /// Pixel extent of this region on an image of the given native size.
    ///
    /// Percentage extents truncate: `floor(pct/100 * native)` per axis.
    pub fn pixel_extent(&self, native: Dimensions) -> Dimensions {
        match self {
            Self::Full => native,
            Self::Percent(r) => Dimensions::new(
                ((r.width / 100.0) * native.width as f64).floor() as u32,
                ((r.height / 100.0) * native.height as f64).floor() as u32,
            ),
        }
    }
}

impl PercentRegion {
    fn check_bounds(&self) -> Result<(), AppError> {
        if self.x < 0.0 || self.y < 0.0 {
            return Err(AppError::InvalidRegionBounds(format!(
                "offsets must not be negative (x={}, y={})",
                self.x, self.y
            )));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(AppError::InvalidRegionBounds(format!(
                "width and height must be positive (width={}, height={})",
                self.width, self.height
            )));
        }
        if self.x + self.width > 100.0 {
            return Err(AppError::InvalidRegionBounds(format!(
                "x+width must not exceed 100 ({}+{})",
                self.x, self.width
            )));
        }
        if self.y + self.height > 100.0 {
            return Err(AppError::InvalidRegionBounds(format!(
                "y+height must not exceed 100 ({}+{})",
                self.y, self.height
            )));
        }
        Ok(())
    }
}

// Re-emits the coordinates exactly as parsed. The request path must carry
// the caller's region, not one recomputed from pixels, so there is no
// rounding drift between the selected region and the declared parameter.
impl fmt::Display for RegionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "{}", FULL_REGION),
            Self::Percent(r) => write!(f, "pct:{},{},{},{}", r.x, r.y, r.width, r.height),
        }
    }
}
