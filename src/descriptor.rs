// src/descriptor.rs
//! Capability descriptor ("info document") model and generation detection.
//!
//! The two Image API generations express the same capability-limit concepts
//! in structurally different documents: v3 declares `maxWidth`/`maxHeight`/
//! `maxArea` at the top level, v2 tucks them into an extension object inside
//! the `profile` list. This module deserializes both shapes into one struct
//! and detects which generation the server speaks, so downstream code
//! dispatches on a tag instead of re-inspecting JSON.

use crate::constants::{
    IMAGE_2_CONTEXT_MARKER, IMAGE_3_CONTEXT_MARKER, IMAGE_SERVICE_3_TYPE, SIZE_KEYWORD_V2,
    SIZE_KEYWORD_V3,
};
use crate::types::Dimensions;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Which generation of the Image API the server speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiGeneration {
    V2,
    V3,
}

impl ApiGeneration {
    /// The newer generation declares size limits at the descriptor top level
    /// and is the only one with area-bound semantics.
    pub fn is_new_generation(self) -> bool {
        matches!(self, Self::V3)
    }

    /// The "as large as permitted" size keyword for this generation.
    pub fn size_keyword(self) -> &'static str {
        match self {
            Self::V2 => SIZE_KEYWORD_V2,
            Self::V3 => SIZE_KEYWORD_V3,
        }
    }
}

impl fmt::Display for ApiGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V2 => write!(f, "v2"),
            Self::V3 => write!(f, "v3"),
        }
    }
}

/// Server-declared metadata for one image resource.
///
/// `width`/`height` are optional here so that an incomplete document parses
/// far enough to produce a useful error; the API parser enforces their
/// presence before the descriptor reaches any computation.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageInfo {
    /// Polymorphic: a string in most documents, an array in some v3 ones.
    #[serde(rename = "@context", default)]
    pub context: Option<Value>,

    #[allow(dead_code)] // Deserialized for completeness; negotiation never reads it
    #[serde(rename = "@id", default)]
    pub legacy_id: Option<String>,

    #[allow(dead_code)]
    #[serde(default)]
    pub id: Option<String>,

    #[serde(rename = "type", default)]
    pub service_type: Option<String>,

    #[allow(dead_code)]
    #[serde(default)]
    pub protocol: Option<String>,

    #[serde(default)]
    pub width: Option<u32>,

    #[serde(default)]
    pub height: Option<u32>,

    #[serde(rename = "maxWidth", default)]
    pub max_width: Option<u32>,

    #[serde(rename = "maxHeight", default)]
    pub max_height: Option<u32>,

    #[serde(rename = "maxArea", default)]
    pub max_area: Option<u64>,

    /// Kept raw: the v2 profile list mixes compliance-level URI strings with
    /// extension objects, and v3 flattens it to a single string.
    #[serde(default)]
    pub profile: Option<Value>,
}

impl ImageInfo {
    /// Detect the API generation from the descriptor.
    ///
    /// The `@context` URI is authoritative when present; otherwise the v3
    /// `type` marker decides. Everything else falls back to v2, since legacy
    /// servers are the ones that omit or abbreviate the context.
    pub fn generation(&self) -> ApiGeneration {
        if let Some(context) = &self.context {
            if context_mentions(context, IMAGE_3_CONTEXT_MARKER) {
                return ApiGeneration::V3;
            }
            if context_mentions(context, IMAGE_2_CONTEXT_MARKER) {
                return ApiGeneration::V2;
            }
        }
        if self.service_type.as_deref() == Some(IMAGE_SERVICE_3_TYPE) {
            ApiGeneration::V3
        } else {
            ApiGeneration::V2
        }
    }

    /// Native pixel dimensions, when the document declares both.
    pub fn native_dimensions(&self) -> Option<Dimensions> {
        match (self.width, self.height) {
            (Some(width), Some(height)) => Some(Dimensions::new(width, height)),
            _ => None,
        }
    }

    /// v2 capability-extension lookup: scan the profile list for an object
    /// entry carrying the named limit field.
    fn profile_limit(&self, field: &str) -> Option<&Value> {
        match self.profile.as_ref()? {
            Value::Array(entries) => entries
                .iter()
                .filter_map(|entry| entry.as_object())
                .find_map(|obj| obj.get(field)),
            Value::Object(obj) => obj.get(field),
            _ => None,
        }
    }

    pub fn profile_limit_u32(&self, field: &str) -> Option<u32> {
        self.profile_limit(field)?
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
    }

    pub fn profile_limit_u64(&self, field: &str) -> Option<u64> {
        self.profile_limit(field)?.as_u64()
    }
}

fn context_mentions(context: &Value, marker: &str) -> bool {
    match context {
        Value::String(uri) => uri.contains(marker),
        Value::Array(items) => items
            .iter()
            .any(|item| item.as_str().is_some_and(|uri| uri.contains(marker))),
        _ => false,
    }
}
