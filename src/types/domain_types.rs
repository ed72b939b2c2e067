// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use crate::constants::{DEFAULT_IMAGE_CONTENT_TYPE, INFO_DOCUMENT};
use std::fmt;
use url::Url;

/// Base identifier of one image resource on a IIIF server.
///
/// Normalized on construction: exactly one trailing path separator is
/// stripped, so `{base}/info.json` never carries a doubled slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUri(String);

impl BaseUri {
    /// Create a base URI with validation and trailing-slash normalization.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyField("base URI"));
        }

        let normalized = trimmed.strip_suffix('/').unwrap_or(trimmed);

        let parsed = Url::parse(normalized).map_err(|e| ValidationError::InvalidUrl {
            url: input.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ValidationError::InvalidUrl {
                url: input.to_string(),
                reason: "Only HTTP and HTTPS URLs are supported".to_string(),
            });
        }

        Ok(Self(normalized.to_string()))
    }

    /// Get the base URI as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL of the capability descriptor for this resource.
    pub fn info_url(&self) -> String {
        format!("{}/{}", self.0, INFO_DOCUMENT)
    }
}

impl fmt::Display for BaseUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated absolute URL, used for manifest fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl(Url);

impl ValidatedUrl {
    /// Create a new validated URL
    pub fn parse(url: &str) -> Result<Self, ValidationError> {
        match Url::parse(url) {
            Ok(parsed_url) => {
                if parsed_url.scheme() != "http" && parsed_url.scheme() != "https" {
                    return Err(ValidationError::InvalidUrl {
                        url: url.to_string(),
                        reason: "Only HTTP and HTTPS URLs are supported".to_string(),
                    });
                }
                Ok(Self(parsed_url))
            }
            Err(e) => Err(ValidationError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Get the URL as a string
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ValidatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pixel dimensions of an image, a region, or a request target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total pixel count. Widened to u64 so large scans don't overflow.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Image bytes with their declared content type.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    /// Wraps fetched bytes, defaulting the content type when the server
    /// omitted the header.
    pub fn new(content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            content_type: content_type
                .unwrap_or_else(|| DEFAULT_IMAGE_CONTENT_TYPE.to_string()),
            bytes,
        }
    }

    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }
}

/// A fetched presentation manifest: parse-checked JSON, not schema-validated.
#[derive(Debug, Clone)]
pub struct ManifestDocument(serde_json::Value);

impl ManifestDocument {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    #[allow(dead_code)]
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Renders the manifest back to text for the document payload.
    pub fn to_text(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}
