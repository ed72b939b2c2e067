// src/api/parser.rs
//! Response parsing for the two IIIF fetch boundaries.
//!
//! Maps transport-level outcomes onto the error taxonomy: a non-success
//! status is a transport error carrying the numeric status, an unparseable
//! or incomplete descriptor body is a malformed-descriptor error with a
//! truncated body preview for diagnosis.

use super::client::ApiResponse;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::descriptor::ImageInfo;
use crate::error::AppError;
use crate::types::{ImagePayload, ManifestDocument};

/// Parse a capability descriptor response.
///
/// Enforces the presence of native width/height; a descriptor without them
/// cannot drive any size negotiation.
pub fn parse_info_response(result: ApiResponse<String>) -> Result<ImageInfo, AppError> {
    ensure_success(&result)?;

    let info: ImageInfo = serde_json::from_str(&result.data).map_err(|e| {
        log::error!("Failed to parse descriptor from {}: {}", result.url, e);
        AppError::MalformedDescriptor(format!("{} (body: {})", e, preview(&result.data)))
    })?;

    if info.native_dimensions().is_none() {
        return Err(AppError::MalformedDescriptor(format!(
            "descriptor at {} is missing native width/height",
            result.url
        )));
    }

    Ok(info)
}

/// Parse a presentation manifest response.
///
/// Validation is parse-only: the manifest must be structured data, nothing
/// more. Schema conformance belongs to the Presentation API, not here.
pub fn parse_manifest_response(result: ApiResponse<String>) -> Result<ManifestDocument, AppError> {
    ensure_success(&result)?;

    let value: serde_json::Value = serde_json::from_str(&result.data).map_err(|e| {
        AppError::MalformedDescriptor(format!(
            "manifest at {} is not valid JSON: {} (body: {})",
            result.url,
            e,
            preview(&result.data)
        ))
    })?;

    Ok(ManifestDocument::new(value))
}

/// Parse an image bytes response.
pub fn parse_image_response(result: ApiResponse<Vec<u8>>) -> Result<ImagePayload, AppError> {
    ensure_success(&result)?;
    Ok(ImagePayload::new(result.content_type, result.data))
}

fn ensure_success<T>(result: &ApiResponse<T>) -> Result<(), AppError> {
    if result.status.is_success() {
        Ok(())
    } else {
        Err(AppError::TransportError {
            status: result.status.as_u16(),
            url: result.url.clone(),
        })
    }
}

/// Truncates a response body for inclusion in error messages.
fn preview(body: &str) -> String {
    if body.chars().count() > ERROR_BODY_PREVIEW_LENGTH {
        let truncated: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        body.to_string()
    }
}
