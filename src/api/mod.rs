// src/api/mod.rs
//! IIIF server interaction: the ability to retrieve descriptors, images,
//! and manifests.
//!
//! This module provides a data-oriented interface to IIIF servers, with
//! clear separation between I/O operations and parsing. Negotiation logic
//! lives above this boundary and never sees HTTP details.

pub mod client;
pub mod parser;

use crate::descriptor::ImageInfo;
use crate::error::AppError;
use crate::types::{BaseUri, ImagePayload, ManifestDocument, ValidatedUrl};

/// The ability to retrieve resources from IIIF servers.
///
/// This is the fundamental algebra for server interaction. The handler
/// depends on this trait, never on the HTTP client, so resolution logic is
/// testable against a stub.
#[async_trait::async_trait]
pub trait IiifRepository: Send + Sync {
    /// `GET {base}/info.json`, parsed and dimension-checked.
    async fn fetch_descriptor(&self, base: &BaseUri) -> Result<ImageInfo, AppError>;

    /// `GET {path}` for an assembled image request path.
    async fn fetch_image_bytes(&self, path: &str) -> Result<ImagePayload, AppError>;

    /// `GET {url}` for a presentation manifest, parse-checked only.
    async fn fetch_manifest(&self, url: &ValidatedUrl) -> Result<ManifestDocument, AppError>;
}

#[async_trait::async_trait]
impl IiifRepository for client::IiifHttpClient {
    async fn fetch_descriptor(&self, base: &BaseUri) -> Result<ImageInfo, AppError> {
        let response = self.get(&base.info_url()).await?;
        let result = client::extract_response_text(response).await?;
        parser::parse_info_response(result)
    }

    async fn fetch_image_bytes(&self, path: &str) -> Result<ImagePayload, AppError> {
        let response = self.get(path).await?;
        let result = client::extract_response_bytes(response).await?;
        parser::parse_image_response(result)
    }

    async fn fetch_manifest(&self, url: &ValidatedUrl) -> Result<ManifestDocument, AppError> {
        let response = self.get(url.as_str()).await?;
        let result = client::extract_response_text(response).await?;
        parser::parse_manifest_response(result)
    }
}

// Re-export the public interface
pub use client::IiifHttpClient;
