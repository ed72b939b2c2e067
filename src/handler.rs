// src/handler.rs
//! The tool surface: three operations exposed to a calling agent.
//!
//! The handler owns a read-only [`HandlerConfig`] and a repository, performs
//! at most two sequential network operations per call (descriptor, then
//! image), and runs every resolution step synchronously in between. Nothing
//! is shared mutably, so one handler instance serves concurrent calls
//! without coordination. Each call fails independently; the handler remains
//! usable after any error.

use crate::api::IiifRepository;
use crate::config::HandlerConfig;
use crate::descriptor::ImageInfo;
use crate::error::{classify_fetch_failure, AppError};
use crate::fit::fit_dimensions;
use crate::limits::SizeLimits;
use crate::region::RegionSelector;
use crate::request::{build_request, ImageRequest};
use crate::types::{BaseUri, ValidatedUrl};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Identifies which tool operation an error escaped from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    FetchManifest,
    FetchImage,
    FetchImageRegion,
}

impl Tool {
    pub fn name(self) -> &'static str {
        match self {
            Self::FetchManifest => "fetch-manifest",
            Self::FetchImage => "fetch-image",
            Self::FetchImageRegion => "fetch-image-region",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error escaping the tool surface, prefixed with the failing operation.
///
/// The underlying message is preserved verbatim; the prefix only identifies
/// which tool the caller invoked.
#[derive(Error, Debug)]
#[error("{tool} failed: {source}")]
pub struct ToolError {
    pub tool: Tool,
    #[source]
    pub source: AppError,
}

/// Payload returned by a tool operation.
#[derive(Debug, Clone)]
pub enum ToolPayload {
    /// A text document (e.g. a manifest).
    Text { content: String },
    /// A binary resource tagged with its MIME type.
    Binary { media_type: String, bytes: Vec<u8> },
}

/// Resolves IIIF resource references into constrained Image API requests and
/// executes them.
pub struct ImageRequestHandler {
    config: HandlerConfig,
    repository: Arc<dyn IiifRepository>,
}

impl ImageRequestHandler {
    pub fn new(config: HandlerConfig, repository: Arc<dyn IiifRepository>) -> Self {
        Self { config, repository }
    }

    #[allow(dead_code)] // Used by library consumers
    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Fetch a presentation manifest and return it as a text document.
    pub async fn fetch_manifest(&self, url: &str) -> Result<ToolPayload, ToolError> {
        self.manifest(url)
            .await
            .map_err(|source| ToolError {
                tool: Tool::FetchManifest,
                source,
            })
    }

    /// Resolve and fetch the full image at the largest permitted size.
    pub async fn fetch_image(&self, base_uri: &str) -> Result<ToolPayload, ToolError> {
        self.image(base_uri, None)
            .await
            .map_err(|source| ToolError {
                tool: Tool::FetchImage,
                source,
            })
    }

    /// Resolve and fetch a region of an image.
    pub async fn fetch_image_region(
        &self,
        base_uri: &str,
        region: &str,
    ) -> Result<ToolPayload, ToolError> {
        self.image(base_uri, Some(region))
            .await
            .map_err(|source| ToolError {
                tool: Tool::FetchImageRegion,
                source,
            })
    }

    async fn manifest(&self, url: &str) -> Result<ToolPayload, AppError> {
        if url.trim().is_empty() {
            return Err(AppError::MissingParameter("manifestUrl".to_string()));
        }
        let url = ValidatedUrl::parse(url)?;

        log::info!("Retrieving manifest {}", url);
        let manifest = self.fetch_logged(self.repository.fetch_manifest(&url)).await?;

        Ok(ToolPayload::Text {
            content: manifest.to_text(),
        })
    }

    async fn image(&self, base_uri: &str, selector: Option<&str>) -> Result<ToolPayload, AppError> {
        if base_uri.trim().is_empty() {
            return Err(AppError::MissingParameter("baseUri".to_string()));
        }
        let base = BaseUri::parse(base_uri)?;

        log::info!("Retrieving descriptor for {}", base);
        let info = self
            .fetch_logged(self.repository.fetch_descriptor(&base))
            .await?;

        let request = plan_request(&base, &info, selector, &self.config)?;
        log::info!(
            "Resolved {} request: region={} size={}",
            info.generation(),
            request.region,
            request.size
        );

        let payload = self
            .fetch_logged(self.repository.fetch_image_bytes(&request.path))
            .await?;
        log::info!(
            "Fetched {} bytes ({})",
            payload.byte_length(),
            payload.content_type
        );

        Ok(ToolPayload::Binary {
            media_type: payload.content_type,
            bytes: payload.bytes,
        })
    }

    /// Awaits a repository call, logging the classified failure reason
    /// before propagating it.
    async fn fetch_logged<T>(
        &self,
        fetch: impl std::future::Future<Output = Result<T, AppError>>,
    ) -> Result<T, AppError> {
        match fetch.await {
            Ok(value) => Ok(value),
            Err(err) => {
                if let Some(failure) = classify_fetch_failure(&err) {
                    log::warn!("Fetch failed: {}", failure);
                }
                Err(err)
            }
        }
    }
}

/// The pure planning step: descriptor + selector + ceiling → request.
///
/// Exposed separately from the handler so the whole negotiation (region
/// parsing, constraint resolution, dimension fitting, path assembly) can
/// be exercised without any I/O.
pub fn plan_request(
    base: &BaseUri,
    info: &ImageInfo,
    selector: Option<&str>,
    config: &HandlerConfig,
) -> Result<ImageRequest, AppError> {
    let generation = info.generation();
    let native = info.native_dimensions().ok_or_else(|| {
        AppError::MalformedDescriptor("descriptor is missing native width/height".to_string())
    })?;

    let selector = RegionSelector::parse(selector)?;
    let region_native = selector.pixel_extent(native);
    let limits = SizeLimits::resolve(info, region_native, generation, config);
    let target = fit_dimensions(region_native, &limits, generation);

    Ok(build_request(base, target, region_native, &selector, generation))
}
