// src/lib.rs
//! iiif2agent library — resolves IIIF image references into constrained
//! Image API requests and fetches the results.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `ToolError`, `ValidationError`
//! - **Configuration** — `HandlerConfig`, `RunConfig`
//! - **Domain model** — `RegionSelector`, `ImageInfo`, `SizeLimits`,
//!   `Dimensions`, `ImageRequest`
//! - **Domain types** — `BaseUri`, `ValidatedUrl`, `ImagePayload`,
//!   `ManifestDocument`
//! - **API client** — `IiifHttpClient`, `IiifRepository`, parsers
//! - **Tool surface** — `ImageRequestHandler`, `ToolPayload`, `plan_request`

// Internal modules — must match what's in main.rs
mod api;
mod config;
mod constants;
mod descriptor;
mod error;
mod fit;
mod handler;
mod limits;
mod region;
mod request;
mod types;

// --- Error Handling ---
pub use crate::error::{classify_fetch_failure, AppError, FetchFailure};
pub use crate::handler::ToolError;
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, HandlerConfig, Operation, RunConfig};

// --- Domain Model ---
pub use crate::descriptor::{ApiGeneration, ImageInfo};
pub use crate::fit::fit_dimensions;
pub use crate::limits::SizeLimits;
pub use crate::region::{PercentRegion, RegionSelector};
pub use crate::request::{build_request, ImageRequest};

// --- Domain Types ---
pub use crate::types::{BaseUri, Dimensions, ImagePayload, ManifestDocument, ValidatedUrl};

// --- API Client ---
pub use crate::api::{
    client::ApiResponse,
    parser::{parse_image_response, parse_info_response, parse_manifest_response},
    IiifHttpClient, IiifRepository,
};

// --- Tool Surface ---
pub use crate::handler::{plan_request, ImageRequestHandler, Tool, ToolPayload};
