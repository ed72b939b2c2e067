// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the system.
//! Each error variant tells the story of what went wrong and where:
//! bad caller input (missing parameters, malformed region selectors),
//! transport failures at either network boundary, or descriptor documents
//! the server published in a shape this client cannot use.

use std::fmt;
use thiserror::Error;

/// Why an image-server request failed, as a typed vocabulary.
///
/// IIIF servers speak plain HTTP, so there is no coded error body to parse;
/// the status line is the whole story. Encoding the common statuses as
/// variants enables pattern-based handling without matching magic numbers
/// at every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailure {
    /// The resource does not exist on the server.
    NotFound,
    /// The server refused access (401/403).
    AccessDenied(u16),
    /// The server itself failed (5xx).
    ServerFault(u16),
    /// Any other non-success status.
    HttpStatus(u16),
}

impl FetchFailure {
    /// Classify an HTTP status code into the failure vocabulary.
    pub fn from_status(status: u16) -> Self {
        match status {
            404 | 410 => Self::NotFound,
            401 | 403 => Self::AccessDenied(status),
            500..=599 => Self::ServerFault(status),
            other => Self::HttpStatus(other),
        }
    }

    /// Whether this failure means the resource simply doesn't exist.
    #[allow(dead_code)]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "resource not found"),
            Self::AccessDenied(status) => write!(f, "access denied (HTTP {})", status),
            Self::ServerFault(status) => write!(f, "server fault (HTTP {})", status),
            Self::HttpStatus(status) => write!(f, "http_{}", status),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid region syntax: {0}")]
    InvalidRegionSyntax(String),

    #[error("Invalid region bounds: {0}")]
    InvalidRegionBounds(String),

    #[error("Image server returned HTTP {status} for {url}")]
    TransportError { status: u16, url: String },

    #[error("Malformed descriptor: {0}")]
    MalformedDescriptor(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    ValidationError(#[from] crate::types::ValidationError),
}

impl AppError {
    /// HTTP status carried by this error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::TransportError { status, .. } => Some(*status),
            Self::NetworkFailure(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Classifies a fetch error into a domain-specific failure reason.
///
/// This is a pure function over the error structure, used for operator-facing
/// log lines (a clear "resource not found" beats a bare status code). Errors
/// that never touched the network classify as `None`.
pub fn classify_fetch_failure(error: &AppError) -> Option<FetchFailure> {
    error.status().map(FetchFailure::from_status)
}

/// Result type alias for convenience
#[allow(dead_code)]
pub type Result<T, E = AppError> = std::result::Result<T, E>;
