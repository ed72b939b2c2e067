// src/api/client.rs
//! Pure HTTP client wrapper for IIIF servers.
//!
//! This module provides a thin wrapper around reqwest for the two kinds of
//! GET this system performs: capability descriptors (JSON documents) and
//! image bytes. It handles request dispatch and response extraction without
//! parsing or negotiation logic.

use crate::error::AppError;
use reqwest::{header, Client, Response};

/// A thin wrapper around reqwest Client for IIIF requests.
#[derive(Clone)]
pub struct IiifHttpClient {
    client: Client,
}

impl IiifHttpClient {
    /// Creates a new HTTP client. IIIF image servers are public by
    /// convention, so no authentication headers are attached.
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers())
            .build()?;
        Ok(Self { client })
    }

    /// Creates the default headers for IIIF requests.
    fn create_headers() -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json, image/*;q=0.9, */*;q=0.8"),
        );
        headers
    }

    /// Makes a GET request to the given URL.
    ///
    /// One attempt, no retries: the first failure surfaces immediately.
    pub async fn get(&self, url: &str) -> Result<Response, AppError> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        log::debug!("GET {} -> {}", url, response.status());
        Ok(response)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
    pub content_type: Option<String>,
}

fn content_type_of(response: &Response) -> Option<String> {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let content_type = content_type_of(&response);
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
        content_type,
    })
}

/// Extracts the response body as raw bytes with metadata.
pub async fn extract_response_bytes(response: Response) -> Result<ApiResponse<Vec<u8>>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let content_type = content_type_of(&response);
    let bytes = response.bytes().await?;

    Ok(ApiResponse {
        data: bytes.to_vec(),
        status,
        url,
        content_type,
    })
}
