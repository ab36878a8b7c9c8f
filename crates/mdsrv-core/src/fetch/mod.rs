//! Network/asset loading facility.
//!
//! The client depends only on the [`Fetcher`] trait: a blocking "fetch the
//! resource at this URL" primitive. [`fetch_decoded`] runs it on the tokio
//! blocking pool and decodes the body as the caller asked.

mod decode;
mod http;

use std::fmt;
use std::sync::Arc;

use crate::error::FetchError;

pub use decode::decode;
pub use http::CurlFetcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// One request against the data server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    pub method: Method,
    /// `application/x-www-form-urlencoded` body for POST requests.
    pub form: Option<String>,
}

impl FetchRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::Get,
            form: None,
        }
    }

    pub fn post(url: impl Into<String>, form: Option<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::Post,
            form,
        }
    }
}

/// How the response body should be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseType {
    Json,
    Text,
    Binary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub response_type: ResponseType,
    /// Decode on the blocking pool next to the transfer instead of on the
    /// calling task.
    pub decode_in_worker: bool,
}

impl FetchOptions {
    pub fn new(response_type: ResponseType) -> Self {
        Self {
            response_type,
            decode_in_worker: false,
        }
    }
}

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Json(serde_json::Value),
    Text(String),
    Binary(Vec<u8>),
}

impl Decoded {
    pub fn into_json(self) -> Result<serde_json::Value, FetchError> {
        match self {
            Decoded::Json(v) => Ok(v),
            other => Err(FetchError::payload(format!("expected JSON, got {}", other.kind()))),
        }
    }

    pub fn into_text(self) -> Result<String, FetchError> {
        match self {
            Decoded::Text(s) => Ok(s),
            other => Err(FetchError::payload(format!("expected text, got {}", other.kind()))),
        }
    }

    pub fn into_bytes(self) -> Result<Vec<u8>, FetchError> {
        match self {
            Decoded::Binary(b) => Ok(b),
            other => Err(FetchError::payload(format!("expected binary, got {}", other.kind()))),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Decoded::Json(_) => "JSON",
            Decoded::Text(_) => "text",
            Decoded::Binary(_) => "binary",
        }
    }
}

/// Blocking transport used by the client. Implementations return the raw
/// body of a 2xx response and an error for everything else.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, request: &FetchRequest) -> Result<Vec<u8>, FetchError>;
}

/// Runs `request` on the blocking pool and decodes the body per `options`.
///
/// Each call is independent; dropping the future does not abort a transfer
/// that already started, its result is discarded.
pub async fn fetch_decoded(
    fetcher: Arc<dyn Fetcher>,
    request: FetchRequest,
    options: FetchOptions,
) -> Result<Decoded, FetchError> {
    tracing::debug!("{} {} ({:?})", request.method, request.url, options.response_type);
    let response_type = options.response_type;

    if options.decode_in_worker {
        tokio::task::spawn_blocking(move || {
            let body = fetcher.fetch(&request)?;
            decode(&body, response_type)
        })
        .await?
    } else {
        let body = tokio::task::spawn_blocking(move || fetcher.fetch(&request)).await??;
        decode(&body, response_type)
    }
}
