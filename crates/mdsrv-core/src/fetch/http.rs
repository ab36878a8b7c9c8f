//! libcurl-backed [`Fetcher`].

use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::FetchError;

use super::{FetchRequest, Fetcher, Method};

/// Performs each request on a fresh curl easy handle in the calling thread.
#[derive(Debug, Clone, Copy)]
pub struct CurlFetcher {
    connect_timeout: Duration,
    timeout: Duration,
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(300),
        }
    }
}

impl CurlFetcher {
    pub fn new(connect_timeout: Duration, timeout: Duration) -> Self {
        Self {
            connect_timeout,
            timeout,
        }
    }

    pub fn from_config(cfg: &ClientConfig) -> Self {
        Self::new(
            Duration::from_secs(cfg.connect_timeout_secs),
            Duration::from_secs(cfg.timeout_secs),
        )
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, request: &FetchRequest) -> Result<Vec<u8>, FetchError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(&request.url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        if request.method == Method::Post {
            // Form-encoded body, which is what the trajectory routes read.
            easy.post(true)?;
            easy.post_fields_copy(request.form.as_deref().unwrap_or("").as_bytes())?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            tracing::debug!("{} {} returned HTTP {}", request.method, request.url, code);
            return Err(FetchError::Http {
                url: request.url.clone(),
                status: code,
            });
        }

        tracing::trace!("{} {} -> {} bytes", request.method, request.url, body.len());
        Ok(body)
    }
}
