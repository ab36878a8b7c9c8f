//! Client for the MDsrv data server.
//!
//! [`DataSourceClient`] turns file references into resource URLs under a
//! fixed base URL and fetches listings, frame counts, frames and atom path
//! traces through a [`Fetcher`]. URL building is literal concatenation: the
//! base URL is not validated and nothing is percent-encoded.

mod listing;

use std::fmt;
use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::FetchError;
use crate::fetch::{fetch_decoded, CurlFetcher, FetchOptions, FetchRequest, Fetcher, ResponseType};
use crate::file_info::{get_file_info, FileRef};
use crate::trajectory::{self, Frame, PathTrace};

pub use listing::{Listing, ListingEntry};

#[derive(Clone)]
pub struct DataSourceClient {
    base_url: String,
    fetcher: Arc<dyn Fetcher>,
}

impl fmt::Debug for DataSourceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSourceClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Default for DataSourceClient {
    fn default() -> Self {
        Self::new("")
    }
}

impl DataSourceClient {
    /// Client using libcurl with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_fetcher(base_url, Arc::new(CurlFetcher::default()))
    }

    pub fn with_fetcher(base_url: impl Into<String>, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            base_url: base_url.into(),
            fetcher,
        }
    }

    pub fn from_config(cfg: &ClientConfig) -> Self {
        Self::with_fetcher(cfg.base_url.clone(), Arc::new(CurlFetcher::from_config(cfg)))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the listing at `<base>dir/<path>`; pass `""` for the root.
    pub async fn get_listing(&self, path: &str) -> Result<Listing, FetchError> {
        let url = format!("{}dir/{}", self.base_url, path);
        let options = FetchOptions {
            response_type: ResponseType::Json,
            decode_in_worker: false,
        };
        let data = fetch_decoded(Arc::clone(&self.fetcher), FetchRequest::get(url), options)
            .await?
            .into_json()?;
        Ok(Listing {
            path: path.to_string(),
            data,
        })
    }

    /// `<base>file/<path>`
    pub fn get_url(&self, src: impl Into<FileRef>) -> String {
        let info = get_file_info(src);
        format!("{}file/{}", self.base_url, info.path)
    }

    /// `<base>traj/numframes/<path>`
    pub fn get_numframes_url(&self, src: impl Into<FileRef>) -> String {
        let info = get_file_info(src);
        format!("{}traj/numframes/{}", self.base_url, info.path)
    }

    /// `<base>traj/frame/<frame_index>/<path>`
    pub fn get_frame_url(&self, src: impl Into<FileRef>, frame_index: u64) -> String {
        let info = get_file_info(src);
        format!("{}traj/frame/{}/{}", self.base_url, frame_index, info.path)
    }

    /// Query/form fragment selecting atoms of a frame: `atomIndices=i1;i2;...`,
    /// in the given order.
    pub fn get_frame_params<I: fmt::Display>(
        &self,
        src: impl Into<FileRef>,
        atom_indices: &[I],
    ) -> String {
        let _ = get_file_info(src);
        let joined = atom_indices
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(";");
        format!("atomIndices={}", joined)
    }

    /// `<base>traj/path/<atom_index>/<path>`
    pub fn get_path_url(&self, src: impl Into<FileRef>, atom_index: u64) -> String {
        let info = get_file_info(src);
        format!("{}traj/path/{}/{}", self.base_url, atom_index, info.path)
    }

    /// Number of frames in the trajectory behind `src`.
    pub async fn get_numframes(&self, src: impl Into<FileRef>) -> Result<u64, FetchError> {
        let url = self.get_numframes_url(src);
        let text = fetch_decoded(
            Arc::clone(&self.fetcher),
            FetchRequest::get(url),
            FetchOptions::new(ResponseType::Text),
        )
        .await?
        .into_text()?;
        text.trim()
            .parse::<u64>()
            .map_err(|e| FetchError::payload(format!("frame count {:?}: {}", text.trim(), e)))
    }

    /// One frame of the trajectory behind `src`. An empty `atom_indices`
    /// requests all atoms.
    pub async fn get_frame(
        &self,
        src: impl Into<FileRef>,
        frame_index: u64,
        atom_indices: &[usize],
    ) -> Result<Frame, FetchError> {
        let src = src.into();
        let url = self.get_frame_url(&src, frame_index);
        let form = if atom_indices.is_empty() {
            None
        } else {
            Some(self.get_frame_params(&src, atom_indices))
        };
        let body = self.fetch_binary(FetchRequest::post(url, form)).await?;
        trajectory::decode_frame(&body)
    }

    /// Positions of `atom_index` over all frames of the trajectory behind `src`.
    pub async fn get_path(
        &self,
        src: impl Into<FileRef>,
        atom_index: u64,
    ) -> Result<PathTrace, FetchError> {
        let url = self.get_path_url(src, atom_index);
        let body = self.fetch_binary(FetchRequest::post(url, None)).await?;
        trajectory::decode_path(&body)
    }

    async fn fetch_binary(&self, request: FetchRequest) -> Result<Vec<u8>, FetchError> {
        fetch_decoded(
            Arc::clone(&self.fetcher),
            request,
            FetchOptions::new(ResponseType::Binary),
        )
        .await?
        .into_bytes()
    }
}
