//! Directory listings served by the `dir/` route.

use serde::Deserialize;

/// Result of [`super::DataSourceClient::get_listing`]: the requested path and
/// the decoded JSON payload as served.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub path: String,
    pub data: serde_json::Value,
}

/// One row of a listing. Roots carry `restricted`, files carry `size`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingEntry {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub dir: bool,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub restricted: Option<bool>,
}

impl ListingEntry {
    /// The `..` row the server puts first in every non-root listing.
    pub fn is_parent(&self) -> bool {
        self.dir && self.name == ".."
    }
}

impl Listing {
    /// Typed view of `data`.
    pub fn entries(&self) -> Result<Vec<ListingEntry>, serde_json::Error> {
        Vec::<ListingEntry>::deserialize(&self.data)
    }
}
