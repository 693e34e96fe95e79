//! Catalog gateway trait

use cask_core::{CatalogItem, Query};

use crate::Result;

/// Maps a query to the catalog items that match it
///
/// Implementations only read the query and must not keep it past the call.
/// Every call is independent; there is no session or cache.
pub trait CatalogGateway: Send + Sync {
    /// Fetch the items matching `query`. No match is an empty list, not an error.
    fn fetch(&self, query: &dyn Query) -> Result<Vec<CatalogItem>>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}
