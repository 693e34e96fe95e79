use cask_core::{CatalogItem, Query};
use tracing::debug;

use crate::{CatalogGateway, Result};

/// Stand-in for a remote catalog: matches nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct StubGateway;

impl CatalogGateway for StubGateway {
    fn fetch(&self, query: &dyn Query) -> Result<Vec<CatalogItem>> {
        debug!("stub gateway received query '{}'", query.to_query_string());
        Ok(Vec::new())
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}
