//! Search command - fetch, sort and print catalog items

use anyhow::Result;
use cask_config::{Config, OutputFormat};
use cask_core::{FilterForm, SortKey};
use tracing::info;

use crate::output;

pub fn handle(
    form: FilterForm,
    sort: Option<SortKey>,
    format: Option<OutputFormat>,
    limit: Option<usize>,
    config: &Config,
) -> Result<()> {
    let format = format.unwrap_or(config.display.format);
    let sort = sort.unwrap_or(config.display.default_sort);

    let gateway = cask_gateway::from_config(&config.gateway)?;

    let query = form.to_query();
    info!("fetching with query '{}'", query.to_query_string());
    let mut items = gateway.fetch(query.as_ref())?;
    info!("{} items returned by {} gateway", items.len(), gateway.name());

    sort.sort(&mut items);
    if let Some(limit) = limit {
        items.truncate(limit);
    }

    println!("{}", output::render(&items, format)?);

    Ok(())
}
