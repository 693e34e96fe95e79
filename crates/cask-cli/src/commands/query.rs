//! Query command - show the wire form of a set of filters

use anyhow::Result;
use cask_core::FilterForm;

pub fn handle(form: FilterForm) -> Result<()> {
    println!("{}", form.to_query().to_query_string());
    Ok(())
}
