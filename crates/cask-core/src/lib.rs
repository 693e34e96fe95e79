//! Core domain models for cask
//!
//! This crate contains:
//! - Catalog items and the exporter capability they write themselves into
//! - Query construction (params, deterministic wire form)
//! - Search form handling and sort keys

pub mod export;
pub mod filter;
pub mod item;
pub mod query;
pub mod sort;

pub use export::{CsvRowExporter, JsonExporter, TableRow, TableRowExporter};
pub use filter::FilterForm;
pub use item::{CURRENCY, CatalogItem, CatalogItemBuilder, Exporter, two_places};
pub use query::{Param, Query, new_query};
pub use sort::SortKey;
