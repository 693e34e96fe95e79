//! In-memory gateway backed by a catalog file
//!
//! The file is a JSON array of records using the field names of the
//! product-line export:
//!
//! ```json
//! [{ "nr": 152115, "Namn": "Williams Caesar Augustus", "Prisinklmoms": "16.90",
//!    "Volymiml": "330.00", "Alkoholhalt": "4.00%", "Varugrupp": "Öl", "Typ": "Ljus lager" }]
//! ```

use std::path::Path;
use std::str::FromStr;

use cask_core::filter::{MAX_ALCOHOL, MAX_PRICE, MIN_ALCOHOL, MIN_PRICE};
use cask_core::{CatalogItem, Query};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use tracing::{debug, info};

use crate::{CatalogGateway, GatewayError, Result};

const KNOWN_PARAMS: [&str; 4] = [MIN_ALCOHOL, MAX_ALCOHOL, MIN_PRICE, MAX_PRICE];

/// One entry of the catalog file
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    pub nr: u64,

    #[serde(rename = "Namn")]
    pub name: String,

    #[serde(rename = "Prisinklmoms")]
    pub price: String,

    #[serde(rename = "Volymiml")]
    pub volume: String,

    /// e.g. `"4.00%"`
    #[serde(rename = "Alkoholhalt")]
    pub alcohol: String,

    #[serde(rename = "Varugrupp", default)]
    pub product_group: Option<String>,

    #[serde(rename = "Typ", default)]
    pub item_type: Option<String>,
}

impl CatalogRecord {
    pub fn into_item(self) -> Result<CatalogItem> {
        let nr = self.nr;
        let invalid = |reason: String| GatewayError::InvalidRecord { nr, reason };

        let price = parse_decimal(&self.price)
            .ok_or_else(|| invalid(format!("price '{}'", self.price)))?;
        let alcohol = parse_decimal(self.alcohol.trim().trim_end_matches('%'))
            .ok_or_else(|| invalid(format!("alcohol '{}'", self.alcohol)))?;
        let volume_ml = parse_decimal(&self.volume)
            .and_then(|v| v.trunc().to_u32())
            .ok_or_else(|| invalid(format!("volume '{}'", self.volume)))?;

        let mut builder = CatalogItem::builder();
        builder
            .name(self.name)
            .price(price)
            .alcohol(alcohol)
            .volume_ml(volume_ml)
            .catalog_number(nr);
        if let Some(group) = self.product_group {
            builder.product_group(group);
        }
        if let Some(item_type) = self.item_type {
            builder.item_type(item_type);
        }
        Ok(builder.build())
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s.trim()).ok()
}

/// Inclusive bounds taken from a query
#[derive(Debug, Default, PartialEq)]
struct Bounds {
    min_alcohol: Option<Decimal>,
    max_alcohol: Option<Decimal>,
    min_price: Option<Decimal>,
    max_price: Option<Decimal>,
}

impl Bounds {
    fn from_query(query: &dyn Query) -> Result<Self> {
        for param in query.params() {
            if !KNOWN_PARAMS.contains(&param.key()) {
                debug!("ignoring unknown param '{}'", param);
            }
        }

        Ok(Self {
            min_alcohol: bound(query, MIN_ALCOHOL)?,
            max_alcohol: bound(query, MAX_ALCOHOL)?,
            min_price: bound(query, MIN_PRICE)?,
            max_price: bound(query, MAX_PRICE)?,
        })
    }

    fn matches(&self, item: &CatalogItem) -> bool {
        within(item.alcohol(), self.min_alcohol, self.max_alcohol)
            && within(item.price(), self.min_price, self.max_price)
    }
}

fn bound(query: &dyn Query, key: &str) -> Result<Option<Decimal>> {
    query
        .get(key)
        .map(|value| {
            parse_decimal(value).ok_or_else(|| GatewayError::InvalidParam {
                key: key.to_string(),
                value: value.to_string(),
            })
        })
        .transpose()
}

fn within(value: Decimal, min: Option<Decimal>, max: Option<Decimal>) -> bool {
    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
}

/// Serves queries from a catalog held in memory
#[derive(Debug, Clone, Default)]
pub struct FixtureGateway {
    items: Vec<CatalogItem>,
}

impl FixtureGateway {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// Read a catalog file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let gateway = Self::from_json(&content)?;
        info!(
            "loaded {} catalog items from {}",
            gateway.items.len(),
            path.display()
        );
        Ok(gateway)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<CatalogRecord> = serde_json::from_str(json)?;
        let items = records
            .into_iter()
            .map(CatalogRecord::into_item)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(items))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CatalogGateway for FixtureGateway {
    fn fetch(&self, query: &dyn Query) -> Result<Vec<CatalogItem>> {
        let bounds = Bounds::from_query(query)?;
        let matched: Vec<_> = self
            .items
            .iter()
            .filter(|item| bounds.matches(item))
            .cloned()
            .collect();
        debug!(
            "fixture gateway matched {} of {} items for '{}'",
            matched.len(),
            self.items.len(),
            query.to_query_string()
        );
        Ok(matched)
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}
