//! Orderings over catalog items

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CatalogItem;

/// Attribute to order items by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Name, case-sensitive
    #[default]
    Name,
    /// Name, ignoring case
    NameCi,
    Price,
    Alcohol,
    Volume,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Name,
        SortKey::NameCi,
        SortKey::Price,
        SortKey::Alcohol,
        SortKey::Volume,
    ];

    pub fn compare(self, a: &CatalogItem, b: &CatalogItem) -> Ordering {
        match self {
            SortKey::Name => a.name().cmp(b.name()),
            SortKey::NameCi => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
            SortKey::Price => a.price().cmp(&b.price()),
            SortKey::Alcohol => a.alcohol().cmp(&b.alcohol()),
            SortKey::Volume => a.volume_ml().cmp(&b.volume_ml()),
        }
    }

    /// Stable sort, ascending
    pub fn sort(self, items: &mut [CatalogItem]) {
        items.sort_by(|a, b| self.compare(a, b));
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::NameCi => "name-ci",
            SortKey::Price => "price",
            SortKey::Alcohol => "alcohol",
            SortKey::Volume => "volume",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<_> = SortKey::ALL.iter().map(|k| k.as_str()).collect();
                format!("unknown sort key '{}', expected one of: {}", s, known.join(", "))
            })
    }
}
