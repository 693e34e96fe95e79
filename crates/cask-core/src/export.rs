//! Ready-made [`Exporter`] implementations
//!
//! Each exporter is filled by [`CatalogItem::export`](crate::CatalogItem::export)
//! and then drained through its own accessor (`finish`, `into_row`, ...).

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::item::Exporter;

/// Cells of one row in a search result table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRow {
    pub name: String,
    pub alcohol: Decimal,
    pub price: Decimal,
    pub volume_ml: u32,
    /// Centiliters of pure alcohol per currency unit; `None` for free items
    /// or when the value does not fit in a decimal
    pub alcohol_cl_per_unit: Option<Decimal>,
}

/// Collects the cells shown in the result table
#[derive(Debug, Default)]
pub struct TableRowExporter {
    row: TableRow,
}

impl TableRowExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the exporter and compute the derived column
    pub fn into_row(mut self) -> TableRow {
        self.row.alcohol_cl_per_unit = alcohol_cl_per_unit(
            self.row.alcohol,
            self.row.volume_ml,
            self.row.price,
        );
        self.row
    }
}

impl Exporter for TableRowExporter {
    fn add_name(&mut self, name: &str) {
        self.row.name = name.to_string();
    }

    fn add_price(&mut self, price: Decimal) {
        self.row.price = price;
    }

    fn add_alcohol(&mut self, alcohol: Decimal) {
        self.row.alcohol = alcohol;
    }

    fn add_volume(&mut self, volume_ml: u32) {
        self.row.volume_ml = volume_ml;
    }

    fn add_catalog_number(&mut self, _catalog_number: u64) {}

    fn add_product_group(&mut self, _product_group: &str) {}

    fn add_item_type(&mut self, _item_type: &str) {}
}

/// `alcohol / 100 * volume / 10 / price`, i.e. cl of pure alcohol per unit of money
fn alcohol_cl_per_unit(alcohol: Decimal, volume_ml: u32, price: Decimal) -> Option<Decimal> {
    alcohol
        .checked_div(Decimal::ONE_HUNDRED)?
        .checked_mul(Decimal::from(volume_ml))?
        .checked_div(Decimal::TEN)?
        .checked_div(price)
}

/// Writes one CSV line, fields in export order
#[derive(Debug, Default)]
pub struct CsvRowExporter {
    fields: Vec<String>,
}

impl CsvRowExporter {
    pub const HEADER: &'static str = "name,price,alcohol,catalog_number,volume_ml,product_group,type";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.fields.join(",")
    }

    fn push(&mut self, field: &str) {
        if field.contains([',', '"', '\n', '\r']) {
            self.fields.push(format!("\"{}\"", field.replace('"', "\"\"")));
        } else {
            self.fields.push(field.to_string());
        }
    }
}

impl Exporter for CsvRowExporter {
    fn add_name(&mut self, name: &str) {
        self.push(name);
    }

    fn add_price(&mut self, price: Decimal) {
        self.push(&price.to_string());
    }

    fn add_alcohol(&mut self, alcohol: Decimal) {
        self.push(&alcohol.to_string());
    }

    fn add_volume(&mut self, volume_ml: u32) {
        self.push(&volume_ml.to_string());
    }

    fn add_catalog_number(&mut self, catalog_number: u64) {
        self.push(&catalog_number.to_string());
    }

    fn add_product_group(&mut self, product_group: &str) {
        self.push(product_group);
    }

    fn add_item_type(&mut self, item_type: &str) {
        self.push(item_type);
    }
}

/// Builds a JSON object keyed by attribute name
#[derive(Debug, Default)]
pub struct JsonExporter {
    object: Map<String, Value>,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> Value {
        Value::Object(self.object)
    }

    fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.object.insert(key.to_string(), value.into());
    }
}

impl Exporter for JsonExporter {
    fn add_name(&mut self, name: &str) {
        self.insert("name", name);
    }

    // Decimals go out as strings so no precision is lost
    fn add_price(&mut self, price: Decimal) {
        self.insert("price", price.to_string());
    }

    fn add_alcohol(&mut self, alcohol: Decimal) {
        self.insert("alcohol", alcohol.to_string());
    }

    fn add_volume(&mut self, volume_ml: u32) {
        self.insert("volume_ml", volume_ml);
    }

    fn add_catalog_number(&mut self, catalog_number: u64) {
        self.insert("catalog_number", catalog_number);
    }

    fn add_product_group(&mut self, product_group: &str) {
        self.insert("product_group", product_group);
    }

    fn add_item_type(&mut self, item_type: &str) {
        self.insert("type", item_type);
    }
}
