//! Catalog item domain model
//!
//! A [`CatalogItem`] is an immutable snapshot of one catalog entry. It is only
//! created through [`CatalogItemBuilder`] and only hands its state to
//! formatting code through [`CatalogItem::export`].

use std::fmt;
use std::hash::{Hash, Hasher};

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency every catalog price is quoted in
pub const CURRENCY: &str = "SEK";

/// Receives the state of a [`CatalogItem`], one call per attribute.
///
/// Implementations decide what to do with each value (fill a table row,
/// write a CSV line, build a JSON object) and expose their own way of
/// retrieving the result. Absent optional attributes arrive as `""`.
pub trait Exporter {
    fn add_name(&mut self, name: &str);
    fn add_price(&mut self, price: Decimal);
    fn add_alcohol(&mut self, alcohol: Decimal);
    fn add_volume(&mut self, volume_ml: u32);
    fn add_catalog_number(&mut self, catalog_number: u64);
    fn add_product_group(&mut self, product_group: &str);
    fn add_item_type(&mut self, item_type: &str);
}

/// One entry in the catalog
#[derive(Debug, Clone)]
pub struct CatalogItem {
    name: String,
    price: Decimal,
    alcohol: Decimal,
    volume_ml: u32,
    catalog_number: u64,
    product_group: Option<String>,
    item_type: Option<String>,
}

impl CatalogItem {
    pub fn builder() -> CatalogItemBuilder {
        CatalogItemBuilder::default()
    }

    /// Push every attribute into `exporter`.
    ///
    /// The call order is fixed: name, price, alcohol, catalog number, volume,
    /// product group, type.
    pub fn export<E: Exporter + ?Sized>(&self, exporter: &mut E) {
        exporter.add_name(&self.name);
        exporter.add_price(self.price);
        exporter.add_alcohol(self.alcohol);
        exporter.add_catalog_number(self.catalog_number);
        exporter.add_volume(self.volume_ml);
        exporter.add_product_group(self.product_group.as_deref().unwrap_or_default());
        exporter.add_item_type(self.item_type.as_deref().unwrap_or_default());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price in [`CURRENCY`]
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Alcohol by volume, in percent
    pub fn alcohol(&self) -> Decimal {
        self.alcohol
    }

    pub fn volume_ml(&self) -> u32 {
        self.volume_ml
    }

    /// Identity of the entry in the source data
    pub fn catalog_number(&self) -> u64 {
        self.catalog_number
    }

    pub fn product_group(&self) -> Option<&str> {
        self.product_group.as_deref()
    }

    pub fn item_type(&self) -> Option<&str> {
        self.item_type.as_deref()
    }
}

// Product group and type are descriptive, so they stay out of identity.
impl PartialEq for CatalogItem {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.alcohol == other.alcohol
            && self.volume_ml == other.volume_ml
            && self.price == other.price
            && self.catalog_number == other.catalog_number
    }
}

impl Eq for CatalogItem {}

impl Hash for CatalogItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.alcohol.hash(state);
        self.volume_ml.hash(state);
        self.price.hash(state);
        self.catalog_number.hash(state);
    }
}

impl fmt::Display for CatalogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {:.2}%, {} ml, {:.2} {} {}",
            self.name,
            two_places(self.alcohol),
            self.volume_ml,
            two_places(self.price),
            CURRENCY,
            self.product_group.as_deref().unwrap_or_default(),
        )?;
        if let Some(item_type) = &self.item_type {
            write!(f, " ({})", item_type)?;
        }
        write!(f, ", catalog number: {}", self.catalog_number)
    }
}

/// Round to two decimals, midpoints away from zero (`0.125` -> `0.13`)
pub fn two_places(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Mutable staging area for a [`CatalogItem`].
///
/// Setters accept any value without validation. [`build`](Self::build) does
/// not consume the builder, so one builder can stamp out several items.
#[derive(Debug, Clone, Default)]
pub struct CatalogItemBuilder {
    name: String,
    price: Decimal,
    alcohol: Decimal,
    volume_ml: u32,
    catalog_number: u64,
    product_group: Option<String>,
    item_type: Option<String>,
}

impl CatalogItemBuilder {
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn price(&mut self, price: Decimal) -> &mut Self {
        self.price = price;
        self
    }

    pub fn alcohol(&mut self, alcohol: Decimal) -> &mut Self {
        self.alcohol = alcohol;
        self
    }

    pub fn volume_ml(&mut self, volume_ml: u32) -> &mut Self {
        self.volume_ml = volume_ml;
        self
    }

    pub fn catalog_number(&mut self, catalog_number: u64) -> &mut Self {
        self.catalog_number = catalog_number;
        self
    }

    pub fn product_group(&mut self, product_group: impl Into<String>) -> &mut Self {
        self.product_group = Some(product_group.into());
        self
    }

    pub fn item_type(&mut self, item_type: impl Into<String>) -> &mut Self {
        self.item_type = Some(item_type.into());
        self
    }

    pub fn build(&self) -> CatalogItem {
        CatalogItem {
            name: self.name.clone(),
            price: self.price,
            alcohol: self.alcohol,
            volume_ml: self.volume_ml,
            catalog_number: self.catalog_number,
            product_group: self.product_group.clone(),
            item_type: self.item_type.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn caesar() -> CatalogItemBuilder {
        let mut builder = CatalogItem::builder();
        builder
            .name("Williams Caesar Augustus")
            .price(dec("16.90"))
            .alcohol(dec("4.00"))
            .volume_ml(330)
            .catalog_number(152115)
            .product_group("Öl")
            .item_type("Ljus lager");
        builder
    }

    /// Records every exporter call so order and arguments can be checked.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Exporter for Recorder {
        fn add_name(&mut self, name: &str) {
            self.calls.push(format!("name:{}", name));
        }
        fn add_price(&mut self, price: Decimal) {
            self.calls.push(format!("price:{}", price));
        }
        fn add_alcohol(&mut self, alcohol: Decimal) {
            self.calls.push(format!("alcohol:{}", alcohol));
        }
        fn add_volume(&mut self, volume_ml: u32) {
            self.calls.push(format!("volume:{}", volume_ml));
        }
        fn add_catalog_number(&mut self, catalog_number: u64) {
            self.calls.push(format!("nr:{}", catalog_number));
        }
        fn add_product_group(&mut self, product_group: &str) {
            self.calls.push(format!("group:{}", product_group));
        }
        fn add_item_type(&mut self, item_type: &str) {
            self.calls.push(format!("type:{}", item_type));
        }
    }

    #[test]
    fn test_builder_round_trip() {
        let item = caesar().build();

        assert_eq!(item.name(), "Williams Caesar Augustus");
        assert_eq!(item.price(), dec("16.90"));
        assert_eq!(item.alcohol(), dec("4.00"));
        assert_eq!(item.volume_ml(), 330);
        assert_eq!(item.catalog_number(), 152115);
        assert_eq!(item.product_group(), Some("Öl"));
        assert_eq!(item.item_type(), Some("Ljus lager"));
    }

    #[test]
    fn test_builder_defaults() {
        let item = CatalogItem::builder().build();

        assert_eq!(item.name(), "");
        assert_eq!(item.price(), Decimal::ZERO);
        assert_eq!(item.alcohol(), Decimal::ZERO);
        assert_eq!(item.volume_ml(), 0);
        assert_eq!(item.catalog_number(), 0);
        assert_eq!(item.product_group(), None);
        assert_eq!(item.item_type(), None);
    }

    #[test]
    fn test_build_does_not_consume_builder() {
        let mut builder = caesar();
        let first = builder.build();
        builder.price(dec("19.90"));
        let second = builder.build();

        assert_eq!(first.price(), dec("16.90"));
        assert_eq!(second.price(), dec("19.90"));
        assert_eq!(builder.build(), second);
    }

    #[test]
    fn test_export_calls_each_method_once_in_order() {
        let mut recorder = Recorder::default();
        caesar().build().export(&mut recorder);

        assert_eq!(
            recorder.calls,
            vec![
                "name:Williams Caesar Augustus",
                "price:16.90",
                "alcohol:4.00",
                "nr:152115",
                "volume:330",
                "group:Öl",
                "type:Ljus lager",
            ]
        );
    }

    #[test]
    fn test_export_absent_optionals_as_empty() {
        let mut recorder = Recorder::default();
        CatalogItem::builder().name("Renat").build().export(&mut recorder);

        assert_eq!(recorder.calls[5], "group:");
        assert_eq!(recorder.calls[6], "type:");
    }

    #[test]
    fn test_equality_ignores_descriptive_fields() {
        let a = caesar().build();
        let b = caesar().product_group("Cider").item_type("Torr").build();

        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_equality_uses_identifying_fields() {
        let base = caesar().build();

        assert_ne!(base, caesar().name("Other").build());
        assert_ne!(base, caesar().price(dec("17.00")).build());
        assert_ne!(base, caesar().alcohol(dec("4.5")).build());
        assert_ne!(base, caesar().volume_ml(500).build());
        assert_ne!(base, caesar().catalog_number(1).build());
    }

    #[test]
    fn test_equal_decimals_with_different_scale() {
        let a = caesar().price(dec("16.9")).build();
        let b = caesar().price(dec("16.90")).build();

        assert_eq!(a, b);
        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_display_with_type() {
        assert_eq!(
            caesar().build().to_string(),
            "Williams Caesar Augustus, 4.00%, 330 ml, 16.90 SEK Öl (Ljus lager), catalog number: 152115"
        );
    }

    #[test]
    fn test_display_without_type() {
        let item = CatalogItem::builder()
            .name("Renat")
            .alcohol(dec("37.5"))
            .volume_ml(700)
            .price(dec("209"))
            .product_group("Okryddad sprit")
            .catalog_number(1)
            .build();

        assert_eq!(
            item.to_string(),
            "Renat, 37.50%, 700 ml, 209.00 SEK Okryddad sprit, catalog number: 1"
        );
    }

    #[test]
    fn test_two_places_rounds_midpoint_up() {
        assert_eq!(two_places(dec("0.125")), dec("0.13"));
        assert_eq!(two_places(dec("0.135")), dec("0.14"));
        assert_eq!(two_places(dec("-0.125")), dec("-0.13"));

        let item = CatalogItem::builder().alcohol(dec("0.125")).build();
        assert!(item.to_string().starts_with(", 0.13%"));
    }
}
