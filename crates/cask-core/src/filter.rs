//! Search form input turned into query params

use crate::query::{Param, Query, new_query};

pub const MIN_ALCOHOL: &str = "min_alcohol";
pub const MAX_ALCOHOL: &str = "max_alcohol";
pub const MIN_PRICE: &str = "min_price";
pub const MAX_PRICE: &str = "max_price";

/// The four filter fields of the search form, as typed by the user.
///
/// A field that is `None` or empty contributes no param.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterForm {
    pub min_alcohol: Option<String>,
    pub max_alcohol: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

impl FilterForm {
    /// Params for the populated fields, always in the order
    /// min_alcohol, max_alcohol, min_price, max_price
    pub fn params(&self) -> Vec<Param> {
        [
            (MIN_ALCOHOL, &self.min_alcohol),
            (MAX_ALCOHOL, &self.max_alcohol),
            (MIN_PRICE, &self.min_price),
            (MAX_PRICE, &self.max_price),
        ]
        .into_iter()
        .filter_map(|(key, value)| match value.as_deref() {
            Some(value) if !value.is_empty() => Some(Param::new(key, value)),
            _ => None,
        })
        .collect()
    }

    /// Fresh query holding [`params`](Self::params)
    pub fn to_query(&self) -> Box<dyn Query> {
        let mut query = new_query();
        for param in self.params() {
            query.add_param(param);
        }
        query
    }

    pub fn is_empty(&self) -> bool {
        self.params().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form() {
        let form = FilterForm::default();
        assert!(form.is_empty());
        assert_eq!(form.to_query().to_query_string(), "");
    }

    #[test]
    fn test_fixed_field_order() {
        let form = FilterForm {
            max_price: Some("200".to_string()),
            min_alcohol: Some("4.0".to_string()),
            ..Default::default()
        };

        let query = form.to_query();
        assert_eq!(query.to_query_string(), "min_alcohol=4.0&max_price=200");
        assert_eq!(query.get(MIN_ALCOHOL), Some("4.0"));
    }

    #[test]
    fn test_empty_string_is_skipped() {
        let form = FilterForm {
            min_alcohol: Some(String::new()),
            max_alcohol: Some("12".to_string()),
            min_price: Some(String::new()),
            max_price: None,
        };

        assert_eq!(form.params(), vec![Param::new(MAX_ALCOHOL, "12")]);
    }

    #[test]
    fn test_all_fields() {
        let form = FilterForm {
            min_alcohol: Some("1".to_string()),
            max_alcohol: Some("2".to_string()),
            min_price: Some("3".to_string()),
            max_price: Some("4".to_string()),
        };

        assert_eq!(
            form.to_query().to_query_string(),
            "min_alcohol=1&max_alcohol=2&min_price=3&max_price=4"
        );
    }
}
