//! Query construction
//!
//! A query is an ordered list of [`Param`]s. The order in which params are
//! added is the order they appear on the wire; a key/value view exists only
//! for lookups. Use [`new_query`] to get an instance.
//!
//! ```
//! use cask_core::{new_query, Param};
//!
//! let mut query = new_query();
//! query.add_param(Param::new("min_price", "100"));
//! assert_eq!(query.to_query_string(), "min_price=100");
//! ```

use std::collections::HashMap;
use std::fmt;

/// One key/value constraint
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Param {
    key: String,
    value: String,
}

impl Param {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Renders as `key=value`
impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Accumulated constraints for one fetch
pub trait Query: fmt::Debug {
    /// Append `param`. A repeated key adds another segment to the wire form
    /// and replaces the value returned by [`get`](Self::get).
    fn add_param(&mut self, param: Param);

    /// `key1=value1&key2=value2...` in insertion order, `""` when empty.
    /// Nothing is percent-encoded.
    fn to_query_string(&self) -> String;

    /// Last value added for `key`
    fn get(&self, key: &str) -> Option<&str>;

    /// Params in insertion order
    fn params(&self) -> &[Param];
}

/// Create an empty query
pub fn new_query() -> Box<dyn Query> {
    Box::new(RestQuery::new())
}

/// GET-style query: key/value pairs joined by `&`
#[derive(Debug, Default)]
struct RestQuery {
    params: Vec<Param>,
    key_to_value: HashMap<String, String>,
}

impl RestQuery {
    fn new() -> Self {
        Self::default()
    }
}

impl Query for RestQuery {
    fn add_param(&mut self, param: Param) {
        self.key_to_value
            .insert(param.key.clone(), param.value.clone());
        self.params.push(param);
    }

    fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(Param::to_string)
            .collect::<Vec<_>>()
            .join("&")
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.key_to_value.get(key).map(String::as_str)
    }

    fn params(&self) -> &[Param] {
        &self.params
    }
}
