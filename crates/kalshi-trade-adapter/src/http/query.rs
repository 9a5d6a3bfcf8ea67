/*
[INPUT]:  Optional endpoint arguments (serializable parameter structs)
[OUTPUT]: Ordered query key/value pairs with unset entries omitted
[POS]:    HTTP layer - query string marshaling
[UPDATE]: When parameter value shapes change
*/

use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use crate::http::{KalshiError, Result};

/// Query string parameters; list values expand to repeated keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Display) {
        self.0.push((key.into(), value.to_string()));
    }

    /// Push only when the value is set
    pub fn push_opt<T: Display>(&mut self, key: impl Into<String>, value: Option<T>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Flatten a serializable struct of scalars, options and lists
    ///
    /// `null` fields are skipped entirely; nested objects are rejected.
    pub fn from_serialize<T: Serialize>(params: &T) -> Result<Self> {
        let Value::Object(map) = serde_json::to_value(params)? else {
            return Err(KalshiError::InvalidArgument(
                "query parameters must serialize to an object".to_string(),
            ));
        };

        let mut query = Self::new();
        for (key, value) in map {
            match value {
                Value::Array(items) => {
                    for item in items {
                        query.push_value(&key, item)?;
                    }
                }
                other => query.push_value(&key, other)?,
            }
        }
        Ok(query)
    }

    fn push_value(&mut self, key: &str, value: Value) -> Result<()> {
        match value {
            Value::Null => {}
            Value::String(s) => self.push(key, s),
            Value::Bool(b) => self.push(key, b),
            Value::Number(n) => self.push(key, n),
            Value::Array(_) | Value::Object(_) => {
                return Err(KalshiError::InvalidArgument(format!(
                    "query parameter '{key}' must be a scalar or a list of scalars"
                )));
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    /// Values recorded for a key, in insertion order
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Default)]
    struct Sample {
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        cursor: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        with_nested_markets: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        tickers: Option<Vec<String>>,
        optional_without_skip: Option<i64>,
    }

    #[test]
    fn test_all_unset_is_empty() {
        let query = QueryParams::from_serialize(&Sample::default()).unwrap();
        assert!(query.is_empty());
    }

    #[test]
    fn test_scalars_and_lists() {
        let sample = Sample {
            limit: Some(50),
            cursor: Some("abc".to_string()),
            with_nested_markets: Some(true),
            tickers: Some(vec!["A".to_string(), "B".to_string()]),
            optional_without_skip: None,
        };
        let query = QueryParams::from_serialize(&sample).unwrap();

        assert_eq!(query.len(), 5);
        assert_eq!(query.get_all("limit").collect::<Vec<_>>(), vec!["50"]);
        assert_eq!(query.get_all("cursor").collect::<Vec<_>>(), vec!["abc"]);
        assert_eq!(
            query.get_all("with_nested_markets").collect::<Vec<_>>(),
            vec!["true"]
        );
        assert_eq!(query.get_all("tickers").collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(query.get_all("optional_without_skip").count(), 0);
    }

    #[test]
    fn test_rejects_nested_object() {
        let value = serde_json::json!({ "filter": { "status": "open" } });
        assert!(matches!(
            QueryParams::from_serialize(&value),
            Err(KalshiError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(QueryParams::from_serialize(&vec![1, 2, 3]).is_err());
    }

    #[test]
    fn test_push_opt_skips_none() {
        let mut query = QueryParams::new();
        query.push_opt("depth", None::<u32>);
        query.push_opt("depth", Some(10));
        assert_eq!(query.pairs(), &[("depth".to_string(), "10".to_string())]);
    }
}
