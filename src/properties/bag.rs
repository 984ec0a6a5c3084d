use serde_json::{Map, Value};

use super::coerce;

/// Read-only view over an untyped properties bag.
///
/// Anything that is not a JSON object reads as an empty bag, and `null`
/// members read as absent.
#[derive(Debug, Clone, Copy)]
pub struct Properties<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> Properties<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            map: value.as_object(),
        }
    }

    pub fn from_map(map: &'a Map<String, Value>) -> Self {
        Self { map: Some(map) }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map?.get(key).filter(|value| !value.is_null())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn number_or(&self, key: &str, default: f64) -> f64 {
        coerce::number_or(self.get(key), default)
    }

    /// First non-null key in `keys`, coerced; `default` if none is present.
    pub fn first_number_or(&self, keys: &[&str], default: f64) -> f64 {
        keys.iter()
            .find_map(|key| self.get(key))
            .map_or(default, coerce::to_number)
    }

    pub fn optional_number(&self, key: &str) -> Option<f64> {
        coerce::optional_number(self.get(key))
    }

    /// Array member as a slice; absent or non-array members are empty.
    pub fn list(&self, key: &str) -> &'a [Value] {
        self.get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
