use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The slice of a billing API charge payload the resolver reads.
///
/// Other payload fields are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    #[serde(default)]
    pub charge_model: String,
    #[serde(default)]
    pub properties: Value,
}

impl Charge {
    pub fn new(charge_model: impl Into<String>, properties: Value) -> Self {
        Self {
            charge_model: charge_model.into(),
            properties,
        }
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_ignores_other_fields() {
        let charge = Charge::from_json(
            r#"{
                "id": "1a2b",
                "charge_model": "standard",
                "invoiceable": true,
                "properties": {"amount": "3"},
                "billable_metric": {"code": "api_calls"}
            }"#,
        )
        .unwrap();
        assert_eq!(charge, Charge::new("standard", json!({"amount": "3"})));
    }

    #[test]
    fn test_missing_fields_default() {
        let charge = Charge::from_json("{}").unwrap();
        assert_eq!(charge.charge_model, "");
        assert!(charge.properties.is_null());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = Charge::from_json("{not json").unwrap_err();
        assert!(matches!(err, crate::Error::Json(_)));
    }
}
