//! Settings that shape rendered amounts.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::provider::ConfigProvider;
use super::validator::{ConfigValidator, ValueType};
use super::{ConfigError, ConfigResult};

pub const CURRENCY_SYMBOL_KEY: &str = "display.currency_symbol";
pub const AMOUNT_DECIMALS_KEY: &str = "display.amount_decimals";

const MAX_AMOUNT_DECIMALS: i64 = 6;

/// How money amounts are rendered in notes and tables.
///
/// Tier labels are not affected; they always show exact boundary values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub currency_symbol: String,
    pub amount_decimals: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            amount_decimals: 2,
        }
    }
}

impl DisplaySettings {
    fn validator() -> ConfigResult<ConfigValidator> {
        ConfigValidator::new()
            .expect_type(CURRENCY_SYMBOL_KEY, ValueType::String)
            .expect_type(AMOUNT_DECIMALS_KEY, ValueType::Number)
            .expect_range(AMOUNT_DECIMALS_KEY, 0..=MAX_AMOUNT_DECIMALS)
            .expect_pattern(CURRENCY_SYMBOL_KEY, r"^\S{1,4}$")
    }

    /// Reads settings from `provider`; absent keys keep their defaults.
    pub async fn load(provider: &dyn ConfigProvider) -> ConfigResult<Self> {
        let mut display = Map::new();

        if let Some(symbol) = provider.get_raw(CURRENCY_SYMBOL_KEY).await? {
            display.insert("currency_symbol".into(), Value::String(symbol));
        }
        if let Some(raw) = provider.get_raw(AMOUNT_DECIMALS_KEY).await? {
            let value = serde_json::from_str(raw.trim()).unwrap_or(Value::String(raw));
            display.insert("amount_decimals".into(), value);
        }

        let document = json!({ "display": display });
        Self::validator()?.validate(&document)?;

        let settings: Self = serde_json::from_value(Value::Object(display))?;
        tracing::debug!(
            provider = provider.name(),
            currency_symbol = %settings.currency_symbol,
            amount_decimals = settings.amount_decimals,
            "Loaded display settings"
        );
        Ok(settings)
    }
}

impl TryFrom<Value> for DisplaySettings {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Ok(serde_json::from_value(value)?)
    }
}
