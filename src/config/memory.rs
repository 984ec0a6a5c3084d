//! Settings fixed in code, mostly for tests and embedding applications.

use std::collections::HashMap;

use super::ConfigResult;
use super::provider::ConfigProvider;

#[derive(Debug, Clone)]
pub struct MemoryConfigProvider {
    data: HashMap<String, String>,
    name: String,
}

impl MemoryConfigProvider {
    pub fn new() -> Self {
        Self::named("memory")
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::from_data(name, HashMap::new())
    }

    pub fn from_data(name: impl Into<String>, data: HashMap<String, String>) -> Self {
        Self {
            data,
            name: name.into(),
        }
    }

    pub fn value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }
}

impl Default for MemoryConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ConfigProvider for MemoryConfigProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get_raw(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.data.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_values() {
        let provider = MemoryConfigProvider::new()
            .value("display.amount_decimals", "3")
            .value("display.currency_symbol", "$");
        assert_eq!(
            provider.get_raw("display.amount_decimals").await.unwrap(),
            Some("3".to_string())
        );
        assert_eq!(provider.get_raw("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_later_value_replaces_earlier() {
        let provider = MemoryConfigProvider::new()
            .value("display.currency_symbol", "$")
            .value("display.currency_symbol", "£");
        assert_eq!(
            provider.get_raw("display.currency_symbol").await.unwrap(),
            Some("£".to_string())
        );
    }

    #[tokio::test]
    async fn test_clone_keeps_seeded_values() {
        let original = MemoryConfigProvider::named("fixtures").value("display.currency_symbol", "€");
        let shared = original.clone();
        let extended = original.value("display.amount_decimals", "1");

        assert_eq!(shared.name(), "fixtures");
        assert_eq!(shared.get_raw("display.amount_decimals").await.unwrap(), None);
        assert_eq!(
            extended.get_raw("display.amount_decimals").await.unwrap(),
            Some("1".to_string())
        );
        assert_eq!(
            extended.get_raw("display.currency_symbol").await.unwrap(),
            Some("€".to_string())
        );
    }
}
