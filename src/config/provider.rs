//! Read side of a settings source.

use super::ConfigResult;

/// Source of raw setting strings keyed by dotted names such as
/// `display.amount_decimals`. Absent keys read as `None`.
#[async_trait::async_trait]
pub trait ConfigProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn get_raw(&self, key: &str) -> ConfigResult<Option<String>>;
}
