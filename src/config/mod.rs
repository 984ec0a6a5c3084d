//! Display settings and the pluggable providers they are loaded from.
//!
//! ```rust,no_run
//! use charge_tiers::config::{ConfigBuilder, DisplaySettings};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = ConfigBuilder::new()
//!     .env()
//!     .file("billing-console.json")
//!     .build();
//! let settings = DisplaySettings::load(&provider).await?;
//! # Ok(())
//! # }
//! ```

pub mod composite;
pub mod display;
pub mod env;
pub mod file;
pub mod memory;
pub mod provider;
pub mod validator;

pub use composite::CompositeConfigProvider;
pub use display::DisplaySettings;
pub use env::{ENV_PREFIX, EnvConfigProvider};
pub use file::FileConfigProvider;
pub use memory::MemoryConfigProvider;
pub use provider::ConfigProvider;
pub use validator::{ConfigValidator, ValueType};

use thiserror::Error;

/// Errors that can occur in configuration operations
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment error: {0}")]
    Env(#[from] std::env::VarError),

    /// Multiple validation errors
    #[error("{0}")]
    ValidationErrors(ValidationErrors),
}

#[derive(Debug)]
pub struct ValidationErrors(pub Vec<ConfigError>);

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Validation failed: ")?;
        let msgs: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", msgs.join("; "))
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Builder for a prioritized provider chain (first added wins).
#[derive(Default)]
pub struct ConfigBuilder {
    providers: Vec<Box<dyn ConfigProvider>>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment variables with the crate prefix.
    pub fn env(self) -> Self {
        self.provider(Box::new(EnvConfigProvider::new()))
    }

    pub fn env_with_prefix(self, prefix: &str) -> Self {
        self.provider(Box::new(EnvConfigProvider::prefixed(prefix)))
    }

    pub fn file(self, path: impl AsRef<std::path::Path>) -> Self {
        self.provider(Box::new(FileConfigProvider::new(path.as_ref().to_path_buf())))
    }

    pub fn memory(self, provider: MemoryConfigProvider) -> Self {
        self.provider(Box::new(provider))
    }

    pub fn provider(mut self, provider: Box<dyn ConfigProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn build(self) -> CompositeConfigProvider {
        self.providers
            .into_iter()
            .fold(CompositeConfigProvider::new(), CompositeConfigProvider::provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            key: "display.currency_symbol".to_string(),
            message: "expected string, got 1".to_string(),
        };
        assert!(err.to_string().contains("display.currency_symbol"));
    }

    #[test]
    fn test_validation_errors_display() {
        let errors = ValidationErrors(vec![
            ConfigError::InvalidValue {
                key: "a".into(),
                message: "too long".into(),
            },
            ConfigError::InvalidValue {
                key: "b".into(),
                message: "bad".into(),
            },
        ]);
        assert_eq!(
            errors.to_string(),
            "Validation failed: Invalid value for a: too long; Invalid value for b: bad"
        );
    }

    #[test]
    fn test_config_builder_order() {
        let composite = ConfigBuilder::new()
            .memory(MemoryConfigProvider::named("overrides"))
            .env()
            .build();
        assert_eq!(composite.provider_names(), ["overrides", "env"]);
    }
}
