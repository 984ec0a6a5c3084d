//! Rule checks over a JSON view of collected settings, run before the
//! settings are deserialized. Absent and `null` keys pass every rule.

use std::ops::RangeInclusive;

use regex::Regex;
use serde_json::Value;

use super::{ConfigError, ConfigResult, ValidationErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    String,
    Number,
}

#[derive(Debug)]
enum Rule {
    Type(ValueType),
    Range(RangeInclusive<i64>),
    Pattern(Regex),
}

impl Rule {
    /// Failure message, or `None` when `value` satisfies the rule.
    fn check(&self, value: &Value) -> Option<String> {
        match self {
            Rule::Type(ValueType::String) if !value.is_string() => {
                Some(format!("expected string, got {value}"))
            }
            Rule::Type(ValueType::Number) if !value.is_number() => {
                Some(format!("expected number, got {value}"))
            }
            Rule::Range(range)
                if value.is_number() && !value.as_i64().is_some_and(|n| range.contains(&n)) =>
            {
                Some(format!(
                    "{value} is not an integer in {}..={}",
                    range.start(),
                    range.end()
                ))
            }
            Rule::Pattern(pattern) => value
                .as_str()
                .filter(|s| !pattern.is_match(s))
                .map(|s| format!("'{s}' does not match {}", pattern.as_str())),
            _ => None,
        }
    }
}

/// Ordered rules; every failing rule is reported.
#[derive(Debug, Default)]
pub struct ConfigValidator {
    rules: Vec<(String, Rule)>,
}

impl ConfigValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect_type(mut self, key: impl Into<String>, value_type: ValueType) -> Self {
        self.rules.push((key.into(), Rule::Type(value_type)));
        self
    }

    /// Numbers under `key` must be integers inside `range`.
    pub fn expect_range(mut self, key: impl Into<String>, range: RangeInclusive<i64>) -> Self {
        self.rules.push((key.into(), Rule::Range(range)));
        self
    }

    pub fn expect_pattern(mut self, key: impl Into<String>, pattern: &str) -> ConfigResult<Self> {
        let key = key.into();
        let regex = Regex::new(pattern).map_err(|e| ConfigError::InvalidValue {
            key: key.clone(),
            message: format!("invalid pattern: {e}"),
        })?;
        self.rules.push((key, Rule::Pattern(regex)));
        Ok(self)
    }

    pub fn validate(&self, document: &Value) -> ConfigResult<()> {
        let errors: Vec<ConfigError> = self
            .rules
            .iter()
            .filter_map(|(key, rule)| {
                let message = rule.check(lookup(document, key)?)?;
                Some(ConfigError::InvalidValue {
                    key: key.clone(),
                    message,
                })
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::ValidationErrors(ValidationErrors(errors)))
        }
    }
}

fn lookup<'a>(document: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.')
        .try_fold(document, |current, part| current.get(part))
        .filter(|value| !value.is_null())
}
