use std::collections::HashMap;
use std::env;

use crate::errors::BackendError;

/// Every environment key the handlers read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    RecaptchaSecret,
    FromEmail,
    SesFromAddress,
    ToEmail,
    SesToAddress,
    TableName,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 6] = [
        ConfigKey::RecaptchaSecret,
        ConfigKey::FromEmail,
        ConfigKey::SesFromAddress,
        ConfigKey::ToEmail,
        ConfigKey::SesToAddress,
        ConfigKey::TableName,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ConfigKey::RecaptchaSecret => "RECAPTCHA_SECRET",
            ConfigKey::FromEmail => "FROM_EMAIL",
            ConfigKey::SesFromAddress => "SES_FROM_ADDRESS",
            ConfigKey::ToEmail => "TO_EMAIL",
            ConfigKey::SesToAddress => "SES_TO_ADDRESS",
            ConfigKey::TableName => "TABLE_NAME",
        }
    }
}

/// Where configuration values come from. Blank values count as unset.
pub trait ConfigSource {
    fn raw(&self, name: &str) -> Option<String>;

    fn get(&self, key: ConfigKey) -> Option<String> {
        self.raw(key.name()).filter(|v| !v.trim().is_empty())
    }

    /// First key in `keys` that holds a value.
    fn first_of(&self, keys: &[ConfigKey]) -> Option<String> {
        keys.iter().find_map(|key| self.get(*key))
    }
}

/// Reads the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn raw(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn raw(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactConfig {
    pub recaptcha_secret: Option<String>,
    pub from_email: Option<String>,
    /// Already falls back to `from_email` when no recipient key is set.
    pub to_email: Option<String>,
}

impl ContactConfig {
    /// Nothing is required here: the secret and the sender are checked on the
    /// request path so an unconfigured deployment still runs verification.
    pub fn from_source(source: &dyn ConfigSource) -> Self {
        let from_email = source.first_of(&[ConfigKey::FromEmail, ConfigKey::SesFromAddress]);
        let to_email = source
            .first_of(&[ConfigKey::ToEmail, ConfigKey::SesToAddress])
            .or_else(|| from_email.clone());

        Self {
            recaptcha_secret: source.get(ConfigKey::RecaptchaSecret),
            from_email,
            to_email,
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::from_source(&EnvSource)
    }

    /// Sender and recipient, or `None` when no sender is configured.
    #[must_use]
    pub fn addresses(&self) -> Option<(&str, &str)> {
        let from = self.from_email.as_deref()?;
        let to = self.to_email.as_deref().unwrap_or(from);
        Some((from, to))
    }
}

#[derive(Debug, Clone)]
pub struct VisitorConfig {
    pub table_name: String,
}

impl VisitorConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` when `TABLE_NAME` is unset.
    pub fn from_source(source: &dyn ConfigSource) -> Result<Self, BackendError> {
        let table_name = source
            .get(ConfigKey::TableName)
            .ok_or_else(|| BackendError::ConfigError(ConfigKey::TableName.name().to_string()))?;
        Ok(Self { table_name })
    }

    /// # Errors
    ///
    /// Returns `ConfigError` when `TABLE_NAME` is unset.
    pub fn from_env() -> Result<Self, BackendError> {
        Self::from_source(&EnvSource)
    }
}
