use crate::{
    cli::Args,
    consts::{DEFAULT_API_ENDPOINT, DEFAULT_SOURCE_PATH, ENV_PREFIX},
};
use anyhow::anyhow;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::{
    fmt,
    path::{Path, PathBuf},
};
use url::Url;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub api: ApiSettings,
    pub source: SourceSettings,
    /// Exit with an error if any remote call of the batch failed.
    pub fail_on_remote_error: bool,
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiSettings {
    pub endpoint: Url,
    pub api_key: String,
    /// Request timeout in seconds. `0` means no timeout.
    pub request_timeout: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            endpoint: Url::try_from(DEFAULT_API_ENDPOINT).expect("valid url"),
            api_key: String::new(),
            request_timeout: 0,
        }
    }
}

impl fmt::Debug for ApiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiSettings")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceSettings {
    pub path: PathBuf,
    /// Check that every `abi` value is a well-formed contract ABI.
    pub validate_abi: bool,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SOURCE_PATH),
            validate_abi: false,
        }
    }
}

impl Settings {
    /// Reads the config file (if present) and the environment, applies the
    /// command line overrides and validates the result.
    pub fn new(args: &Args) -> anyhow::Result<Self> {
        let mut settings = Self::read(&args.config_path)?;
        if let Some(input) = &args.input {
            settings.source.path = input.clone();
        }
        settings.validate()?;
        Ok(settings)
    }

    pub fn read(config_path: &Path) -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder();
        if config_path.exists() {
            builder = builder.add_source(File::from(config_path));
        }
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api.api_key.is_empty() {
            return Err(anyhow!(
                "`api.api_key` must be set (e.g. via {ENV_PREFIX}__API__API_KEY)"
            ));
        }
        let endpoint = &self.api.endpoint;
        if !matches!(endpoint.scheme(), "http" | "https") || endpoint.cannot_be_a_base() {
            return Err(anyhow!(
                "`api.endpoint` must be an http(s) base url, got '{endpoint}'"
            ));
        }
        Ok(())
    }
}
