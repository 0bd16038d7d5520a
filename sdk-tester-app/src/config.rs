//! Tester configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use sdk_tester_core::error::{CoreError, CoreResult};
use sdk_tester_core::types::{Platform, SdkLogLevel};

/// Publisher the tester initializes the SDK with by default
pub const DEFAULT_PUBLISHER: &str = "sdk-tester-rnd";
pub const DEFAULT_PAGE_URL: &str = "https://www.example.com";
pub const DEFAULT_PAGE_TYPE: &str = "article";

/// Process-level settings, loaded once at startup
///
/// Every key is optional in the TOML source; missing keys keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TesterConfig {
    pub publisher: String,
    pub page_url: String,
    pub page_type: String,
    pub platform: Platform,
    pub log_level: SdkLogLevel,
}

impl Default for TesterConfig {
    fn default() -> Self {
        Self {
            publisher: DEFAULT_PUBLISHER.to_string(),
            page_url: DEFAULT_PAGE_URL.to_string(),
            page_type: DEFAULT_PAGE_TYPE.to_string(),
            platform: Platform::default(),
            log_level: SdkLogLevel::default(),
        }
    }
}

impl TesterConfig {
    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> CoreResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| CoreError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn load(path: &Path) -> CoreResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            CoreError::ConfigError(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&source)
    }

    fn validate(&self) -> CoreResult<()> {
        if self.publisher.trim().is_empty() {
            return Err(CoreError::ConfigError("publisher must not be empty".to_string()));
        }
        if self.page_url.trim().is_empty() || self.page_type.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "page_url and page_type must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
