//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export plugin error type
pub use sdk_tester_plugin::PluginError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// An action needs a unit that has not been built (or was released)
    #[error("{0} unit not available")]
    UnitNotAvailable(String),

    /// A build for this slot is already pending
    #[error("Build already in progress for: {0}")]
    BuildInFlight(String),

    /// The slot already holds a built unit
    #[error("Unit already built for: {0}")]
    AlreadyBuilt(String),

    /// The slot was released on unmount
    #[error("Unit slot released: {0}")]
    SlotReleased(String),

    /// A build resolved after its slot moved on; the result was discarded
    #[error("Discarded stale build result for: {0}")]
    StaleBuild(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Plugin error (converting from library)
    #[error("{0}")]
    Plugin(#[from] PluginError),
}

impl CoreError {
    /// Whether it is expected behavior (user action, missing unit, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::UnitNotAvailable(_)
            | Self::BuildInFlight(_)
            | Self::AlreadyBuilt(_)
            | Self::SlotReleased(_)
            | Self::StaleBuild(_)
            | Self::ValidationError(_) => true,
            Self::Plugin(e) => e.is_expected(),
            Self::ConfigError(_) => false,
        }
    }

    /// Log the error at the level `is_expected` picks.
    pub fn log(&self, context: &str) {
        if self.is_expected() {
            log::warn!("{context}: {self}");
        } else {
            log::error!("{context}: {self}");
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
