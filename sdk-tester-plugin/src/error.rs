use serde::{Deserialize, Serialize};

/// Unified error type for every call that crosses into the native SDK plugin.
///
/// All variants are serializable so a UI layer can show structured failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum PluginError {
    /// The SDK was used before `init` was called.
    NotInitialized,

    /// The SDK refused to build a unit for the given placement.
    BuildRejected {
        /// Placement name passed to `build_unit`.
        placement: String,
        /// Reason reported by the native side.
        reason: String,
    },

    /// `remove_classic_page` was called with an id the SDK does not know.
    PageNotFound {
        /// The page id that was not found.
        page_id: String,
    },

    /// A bridge call threw on the native side.
    Bridge {
        /// Name of the SDK operation, e.g. `setPublisher`.
        operation: String,
        /// Message raised by the native side.
        message: String,
    },

    /// An argument was rejected before reaching the native side.
    InvalidArgument {
        /// Name of the offending argument.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl PluginError {
    /// Shortcut for a bridge failure on `operation`.
    pub fn bridge(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Bridge {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Whether the error is expected behaviour (bad input, missing page), used for log levels.
    ///
    /// Use `warn` when this returns `true` and `error` otherwise.
    /// **Update this method whenever a variant is added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::BuildRejected { .. } | Self::PageNotFound { .. } | Self::InvalidArgument { .. }
        )
    }
}

impl std::fmt::Display for PluginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "SDK is not initialized"),
            Self::BuildRejected { placement, reason } => {
                write!(f, "Failed to build unit '{placement}': {reason}")
            }
            Self::PageNotFound { page_id } => write!(f, "Page '{page_id}' not found"),
            Self::Bridge { operation, message } => write!(f, "[{operation}] {message}"),
            Self::InvalidArgument { param, detail } => {
                write!(f, "Invalid argument '{param}': {detail}")
            }
        }
    }
}

impl std::error::Error for PluginError {}

/// Convenience type alias for `Result<T, PluginError>`.
pub type Result<T> = std::result::Result<T, PluginError>;
