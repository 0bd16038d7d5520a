//! SDK Tester Core Library
//!
//! Business logic of the ad SDK tester, independent of any UI toolkit:
//! - Page session management (one page per key, released exactly once)
//! - Unit build state machine with retry and stale-result discard
//! - Platform-gated settings propagation onto pages and units
//! - Organic click toggle and global SDK settings
//!
//! The SDK and the alert surface are injected through traits, so the same logic
//! runs against a native binding or the in-process `SimulatedSdk`.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use traits::{LogNotifier, Notifier};
