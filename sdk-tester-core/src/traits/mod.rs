//! Capability traits the platform layer injects

mod notifier;

pub use notifier::{LogNotifier, Notifier};

// Re-export the SDK-side traits so services only depend on this crate
pub use sdk_tester_plugin::{AdSdk, ClassicListener, ClassicPage, ClassicUnit};
