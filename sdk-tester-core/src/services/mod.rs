//! Tester service layer

mod feed_layout;
mod global_settings_service;
mod listener;
mod organic_clicks;
mod page_session_service;
mod settings_service;
mod unit_slot;

pub use feed_layout::generate_feed_items;
pub use global_settings_service::GlobalSettingsService;
pub use listener::LoggingClassicListener;
pub use organic_clicks::OrganicClicksToggle;
pub use page_session_service::{PageSession, PageSessionManager, ReleaseOutcome};
pub use settings_service::SettingsService;
pub use unit_slot::UnitSlot;

use std::sync::Arc;

use sdk_tester_plugin::{AdSdk, Platform};

use crate::error::CoreError;
use crate::traits::Notifier;

/// Service context - holds every capability screens depend on
///
/// The host creates it once and injects the SDK binding and the alert surface.
pub struct ServiceContext {
    /// SDK entry point
    pub sdk: Arc<dyn AdSdk>,
    /// User-facing alerts
    pub notifier: Arc<dyn Notifier>,
    /// Platform the process runs on; gates platform-specific setters
    pub platform: Platform,
}

impl ServiceContext {
    #[must_use]
    pub fn new(sdk: Arc<dyn AdSdk>, notifier: Arc<dyn Notifier>, platform: Platform) -> Self {
        Self {
            sdk,
            notifier,
            platform,
        }
    }

    /// Fresh page memo for one screen instance
    #[must_use]
    pub fn page_session_manager(&self) -> PageSessionManager {
        PageSessionManager::new(Arc::clone(&self.sdk))
    }

    #[must_use]
    pub fn settings_service(&self) -> SettingsService {
        SettingsService::new(self.platform)
    }

    #[must_use]
    pub fn global_settings_service(&self) -> GlobalSettingsService {
        GlobalSettingsService::new(Arc::clone(&self.sdk), self.platform)
    }

    /// Log `err` and show it as an error alert
    pub fn report_error(&self, context: &str, err: &CoreError) {
        err.log(context);
        self.notifier.error(&format!("{context}: {err}"));
    }
}
