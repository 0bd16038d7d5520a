//! Global SDK settings service

use std::sync::Arc;

use sdk_tester_plugin::{AdSdk, ExtraProperties, Platform};

use crate::error::CoreResult;
use crate::types::{ApplySummary, GlobalSettingsForm, PropertyToggle};

/// Applies log level and global extra properties to the SDK
pub struct GlobalSettingsService {
    sdk: Arc<dyn AdSdk>,
    platform: Platform,
}

fn enabled_keys(toggles: &[PropertyToggle]) -> Vec<String> {
    toggles
        .iter()
        .filter(|p| p.enabled)
        .map(|p| p.key.to_string())
        .collect()
}

impl GlobalSettingsService {
    #[must_use]
    pub fn new(sdk: Arc<dyn AdSdk>, platform: Platform) -> Self {
        Self { sdk, platform }
    }

    /// Push the form to the SDK
    ///
    /// Every common toggle is sent as `"true"`/`"false"`; iOS toggles only on iOS.
    /// The custom pair overrides a toggle with the same key.
    pub fn apply(&self, form: &GlobalSettingsForm) -> CoreResult<ApplySummary> {
        self.sdk.set_log_level(form.log_level)?;

        let mut properties = ExtraProperties::new();
        let ios_toggles: &[PropertyToggle] = if self.platform == Platform::Ios {
            &form.ios
        } else {
            &[]
        };
        for toggle in form.common.iter().chain(ios_toggles) {
            properties.insert(toggle.key.to_string(), toggle.enabled.to_string());
        }
        let custom = form.custom_property();
        if let Some((key, value)) = &custom {
            properties.insert(key.clone(), value.clone());
        }

        if !properties.is_empty() {
            self.sdk.set_global_extra_properties(&properties)?;
        }

        log::info!(
            "Applied global settings: log level {}, {} extra properties",
            form.log_level,
            properties.len()
        );

        Ok(ApplySummary {
            log_level: form.log_level,
            properties,
            enabled_common: enabled_keys(&form.common),
            enabled_ios: enabled_keys(ios_toggles),
            custom,
        })
    }
}
