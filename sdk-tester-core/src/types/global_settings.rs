//! Global SDK settings form

use std::fmt::Write;

use serde::Serialize;

use sdk_tester_plugin::{ExtraProperties, SdkLogLevel};

use crate::utils::parse::non_blank;

/// A predefined boolean extra property
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyToggle {
    pub key: &'static str,
    pub label: &'static str,
    pub enabled: bool,
}

impl PropertyToggle {
    const fn new(key: &'static str, label: &'static str, enabled: bool) -> Self {
        Self {
            key,
            label,
            enabled,
        }
    }
}

/// Properties understood on both platforms, with their initial state
pub const COMMON_PROPERTIES: [PropertyToggle; 4] = [
    PropertyToggle::new("hideScrollingBars", "Hide Scrolling Bars", false),
    PropertyToggle::new("keepViewId", "Keep View ID", true),
    PropertyToggle::new("omsdk", "OMSDK", true),
    PropertyToggle::new("cdns", "CDNs", false),
];

/// Properties only the iOS SDK reads
pub const IOS_PROPERTIES: [PropertyToggle; 1] = [PropertyToggle::new(
    "debugModeInspectableWebView",
    "Debug Mode Inspectable WebView",
    false,
)];

/// Local state of the global settings screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalSettingsForm {
    pub log_level: SdkLogLevel,
    pub common: Vec<PropertyToggle>,
    pub ios: Vec<PropertyToggle>,
    pub custom_key: String,
    pub custom_value: String,
}

impl Default for GlobalSettingsForm {
    fn default() -> Self {
        Self {
            log_level: SdkLogLevel::default(),
            common: COMMON_PROPERTIES.to_vec(),
            ios: IOS_PROPERTIES.to_vec(),
            custom_key: String::new(),
            custom_value: String::new(),
        }
    }
}

fn toggle_in(list: &mut [PropertyToggle], key: &str) -> Option<bool> {
    let toggle = list.iter_mut().find(|p| p.key == key)?;
    toggle.enabled = !toggle.enabled;
    Some(toggle.enabled)
}

impl GlobalSettingsForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a common property. Returns the new state, `None` for an unknown key.
    pub fn toggle_common(&mut self, key: &str) -> Option<bool> {
        toggle_in(&mut self.common, key)
    }

    /// Flip an iOS property. Returns the new state, `None` for an unknown key.
    pub fn toggle_ios(&mut self, key: &str) -> Option<bool> {
        toggle_in(&mut self.ios, key)
    }

    /// Trimmed custom pair when both halves are non-blank
    #[must_use]
    pub fn custom_property(&self) -> Option<(String, String)> {
        let key = non_blank(&self.custom_key)?;
        let value = non_blank(&self.custom_value)?;
        Some((key.to_string(), value.to_string()))
    }

    /// Preview line shown under the custom property inputs
    #[must_use]
    pub fn custom_property_preview(&self) -> Option<String> {
        self.custom_property()
            .map(|(key, value)| format!("{{ \"{key}\": \"{value}\" }}"))
    }
}

/// What a global settings apply pushed to the SDK
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplySummary {
    pub log_level: SdkLogLevel,
    /// The full mapping passed to `set_global_extra_properties`
    pub properties: ExtraProperties,
    pub enabled_common: Vec<String>,
    pub enabled_ios: Vec<String>,
    pub custom: Option<(String, String)>,
}

impl ApplySummary {
    /// Human readable confirmation for the success alert
    #[must_use]
    pub fn message(&self) -> String {
        let mut message = format!(
            "Settings applied successfully!\nLog Level: {}",
            self.log_level
        );
        if !self.enabled_common.is_empty() {
            let _ = write!(
                message,
                "\nCommon Properties: {}",
                self.enabled_common.join(", ")
            );
        }
        if !self.enabled_ios.is_empty() {
            let _ = write!(message, "\niOS Properties: {}", self.enabled_ios.join(", "));
        }
        if let Some((key, value)) = &self.custom {
            let _ = write!(message, "\nCustom Property: {key} = {value}");
        }
        message
    }
}
