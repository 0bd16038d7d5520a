//! Settings form type definitions

use serde::{Deserialize, Serialize};

use sdk_tester_plugin::{ExtraProperties, Platform};

use crate::utils::parse::{non_blank, parse_leading_int};

/// Platforms a setter exists on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlatformSupport {
    AndroidOnly,
    IosOnly,
    Both,
}

impl PlatformSupport {
    #[must_use]
    pub fn includes(self, platform: Platform) -> bool {
        match self {
            Self::AndroidOnly => platform == Platform::Android,
            Self::IosOnly => platform == Platform::Ios,
            Self::Both => true,
        }
    }
}

/// Every editable field of a settings form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingField {
    Publisher,
    PageType,
    TargetType,
    PageUrl,
    SerialFetchTimeout,
    ExtraProperties,
    QueryKey,
    QueryValue,
    RequestCampaigns,
    DisableCache,
    RequestGeo,
    SpecificServer,
    VideoFormat,
}

impl SettingField {
    /// Fields pushed onto a page by "Apply Page Settings", in call order
    pub const PAGE_FIELDS: [Self; 6] = [
        Self::Publisher,
        Self::PageType,
        Self::TargetType,
        Self::PageUrl,
        Self::SerialFetchTimeout,
        Self::ExtraProperties,
    ];

    /// Fields pushed onto a unit by "Apply Settings", in call order
    pub const UNIT_FIELDS: [Self; 5] = [
        Self::Publisher,
        Self::PageType,
        Self::TargetType,
        Self::PageUrl,
        Self::ExtraProperties,
    ];

    /// Template fields, shown on both platforms
    pub const TEMPLATE_FIELDS: [Self; 7] = [
        Self::DisableCache,
        Self::QueryKey,
        Self::QueryValue,
        Self::RequestCampaigns,
        Self::RequestGeo,
        Self::SpecificServer,
        Self::VideoFormat,
    ];

    #[must_use]
    pub fn supported_platforms(self) -> PlatformSupport {
        match self {
            Self::Publisher | Self::PageType | Self::TargetType | Self::PageUrl => {
                PlatformSupport::AndroidOnly
            }
            _ => PlatformSupport::Both,
        }
    }

    /// Whether the form input for this field is shown on `platform`
    #[must_use]
    pub fn is_visible_on(self, platform: Platform) -> bool {
        self.supported_platforms().includes(platform)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Publisher => "Publisher",
            Self::PageType => "Page Type",
            Self::TargetType => "Target Type",
            Self::PageUrl => "Page URL",
            Self::SerialFetchTimeout => "Serial Fetch Timeout",
            Self::ExtraProperties => "Extra Properties",
            Self::QueryKey => "Key",
            Self::QueryValue => "Value",
            Self::RequestCampaigns => "Campaign ID",
            Self::DisableCache => "Disable TRC Cache",
            Self::RequestGeo => "Geo",
            Self::SpecificServer => "TRC Server",
            Self::VideoFormat => "Video Format",
        }
    }
}

/// Local state behind a page or unit settings form
///
/// Editing never touches the SDK; values only reach a handle when applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsForm {
    pub publisher: String,
    pub page_type: String,
    pub target_type: String,
    pub page_url: String,
    /// Raw text, parsed when applied
    pub serial_fetch_timeout: String,
    pub extra_properties_key: String,
    pub extra_properties_value: String,

    pub query_key: String,
    pub query_value: String,
    pub request_campaigns: Vec<i64>,
    pub disable_cache: bool,
    pub request_geo: String,
    pub specific_server: String,
    pub video_format: String,
}

impl SettingsForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serial fetch timeout in milliseconds, `None` when blank or not numeric
    #[must_use]
    pub fn serial_fetch_timeout_ms(&self) -> Option<i64> {
        non_blank(&self.serial_fetch_timeout).and_then(parse_leading_int)
    }

    /// Single-entry mapping when both key and value are non-blank
    #[must_use]
    pub fn extra_properties(&self) -> Option<ExtraProperties> {
        let key = non_blank(&self.extra_properties_key)?;
        let value = non_blank(&self.extra_properties_value)?;
        Some(ExtraProperties::from([(key.to_string(), value.to_string())]))
    }

    /// Campaign input holds one id; blank clears the list
    pub fn set_request_campaigns_input(&mut self, input: &str) {
        self.request_campaigns = non_blank(input)
            .and_then(parse_leading_int)
            .into_iter()
            .collect();
    }

    pub fn toggle_disable_cache(&mut self) -> bool {
        self.disable_cache = !self.disable_cache;
        self.disable_cache
    }
}

/// Outcome of pushing a form onto a handle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedSettings {
    /// Setters that were called and succeeded
    pub applied: Vec<SettingField>,
    /// Fields left out (blank, unparsable, or not supported on this platform)
    pub skipped: Vec<SettingField>,
    /// Setters that were called and failed, with the error text
    pub failed: Vec<(SettingField, String)>,
}

impl AppliedSettings {
    #[must_use]
    pub fn was_applied(&self, field: SettingField) -> bool {
        self.applied.contains(&field)
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}
