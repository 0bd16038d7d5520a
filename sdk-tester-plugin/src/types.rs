use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Free-form string override channel passed to `set_*_extra_properties`.
///
/// Ordered so that call logs and previews are deterministic.
pub type ExtraProperties = BTreeMap<String, String>;

/// Mobile platform the plugin runs on.
///
/// Several SDK setters only exist on one platform, so callers gate on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Android,
    Ios,
}

impl Platform {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::Ios => "ios",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity the SDK assigns to a classic page the first time it is really used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub String);

impl PageId {
    /// An id only counts as assigned when it is non-blank.
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        !self.0.trim().is_empty()
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a unit is laid out on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlacementType {
    PageMiddle,
    PageBottom,
    PageLeft,
    PageRight,
    Feed,
}

/// Named, typed slot describing where and how an ad unit is shown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementParams {
    pub placement: String,
    pub mode: String,
    pub placement_type: PlacementType,
}

impl PlacementParams {
    #[must_use]
    pub fn new(placement: &str, mode: &str, placement_type: PlacementType) -> Self {
        Self {
            placement: placement.to_string(),
            mode: mode.to_string(),
            placement_type,
        }
    }

    /// 1x2 widget in the middle of an article.
    #[must_use]
    pub fn mid_article_widget() -> Self {
        Self::new("Mid Article", "alternating-1x2-widget", PlacementType::PageMiddle)
    }

    /// Thumbnail feed without video at the bottom of the page.
    #[must_use]
    pub fn feed_without_video() -> Self {
        Self::new("Feed without video", "thumbs-feed-01", PlacementType::Feed)
    }
}

/// Process-wide SDK log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SdkLogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl SdkLogLevel {
    /// All levels in picker order.
    pub const ALL: [Self; 4] = [Self::Debug, Self::Info, Self::Warning, Self::Error];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for SdkLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of the listener's item-click callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemClick {
    pub placement_name: String,
    pub item_id: String,
    pub click_url: String,
    pub is_organic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<String>,
}
