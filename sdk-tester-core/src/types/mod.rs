//! Type definition module

mod feed;
mod global_settings;
mod page_key;
mod settings;
mod unit_status;

pub use feed::FeedItem;
pub use global_settings::{
    ApplySummary, GlobalSettingsForm, PropertyToggle, COMMON_PROPERTIES, IOS_PROPERTIES,
};
pub use page_key::PageKey;
pub use settings::{AppliedSettings, PlatformSupport, SettingField, SettingsForm};
pub use unit_status::UnitStatus;

// Re-export the plugin's public value types
pub use sdk_tester_plugin::{
    ExtraProperties, ItemClick, PageId, PlacementParams, PlacementType, Platform, SdkLogLevel,
};
