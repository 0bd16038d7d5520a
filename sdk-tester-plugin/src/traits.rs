use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ExtraProperties, ItemClick, PageId, PlacementParams, SdkLogLevel};

/// Entry point of the native SDK plugin.
///
/// Global state (init, log level, global extra properties) lives behind this trait so
/// business logic receives it as a capability instead of reaching for a singleton.
pub trait AdSdk: Send + Sync {
    /// Initialize the SDK for a publisher. Called once at process start.
    fn init(&self, publisher: &str) -> Result<()>;

    /// Obtain a classic page for `(page_url, page_type)`.
    ///
    /// Every call creates a new SDK-side session; callers memoize.
    fn get_classic_page(&self, page_url: &str, page_type: &str) -> Arc<dyn ClassicPage>;

    /// Release a classic page and every unit it owns.
    fn remove_classic_page(&self, page_id: &PageId) -> Result<()>;

    fn set_log_level(&self, level: SdkLogLevel) -> Result<()>;

    fn set_global_extra_properties(&self, properties: &ExtraProperties) -> Result<()>;
}

/// Page-level session with the SDK.
#[async_trait]
pub trait ClassicPage: Send + Sync {
    /// Id assigned by the SDK, `None` until the page is first used.
    fn page_id(&self) -> Option<PageId>;

    /// Request a unit for `params`. Resolves once the native side created it.
    async fn build_unit(
        &self,
        params: &PlacementParams,
        listener: Arc<dyn ClassicListener>,
    ) -> Result<Arc<dyn ClassicUnit>>;

    // Android only
    fn set_publisher(&self, publisher: &str) -> Result<()>;
    fn set_page_type(&self, page_type: &str) -> Result<()>;
    fn set_target_type(&self, target_type: &str) -> Result<()>;
    fn set_page_url(&self, page_url: &str) -> Result<()>;

    fn set_serial_fetch_timeout(&self, timeout_ms: i64) -> Result<()>;
    fn set_page_extra_properties(&self, properties: &ExtraProperties) -> Result<()>;
    fn fetch_all_units_content(&self) -> Result<()>;
    fn refresh(&self) -> Result<()>;
    fn reset(&self) -> Result<()>;
}

/// One placement's request/response/render session, scoped to a page.
pub trait ClassicUnit: Send + Sync {
    fn placement(&self) -> &PlacementParams;

    // Android only
    fn set_publisher_name(&self, publisher: &str) -> Result<()>;
    fn set_page_type(&self, page_type: &str) -> Result<()>;
    fn set_target_type(&self, target_type: &str) -> Result<()>;
    fn set_page_url(&self, page_url: &str) -> Result<()>;

    fn set_unit_extra_properties(&self, properties: &ExtraProperties) -> Result<()>;
    fn set_should_handle_organic_clicks(&self, enabled: bool) -> Result<()>;
    fn fetch_content(&self) -> Result<()>;
    fn refresh(&self) -> Result<()>;
    fn reset(&self) -> Result<()>;

    /// Explicit per-unit teardown. Platforms that release units together with
    /// their page keep the default.
    fn release(&self) -> Result<()> {
        Ok(())
    }
}

/// Callbacks the SDK invokes for a unit. All slots default to no-ops.
pub trait ClassicListener: Send + Sync {
    fn on_resize(&self, _height: f64) {}
    fn on_event(&self, _action_type: i32, _data: &str) {}
    fn on_ad_receive_fail(&self, _error: &str) {}
    fn on_ad_receive_success(&self) {}
    fn on_item_click(&self, _click: &ItemClick) {}
    fn on_widget_on_top(&self) {}
    fn on_update_content_completed(&self) {}
}
