//! Logging listener attached to every unit the tester builds

use sdk_tester_plugin::{ClassicListener, ItemClick};

/// Logs each SDK callback, prefixed with the owning screen's tag
#[derive(Debug, Clone)]
pub struct LoggingClassicListener {
    tag: String,
}

impl LoggingClassicListener {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

impl ClassicListener for LoggingClassicListener {
    fn on_resize(&self, height: f64) {
        log::debug!("[{}] onResize: {height}", self.tag);
    }

    fn on_event(&self, action_type: i32, data: &str) {
        log::debug!("[{}] onEvent: {action_type} {data}", self.tag);
    }

    fn on_ad_receive_fail(&self, error: &str) {
        log::warn!("[{}] onAdReceiveFail: {error}", self.tag);
    }

    fn on_ad_receive_success(&self) {
        log::info!("[{}] onAdReceiveSuccess", self.tag);
    }

    fn on_item_click(&self, click: &ItemClick) {
        log::info!(
            "[{}] onItemClick at {}: placement={} item={} organic={} url={}",
            self.tag,
            chrono::Utc::now().to_rfc3339(),
            click.placement_name,
            click.item_id,
            click.is_organic,
            click.click_url
        );
    }

    fn on_widget_on_top(&self) {
        log::debug!("[{}] onTaboolaWidgetOnTop", self.tag);
    }

    fn on_update_content_completed(&self) {
        log::debug!("[{}] onUpdateContentCompleted", self.tag);
    }
}
