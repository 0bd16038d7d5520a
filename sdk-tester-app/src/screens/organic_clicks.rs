//! Organic click handling demo: one auto-built widget and a toggle

use std::sync::Arc;

use async_trait::async_trait;

use sdk_tester_core::services::{
    LoggingClassicListener, OrganicClicksToggle, PageSessionManager, ServiceContext, UnitSlot,
};
use sdk_tester_core::types::PlacementParams;

use super::{report_build_error, Route, Screen};
use crate::config::TesterConfig;

pub struct OrganicClicksScreen {
    ctx: Arc<ServiceContext>,
    pages: PageSessionManager,
    page_url: String,
    page_type: String,
    unit: UnitSlot,
    toggle: OrganicClicksToggle,
}

impl OrganicClicksScreen {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, config: &TesterConfig) -> Self {
        let pages = ctx.page_session_manager();
        Self {
            ctx,
            pages,
            page_url: config.page_url.clone(),
            page_type: config.page_type.clone(),
            unit: UnitSlot::new("Test"),
            toggle: OrganicClicksToggle::new(),
        }
    }

    #[must_use]
    pub fn should_handle_organic_clicks(&self) -> bool {
        self.toggle.is_enabled()
    }

    /// Flip organic click handling. Works before the unit exists.
    pub async fn toggle_organic_clicks(&mut self) -> bool {
        let unit = self.unit.unit().await;
        self.toggle.toggle(unit.as_deref())
    }

    pub async fn fetch_content(&self) -> bool {
        self.unit
            .with_unit("fetchContent", |unit| unit.fetch_content())
            .await
    }

    #[must_use]
    pub fn unit_slot(&self) -> &UnitSlot {
        &self.unit
    }
}

#[async_trait]
impl Screen for OrganicClicksScreen {
    fn route(&self) -> Route {
        Route::OrganicClicks
    }

    async fn mount(&mut self) {
        let session = self.pages.acquire(&self.page_url, &self.page_type);
        let listener = Arc::new(LoggingClassicListener::new("OrganicClicks"));
        if let Err(e) = self
            .unit
            .build(session.page(), &PlacementParams::mid_article_widget(), listener)
            .await
        {
            report_build_error(&self.ctx, &e);
        }
    }

    async fn unmount(&mut self) {
        self.unit.release().await;
        self.pages.release_all();
    }

    async fn status_lines(&self) -> Vec<String> {
        let state = if self.toggle.is_enabled() {
            "Enabled"
        } else {
            "Disabled"
        };
        vec![format!("Taboola Handle Organic Clicks: {state}")]
    }
}
