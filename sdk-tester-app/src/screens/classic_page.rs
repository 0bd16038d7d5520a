//! Manual page/unit walkthrough: apply page settings, create unit, fetch content

use std::sync::Arc;

use async_trait::async_trait;

use sdk_tester_core::error::CoreError;
use sdk_tester_core::services::{
    LoggingClassicListener, PageSession, PageSessionManager, ServiceContext, UnitSlot,
};
use sdk_tester_core::traits::ClassicListener;
use sdk_tester_core::types::{AppliedSettings, PlacementParams, SettingsForm};

use super::{report_build_error, yes_no, Route, Screen};
use crate::config::TesterConfig;

pub const UNIT_NOT_READY: &str = "Unit controller not available yet";

pub struct ClassicPageScreen {
    ctx: Arc<ServiceContext>,
    pages: PageSessionManager,
    page_url: String,
    page_type: String,
    /// Page settings form state
    pub form: SettingsForm,
    unit: UnitSlot,
    listener: Arc<dyn ClassicListener>,
    content_loaded: bool,
}

impl ClassicPageScreen {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, config: &TesterConfig) -> Self {
        let pages = ctx.page_session_manager();
        Self {
            ctx,
            pages,
            page_url: config.page_url.clone(),
            page_type: config.page_type.clone(),
            form: SettingsForm::new(),
            unit: UnitSlot::new("Classic"),
            listener: Arc::new(LoggingClassicListener::new("ClassicPage")),
            content_loaded: false,
        }
    }

    fn session(&self) -> Arc<PageSession> {
        self.pages.acquire(&self.page_url, &self.page_type)
    }

    /// "1. Apply Page Settings"
    pub fn apply_page_settings(&self) -> AppliedSettings {
        let session = self.session();
        self.ctx
            .settings_service()
            .apply_page_settings(session.page(), &self.form)
    }

    /// Whether "2. Create Unit" is enabled
    pub async fn can_create_unit(&self) -> bool {
        self.unit.can_build().await
    }

    /// "2. Create Unit". Alerts the outcome; returns whether a unit was built.
    pub async fn create_unit(&self) -> bool {
        let session = self.session();
        match self
            .unit
            .build(
                session.page(),
                &PlacementParams::mid_article_widget(),
                Arc::clone(&self.listener),
            )
            .await
        {
            Ok(_) => {
                self.ctx.notifier.success("Unit created successfully");
                true
            }
            Err(e) => {
                report_build_error(&self.ctx, &e);
                false
            }
        }
    }

    /// "3. Fetch Content". Alerts when the unit does not exist yet or the fetch fails.
    ///
    /// Content only counts as loaded once the SDK accepted the fetch.
    pub async fn fetch_content(&mut self) {
        let Some(unit) = self.unit.unit().await else {
            self.ctx.notifier.error(UNIT_NOT_READY);
            return;
        };
        match unit.fetch_content() {
            Ok(()) => self.content_loaded = true,
            Err(e) => self
                .ctx
                .report_error("Failed to fetch content", &CoreError::from(e)),
        }
    }

    #[must_use]
    pub fn is_content_loaded(&self) -> bool {
        self.content_loaded
    }

    #[must_use]
    pub fn unit_slot(&self) -> &UnitSlot {
        &self.unit
    }
}

#[async_trait]
impl Screen for ClassicPageScreen {
    fn route(&self) -> Route {
        Route::ClassicPage
    }

    async fn mount(&mut self) {
        self.session();
    }

    async fn unmount(&mut self) {
        self.unit.release().await;
        self.pages.release_all();
    }

    async fn status_lines(&self) -> Vec<String> {
        vec![
            format!("Platform: {}", self.ctx.platform),
            format!("Unit Created: {}", yes_no(self.unit.is_built().await)),
            format!("Content Loaded: {}", yes_no(self.content_loaded)),
        ]
    }
}
