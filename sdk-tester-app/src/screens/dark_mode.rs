//! Page-level dark mode through page extra properties

use std::sync::Arc;

use async_trait::async_trait;

use sdk_tester_core::services::{
    LoggingClassicListener, PageSession, PageSessionManager, ServiceContext, UnitSlot,
};
use sdk_tester_core::types::{ExtraProperties, PlacementParams};
use sdk_tester_core::CoreError;

use super::{report_build_error, yes_no, Route, Screen};
use crate::config::TesterConfig;

pub const DARK_MODE_KEY: &str = "darkMode";

/// The unit is built by hand so `darkMode` reaches the page before the first request
pub struct DarkModeScreen {
    ctx: Arc<ServiceContext>,
    pages: PageSessionManager,
    page_url: String,
    page_type: String,
    unit: UnitSlot,
    dark_mode: bool,
}

impl DarkModeScreen {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, config: &TesterConfig) -> Self {
        let pages = ctx.page_session_manager();
        Self {
            ctx,
            pages,
            page_url: config.page_url.clone(),
            page_type: config.page_type.clone(),
            unit: UnitSlot::new("Dark mode"),
            dark_mode: false,
        }
    }

    fn session(&self) -> Arc<PageSession> {
        self.pages.acquire(&self.page_url, &self.page_type)
    }

    fn push_dark_mode(&self) {
        let properties =
            ExtraProperties::from([(DARK_MODE_KEY.to_string(), self.dark_mode.to_string())]);
        if let Err(e) = self.session().page().set_page_extra_properties(&properties) {
            CoreError::from(e).log("Failed to set dark mode page property");
        }
    }

    #[must_use]
    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Flip dark mode and push it to the page immediately
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.push_dark_mode();
        self.dark_mode
    }

    pub async fn create_unit(&self) -> bool {
        let session = self.session();
        let listener = Arc::new(LoggingClassicListener::new("DarkMode"));
        match self
            .unit
            .build(session.page(), &PlacementParams::mid_article_widget(), listener)
            .await
        {
            Ok(_) => true,
            Err(e) => {
                report_build_error(&self.ctx, &e);
                false
            }
        }
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
impl Screen for DarkModeScreen {
    fn route(&self) -> Route {
        Route::DarkMode
    }

    async fn mount(&mut self) {
        self.push_dark_mode();
    }

    async fn unmount(&mut self) {
        self.unit.release().await;
        self.pages.release_all();
    }

    async fn status_lines(&self) -> Vec<String> {
        vec![
            format!("Dark Mode: {}", yes_no(self.dark_mode)),
            format!("Unit Created: {}", yes_no(self.unit.is_built().await)),
        ]
    }
}
