//! Widget mid-list plus feed at the end, both built on mount

use std::sync::Arc;

use async_trait::async_trait;

use sdk_tester_core::error::CoreError;
use sdk_tester_core::services::{
    generate_feed_items, LoggingClassicListener, PageSession, PageSessionManager, ServiceContext,
    UnitSlot,
};
use sdk_tester_core::traits::{ClassicListener, ClassicPage};
use sdk_tester_core::types::{AppliedSettings, FeedItem, PlacementParams, SettingsForm};

use super::{report_build_error, Route, Screen};
use crate::config::TesterConfig;

/// Which of the two units an action targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitTarget {
    Widget,
    Feed,
}

pub struct FeedAndWidgetScreen {
    ctx: Arc<ServiceContext>,
    pages: PageSessionManager,
    page_url: String,
    page_type: String,
    widget: UnitSlot,
    feed: UnitSlot,
    pub widget_form: SettingsForm,
    pub feed_form: SettingsForm,
    listener: Arc<dyn ClassicListener>,
    items: Vec<FeedItem>,
}

impl FeedAndWidgetScreen {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, config: &TesterConfig) -> Self {
        let pages = ctx.page_session_manager();
        Self {
            ctx,
            pages,
            page_url: config.page_url.clone(),
            page_type: config.page_type.clone(),
            widget: UnitSlot::new("Widget"),
            feed: UnitSlot::new("Feed"),
            widget_form: SettingsForm::new(),
            feed_form: SettingsForm::new(),
            listener: Arc::new(LoggingClassicListener::new("FeedAndWidget")),
            items: generate_feed_items(),
        }
    }

    fn session(&self) -> Arc<PageSession> {
        self.pages.acquire(&self.page_url, &self.page_type)
    }

    #[must_use]
    pub fn slot(&self, target: UnitTarget) -> &UnitSlot {
        match target {
            UnitTarget::Widget => &self.widget,
            UnitTarget::Feed => &self.feed,
        }
    }

    fn form(&self, target: UnitTarget) -> &SettingsForm {
        match target {
            UnitTarget::Widget => &self.widget_form,
            UnitTarget::Feed => &self.feed_form,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    // ===== Page controls =====

    pub fn reset_page(&self) {
        self.page_action("reset", |page| page.reset());
    }

    pub fn fetch_all(&self) {
        self.page_action("fetchAllUnitsContent", |page| page.fetch_all_units_content());
    }

    pub fn refresh_page(&self) {
        self.page_action("refresh", |page| page.refresh());
    }

    fn page_action<F>(&self, operation: &str, action: F)
    where
        F: FnOnce(&dyn ClassicPage) -> sdk_tester_plugin::Result<()>,
    {
        let session = self.session();
        if let Err(e) = action(session.page()) {
            CoreError::from(e).log(&format!("Page {operation} failed"));
        }
    }

    // ===== Unit controls =====

    /// "Apply Settings" for one unit. Alerts and returns `None` when it is missing.
    pub async fn apply_unit_settings(&self, target: UnitTarget) -> Option<AppliedSettings> {
        let slot = self.slot(target);
        let Some(unit) = slot.unit().await else {
            self.ctx
                .notifier
                .error(&CoreError::UnitNotAvailable(slot.label().to_string()).to_string());
            return None;
        };
        Some(
            self.ctx
                .settings_service()
                .apply_unit_settings(unit.as_ref(), self.form(target)),
        )
    }

    pub async fn fetch_unit(&self, target: UnitTarget) -> bool {
        self.slot(target)
            .with_unit("fetchContent", |unit| unit.fetch_content())
            .await
    }

    pub async fn refresh_unit(&self, target: UnitTarget) -> bool {
        self.slot(target)
            .with_unit("refresh", |unit| unit.refresh())
            .await
    }

    pub async fn reset_unit(&self, target: UnitTarget) -> bool {
        self.slot(target)
            .with_unit("reset", |unit| unit.reset())
            .await
    }
}

#[async_trait]
impl Screen for FeedAndWidgetScreen {
    fn route(&self) -> Route {
        Route::FeedAndWidget
    }

    /// Acquire the page and build both units concurrently
    async fn mount(&mut self) {
        let session = self.session();
        let widget_params = PlacementParams::mid_article_widget();
        let feed_params = PlacementParams::feed_without_video();

        let (widget, feed) = futures::join!(
            self.widget.build(
                session.page(),
                &widget_params,
                Arc::clone(&self.listener)
            ),
            self.feed
                .build(session.page(), &feed_params, Arc::clone(&self.listener)),
        );

        for err in [widget.err(), feed.err()].into_iter().flatten() {
            report_build_error(&self.ctx, &err);
        }
    }

    async fn unmount(&mut self) {
        self.widget.release().await;
        self.feed.release().await;
        self.pages.release_all();
    }

    async fn status_lines(&self) -> Vec<String> {
        let available = |built: bool| if built { "Available" } else { "Not Available" };
        vec![
            format!("Platform: {}", self.ctx.platform),
            format!("Widget Unit: {}", available(self.widget.is_built().await)),
            format!("Feed Unit: {}", available(self.feed.is_built().await)),
        ]
    }
}
