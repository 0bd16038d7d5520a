//! Tester screens
//!
//! Each screen owns its page sessions and unit slots for exactly one mount.
//! Unmounting releases units first, then pages.

mod classic_page;
mod dark_mode;
mod feed_and_widget;
mod global_settings;
mod home;
mod organic_clicks;

pub use classic_page::ClassicPageScreen;
pub use dark_mode::DarkModeScreen;
pub use feed_and_widget::{FeedAndWidgetScreen, UnitTarget};
pub use global_settings::GlobalSettingsScreen;
pub use home::HomeScreen;
pub use organic_clicks::OrganicClicksScreen;

use std::sync::Arc;

use async_trait::async_trait;

use sdk_tester_core::error::CoreError;
use sdk_tester_core::services::ServiceContext;

use crate::config::TesterConfig;

/// Drawer destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    FeedAndWidget,
    ClassicPage,
    OrganicClicks,
    DarkMode,
    GlobalSettings,
}

impl Route {
    /// Drawer order
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::FeedAndWidget,
        Self::ClassicPage,
        Self::OrganicClicks,
        Self::DarkMode,
        Self::GlobalSettings,
    ];

    pub const INITIAL: Self = Self::Home;

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::FeedAndWidget => "Feed & Widget",
            Self::ClassicPage => "TBLClassicPage",
            Self::OrganicClicks => "Organic Clicks",
            Self::DarkMode => "Dark Mode",
            Self::GlobalSettings => "Global Settings",
        }
    }
}

/// A mountable screen
#[async_trait]
pub trait Screen: Send + Sync {
    fn route(&self) -> Route;

    /// Runs when the screen gains focus
    async fn mount(&mut self) {}

    /// Runs when the screen loses focus; releases SDK resources
    async fn unmount(&mut self) {}

    /// Status panel lines
    async fn status_lines(&self) -> Vec<String> {
        Vec::new()
    }
}

/// The one screen the navigator has mounted
pub enum ActiveScreen {
    Home(HomeScreen),
    FeedAndWidget(Box<FeedAndWidgetScreen>),
    ClassicPage(ClassicPageScreen),
    OrganicClicks(OrganicClicksScreen),
    DarkMode(DarkModeScreen),
    GlobalSettings(GlobalSettingsScreen),
}

impl ActiveScreen {
    /// Construct the screen for `route`; nothing touches the SDK until `mount`
    #[must_use]
    pub fn create(route: Route, ctx: &Arc<ServiceContext>, config: &TesterConfig) -> Self {
        let ctx = Arc::clone(ctx);
        match route {
            Route::Home => Self::Home(HomeScreen::new()),
            Route::FeedAndWidget => Self::FeedAndWidget(Box::new(FeedAndWidgetScreen::new(ctx, config))),
            Route::ClassicPage => Self::ClassicPage(ClassicPageScreen::new(ctx, config)),
            Route::OrganicClicks => Self::OrganicClicks(OrganicClicksScreen::new(ctx, config)),
            Route::DarkMode => Self::DarkMode(DarkModeScreen::new(ctx, config)),
            Route::GlobalSettings => Self::GlobalSettings(GlobalSettingsScreen::new(ctx)),
        }
    }

    fn as_screen(&self) -> &dyn Screen {
        match self {
            Self::Home(s) => s,
            Self::FeedAndWidget(s) => s.as_ref(),
            Self::ClassicPage(s) => s,
            Self::OrganicClicks(s) => s,
            Self::DarkMode(s) => s,
            Self::GlobalSettings(s) => s,
        }
    }

    fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            Self::Home(s) => s,
            Self::FeedAndWidget(s) => s.as_mut(),
            Self::ClassicPage(s) => s,
            Self::OrganicClicks(s) => s,
            Self::DarkMode(s) => s,
            Self::GlobalSettings(s) => s,
        }
    }
}

#[async_trait]
impl Screen for ActiveScreen {
    fn route(&self) -> Route {
        self.as_screen().route()
    }

    async fn mount(&mut self) {
        self.as_screen_mut().mount().await;
    }

    async fn unmount(&mut self) {
        self.as_screen_mut().unmount().await;
    }

    async fn status_lines(&self) -> Vec<String> {
        self.as_screen().status_lines().await
    }
}

/// Alert for a failed unit build. Builds discarded by unmount stay silent.
fn report_build_error(ctx: &ServiceContext, err: &CoreError) {
    if matches!(err, CoreError::StaleBuild(_)) {
        log::debug!("{err}");
        return;
    }
    ctx.report_error("Failed to create unit", err);
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}
