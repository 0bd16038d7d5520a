//! Drawer navigation with unmount-on-blur

use std::sync::Arc;

use sdk_tester_core::services::ServiceContext;

use crate::config::TesterConfig;
use crate::screens::{ActiveScreen, Route, Screen};

/// Keeps at most one screen mounted
///
/// Navigating away unmounts the current screen before the next one mounts, so
/// no two screens ever hold SDK pages at the same time.
pub struct DrawerNavigator {
    ctx: Arc<ServiceContext>,
    config: TesterConfig,
    current: Option<ActiveScreen>,
}

impl DrawerNavigator {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, config: TesterConfig) -> Self {
        Self {
            ctx,
            config,
            current: None,
        }
    }

    /// Mount the initial route
    pub async fn start(&mut self) {
        self.navigate(Route::INITIAL).await;
    }

    /// Focus `route`. Re-selecting the focused route keeps the mounted instance.
    pub async fn navigate(&mut self, route: Route) {
        if self.current_route() == Some(route) {
            return;
        }

        if let Some(mut previous) = self.current.take() {
            log::debug!("Unmounting {}", previous.route().title());
            previous.unmount().await;
        }

        let mut next = ActiveScreen::create(route, &self.ctx, &self.config);
        log::info!("Navigating to {}", route.title());
        next.mount().await;
        self.current = Some(next);
    }

    /// Unmount whatever is focused
    pub async fn shutdown(&mut self) {
        if let Some(mut screen) = self.current.take() {
            screen.unmount().await;
        }
    }

    #[must_use]
    pub fn current_route(&self) -> Option<Route> {
        self.current.as_ref().map(Screen::route)
    }

    #[must_use]
    pub fn current(&self) -> Option<&ActiveScreen> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut ActiveScreen> {
        self.current.as_mut()
    }
}
