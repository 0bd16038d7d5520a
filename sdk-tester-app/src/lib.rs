//! Platform-agnostic application layer for the ad SDK tester.
//!
//! Provides `AppState` (service container), `AppStateBuilder` (adapter injection),
//! `StartupHooks` (host callbacks around SDK init), the tester screens, and the
//! drawer navigator that mounts them one at a time.

pub mod config;
pub mod navigator;
pub mod screens;

pub use config::TesterConfig;
pub use navigator::DrawerNavigator;
pub use screens::{ActiveScreen, Route, Screen};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sdk_tester_core::error::{CoreError, CoreResult};
use sdk_tester_core::services::ServiceContext;
use sdk_tester_core::traits::{AdSdk, Notifier};

/// Host-specific hooks for the startup sequence.
///
/// Use `NoopStartupHooks` when the host has nothing to do.
#[async_trait::async_trait]
pub trait StartupHooks: Send + Sync {
    /// Called once the SDK accepted `init`.
    async fn on_sdk_initialized(&self, _publisher: &str) {}

    /// Called when `init` failed; the error is also returned from `run_startup`.
    async fn on_sdk_init_failed(&self, _error: &CoreError) {}
}

/// No-op startup hooks.
pub struct NoopStartupHooks;

#[async_trait::async_trait]
impl StartupHooks for NoopStartupHooks {}

/// Platform-agnostic application state.
///
/// Every host constructs this once at startup via `AppStateBuilder`.
pub struct AppState {
    /// Service context (SDK binding, notifier, platform)
    pub ctx: Arc<ServiceContext>,
    /// Configuration the state was built with
    pub config: TesterConfig,
    sdk_initialized: AtomicBool,
}

impl AppState {
    /// Initialize the SDK with the configured publisher.
    ///
    /// Runs once per process; later calls return `Ok(())` without touching the SDK.
    /// A failed init can be retried.
    pub async fn run_startup(&self, hooks: &dyn StartupHooks) -> CoreResult<()> {
        if self.sdk_initialized.swap(true, Ordering::SeqCst) {
            log::debug!("SDK already initialized, skipping startup");
            return Ok(());
        }

        let publisher = self.config.publisher.as_str();
        if let Err(e) = self.ctx.sdk.init(publisher) {
            self.sdk_initialized.store(false, Ordering::SeqCst);
            let err = CoreError::from(e);
            log::error!("SDK init failed for publisher {publisher}: {err}");
            hooks.on_sdk_init_failed(&err).await;
            return Err(err);
        }
        log::info!("SDK initialized for publisher {publisher}");

        if let Err(e) = self.ctx.sdk.set_log_level(self.config.log_level) {
            log::warn!("Failed to apply configured log level: {e}");
        }

        hooks.on_sdk_initialized(publisher).await;
        Ok(())
    }

    #[must_use]
    pub fn is_sdk_initialized(&self) -> bool {
        self.sdk_initialized.load(Ordering::SeqCst)
    }

    /// Navigator bound to this state. Call `start` on it to mount the home screen.
    #[must_use]
    pub fn navigator(&self) -> DrawerNavigator {
        DrawerNavigator::new(Arc::clone(&self.ctx), self.config.clone())
    }
}

/// Builder for constructing `AppState` with host-specific adapters.
///
/// # Required adapters
/// - `sdk`: the native SDK binding (or `SimulatedSdk`)
/// - `notifier`: how alerts reach the user
///
/// # Optional
/// - `config`: defaults to `TesterConfig::default()`
pub struct AppStateBuilder {
    sdk: Option<Arc<dyn AdSdk>>,
    notifier: Option<Arc<dyn Notifier>>,
    config: Option<TesterConfig>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sdk: None,
            notifier: None,
            config: None,
        }
    }

    #[must_use]
    pub fn sdk(mut self, sdk: Arc<dyn AdSdk>) -> Self {
        self.sdk = Some(sdk);
        self
    }

    #[must_use]
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    #[must_use]
    pub fn config(mut self, config: TesterConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if required adapters are missing.
    pub fn build(self) -> CoreResult<AppState> {
        let sdk = self
            .sdk
            .ok_or_else(|| CoreError::ValidationError("sdk is required".to_string()))?;
        let notifier = self
            .notifier
            .ok_or_else(|| CoreError::ValidationError("notifier is required".to_string()))?;
        let config = self.config.unwrap_or_default();

        let ctx = Arc::new(ServiceContext::new(sdk, notifier, config.platform));

        Ok(AppState {
            ctx,
            config,
            sdk_initialized: AtomicBool::new(false),
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
