//! Global SDK settings screen

use std::sync::Arc;

use async_trait::async_trait;

use sdk_tester_core::services::ServiceContext;
use sdk_tester_core::types::{ApplySummary, GlobalSettingsForm, Platform, PropertyToggle};

use super::{Route, Screen};

pub const SETTINGS_APPLY_ERROR: &str = "Failed to apply settings";

pub struct GlobalSettingsScreen {
    ctx: Arc<ServiceContext>,
    pub form: GlobalSettingsForm,
}

impl GlobalSettingsScreen {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            ctx,
            form: GlobalSettingsForm::new(),
        }
    }

    /// iOS toggles are only rendered on iOS
    #[must_use]
    pub fn visible_ios_properties(&self) -> &[PropertyToggle] {
        if self.ctx.platform == Platform::Ios {
            &self.form.ios
        } else {
            &[]
        }
    }

    /// "Apply Settings". The outcome is reported through the notifier.
    pub fn apply(&self) -> Option<ApplySummary> {
        match self.ctx.global_settings_service().apply(&self.form) {
            Ok(summary) => {
                self.ctx.notifier.success(&summary.message());
                Some(summary)
            }
            Err(e) => {
                e.log(SETTINGS_APPLY_ERROR);
                self.ctx.notifier.error(SETTINGS_APPLY_ERROR);
                None
            }
        }
    }
}

#[async_trait]
impl Screen for GlobalSettingsScreen {
    fn route(&self) -> Route {
        Route::GlobalSettings
    }

    async fn status_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Log Level: {}", self.form.log_level)];
        if let Some(preview) = self.form.custom_property_preview() {
            lines.push(format!("Preview: {preview}"));
        }
        lines
    }
}
