//! Settings propagation from a form onto page and unit handles
//!
//! Each field is applied independently: a blank or unparsable value skips its
//! setter, a setter error is logged and the remaining setters still run.

use sdk_tester_plugin::{ClassicPage, ClassicUnit, Platform};

use crate::error::CoreError;
use crate::types::{AppliedSettings, SettingField, SettingsForm};
use crate::utils::parse::non_blank;

/// A handle settings can be pushed onto
trait SettingsTarget {
    const KIND: &'static str;
    const FIELDS: &'static [SettingField];

    /// Apply one field. `None` when the form holds nothing to send for it.
    fn apply_field(
        &self,
        form: &SettingsForm,
        field: SettingField,
    ) -> Option<sdk_tester_plugin::Result<()>>;
}

impl SettingsTarget for dyn ClassicPage + '_ {
    const KIND: &'static str = "page";
    const FIELDS: &'static [SettingField] = &SettingField::PAGE_FIELDS;

    fn apply_field(
        &self,
        form: &SettingsForm,
        field: SettingField,
    ) -> Option<sdk_tester_plugin::Result<()>> {
        match field {
            SettingField::Publisher => non_blank(&form.publisher).map(|v| self.set_publisher(v)),
            SettingField::PageType => non_blank(&form.page_type).map(|v| self.set_page_type(v)),
            SettingField::TargetType => {
                non_blank(&form.target_type).map(|v| self.set_target_type(v))
            }
            SettingField::PageUrl => non_blank(&form.page_url).map(|v| self.set_page_url(v)),
            SettingField::SerialFetchTimeout => form
                .serial_fetch_timeout_ms()
                .map(|ms| self.set_serial_fetch_timeout(ms)),
            SettingField::ExtraProperties => form
                .extra_properties()
                .map(|props| self.set_page_extra_properties(&props)),
            _ => None,
        }
    }
}

impl SettingsTarget for dyn ClassicUnit + '_ {
    const KIND: &'static str = "unit";
    const FIELDS: &'static [SettingField] = &SettingField::UNIT_FIELDS;

    fn apply_field(
        &self,
        form: &SettingsForm,
        field: SettingField,
    ) -> Option<sdk_tester_plugin::Result<()>> {
        match field {
            SettingField::Publisher => {
                non_blank(&form.publisher).map(|v| self.set_publisher_name(v))
            }
            SettingField::PageType => non_blank(&form.page_type).map(|v| self.set_page_type(v)),
            SettingField::TargetType => {
                non_blank(&form.target_type).map(|v| self.set_target_type(v))
            }
            SettingField::PageUrl => non_blank(&form.page_url).map(|v| self.set_page_url(v)),
            SettingField::ExtraProperties => form
                .extra_properties()
                .map(|props| self.set_unit_extra_properties(&props)),
            _ => None,
        }
    }
}

/// Pushes settings forms onto SDK handles for one platform
#[derive(Debug, Clone, Copy)]
pub struct SettingsService {
    platform: Platform,
}

impl SettingsService {
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    #[must_use]
    pub fn platform(self) -> Platform {
        self.platform
    }

    /// Apply a page settings form ("Apply Page Settings")
    pub fn apply_page_settings(self, page: &dyn ClassicPage, form: &SettingsForm) -> AppliedSettings {
        self.apply(page, form)
    }

    /// Apply a unit settings form ("Apply Settings")
    pub fn apply_unit_settings(self, unit: &dyn ClassicUnit, form: &SettingsForm) -> AppliedSettings {
        self.apply(unit, form)
    }

    fn apply<T: SettingsTarget + ?Sized>(self, target: &T, form: &SettingsForm) -> AppliedSettings {
        let mut outcome = AppliedSettings::default();

        for &field in T::FIELDS {
            if !field.is_visible_on(self.platform) {
                outcome.skipped.push(field);
                continue;
            }
            match target.apply_field(form, field) {
                None => outcome.skipped.push(field),
                Some(Ok(())) => {
                    log::debug!("Applied {} {} on {}", T::KIND, field.label(), self.platform);
                    outcome.applied.push(field);
                }
                Some(Err(e)) => {
                    let err = CoreError::from(e);
                    err.log(&format!("Failed to apply {} {}", T::KIND, field.label()));
                    outcome.failed.push((field, err.to_string()));
                }
            }
        }

        log::info!(
            "Applied {} settings: {} applied, {} skipped, {} failed",
            T::KIND,
            outcome.applied.len(),
            outcome.skipped.len(),
            outcome.failed.len()
        );
        outcome
    }
}
