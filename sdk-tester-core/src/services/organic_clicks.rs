//! Organic click handling toggle

use sdk_tester_plugin::ClassicUnit;

use crate::error::CoreError;

/// Whether the SDK should open organic (non-sponsored) clicks itself
///
/// The local flag always flips; the unit only hears about it once it exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrganicClicksToggle {
    enabled: bool,
}

impl Default for OrganicClicksToggle {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl OrganicClicksToggle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the flag and forward it to `unit` when present. Returns the new state.
    pub fn toggle(&mut self, unit: Option<&dyn ClassicUnit>) -> bool {
        self.enabled = !self.enabled;
        match unit {
            Some(unit) => {
                if let Err(e) = unit.set_should_handle_organic_clicks(self.enabled) {
                    CoreError::from(e).log("Failed to forward organic click handling");
                }
            }
            None => log::debug!("Organic clicks set to {} before unit was built", self.enabled),
        }
        self.enabled
    }
}
