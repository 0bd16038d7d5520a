//! Unit build state machine
//!
//! A `UnitSlot` tracks one placement on one page:
//! `NotBuilt -> Building -> {Built, BuildFailed}`, retry from `BuildFailed`,
//! and `Released` once the owning screen unmounts.
//!
//! The lock is never held across the SDK await. Each build captures a generation;
//! `release` bumps it, so a build that resolves after unmount is discarded instead
//! of resurrecting the slot.

use std::sync::Arc;

use tokio::sync::RwLock;

use sdk_tester_plugin::{ClassicListener, ClassicPage, ClassicUnit, PlacementParams};

use crate::error::{CoreError, CoreResult};
use crate::types::UnitStatus;

struct SlotState {
    status: UnitStatus,
    unit: Option<Arc<dyn ClassicUnit>>,
    generation: u64,
}

/// Shared handle to one unit slot. Clones observe the same state.
#[derive(Clone)]
pub struct UnitSlot {
    label: Arc<str>,
    state: Arc<RwLock<SlotState>>,
}

impl UnitSlot {
    /// Create an empty slot; `label` names it in logs and errors (e.g. `Widget`)
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self {
            label: Arc::from(label),
            state: Arc::new(RwLock::new(SlotState {
                status: UnitStatus::NotBuilt,
                unit: None,
                generation: 0,
            })),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub async fn status(&self) -> UnitStatus {
        self.state.read().await.status.clone()
    }

    /// The built unit, `None` in every other state
    pub async fn unit(&self) -> Option<Arc<dyn ClassicUnit>> {
        self.state.read().await.unit.clone()
    }

    pub async fn is_built(&self) -> bool {
        self.state.read().await.status == UnitStatus::Built
    }

    /// Whether the "create unit" control should be enabled
    pub async fn can_build(&self) -> bool {
        self.state.read().await.status.can_build()
    }

    /// Build the unit for `params` on `page`
    ///
    /// Rejected while a build is pending, once built, and after release. A failed
    /// build leaves the slot in `BuildFailed` so the caller can retry.
    pub async fn build(
        &self,
        page: &dyn ClassicPage,
        params: &PlacementParams,
        listener: Arc<dyn ClassicListener>,
    ) -> CoreResult<Arc<dyn ClassicUnit>> {
        let generation = {
            let mut state = self.state.write().await;
            match &state.status {
                UnitStatus::Building => return Err(CoreError::BuildInFlight(self.label.to_string())),
                UnitStatus::Built => return Err(CoreError::AlreadyBuilt(self.label.to_string())),
                UnitStatus::Released => return Err(CoreError::SlotReleased(self.label.to_string())),
                UnitStatus::NotBuilt | UnitStatus::BuildFailed(_) => {}
            }
            state.status = UnitStatus::Building;
            state.generation += 1;
            state.generation
        };

        log::info!(
            "Building {} unit: {} / {}",
            self.label,
            params.placement,
            params.mode
        );
        let result = page.build_unit(params, listener).await;

        let mut state = self.state.write().await;
        if state.generation != generation {
            drop(state);
            log::debug!("{} unit build resolved after release, discarding", self.label);
            if let Ok(unit) = result {
                if let Err(e) = unit.release() {
                    log::warn!("Failed to release discarded {} unit: {e}", self.label);
                }
            }
            return Err(CoreError::StaleBuild(self.label.to_string()));
        }

        match result {
            Ok(unit) => {
                state.status = UnitStatus::Built;
                state.unit = Some(Arc::clone(&unit));
                log::info!("{} unit built", self.label);
                Ok(unit)
            }
            Err(e) => {
                state.status = UnitStatus::BuildFailed(e.to_string());
                let err = CoreError::from(e);
                err.log(&format!("Failed to build {} unit", self.label));
                Err(err)
            }
        }
    }

    /// Run `action` against the unit if it is built
    ///
    /// Returns `false` without calling anything when the unit is absent. SDK errors
    /// are logged, not returned.
    pub async fn with_unit<F>(&self, operation: &str, action: F) -> bool
    where
        F: FnOnce(&dyn ClassicUnit) -> sdk_tester_plugin::Result<()>,
    {
        let Some(unit) = self.unit().await else {
            log::debug!("{operation} skipped, {} unit not built", self.label);
            return false;
        };
        if let Err(e) = action(unit.as_ref()) {
            CoreError::from(e).log(&format!("{} unit {operation} failed", self.label));
        }
        true
    }

    /// Tear the slot down. Pending builds are discarded when they resolve.
    pub async fn release(&self) {
        let unit = {
            let mut state = self.state.write().await;
            state.generation += 1;
            state.status = UnitStatus::Released;
            state.unit.take()
        };

        if let Some(unit) = unit {
            match unit.release() {
                Ok(()) => log::debug!("Released {} unit", self.label),
                Err(e) => log::warn!("Failed to release {} unit: {e}", self.label),
            }
        }
    }
}
