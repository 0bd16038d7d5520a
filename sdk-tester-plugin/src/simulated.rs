//! In-process SDK backend.
//!
//! Behaves like the native plugin closely enough to drive the tester without a
//! device: pages get an id lazily on first use, builds resolve asynchronously, and
//! every successful call is appended to a call log that tests can inspect.
//! Failures can be injected per operation name (`"setPublisher"`, `"buildUnit"`, ...).

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::error::{PluginError, Result};
use crate::traits::{AdSdk, ClassicListener, ClassicPage, ClassicUnit};
use crate::types::{ExtraProperties, PageId, PlacementParams, SdkLogLevel};

/// A call that reached the simulated SDK.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkCall {
    Init { publisher: String },
    GetClassicPage { page_url: String, page_type: String },
    RemoveClassicPage { page_id: PageId },
    SetLogLevel(SdkLogLevel),
    SetGlobalExtraProperties(ExtraProperties),
    Page { page_id: PageId, call: PageCall },
    Unit { unit_id: u64, call: UnitCall },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCall {
    BuildUnit { placement: String },
    SetPublisher(String),
    SetPageType(String),
    SetTargetType(String),
    SetPageUrl(String),
    SetSerialFetchTimeout(i64),
    SetPageExtraProperties(ExtraProperties),
    FetchAllUnitsContent,
    Refresh,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitCall {
    SetPublisherName(String),
    SetPageType(String),
    SetTargetType(String),
    SetPageUrl(String),
    SetUnitExtraProperties(ExtraProperties),
    SetShouldHandleOrganicClicks(bool),
    FetchContent,
    Refresh,
    Reset,
    Release,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Default)]
struct SimState {
    calls: Mutex<Vec<SdkCall>>,
    initialized: AtomicBool,
    pending_build_failures: AtomicUsize,
    failing_operations: Mutex<HashSet<String>>,
    live_pages: Mutex<HashSet<PageId>>,
    build_gate: Mutex<Option<Arc<Notify>>>,
    next_unit_id: AtomicU64,
}

impl SimState {
    fn check(&self, operation: &str) -> Result<()> {
        if lock(&self.failing_operations).contains(operation) {
            return Err(PluginError::bridge(operation, "simulated failure"));
        }
        Ok(())
    }

    fn record(&self, call: SdkCall) {
        log::debug!("Simulated SDK call: {call:?}");
        lock(&self.calls).push(call);
    }
}

/// Simulated SDK. Cloning shares the same state and call log.
#[derive(Clone, Default)]
pub struct SimulatedSdk {
    state: Arc<SimState>,
}

impl SimulatedSdk {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every recorded call, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<SdkCall> {
        lock(&self.state.calls).clone()
    }

    /// Number of recorded calls matching `predicate`.
    pub fn count_calls(&self, predicate: impl Fn(&SdkCall) -> bool) -> usize {
        lock(&self.state.calls).iter().filter(|c| predicate(c)).count()
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state.initialized.load(Ordering::SeqCst)
    }

    /// Reject the next `count` unit builds with `BuildRejected`.
    pub fn fail_next_builds(&self, count: usize) {
        self.state
            .pending_build_failures
            .store(count, Ordering::SeqCst);
    }

    /// Make every call to `operation` fail with a bridge error until cleared.
    pub fn fail_operation(&self, operation: &str) {
        lock(&self.state.failing_operations).insert(operation.to_string());
    }

    pub fn clear_failures(&self) {
        lock(&self.state.failing_operations).clear();
        self.state.pending_build_failures.store(0, Ordering::SeqCst);
    }

    /// Hold every subsequent build until the returned `Notify` is signalled.
    ///
    /// Each `notify_one` lets one pending build resolve.
    #[must_use]
    pub fn gate_builds(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *lock(&self.state.build_gate) = Some(Arc::clone(&gate));
        gate
    }

    /// Pages that were assigned an id and not removed yet.
    #[must_use]
    pub fn live_page_count(&self) -> usize {
        lock(&self.state.live_pages).len()
    }
}

impl AdSdk for SimulatedSdk {
    fn init(&self, publisher: &str) -> Result<()> {
        if publisher.trim().is_empty() {
            return Err(PluginError::InvalidArgument {
                param: "publisher".to_string(),
                detail: "must not be empty".to_string(),
            });
        }
        self.state.check("init")?;
        self.state.initialized.store(true, Ordering::SeqCst);
        self.state.record(SdkCall::Init {
            publisher: publisher.to_string(),
        });
        Ok(())
    }

    fn get_classic_page(&self, page_url: &str, page_type: &str) -> Arc<dyn ClassicPage> {
        self.state.record(SdkCall::GetClassicPage {
            page_url: page_url.to_string(),
            page_type: page_type.to_string(),
        });
        Arc::new(SimulatedPage {
            state: Arc::clone(&self.state),
            page_id: OnceLock::new(),
        })
    }

    fn remove_classic_page(&self, page_id: &PageId) -> Result<()> {
        self.state.check("removeClassicPage")?;
        if !lock(&self.state.live_pages).remove(page_id) {
            return Err(PluginError::PageNotFound {
                page_id: page_id.to_string(),
            });
        }
        self.state.record(SdkCall::RemoveClassicPage {
            page_id: page_id.clone(),
        });
        Ok(())
    }

    fn set_log_level(&self, level: SdkLogLevel) -> Result<()> {
        self.state.check("setLogLevel")?;
        self.state.record(SdkCall::SetLogLevel(level));
        Ok(())
    }

    fn set_global_extra_properties(&self, properties: &ExtraProperties) -> Result<()> {
        self.state.check("setGlobalExtraProperties")?;
        self.state
            .record(SdkCall::SetGlobalExtraProperties(properties.clone()));
        Ok(())
    }
}

struct SimulatedPage {
    state: Arc<SimState>,
    page_id: OnceLock<PageId>,
}

impl SimulatedPage {
    /// Assign the page id on first real use.
    fn realize(&self) -> PageId {
        self.page_id
            .get_or_init(|| {
                let id = PageId(uuid::Uuid::new_v4().to_string());
                lock(&self.state.live_pages).insert(id.clone());
                id
            })
            .clone()
    }

    fn call(&self, operation: &str, call: PageCall) -> Result<()> {
        let page_id = self.realize();
        self.state.check(operation)?;
        self.state.record(SdkCall::Page { page_id, call });
        Ok(())
    }
}

#[async_trait]
impl ClassicPage for SimulatedPage {
    fn page_id(&self) -> Option<PageId> {
        self.page_id.get().cloned()
    }

    async fn build_unit(
        &self,
        params: &PlacementParams,
        listener: Arc<dyn ClassicListener>,
    ) -> Result<Arc<dyn ClassicUnit>> {
        let page_id = self.realize();
        if !self.state.initialized.load(Ordering::SeqCst) {
            return Err(PluginError::NotInitialized);
        }

        let gate = lock(&self.state.build_gate).clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let rejected = self
            .state
            .pending_build_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if rejected {
            return Err(PluginError::BuildRejected {
                placement: params.placement.clone(),
                reason: "simulated no fill".to_string(),
            });
        }
        self.state.check("buildUnit")?;

        self.state.record(SdkCall::Page {
            page_id,
            call: PageCall::BuildUnit {
                placement: params.placement.clone(),
            },
        });
        Ok(Arc::new(SimulatedUnit {
            state: Arc::clone(&self.state),
            id: self.state.next_unit_id.fetch_add(1, Ordering::SeqCst),
            params: params.clone(),
            listener,
        }))
    }

    fn set_publisher(&self, publisher: &str) -> Result<()> {
        self.call("setPublisher", PageCall::SetPublisher(publisher.to_string()))
    }

    fn set_page_type(&self, page_type: &str) -> Result<()> {
        self.call("setPageType", PageCall::SetPageType(page_type.to_string()))
    }

    fn set_target_type(&self, target_type: &str) -> Result<()> {
        self.call(
            "setTargetType",
            PageCall::SetTargetType(target_type.to_string()),
        )
    }

    fn set_page_url(&self, page_url: &str) -> Result<()> {
        self.call("setPageUrl", PageCall::SetPageUrl(page_url.to_string()))
    }

    fn set_serial_fetch_timeout(&self, timeout_ms: i64) -> Result<()> {
        self.call(
            "setSerialFetchTimeout",
            PageCall::SetSerialFetchTimeout(timeout_ms),
        )
    }

    fn set_page_extra_properties(&self, properties: &ExtraProperties) -> Result<()> {
        self.call(
            "setPageExtraProperties",
            PageCall::SetPageExtraProperties(properties.clone()),
        )
    }

    fn fetch_all_units_content(&self) -> Result<()> {
        self.call("fetchAllUnitsContent", PageCall::FetchAllUnitsContent)
    }

    fn refresh(&self) -> Result<()> {
        self.call("refresh", PageCall::Refresh)
    }

    fn reset(&self) -> Result<()> {
        self.call("reset", PageCall::Reset)
    }
}

struct SimulatedUnit {
    state: Arc<SimState>,
    id: u64,
    params: PlacementParams,
    listener: Arc<dyn ClassicListener>,
}

impl SimulatedUnit {
    fn call(&self, operation: &str, call: UnitCall) -> Result<()> {
        self.state.check(operation)?;
        self.state.record(SdkCall::Unit {
            unit_id: self.id,
            call,
        });
        Ok(())
    }
}

impl ClassicUnit for SimulatedUnit {
    fn placement(&self) -> &PlacementParams {
        &self.params
    }

    fn set_publisher_name(&self, publisher: &str) -> Result<()> {
        self.call(
            "setPublisherName",
            UnitCall::SetPublisherName(publisher.to_string()),
        )
    }

    fn set_page_type(&self, page_type: &str) -> Result<()> {
        self.call("setPageType", UnitCall::SetPageType(page_type.to_string()))
    }

    fn set_target_type(&self, target_type: &str) -> Result<()> {
        self.call(
            "setTargetType",
            UnitCall::SetTargetType(target_type.to_string()),
        )
    }

    fn set_page_url(&self, page_url: &str) -> Result<()> {
        self.call("setPageUrl", UnitCall::SetPageUrl(page_url.to_string()))
    }

    fn set_unit_extra_properties(&self, properties: &ExtraProperties) -> Result<()> {
        self.call(
            "setUnitExtraProperties",
            UnitCall::SetUnitExtraProperties(properties.clone()),
        )
    }

    fn set_should_handle_organic_clicks(&self, enabled: bool) -> Result<()> {
        self.call(
            "setShouldHandleOrganicClicks",
            UnitCall::SetShouldHandleOrganicClicks(enabled),
        )
    }

    fn fetch_content(&self) -> Result<()> {
        self.call("fetchContent", UnitCall::FetchContent)?;
        self.listener.on_ad_receive_success();
        Ok(())
    }

    fn refresh(&self) -> Result<()> {
        self.call("refresh", UnitCall::Refresh)
    }

    fn reset(&self) -> Result<()> {
        self.call("reset", UnitCall::Reset)
    }

    fn release(&self) -> Result<()> {
        self.call("releaseUnit", UnitCall::Release)
    }
}
