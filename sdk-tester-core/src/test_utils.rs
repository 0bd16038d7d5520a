//! Test helpers
//!
//! Factories over `SimulatedSdk` and a notifier that records alerts.

use std::sync::{Arc, Mutex};

use sdk_tester_plugin::{AdSdk, PageCall, Platform, SdkCall, SimulatedSdk, UnitCall};

use crate::services::ServiceContext;
use crate::traits::Notifier;

pub const TEST_PAGE_URL: &str = "https://www.example.com";
pub const TEST_PAGE_TYPE: &str = "article";

/// Simulated SDK that already went through `init`
pub fn initialized_sdk() -> SimulatedSdk {
    let sdk = SimulatedSdk::new();
    sdk.init("sdk-tester-rnd").unwrap();
    sdk
}

/// Every page-level call, in order, across all pages
pub fn page_calls(sdk: &SimulatedSdk) -> Vec<PageCall> {
    sdk.calls()
        .into_iter()
        .filter_map(|c| match c {
            SdkCall::Page { call, .. } => Some(call),
            _ => None,
        })
        .collect()
}

/// Every unit-level call, in order, across all units
pub fn unit_calls(sdk: &SimulatedSdk) -> Vec<UnitCall> {
    sdk.calls()
        .into_iter()
        .filter_map(|c| match c {
            SdkCall::Unit { call, .. } => Some(call),
            _ => None,
        })
        .collect()
}

// ===== RecordingNotifier =====

#[derive(Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<(String, String)> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, title: &str, message: &str) {
        self.alerts
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
    }
}

/// Context over a fresh initialized SDK, returning the handles tests inspect
pub fn create_test_context(
    platform: Platform,
) -> (ServiceContext, SimulatedSdk, Arc<RecordingNotifier>) {
    let sdk = initialized_sdk();
    let notifier = Arc::new(RecordingNotifier::default());
    let ctx = ServiceContext::new(Arc::new(sdk.clone()), notifier.clone(), platform);
    (ctx, sdk, notifier)
}
