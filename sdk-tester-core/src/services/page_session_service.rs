//! Page session management
//!
//! One `PageSessionManager` lives as long as one screen instance. It hands out a
//! single page per key and guarantees each page is released exactly once.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use sdk_tester_plugin::{AdSdk, ClassicPage, PageId};

use crate::error::CoreError;
use crate::types::PageKey;

/// Result of releasing a page session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// `remove_classic_page` was called and succeeded
    Released(PageId),
    /// The SDK never assigned an id, nothing to release
    NeverRealized,
    /// An earlier call already released the session
    AlreadyReleased,
    /// The SDK call failed; the error was logged and swallowed
    Failed(String),
}

/// A classic page owned by one screen
pub struct PageSession {
    key: PageKey,
    page: Arc<dyn ClassicPage>,
    sdk: Arc<dyn AdSdk>,
    released: AtomicBool,
}

impl PageSession {
    #[must_use]
    pub fn key(&self) -> &PageKey {
        &self.key
    }

    /// The underlying page, for setters and unit builds
    #[must_use]
    pub fn page(&self) -> &dyn ClassicPage {
        self.page.as_ref()
    }

    #[must_use]
    pub fn page_id(&self) -> Option<PageId> {
        self.page.page_id()
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }

    /// Release the page on the SDK side
    ///
    /// Runs at most once. Pages without an assigned id are skipped, and SDK failures
    /// are logged instead of returned so navigation never fails on cleanup.
    pub fn release(&self) -> ReleaseOutcome {
        if self.released.swap(true, Ordering::SeqCst) {
            return ReleaseOutcome::AlreadyReleased;
        }

        let Some(page_id) = self.page.page_id().filter(PageId::is_assigned) else {
            log::debug!("Page {} was never realized, skipping release", self.key);
            return ReleaseOutcome::NeverRealized;
        };

        match self.sdk.remove_classic_page(&page_id) {
            Ok(()) => {
                log::info!("Released page {page_id} for {}", self.key);
                ReleaseOutcome::Released(page_id)
            }
            Err(e) => {
                let err = CoreError::from(e);
                err.log(&format!("Failed to release page {page_id}"));
                ReleaseOutcome::Failed(err.to_string())
            }
        }
    }
}

impl Drop for PageSession {
    fn drop(&mut self) {
        if !self.is_released() {
            self.release();
        }
    }
}

/// Per-screen page memo
pub struct PageSessionManager {
    sdk: Arc<dyn AdSdk>,
    sessions: Mutex<HashMap<PageKey, Arc<PageSession>>>,
}

impl PageSessionManager {
    /// Create a manager for one screen instance
    #[must_use]
    pub fn new(sdk: Arc<dyn AdSdk>) -> Self {
        Self {
            sdk,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Get the page for `(page_url, page_type)`, creating it on first request
    ///
    /// Repeated calls with the same key return the same session and never reach
    /// the SDK again.
    pub fn acquire(&self, page_url: &str, page_type: &str) -> Arc<PageSession> {
        let key = PageKey::new(page_url, page_type);
        let mut sessions = self
            .sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(session) = sessions.get(&key) {
            return Arc::clone(session);
        }

        log::info!("Acquiring page for {key}");
        let session = Arc::new(PageSession {
            page: self.sdk.get_classic_page(page_url, page_type),
            sdk: Arc::clone(&self.sdk),
            key: key.clone(),
            released: AtomicBool::new(false),
        });
        sessions.insert(key, Arc::clone(&session));
        session
    }

    /// Number of pages acquired and not yet released through this manager
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Release every page this manager handed out. Called on unmount.
    pub fn release_all(&self) -> Vec<ReleaseOutcome> {
        let drained: Vec<Arc<PageSession>> = self
            .sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain()
            .map(|(_, session)| session)
            .collect();

        drained.iter().map(|session| session.release()).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::test_utils::{initialized_sdk, TEST_PAGE_TYPE, TEST_PAGE_URL};
    use sdk_tester_plugin::SdkCall;

    fn get_page_calls(sdk: &sdk_tester_plugin::SimulatedSdk) -> usize {
        sdk.count_calls(|c| matches!(c, SdkCall::GetClassicPage { .. }))
    }

    fn remove_calls(sdk: &sdk_tester_plugin::SimulatedSdk) -> usize {
        sdk.count_calls(|c| matches!(c, SdkCall::RemoveClassicPage { .. }))
    }

    #[test]
    fn acquire_is_memoized_per_key() {
        let sdk = initialized_sdk();
        let manager = PageSessionManager::new(Arc::new(sdk.clone()));

        let first = manager.acquire(TEST_PAGE_URL, TEST_PAGE_TYPE);
        let second = manager.acquire(TEST_PAGE_URL, TEST_PAGE_TYPE);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(get_page_calls(&sdk), 1);
        assert_eq!(manager.session_count(), 1);

        let other = manager.acquire(TEST_PAGE_URL, "home");
        assert!(!Arc::ptr_eq(&first, &other));
        assert_eq!(get_page_calls(&sdk), 2);
    }

    #[test]
    fn unrealized_page_is_not_removed() {
        let sdk = initialized_sdk();
        let manager = PageSessionManager::new(Arc::new(sdk.clone()));
        manager.acquire(TEST_PAGE_URL, TEST_PAGE_TYPE);

        assert_eq!(manager.release_all(), vec![ReleaseOutcome::NeverRealized]);
        assert_eq!(remove_calls(&sdk), 0);
    }

    #[test]
    fn realized_page_is_removed_exactly_once() {
        let sdk = initialized_sdk();
        let manager = PageSessionManager::new(Arc::new(sdk.clone()));
        let session = manager.acquire(TEST_PAGE_URL, TEST_PAGE_TYPE);
        session.page().refresh().unwrap();
        let page_id = session.page_id().unwrap();

        assert_eq!(
            manager.release_all(),
            vec![ReleaseOutcome::Released(page_id)]
        );
        assert_eq!(session.release(), ReleaseOutcome::AlreadyReleased);
        drop(session);

        assert_eq!(remove_calls(&sdk), 1);
        assert_eq!(sdk.live_page_count(), 0);
    }

    #[test]
    fn release_failure_is_swallowed() {
        let sdk = initialized_sdk();
        sdk.fail_operation("removeClassicPage");
        let manager = PageSessionManager::new(Arc::new(sdk.clone()));
        let session = manager.acquire(TEST_PAGE_URL, TEST_PAGE_TYPE);
        session.page().reset().unwrap();

        let outcomes = manager.release_all();
        assert!(matches!(outcomes.as_slice(), [ReleaseOutcome::Failed(_)]));
        assert!(session.is_released());
    }

    #[test]
    fn dropping_the_manager_releases_pages() {
        let sdk = initialized_sdk();
        {
            let manager = PageSessionManager::new(Arc::new(sdk.clone()));
            let session = manager.acquire(TEST_PAGE_URL, TEST_PAGE_TYPE);
            session.page().fetch_all_units_content().unwrap();
        }
        assert_eq!(remove_calls(&sdk), 1);
        assert_eq!(sdk.live_page_count(), 0);
    }
}
