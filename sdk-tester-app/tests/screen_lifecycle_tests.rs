#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests driving screens and the navigator against `SimulatedSdk`.

use std::sync::{Arc, Mutex};

use sdk_tester_app::screens::{
    ClassicPageScreen, DarkModeScreen, FeedAndWidgetScreen, GlobalSettingsScreen,
    OrganicClicksScreen, UnitTarget,
};
use sdk_tester_app::{ActiveScreen, DrawerNavigator, Route, Screen, TesterConfig};
use sdk_tester_core::services::ServiceContext;
use sdk_tester_core::traits::Notifier;
use sdk_tester_core::types::{ExtraProperties, FeedItem, Platform, SettingField, UnitStatus};
use sdk_tester_plugin::{AdSdk, PageCall, SdkCall, SimulatedSdk, UnitCall};

// ===== Test Harness =====

#[derive(Default)]
struct RecordingNotifier {
    alerts: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    fn alerts(&self) -> Vec<(String, String)> {
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

struct Harness {
    sdk: SimulatedSdk,
    notifier: Arc<RecordingNotifier>,
    ctx: Arc<ServiceContext>,
    config: TesterConfig,
}

impl Harness {
    fn new(platform: Platform) -> Self {
        let sdk = SimulatedSdk::new();
        sdk.init("sdk-tester-rnd").unwrap();
        let notifier = Arc::new(RecordingNotifier::default());
        let ctx = Arc::new(ServiceContext::new(
            Arc::new(sdk.clone()),
            notifier.clone(),
            platform,
        ));
        let config = TesterConfig {
            platform,
            ..TesterConfig::default()
        };
        Self {
            sdk,
            notifier,
            ctx,
            config,
        }
    }

    fn count(&self, predicate: impl Fn(&SdkCall) -> bool) -> usize {
        self.sdk.count_calls(predicate)
    }

    fn page_creations(&self) -> usize {
        self.count(|c| matches!(c, SdkCall::GetClassicPage { .. }))
    }

    fn page_removals(&self) -> usize {
        self.count(|c| matches!(c, SdkCall::RemoveClassicPage { .. }))
    }

    fn unit_releases(&self) -> usize {
        self.count(|c| {
            matches!(
                c,
                SdkCall::Unit {
                    call: UnitCall::Release,
                    ..
                }
            )
        })
    }

    fn page_calls(&self) -> Vec<PageCall> {
        self.sdk
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                SdkCall::Page { call, .. } => Some(call),
                _ => None,
            })
            .collect()
    }

    fn unit_calls(&self) -> Vec<UnitCall> {
        self.sdk
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                SdkCall::Unit { call, .. } => Some(call),
                _ => None,
            })
            .collect()
    }

    fn navigator(&self) -> DrawerNavigator {
        DrawerNavigator::new(Arc::clone(&self.ctx), self.config.clone())
    }
}

// ===== Page memoization and release =====

#[tokio::test]
async fn classic_page_is_created_once_per_screen() {
    let h = Harness::new(Platform::Android);
    let mut screen = ClassicPageScreen::new(Arc::clone(&h.ctx), &h.config);

    screen.mount().await;
    screen.apply_page_settings();
    screen.apply_page_settings();
    screen.create_unit().await;

    assert_eq!(h.page_creations(), 1);
}

#[tokio::test]
async fn unmount_before_build_skips_unit_release_and_unrealized_page() {
    let h = Harness::new(Platform::Ios);
    let mut screen = ClassicPageScreen::new(Arc::clone(&h.ctx), &h.config);

    screen.mount().await;
    // blank form on iOS reaches no setter, so the page never gets an id
    screen.apply_page_settings();
    screen.unmount().await;

    assert_eq!(h.page_creations(), 1);
    assert_eq!(h.unit_releases(), 0);
    assert_eq!(h.page_removals(), 0);
}

#[tokio::test]
async fn unmount_releases_realized_page_exactly_once() {
    let h = Harness::new(Platform::Android);
    let mut screen = ClassicPageScreen::new(Arc::clone(&h.ctx), &h.config);

    screen.mount().await;
    screen.form.publisher = "pub1".to_string();
    screen.apply_page_settings();
    screen.unmount().await;
    screen.unmount().await;
    drop(screen);

    assert_eq!(h.unit_releases(), 0);
    assert_eq!(h.page_removals(), 1);
    assert_eq!(h.sdk.live_page_count(), 0);
}

#[tokio::test]
async fn unmount_releases_units_before_page() {
    let h = Harness::new(Platform::Android);
    let mut screen = FeedAndWidgetScreen::new(Arc::clone(&h.ctx), &h.config);

    screen.mount().await;
    screen.unmount().await;

    let calls = h.sdk.calls();
    let last_unit_release = calls
        .iter()
        .rposition(|c| {
            matches!(
                c,
                SdkCall::Unit {
                    call: UnitCall::Release,
                    ..
                }
            )
        })
        .unwrap();
    let page_removal = calls
        .iter()
        .position(|c| matches!(c, SdkCall::RemoveClassicPage { .. }))
        .unwrap();
    assert!(last_unit_release < page_removal);
    assert_eq!(h.unit_releases(), 2);
}

// ===== Settings propagation =====

#[tokio::test]
async fn android_scenario_applies_publisher_url_and_timeout() {
    let h = Harness::new(Platform::Android);
    let mut screen = ClassicPageScreen::new(Arc::clone(&h.ctx), &h.config);
    screen.mount().await;
    screen.form.publisher = "pub1".to_string();
    screen.form.page_url = "http://x".to_string();
    screen.form.serial_fetch_timeout = "5000".to_string();

    let outcome = screen.apply_page_settings();

    assert_eq!(
        h.page_calls(),
        vec![
            PageCall::SetPublisher("pub1".to_string()),
            PageCall::SetPageUrl("http://x".to_string()),
            PageCall::SetSerialFetchTimeout(5000),
        ]
    );
    assert!(!outcome.was_applied(SettingField::PageType));
}

#[tokio::test]
async fn ios_scenario_applies_only_timeout() {
    let h = Harness::new(Platform::Ios);
    let mut screen = ClassicPageScreen::new(Arc::clone(&h.ctx), &h.config);
    screen.mount().await;
    screen.form.publisher = "pub1".to_string();
    screen.form.page_url = "http://x".to_string();
    screen.form.serial_fetch_timeout = "5000".to_string();

    screen.apply_page_settings();

    assert_eq!(h.page_calls(), vec![PageCall::SetSerialFetchTimeout(5000)]);
}

#[tokio::test]
async fn non_numeric_timeout_is_omitted() {
    let h = Harness::new(Platform::Android);
    let mut screen = ClassicPageScreen::new(Arc::clone(&h.ctx), &h.config);
    screen.mount().await;
    screen.form.serial_fetch_timeout = "soon".to_string();
    screen.form.extra_properties_value = "abc".to_string();

    let outcome = screen.apply_page_settings();

    assert!(h.page_calls().is_empty());
    assert!(outcome.applied.is_empty());
}

// ===== Unit builds =====

#[tokio::test]
async fn rejected_build_alerts_and_allows_retry() {
    let h = Harness::new(Platform::Android);
    h.sdk.fail_next_builds(1);
    let mut screen = ClassicPageScreen::new(Arc::clone(&h.ctx), &h.config);
    screen.mount().await;

    assert!(!screen.create_unit().await);
    assert!(screen.unit_slot().unit().await.is_none());
    assert!(screen.can_create_unit().await);
    let alerts = h.notifier.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].0, "Error");
    assert!(alerts[0].1.starts_with("Failed to create unit"));

    assert!(screen.create_unit().await);
    assert!(!screen.can_create_unit().await);
    assert_eq!(
        h.notifier.alerts().last().unwrap(),
        &("Success".to_string(), "Unit created successfully".to_string())
    );
}

#[tokio::test]
async fn classic_fetch_without_unit_alerts() {
    let h = Harness::new(Platform::Android);
    let mut screen = ClassicPageScreen::new(Arc::clone(&h.ctx), &h.config);
    screen.mount().await;

    screen.fetch_content().await;
    assert!(!screen.is_content_loaded());
    assert_eq!(
        h.notifier.alerts(),
        vec![(
            "Error".to_string(),
            "Unit controller not available yet".to_string()
        )]
    );

    screen.create_unit().await;
    screen.fetch_content().await;
    assert!(screen.is_content_loaded());
    assert_eq!(h.unit_calls(), vec![UnitCall::FetchContent]);
    assert!(screen
        .status_lines()
        .await
        .contains(&"Content Loaded: Yes".to_string()));
}

#[tokio::test]
async fn failed_fetch_leaves_content_unloaded() {
    let h = Harness::new(Platform::Android);
    let mut screen = ClassicPageScreen::new(Arc::clone(&h.ctx), &h.config);
    screen.mount().await;
    assert!(screen.create_unit().await);
    h.sdk.fail_operation("fetchContent");

    screen.fetch_content().await;

    assert!(!screen.is_content_loaded());
    assert!(screen
        .status_lines()
        .await
        .contains(&"Content Loaded: No".to_string()));
    let (title, message) = h.notifier.alerts().last().cloned().unwrap();
    assert_eq!(title, "Error");
    assert!(message.starts_with("Failed to fetch content"));

    h.sdk.clear_failures();
    screen.fetch_content().await;
    assert!(screen.is_content_loaded());
}

#[tokio::test]
async fn build_discarded_by_release_stays_silent() {
    let h = Harness::new(Platform::Android);
    let gate = h.sdk.gate_builds();
    let mut screen = ClassicPageScreen::new(Arc::clone(&h.ctx), &h.config);
    screen.mount().await;

    let (created, ()) = tokio::join!(screen.create_unit(), async {
        tokio::task::yield_now().await;
        screen.unit_slot().release().await;
        gate.notify_one();
    });

    assert!(!created);
    assert!(h.notifier.alerts().is_empty());
    assert_eq!(screen.unit_slot().status().await, UnitStatus::Released);
    assert_eq!(h.unit_releases(), 1);
}

#[tokio::test]
async fn feed_screen_builds_both_units_on_mount() {
    let h = Harness::new(Platform::Android);
    let mut screen = FeedAndWidgetScreen::new(Arc::clone(&h.ctx), &h.config);
    screen.mount().await;

    assert_eq!(
        screen.slot(UnitTarget::Widget).status().await,
        UnitStatus::Built
    );
    assert_eq!(screen.slot(UnitTarget::Feed).status().await, UnitStatus::Built);
    assert_eq!(
        screen.status_lines().await,
        vec![
            "Platform: android".to_string(),
            "Widget Unit: Available".to_string(),
            "Feed Unit: Available".to_string(),
        ]
    );
    assert_eq!(screen.items().len(), 102);
    assert!(matches!(screen.items().last(), Some(FeedItem::Feed { .. })));
}

#[tokio::test]
async fn feed_unit_actions_are_guarded_when_build_failed() {
    let h = Harness::new(Platform::Android);
    h.sdk.fail_next_builds(2);
    let mut screen = FeedAndWidgetScreen::new(Arc::clone(&h.ctx), &h.config);
    screen.mount().await;

    assert_eq!(h.notifier.alerts().len(), 2);
    assert!(!screen.fetch_unit(UnitTarget::Widget).await);
    assert!(!screen.refresh_unit(UnitTarget::Feed).await);
    assert!(!screen.reset_unit(UnitTarget::Feed).await);
    assert!(screen.apply_unit_settings(UnitTarget::Widget).await.is_none());
    assert_eq!(
        h.notifier.alerts().last().unwrap(),
        &("Error".to_string(), "Widget unit not available".to_string())
    );
    assert!(h.unit_calls().is_empty());
}

#[tokio::test]
async fn feed_unit_settings_target_one_unit() {
    let h = Harness::new(Platform::Android);
    let mut screen = FeedAndWidgetScreen::new(Arc::clone(&h.ctx), &h.config);
    screen.mount().await;
    screen.feed_form.extra_properties_key = "mode".to_string();
    screen.feed_form.extra_properties_value = "dark".to_string();

    let outcome = screen.apply_unit_settings(UnitTarget::Feed).await.unwrap();

    assert!(outcome.was_applied(SettingField::ExtraProperties));
    assert_eq!(
        h.unit_calls(),
        vec![UnitCall::SetUnitExtraProperties(ExtraProperties::from([(
            "mode".to_string(),
            "dark".to_string()
        )]))]
    );
}

#[tokio::test]
async fn ios_unit_settings_skip_android_only_fields() {
    let h = Harness::new(Platform::Ios);
    let mut screen = FeedAndWidgetScreen::new(Arc::clone(&h.ctx), &h.config);
    screen.mount().await;
    screen.widget_form.publisher = "pub1".to_string();
    screen.widget_form.page_type = "article".to_string();
    screen.widget_form.target_type = "mix".to_string();
    screen.widget_form.page_url = "http://x".to_string();
    screen.widget_form.extra_properties_key = "mode".to_string();
    screen.widget_form.extra_properties_value = "dark".to_string();

    let outcome = screen.apply_unit_settings(UnitTarget::Widget).await.unwrap();

    assert_eq!(outcome.applied, vec![SettingField::ExtraProperties]);
    for field in [
        SettingField::Publisher,
        SettingField::PageType,
        SettingField::TargetType,
        SettingField::PageUrl,
    ] {
        assert!(outcome.skipped.contains(&field));
    }
    assert_eq!(
        h.unit_calls(),
        vec![UnitCall::SetUnitExtraProperties(ExtraProperties::from([(
            "mode".to_string(),
            "dark".to_string()
        )]))]
    );
}

#[tokio::test]
async fn feed_page_controls_reach_the_page() {
    let h = Harness::new(Platform::Android);
    let mut screen = FeedAndWidgetScreen::new(Arc::clone(&h.ctx), &h.config);
    screen.mount().await;

    screen.reset_page();
    screen.fetch_all();
    screen.refresh_page();

    let page_calls = h.page_calls();
    assert_eq!(
        page_calls[page_calls.len() - 3..],
        [
            PageCall::Reset,
            PageCall::FetchAllUnitsContent,
            PageCall::Refresh
        ]
    );
}

// ===== Organic clicks =====

#[tokio::test]
async fn organic_toggle_before_build_flips_local_state() {
    let h = Harness::new(Platform::Android);
    let mut screen = OrganicClicksScreen::new(Arc::clone(&h.ctx), &h.config);

    assert!(screen.should_handle_organic_clicks());
    assert!(!screen.toggle_organic_clicks().await);
    assert!(screen.toggle_organic_clicks().await);
    assert!(!screen.toggle_organic_clicks().await);
    assert!(h.unit_calls().is_empty());
    assert!(!screen.fetch_content().await);
}

#[tokio::test]
async fn organic_toggle_after_mount_reaches_unit() {
    let h = Harness::new(Platform::Android);
    let mut screen = OrganicClicksScreen::new(Arc::clone(&h.ctx), &h.config);
    screen.mount().await;

    screen.toggle_organic_clicks().await;
    assert!(screen.fetch_content().await);

    assert_eq!(
        h.unit_calls(),
        vec![
            UnitCall::SetShouldHandleOrganicClicks(false),
            UnitCall::FetchContent,
        ]
    );
    assert_eq!(
        screen.status_lines().await,
        vec!["Taboola Handle Organic Clicks: Disabled".to_string()]
    );
}

// ===== Dark mode =====

#[tokio::test]
async fn dark_mode_pushes_page_property_on_mount_and_toggle() {
    let h = Harness::new(Platform::Ios);
    let mut screen = DarkModeScreen::new(Arc::clone(&h.ctx), &h.config);
    screen.mount().await;
    assert!(screen.toggle_dark_mode());

    let dark = |value: &str| {
        PageCall::SetPageExtraProperties(ExtraProperties::from([(
            "darkMode".to_string(),
            value.to_string(),
        )]))
    };
    assert_eq!(h.page_calls(), vec![dark("false"), dark("true")]);

    assert!(!screen.fetch_content().await);
    assert!(screen.create_unit().await);
    assert!(screen.fetch_content().await);

    screen.unmount().await;
    assert_eq!(h.page_removals(), 1);
    assert_eq!(h.unit_releases(), 1);
}

// ===== Global settings =====

#[tokio::test]
async fn global_settings_report_success() {
    let h = Harness::new(Platform::Android);
    let mut screen = GlobalSettingsScreen::new(Arc::clone(&h.ctx));
    screen.form.toggle_common("cdns");
    assert!(screen.visible_ios_properties().is_empty());

    let summary = screen.apply().unwrap();

    assert_eq!(summary.properties["cdns"], "true");
    let alerts = h.notifier.alerts();
    assert_eq!(alerts[0].0, "Success");
    assert!(alerts[0]
        .1
        .contains("Common Properties: keepViewId, omsdk, cdns"));
}

#[tokio::test]
async fn global_settings_report_failure() {
    let h = Harness::new(Platform::Ios);
    h.sdk.fail_operation("setLogLevel");
    let screen = GlobalSettingsScreen::new(Arc::clone(&h.ctx));
    assert_eq!(screen.visible_ios_properties().len(), 1);

    assert!(screen.apply().is_none());
    assert_eq!(
        h.notifier.alerts(),
        vec![("Error".to_string(), "Failed to apply settings".to_string())]
    );
}

// ===== Navigation =====

#[tokio::test]
async fn navigating_away_unmounts_previous_screen() {
    let h = Harness::new(Platform::Android);
    let mut navigator = h.navigator();
    navigator.start().await;

    navigator.navigate(Route::FeedAndWidget).await;
    assert_eq!(h.sdk.live_page_count(), 1);

    navigator.navigate(Route::OrganicClicks).await;
    assert_eq!(navigator.current_route(), Some(Route::OrganicClicks));
    assert_eq!(h.page_removals(), 1);
    assert_eq!(h.sdk.live_page_count(), 1);

    navigator.navigate(Route::Home).await;
    assert_eq!(h.page_removals(), 2);
    assert_eq!(h.sdk.live_page_count(), 0);
    assert_eq!(h.unit_releases(), 3);
}

#[tokio::test]
async fn reselecting_focused_route_keeps_instance() {
    let h = Harness::new(Platform::Android);
    let mut navigator = h.navigator();
    navigator.navigate(Route::OrganicClicks).await;

    let Some(ActiveScreen::OrganicClicks(screen)) = navigator.current_mut() else {
        panic!("organic clicks screen should be mounted");
    };
    screen.toggle_organic_clicks().await;

    navigator.navigate(Route::OrganicClicks).await;
    assert_eq!(h.page_creations(), 1);
    let Some(ActiveScreen::OrganicClicks(screen)) = navigator.current() else {
        panic!("organic clicks screen should still be mounted");
    };
    assert!(!screen.should_handle_organic_clicks());

    navigator.shutdown().await;
    assert_eq!(navigator.current_route(), None);
    assert_eq!(h.sdk.live_page_count(), 0);
}

#[tokio::test]
async fn every_route_mounts_and_unmounts_cleanly() {
    let h = Harness::new(Platform::Ios);
    let mut navigator = h.navigator();
    for route in Route::ALL {
        navigator.navigate(route).await;
        assert_eq!(navigator.current_route(), Some(route));
    }
    navigator.shutdown().await;

    assert_eq!(h.sdk.live_page_count(), 0);
    assert!(h.notifier.alerts().is_empty());
    assert!(h.sdk.is_initialized());
}
