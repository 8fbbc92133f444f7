//! Process setup and dashboard construction without network access.

use std::time::Duration;

use stock_dashboard::Dashboard;

#[test]
fn init_is_idempotent() {
    stock_dashboard::init();
    stock_dashboard::init();
    log::info!("logger installed once");
}

#[test]
fn builder_makes_no_requests() {
    let dashboard = Dashboard::builder()
        .timeout(Duration::from_millis(10))
        .yahoo_base_url("http://127.0.0.1:9")
        .yahoo_cookie_url("http://127.0.0.1:9/cookie")
        .translate_base_url("http://127.0.0.1:9")
        .target_language(Some("fr"))
        .build()
        .unwrap();
    assert_eq!(dashboard.target_language(), Some("fr"));
    assert_eq!(
        dashboard.to_string(),
        "Dashboard(source_lang=auto, target_lang=fr)"
    );
}

#[test]
fn unreachable_provider_reports_profile_unavailable() {
    let dashboard = Dashboard::builder()
        .timeout(Duration::from_millis(200))
        .yahoo_base_url("http://127.0.0.1:9")
        .yahoo_cookie_url("http://127.0.0.1:9/cookie")
        .build()
        .unwrap();
    let err = dashboard.analyze("AAPL").unwrap_err();
    assert!(matches!(
        err,
        stock_dashboard::DashboardError::ProfileUnavailable { .. }
    ));
}
