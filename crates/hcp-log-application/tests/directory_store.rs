mod common;

use common::{MockRemoteApi, hcp};
use hcp_log_application::{AppStore, HcpDirectoryStore};
use hcp_log_core::error::HcpLogError;
use hcp_log_core::hcp::DirectoryStatus;
use hcp_log_core::status::ConcurrencyMode;
use std::sync::Arc;

#[tokio::test]
async fn test_load_replaces_list() {
    let api = MockRemoteApi::new();
    api.push_hcps(Ok(vec![hcp(1, "Dr. Lee"), hcp(2, "Dr. Smith")]));
    let store = HcpDirectoryStore::new(Arc::new(api));

    let count = store.load().await.unwrap();

    assert_eq!(count, 2);
    let directory = store.snapshot().await;
    assert_eq!(directory.status, DirectoryStatus::Loaded);
    assert!(directory.error.is_none());
    assert_eq!(store.find(2).await.map(|h| h.name), Some("Dr. Smith".to_string()));
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_list() {
    let api = MockRemoteApi::new();
    api.push_hcps(Ok(vec![hcp(1, "Dr. Lee")]));
    api.push_hcps(Err(HcpLogError::transport("connection refused")));
    let store = HcpDirectoryStore::new(Arc::new(api));
    store.load().await.unwrap();

    store.load().await.unwrap_err();

    let directory = store.snapshot().await;
    assert_eq!(directory.status, DirectoryStatus::Failed);
    assert_eq!(directory.items, vec![hcp(1, "Dr. Lee")]);
    assert_eq!(directory.error.as_deref(), Some("connection refused"));
}

#[tokio::test]
async fn test_first_load_failure_without_message() {
    let api = MockRemoteApi::new();
    api.push_hcps(Err(HcpLogError::internal("decode")));
    let store = HcpDirectoryStore::new(Arc::new(api));

    store.load().await.unwrap_err();

    let directory = store.snapshot().await;
    assert!(directory.items.is_empty());
    assert_eq!(directory.error.as_deref(), Some("Failed to fetch HCPs"));
}

#[tokio::test]
async fn test_app_store_shares_api_between_stores() {
    let api = MockRemoteApi::new();
    api.push_hcps(Ok(vec![hcp(5, "Dr. Park")]));
    let app = AppStore::new(Arc::new(api), ConcurrencyMode::Exclusive);

    app.hcps.load().await.unwrap();
    let selected = app.hcps.find(5).await.map(|h| h.id);
    app.interaction.set_hcp_id(selected).await;

    assert_eq!(app.interaction.snapshot().await.form.hcp_id, Some(5));
    assert_eq!(app.interaction.mode(), ConcurrencyMode::Exclusive);
}

#[tokio::test]
async fn test_load_failure_reports_status_message_not_detail() {
    let api = MockRemoteApi::new();
    api.push_hcps(Err(HcpLogError::api(503, Some("database offline".to_string()))));
    let store = HcpDirectoryStore::new(Arc::new(api));

    store.load().await.unwrap_err();

    assert_eq!(
        store.snapshot().await.error.as_deref(),
        Some("Request failed with status code 503")
    );
}
