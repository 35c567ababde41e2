use crate::core::mapping::map_document;
use crate::domain::model::RecordId;
use crate::domain::ports::RecordStore;
use crate::utils::error::{ImportError, Result};
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fetches an inventory document from a URL and persists it as one record.
///
/// The call path is strictly sequential: validate, fetch, parse, map, create.
/// Every failure is terminal for the call and leaves no partial state; the
/// caller re-invokes if it wants a retry.
pub struct Importer<S: RecordStore> {
    store: S,
    client: Client,
}

impl<S: RecordStore> Importer<S> {
    pub fn new(store: S) -> Result<Self> {
        Self::with_timeout(store, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(store: S, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { store, client })
    }

    /// Imports the document at `url` and returns the id of the new record.
    pub async fn import_from_url(&self, url: &str) -> Result<RecordId> {
        if url.trim().is_empty() {
            return Err(ImportError::validation("Import URL is required"));
        }

        tracing::debug!("Fetching inventory document from: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("Import response status: {}", status);
        if !status.is_success() {
            return Err(ImportError::HttpError {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let doc: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| ImportError::ParseError {
                message: e.to_string(),
            })?;

        let record = map_document(&doc, url)?;
        let id = self.store.create(record).await?;
        tracing::debug!("Created inventory record {}", id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::InventoryRecord;
    use async_trait::async_trait;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MemoryStore {
        records: Arc<Mutex<Vec<InventoryRecord>>>,
    }

    impl MemoryStore {
        fn new() -> Self {
            Self {
                records: Arc::new(Mutex::new(Vec::new())),
            }
        }

        async fn records(&self) -> Vec<InventoryRecord> {
            self.records.lock().await.clone()
        }
    }

    #[async_trait]
    impl RecordStore for MemoryStore {
        async fn create(&self, record: InventoryRecord) -> Result<RecordId> {
            let mut records = self.records.lock().await;
            records.push(record);
            Ok(records.len() as RecordId)
        }
    }

    fn importer(store: MemoryStore) -> Importer<MemoryStore> {
        Importer::new(store).unwrap()
    }

    #[tokio::test]
    async fn test_import_creates_one_record() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/export.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "inventory": {"title": "Warehouse A", "description": "Main"},
                    "aggregates": {
                        "numbers": {"num1": {"min": 1, "median": 2, "avg": 2.5, "max": 5}},
                        "popularText": ["red", "blue"]
                    },
                    "fields": [{"name": "sku"}]
                }));
        });

        let store = MemoryStore::new();
        let url = server.url("/export.json");
        let id = importer(store.clone()).import_from_url(&url).await.unwrap();

        mock.assert();
        assert_eq!(id, 1);

        let records = store.records().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Warehouse A");
        assert_eq!(records[0].num1_avg, 2.5);
        assert_eq!(records[0].num2_min, 0.0);
        // Provenance: the stored URL is exactly the input URL.
        assert_eq!(records[0].import_url, url);
    }

    #[tokio::test]
    async fn test_empty_url_is_rejected_before_any_io() {
        let store = MemoryStore::new();
        let err = importer(store.clone()).import_from_url("").await.unwrap_err();

        assert!(matches!(err, ImportError::ValidationError { .. }));
        assert_eq!(err.to_string(), "Validation error: Import URL is required");
        assert!(store.records().await.is_empty());
    }

    #[tokio::test]
    async fn test_blank_url_is_rejected() {
        let store = MemoryStore::new();
        let err = importer(store.clone())
            .import_from_url("   ")
            .await
            .unwrap_err();

        assert!(matches!(err, ImportError::ValidationError { .. }));
        assert!(store.records().await.is_empty());
    }

    #[tokio::test]
    async fn test_http_failure_creates_no_record() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/broken");
            then.status(500);
        });

        let store = MemoryStore::new();
        let err = importer(store.clone())
            .import_from_url(&server.url("/broken"))
            .await
            .unwrap_err();

        mock.assert();
        assert!(matches!(err, ImportError::HttpError { status: 500 }));
        assert!(store.records().await.is_empty());
    }

    #[tokio::test]
    async fn test_not_found_maps_to_http_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404);
        });

        let store = MemoryStore::new();
        let err = importer(store.clone())
            .import_from_url(&server.url("/missing"))
            .await
            .unwrap_err();

        assert!(matches!(err, ImportError::HttpError { status: 404 }));
        assert!(store.records().await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_creates_no_record() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/export.json");
            then.status(200).body("not json");
        });

        let store = MemoryStore::new();
        let err = importer(store.clone())
            .import_from_url(&server.url("/export.json"))
            .await
            .unwrap_err();

        mock.assert();
        assert!(matches!(err, ImportError::ParseError { .. }));
        assert!(store.records().await.is_empty());
    }

    #[tokio::test]
    async fn test_connection_failure_is_a_transport_error() {
        let store = MemoryStore::new();
        // Nothing listens on this port.
        let err = importer(store.clone())
            .import_from_url("http://127.0.0.1:1/export.json")
            .await
            .unwrap_err();

        assert!(matches!(err, ImportError::TransportError(_)));
        assert!(store.records().await.is_empty());
    }

    #[tokio::test]
    async fn test_each_import_creates_a_fresh_record() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/export.json");
            then.status(200).json_body(json!({"inventory": {"title": "W"}}));
        });

        let store = MemoryStore::new();
        let imp = importer(store.clone());
        let url = server.url("/export.json");

        assert_eq!(imp.import_from_url(&url).await.unwrap(), 1);
        assert_eq!(imp.import_from_url(&url).await.unwrap(), 2);
        assert_eq!(store.records().await.len(), 2);
    }
}
