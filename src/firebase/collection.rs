use crate::app_config::AppConfig;
use crate::domain::RemoteKey;
use crate::firebase::location_record::LocationRecord;
use crate::firebase::push_response::PushResponse;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::time::Duration;
use thiserror::Error;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, instrument, warn};

/// A flat, key-addressed collection of location records.
#[async_trait]
pub trait RemoteCollection: Debug + Send + Sync {
    /// Every record in the collection, ordered by key.
    async fn fetch_all(&self) -> Result<Vec<(RemoteKey, LocationRecord)>, CollectionError>;

    /// Appends a record and returns the key the store generated for it.
    async fn push(&self, record: &LocationRecord) -> Result<RemoteKey, CollectionError>;

    /// Replaces the whole record stored under `key`.
    async fn put(&self, key: &RemoteKey, record: &LocationRecord) -> Result<(), CollectionError>;

    async fn remove(&self, key: &RemoteKey) -> Result<(), CollectionError>;
}

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CollectionError {
    fn is_transient(&self) -> bool {
        match self {
            CollectionError::Request(e) => {
                e.is_timeout() || e.is_connect() || e.status().is_some_and(|status| status.is_server_error())
            }
            CollectionError::Decode(_) => false,
        }
    }
}

/// A collection in a Firebase Realtime Database, addressed through its REST API.
#[derive(Debug)]
pub struct FirebaseCollection {
    client: Client,
    collection_url: String,
    retry_ms: u64,
    retry_attempts: usize,
}

impl FirebaseCollection {
    pub fn new(client: Client, config: &AppConfig) -> Self {
        FirebaseCollection {
            client,
            collection_url: format!("{}/{}", config.database().url(), config.database().collection()),
            retry_ms: config.database().retry_ms(),
            retry_attempts: config.database().retry_attempts(),
        }
    }

    fn collection_endpoint(&self) -> String {
        format!("{}.json", self.collection_url)
    }

    fn record_endpoint(&self, key: &RemoteKey) -> String {
        format!("{}/{}.json", self.collection_url, key.as_str())
    }

    fn retry_strategy(&self) -> impl Iterator<Item = Duration> {
        backoff(self.retry_ms).map(jitter).take(self.retry_attempts)
    }

    /// Sends an idempotent request, retrying transport failures and server errors.
    async fn send_idempotent<F>(&self, request: F) -> Result<Response, CollectionError>
    where
        F: Fn() -> reqwest::RequestBuilder + Send + Sync,
    {
        let request = &request;
        RetryIf::spawn(
            self.retry_strategy(),
            move || async move {
                let response = request().send().await?.error_for_status()?;
                Ok::<_, CollectionError>(response)
            },
            |e: &CollectionError| {
                let transient = e.is_transient();
                if transient {
                    warn!("⚠️ Database request failed: {}. Retrying...", e);
                }
                transient
            },
        )
        .await
    }
}

/// Delays of `retry_ms`, then twice that and so on, capped at five seconds.
fn backoff(retry_ms: u64) -> ExponentialBackoff {
    // Each delay is `factor * 2^n` for n = 1, 2, ...
    ExponentialBackoff::from_millis(2)
        .factor((retry_ms / 2).max(1))
        .max_delay(Duration::from_secs(5))
}

#[async_trait]
impl RemoteCollection for FirebaseCollection {
    #[instrument(skip(self), fields(url = %self.collection_url))]
    async fn fetch_all(&self) -> Result<Vec<(RemoteKey, LocationRecord)>, CollectionError> {
        let response = self.send_idempotent(|| self.client.get(self.collection_endpoint())).await?;
        let body = response.text().await?;

        // An empty collection is returned as `null`
        let Some(entries) = serde_json::from_str::<Option<BTreeMap<String, Value>>>(&body)? else {
            return Ok(Vec::new());
        };

        let records = entries
            .into_iter()
            .filter_map(|(key, value)| match serde_json::from_value::<LocationRecord>(value) {
                Ok(record) => Some((RemoteKey::new(key), record)),
                Err(e) => {
                    warn!(key = key, "⚠️ Skipping malformed record '{}': {}", key, e);
                    None
                }
            })
            .collect::<Vec<_>>();

        debug!("Fetched {} record(s)", records.len());
        Ok(records)
    }

    #[instrument(skip(self))]
    async fn push(&self, record: &LocationRecord) -> Result<RemoteKey, CollectionError> {
        let response = self
            .client
            .post(self.collection_endpoint())
            .json(record)
            .send()
            .await?
            .error_for_status()?;

        let push_response = response.json::<PushResponse>().await?;
        Ok(RemoteKey::new(push_response.name))
    }

    #[instrument(skip(self))]
    async fn put(&self, key: &RemoteKey, record: &LocationRecord) -> Result<(), CollectionError> {
        self.send_idempotent(|| self.client.put(self.record_endpoint(key)).json(record)).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, key: &RemoteKey) -> Result<(), CollectionError> {
        self.send_idempotent(|| self.client.delete(self.record_endpoint(key))).await?;
        Ok(())
    }
}
