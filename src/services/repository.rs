//! Repository
//!
//! Uniform async CRUD access for every entity. Screens talk to a
//! `Repository<E>`; the in-memory implementation is seeded from fixtures and
//! can simulate latency and failures.

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::domain::{Entity, RowId};
use crate::error::{FetchSnafu, NotFoundSnafu, Result};

/// Async CRUD over one entity type
pub trait Repository<E: Entity>: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<E>>> + Send;

    fn get(&self, id: &RowId) -> impl Future<Output = Result<E>> + Send;

    /// Store a new record; the repository assigns its id
    fn create(&self, record: E) -> impl Future<Output = Result<E>> + Send;

    fn update(&self, record: E) -> impl Future<Output = Result<E>> + Send;

    fn delete(&self, id: &RowId) -> impl Future<Output = Result<()>> + Send;
}

struct Store<E> {
    records: Vec<E>,
    seq: u64,
    fail_next: Option<String>,
}

/// Vec-backed repository
pub struct InMemoryRepository<E> {
    store: RwLock<Store<E>>,
    latency: Duration,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new(records: Vec<E>) -> Self {
        Self {
            store: RwLock::new(Store {
                seq: records.len() as u64,
                records,
                fail_next: None,
            }),
            latency: Duration::ZERO,
        }
    }

    /// Load records from a JSON array
    pub fn from_json(json: &str) -> Result<Self>
    where
        E: DeserializeOwned,
    {
        let records: Vec<E> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    /// Delay every call by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Make the next call fail with a fetch error
    pub async fn fail_next(&self, message: impl Into<String>) {
        self.store.write().await.fail_next = Some(message.into());
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.records.is_empty()
    }

    async fn simulate(&self) -> Result<()> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if let Some(message) = self.store.write().await.fail_next.take() {
            return FetchSnafu { message }.fail();
        }
        Ok(())
    }
}

impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn list(&self) -> Result<Vec<E>> {
        self.simulate().await?;
        let store = self.store.read().await;
        tracing::debug!(entity = E::NAME, count = store.records.len(), "Listing records");
        Ok(store.records.clone())
    }

    async fn get(&self, id: &RowId) -> Result<E> {
        self.simulate().await?;
        let store = self.store.read().await;
        match store.records.iter().find(|r| r.id() == *id) {
            Some(record) => Ok(record.clone()),
            None => NotFoundSnafu { id: id.to_string() }.fail(),
        }
    }

    async fn create(&self, mut record: E) -> Result<E> {
        self.simulate().await?;
        let mut store = self.store.write().await;
        let id = loop {
            store.seq += 1;
            let candidate = E::id_for(store.seq);
            if !store.records.iter().any(|r| r.id() == candidate) {
                break candidate;
            }
        };
        record.set_id(id.clone());
        store.records.push(record.clone());
        tracing::debug!(entity = E::NAME, %id, "Created record");
        Ok(record)
    }

    async fn update(&self, record: E) -> Result<E> {
        self.simulate().await?;
        let mut store = self.store.write().await;
        let id = record.id();
        let Some(slot) = store.records.iter_mut().find(|r| r.id() == id) else {
            return NotFoundSnafu { id: id.to_string() }.fail();
        };
        *slot = record.clone();
        tracing::debug!(entity = E::NAME, %id, "Updated record");
        Ok(record)
    }

    async fn delete(&self, id: &RowId) -> Result<()> {
        self.simulate().await?;
        let mut store = self.store.write().await;
        let before = store.records.len();
        store.records.retain(|r| r.id() != *id);
        if store.records.len() == before {
            return NotFoundSnafu { id: id.to_string() }.fail();
        }
        tracing::debug!(entity = E::NAME, %id, "Deleted record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Document, Location};
    use crate::error::Error;

    fn location(id: i64, code: &str) -> Location {
        Location {
            id,
            code: code.into(),
            name: format!("{code} office"),
            state: "Lagos".into(),
            address: None,
            location_type: "branch".into(),
        }
    }

    #[tokio::test]
    async fn create_assigns_fresh_numeric_ids() {
        let repo = InMemoryRepository::new(vec![location(1, "IKJ"), location(3, "VI")]);
        let created = repo.create(location(0, "LEK")).await.expect("create");
        assert_eq!(created.id, 4);
        assert_eq!(repo.list().await.expect("list").len(), 3);
    }

    #[tokio::test]
    async fn update_and_delete_unknown_ids_fail() {
        let repo = InMemoryRepository::new(vec![location(1, "IKJ")]);
        assert!(matches!(
            repo.update(location(9, "ABJ")).await,
            Err(Error::NotFound { .. })
        ));
        assert!(matches!(
            repo.delete(&RowId::from(9)).await,
            Err(Error::NotFound { .. })
        ));

        let mut renamed = location(1, "IKJ");
        renamed.name = "Ikeja Annex".into();
        repo.update(renamed).await.expect("update");
        let fetched = repo.get(&RowId::from(1)).await.expect("get");
        assert_eq!(fetched.name, "Ikeja Annex");

        repo.delete(&RowId::from(1)).await.expect("delete");
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn injected_failure_fires_once() {
        let repo = InMemoryRepository::new(vec![location(1, "IKJ")]);
        repo.fail_next("network unreachable").await;
        assert!(matches!(repo.list().await, Err(Error::Fetch { .. })));
        assert!(repo.list().await.is_ok());
    }

    #[tokio::test]
    async fn text_ids_follow_entity_scheme() {
        let repo: InMemoryRepository<Document> = InMemoryRepository::from_json("[]").expect("json");
        let doc = Document {
            id: String::new(),
            title: "Posting letter".into(),
            category: "letter".into(),
            owner: "HR".into(),
            uploaded_at: "2024-05-02".into(),
            size_kb: 120.0,
            metadata: Default::default(),
        };
        let created = repo.create(doc).await.expect("create");
        assert_eq!(created.id, "DOC-0001");
    }

    #[tokio::test(start_paused = true)]
    async fn latency_is_simulated() {
        let repo = InMemoryRepository::new(vec![location(1, "IKJ")]).with_latency(Duration::from_millis(300));
        let started = tokio::time::Instant::now();
        repo.list().await.expect("list");
        assert!(started.elapsed() >= Duration::from_millis(300));
    }
}
