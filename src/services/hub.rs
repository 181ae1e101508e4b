//! Service Hub
//!
//! Owns one repository per entity and the `UiEvent` channel pages publish to.

use crate::domain::{Asset, Backup, Company, Document, Location, MaintenanceType, Project, Promotion, Transfer};
use crate::services::{InMemoryRepository, ProgressConfig, fixtures};
use crate::states::UiEvent;
use crossbeam_channel::{Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

/// Configuration for all services
#[derive(Clone, Debug, Default)]
pub struct ServiceConfig {
    /// Simulated repository latency
    pub latency: Duration,
    /// Backup/restore progress simulation
    pub progress: ProgressConfig,
}

/// Central hub for all data services
pub struct ServiceHub {
    assets: Arc<InMemoryRepository<Asset>>,
    maintenance_types: Arc<InMemoryRepository<MaintenanceType>>,
    promotions: Arc<InMemoryRepository<Promotion>>,
    transfers: Arc<InMemoryRepository<Transfer>>,
    projects: Arc<InMemoryRepository<Project>>,
    companies: Arc<InMemoryRepository<Company>>,
    locations: Arc<InMemoryRepository<Location>>,
    documents: Arc<InMemoryRepository<Document>>,
    backups: Arc<InMemoryRepository<Backup>>,
    progress: ProgressConfig,
    /// Event sender (cloned into pages)
    tx: Sender<UiEvent>,
    /// Event receiver (for the front end)
    rx: Receiver<UiEvent>,
}

fn seeded<E: crate::domain::Entity>(records: Vec<E>, latency: Duration) -> Arc<InMemoryRepository<E>> {
    Arc::new(InMemoryRepository::new(records).with_latency(latency))
}

impl ServiceHub {
    /// Create a hub whose repositories are seeded with fixtures
    pub fn new(config: ServiceConfig) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        let latency = config.latency;
        tracing::info!(latency_ms = latency.as_millis() as u64, "Seeding in-memory repositories");

        Self {
            assets: seeded(fixtures::assets(), latency),
            maintenance_types: seeded(fixtures::maintenance_types(), latency),
            promotions: seeded(fixtures::promotions(), latency),
            transfers: seeded(fixtures::transfers(), latency),
            projects: seeded(fixtures::projects(), latency),
            companies: seeded(fixtures::companies(), latency),
            locations: seeded(fixtures::locations(), latency),
            documents: seeded(fixtures::documents(), latency),
            backups: seeded(fixtures::backups(), latency),
            progress: config.progress,
            tx,
            rx,
        }
    }

    /// Create a service hub with default configuration (for development/testing)
    pub fn with_defaults() -> Self {
        Self::new(ServiceConfig::default())
    }

    /// Get the event receiver
    ///
    /// Events from all pages are multiplexed into this single channel.
    pub fn events(&self) -> Receiver<UiEvent> {
        self.rx.clone()
    }

    pub fn sender(&self) -> Sender<UiEvent> {
        self.tx.clone()
    }

    pub fn progress(&self) -> ProgressConfig {
        self.progress
    }

    // ==================== Repositories ====================

    pub fn assets(&self) -> Arc<InMemoryRepository<Asset>> {
        self.assets.clone()
    }

    pub fn maintenance_types(&self) -> Arc<InMemoryRepository<MaintenanceType>> {
        self.maintenance_types.clone()
    }

    pub fn promotions(&self) -> Arc<InMemoryRepository<Promotion>> {
        self.promotions.clone()
    }

    pub fn transfers(&self) -> Arc<InMemoryRepository<Transfer>> {
        self.transfers.clone()
    }

    pub fn projects(&self) -> Arc<InMemoryRepository<Project>> {
        self.projects.clone()
    }

    pub fn companies(&self) -> Arc<InMemoryRepository<Company>> {
        self.companies.clone()
    }

    pub fn locations(&self) -> Arc<InMemoryRepository<Location>> {
        self.locations.clone()
    }

    pub fn documents(&self) -> Arc<InMemoryRepository<Document>> {
        self.documents.clone()
    }

    pub fn backups(&self) -> Arc<InMemoryRepository<Backup>> {
        self.backups.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Repository;

    #[tokio::test]
    async fn repositories_are_seeded_and_shared() {
        let hub = ServiceHub::with_defaults();
        let first = hub.assets();
        let before = first.len().await;
        assert!(before > 0);

        let mut asset = fixtures::assets().remove(0);
        asset.asset_tag = "AST-999".into();
        hub.assets().create(asset).await.expect("create");
        assert_eq!(first.len().await, before + 1);
    }

    #[test]
    fn events_fan_into_one_channel() {
        let hub = ServiceHub::with_defaults();
        let rx = hub.events();
        hub.sender().send(UiEvent::success("saved")).expect("send");
        assert_eq!(rx.try_recv().expect("event"), UiEvent::success("saved"));
    }
}
