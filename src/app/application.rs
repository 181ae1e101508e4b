//! Application - Service Wiring and Page Rendering
//!
//! Builds the service hub from the loaded config and renders one admin page
//! to text.

use crossbeam_channel::Receiver;
use tracing::info;

use crate::app::navigation::{PageRequest, page_list};
use crate::domain::Entity;
use crate::error::Result;
use crate::features;
use crate::services::{Repository, ServiceConfig, ServiceHub};
use crate::states::{AppConfig, Page, PageState, UiEvent};
use crate::views::console;

pub struct Application {
    config: AppConfig,
    hub: ServiceHub,
    events: Receiver<UiEvent>,
}

impl Application {
    pub fn new(config: AppConfig) -> Self {
        let hub = ServiceHub::new(ServiceConfig {
            latency: config.latency(),
            progress: config.progress(),
        });
        let events = hub.events();
        Self { config, hub, events }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn hub(&self) -> &ServiceHub {
        &self.hub
    }

    /// Record count of every page, fetched concurrently
    pub async fn record_counts(&self) -> Vec<(Page, usize)> {
        let hub = &self.hub;
        let (assets, maintenance_types, promotions) = (hub.assets(), hub.maintenance_types(), hub.promotions());
        let (transfers, projects, companies) = (hub.transfers(), hub.projects(), hub.companies());
        let (locations, documents, backups) = (hub.locations(), hub.documents(), hub.backups());
        let (assets, maintenance_types, promotions, transfers, projects, companies, locations, documents, backups) = futures::join!(
            assets.len(),
            maintenance_types.len(),
            promotions.len(),
            transfers.len(),
            projects.len(),
            companies.len(),
            locations.len(),
            documents.len(),
            backups.len(),
        );
        vec![
            (Page::Assets, assets),
            (Page::MaintenanceTypes, maintenance_types),
            (Page::Promotions, promotions),
            (Page::Transfers, transfers),
            (Page::Projects, projects),
            (Page::Companies, companies),
            (Page::Locations, locations),
            (Page::Documents, documents),
            (Page::Backups, backups),
        ]
    }

    /// Render the requested page (or the page list) as text
    pub async fn render(&self, request: &PageRequest) -> Result<String> {
        let page = request.page.unwrap_or(self.config.default_page);
        if request.list_pages {
            return Ok(page_list(page, &self.record_counts().await));
        }

        info!(%page, search = ?request.search, page_number = ?request.page_number, "Rendering page");
        let per_page = self.config.items_per_page;
        let hub = &self.hub;
        let body = match page {
            Page::Assets => render_page(features::assets::page(hub, per_page)?, request).await,
            Page::MaintenanceTypes => render_page(features::maintenance_types::page(hub, per_page)?, request).await,
            Page::Promotions => render_page(features::promotions::page(hub, per_page)?, request).await,
            Page::Transfers => render_page(features::transfers::page(hub, per_page)?, request).await,
            Page::Projects => render_page(features::projects::page(hub, per_page)?, request).await,
            Page::Companies => render_page(features::companies::page(hub, per_page)?, request).await,
            Page::Locations => render_page(features::locations::page(hub, per_page)?, request).await,
            Page::Documents => render_page(features::documents::page(hub, per_page)?, request).await,
            Page::Backups => render_page(features::backups::page(hub, per_page)?, request).await,
        };

        let notices: Vec<String> = self.events.try_iter().filter_map(|e| notice(&e)).collect();
        let mut out = format!("# {}\n\n{body}", page.title());
        if !notices.is_empty() {
            out.push('\n');
            out.push_str(&notices.join("\n"));
            out.push('\n');
        }
        Ok(out)
    }
}

/// Only failures are worth echoing after a one-shot render
fn notice(event: &UiEvent) -> Option<String> {
    match event {
        UiEvent::ErrorOccurred { .. } => console::render_event(event),
        _ => None,
    }
}

async fn render_page<E: Entity, R: Repository<E>>(mut state: PageState<E, R>, request: &PageRequest) -> String {
    let failed = state.load().await.error().map(str::to_string);
    if let Some(message) = failed {
        return format!("Could not load {}: {message}\n", state.page().title().to_lowercase());
    }

    if let Some(search) = &request.search {
        state.table_mut().set_search(search.as_str());
    }
    if let Some(number) = request.page_number {
        let total = state.table().visible_rows(state.rows()).len();
        state.table_mut().go_to_page(number, total);
    }
    state.pump();
    console::render_table(&state.view())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> Application {
        Application::new(AppConfig {
            items_per_page: 5,
            ..AppConfig::default()
        })
    }

    #[tokio::test]
    async fn renders_default_page_with_footer() {
        let out = app().render(&PageRequest::default()).await.expect("render");
        assert!(out.starts_with("# Assets"));
        assert!(out.contains("Showing 1-5 · 12 assets · page 1 / 3"));
    }

    #[tokio::test]
    async fn search_and_page_are_applied() {
        let request = PageRequest {
            page: Some(Page::Companies),
            search: Some("ltd".into()),
            ..PageRequest::default()
        };
        let out = app().render(&request).await.expect("render");
        assert!(out.contains("Sigma Systems Ltd"));
        assert!(!out.contains("Pixel Forge"));

        let request = PageRequest {
            page: Some(Page::Promotions),
            page_number: Some(9),
            ..PageRequest::default()
        };
        let out = app().render(&request).await.expect("render");
        assert!(out.contains("page 3 / 3"));
    }

    #[tokio::test]
    async fn load_failures_are_reported() {
        let app = app();
        app.hub().documents().fail_next("storage offline").await;
        let request = PageRequest {
            page: Some(Page::Documents),
            ..PageRequest::default()
        };
        let out = app.render(&request).await.expect("render");
        assert!(out.contains("Could not load documents: Fetch error: storage offline"));
        assert!(out.contains("[error] documents: Fetch error: storage offline"));
    }

    #[tokio::test]
    async fn list_shows_counts_for_every_page() {
        let request = PageRequest {
            list_pages: true,
            page: Some(Page::Documents),
            ..PageRequest::default()
        };
        let out = app().render(&request).await.expect("render");
        assert_eq!(out.lines().count(), Page::ALL.len());
        assert!(out.lines().any(|l| l.starts_with("> documents") && l.ends_with("  10")));
    }

    #[tokio::test]
    async fn every_page_renders() {
        let app = app();
        for page in Page::ALL {
            let request = PageRequest {
                page: Some(page),
                ..PageRequest::default()
            };
            let out = app.render(&request).await.expect("render");
            assert!(out.contains(page.title()), "{page}");
            assert!(!out.contains("shown raw"), "{page} had renderer failures");
        }
    }
}
