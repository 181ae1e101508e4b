//! Page State
//!
//! One admin screen: the record list (`Query`), its `DataTable` and the
//! entity `Dialog`. The page is the single writer of its rows. The table and
//! dialog only report intents; the page applies them.
//!
//! ```text
//! DataTable ──TableIntent──► channel ──► PageState::pump ──► Dialog / UiEvent
//! Dialog ──Submission──► Repository ──Ok──► PageState rows ──► UiEvent::Toast
//! ```

use crate::components::composite::data_table::{DataTable, TableIntent, TableView};
use crate::components::composite::modal::{Dialog, DialogMode};
use crate::domain::{Entity, RowId};
use crate::error::{DialogSnafu, Error, Result};
use crate::services::Repository;
use crate::states::{LoadState, Page, Query, UiEvent};
use crossbeam_channel::{Receiver, Sender};
use std::sync::Arc;
use tracing::{info, warn};

/// Row actions a page offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageActions {
    pub add: bool,
    pub view: bool,
    pub edit: bool,
    pub delete: bool,
}

impl PageActions {
    pub const CRUD: Self = Self {
        add: true,
        view: true,
        edit: true,
        delete: true,
    };
}

/// Mutation confirmed by the repository
enum Change<E> {
    Created(E),
    Updated(E),
    Deleted(RowId),
}

/// State of one entity page
pub struct PageState<E: Entity, R: Repository<E>> {
    page: Page,
    repo: Arc<R>,
    query: Query<Vec<E>>,
    table: DataTable<E>,
    dialog: Dialog<E>,
    intents: Receiver<TableIntent>,
    events: Sender<UiEvent>,
}

impl<E: Entity, R: Repository<E>> PageState<E, R> {
    /// Wire `table`'s action callbacks into the page and take ownership
    pub fn new(page: Page, table: DataTable<E>, actions: PageActions, repo: Arc<R>, events: Sender<UiEvent>) -> Self {
        let (tx, intents) = crossbeam_channel::unbounded();

        let mut table = {
            let tx = tx.clone();
            table.on_change(move |intent| {
                let _ = tx.send(intent.clone());
            })
        };
        if actions.add {
            let tx = tx.clone();
            table = table.on_add(move || {
                let _ = tx.send(TableIntent::Add);
            });
        }
        if actions.view {
            let tx = tx.clone();
            table = table.on_view(move |id| {
                let _ = tx.send(TableIntent::View(id.clone()));
            });
        }
        if actions.edit {
            let tx = tx.clone();
            table = table.on_edit(move |id| {
                let _ = tx.send(TableIntent::Edit(id.clone()));
            });
        }
        if actions.delete {
            table = table.on_delete(move |id| {
                let _ = tx.send(TableIntent::Delete(id.clone()));
            });
        }

        Self {
            page,
            repo,
            query: Query::new(),
            table,
            dialog: Dialog::new(),
            intents,
            events,
        }
    }

    // ==================== Getters ====================

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn rows(&self) -> &[E] {
        self.query.data()
    }

    pub fn record(&self, id: &RowId) -> Option<&E> {
        self.rows().iter().find(|r| r.id() == *id)
    }

    pub fn load_state(&self) -> &LoadState {
        self.query.state()
    }

    pub fn table(&self) -> &DataTable<E> {
        &self.table
    }

    /// Search, filter, sort and paging controls
    pub fn table_mut(&mut self) -> &mut DataTable<E> {
        &mut self.table
    }

    pub fn dialog(&self) -> &Dialog<E> {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut Dialog<E> {
        &mut self.dialog
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }

    pub fn view(&self) -> TableView {
        self.table.view(self.rows())
    }

    pub(crate) fn emit(&self, event: UiEvent) {
        let _ = self.events.send(event);
    }

    // ==================== Loading ====================

    /// Fetch all records from the repository
    pub async fn load(&mut self) -> &LoadState {
        self.emit(UiEvent::LoadingChanged {
            page: self.page,
            loading: true,
            message: Some(format!("Loading {}", self.page.title()).into()),
        });

        let repo = self.repo.clone();
        self.query.fetch(|| async move { repo.list().await }).await;

        self.emit(UiEvent::LoadingChanged {
            page: self.page,
            loading: false,
            message: None,
        });

        match self.query.state() {
            LoadState::Error(message) => {
                warn!(page = %self.page, error = %message, "Failed to load records");
                self.emit(UiEvent::ErrorOccurred {
                    source: self.page.slug().into(),
                    message: message.clone(),
                });
            }
            _ => info!(page = %self.page, count = self.rows().len(), "Records loaded"),
        }

        self.table.sync(self.query.data());
        self.query.state()
    }

    /// Re-run a failed load
    pub async fn retry(&mut self) -> &LoadState {
        if !self.query.can_retry() {
            return self.query.state();
        }
        self.load().await
    }

    // ==================== Intents ====================

    /// Apply queued table intents. Returns how many were handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(intent) = self.intents.try_recv() {
            self.apply(intent);
            handled += 1;
        }
        handled
    }

    fn apply(&mut self, intent: TableIntent) {
        match &intent {
            TableIntent::Add => {
                self.dialog.open_add();
            }
            TableIntent::Edit(id) | TableIntent::View(id) | TableIntent::Delete(id) => {
                let Some(record) = self.record(id).cloned() else {
                    warn!(page = %self.page, %id, "Intent for unknown record");
                    self.emit(UiEvent::error_toast(format!("{} {id} no longer exists", E::NAME)));
                    return;
                };
                match &intent {
                    TableIntent::Edit(_) => self.dialog.open_edit(&record),
                    TableIntent::View(_) => self.dialog.open_view(&record),
                    _ => self.dialog.open_delete(&record),
                };
            }
            TableIntent::Search(_) | TableIntent::Filter { .. } | TableIntent::Sort(_) | TableIntent::Paginate(_) => {}
        }
        self.emit(UiEvent::Intent {
            page: self.page,
            intent,
        });
    }

    // ==================== Mutations ====================

    /// Submit the open dialog through the repository and apply the result
    pub async fn submit(&mut self) -> Result<()> {
        let repo = self.repo.clone();
        let mut change = None;
        let slot = &mut change;

        let result = self
            .dialog
            .submit_with(|submission| async move {
                let applied = match (submission.mode, submission.entity) {
                    (DialogMode::Add, Some(record)) => Change::Created(repo.create(record).await?),
                    (DialogMode::Edit(_), Some(record)) => Change::Updated(repo.update(record).await?),
                    (DialogMode::Delete(id), _) => {
                        repo.delete(&id).await?;
                        Change::Deleted(id)
                    }
                    _ => {
                        return DialogSnafu {
                            message: "submission carries no record",
                        }
                        .fail();
                    }
                };
                *slot = Some(applied);
                Ok(())
            })
            .await;

        match result {
            Ok(()) => {
                if let Some(change) = change {
                    self.apply_change(change);
                }
                Ok(())
            }
            Err(e @ Error::Validation { .. }) => Err(e),
            Err(e) => {
                if !matches!(e, Error::Cancelled) {
                    self.emit(UiEvent::error_toast(format!("Could not save {}: {e}", E::NAME.to_lowercase())));
                }
                Err(e)
            }
        }
    }

    fn apply_change(&mut self, change: Change<E>) {
        let rows = self.query.data_mut();
        let message = match change {
            Change::Created(record) => {
                let id = record.id();
                rows.push(record);
                format!("{} {id} created", E::NAME)
            }
            Change::Updated(record) => {
                let id = record.id();
                if let Some(slot) = rows.iter_mut().find(|r| r.id() == id) {
                    *slot = record;
                }
                format!("{} {id} updated", E::NAME)
            }
            Change::Deleted(id) => {
                rows.retain(|r| r.id() != id);
                format!("{} {id} deleted", E::NAME)
            }
        };
        info!(page = %self.page, "{message}");
        self.table.sync(self.query.data());
        self.emit(UiEvent::success(message));
    }

    /// Replace one record in place (e.g. after a background status change)
    pub(crate) fn replace_record(&mut self, record: E) {
        let id = record.id();
        let rows = self.query.data_mut();
        match rows.iter_mut().find(|r| r.id() == id) {
            Some(slot) => *slot = record,
            None => rows.push(record),
        }
        self.table.sync(self.query.data());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_table::{Column, FilterField, FilterValue};
    use crate::components::composite::modal::DialogPhase;
    use crate::domain::{Company, Row};
    use crate::services::{InMemoryRepository, fixtures};

    type CompanyPage = PageState<Company, InMemoryRepository<Company>>;

    fn page(events: Sender<UiEvent>) -> CompanyPage {
        let table = DataTable::new(vec![
            Column::new("name", "Name").sortable(),
            Column::new("email", "Email"),
            Column::actions(),
        ])
        .expect("columns")
        .items_per_page(4)
        .with_filters(vec![FilterField::select(
            "status",
            "Status",
            &[("active", "Active"), ("inactive", "Inactive")],
        )]);
        let repo = Arc::new(InMemoryRepository::new(fixtures::companies()));
        PageState::new(Page::Companies, table, PageActions::CRUD, repo, events)
    }

    #[tokio::test]
    async fn load_populates_rows_and_reports_loading() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut page = page(tx);

        assert!(page.load().await.is_loaded());
        assert_eq!(page.rows().len(), fixtures::companies().len());
        assert_eq!(page.view().rows.len(), 4);

        let loading: Vec<bool> = rx
            .try_iter()
            .filter_map(|e| match e {
                UiEvent::LoadingChanged { loading, .. } => Some(loading),
                _ => None,
            })
            .collect();
        assert_eq!(loading, vec![true, false]);
    }

    #[tokio::test]
    async fn failed_load_is_retryable() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut page = page(tx);
        page.repository().fail_next("connection reset").await;

        assert!(page.load().await.error().is_some());
        assert!(rx.try_iter().any(|e| matches!(e, UiEvent::ErrorOccurred { .. })));

        assert!(page.retry().await.is_loaded());
        assert!(!page.rows().is_empty());
    }

    #[tokio::test]
    async fn row_action_opens_dialog_via_intent_channel() {
        let (tx, _rx) = crossbeam_channel::unbounded();
        let mut page = page(tx);
        page.load().await;

        let id = page.rows()[0].id();
        assert!(page.table().click_edit(&id));
        assert_eq!(page.pump(), 1);
        assert_eq!(page.dialog().mode(), Some(&DialogMode::Edit(id)));
        assert_eq!(page.dialog().value("name"), "Sigma Systems Ltd");
    }

    #[tokio::test]
    async fn add_submission_appends_row_and_toasts() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut page = page(tx);
        page.load().await;
        let before = page.rows().len();

        page.table().click_add();
        page.pump();
        let dialog = page.dialog_mut();
        dialog.set_value("name", "Kola Builders");
        dialog.set_value("registration_number", "RC-777001");
        dialog.set_value("email", "info@kola.ng");

        page.submit().await.expect("submit");
        assert_eq!(page.rows().len(), before + 1);
        assert_eq!(page.dialog().phase(), DialogPhase::Closed);
        assert!(rx.try_iter().any(|e| matches!(
            e,
            UiEvent::Toast { severity: crate::states::NotificationSeverity::Success, .. }
        )));
    }

    #[tokio::test]
    async fn failed_submission_keeps_dialog_and_rows() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut page = page(tx);
        page.load().await;
        let target = page.rows()[1].clone();

        page.table().click_delete(&target.id());
        page.pump();
        page.repository().fail_next("backend unavailable").await;

        assert!(page.submit().await.is_err());
        assert!(page.dialog().is_open());
        assert!(page.dialog().submit_error().is_some());
        assert!(page.record(&target.id()).is_some());
        assert!(rx.try_iter().any(|e| matches!(
            e,
            UiEvent::Toast { severity: crate::states::NotificationSeverity::Error, .. }
        )));

        page.submit().await.expect("retry delete");
        assert!(page.record(&target.id()).is_none());
    }

    #[tokio::test]
    async fn deleting_last_page_rows_clamps() {
        let (tx, _rx) = crossbeam_channel::unbounded();
        let mut page = page(tx);
        page.load().await;
        // 10 companies, 4 per page: page 3 holds 2 rows
        page.table_mut().go_to_page(3, 10);
        for _ in 0..2 {
            let id = page.view().rows[0].id.clone();
            page.table().click_delete(&id);
            page.pump();
            page.submit().await.expect("delete");
        }

        let view = page.view();
        assert_eq!(view.pagination.total_pages, 2);
        assert_eq!(page.table().state().current_page, 2);
    }

    #[tokio::test]
    async fn filter_intents_are_forwarded() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut page = page(tx);
        page.load().await;

        page.table_mut().set_filter("status", FilterValue::Select("inactive".into()));
        page.pump();

        assert_eq!(page.view().rows.len(), 2);
        assert!(rx.try_iter().any(|e| matches!(
            e,
            UiEvent::Intent { intent: TableIntent::Filter { .. }, .. }
        )));
    }
}
