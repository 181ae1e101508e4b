//! Backups Page
//!
//! Backup snapshots plus the two long operations on them. Creating and
//! restoring report simulated progress through `UiEvent::Progress` until the
//! repository settles.

use std::sync::Arc;

use snafu::ensure;
use tracing::{info, warn};

use crate::components::composite::data_table::{Badge, Column, DataTable, DateCell, FilterField, RenderError};
use crate::components::composite::modal::DialogMode;
use crate::domain::{self, Backup, CellValue, EntityForm, RowId};
use crate::error::{DialogSnafu, InvalidSnafu, NotFoundSnafu, Result};
use crate::services::{InMemoryRepository, ProgressConfig, Repository, ServiceHub, run_with_progress};
use crate::states::{Page, PageActions, PageState, UiEvent};

pub type BackupsPage = PageState<Backup, InMemoryRepository<Backup>>;

/// Ticks of simulated work per operation
const CREATE_TICKS: u32 = 12;
const RESTORE_TICKS: u32 = 8;

/// Backups are immutable once taken
const ACTIONS: PageActions = PageActions {
    add: true,
    view: true,
    edit: false,
    delete: true,
};

fn size(value: &CellValue, _: &Backup) -> Result<String, RenderError> {
    let mb = value
        .as_f64()
        .ok_or_else(|| RenderError::new(format!("size is not a number: {value}")))?;
    if mb >= 1024.0 {
        Ok(format!("{:.2} GB", mb / 1024.0))
    } else {
        Ok(format!("{mb:.0} MB"))
    }
}

pub fn columns() -> Vec<Column<Backup>> {
    vec![
        Column::new("id", "ID").sortable().fixed_width(8),
        Column::new("name", "Name").sortable(),
        Column::new("backup_type", "Type").render_with(Badge),
        Column::new("created_at", "Created").sortable().render_with(DateCell::with_time()),
        Column::new("size_mb", "Size").sortable().render_with(size),
        Column::new("status", "Status").render_with(Badge),
        Column::actions(),
    ]
}

pub fn filters() -> Vec<FilterField> {
    vec![
        FilterField::select("backup_type", "Type", &[("full", "Full"), ("incremental", "Incremental")]),
        FilterField::select(
            "status",
            "Status",
            &[("in_progress", "In progress"), ("completed", "Completed"), ("failed", "Failed")],
        ),
        FilterField::date("created_at", "Created"),
    ]
}

pub fn page(hub: &ServiceHub, items_per_page: usize) -> Result<BackupsPage> {
    let table = DataTable::new(columns())?
        .with_filters(filters())
        .with_search_fields(&["id", "name"])
        .items_per_page(items_per_page)
        .items_label("backups");
    Ok(PageState::new(Page::Backups, table, ACTIONS, hub.backups(), hub.sender()))
}

// ==================== Operations ====================

/// Estimated snapshot size for a backup type
fn estimated_size_mb(backup_type: &str) -> f64 {
    match backup_type {
        "incremental" => 220.0,
        _ => 5_240.0,
    }
}

fn progress_reporter<'a>(page: &'a BackupsPage, task: &str) -> impl FnMut(u8) + 'a {
    let task: Arc<str> = task.into();
    move |percent| page.emit(UiEvent::Progress { task: task.clone(), percent })
}

/// Take a new backup, reporting progress until the snapshot is stored
pub async fn create_backup(
    page: &mut BackupsPage,
    progress: ProgressConfig,
    name: &str,
    backup_type: &str,
) -> Result<Backup> {
    let draft = Backup::from_form(None, &domain::form([("name", name), ("backup_type", backup_type)]))?;
    run_create(page, progress, draft).await
}

async fn run_create(page: &mut BackupsPage, progress: ProgressConfig, draft: Backup) -> Result<Backup> {
    let repo = page.repository().clone();
    let record = repo.create(draft).await?;
    let id = record.id.clone();
    page.replace_record(record.clone());
    info!(backup = %id, kind = %record.backup_type, "Backup started");

    let work = {
        let repo = repo.clone();
        let mut done = record.clone();
        async move {
            tokio::time::sleep(progress.tick * CREATE_TICKS).await;
            done.status = "completed".into();
            done.size_mb = estimated_size_mb(&done.backup_type);
            repo.update(done).await
        }
    };
    let result = run_with_progress(work, progress, progress_reporter(page, &format!("backup {id}"))).await;

    match result {
        Ok(done) => {
            page.replace_record(done.clone());
            page.emit(UiEvent::success(format!("Backup {id} created")));
            Ok(done)
        }
        Err(e) => {
            warn!(backup = %id, error = %e, "Backup failed");
            let mut failed = record;
            failed.status = "failed".into();
            if let Err(update_err) = repo.update(failed.clone()).await {
                warn!(backup = %id, error = %update_err, "Could not record backup failure");
            }
            page.replace_record(failed);
            page.emit(UiEvent::error_toast(format!("Backup {id} failed: {e}")));
            Err(e)
        }
    }
}

/// Restore a completed backup
pub async fn restore_backup(page: &mut BackupsPage, progress: ProgressConfig, id: &RowId) -> Result<()> {
    let Some(record) = page.record(id).cloned() else {
        return NotFoundSnafu { id: id.to_string() }.fail();
    };
    ensure!(
        record.status == "completed",
        InvalidSnafu {
            message: format!("backup {id} is {} and cannot be restored", record.status),
        }
    );

    let repo = page.repository().clone();
    let work = {
        let id = id.clone();
        async move {
            tokio::time::sleep(progress.tick * RESTORE_TICKS).await;
            repo.get(&id).await.map(|_| ())
        }
    };
    let result = run_with_progress(work, progress, progress_reporter(page, &format!("restore {id}"))).await;

    match &result {
        Ok(()) => {
            info!(backup = %id, "Backup restored");
            page.emit(UiEvent::success(format!("Backup {id} restored")));
        }
        Err(e) => page.emit(UiEvent::error_toast(format!("Restore of {id} failed: {e}"))),
    }
    result
}

/// Submit the open dialog. New backups run through [`create_backup`]'s
/// progress flow; deletes go through the regular page submission.
pub async fn submit(page: &mut BackupsPage, progress: ProgressConfig) -> Result<()> {
    if page.dialog().mode() != Some(&DialogMode::Add) {
        return page.submit().await;
    }

    let submission = page.dialog_mut().begin_submit()?;
    let Some(draft) = submission.entity else {
        page.dialog_mut().finish_submit(
            submission.id,
            DialogSnafu {
                message: "submission carries no record",
            }
            .fail(),
        );
        return DialogSnafu {
            message: "submission carries no record",
        }
        .fail();
    };
    let result = run_create(page, progress, draft).await;
    let outcome = match &result {
        Ok(_) => Ok(()),
        Err(e) => DialogSnafu { message: e.to_string() }.fail(),
    };
    page.dialog_mut().finish_submit(submission.id, outcome);
    result.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crossbeam_channel::Receiver;

    fn progress_of(rx: &Receiver<UiEvent>, task: &str) -> Vec<u8> {
        rx.try_iter()
            .filter_map(|event| match event {
                UiEvent::Progress { task: t, percent } if &*t == task => Some(percent),
                _ => None,
            })
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn create_reports_progress_and_completes() {
        let hub = ServiceHub::with_defaults();
        let rx = hub.events();
        let mut page = page(&hub, 50).expect("page");
        page.load().await;

        let backup = create_backup(&mut page, ProgressConfig::default(), "Ad hoc", "incremental")
            .await
            .expect("backup");
        assert_eq!(backup.id, "BKP-0009");
        assert_eq!(backup.status, "completed");
        assert_eq!(page.rows().len(), 9);

        let seen = progress_of(&rx, "backup BKP-0009");
        assert_eq!(seen.first(), Some(&0));
        assert_eq!(seen.last(), Some(&100));
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
        assert!(seen[..seen.len() - 1].iter().all(|p| *p <= 90));

        let view = page.view();
        assert!(view.rows.iter().any(|r| r.cells[0].text == "BKP-0009" && r.cells[4].text == "220 MB"));
    }

    #[tokio::test(start_paused = true)]
    async fn missing_name_is_rejected_before_anything_runs() {
        let hub = ServiceHub::with_defaults();
        let mut page = page(&hub, 50).expect("page");
        page.load().await;

        let err = create_backup(&mut page, ProgressConfig::default(), "", "full")
            .await
            .expect_err("validation");
        assert!(matches!(err, Error::Validation { .. }));
        assert_eq!(hub.backups().len().await, 8);
    }

    #[tokio::test(start_paused = true)]
    async fn only_completed_backups_restore() {
        let hub = ServiceHub::with_defaults();
        let rx = hub.events();
        let mut page = page(&hub, 50).expect("page");
        page.load().await;

        let failed = RowId::from("BKP-0003");
        let err = restore_backup(&mut page, ProgressConfig::default(), &failed)
            .await
            .expect_err("failed backup");
        assert!(matches!(err, Error::Invalid { .. }));

        let good = RowId::from("BKP-0001");
        restore_backup(&mut page, ProgressConfig::default(), &good)
            .await
            .expect("restore");
        assert_eq!(progress_of(&rx, "restore BKP-0001").last(), Some(&100));
    }

    #[tokio::test(start_paused = true)]
    async fn failed_restore_toasts_and_keeps_progress_short_of_done() {
        let hub = ServiceHub::with_defaults();
        let rx = hub.events();
        let mut page = page(&hub, 50).expect("page");
        page.load().await;
        hub.backups().fail_next("disk offline").await;

        let id = RowId::from("BKP-0002");
        assert!(restore_backup(&mut page, ProgressConfig::default(), &id).await.is_err());

        let events: Vec<UiEvent> = rx.try_iter().collect();
        let progress: Vec<u8> = events
            .iter()
            .filter_map(|e| match e {
                UiEvent::Progress { percent, .. } => Some(*percent),
                _ => None,
            })
            .collect();
        assert!(!progress.contains(&100));
        assert!(events.iter().any(|e| matches!(
            e,
            UiEvent::Toast { message, .. } if message.contains("disk offline")
        )));
    }

    #[tokio::test(start_paused = true)]
    async fn add_dialog_runs_the_backup_flow() {
        let hub = ServiceHub::with_defaults();
        let mut page = page(&hub, 50).expect("page");
        page.load().await;

        page.dialog_mut().open_add();
        page.dialog_mut().set_value("name", "Before audit");
        submit(&mut page, ProgressConfig::default()).await.expect("submit");

        assert!(!page.dialog().is_open());
        let created = page.record(&RowId::from("BKP-0009")).expect("created");
        assert_eq!(created.status, "completed");
        assert_eq!(created.backup_type, "full");
        assert_eq!(page.view().rows.iter().filter(|r| r.cells[4].text == "5.12 GB").count(), 1);
    }
}
