//! Modal Component
//!
//! Add/Edit/View/Delete dialog for one entity type.
//!
//! ```text
//! Closed ─open_*─► Idle ─begin_submit─► Submitting ─finish(Ok)──► Closed
//!                   ▲  │ (invalid)          │
//!                   └──┘                    └─finish(Err)─► Idle
//! ```
//!
//! Every submission carries a `CancellationToken`. Dismissing or dropping the
//! dialog cancels it, and a result arriving for a cancelled or superseded
//! ticket is discarded.

use std::future::Future;
use std::marker::PhantomData;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::constants::SUBMIT_FAILED_MESSAGE;
use crate::domain::{Entity, FormValues, RowId, ValidationErrors, humanize_field};
use crate::error::{DialogSnafu, Error, Result};

/// What the dialog was opened for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogMode {
    Add,
    Edit(RowId),
    View(RowId),
    Delete(RowId),
}

impl DialogMode {
    pub fn target(&self) -> Option<&RowId> {
        match self {
            DialogMode::Add => None,
            DialogMode::Edit(id) | DialogMode::View(id) | DialogMode::Delete(id) => Some(id),
        }
    }
}

/// Stable phases; validation happens synchronously inside `begin_submit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    Closed,
    Idle,
    Submitting,
}

/// Ticket for one in-flight submission
#[derive(Debug, Clone)]
pub struct Submission<E> {
    pub id: Uuid,
    pub mode: DialogMode,
    pub values: FormValues,
    /// Parsed record; `None` for deletes
    pub entity: Option<E>,
    pub token: CancellationToken,
}

#[derive(Debug)]
struct Pending {
    id: Uuid,
    token: CancellationToken,
}

/// One field as shown in the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogField {
    pub name: String,
    pub label: String,
    pub value: String,
    pub required: bool,
    pub error: Option<String>,
}

/// Display model of an open dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView {
    pub title: String,
    /// Delete confirmation text
    pub message: Option<String>,
    pub fields: Vec<DialogField>,
    pub read_only: bool,
    pub submit_label: Option<&'static str>,
    pub submit_enabled: bool,
    pub cancel_enabled: bool,
    pub error: Option<String>,
}

/// Dialog state for entity `E`
#[derive(Debug)]
pub struct Dialog<E: Entity> {
    mode: Option<DialogMode>,
    values: FormValues,
    errors: ValidationErrors,
    submit_error: Option<String>,
    pending: Option<Pending>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Default for Dialog<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Dialog<E> {
    pub fn new() -> Self {
        Self {
            mode: None,
            values: E::defaults(),
            errors: ValidationErrors::new(),
            submit_error: None,
            pending: None,
            _entity: PhantomData,
        }
    }

    // ==================== Queries ====================

    pub fn phase(&self) -> DialogPhase {
        match (&self.mode, &self.pending) {
            (None, _) => DialogPhase::Closed,
            (Some(_), Some(_)) => DialogPhase::Submitting,
            (Some(_), None) => DialogPhase::Idle,
        }
    }

    pub fn mode(&self) -> Option<&DialogMode> {
        self.mode.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or_default()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors.for_field(field)
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Token of the in-flight submission, if any
    pub fn pending_token(&self) -> Option<CancellationToken> {
        self.pending.as_ref().map(|p| p.token.clone())
    }

    pub fn can_submit(&self) -> bool {
        matches!(
            self.mode,
            Some(DialogMode::Add | DialogMode::Edit(_) | DialogMode::Delete(_))
        ) && self.pending.is_none()
    }

    pub fn can_close(&self) -> bool {
        self.pending.is_none()
    }

    // ==================== Open / close ====================

    fn open(&mut self, mode: DialogMode, values: FormValues) -> bool {
        if self.pending.is_some() {
            tracing::debug!(entity = E::NAME, "Ignoring open while a submission is pending");
            return false;
        }
        self.mode = Some(mode);
        self.values = values;
        self.errors = ValidationErrors::new();
        self.submit_error = None;
        true
    }

    pub fn open_add(&mut self) -> bool {
        self.open(DialogMode::Add, E::defaults())
    }

    pub fn open_edit(&mut self, record: &E) -> bool {
        self.open(DialogMode::Edit(record.id()), record.to_form())
    }

    pub fn open_view(&mut self, record: &E) -> bool {
        self.open(DialogMode::View(record.id()), record.to_form())
    }

    pub fn open_delete(&mut self, record: &E) -> bool {
        self.open(DialogMode::Delete(record.id()), record.to_form())
    }

    /// Close and reset. Refused while a submission is in flight.
    pub fn close(&mut self) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.reset();
        true
    }

    /// Force-close, cancelling any in-flight submission
    pub fn dismiss(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::info!(entity = E::NAME, submission = %pending.id, "Cancelling in-flight submission");
            pending.token.cancel();
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.mode = None;
        self.values = E::defaults();
        self.errors = ValidationErrors::new();
        self.submit_error = None;
    }

    /// Edit one form field. Ignored for read-only dialogs and while submitting.
    pub fn set_value(&mut self, field: &str, value: impl Into<String>) -> bool {
        if !matches!(self.mode, Some(DialogMode::Add | DialogMode::Edit(_))) || self.pending.is_some() {
            return false;
        }
        self.values.insert(field.to_string(), value.into());
        true
    }

    // ==================== Submission ====================

    /// Validate and enter `Submitting`.
    ///
    /// On validation failure the inline errors are stored and the dialog stays
    /// idle. Deletes skip validation.
    pub fn begin_submit(&mut self) -> Result<Submission<E>> {
        let Some(mode) = self.mode.clone() else {
            return DialogSnafu {
                message: "dialog is not open",
            }
            .fail();
        };
        if self.pending.is_some() {
            return Err(Error::SubmissionPending);
        }

        let entity = match &mode {
            DialogMode::View(_) => {
                return DialogSnafu {
                    message: "view dialogs do not submit",
                }
                .fail();
            }
            DialogMode::Delete(_) => None,
            DialogMode::Add => Some(self.validate(None)?),
            DialogMode::Edit(id) => Some(self.validate(Some(id.clone()))?),
        };

        let submission = Submission {
            id: Uuid::new_v4(),
            mode,
            values: self.values.clone(),
            entity,
            token: CancellationToken::new(),
        };
        self.pending = Some(Pending {
            id: submission.id,
            token: submission.token.clone(),
        });
        self.submit_error = None;
        tracing::debug!(entity = E::NAME, submission = %submission.id, "Submission started");
        Ok(submission)
    }

    fn validate(&mut self, id: Option<RowId>) -> Result<E> {
        match E::from_form(id, &self.values) {
            Ok(entity) => {
                self.errors = ValidationErrors::new();
                Ok(entity)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(Error::Validation { errors })
            }
        }
    }

    /// Settle a submission. Returns `false` when the result was discarded.
    pub fn finish_submit(&mut self, submission_id: Uuid, outcome: Result<()>) -> bool {
        let current = self.pending.as_ref().is_some_and(|p| p.id == submission_id);
        if !current {
            tracing::warn!(entity = E::NAME, submission = %submission_id, "Discarding result of stale submission");
            return false;
        }
        let Some(pending) = self.pending.take() else {
            return false;
        };

        if pending.token.is_cancelled() {
            tracing::warn!(entity = E::NAME, submission = %submission_id, "Discarding result of cancelled submission");
            return false;
        }

        match outcome {
            Ok(()) => {
                tracing::info!(entity = E::NAME, submission = %submission_id, "Submission succeeded");
                self.reset();
            }
            Err(e) => {
                tracing::warn!(entity = E::NAME, submission = %submission_id, error = %e, "Submission failed");
                self.submit_error = Some(SUBMIT_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    /// Run one full submit cycle against `submit`, racing it with the ticket's token.
    pub async fn submit_with<F, Fut>(&mut self, submit: F) -> Result<()>
    where
        F: FnOnce(Submission<E>) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let submission = self.begin_submit()?;
        let id = submission.id;
        let token = submission.token.clone();

        let outcome = tokio::select! {
            _ = token.cancelled() => Err(Error::Cancelled),
            result = submit(submission) => result,
        };

        if token.is_cancelled() {
            self.finish_submit(id, Err(Error::Cancelled));
            return Err(Error::Cancelled);
        }

        match outcome {
            Ok(()) => {
                self.finish_submit(id, Ok(()));
                Ok(())
            }
            Err(e) => {
                self.finish_submit(id, DialogSnafu { message: e.to_string() }.fail());
                Err(e)
            }
        }
    }

    // ==================== Display ====================

    pub fn title(&self) -> Option<String> {
        let title = match self.mode.as_ref()? {
            DialogMode::Add => format!("Add {}", E::NAME),
            DialogMode::Edit(_) => format!("Edit {}", E::NAME),
            DialogMode::View(_) => format!("{} Details", E::NAME),
            DialogMode::Delete(_) => format!("Delete {}", E::NAME),
        };
        Some(title)
    }

    pub fn view(&self) -> Option<DialogView> {
        let mode = self.mode.as_ref()?;
        let read_only = matches!(mode, DialogMode::View(_) | DialogMode::Delete(_));

        let fields = match mode {
            DialogMode::Delete(_) => Vec::new(),
            _ => self
                .values
                .iter()
                .map(|(name, value)| DialogField {
                    name: name.clone(),
                    label: humanize_field(name),
                    value: value.clone(),
                    required: E::REQUIRED.iter().any(|r| *r == name.as_str()),
                    error: self.errors.for_field(name).map(str::to_string),
                })
                .chain(
                    E::REQUIRED
                        .iter()
                        .filter(|name| !self.values.contains_key(**name))
                        .map(|name| DialogField {
                            name: name.to_string(),
                            label: humanize_field(name),
                            value: String::new(),
                            required: true,
                            error: self.errors.for_field(name).map(str::to_string),
                        }),
                )
                .collect(),
        };

        let submit_label = match mode {
            DialogMode::Add => Some("Create"),
            DialogMode::Edit(_) => Some("Save"),
            DialogMode::Delete(_) => Some("Delete"),
            DialogMode::View(_) => None,
        };
        let message = match mode {
            DialogMode::Delete(id) => Some(format!(
                "Are you sure you want to delete {} {id}? This cannot be undone.",
                E::NAME.to_lowercase()
            )),
            _ => None,
        };

        Some(DialogView {
            title: self.title().unwrap_or_default(),
            message,
            fields,
            read_only,
            submit_label,
            submit_enabled: self.can_submit(),
            cancel_enabled: self.can_close(),
            error: self.submit_error.clone(),
        })
    }
}

impl<E: Entity> Drop for Dialog<E> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.token.cancel();
        }
    }
}
