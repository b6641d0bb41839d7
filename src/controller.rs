//! Task list controller: owns the task collection plus the transient
//! draft/edit/filter state and keeps the collection in step with the store.
//!
//! Every mutation goes through the same path: plan it locally (validation,
//! record lookup), run it with [`commit`] (one request, then exactly one
//! re-fetch when the store accepted it), and fold the result back in with
//! [`TaskListController::apply`]. The planning and applying halves are
//! synchronous so the TUI can run the middle part on a spawned task.

use crate::domain::{filter_tasks, Filter, NewTask, Task, TaskId};
use crate::store::TaskStore;
use chrono::{DateTime, Local};
use std::sync::Arc;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

/// At most one task is edited at a time
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Inactive,
    Editing { id: TaskId, buffer: String },
}

impl EditState {
    pub fn is_editing(&self, task_id: &TaskId) -> bool {
        matches!(self, EditState::Editing { id, .. } if id == task_id)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, EditState::Editing { .. })
    }

    pub fn buffer(&self) -> Option<&str> {
        match self {
            EditState::Editing { buffer, .. } => Some(buffer),
            EditState::Inactive => None,
        }
    }
}

/// Why a full-record update was sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOrigin {
    Edit,
    Toggle,
}

/// One planned request against the store
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Create(NewTask),
    Update { task: Task, origin: UpdateOrigin },
    Delete(TaskId),
}

impl Mutation {
    pub fn kind(&self) -> &'static str {
        match self {
            Mutation::Create(_) => "create",
            Mutation::Update {
                origin: UpdateOrigin::Edit,
                ..
            } => "edit",
            Mutation::Update {
                origin: UpdateOrigin::Toggle,
                ..
            } => "toggle",
            Mutation::Delete(_) => "delete",
        }
    }
}

/// Result of a refresh or a committed mutation, ready to be applied
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    pub op_id: Uuid,
    /// `None` for a plain refresh
    pub mutation: Option<Mutation>,
    /// Whether the store acknowledged the mutation (always true for refresh)
    pub accepted: bool,
    /// Fresh collection, when the follow-up list succeeded
    pub snapshot: Option<Vec<Task>>,
}

/// Fetch the full collection; failures are logged and swallowed
pub async fn fetch_all(store: &dyn TaskStore) -> Option<Vec<Task>> {
    match store.list().await {
        Ok(tasks) => {
            debug!(count = tasks.len(), "fetched tasks");
            Some(tasks)
        }
        Err(e) => {
            warn!(error = %e, "error fetching tasks");
            None
        }
    }
}

/// Plain re-fetch
pub async fn refresh(store: &dyn TaskStore) -> SyncOutcome {
    let op_id = Uuid::new_v4();
    let snapshot = fetch_all(store)
        .instrument(info_span!("refresh", %op_id))
        .await;

    SyncOutcome {
        op_id,
        mutation: None,
        accepted: true,
        snapshot,
    }
}

/// Send one mutation and, if the store accepts it, re-fetch exactly once
pub async fn commit(store: &dyn TaskStore, mutation: Mutation) -> SyncOutcome {
    let op_id = Uuid::new_v4();
    let span = info_span!("commit", %op_id, op = mutation.kind());

    async move {
        let result = match &mutation {
            Mutation::Create(task) => store.create(task).await,
            Mutation::Update { task, .. } => store.update(task).await,
            Mutation::Delete(id) => store.delete(id).await,
        };

        match result {
            Ok(()) => {
                info!("store accepted mutation");
                let snapshot = fetch_all(store).await;
                SyncOutcome {
                    op_id,
                    mutation: Some(mutation),
                    accepted: true,
                    snapshot,
                }
            }
            Err(e) => {
                warn!(error = %e, rejected = e.is_rejection(), "mutation not applied");
                SyncOutcome {
                    op_id,
                    mutation: Some(mutation),
                    accepted: false,
                    snapshot: None,
                }
            }
        }
    }
    .instrument(span)
    .await
}

/// Client-side view of the task store plus transient UI state
pub struct TaskListController {
    store: Arc<dyn TaskStore>,
    tasks: Vec<Task>,
    pub filter: Filter,
    pub dark_mode: bool,
    pub draft: String,
    edit: EditState,
    last_synced: Option<DateTime<Local>>,
}

impl TaskListController {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self {
            store,
            tasks: Vec::new(),
            filter: Filter::All,
            dark_mode: false,
            draft: String::new(),
            edit: EditState::Inactive,
            last_synced: None,
        }
    }

    /// Shared handle to the store (for running commits off the UI loop)
    pub fn store(&self) -> Arc<dyn TaskStore> {
        Arc::clone(&self.store)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks under the current filter
    pub fn visible_tasks(&self) -> Vec<&Task> {
        filter_tasks(&self.tasks, self.filter)
    }

    pub fn edit(&self) -> &EditState {
        &self.edit
    }

    pub fn last_synced(&self) -> Option<DateTime<Local>> {
        self.last_synced
    }

    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Replace the edit buffer (ignored when not editing)
    pub fn set_edit_buffer(&mut self, text: impl Into<String>) {
        if let EditState::Editing { buffer, .. } = &mut self.edit {
            *buffer = text.into();
        }
    }

    /// Append to the edit buffer (ignored when not editing)
    pub fn edit_push(&mut self, c: char) {
        if let EditState::Editing { buffer, .. } = &mut self.edit {
            buffer.push(c);
        }
    }

    pub fn edit_pop(&mut self) {
        if let EditState::Editing { buffer, .. } = &mut self.edit {
            buffer.pop();
        }
    }

    /// Plan a create from the draft; `None` for blank drafts
    pub fn plan_create(&self) -> Option<Mutation> {
        NewTask::from_input(&self.draft).map(Mutation::Create)
    }

    /// Start editing a task, seeding the buffer with its title
    pub fn begin_edit(&mut self, id: &TaskId) -> bool {
        match self.find(id) {
            Some(task) => {
                self.edit = EditState::Editing {
                    id: task.id.clone(),
                    buffer: task.title.clone(),
                };
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Inactive;
    }

    /// Plan the full replacement record for the active edit.
    ///
    /// No-op without an active edit. A blank buffer plans nothing and keeps
    /// the edit open. If the task disappeared from the collection the edit
    /// is dropped.
    pub fn plan_commit_edit(&mut self) -> Option<Mutation> {
        let (id, buffer) = match &self.edit {
            EditState::Editing { id, buffer } => (id.clone(), buffer.clone()),
            EditState::Inactive => return None,
        };

        let title = buffer.trim();
        if title.is_empty() {
            debug!(%id, "blank edit not submitted");
            return None;
        }

        match self.find(&id) {
            Some(task) => Some(Mutation::Update {
                task: task.retitled(title.to_string()),
                origin: UpdateOrigin::Edit,
            }),
            None => {
                debug!(%id, "edited task no longer present");
                self.edit = EditState::Inactive;
                None
            }
        }
    }

    /// Plan a completion flip for the current record
    pub fn plan_toggle(&self, id: &TaskId) -> Option<Mutation> {
        self.find(id).map(|task| Mutation::Update {
            task: task.toggled(),
            origin: UpdateOrigin::Toggle,
        })
    }

    pub fn plan_delete(&self, id: &TaskId) -> Mutation {
        Mutation::Delete(id.clone())
    }

    /// Fold a finished refresh/commit back into local state.
    ///
    /// Returns whether the mutation (if any) was accepted.
    pub fn apply(&mut self, outcome: SyncOutcome) -> bool {
        if let Some(mutation) = &outcome.mutation {
            if !outcome.accepted {
                return false;
            }
            match mutation {
                Mutation::Create(_) => self.draft.clear(),
                Mutation::Update {
                    task,
                    origin: UpdateOrigin::Edit,
                } => {
                    // Only close the edit if nothing was typed since this save
                    if self.edit.is_editing(&task.id)
                        && self.edit.buffer().map(str::trim) == Some(task.title.as_str())
                    {
                        self.edit = EditState::Inactive;
                    }
                }
                Mutation::Update {
                    origin: UpdateOrigin::Toggle,
                    ..
                }
                | Mutation::Delete(_) => {}
            }
        }

        if let Some(tasks) = outcome.snapshot {
            self.tasks = tasks;
            self.last_synced = Some(Local::now());
        }

        outcome.accepted
    }

    /// Re-fetch and apply inline
    pub async fn refresh(&mut self) -> bool {
        let outcome = refresh(self.store.as_ref()).await;
        let fetched = outcome.snapshot.is_some();
        self.apply(outcome);
        fetched
    }

    /// Commit and apply inline
    pub async fn submit(&mut self, mutation: Mutation) -> bool {
        let outcome = commit(self.store.as_ref(), mutation).await;
        self.apply(outcome)
    }

    /// Create from the draft; false when blank or not accepted
    pub async fn create(&mut self) -> bool {
        match self.plan_create() {
            Some(mutation) => self.submit(mutation).await,
            None => false,
        }
    }

    /// Save the active edit; safe to call with no edit in progress
    pub async fn commit_edit(&mut self) -> bool {
        match self.plan_commit_edit() {
            Some(mutation) => self.submit(mutation).await,
            None => false,
        }
    }

    pub async fn toggle_complete(&mut self, id: &TaskId) -> bool {
        match self.plan_toggle(id) {
            Some(mutation) => self.submit(mutation).await,
            None => false,
        }
    }

    pub async fn delete(&mut self, id: &TaskId) -> bool {
        let mutation = self.plan_delete(id);
        self.submit(mutation).await
    }
}
