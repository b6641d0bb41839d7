use crate::controller::{commit, refresh, Mutation, SyncOutcome, TaskListController, UpdateOrigin};
use crate::domain::{Filter, TaskId, UiMode};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::debug;

/// Main application state for the TUI
///
/// Network work runs on spawned tasks; their outcomes come back over a
/// channel and are applied on the UI loop in arrival order.
pub struct AppState {
    pub controller: TaskListController,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub use_emoji: bool,
    /// Spawned refreshes/commits whose outcome has not been applied yet
    pub in_flight: usize,
    /// Ids with an edit save in flight (one entry per save)
    saving: Vec<TaskId>,
    outcomes_tx: UnboundedSender<SyncOutcome>,
    outcomes_rx: UnboundedReceiver<SyncOutcome>,
}

impl AppState {
    pub fn new(controller: TaskListController, use_emoji: bool) -> Self {
        let (outcomes_tx, outcomes_rx) = unbounded_channel();
        Self {
            controller,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            use_emoji,
            in_flight: 0,
            saving: Vec::new(),
            outcomes_tx,
            outcomes_rx,
        }
    }

    /// Fetch the full collection in the background
    pub fn spawn_refresh(&mut self) {
        let store = self.controller.store();
        let tx = self.outcomes_tx.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let outcome = refresh(store.as_ref()).await;
            let _ = tx.send(outcome);
        });
    }

    /// Commit a mutation (and its follow-up re-fetch) in the background
    pub fn spawn_commit(&mut self, mutation: Mutation) {
        debug!(op = mutation.kind(), "dispatching");
        if let Some(id) = edit_save_target(&mutation) {
            self.saving.push(id.clone());
        }
        let store = self.controller.store();
        let tx = self.outcomes_tx.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let outcome = commit(store.as_ref(), mutation).await;
            let _ = tx.send(outcome);
        });
    }

    /// Apply every outcome that has arrived; returns how many were applied
    pub fn drain_outcomes(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.outcomes_rx.try_recv() {
            self.apply_outcome(outcome);
            applied += 1;
        }
        applied
    }

    /// Wait until nothing is in flight
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.outcomes_rx.recv().await {
                Some(outcome) => self.apply_outcome(outcome),
                None => break,
            }
        }
    }

    fn apply_outcome(&mut self, outcome: SyncOutcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        debug!(op_id = %outcome.op_id, accepted = outcome.accepted, "applying outcome");

        if let Some(id) = outcome.mutation.as_ref().and_then(edit_save_target) {
            if let Some(pos) = self.saving.iter().position(|s| s == id) {
                self.saving.remove(pos);
            }
        }

        self.controller.apply(outcome);

        // A landed save may have closed the edit the user is in
        if self.ui_mode == UiMode::Editing && !self.controller.edit().is_active() {
            self.ui_mode = UiMode::Normal;
        }
        self.clamp_selection();
    }

    /// Whether an edit save for this task is still in flight
    pub fn is_saving(&self, id: &TaskId) -> bool {
        self.saving.contains(id)
    }

    fn clamp_selection(&mut self) {
        let visible = self.controller.visible_tasks().len();
        if visible == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= visible {
            self.selected_index = visible - 1;
        }
    }

    /// Id of the highlighted row under the current filter
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.controller
            .visible_tasks()
            .get(self.selected_index)
            .map(|t| t.id.clone())
    }

    pub fn is_syncing(&self) -> bool {
        self.in_flight > 0
    }

    /// Move selection up (leaving an inline edit commits it)
    pub fn move_selection_up(&mut self) {
        self.blur();
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down (leaving an inline edit commits it)
    pub fn move_selection_down(&mut self) {
        self.blur();
        let visible = self.controller.visible_tasks().len();
        if self.selected_index + 1 < visible {
            self.selected_index += 1;
        }
    }

    /// Focus left the edit field: commit it, or drop it if there is nothing
    /// to commit
    pub fn blur(&mut self) {
        if self.ui_mode != UiMode::Editing {
            return;
        }
        self.ui_mode = UiMode::Normal;
        match self.controller.plan_commit_edit() {
            Some(mutation) => self.spawn_commit(mutation),
            None => self.controller.cancel_edit(),
        }
    }

    /// Focus the new-task input
    pub fn start_draft(&mut self) {
        self.ui_mode = UiMode::Drafting;
    }

    pub fn draft_push(&mut self, c: char) {
        self.controller.draft.push(c);
    }

    pub fn draft_pop(&mut self) {
        self.controller.draft.pop();
    }

    /// Submit the draft; blank drafts send nothing
    pub fn submit_draft(&mut self) {
        if let Some(mutation) = self.controller.plan_create() {
            self.spawn_commit(mutation);
        }
    }

    pub fn leave_draft(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Edit the highlighted task (resumes a pending edit of the same task)
    pub fn start_edit_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        if self.controller.edit().is_editing(&id) || self.controller.begin_edit(&id) {
            self.ui_mode = UiMode::Editing;
        }
    }

    pub fn edit_push(&mut self, c: char) {
        self.controller.edit_push(c);
    }

    pub fn edit_pop(&mut self) {
        self.controller.edit_pop();
    }

    /// Explicit save
    pub fn save_edit(&mut self) {
        if let Some(mutation) = self.controller.plan_commit_edit() {
            self.spawn_commit(mutation);
            self.ui_mode = UiMode::Normal;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.controller.cancel_edit();
        self.ui_mode = UiMode::Normal;
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            if let Some(mutation) = self.controller.plan_toggle(&id) {
                self.spawn_commit(mutation);
            }
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            let mutation = self.controller.plan_delete(&id);
            self.spawn_commit(mutation);
        }
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.controller.set_filter(filter);
        self.clamp_selection();
    }

    pub fn cycle_filter(&mut self) {
        let next = self.controller.filter.next();
        self.set_filter(next);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.controller.toggle_dark_mode();
    }
}

/// Task id targeted by an edit save
fn edit_save_target(mutation: &Mutation) -> Option<&TaskId> {
    match mutation {
        Mutation::Update {
            task,
            origin: UpdateOrigin::Edit,
        } => Some(&task.id),
        _ => None,
    }
}
