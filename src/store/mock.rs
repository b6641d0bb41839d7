use super::error::{StoreError, StoreResult};
use super::TaskStore;
use crate::domain::{NewTask, Task, TaskId};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Mutex;

/// A request as seen by the mock store
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(NewTask),
    Update(Task),
    Delete(TaskId),
}

#[derive(Debug, Default)]
struct Inner {
    tasks: Vec<Task>,
    next_id: i64,
    calls: Vec<Call>,
    reject_mutations: bool,
    fail_list: bool,
}

/// In-memory task store that records every call
#[derive(Debug)]
pub struct MockTaskStore {
    inner: Mutex<Inner>,
}

impl Default for MockTaskStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl MockTaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        let next_id = tasks
            .iter()
            .filter_map(|t| match t.id {
                TaskId::Number(n) => Some(n),
                TaskId::Text(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            inner: Mutex::new(Inner {
                tasks,
                next_id,
                ..Inner::default()
            }),
        }
    }

    /// Answer every mutation with 500
    pub fn rejecting(self) -> Self {
        self.inner.lock().unwrap().reject_mutations = true;
        self
    }

    /// Fail every list request at the transport level
    pub fn set_fail_list(&self, fail: bool) {
        self.inner.lock().unwrap().fail_list = fail;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().unwrap().calls.clear();
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.inner.lock().unwrap().tasks.clone()
    }

    fn rejected() -> StoreError {
        StoreError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "rejected".to_string(),
        }
    }

    fn not_found() -> StoreError {
        StoreError::Status {
            status: StatusCode::NOT_FOUND,
            body: "no such todo".to_string(),
        }
    }
}

#[async_trait]
impl TaskStore for MockTaskStore {
    async fn list(&self) -> StoreResult<Vec<Task>> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::List);
        if inner.fail_list {
            // Decode failures are the easiest transport-side failure to fake
            return Err(serde_json::from_str::<Vec<Task>>("<html>").unwrap_err().into());
        }
        Ok(inner.tasks.clone())
    }

    async fn create(&self, task: &NewTask) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::Create(task.clone()));
        if inner.reject_mutations {
            return Err(Self::rejected());
        }
        let id = inner.next_id;
        inner.next_id += 1;
        inner.tasks.push(Task::new(id, task.title.clone(), task.completed));
        Ok(())
    }

    async fn update(&self, task: &Task) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::Update(task.clone()));
        if inner.reject_mutations {
            return Err(Self::rejected());
        }
        match inner.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => {
                *existing = task.clone();
                Ok(())
            }
            None => Err(Self::not_found()),
        }
    }

    async fn delete(&self, id: &TaskId) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::Delete(id.clone()));
        if inner.reject_mutations {
            return Err(Self::rejected());
        }
        let before = inner.tasks.len();
        inner.tasks.retain(|t| &t.id != id);
        if inner.tasks.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }
}
