//! Task store seam: the remote REST service holding authoritative task state.
//!
//! The controller only ever talks to a [`TaskStore`]; production code wires
//! in [`HttpTaskStore`], tests use the recording mock.

pub mod error;
pub mod http;
#[cfg(test)]
pub mod mock;

use crate::domain::{NewTask, Task, TaskId};
use async_trait::async_trait;

pub use error::StoreResult;
pub use http::{normalize_base_url, HttpTaskStore};

/// Operations exposed by the `todos` resource
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// `GET todos/` - full collection
    async fn list(&self) -> StoreResult<Vec<Task>>;

    /// `POST todos/` - response body is ignored
    async fn create(&self, task: &NewTask) -> StoreResult<()>;

    /// `PUT todos/{id}` with the full record
    async fn update(&self, task: &Task) -> StoreResult<()>;

    /// `DELETE todos/{id}`
    async fn delete(&self, id: &TaskId) -> StoreResult<()>;
}
