pub mod enums;
pub mod task;
pub mod views;

pub use enums::{Filter, UiMode};
pub use task::{NewTask, Task, TaskId};
pub use views::{compute_counts, filter_tasks, status_badge};
