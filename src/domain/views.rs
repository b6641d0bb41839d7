use super::enums::Filter;
use super::task::Task;

/// Project the collection through a filter, preserving order
pub fn filter_tasks<'a>(tasks: &'a [Task], filter: Filter) -> Vec<&'a Task> {
    tasks.iter().filter(|t| filter.matches(t.completed)).collect()
}

/// Count (completed, pending) tasks
pub fn compute_counts(tasks: &[Task]) -> (usize, usize) {
    let completed = tasks.iter().filter(|t| t.completed).count();
    (completed, tasks.len() - completed)
}

/// Checkbox-style badge for a task row
pub fn status_badge(completed: bool, use_emoji: bool) -> &'static str {
    match (completed, use_emoji) {
        (true, true) => "✅",
        (false, true) => "⬜",
        (true, false) => "[x]",
        (false, false) => "[ ]",
    }
}
