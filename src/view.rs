//! View Model
//!
//! Pure projection of (tasks, filter) into what the page shows.

use crate::models::{Filter, Task};

/// Everything the task list needs to render
#[derive(Debug, Clone, PartialEq)]
pub struct TaskListView {
    /// Tasks passing the filter, in list order
    pub visible: Vec<Task>,
    /// Total number of tasks, ignoring the filter
    pub total: usize,
    pub count_label: String,
    /// True only when there are no tasks at all
    pub show_empty: bool,
}

pub fn apply_filter(tasks: &[Task], filter: Filter) -> Vec<Task> {
    tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
}

pub fn count_label(total: usize) -> String {
    format!("{} task{}", total, if total == 1 { "" } else { "s" })
}

pub fn build_view(tasks: &[Task], filter: Filter) -> TaskListView {
    TaskListView {
        visible: apply_filter(tasks, filter),
        total: tasks.len(),
        count_label: count_label(tasks.len()),
        show_empty: tasks.is_empty(),
    }
}
