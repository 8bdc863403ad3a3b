//! UI Components
//!
//! Leptos components binding the task view model to the DOM.

mod new_task_form;
mod filter_bar;
mod task_row;
mod task_list;
mod task_footer;

pub use new_task_form::NewTaskForm;
pub use filter_bar::FilterBar;
pub use task_row::TaskRow;
pub use task_list::TaskList;
pub use task_footer::TaskFooter;
