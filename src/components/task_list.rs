//! Task List Component
//!
//! Visible tasks for the active filter, plus the empty-state message.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::context::AppContext;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        // Rebuilt from scratch on every change
        <ul id="taskList" class="task-list">
            {move || ctx.view().visible.into_iter()
                .map(|task| view! { <TaskRow task=task /> })
                .collect_view()}
        </ul>
        <p
            id="emptyState"
            class="empty-state"
            style:display=move || if ctx.view().show_empty { "block" } else { "none" }
        >
            "No tasks yet. Add one above."
        </p>
    }
}
