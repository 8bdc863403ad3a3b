//! Task Tracker App
//!
//! Root component: opens the store and lays out the page.

use leptos::prelude::*;

use crate::components::{FilterBar, NewTaskForm, TaskFooter, TaskList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::ids::{SystemClock, UuidIds};
use crate::storage;
use crate::store::TaskStore;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = TaskStore::open(
        &config,
        storage::open_default(),
        Box::new(UuidIds),
        Box::new(SystemClock),
    );
    provide_context(AppContext::new(store));

    view! {
        <div class="app">
            <h1>"Tasks"</h1>

            <NewTaskForm />

            <div class="toolbar">
                <FilterBar />
            </div>

            <TaskList />

            <TaskFooter />
        </div>
    }
}
