//! Application Context
//!
//! The task store shared with every component via the Leptos Context API.

use leptos::prelude::*;

use crate::models::Filter;
use crate::store::TaskStore;
use crate::view::TaskListView;

/// Controller handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Owned on the UI thread; browser storage handles are not `Send`
    store: StoredValue<TaskStore, LocalStorage>,
    /// Bumped after every change so views re-read the store - read
    pub render_trigger: ReadSignal<u32>,
    /// Bumped after every change so views re-read the store - write
    set_render_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(store: TaskStore) -> Self {
        let (render_trigger, set_render_trigger) = signal(0u32);
        Self {
            store: StoredValue::new_local(store),
            render_trigger,
            set_render_trigger,
        }
    }

    /// Current view model; subscribes the caller to re-renders
    pub fn view(&self) -> TaskListView {
        let _ = self.render_trigger.get();
        self.store.with_value(|store| store.view())
    }

    pub fn filter(&self) -> Filter {
        let _ = self.render_trigger.get();
        self.store.with_value(|store| store.filter())
    }

    /// Returns true when a task was created
    pub fn add_task(&self, raw_text: &str) -> bool {
        self.mutate(|store| store.add_task(raw_text).is_some())
            .unwrap_or(false)
    }

    pub fn toggle_done(&self, id: &str) {
        self.mutate(|store| store.toggle_done(id));
    }

    pub fn remove_task(&self, id: &str) {
        self.mutate(|store| store.remove_task(id));
    }

    pub fn clear_done(&self) {
        self.mutate(|store| store.clear_done());
    }

    pub fn select_filter(&self, filter: Filter) {
        self.mutate(|store| store.select_filter(filter));
    }

    fn mutate<U>(&self, f: impl FnOnce(&mut TaskStore) -> U) -> Option<U> {
        let out = self.store.try_update_value(f);
        self.set_render_trigger.update(|v| *v += 1);
        out
    }
}
