//! Task Row Component
//!
//! One list entry: checkbox, text and delete button.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::context::AppContext;
use crate::models::Task;

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let toggle_id = task.id.clone();
    let remove_id = task.id.clone();
    let created = format_created_at(task.created_at);

    view! {
        <li class=if task.done { "task done" } else { "task" }>
            <input
                type="checkbox"
                checked=task.done
                on:change=move |_| ctx.toggle_done(&toggle_id)
            />
            <label class="text" title=created>{task.text}</label>
            <button
                class="iconBtn"
                type="button"
                aria-label="Delete task"
                on:click=move |_| ctx.remove_task(&remove_id)
            >
                "🗑️"
            </button>
        </li>
    }
}

/// Creation time in the browser's locale
fn format_created_at(millis: i64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(millis as f64));
    // No-argument toLocaleString(), i.e. the browser's default locale
    js_sys::Object::to_locale_string(&date).into()
}
