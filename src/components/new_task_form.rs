//! New Task Form Component
//!
//! Text input with an Add button; Enter also submits.

use leptos::html;
use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (new_text, set_new_text) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    let submit = move || {
        if !ctx.add_task(&new_text.get_untracked()) {
            return;
        }
        set_new_text.set(String::new());
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.focus();
        }
    };

    view! {
        <div class="input-row">
            <input
                id="taskInput"
                type="text"
                placeholder="Add a task..."
                autocomplete="off"
                node_ref=input_ref
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        submit();
                    }
                }
            />
            <button id="addBtn" type="button" on:click=move |_| submit()>"Add"</button>
        </div>
    }
}
