//! Task Footer Component
//!
//! Total count and the clear-completed action.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn TaskFooter() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <footer class="footer">
            <span id="countLabel">{move || ctx.view().count_label}</span>
            <button
                id="clearDoneBtn"
                type="button"
                disabled=move || ctx.view().total == 0
                on:click=move |_| ctx.clear_done()
            >
                "Clear completed"
            </button>
        </footer>
    }
}
