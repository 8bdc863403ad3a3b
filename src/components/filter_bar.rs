//! Filter Bar Component
//!
//! All / Active / Done selector buttons.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Filter;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div class="filters">
            {Filter::ALL.iter().map(|&filter| {
                view! {
                    <button
                        type="button"
                        class=move || if ctx.filter() == filter { "filter active" } else { "filter" }
                        data-filter=filter.as_str()
                        on:click=move |ev| {
                            let attr = event_target::<web_sys::Element>(&ev)
                                .get_attribute("data-filter")
                                .unwrap_or_default();
                            ctx.select_filter(Filter::from_attr(&attr));
                        }
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
