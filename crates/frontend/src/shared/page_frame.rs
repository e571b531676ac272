//! PageFrame — standard root wrapper for every routed page.
//!
//! Sets the page `id` (format `{entity}--{category}`, e.g. `"a002_project--new"`)
//! and renders the title header above the page content.

use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// Heading shown in the page header
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class="page page--detail">
            <div class="page__header">
                <h1 class="page__title">{title}</h1>
            </div>
            <div class="page__content">
                {children()}
            </div>
        </div>
    }
}
