use crate::shared::page_frame::PageFrame;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Target of the redirect after a project was created
#[component]
pub fn ProjectLanding() -> impl IntoView {
    let params = use_params_map();
    let slug = move || {
        params.with(|p| {
            format!(
                "{}/{}",
                p.get("account").unwrap_or_default(),
                p.get("project").unwrap_or_default()
            )
        })
    };

    view! {
        <PageFrame page_id="a002_project--landing" title="Project">
            <p class="project-landing__slug">{slug}</p>
        </PageFrame>
    }
}
