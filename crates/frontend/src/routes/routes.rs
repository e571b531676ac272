use crate::domain::a002_project::ui::landing::ProjectLanding;
use crate::domain::a002_project::ui::new_project::NewProjectPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div id="not_found--system" class="page">
            <h1 class="page__title">"Page not found"</h1>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/new" /> } />
                    <Route path=path!("/new") view=NewProjectPage />
                    <Route path=path!("/:account/:project") view=ProjectLanding />
                </Routes>
            </main>
        </Router>
    }
}
