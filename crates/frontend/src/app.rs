use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::debug!("API base: {}", config.api_base);
    provide_context(config);

    view! {
        <AppRoutes />
    }
}
