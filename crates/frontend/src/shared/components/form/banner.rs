use leptos::prelude::*;

/// Inline critical message shown above a form
#[component]
pub fn Banner(
    #[prop(into)]
    message: String,
    /// Called when the user closes the banner
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="banner banner--critical" role="alert">
            <span class="banner__message">{message}</span>
            <button
                type="button"
                class="banner__dismiss"
                aria-label="Dismiss"
                on:click=move |_| on_dismiss.run(())
            >
                "×"
            </button>
        </div>
    }
}
