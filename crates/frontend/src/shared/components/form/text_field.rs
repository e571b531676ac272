use leptos::prelude::*;

/// Required single-line text input with label. Autocomplete is off.
#[component]
pub fn TextField(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// ID for the input element
    #[prop(into)]
    id: String,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>
                {label}
            </label>
            <input
                id=id
                class="form__input"
                type="text"
                prop:value=move || value.get()
                required=true
                autocomplete="off"
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
