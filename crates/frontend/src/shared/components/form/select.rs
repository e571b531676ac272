use leptos::prelude::*;

/// Single option of a [`Select`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    /// Shown but not selectable
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Empty-valued, disabled option standing for "nothing selected"
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            label: label.into(),
            disabled: true,
        }
    }
}

/// Select with label. Pair an empty `value` with a [`SelectOption::placeholder`]
/// so the browser does not show another option as chosen.
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler, receives the option value
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <For
                    each=move || options.get()
                    key=|option| option.value.clone()
                    children=move |option| {
                        let option_value = option.value.clone();
                        let is_selected = move || value.get() == option_value;
                        view! {
                            <option value=option.value selected=is_selected disabled=option.disabled>
                                {option.label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
