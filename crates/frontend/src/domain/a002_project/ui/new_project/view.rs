use super::form::NewProjectForm;
use super::view_model::NewProjectViewModel;
use crate::domain::a002_project::store::{GraphqlProjectStore, ProjectStore};
use crate::shared::components::form::{Banner, Select, TextField};
use crate::shared::config::use_app_config;
use crate::shared::navigation::{Navigator, RouterNavigator};
use crate::shared::page_frame::PageFrame;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn NewProjectPage() -> impl IntoView {
    let config = use_app_config();
    let store: Rc<dyn ProjectStore> = Rc::new(GraphqlProjectStore::new(&config));
    let navigator: Rc<dyn Navigator> = Rc::new(RouterNavigator::new());

    let vm = NewProjectViewModel::new(store, navigator);
    vm.load_accounts_command(config.graphql_url());

    let owner_value = Signal::derive(move || {
        vm.form
            .with(|f| f.selected_owner_id().unwrap_or_default().to_string())
    });
    let owner_options = Signal::derive(move || vm.form.with(NewProjectForm::owner_options));

    view! {
        <PageFrame page_id="a002_project--new" title="New Project">
            {move || vm.error.get().map(|message| view! {
                <Banner message=message on_dismiss=Callback::new(move |_| vm.dismiss_error()) />
            })}

            <div class="details-form">
                <Select
                    id="owner"
                    label="Owner"
                    value=owner_value
                    options=owner_options
                    on_change=Callback::new(move |value: String| vm.select_owner(&value))
                />

                <Show when=move || vm.shows_organization_field()>
                    // TODO: only allow kebab-case organization names
                    <TextField
                        id="organization_name"
                        label="Organization name"
                        value=Signal::derive(move || vm.form.with(|f| f.organization_name.clone()))
                        on_input=Callback::new(move |value: String| vm.set_organization_name(value))
                    />
                </Show>

                // TODO: only allow kebab-case project names
                <TextField
                    id="project_name"
                    label="Project name"
                    value=Signal::derive(move || vm.form.with(|f| f.project_name.clone()))
                    on_input=Callback::new(move |value: String| vm.set_project_name(value))
                />
            </div>

            <div class="details-actions">
                <button
                    type="button"
                    class="btn btn-primary"
                    disabled=move || !vm.can_submit()
                    on:click=move |_| vm.create_project_command()
                >
                    "Create project"
                </button>
                <button
                    type="button"
                    class="btn btn-danger"
                    on:click=move |_| vm.cancel_command()
                >
                    "Cancel"
                </button>
            </div>
        </PageFrame>
    }
}
