use super::form::NewProjectForm;
use crate::domain::a001_account::model;
use crate::domain::a002_project::store::ProjectStore;
use crate::shared::navigation::Navigator;
use contracts::domain::a001_account::Account;
use contracts::domain::a002_project::ProjectSlug;
use leptos::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

/// ViewModel for the New Project form
#[derive(Clone, Copy)]
pub struct NewProjectViewModel {
    pub form: RwSignal<NewProjectForm>,
    pub error: RwSignal<Option<String>>,
    /// A creation request is in flight
    pub pending: RwSignal<bool>,
    store: StoredValue<Rc<dyn ProjectStore>, LocalStorage>,
    navigator: StoredValue<Rc<dyn Navigator>, LocalStorage>,
    /// Set by cancel; outlives the page so late callbacks can see it
    left_page: StoredValue<Rc<Cell<bool>>, LocalStorage>,
}

impl NewProjectViewModel {
    pub fn new(store: Rc<dyn ProjectStore>, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            form: RwSignal::new(NewProjectForm::new()),
            error: RwSignal::new(None),
            pending: RwSignal::new(false),
            store: StoredValue::new_local(store),
            navigator: StoredValue::new_local(navigator),
            left_page: StoredValue::new_local(Rc::new(Cell::new(false))),
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.pending.get() && self.form.with(NewProjectForm::is_valid)
    }

    /// Drives the organization name field; shown only for a new organization
    pub fn shows_organization_field(&self) -> bool {
        self.form.with(NewProjectForm::is_creating_organization)
    }

    pub fn select_owner(&self, value: &str) {
        self.form.update(|f| f.select_owner(value));
    }

    pub fn set_project_name(&self, value: String) {
        self.form.update(|f| f.project_name = value);
    }

    pub fn set_organization_name(&self, value: String) {
        self.form.update(|f| f.organization_name = value);
    }

    /// Apply the result of an account list fetch
    pub fn accounts_loaded(&self, result: Result<Vec<Account>, String>) {
        apply_accounts(self.form, self.error, result);
    }

    /// Fetch the account list; the form shows no accounts until it arrives
    pub fn load_accounts_command(&self, graphql_url: String) {
        let form = self.form;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::fetch_my_accounts(&graphql_url)
                .await
                .map_err(|e| e.to_string());
            apply_accounts(form, error, result);
        });
    }

    /// Hand the form over to the store; on success go to the new project
    /// unless the user has cancelled in the meantime
    pub fn create_project_command(&self) {
        if self.pending.get_untracked() {
            return;
        }
        let Some(request) = self.form.with_untracked(NewProjectForm::to_request) else {
            return;
        };

        log::debug!(
            "Creating project '{}' (new organization: {})",
            request.project_name,
            request.is_creating_organization
        );
        self.error.set(None);
        self.pending.set(true);

        let pending = self.pending;
        let error = self.error;
        let navigator = self.navigator.get_value();
        let left_page = self.left_page.get_value();
        let on_success: Rc<dyn Fn(ProjectSlug)> = Rc::new(move |slug: ProjectSlug| {
            log::info!("Project {} created", slug);
            if left_page.get() {
                return;
            }
            pending.set(false);
            navigator.go_to(&slug.path());
        });
        let on_failure: Rc<dyn Fn(String)> = Rc::new(move |message: String| {
            log::error!("Failed to create project: {}", message);
            pending.set(false);
            error.set(Some(format!("Could not create project: {}", message)));
        });

        self.store
            .get_value()
            .create_project(request, on_success, on_failure);
    }

    pub fn cancel_command(&self) {
        self.left_page.get_value().set(true);
        self.navigator.get_value().go_back();
    }

    pub fn dismiss_error(&self) {
        self.error.set(None);
    }
}

fn apply_accounts(
    form: RwSignal<NewProjectForm>,
    error: RwSignal<Option<String>>,
    result: Result<Vec<Account>, String>,
) {
    match result {
        Ok(accounts) => {
            log::debug!("Loaded {} accounts", accounts.len());
            form.update(|f| f.accounts_loaded(accounts));
        }
        Err(e) => {
            log::error!("Failed to load accounts: {}", e);
            error.set(Some(format!("Could not load accounts: {}", e)));
        }
    }
}
