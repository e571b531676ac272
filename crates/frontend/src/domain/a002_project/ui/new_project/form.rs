//! Form state of the New Project page, free of any reactive dependency

use crate::shared::components::form::SelectOption;
use contracts::domain::a001_account::{Account, AccountId};
use contracts::domain::a002_project::CreateProjectRequest;

/// Select value of the "create new organization" option
pub const NEW_ORGANIZATION_VALUE: &str = "new";
pub const NEW_ORGANIZATION_LABEL: &str = "Create new organization";
pub const OWNER_PLACEHOLDER_LABEL: &str = "Select owner";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OwnerSelection {
    #[default]
    Unset,
    Account(AccountId),
    NewOrganization,
}

impl OwnerSelection {
    pub fn from_value(value: &str) -> Self {
        match value {
            "" => Self::Unset,
            NEW_ORGANIZATION_VALUE => Self::NewOrganization,
            id => Self::Account(AccountId::new(id)),
        }
    }

    /// Value of the matching select option
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Unset => None,
            Self::Account(id) => Some(id.as_str()),
            Self::NewOrganization => Some(NEW_ORGANIZATION_VALUE),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProjectForm {
    pub accounts: Vec<Account>,
    pub owner: OwnerSelection,
    pub project_name: String,
    pub organization_name: String,
    owner_chosen_explicitly: bool,
}

impl NewProjectForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account list arrived (first load or re-fetch).
    ///
    /// The first account becomes the owner only while nothing is selected and
    /// the user has not picked an option yet.
    pub fn accounts_loaded(&mut self, accounts: Vec<Account>) {
        self.accounts = accounts;
        if self.owner_chosen_explicitly || self.owner != OwnerSelection::Unset {
            return;
        }
        if let Some(first) = self.accounts.first() {
            self.owner = OwnerSelection::Account(first.id.clone());
        }
    }

    pub fn select_owner(&mut self, value: &str) {
        self.owner = OwnerSelection::from_value(value);
        self.owner_chosen_explicitly = true;
    }

    pub fn is_creating_organization(&self) -> bool {
        self.owner == OwnerSelection::NewOrganization
    }

    pub fn selected_owner_id(&self) -> Option<&str> {
        self.owner.value()
    }

    /// Accounts in load order, followed by the new-organization option.
    /// While no owner is selected a disabled placeholder comes first.
    pub fn owner_options(&self) -> Vec<SelectOption> {
        let placeholder = (self.owner == OwnerSelection::Unset)
            .then(|| SelectOption::placeholder(OWNER_PLACEHOLDER_LABEL));
        placeholder
            .into_iter()
            .chain(
                self.accounts
                    .iter()
                    .map(|account| SelectOption::new(account.id.as_str(), account.name.as_str())),
            )
            .chain(std::iter::once(SelectOption::new(
                NEW_ORGANIZATION_VALUE,
                NEW_ORGANIZATION_LABEL,
            )))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        !self.project_name.is_empty()
            && self.owner != OwnerSelection::Unset
            && (!self.is_creating_organization() || !self.organization_name.is_empty())
    }

    /// Mutation input, `None` while the form is incomplete.
    /// The owner id is passed as selected, including the new-organization value.
    pub fn to_request(&self) -> Option<CreateProjectRequest> {
        if !self.is_valid() {
            return None;
        }
        Some(CreateProjectRequest {
            is_creating_organization: self.is_creating_organization(),
            owner_id: self.selected_owner_id().map(str::to_string),
            project_name: self.project_name.clone(),
            organization_name: self.organization_name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> Vec<Account> {
        vec![Account::new("a1", "Acme")]
    }

    #[test]
    fn test_first_account_becomes_default_owner() {
        let mut form = NewProjectForm::new();
        form.accounts_loaded(acme());

        assert_eq!(form.selected_owner_id(), Some("a1"));
        assert!(!form.is_creating_organization());
    }

    #[test]
    fn test_new_organization_option_is_last() {
        let mut form = NewProjectForm::new();
        assert_eq!(
            form.owner_options().last(),
            Some(&SelectOption::new("new", "Create new organization"))
        );

        form.accounts_loaded(vec![Account::new("a1", "Acme"), Account::new("b2", "Beta")]);
        let values: Vec<_> = form.owner_options().into_iter().map(|o| o.value).collect();
        assert_eq!(values, vec!["a1", "b2", "new"]);
    }

    #[test]
    fn test_empty_list_keeps_owner_unset_until_accounts_arrive() {
        let mut form = NewProjectForm::new();
        form.accounts_loaded(Vec::new());
        assert_eq!(form.owner, OwnerSelection::Unset);

        form.accounts_loaded(acme());
        assert_eq!(form.selected_owner_id(), Some("a1"));
    }

    #[test]
    fn test_unset_owner_matches_disabled_placeholder() {
        let mut form = NewProjectForm::new();
        form.accounts_loaded(Vec::new());

        let value = form.selected_owner_id().unwrap_or_default();
        let options = form.owner_options();
        let selected = options.iter().find(|o| o.value == value);
        assert_eq!(selected, Some(&SelectOption::placeholder("Select owner")));
        assert!(selected.is_some_and(|o| o.disabled));

        let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["", "new"]);

        form.select_owner(NEW_ORGANIZATION_VALUE);
        assert!(form.is_creating_organization());
        assert!(form.owner_options().iter().all(|o| !o.disabled));
    }

    #[test]
    fn test_refetch_does_not_override_explicit_choice() {
        let mut form = NewProjectForm::new();
        let accounts = vec![Account::new("a1", "Acme"), Account::new("b2", "Beta")];
        form.accounts_loaded(accounts.clone());
        form.select_owner("b2");

        form.accounts_loaded(accounts);
        assert_eq!(form.selected_owner_id(), Some("b2"));
    }

    #[test]
    fn test_load_after_new_organization_choice_keeps_it() {
        let mut form = NewProjectForm::new();
        form.select_owner(NEW_ORGANIZATION_VALUE);

        form.accounts_loaded(acme());
        assert!(form.is_creating_organization());
        assert_eq!(form.selected_owner_id(), Some("new"));
    }

    #[test]
    fn test_selecting_account_clears_new_organization() {
        let mut form = NewProjectForm::new();
        form.accounts_loaded(acme());
        form.select_owner(NEW_ORGANIZATION_VALUE);
        assert!(form.is_creating_organization());

        form.select_owner("a1");
        assert!(!form.is_creating_organization());
        assert_eq!(form.owner, OwnerSelection::Account(AccountId::new("a1")));
    }

    #[test]
    fn test_validity() {
        let mut form = NewProjectForm::new();
        assert!(!form.is_valid());

        form.project_name = "my-app".into();
        assert!(!form.is_valid(), "no owner selected");

        form.accounts_loaded(acme());
        assert!(form.is_valid());

        form.project_name.clear();
        assert!(!form.is_valid());
    }

    #[test]
    fn test_new_organization_requires_name() {
        let mut form = NewProjectForm::new();
        form.accounts_loaded(acme());
        form.project_name = "my-app".into();
        form.select_owner(NEW_ORGANIZATION_VALUE);
        assert!(!form.is_valid());

        form.organization_name = "acme-labs".into();
        assert!(form.is_valid());
    }

    #[test]
    fn test_request_carries_form_values() {
        let mut form = NewProjectForm::new();
        form.accounts_loaded(acme());
        form.project_name = "my-app".into();

        assert_eq!(
            form.to_request(),
            Some(CreateProjectRequest {
                is_creating_organization: false,
                owner_id: Some("a1".into()),
                project_name: "my-app".into(),
                organization_name: String::new(),
            })
        );
    }

    #[test]
    fn test_no_request_for_invalid_form() {
        let form = NewProjectForm::new();
        assert_eq!(form.to_request(), None);
    }
}
