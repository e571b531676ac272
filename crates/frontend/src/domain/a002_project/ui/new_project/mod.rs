//! New Project page
//!
//! - form.rs: plain form state and the owner-default transition
//! - view_model.rs: ViewModel with commands and reactive state
//! - view.rs: Leptos component (pure UI)

mod form;
mod view;
mod view_model;

pub use form::{NewProjectForm, OwnerSelection, NEW_ORGANIZATION_LABEL, NEW_ORGANIZATION_VALUE};
pub use view::NewProjectPage;
pub use view_model::NewProjectViewModel;
