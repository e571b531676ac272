//! Project creation store
//!
//! Pages receive a [`ProjectStore`] explicitly instead of reaching for a
//! global client, so the page logic can run against a fake in tests.

use crate::shared::api_utils::graphql;
use crate::shared::config::AppConfig;
use contracts::domain::a002_project::mutation::{
    CreateProjectData, CreateProjectVariables, CREATE_PROJECT_MUTATION, CREATE_PROJECT_OPERATION,
};
use contracts::domain::a002_project::{CreateProjectRequest, CreatedProject, ProjectSlug};
use contracts::shared::api_error::ApiError;
use contracts::shared::graphql::GraphQlRequest;
use std::rc::Rc;

pub trait ProjectStore {
    /// Create the project (and its organization, when requested) as one remote
    /// operation. Exactly one of the callbacks is invoked once the call settles;
    /// `on_success` only after the server confirmed the creation.
    fn create_project(
        &self,
        request: CreateProjectRequest,
        on_success: Rc<dyn Fn(ProjectSlug)>,
        on_failure: Rc<dyn Fn(String)>,
    );
}

/// [`ProjectStore`] issuing the `CreateProject` mutation
#[derive(Debug, Clone)]
pub struct GraphqlProjectStore {
    graphql_url: String,
}

impl GraphqlProjectStore {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            graphql_url: config.graphql_url(),
        }
    }
}

impl ProjectStore for GraphqlProjectStore {
    fn create_project(
        &self,
        request: CreateProjectRequest,
        on_success: Rc<dyn Fn(ProjectSlug)>,
        on_failure: Rc<dyn Fn(String)>,
    ) {
        let url = self.graphql_url.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match create_project(&url, request).await {
                Ok(created) => (on_success)(created.slug),
                Err(e) => (on_failure)(e.to_string()),
            }
        });
    }
}

pub async fn create_project(
    graphql_url: &str,
    input: CreateProjectRequest,
) -> Result<CreatedProject, ApiError> {
    let request = GraphQlRequest::new(
        CREATE_PROJECT_OPERATION,
        CREATE_PROJECT_MUTATION,
        CreateProjectVariables { input },
    );
    let data: CreateProjectData = graphql(graphql_url, &request).await?;
    Ok(data.create_project)
}
