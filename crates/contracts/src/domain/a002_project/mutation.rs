//! `CreateProject` GraphQL mutation

use super::aggregate::{CreateProjectRequest, CreatedProject};
use serde::{Deserialize, Serialize};

pub const CREATE_PROJECT_OPERATION: &str = "CreateProject";

pub const CREATE_PROJECT_MUTATION: &str = r#"
mutation CreateProject($input: CreateProjectInput!) {
  createProject(input: $input) {
    slug
  }
}
"#;

#[derive(Debug, Clone, Serialize)]
pub struct CreateProjectVariables {
    pub input: CreateProjectRequest,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectData {
    pub create_project: CreatedProject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_parses_slug() {
        let data: CreateProjectData =
            serde_json::from_str(r#"{"createProject":{"slug":"a1/my-app"}}"#).unwrap();
        assert_eq!(data.create_project.slug.as_str(), "a1/my-app");
    }
}
