use serde::{Deserialize, Serialize};
use std::fmt;

/// Project identifier returned by the API, in the form `{owner}/{project}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectSlug(pub String);

impl ProjectSlug {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Client-side route of the project page
    pub fn path(&self) -> String {
        format!("/{}", self.0.trim_start_matches('/'))
    }
}

impl fmt::Display for ProjectSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Input of the `createProject` mutation.
///
/// `organization_name` is ignored by the server unless
/// `is_creating_organization` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub is_creating_organization: bool,
    pub owner_id: Option<String>,
    pub project_name: String,
    pub organization_name: String,
}

/// Result of a confirmed creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedProject {
    pub slug: ProjectSlug,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_path() {
        assert_eq!(ProjectSlug::new("a1/my-app").path(), "/a1/my-app");
        assert_eq!(ProjectSlug::new("/a1/my-app").path(), "/a1/my-app");
    }

    #[test]
    fn test_request_uses_camel_case() {
        let request = CreateProjectRequest {
            is_creating_organization: false,
            owner_id: Some("a1".into()),
            project_name: "my-app".into(),
            organization_name: String::new(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "isCreatingOrganization": false,
                "ownerId": "a1",
                "projectName": "my-app",
                "organizationName": ""
            })
        );
    }
}
