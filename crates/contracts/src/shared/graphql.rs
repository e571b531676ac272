//! GraphQL-over-HTTP envelope
//!
//! Requests are sent as `{ "query", "operationName", "variables" }`.
//! Responses carry optional `data` and optional `errors`; any error entry
//! fails the whole call, partial data is not used.

use super::api_error::ApiError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub operation_name: &'a str,
    pub variables: V,
}

impl<'a, V: Serialize> GraphQlRequest<'a, V> {
    pub fn new(operation_name: &'a str, query: &'a str, variables: V) -> Self {
        Self {
            query,
            operation_name,
            variables,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlErrorEntry {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlErrorEntry>>,
}

impl<T> GraphQlResponse<T> {
    pub fn into_result(self) -> Result<T, ApiError> {
        if let Some(errors) = self.errors.filter(|e| !e.is_empty()) {
            return Err(ApiError::GraphQl(
                errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        self.data.ok_or(ApiError::MissingData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_account::query::{
        MyAccountsData, MyAccountsVariables, MY_ACCOUNTS_OPERATION, MY_ACCOUNTS_QUERY,
    };

    #[test]
    fn test_request_body_shape() {
        let request = GraphQlRequest::new(
            MY_ACCOUNTS_OPERATION,
            MY_ACCOUNTS_QUERY,
            MyAccountsVariables::default(),
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["operationName"], "MyAccounts");
        assert_eq!(json["variables"], serde_json::json!({}));
        assert!(json["query"].as_str().unwrap().contains("accounts"));
    }

    #[test]
    fn test_errors_take_precedence_over_data() {
        let response: GraphQlResponse<MyAccountsData> = serde_json::from_str(
            r#"{"data":{"accounts":[]},"errors":[{"message":"Unauthorized","path":["accounts"]}]}"#,
        )
        .unwrap();
        assert_eq!(
            response.into_result().unwrap_err(),
            ApiError::GraphQl(vec!["Unauthorized".into()])
        );
    }

    #[test]
    fn test_missing_data() {
        let response: GraphQlResponse<MyAccountsData> =
            serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert_eq!(response.into_result().unwrap_err(), ApiError::MissingData);
    }

    #[test]
    fn test_empty_error_list_is_success() {
        let response: GraphQlResponse<MyAccountsData> =
            serde_json::from_str(r#"{"data":{"accounts":[{"id":"a1","name":"Acme"}]},"errors":[]}"#)
                .unwrap();
        let data = response.into_result().unwrap();
        assert_eq!(data.accounts.len(), 1);
    }
}
