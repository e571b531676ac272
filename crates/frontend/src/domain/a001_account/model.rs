use crate::shared::api_utils::graphql;
use contracts::domain::a001_account::query::{
    MyAccountsData, MyAccountsVariables, MY_ACCOUNTS_OPERATION, MY_ACCOUNTS_QUERY,
};
use contracts::domain::a001_account::Account;
use contracts::shared::api_error::ApiError;
use contracts::shared::graphql::GraphQlRequest;

/// Accounts the signed-in user may create projects under
pub async fn fetch_my_accounts(graphql_url: &str) -> Result<Vec<Account>, ApiError> {
    let request = GraphQlRequest::new(
        MY_ACCOUNTS_OPERATION,
        MY_ACCOUNTS_QUERY,
        MyAccountsVariables::default(),
    );
    let data: MyAccountsData = graphql(graphql_url, &request).await?;
    Ok(data.accounts)
}
