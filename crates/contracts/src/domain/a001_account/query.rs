//! `MyAccounts` GraphQL query

use super::aggregate::Account;
use serde::{Deserialize, Serialize};

pub const MY_ACCOUNTS_OPERATION: &str = "MyAccounts";

pub const MY_ACCOUNTS_QUERY: &str = r#"
query MyAccounts {
  accounts {
    id
    name
  }
}
"#;

/// The query takes no arguments; serializes as `{}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MyAccountsVariables {}

#[derive(Debug, Clone, Deserialize)]
pub struct MyAccountsData {
    #[serde(default)]
    pub accounts: Vec<Account>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accounts_data_parses() {
        let data: MyAccountsData =
            serde_json::from_str(r#"{"accounts":[{"id":"a1","name":"Acme"}]}"#).unwrap();
        assert_eq!(data.accounts, vec![Account::new("a1", "Acme")]);
    }

    #[test]
    fn test_missing_accounts_field_is_empty() {
        let data: MyAccountsData = serde_json::from_str("{}").unwrap();
        assert!(data.accounts.is_empty());
    }
}
