// Common utilities for integration tests

use fake_api_client::prelude::*;
use tokio::runtime::Runtime;
use uuid::Uuid;

/// Creates a client configured from the environment
pub fn create_test_client() -> Client {
    Client::from_env().expect("Failed to create client")
}

/// Creates a runtime for the async operations
pub fn runtime() -> Runtime {
    Runtime::new().expect("Failed to create runtime")
}

/// Builds a valid account with a fresh identifier
pub fn new_account() -> Account {
    Account::new(
        Uuid::new_v4().to_string(),
        Uuid::new_v4().to_string(),
        Attributes {
            account_classification: "Personal".to_string(),
            alternative_bank_account_names: Some(vec!["Sam Holder".to_string()]),
            bank_id: "400300".to_string(),
            bank_id_code: "GBDSC".to_string(),
            base_currency: "GBP".to_string(),
            bic: "NWBKGB22".to_string(),
            country: "GB".to_string(),
            ..Attributes::default()
        },
    )
}

/// Asserts the fields the client sent came back unchanged
pub fn assert_same_account(sent: &Account, received: &Account) {
    assert_eq!(sent.id, received.id);
    assert_eq!(sent.organisation_id, received.organisation_id);
    assert_eq!(sent.resource_type, received.resource_type);
    assert_eq!(sent.attributes, received.attributes);
}

/// Creates `count` accounts and returns them in creation order
pub async fn seed_accounts(client: &Client, count: usize) -> Vec<Account> {
    let mut created = Vec::with_capacity(count);
    for _ in 0..count {
        let account = client
            .accounts()
            .create(&new_account())
            .await
            .expect("Failed to seed account");
        created.push(account);
    }
    created
}

/// Deletes every account, ignoring failures
pub async fn cleanup(client: &Client, accounts: &[Account]) {
    for account in accounts {
        let _ = client.accounts().delete(&account.id).await;
    }
}
