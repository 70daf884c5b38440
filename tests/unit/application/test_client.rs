use fake_api_client::prelude::*;
use std::sync::Arc as StdArc;
use std::time::Duration;

#[test]
fn test_client_new_with_default_config() {
    let client = Client::new(Config::default()).expect("client should build");
    assert_eq!(client.config().base_url(), "http://localhost:8080/v1");
    assert_eq!(client.config().client_timeout(), Duration::from_secs(60));
}

#[test]
fn test_clones_share_the_transport() {
    let client = Client::new(Config::default()).unwrap();
    let clone = client.clone();
    assert!(StdArc::ptr_eq(&client.http(), &clone.http()));
}

#[test]
fn test_services_use_the_client_transport() {
    let client = Client::new(Config::default().with_base_url("http://api.test/v1/")).unwrap();
    let accounts = client.accounts();
    assert!(StdArc::ptr_eq(&accounts.http_client(), &client.http()));
    assert_eq!(
        accounts.http_client().collection_url(ACCOUNT_PATH),
        "http://api.test/v1/accounts"
    );
}

#[tokio::test]
async fn test_promise_runs_with_a_client_clone() {
    let client = Client::new(Config::default().with_record_version("3")).unwrap();
    let promise = client.promise(|client| async move {
        let mut account = Account::new("id", "org", Attributes::default());
        account.version = client.config().record_version().parse().unwrap_or_default();
        Ok(Resource::from(account))
    });

    let resource = promise.wait().await.unwrap();
    assert_eq!(resource.as_account().unwrap().version, 3);
}
