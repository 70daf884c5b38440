// Integration tests for background operations

use crate::common;
use fake_api_client::prelude::*;
use tokio::sync::oneshot;
use tracing::info;

#[test]
#[ignore]
fn test_promise_create_then() {
    setup_logger();
    let client = common::create_test_client();
    let rt = common::runtime();

    rt.block_on(async {
        let account = common::new_account();
        let to_create = account.clone();
        let promise = client.promise(move |client| async move { to_create.create(&client).await });

        let (tx, rx) = oneshot::channel();
        promise.then(move |resource| {
            let _ = tx.send(resource);
        });
        promise.cache(|err| panic!("Creation failed: {err}"));

        let resource = rx.await.expect("Promise never resolved");
        let created = resource.into_account().expect("Should be an account");
        common::assert_same_account(&account, &created);
        info!("Created account {} in the background", created.id);

        common::cleanup(&client, &[created]).await;
    });
}

#[test]
#[ignore]
fn test_promise_delete_invalid_id_cache() {
    setup_logger();
    let client = common::create_test_client();
    let rt = common::runtime();

    rt.block_on(async {
        let mut account = common::new_account();
        account.id = "wrong-id".to_string();
        let promise: Promise<()> = Promise::new(async move { account.delete(&client).await });

        let (tx, rx) = oneshot::channel();
        promise.cache(move |err| {
            let _ = tx.send(err.to_string());
        });

        let message = rx.await.expect("Promise never rejected");
        assert!(message.ends_with("id is not a valid uuid"));
    });
}
