use crate::fixtures::{ACCOUNT_ID, client_for, envelope, error_body, sample_account, stored_account};
use fake_api_client::prelude::*;
use mockito::Server;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{mpsc, oneshot};

#[tokio::test]
async fn test_then_receives_created_account() {
    let mut server = Server::new_async().await;
    let account = sample_account(ACCOUNT_ID);
    server
        .mock("POST", "/v1/accounts")
        .with_status(201)
        .with_body(envelope(stored_account(&account)))
        .create_async()
        .await;

    let client = client_for(&server);
    let to_create = account.clone();
    let promise = client.promise(move |client| async move { to_create.create(&client).await });

    let (done_tx, done_rx) = oneshot::channel();
    let on_success = promise.then(move |resource| {
        let _ = done_tx.send(resource);
    });
    let on_failure = promise.cache(|err| panic!("creation should succeed: {err}"));

    let resource = done_rx.await.unwrap();
    let created = resource.as_account().unwrap();
    assert_eq!(created.id, account.id);
    assert_eq!(created.resource_type, account.resource_type);
    assert_eq!(created.organisation_id, account.organisation_id);
    assert_eq!(created.attributes, account.attributes);

    on_success.await.unwrap();
    on_failure.await.unwrap();
}

#[tokio::test]
async fn test_cache_receives_response_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/accounts")
        .with_status(400)
        .with_body(error_body("validation failure list:\nid in body must be of type uuid"))
        .create_async()
        .await;

    let client = client_for(&server);
    let account = sample_account("invalid uuid");
    let promise = client.promise(move |client| async move { account.create(&client).await });

    let (done_tx, done_rx) = oneshot::channel();
    let on_success = promise.then(|resource| panic!("creation should fail: {resource}"));
    let on_failure = promise.cache(move |err| {
        let _ = done_tx.send(err.status_code());
    });

    assert_eq!(done_rx.await.unwrap(), Some(400));
    on_success.await.unwrap();
    on_failure.await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registrations_observe_single_outcome_once() {
    let mut server = Server::new_async().await;
    let account = sample_account(ACCOUNT_ID);
    let mock = server
        .mock("POST", "/v1/accounts")
        .with_status(201)
        .with_body(envelope(stored_account(&account)))
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let promise = client.promise(move |client| async move { account.create(&client).await });

    let successes = Arc::new(AtomicUsize::new(0));
    let failures = Arc::new(AtomicUsize::new(0));
    let (id_tx, mut id_rx) = mpsc::unbounded_channel();

    let mut observers = Vec::new();
    for _ in 0..8 {
        let successes = successes.clone();
        let id_tx = id_tx.clone();
        observers.push(promise.then(move |resource| {
            successes.fetch_add(1, Ordering::SeqCst);
            let _ = id_tx.send(resource.id().to_string());
        }));
        let failures = failures.clone();
        observers.push(promise.cache(move |_| {
            failures.fetch_add(1, Ordering::SeqCst);
        }));
    }
    drop(id_tx);

    for observer in observers {
        observer.await.unwrap();
    }

    assert_eq!(successes.load(Ordering::SeqCst), 8);
    assert_eq!(failures.load(Ordering::SeqCst), 0);

    let mut ids = Vec::new();
    while let Some(id) = id_rx.recv().await {
        ids.push(id);
    }
    assert_eq!(ids.len(), 8);
    assert!(ids.iter().all(|id| id == ACCOUNT_ID));

    // The operation itself ran exactly once
    mock.assert_async().await;
}

#[tokio::test]
async fn test_on_settled_fires_exactly_one_branch() {
    let mut server = Server::new_async().await;
    server
        .mock("DELETE", format!("/v1/accounts/{ACCOUNT_ID}").as_str())
        .match_query(mockito::Matcher::Any)
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server);
    let account = sample_account(ACCOUNT_ID);
    let promise: Promise<()> = Promise::new(async move { account.delete(&client).await });

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    promise
        .on_settled(move |outcome| {
            assert!(outcome.is_ok());
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .await
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(promise.is_settled());
    assert!(promise.wait().await.is_ok());
}

#[tokio::test]
async fn test_wait_surfaces_shared_error() {
    let client = Client::new(
        Config::default()
            .with_base_url("http://127.0.0.1:1/v1")
            .with_client_timeout(std::time::Duration::from_secs(2)),
    )
    .unwrap();

    let account = sample_account(ACCOUNT_ID);
    let promise = client.promise(move |client| async move { account.list_by_id(&client).await });

    let first = promise.wait().await.unwrap_err();
    let second = promise.wait().await.unwrap_err();
    assert!(matches!(*first, AppError::Http(_)));
    assert!(Arc::ptr_eq(&first, &second));
}
