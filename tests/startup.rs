//! Startup-sequencing tests: the connector must fail before any listener
//! starts when the store is unreachable.

#[tokio::test]
async fn connect_fails_fast_when_store_is_unreachable() {
    // Port 9 (discard) is not running MongoDB; short URI-driven timeouts
    // keep the selection failure quick.
    let uri = "mongodb://127.0.0.1:9/app?serverSelectionTimeoutMS=500&connectTimeoutMS=500";

    let result = api_server::db::connect(uri).await;
    assert!(result.is_err(), "expected connection failure, got a handle");
}

#[tokio::test]
async fn malformed_uri_is_rejected() {
    let result = api_server::db::connect("not-a-mongodb-uri").await;
    assert!(result.is_err());
}
