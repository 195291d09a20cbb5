// receipt-client/tests/network_bridge.rs
// Real sockets: NetworkHttpClient against a local axum server

mod common;

use axum::http::StatusCode;
use common::{FakeState, Reply, router, template_collection};
use receipt_client::{ClientConfig, ClientError, ReceiptClient};
use serde_json::json;
use shared::models::{PrintMethod, SaleData};
use tokio::net::TcpListener;

async fn spawn_fake(state: FakeState) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Address nothing listens on
async fn closed_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_sale_print_over_http() {
    let state = FakeState::default();
    state.set_templates(Reply::ok(template_collection()));
    state.set_print(Reply::ok(json!({ "message": "printed", "sale_id": 42 })));
    let base = spawn_fake(state.clone()).await;

    let client = ClientConfig::new(&base, &base).build_client().unwrap();
    let sale = SaleData::new(json!({ "id": 42 }));

    let outcome = client.sale().print_with_fallback(&sale).await;
    assert!(outcome.success, "{outcome:?}");
    assert_eq!(outcome.method, PrintMethod::Thermal);
    assert_eq!(state.template_hits(), 1);
    assert_eq!(state.received()[0].1["saleData"]["id"], 42);
}

#[tokio::test]
async fn test_bridge_error_over_http() {
    let state = FakeState::default();
    state.set_templates(Reply::ok(template_collection()));
    state.set_print(Reply::Json(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "printer jammed" }),
    ));
    let base = spawn_fake(state).await;

    let client = ClientConfig::new(&base, &base).build_client().unwrap();
    let outcome = client
        .sale()
        .print_with_fallback(&SaleData::new(json!({ "id": 1 })))
        .await;
    assert_eq!(outcome.error.as_deref(), Some("printer jammed"));
}

#[tokio::test]
async fn test_unreachable_bridge() {
    let bridge = closed_address().await;
    let templates = spawn_fake({
        let state = FakeState::default();
        state.set_templates(Reply::ok(template_collection()));
        state
    })
    .await;
    let client = ReceiptClient::from_config(&ClientConfig::new(bridge, templates)).unwrap();

    let err = client.sale().check_printer().await.unwrap_err();
    assert!(matches!(err, ClientError::ServiceUnavailable { timed_out: false, .. }));

    let err = client
        .sale()
        .print_sale_receipt(&SaleData::new(json!({ "id": 1 })))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Connection(_)), "{err:?}");
}
