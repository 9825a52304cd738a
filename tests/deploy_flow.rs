//! Integration tests for the deploy submission flow

use mockito;
use serde_json::json;
use url::Url;
use whisk_deploy::{
    config::HttpClientConfig,
    dispatch::Dispatcher,
    form::Form,
    http_client::build_http_client,
    models::DeployRequest,
    render::{ResultRenderer, StatusPane},
};

const WEB_BASE: &str = "https://openwhisk.ng.bluemix.net/api/v1/web/";

fn test_form() -> Form {
    [
        ("wsk-namespace", "alice_dev"),
        ("wsk-pkg", "shipping"),
        ("wsk-action", "orders"),
        ("source", "sql"),
        ("query", "select * from orders"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn test_dispatcher(url: &str) -> Dispatcher {
    let client = build_http_client(&HttpClientConfig::default()).unwrap();
    Dispatcher::new(Url::parse(url).unwrap(), client)
}

fn test_renderer(request: &DeployRequest, pane: StatusPane) -> ResultRenderer {
    ResultRenderer::new(Url::parse(WEB_BASE).unwrap(), request, pane)
}

#[tokio::test]
async fn test_success_renders_result_link() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .match_header("Content-Type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;

    let request = DeployRequest::from_form(&test_form()).unwrap();
    let pane = StatusPane::new();
    let renderer = test_renderer(&request, pane.clone());

    renderer.in_progress();
    assert_eq!(pane.read(), "[ Query is compiling ]");

    let dispatcher = test_dispatcher(&server.url());
    dispatcher.call(request, |body| renderer.success(body), || renderer.failure()).await;

    let expected_url =
        "https://openwhisk.ng.bluemix.net/api/v1/web/alice_dev/shipping/orders.json";
    assert_eq!(pane.read(), format!("<a href=\"{expected_url}\">{expected_url}</a>"));
    mock.assert();
}

#[tokio::test]
async fn test_failure_renders_fixed_message() {
    let mut server = mockito::Server::new_async().await;

    // A single attempt; the dispatcher never retries a failed submission.
    let mock = server
        .mock("POST", "/")
        .with_status(500)
        .with_body("Internal Server Error")
        .expect(1)
        .create_async()
        .await;

    let request = DeployRequest::from_form(&test_form()).unwrap();
    let pane = StatusPane::new();
    let renderer = test_renderer(&request, pane.clone());

    renderer.in_progress();

    let dispatcher = test_dispatcher(&server.url());
    dispatcher.call(request, |body| renderer.success(body), || renderer.failure()).await;

    assert_eq!(pane.read(), "compilation or deployment failed");
    mock.assert();
}

#[tokio::test]
async fn test_unreachable_endpoint_renders_failure() {
    // Nothing listens here; the send itself fails. The pane must not stay
    // stuck on the in-progress marker.
    let request = DeployRequest::from_form(&test_form()).unwrap();
    let pane = StatusPane::new();
    let renderer = test_renderer(&request, pane.clone());

    renderer.in_progress();

    let dispatcher = test_dispatcher("http://127.0.0.1:1/");
    dispatcher.call(request, |body| renderer.success(body), || renderer.failure()).await;

    assert_eq!(pane.read(), "compilation or deployment failed");
}

#[tokio::test]
async fn test_missing_query_aborts_before_dispatch() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("POST", "/").expect(0).create_async().await;

    let form: Form = [("wsk-pkg".to_string(), "shipping".to_string())].into_iter().collect();
    let result = DeployRequest::from_form(&form);

    assert!(result.is_err());
    mock.assert();
}

#[tokio::test]
async fn test_response_body_is_forwarded_opaquely() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_body(r#"{"activation":"abc123","annotations":[]}"#)
        .create_async()
        .await;

    let request = DeployRequest::from_form(&test_form()).unwrap();
    let dispatcher = test_dispatcher(&server.url());

    let mut seen = None;
    dispatcher
        .call(request, |body| seen = Some(body), || panic!("failure must not run"))
        .await;

    assert_eq!(seen, Some(json!({"activation": "abc123", "annotations": []})));
    mock.assert();
}

#[tokio::test]
async fn test_full_flow_from_form_file() {
    let mut server = mockito::Server::new_async().await;
    let mock =
        server.mock("POST", "/").with_status(200).with_body("{}").create_async().await;

    let dir = tempfile::tempdir().unwrap();
    let form_path = dir.path().join("form.yaml");
    std::fs::write(
        &form_path,
        r#"
wsk-namespace: "alice_dev"
wsk-pkg: "shipping"
wsk-action: "orders"
query: "select * from orders"
"#,
    )
    .unwrap();

    let form = Form::load(form_path).unwrap();
    let request = DeployRequest::from_form(&form).unwrap();
    let pane = StatusPane::new();
    let renderer = test_renderer(&request, pane.clone());

    renderer.in_progress();

    let dispatcher = test_dispatcher(&server.url());
    dispatcher.call(request, |body| renderer.success(body), || renderer.failure()).await;

    assert!(pane.read().contains("alice_dev/shipping/orders.json"));
    mock.assert();
}
