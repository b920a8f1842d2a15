// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use pocket_client::{
	AddInput, CallContext, Client, ClientConfig,
	error::{Error, ValidationError},
};

const CONSUMER_KEY: &str = "1234-abcd1234abcd1234abcd1234";
const ACCESS_TOKEN: &str = "5678-defg-5678";

fn build_client(server: &MockServer) -> Client {
	let config = ClientConfig::builder()
		.base_url(server.url("/v3"))
		.build()
		.expect("Mock base URL should be accepted.");

	Client::with_config(CONSUMER_KEY, config).expect("Client should build for the mock server.")
}

#[tokio::test]
async fn add_sends_comma_joined_tags() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v3/add")
				.header("content-type", "application/json; charset=UTF8")
				.json_body(json!({
					"url": "https://www.rust-lang.org",
					"title": "Rust",
					"tags": "qwe,rty,123",
					"access_token": ACCESS_TOKEN,
					"consumer_key": CONSUMER_KEY,
				}));
			then.status(200).header("content-type", "application/json").body(r#"{"status":1}"#);
		})
		.await;
	let input = AddInput::new("https://www.rust-lang.org", ACCESS_TOKEN)
		.with_title("Rust")
		.with_tags(["qwe", "rty", "123"]);

	client.add(&CallContext::background(), input).await.expect("Add call should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn add_succeeds_without_title_or_tags() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v3/add").json_body(json!({
				"url": "https://www.rust-lang.org",
				"access_token": ACCESS_TOKEN,
				"consumer_key": CONSUMER_KEY,
			}));
			then.status(200);
		})
		.await;

	client
		.add(&CallContext::background(), AddInput::new("https://www.rust-lang.org", ACCESS_TOKEN))
		.await
		.expect("Add call without optional fields should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn add_validates_before_network() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.any_request();
			then.status(200);
		})
		.await;
	let ctx = CallContext::background();
	let missing_url = client
		.add(&ctx, AddInput::new("", ACCESS_TOKEN))
		.await
		.expect_err("Missing URL must be rejected.");
	let missing_token = client
		.add(&ctx, AddInput::new("https://www.rust-lang.org", ""))
		.await
		.expect_err("Missing access token must be rejected.");

	assert!(matches!(missing_url, Error::Validation(ValidationError::Empty { field: "URL" })));
	assert!(matches!(
		missing_token,
		Error::Validation(ValidationError::Empty { field: "Access token" })
	));

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn add_maps_non_success_status() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v3/add");
			then.status(401).header("X-Error", "Invalid access token.");
		})
		.await;
	let err = client
		.add(&CallContext::background(), AddInput::new("https://www.rust-lang.org", ACCESS_TOKEN))
		.await
		.expect_err("Unauthorized response must fail.");

	assert_eq!(err.to_string(), "API Error: Invalid access token.");
	assert_eq!(err.status(), Some(401));

	mock.assert_async().await;
}

#[tokio::test]
async fn add_treats_no_content_status_as_failure() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v3/add");
			then.status(204).header("X-Error", "nope");
		})
		.await;
	let err = client
		.add(&CallContext::background(), AddInput::new("https://www.rust-lang.org", ACCESS_TOKEN))
		.await
		.expect_err("Only 200 OK counts as success.");

	assert!(matches!(err, Error::Api { status: 204, .. }));
	assert_eq!(err.to_string(), "API Error: nope");

	mock.assert_async().await;
}
