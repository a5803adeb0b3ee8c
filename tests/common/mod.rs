//! Shared fixtures for driving an `IasClient` against an `httpmock` tenant.

#![allow(dead_code)]

// crates.io
use httpmock::{Mock, prelude::*};
use serde_json::{Value, json};
// self
use ias_provisioner::{
	auth::Credentials,
	client::{IasClient, ReqwestIasClient},
	config::ClientConfig,
	http::ReqwestHttpClient,
	reqwest::Client as ReqwestClient,
};

pub const USERNAME: &str = "technical-user";
pub const PASSWORD: &str = "technical-password";
/// `base64("technical-user:technical-password")`.
pub const BASIC_AUTH: &str = "Basic dGVjaG5pY2FsLXVzZXI6dGVjaG5pY2FsLXBhc3N3b3Jk";
pub const APPLICATIONS_PATH: &str = "/Applications/v1/";
pub const DISCOVERY_PATH: &str = "/.well-known/openid-configuration";
pub const ID_1: &str = "5b9c0f36-2f3f-4f61-9a53-5d3a8f7f8a11";
pub const ID_2: &str = "0d7e4c52-93a1-4b8e-8f0e-2c6a1b9d4e77";
pub const TOKEN_URL: &str = "https://t/oauth/token";
pub const JWKS_URI: &str = "https://t/jwks";

/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
/// `httpmock` during tests.
pub fn test_reqwest_http_client() -> ReqwestHttpClient {
	let client = ReqwestClient::builder()
		.danger_accept_invalid_certs(true)
		.danger_accept_invalid_hostnames(true)
		.build()
		.expect("Failed to build insecure Reqwest client for tests.");

	ReqwestHttpClient::with_client(client)
}

pub fn credentials(server: &MockServer) -> Credentials {
	Credentials::new(server.url(""), USERNAME, PASSWORD)
}

pub fn build_client(server: &MockServer) -> ReqwestIasClient {
	let config =
		ClientConfig::new(credentials(server)).expect("Mock tenant configuration should be valid.");

	IasClient::with_http_client(config, test_reqwest_http_client())
}

pub fn application_path(id: &str) -> String {
	format!("{APPLICATIONS_PATH}{id}")
}

pub fn filter(name: &str) -> String {
	format!("name eq {name}")
}

pub fn application_json(id: &str, name: &str) -> Value {
	json!({ "id": id, "name": name, "branding": { "displayName": name } })
}

pub async fn mock_lookup<'a>(server: &'a MockServer, name: &str, applications: &[&str]) -> Mock<'a> {
	let body = json!({
		"totalResults": applications.len(),
		"applications": applications.iter().map(|id| application_json(id, name)).collect::<Vec<_>>(),
	});
	let filter = filter(name);

	server
		.mock_async(|when, then| {
			when.method(GET)
				.path(APPLICATIONS_PATH)
				.query_param("filter", filter.as_str())
				.header("authorization", BASIC_AUTH);
			then.status(200).header("content-type", "application/json").json_body(body);
		})
		.await
}

pub async fn mock_lookup_not_found<'a>(server: &'a MockServer, name: &str) -> Mock<'a> {
	let filter = filter(name);

	server
		.mock_async(|when, then| {
			when.method(GET).path(APPLICATIONS_PATH).query_param("filter", filter.as_str());
			then.status(404);
		})
		.await
}

pub async fn mock_create<'a>(server: &'a MockServer, name: &str, id: &str) -> Mock<'a> {
	let location = application_path(id);
	let payload = json!({
		"name": name,
		"branding": { "displayName": name },
		"schemas": ["urn:sap:identity:application:schemas:extension:sci:1.0:Authentication"],
		"urn:sap:identity:application:schemas:extension:sci:1.0:Authentication": {
			"ssoType": "openIdConnect"
		},
	});

	server
		.mock_async(|when, then| {
			when.method(POST)
				.path(APPLICATIONS_PATH)
				.header("authorization", BASIC_AUTH)
				.json_body(payload);
			then.status(201).header("location", location.as_str());
		})
		.await
}

pub async fn mock_secret<'a>(server: &'a MockServer, id: &str, secret: &str) -> Mock<'a> {
	let path = format!("{}/apiSecrets", application_path(id));
	let body = json!({ "secret": secret });

	server
		.mock_async(|when, then| {
			when.method(POST)
				.path(path.as_str())
				.header("authorization", BASIC_AUTH)
				.json_body(json!({
					"authorizationScopes": ["oAuth"],
					"description": "ias-provisioner",
				}));
			then.status(201).header("content-type", "application/json").json_body(body);
		})
		.await
}

pub async fn mock_fetch<'a>(server: &'a MockServer, id: &str, client_id: &str) -> Mock<'a> {
	let path = application_path(id);
	let body = json!({
		"id": id,
		"urn:sap:identity:application:schemas:extension:sci:1.0:Authentication": {
			"ssoType": "openIdConnect",
			"clientId": client_id,
		},
	});

	server
		.mock_async(|when, then| {
			when.method(GET).path(path.as_str()).header("authorization", BASIC_AUTH);
			then.status(200).header("content-type", "application/json").json_body(body);
		})
		.await
}

pub async fn mock_delete<'a>(server: &'a MockServer, id: &str, status: u16) -> Mock<'a> {
	let path = application_path(id);

	server
		.mock_async(|when, then| {
			when.method(DELETE).path(path.as_str()).header("authorization", BASIC_AUTH);
			then.status(status);
		})
		.await
}

/// Catches every DELETE so tests can assert nothing destructive happened.
pub async fn mock_any_delete(server: &MockServer) -> Mock<'_> {
	server
		.mock_async(|when, then| {
			when.method(DELETE);
			then.status(200);
		})
		.await
}

pub async fn mock_discovery(server: &MockServer, document: Value) -> Mock<'_> {
	server
		.mock_async(|when, then| {
			when.method(GET).path(DISCOVERY_PATH);
			then.status(200).header("content-type", "application/json").json_body(document);
		})
		.await
}

pub async fn mock_default_discovery(server: &MockServer) -> Mock<'_> {
	mock_discovery(
		server,
		json!({ "issuer": "https://t", "token_endpoint": TOKEN_URL, "jwks_uri": JWKS_URI }),
	)
	.await
}
