//! Provisions an application against a mocked tenant, then retires it again.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
// self
use ias_provisioner::{
	auth::Credentials,
	client::{IasClient, ReqwestIasClient},
	config::ClientConfig,
	http::ReqwestHttpClient,
	reqwest::Client,
};

const ID: &str = "5b9c0f36-2f3f-4f61-9a53-5d3a8f7f8a11";

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let application_path = format!("/Applications/v1/{ID}");
	let mut lookup = server
		.mock_async(|when, then| {
			when.method(GET).path("/Applications/v1/");
			then.status(404);
		})
		.await;
	let create = server
		.mock_async(|when, then| {
			when.method(POST).path("/Applications/v1/");
			then.status(201).header("location", application_path.as_str());
		})
		.await;
	let secret = server
		.mock_async(|when, then| {
			when.method(POST).path(format!("{application_path}/apiSecrets"));
			then.status(201)
				.header("content-type", "application/json")
				.json_body(json!({ "secret": "demo-secret" }));
		})
		.await;
	let _fetch = server
		.mock_async(|when, then| {
			when.method(GET).path(application_path.as_str());
			then.status(200).header("content-type", "application/json").json_body(json!({
				"id": ID,
				"urn:sap:identity:application:schemas:extension:sci:1.0:Authentication": {
					"clientId": "demo-client"
				}
			}));
		})
		.await;
	let _discovery = server
		.mock_async(|when, then| {
			when.method(GET).path("/.well-known/openid-configuration");
			then.status(200).header("content-type", "application/json").json_body(json!({
				"token_endpoint": server.url("/oauth2/token"),
				"jwks_uri": server.url("/oauth2/certs"),
			}));
		})
		.await;
	let config = ClientConfig::new(Credentials::new(server.url(""), "technical-user", "secret"))?;
	let http_client = ReqwestHttpClient::with_client(
		Client::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()?,
	);
	let client: ReqwestIasClient = IasClient::with_http_client(config, http_client);
	let application = client.create_application("demo-service").await?;

	println!(
		"Provisioned {} ({}) with client ID {}; tokens from {}.",
		application.name, application.id, application.client_id, application.token_url
	);

	let token_client = application.oauth2_client()?;

	println!("OAuth 2.0 client ready for {}.", token_client.token_uri().as_str());

	create.assert_async().await;
	secret.assert_async().await;
	lookup.delete_async().await;

	let _lookup = server
		.mock_async(|when, then| {
			when.method(GET).path("/Applications/v1/");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "applications": [{ "id": ID, "name": "demo-service" }] }));
		})
		.await;
	let delete = server
		.mock_async(|when, then| {
			when.method(DELETE).path(application_path.as_str());
			then.status(204);
		})
		.await;

	client.delete_application("demo-service").await?;
	delete.assert_async().await;

	println!("Retired {}.", application.name);

	Ok(())
}
