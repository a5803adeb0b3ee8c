#![cfg(feature = "reqwest")]

mod common;

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use common::*;
use ias_provisioner::error::{Error, Stage};

#[tokio::test]
async fn delete_without_record_is_a_no_op() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let lookup = mock_lookup(&server, "svc-gone", &[]).await;
	let deletes = mock_any_delete(&server).await;

	client.delete_application("svc-gone").await.expect("Deleting nothing should succeed.");

	lookup.assert_async().await;
	deletes.assert_calls_async(0).await;
}

#[tokio::test]
async fn delete_tolerates_lookup_not_found() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let lookup = mock_lookup_not_found(&server, "svc-gone").await;
	let deletes = mock_any_delete(&server).await;

	client.delete_application("svc-gone").await.expect("A 404 lookup should be a no-op.");

	lookup.assert_async().await;
	deletes.assert_calls_async(0).await;
}

#[tokio::test]
async fn delete_tolerates_lookup_without_applications_field() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let _lookup = server
		.mock_async(|when, then| {
			when.method(GET).path(APPLICATIONS_PATH);
			then.status(200).header("content-type", "application/json").json_body(json!({}));
		})
		.await;
	let deletes = mock_any_delete(&server).await;

	client.delete_application("svc-gone").await.expect("An empty page should be a no-op.");

	deletes.assert_calls_async(0).await;
}

#[tokio::test]
async fn delete_removes_the_matching_record() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let _lookup = mock_lookup(&server, "svc-b", &[ID_1]).await;
	let delete = mock_delete(&server, ID_1, 204).await;

	client.delete_application("svc-b").await.expect("Deleting an existing record should succeed.");

	delete.assert_async().await;
}

#[tokio::test]
async fn delete_tolerates_concurrent_removal() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let _lookup = mock_lookup(&server, "svc-b", &[ID_1]).await;
	let delete = mock_delete(&server, ID_1, 404).await;

	client
		.delete_application("svc-b")
		.await
		.expect("A record removed between lookup and delete should not fail.");

	delete.assert_async().await;
}

#[tokio::test]
async fn delete_failure_reports_its_stage() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let _lookup = mock_lookup(&server, "svc-b", &[ID_1]).await;
	let delete = mock_delete(&server, ID_1, 500).await;
	let err = client.delete_application("svc-b").await.expect_err("Delete failures must surface.");

	assert!(matches!(err, Error::UnexpectedStatus { stage: Stage::DeleteApplication, status: 500 }));
	assert_eq!(err.to_string(), "Failed to delete application: unexpected HTTP status 500.");

	delete.assert_async().await;
}

#[tokio::test]
async fn delete_is_idempotent() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let lookup = mock_lookup(&server, "svc-b", &[ID_1]).await;
	let delete = mock_delete(&server, ID_1, 200).await;

	client.delete_application("svc-b").await.expect("First delete should succeed.");
	lookup.delete_async().await;

	let _lookup = mock_lookup(&server, "svc-b", &[]).await;

	client.delete_application("svc-b").await.expect("Second delete should be a no-op.");

	delete.assert_calls_async(1).await;
}

#[tokio::test]
async fn delete_refuses_ambiguous_names() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let _lookup = mock_lookup(&server, "svc-dup", &[ID_1, ID_2]).await;
	let deletes = mock_any_delete(&server).await;
	let err =
		client.delete_application("svc-dup").await.expect_err("Ambiguous names must not be deleted.");

	assert!(matches!(err, Error::MultipleApplications { count: 2, .. }));
	assert_eq!(err.stage(), Some(Stage::LookupApplications));

	deletes.assert_calls_async(0).await;
}

#[tokio::test]
async fn delete_rejects_invalid_names_without_calling_the_tenant() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let lookup = server
		.mock_async(|_when, then| {
			then.status(200);
		})
		.await;
	let err = client.delete_application("svc b").await.expect_err("Whitespace names are invalid.");

	assert!(matches!(err, Error::Config(_)));

	lookup.assert_calls_async(0).await;
}
