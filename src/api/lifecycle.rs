// crates.io
use oauth2::http::{Method, StatusCode, header::LOCATION};
// self
use crate::{
	_prelude::*,
	api::{
		self, ApplicationsApi,
		model::{ApiSecretRequest, ApiSecretResponse, ApplicationResource, NewApplication},
	},
	auth::{ApplicationName, Secret},
	error::Stage,
	http::IasHttpClient,
};

/// Result of a delete call that did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
	/// The tenant removed the application.
	Deleted,
	/// The tenant had no application with that identifier.
	NotFound,
}

impl<C> ApplicationsApi<C>
where
	C: ?Sized + IasHttpClient,
{
	/// Creates an OpenID Connect application and returns its tenant-assigned identifier.
	pub async fn create(&self, name: &ApplicationName) -> Result<Uuid> {
		const STAGE: Stage = Stage::CreateApplication;

		let payload = NewApplication::openid_connect(name.as_str());
		let request = self.json_request(Method::POST, &self.endpoint, &payload)?;
		let response = self.send(STAGE, request).await?;

		if response.status() != StatusCode::CREATED {
			return Err(api::unexpected_status(STAGE, &response));
		}

		let location = response.headers().get(LOCATION).and_then(|value| value.to_str().ok());

		extract_application_id(location)
	}

	/// Creates an OAuth-scoped API secret for `id` and returns the secret value.
	pub async fn create_api_secret(&self, id: Uuid, description: &str) -> Result<Secret> {
		const STAGE: Stage = Stage::CreateApiSecret;

		let url = self.application_url(id, "/apiSecrets")?;
		let request = self.json_request(Method::POST, &url, &ApiSecretRequest::oauth(description))?;
		let response = self.send(STAGE, request).await?;

		if response.status() != StatusCode::CREATED {
			return Err(api::unexpected_status(STAGE, &response));
		}

		let body: ApiSecretResponse = api::parse_json(STAGE, &response)?;

		body.secret
			.filter(|secret| !secret.is_empty())
			.map(Secret::from)
			.ok_or(Error::MissingField { stage: STAGE, field: "secret" })
	}

	/// Fetches the application record for `id`.
	///
	/// Only used to read the client ID, so failures are tagged with
	/// [`Stage::RetrieveClientId`].
	pub async fn fetch(&self, id: Uuid) -> Result<ApplicationResource> {
		const STAGE: Stage = Stage::RetrieveClientId;

		let url = self.application_url(id, "")?;
		let request = self.request(Method::GET, &url, None)?;
		let response = self.send(STAGE, request).await?;

		if response.status() != StatusCode::OK {
			return Err(api::unexpected_status(STAGE, &response));
		}

		api::parse_json(STAGE, &response)
	}

	/// Deletes the application `id`; `stage` tags any failure.
	///
	/// A `404` means the application is already gone and is reported as
	/// [`DeleteOutcome::NotFound`] rather than an error.
	pub async fn delete(&self, id: Uuid, stage: Stage) -> Result<DeleteOutcome> {
		let url = self.application_url(id, "")?;
		let request = self.request(Method::DELETE, &url, None)?;
		let response = self.send(stage, request).await?;
		let status = response.status();

		if status == StatusCode::NOT_FOUND {
			Ok(DeleteOutcome::NotFound)
		} else if status.is_success() {
			Ok(DeleteOutcome::Deleted)
		} else {
			Err(api::unexpected_status(stage, &response))
		}
	}
}

/// Parses the application identifier from the final path segment of a `Location` header.
pub fn extract_application_id(location: Option<&str>) -> Result<Uuid> {
	let location = location.unwrap_or_default();
	let segment = location.rsplit('/').next().unwrap_or_default();

	Uuid::parse_str(segment)
		.map_err(|source| Error::ApplicationIdHeader { location: location.to_owned(), source })
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	const ID: &str = "5b9c0f36-2f3f-4f61-9a53-5d3a8f7f8a11";

	#[test]
	fn application_id_is_the_last_location_segment() {
		let absolute = format!("https://tenant.example.com/Applications/v1/{ID}");
		let id = extract_application_id(Some(&absolute)).expect("Absolute location should parse.");

		assert_eq!(id.to_string(), ID);

		let relative = format!("/Applications/v1/{ID}");

		assert_eq!(
			extract_application_id(Some(&relative)).expect("Relative location should parse."),
			id
		);
		assert_eq!(extract_application_id(Some(ID)).expect("Bare identifier should parse."), id);
	}

	#[test]
	fn malformed_locations_are_rejected() {
		for location in [None, Some(""), Some("/Applications/v1/not-a-uuid"), Some("/Applications/v1/")]
		{
			let err = extract_application_id(location)
				.expect_err("Malformed location headers must be rejected.");

			assert!(matches!(err, Error::ApplicationIdHeader { .. }));
		}
	}
}
