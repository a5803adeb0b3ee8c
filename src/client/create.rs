//! Delete-then-recreate provisioning.
//!
//! [`IasClient::create_application`] never reuses or patches a same-named application: any
//! existing record is deleted first, so the sequence always starts from a clean slate and a
//! retry after a partial failure cleans up the leftover record. The client ID only exists
//! once an API secret has been created, which is why the record is fetched again after the
//! secret call. Nothing is rolled back when a later step fails.

// self
use crate::{
	_prelude::*,
	api::DeleteOutcome,
	auth::ApplicationName,
	client::{self, Application, IasClient},
	error::Stage,
	http::IasHttpClient,
	obs::{self, OperationKind, OperationOutcome, OperationSpan},
};

impl<C> IasClient<C>
where
	C: ?Sized + IasHttpClient,
{
	/// Creates the application `name`, replacing any existing one, and returns its
	/// credentials and tenant endpoints.
	pub async fn create_application(&self, name: &str) -> Result<Application> {
		const KIND: OperationKind = OperationKind::CreateApplication;

		let span = OperationSpan::new(KIND, name);

		obs::record_operation_outcome(KIND, OperationOutcome::Attempt);

		let result = span
			.instrument(async move {
				let name = client::parse_name(name)?;

				self.serialized(&name, self.recreate(&name)).await
			})
			.await;

		match &result {
			Ok(_) => obs::record_operation_outcome(KIND, OperationOutcome::Success),
			Err(e) => obs::record_operation_failure(KIND, e.stage()),
		}

		result
	}

	async fn recreate(&self, name: &ApplicationName) -> Result<Application> {
		if let Some(existing) = self.api.find_by_name(name).await? {
			let outcome = self.api.delete(existing.id, Stage::DeleteExistingApplication).await?;

			if outcome == DeleteOutcome::Deleted {
				obs::log_tenant_change("Deleted existing application", name, existing.id);
			}
		}

		let id = self.api.create(name).await?;

		obs::log_tenant_change("Created application", name, id);

		let client_secret =
			self.api.create_api_secret(id, &self.config.secret_description).await?;
		let client_id = self
			.api
			.fetch(id)
			.await?
			.client_id()
			.map(str::to_owned)
			.ok_or(Error::MissingField { stage: Stage::RetrieveClientId, field: "clientId" })?;
		let token_url = self.token_url().await?;
		let jwks_uri = self.jwks_uri().await?;

		Ok(Application {
			name: name.to_string(),
			id: id.to_string(),
			client_id,
			client_secret,
			token_url,
			jwks_uri,
		})
	}
}
