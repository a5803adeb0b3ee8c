// self
use crate::{
	_prelude::*,
	api::DeleteOutcome,
	auth::ApplicationName,
	client::{self, IasClient},
	error::Stage,
	http::IasHttpClient,
	obs::{self, OperationKind, OperationOutcome, OperationSpan},
};

impl<C> IasClient<C>
where
	C: ?Sized + IasHttpClient,
{
	/// Deletes the application `name`; succeeds without side effects when none exists.
	pub async fn delete_application(&self, name: &str) -> Result<()> {
		const KIND: OperationKind = OperationKind::DeleteApplication;

		let span = OperationSpan::new(KIND, name);

		obs::record_operation_outcome(KIND, OperationOutcome::Attempt);

		let result = span
			.instrument(async move {
				let name = client::parse_name(name)?;

				self.serialized(&name, self.remove(&name)).await
			})
			.await;

		match &result {
			Ok(_) => obs::record_operation_outcome(KIND, OperationOutcome::Success),
			Err(e) => obs::record_operation_failure(KIND, e.stage()),
		}

		result
	}

	async fn remove(&self, name: &ApplicationName) -> Result<()> {
		let Some(existing) = self.api.find_by_name(name).await? else {
			return Ok(());
		};

		// 404 means someone else removed it between lookup and delete.
		if self.api.delete(existing.id, Stage::DeleteApplication).await? == DeleteOutcome::Deleted
		{
			obs::log_tenant_change("Deleted application", name, existing.id);
		}

		Ok(())
	}
}
