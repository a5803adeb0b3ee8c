// crates.io
use oauth2::http::{Method, StatusCode};
// self
use crate::{
	_prelude::*,
	api::{self, ApplicationsApi, model::{ApplicationList, ApplicationResource}},
	auth::ApplicationName,
	error::Stage,
	http::IasHttpClient,
};

impl<C> ApplicationsApi<C>
where
	C: ?Sized + IasHttpClient,
{
	/// Returns the single application named `name`, or `None` when nothing matches.
	///
	/// The tenant answers `404` instead of an empty page when the filter matches nothing;
	/// both shapes mean "no match". More than one match fails with
	/// [`Error::MultipleApplications`].
	pub async fn find_by_name(&self, name: &ApplicationName) -> Result<Option<ApplicationResource>> {
		const STAGE: Stage = Stage::LookupApplications;

		let mut url = self.endpoint.clone();

		url.query_pairs_mut().append_pair("filter", &name.filter());

		let request = self.request(Method::GET, &url, None)?;
		let response = self.send(STAGE, request).await?;

		match response.status() {
			StatusCode::NOT_FOUND => return Ok(None),
			StatusCode::OK => {},
			_ => return Err(api::unexpected_status(STAGE, &response)),
		}

		let list: ApplicationList = api::parse_json(STAGE, &response)?;
		let mut applications = list.applications.unwrap_or_default();

		match applications.len() {
			0 => Ok(None),
			1 => Ok(applications.pop()),
			count => Err(Error::MultipleApplications { name: name.to_string(), count }),
		}
	}
}
