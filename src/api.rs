//! Primitive calls against the tenant Applications API.
//!
//! [`ApplicationsApi`] issues exactly one HTTP request per method and classifies the
//! response for its [`Stage`]. It never retries and never sequences calls; the
//! orchestration lives in [`crate::client`].

pub mod model;

mod directory;
mod lifecycle;

pub use lifecycle::*;

// crates.io
use oauth2::http::{
	Method, Request,
	header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	auth::{Credentials, Secret},
	error::{ConfigError, Stage},
	http::{self, HttpRequest, HttpResponse, IasHttpClient},
	obs,
};

const JSON: &str = "application/json";

/// Basic-authenticated handle on the tenant Applications API.
pub struct ApplicationsApi<C>
where
	C: ?Sized + IasHttpClient,
{
	http_client: Arc<C>,
	endpoint: Url,
	authorization: Secret,
}
impl<C> ApplicationsApi<C>
where
	C: ?Sized + IasHttpClient,
{
	/// Creates an API handle rooted at `endpoint` (which must end with `/`).
	pub fn new(http_client: impl Into<Arc<C>>, endpoint: Url, credentials: &Credentials) -> Self {
		Self {
			http_client: http_client.into(),
			endpoint,
			authorization: credentials.basic_authorization(),
		}
	}

	/// Returns the API base URL.
	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}

	fn application_url(&self, id: Uuid, suffix: &str) -> Result<Url> {
		self.endpoint.join(&format!("{id}{suffix}")).map_err(|source| {
			ConfigError::InvalidTenantUrl { url: self.endpoint.to_string(), source }.into()
		})
	}

	fn request(&self, method: Method, url: &Url, body: Option<Vec<u8>>) -> Result<HttpRequest> {
		let mut builder = Request::builder()
			.method(method)
			.uri(url.as_str())
			.header(AUTHORIZATION, self.authorization.expose())
			.header(ACCEPT, JSON);

		if body.is_some() {
			builder = builder.header(CONTENT_TYPE, JSON);
		}

		builder.body(body.unwrap_or_default()).map_err(|e| ConfigError::from(e).into())
	}

	fn json_request<T>(&self, method: Method, url: &Url, payload: &T) -> Result<HttpRequest>
	where
		T: Serialize,
	{
		let body =
			serde_json::to_vec(payload).map_err(|source| ConfigError::RequestBody { source })?;

		self.request(method, url, Some(body))
	}

	async fn send(&self, stage: Stage, request: HttpRequest) -> Result<HttpResponse> {
		self.http_client
			.execute(request, None)
			.await
			.map_err(|err| http::map_transport_error(stage, err))
	}
}
impl<C> Debug for ApplicationsApi<C>
where
	C: ?Sized + IasHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApplicationsApi")
			.field("endpoint", &self.endpoint.as_str())
			.field("authorization", &self.authorization)
			.finish()
	}
}

/// Decodes a JSON body, reporting the failing path on error.
pub(crate) fn parse_json<T>(stage: Stage, response: &HttpResponse) -> Result<T>
where
	T: DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(response.body());

	serde_path_to_error::deserialize(&mut deserializer).map_err(|source| Error::ResponseParse {
		stage,
		status: response.status().as_u16(),
		source,
	})
}

/// Logs and builds the error for a status the stage does not accept.
pub(crate) fn unexpected_status(stage: Stage, response: &HttpResponse) -> Error {
	let status = response.status().as_u16();

	obs::log_unexpected_status(stage, status);

	Error::UnexpectedStatus { stage, status }
}
