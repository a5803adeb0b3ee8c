//! Tenant OIDC discovery with per-field, single-flight caching.
//!
//! The token endpoint and JWKS URI only change with the tenant, and a tenant change
//! always means a new client, so each value is fetched at most once per
//! [`DiscoveryResolver`]. Each field sits behind its own async mutex: concurrent first
//! use waits for the in-flight fetch instead of issuing a duplicate request. Absent
//! values are never cached, so a later call retries the fetch.

// crates.io
use oauth2::http::{Method, Request, StatusCode, header::ACCEPT};
// self
use crate::{
	_prelude::*,
	api,
	error::{ConfigError, Stage},
	http::{self, IasHttpClient},
};

/// Subset of the OIDC discovery document the client consumes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DiscoveryDocument {
	/// Issuer identifier.
	#[serde(default)]
	pub issuer: Option<String>,
	/// OAuth 2.0 token endpoint.
	#[serde(default)]
	pub token_endpoint: Option<String>,
	/// JSON Web Key Set endpoint.
	#[serde(default)]
	pub jwks_uri: Option<String>,
}

type CachedField = AsyncMutex<Option<String>>;

/// Lazily resolves and caches discovery values for one tenant.
pub struct DiscoveryResolver<C>
where
	C: ?Sized + IasHttpClient,
{
	http_client: Arc<C>,
	endpoint: Url,
	timeout: Duration,
	token_endpoint: CachedField,
	jwks_uri: CachedField,
}
impl<C> DiscoveryResolver<C>
where
	C: ?Sized + IasHttpClient,
{
	/// Creates a resolver for the discovery document at `endpoint`.
	pub fn new(http_client: impl Into<Arc<C>>, endpoint: Url, timeout: Duration) -> Self {
		Self {
			http_client: http_client.into(),
			endpoint,
			timeout,
			token_endpoint: Default::default(),
			jwks_uri: Default::default(),
		}
	}

	/// Returns the tenant token endpoint, fetching it on first use.
	pub async fn token_endpoint(&self) -> Result<Option<String>> {
		self.resolve(&self.token_endpoint, Stage::FetchTokenUrl, |doc| doc.token_endpoint).await
	}

	/// Returns the tenant JWKS URI, fetching it on first use.
	pub async fn jwks_uri(&self) -> Result<Option<String>> {
		self.resolve(&self.jwks_uri, Stage::FetchJwksUri, |doc| doc.jwks_uri).await
	}

	/// Fetches the discovery document, bypassing the cache; `stage` tags any failure.
	pub async fn fetch_document(&self, stage: Stage) -> Result<DiscoveryDocument> {
		let request = Request::builder()
			.method(Method::GET)
			.uri(self.endpoint.as_str())
			.header(ACCEPT, "application/json")
			.body(Vec::new())
			.map_err(ConfigError::from)?;
		let response = self
			.http_client
			.execute(request, Some(self.timeout))
			.await
			.map_err(|err| http::map_transport_error(stage, err))?;

		if response.status() != StatusCode::OK {
			return Err(api::unexpected_status(stage, &response));
		}

		api::parse_json(stage, &response)
	}

	async fn resolve(
		&self,
		field: &CachedField,
		stage: Stage,
		pick: fn(DiscoveryDocument) -> Option<String>,
	) -> Result<Option<String>> {
		let mut cached = field.lock().await;

		if let Some(value) = cached.as_ref() {
			return Ok(Some(value.clone()));
		}

		let value = pick(self.fetch_document(stage).await?).filter(|value| !value.is_empty());

		if let Some(value) = &value {
			*cached = Some(value.clone());
		}

		Ok(value)
	}
}
impl<C> Debug for DiscoveryResolver<C>
where
	C: ?Sized + IasHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("DiscoveryResolver")
			.field("endpoint", &self.endpoint.as_str())
			.field("timeout", &self.timeout)
			.finish()
	}
}
