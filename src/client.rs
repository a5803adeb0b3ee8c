//! Provisioning orchestrator composing directory lookup, lifecycle calls, and discovery.

pub mod application;
pub mod factory;

mod create;
mod delete;

pub use application::*;
pub use factory::*;

// self
use crate::{
	_prelude::*,
	api::ApplicationsApi,
	auth::{ApplicationName, Credentials},
	config::ClientConfig,
	error::{ConfigError, Stage},
	http::IasHttpClient,
	oidc::DiscoveryResolver,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Boxed future returned by [`Client`] operations.
pub type ClientFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a + Send>>;

/// Capability interface the reconciliation layer depends on.
///
/// Production code holds an `Arc<dyn Client>` produced by a [`ClientFactory`]; tests inject
/// their own implementation instead of swapping a global constructor.
pub trait Client
where
	Self: Send + Sync,
{
	/// Ensures exactly one application named `name` exists, with fresh credentials.
	///
	/// Not idempotent: an existing application with the same name is deleted and replaced.
	fn create_application<'a>(&'a self, name: &'a str) -> ClientFuture<'a, Application>;

	/// Ensures no application named `name` remains; succeeds when none existed.
	fn delete_application<'a>(&'a self, name: &'a str) -> ClientFuture<'a, ()>;

	/// Returns the tenant connection info the client was built with.
	fn credentials(&self) -> Credentials;
}

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestIasClient = IasClient<ReqwestHttpClient>;

/// [`Client`] implementation backed by the tenant's Applications API and OIDC discovery.
///
/// The client holds the discovery cache and the per-name guards, so one instance should be
/// shared (behind an `Arc`) by every caller provisioning against the same tenant.
pub struct IasClient<C>
where
	C: ?Sized + IasHttpClient,
{
	config: ClientConfig,
	api: ApplicationsApi<C>,
	discovery: DiscoveryResolver<C>,
	name_guards: Mutex<HashMap<ApplicationName, Arc<AsyncMutex<()>>>>,
}
impl<C> IasClient<C>
where
	C: ?Sized + IasHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(config: ClientConfig, http_client: impl Into<Arc<C>>) -> Self {
		let http_client = http_client.into();
		let api = ApplicationsApi::new(
			http_client.clone(),
			config.applications_endpoint.clone(),
			&config.credentials,
		);
		let discovery = DiscoveryResolver::new(
			http_client,
			config.discovery_endpoint.clone(),
			config.discovery_timeout,
		);

		Self { config, api, discovery, name_guards: Default::default() }
	}

	/// Returns the validated configuration.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Returns the tenant connection info.
	pub fn credentials(&self) -> &Credentials {
		&self.config.credentials
	}

	/// Returns the tenant token endpoint, resolved once per client.
	pub async fn token_url(&self) -> Result<String> {
		self.discovery
			.token_endpoint()
			.await?
			.ok_or(Error::MissingField { stage: Stage::FetchTokenUrl, field: "token_endpoint" })
	}

	/// Returns the tenant JWKS URI, resolved once per client.
	pub async fn jwks_uri(&self) -> Result<String> {
		self.discovery
			.jwks_uri()
			.await?
			.ok_or(Error::MissingField { stage: Stage::FetchJwksUri, field: "jwks_uri" })
	}

	/// Returns (and creates on demand) the guard serializing operations on `name`.
	fn name_guard(&self, name: &ApplicationName) -> Arc<AsyncMutex<()>> {
		let mut guards = self.name_guards.lock();

		guards.entry(name.clone()).or_insert_with(|| Arc::new(AsyncMutex::new(()))).clone()
	}

	/// Runs `operation` under the per-name guard when serialization is enabled.
	async fn serialized<T, F>(&self, name: &ApplicationName, operation: F) -> Result<T>
	where
		F: Future<Output = Result<T>>,
	{
		if !self.config.serialize_by_name {
			return operation.await;
		}

		// Declared first so it drops after the lock guard below.
		let _lease = NameGuardLease { guards: &self.name_guards, name };
		let _serialized = self.name_guard(name).lock_arc().await;

		operation.await
	}
}

/// Evicts a name's guard once no operation holds or awaits it.
///
/// Callers only obtain a guard from the map while holding the map lock, so a strong count of
/// one observed under that lock means nobody else can still reach it.
struct NameGuardLease<'a> {
	guards: &'a Mutex<HashMap<ApplicationName, Arc<AsyncMutex<()>>>>,
	name: &'a ApplicationName,
}
impl Drop for NameGuardLease<'_> {
	fn drop(&mut self) {
		let mut guards = self.guards.lock();

		if guards.get(self.name).is_some_and(|guard| Arc::strong_count(guard) == 1) {
			guards.remove(self.name);
		}
	}
}
#[cfg(feature = "reqwest")]
impl IasClient<ReqwestHttpClient> {
	/// Creates a client with its own reqwest transport.
	pub fn new(config: ClientConfig) -> Result<Self> {
		Ok(Self::with_http_client(config, ReqwestHttpClient::new()?))
	}
}
impl<C> Client for IasClient<C>
where
	C: ?Sized + IasHttpClient,
{
	fn create_application<'a>(&'a self, name: &'a str) -> ClientFuture<'a, Application> {
		Box::pin(IasClient::create_application(self, name))
	}

	fn delete_application<'a>(&'a self, name: &'a str) -> ClientFuture<'a, ()> {
		Box::pin(IasClient::delete_application(self, name))
	}

	fn credentials(&self) -> Credentials {
		IasClient::credentials(self).clone()
	}
}
impl<C> Debug for IasClient<C>
where
	C: ?Sized + IasHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("IasClient")
			.field("config", &self.config)
			.field("discovery", &self.discovery)
			.finish()
	}
}

fn parse_name(name: &str) -> Result<ApplicationName> {
	ApplicationName::new(name).map_err(|e| ConfigError::from(e).into())
}
