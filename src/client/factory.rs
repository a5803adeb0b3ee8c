//! Injection point for building [`Client`] instances from tenant credentials.

// self
use crate::{
	_prelude::*,
	auth::Credentials,
	client::{Client, IasClient},
	config::{ClientConfig, ClientConfigBuilder},
	http::IasHttpClient,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Builds clients for a tenant; callers hold an `Arc<dyn ClientFactory>` so tests can
/// substitute one that returns a fake [`Client`].
pub trait ClientFactory
where
	Self: Send + Sync,
{
	/// Creates a client for the tenant described by `credentials`.
	fn new_client(&self, credentials: Credentials) -> Result<Arc<dyn Client>>;
}

/// Default factory producing [`IasClient`] values over a shared transport.
pub struct IasClientFactory<C>
where
	C: ?Sized + IasHttpClient,
{
	http_client: Arc<C>,
	configure: fn(ClientConfigBuilder) -> ClientConfigBuilder,
}
impl<C> IasClientFactory<C>
where
	C: ?Sized + IasHttpClient,
{
	/// Creates a factory whose clients share `http_client`.
	pub fn with_http_client(http_client: impl Into<Arc<C>>) -> Self {
		Self { http_client: http_client.into(), configure: |builder| builder }
	}

	/// Applies `configure` to every configuration builder before validation.
	pub fn with_config(mut self, configure: fn(ClientConfigBuilder) -> ClientConfigBuilder) -> Self {
		self.configure = configure;

		self
	}
}
#[cfg(feature = "reqwest")]
impl IasClientFactory<ReqwestHttpClient> {
	/// Creates a factory with its own reqwest transport.
	pub fn new() -> Result<Self> {
		Ok(Self::with_http_client(ReqwestHttpClient::new()?))
	}
}
impl<C> ClientFactory for IasClientFactory<C>
where
	C: ?Sized + IasHttpClient,
{
	fn new_client(&self, credentials: Credentials) -> Result<Arc<dyn Client>> {
		let config = (self.configure)(ClientConfig::builder(credentials)).build()?;

		Ok(Arc::new(IasClient::<C>::with_http_client(config, self.http_client.clone())))
	}
}
impl<C> Debug for IasClientFactory<C>
where
	C: ?Sized + IasHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("IasClientFactory(..)")
	}
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// self
	use super::*;
	use crate::error::ConfigError;

	#[test]
	fn factory_validates_credentials() {
		let factory = IasClientFactory::with_http_client(ReqwestHttpClient::default());
		let err = factory
			.new_client(Credentials::new("ftp://tenant.example.com", "user", "pass"))
			.err()
			.expect("Unsupported tenant URLs must be rejected.");

		assert!(matches!(err, Error::Config(ConfigError::UnsupportedTenantUrl { .. })));

		let client = factory
			.new_client(Credentials::new("https://tenant.example.com", "user", "pass"))
			.expect("Valid credentials should build a client.");

		assert_eq!(client.credentials().username, "user");
	}

	#[test]
	fn factory_applies_configuration_overrides() {
		let factory = IasClientFactory::with_http_client(ReqwestHttpClient::default())
			.with_config(|builder| builder.discovery_timeout(Duration::ZERO));

		assert!(matches!(
			factory.new_client(Credentials::new("https://tenant.example.com", "user", "pass")),
			Err(Error::Config(ConfigError::ZeroDiscoveryTimeout))
		));
	}
}
