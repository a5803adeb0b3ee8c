//! Client configuration with validated tenant endpoints.

// self
use crate::{_prelude::*, auth::Credentials, error::ConfigError};

/// Relative path of the Applications REST API below the tenant URL.
pub const APPLICATIONS_PATH: &str = "Applications/v1/";
/// Relative path of the OIDC discovery document below the tenant URL.
pub const DISCOVERY_PATH: &str = ".well-known/openid-configuration";

/// Validated configuration shared by every request a client issues.
#[derive(Clone, Debug)]
pub struct ClientConfig {
	/// Tenant connection info as supplied by the caller.
	pub credentials: Credentials,
	/// Applications API base, always ending with `/`.
	pub applications_endpoint: Url,
	/// OIDC discovery document URL.
	pub discovery_endpoint: Url,
	/// Timeout applied to discovery fetches.
	pub discovery_timeout: Duration,
	/// Description tag attached to every API secret this client creates.
	pub secret_description: String,
	/// Serializes create/delete sequences that target the same name.
	pub serialize_by_name: bool,
}
impl ClientConfig {
	/// Default discovery timeout.
	pub const DEFAULT_DISCOVERY_TIMEOUT: Duration = Duration::from_secs(5);
	/// Default API secret description.
	pub const DEFAULT_SECRET_DESCRIPTION: &'static str = "ias-provisioner";

	/// Starts a builder seeded with the provided credentials.
	pub fn builder(credentials: Credentials) -> ClientConfigBuilder {
		ClientConfigBuilder::new(credentials)
	}

	/// Validates `credentials` with default settings.
	pub fn new(credentials: Credentials) -> Result<Self, ConfigError> {
		Self::builder(credentials).build()
	}
}

/// Builder for [`ClientConfig`] values.
#[derive(Debug)]
pub struct ClientConfigBuilder {
	/// Tenant connection info.
	pub credentials: Credentials,
	/// Timeout applied to discovery fetches.
	pub discovery_timeout: Duration,
	/// Description tag for created API secrets.
	pub secret_description: String,
	/// Whether same-name operations are serialized.
	pub serialize_by_name: bool,
}
impl ClientConfigBuilder {
	/// Creates a builder with default settings.
	pub fn new(credentials: Credentials) -> Self {
		Self {
			credentials,
			discovery_timeout: ClientConfig::DEFAULT_DISCOVERY_TIMEOUT,
			secret_description: ClientConfig::DEFAULT_SECRET_DESCRIPTION.into(),
			serialize_by_name: true,
		}
	}

	/// Overrides the discovery timeout.
	pub fn discovery_timeout(mut self, timeout: Duration) -> Self {
		self.discovery_timeout = timeout;

		self
	}

	/// Overrides the API secret description tag.
	pub fn secret_description(mut self, description: impl Into<String>) -> Self {
		self.secret_description = description.into();

		self
	}

	/// Enables or disables the per-name guard.
	pub fn serialize_by_name(mut self, enabled: bool) -> Self {
		self.serialize_by_name = enabled;

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ClientConfig, ConfigError> {
		if self.credentials.username.is_empty() {
			return Err(ConfigError::MissingUsername);
		}
		if self.discovery_timeout.is_zero() {
			return Err(ConfigError::ZeroDiscoveryTimeout);
		}
		if self.secret_description.is_empty() {
			return Err(ConfigError::EmptySecretDescription);
		}

		let tenant = tenant_base(&self.credentials.url)?;
		let join = |path: &str| {
			tenant.join(path).map_err(|source| ConfigError::InvalidTenantUrl {
				url: self.credentials.url.clone(),
				source,
			})
		};
		let applications_endpoint = join(APPLICATIONS_PATH)?;
		let discovery_endpoint = join(DISCOVERY_PATH)?;

		Ok(ClientConfig {
			applications_endpoint,
			discovery_endpoint,
			credentials: self.credentials,
			discovery_timeout: self.discovery_timeout,
			secret_description: self.secret_description,
			serialize_by_name: self.serialize_by_name,
		})
	}
}

fn tenant_base(raw: &str) -> Result<Url, ConfigError> {
	let mut url = Url::parse(raw)
		.map_err(|source| ConfigError::InvalidTenantUrl { url: raw.to_owned(), source })?;

	if !matches!(url.scheme(), "http" | "https") {
		return Err(ConfigError::UnsupportedTenantUrl {
			url: raw.to_owned(),
			reason: "scheme must be http or https",
		});
	}
	if url.query().is_some() || url.fragment().is_some() {
		return Err(ConfigError::UnsupportedTenantUrl {
			url: raw.to_owned(),
			reason: "query and fragment are not allowed",
		});
	}
	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());

		url.set_path(&path);
	}

	Ok(url)
}
