//! Provisioned application handed back to the caller.

// crates.io
use oauth2::{
	ClientId, ClientSecret, EndpointNotSet, EndpointSet, TokenUrl, basic::BasicClient,
};
// self
use crate::{_prelude::*, auth::Secret, error::ConfigError};

/// OAuth 2.0 client with only the token endpoint configured.
pub type TokenClient =
	BasicClient<EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Credentials and tenant endpoints of a freshly provisioned application.
///
/// Every field is non-empty. The client keeps no copy; persisting or discarding the value
/// is up to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
	/// Logical application name.
	pub name: String,
	/// Tenant-assigned identifier.
	pub id: String,
	/// OAuth 2.0 client ID.
	pub client_id: String,
	/// OAuth 2.0 client secret.
	pub client_secret: Secret,
	/// Tenant token endpoint.
	pub token_url: String,
	/// Tenant JWKS URI.
	pub jwks_uri: String,
}
impl Application {
	/// Builds an `oauth2` client ready for the client-credentials grant.
	pub fn oauth2_client(&self) -> Result<TokenClient> {
		let token_url = TokenUrl::new(self.token_url.clone())
			.map_err(|source| ConfigError::InvalidTokenUrl { source })?;

		Ok(BasicClient::new(ClientId::new(self.client_id.clone()))
			.set_client_secret(ClientSecret::new(self.client_secret.expose().to_owned()))
			.set_token_uri(token_url))
	}
}
