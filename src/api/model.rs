//! Wire models for the tenant Applications API.

// self
use crate::_prelude::*;

/// Schema URN of the authentication extension that carries SSO type and client ID.
pub const AUTHENTICATION_SCHEMA: &str =
	"urn:sap:identity:application:schemas:extension:sci:1.0:Authentication";
/// Authorization scope granted to every API secret the client creates.
pub const OAUTH_SCOPE: &str = "oAuth";

/// Single sign-on protocol of an application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SsoType {
	/// OpenID Connect.
	OpenIdConnect,
	/// SAML 2.0.
	Saml2,
	/// Any protocol this client does not model.
	#[serde(other)]
	Unknown,
}

/// Display settings of an application.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
	/// Name shown to end users.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub display_name: Option<String>,
}

/// Authentication extension of an application.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationSchema {
	/// SSO protocol.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sso_type: Option<SsoType>,
	/// OAuth client ID; populated by the tenant once an API secret exists.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub client_id: Option<String>,
}

/// Application payload submitted on creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewApplication {
	/// Application name.
	pub name: String,
	/// Display settings.
	pub branding: Branding,
	/// Schema URNs the payload uses.
	pub schemas: Vec<String>,
	/// Authentication extension.
	#[serde(rename = "urn:sap:identity:application:schemas:extension:sci:1.0:Authentication")]
	pub authentication: AuthenticationSchema,
}
impl NewApplication {
	/// Builds an OpenID Connect application whose display name equals its name.
	pub fn openid_connect(name: impl Into<String>) -> Self {
		let name = name.into();

		Self {
			branding: Branding { display_name: Some(name.clone()) },
			name,
			schemas: vec![AUTHENTICATION_SCHEMA.into()],
			authentication: AuthenticationSchema {
				sso_type: Some(SsoType::OpenIdConnect),
				client_id: None,
			},
		}
	}
}

/// Application record returned by the tenant.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApplicationResource {
	/// Tenant-assigned identifier.
	pub id: Uuid,
	/// Application name.
	#[serde(default)]
	pub name: Option<String>,
	/// Display settings.
	#[serde(default)]
	pub branding: Option<Branding>,
	/// Authentication extension.
	#[serde(default, rename = "urn:sap:identity:application:schemas:extension:sci:1.0:Authentication")]
	pub authentication: Option<AuthenticationSchema>,
}
impl ApplicationResource {
	/// Returns the OAuth client ID when the tenant has generated a non-empty one.
	pub fn client_id(&self) -> Option<&str> {
		self.authentication.as_ref()?.client_id.as_deref().filter(|id| !id.is_empty())
	}
}

/// Page of applications returned by a filtered list query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationList {
	/// Matching applications; the tenant may omit the field when nothing matched.
	#[serde(default)]
	pub applications: Option<Vec<ApplicationResource>>,
	/// Total number of matches reported by the tenant.
	#[serde(default)]
	pub total_results: Option<u64>,
}

/// API secret creation payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSecretRequest {
	/// Scopes the secret is valid for.
	pub authorization_scopes: Vec<String>,
	/// Free-form description identifying the creator.
	pub description: String,
}
impl ApiSecretRequest {
	/// Builds an OAuth-scoped secret request tagged with `description`.
	pub fn oauth(description: impl Into<String>) -> Self {
		Self { authorization_scopes: vec![OAUTH_SCOPE.into()], description: description.into() }
	}
}

/// API secret creation response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSecretResponse {
	/// Secret value; only returned once.
	#[serde(default)]
	pub secret: Option<String>,
}
