//! Stage-tagged error types surfaced by the provisioning client.

// self
use crate::{_prelude::*, auth::NameError};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Remote-call boundaries crossed while provisioning or retiring an application.
///
/// Every remote failure carries exactly one stage so callers can branch on where a
/// multi-step operation stopped without inspecting messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
	/// Listing applications filtered by name.
	LookupApplications,
	/// Removing a same-named application before creating its replacement.
	DeleteExistingApplication,
	/// Creating the application record.
	CreateApplication,
	/// Creating the API secret under a fresh application.
	CreateApiSecret,
	/// Re-fetching the application to read its client ID.
	RetrieveClientId,
	/// Resolving the tenant token endpoint from OIDC discovery.
	FetchTokenUrl,
	/// Resolving the tenant JWKS URI from OIDC discovery.
	FetchJwksUri,
	/// Removing an application on explicit request.
	DeleteApplication,
}
impl Stage {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Stage::LookupApplications => "lookup_applications",
			Stage::DeleteExistingApplication => "delete_existing_application",
			Stage::CreateApplication => "create_application",
			Stage::CreateApiSecret => "create_api_secret",
			Stage::RetrieveClientId => "retrieve_client_id",
			Stage::FetchTokenUrl => "fetch_token_url",
			Stage::FetchJwksUri => "fetch_jwks_uri",
			Stage::DeleteApplication => "delete_application",
		}
	}

	/// Returns the human-readable failure summary for the stage.
	pub const fn description(self) -> &'static str {
		match self {
			Stage::LookupApplications => "Failed to fetch existing applications",
			Stage::DeleteExistingApplication =>
				"Failed to delete existing application before creation",
			Stage::CreateApplication => "Failed to create application",
			Stage::CreateApiSecret => "Failed to create api secret",
			Stage::RetrieveClientId => "Failed to retrieve client ID",
			Stage::FetchTokenUrl => "Failed to fetch token url",
			Stage::FetchJwksUri => "Failed to fetch jwks uri",
			Stage::DeleteApplication => "Failed to delete application",
		}
	}
}
impl Display for Stage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.description())
	}
}

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem; nothing was sent to the tenant.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout) while crossing `stage`.
	#[error("{stage}: transport failure.")]
	Transport {
		/// Stage whose request failed.
		stage: Stage,
		/// Underlying transport failure.
		#[source]
		source: TransportError,
	},
	/// The tenant answered with a status the stage does not accept.
	#[error("{stage}: unexpected HTTP status {status}.")]
	UnexpectedStatus {
		/// Stage whose request was rejected.
		stage: Stage,
		/// HTTP status code returned by the tenant.
		status: u16,
	},
	/// The tenant answered with a body that could not be decoded.
	#[error("{stage}: response body is malformed (HTTP {status}).")]
	ResponseParse {
		/// Stage whose response failed to decode.
		stage: Stage,
		/// HTTP status code returned alongside the body.
		status: u16,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// The name filter matched more than one application.
	#[error("Found multiple applications with the same name {name} ({count} matches).")]
	MultipleApplications {
		/// Application name used in the filter.
		name: String,
		/// Number of records returned.
		count: usize,
	},
	/// The creation response did not end its `Location` header with an application UUID.
	#[error("Failed to retrieve application ID from header `{location}`.")]
	ApplicationIdHeader {
		/// Raw header value (empty when the header was absent).
		location: String,
		/// UUID parsing failure.
		#[source]
		source: uuid::Error,
	},
	/// A successful response lacked a value the stage requires.
	#[error("{stage}: response is missing `{field}`.")]
	MissingField {
		/// Stage whose response was incomplete.
		stage: Stage,
		/// Wire name of the missing field.
		field: &'static str,
	},
}
impl Error {
	/// Returns the remote-call boundary this error belongs to, if any.
	///
	/// Configuration failures happen before any remote call and therefore carry no stage.
	pub fn stage(&self) -> Option<Stage> {
		match self {
			Error::Config(_) => None,
			Error::Transport { stage, .. }
			| Error::UnexpectedStatus { stage, .. }
			| Error::ResponseParse { stage, .. }
			| Error::MissingField { stage, .. } => Some(*stage),
			Error::MultipleApplications { .. } => Some(Stage::LookupApplications),
			Error::ApplicationIdHeader { .. } => Some(Stage::CreateApplication),
		}
	}

	/// Returns the HTTP status attached to the failure, when one was observed.
	pub fn status(&self) -> Option<u16> {
		match self {
			Error::UnexpectedStatus { status, .. } | Error::ResponseParse { status, .. } =>
				Some(*status),
			_ => None,
		}
	}
}

/// Configuration and validation failures raised before contacting the tenant.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// Request payload could not be encoded.
	#[error("Request payload could not be encoded.")]
	RequestBody {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
	/// Tenant URL cannot be parsed.
	#[error("Tenant URL `{url}` is invalid.")]
	InvalidTenantUrl {
		/// Raw tenant URL.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Tenant URL parses but cannot serve as an API base.
	#[error("Tenant URL `{url}` is unsupported: {reason}.")]
	UnsupportedTenantUrl {
		/// Raw tenant URL.
		url: String,
		/// Why the URL was rejected.
		reason: &'static str,
	},
	/// Tenant username is empty.
	#[error("Tenant username cannot be empty.")]
	MissingUsername,
	/// Discovery timeout must be positive.
	#[error("Discovery timeout must be greater than zero.")]
	ZeroDiscoveryTimeout,
	/// API secret description is empty.
	#[error("API secret description cannot be empty.")]
	EmptySecretDescription,
	/// Application name failed validation.
	#[error("Application name is invalid.")]
	InvalidApplicationName(#[from] NameError),
	/// Provisioned token URL cannot back an OAuth 2.0 client.
	#[error("Token URL is invalid.")]
	InvalidTokenUrl {
		/// Underlying parsing failure.
		#[source]
		source: oauth2::url::ParseError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the tenant.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the tenant.")]
	Io(#[from] std::io::Error),
	/// Transport reported a failure without a structured cause.
	#[error("HTTP client failed: {message}.")]
	Other {
		/// Transport-supplied message.
		message: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
