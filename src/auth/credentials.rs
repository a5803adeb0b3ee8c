//! Tenant connection info handed to the client at construction.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
// self
use crate::{_prelude::*, auth::Secret};

/// Tenant base URL plus the technical user the client authenticates as.
///
/// Owned by the client for its whole lifetime; the client never persists it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
	/// Tenant base URL, e.g. `https://tenant.accounts.example.com`.
	pub url: String,
	/// Technical user name.
	pub username: String,
	/// Technical user password.
	pub password: Secret,
}
impl Credentials {
	/// Creates a new credential set.
	pub fn new(
		url: impl Into<String>,
		username: impl Into<String>,
		password: impl Into<Secret>,
	) -> Self {
		Self { url: url.into(), username: username.into(), password: password.into() }
	}

	/// Returns `true` when no field was populated.
	pub fn is_empty(&self) -> bool {
		self.url.is_empty() && self.username.is_empty() && self.password.is_empty()
	}

	/// Encodes the HTTP Basic `Authorization` header value.
	pub(crate) fn basic_authorization(&self) -> Secret {
		let raw = format!("{}:{}", self.username, self.password.expose());

		Secret::new(format!("Basic {}", STANDARD.encode(raw)))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn basic_authorization_encodes_user_and_password() {
		let credentials = Credentials::new("https://tenant.example.com", "user", "pass");

		assert_eq!(credentials.basic_authorization().expose(), "Basic dXNlcjpwYXNz");
	}

	#[test]
	fn debug_output_redacts_password() {
		let credentials = Credentials::new("https://tenant.example.com", "user", "hunter2");
		let rendered = format!("{credentials:?}");

		assert!(!rendered.contains("hunter2"));
		assert!(rendered.contains("<redacted>"));
	}

	#[test]
	fn default_value_is_empty() {
		assert!(Credentials::default().is_empty());
		assert!(!Credentials::new("u", "", "").is_empty());
	}
}
