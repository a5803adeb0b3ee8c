//! Transport primitives for tenant requests.
//!
//! The module exposes [`IasHttpClient`], the client's only dependency on an HTTP stack.
//! Requests and responses use the `http` types re-exported by `oauth2`, so any
//! transport that can execute an [`HttpRequest`] can back the client. Failures are
//! reported as [`HttpClientError`] and tagged with the current [`Stage`] before they
//! reach callers.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
pub use oauth2::{HttpClientError, HttpRequest, HttpResponse};
// self
use crate::{
	_prelude::*,
	error::{ConfigError, Stage, TransportError},
};

/// Boxed future returned by [`IasHttpClient::execute`].
pub type HttpFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, HttpClientError<E>>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing tenant requests.
///
/// Implementations must be `Send + Sync + 'static` so one transport can be shared by the
/// Applications API and the discovery resolver behind an `Arc`. The returned future must be
/// `Send` so the client's boxed operation futures inherit the guarantee.
pub trait IasHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Executes `request`, bounding the whole exchange by `timeout` when provided.
	///
	/// Non-success statuses are not errors at this layer; they are returned as responses so
	/// the caller can apply stage-specific status policy.
	fn execute(
		&self,
		request: HttpRequest,
		timeout: Option<Duration>,
	) -> HttpFuture<'_, Self::TransportError>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client that never follows redirects, so `Location` headers stay observable.
	pub fn new() -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().redirect(reqwest::redirect::Policy::none()).build()?;

		Ok(Self(client))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl IasHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(
		&self,
		request: HttpRequest,
		timeout: Option<Duration>,
	) -> HttpFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let mut request: reqwest::Request = request.try_into().map_err(Box::new)?;

			if timeout.is_some() {
				*request.timeout_mut() = timeout;
			}

			let response = client.execute(request).await.map_err(Box::new)?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new =
				HttpResponse::new(response.bytes().await.map_err(Box::new)?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}

/// Tags a transport failure with the stage whose request produced it.
pub(crate) fn map_transport_error<E>(stage: Stage, err: HttpClientError<E>) -> Error
where
	E: 'static + Send + Sync + StdError,
{
	match err {
		HttpClientError::Reqwest(inner) =>
			Error::Transport { stage, source: TransportError::Network { source: inner } },
		HttpClientError::Http(inner) => ConfigError::from(inner).into(),
		HttpClientError::Io(inner) => Error::Transport { stage, source: TransportError::Io(inner) },
		HttpClientError::Other(message) =>
			Error::Transport { stage, source: TransportError::Other { message } },
		_ => Error::Transport {
			stage,
			source: TransportError::Other { message: "unrecognized HTTP client failure".into() },
		},
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::io::{Error as IoError, ErrorKind};
	// self
	use super::*;

	#[test]
	fn transport_failures_keep_their_stage() {
		let err = map_transport_error::<IoError>(
			Stage::FetchTokenUrl,
			HttpClientError::Io(IoError::new(ErrorKind::TimedOut, "timed out")),
		);

		assert!(matches!(
			err,
			Error::Transport { stage: Stage::FetchTokenUrl, source: TransportError::Io(_) }
		));

		let err = map_transport_error::<IoError>(
			Stage::CreateApplication,
			HttpClientError::Reqwest(Box::new(IoError::other("reset"))),
		);

		assert!(matches!(
			err,
			Error::Transport { stage: Stage::CreateApplication, source: TransportError::Network { .. } }
		));
		assert_eq!(err.stage(), Some(Stage::CreateApplication));
	}
}
