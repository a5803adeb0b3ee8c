// self
use crate::{_prelude::*, auth::ApplicationName, error::Stage, obs::OperationKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedOperation<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedOperation<F> = F;

/// A span wrapping one public operation.
#[derive(Clone, Debug)]
pub struct OperationSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl OperationSpan {
	/// Creates a new span tagged with the operation kind and the raw application name.
	pub fn new(kind: OperationKind, name: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"ias_provisioner.operation",
				operation = kind.as_str(),
				name
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, name);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedOperation<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Logs a status the stage rejected.
pub(crate) fn log_unexpected_status(stage: Stage, status: u16) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(stage = stage.as_str(), status, "{stage}.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (stage, status);
	}
}

/// Logs a change the client made to the tenant directory.
pub(crate) fn log_tenant_change(message: &'static str, name: &ApplicationName, id: Uuid) {
	#[cfg(feature = "tracing")]
	{
		tracing::info!(name = name.as_str(), %id, "{message}.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (message, name, id);
	}
}
