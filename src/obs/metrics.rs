// self
use crate::{
	error::Stage,
	obs::{OperationKind, OperationOutcome},
};

/// Stage label used for failures raised before any remote call.
pub const LOCAL_STAGE_LABEL: &str = "local";

/// Records an operation outcome via the global metrics recorder (when enabled).
pub fn record_operation_outcome(kind: OperationKind, outcome: OperationOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"ias_provisioner_operation_total",
			"operation" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

/// Records a failed operation together with the remote-call boundary that failed.
///
/// Increments `ias_provisioner_operation_total{outcome="failure"}` like
/// [`record_operation_outcome`], plus `ias_provisioner_operation_failure_total` labeled by
/// `stage` ([`LOCAL_STAGE_LABEL`] when no remote call was involved).
pub fn record_operation_failure(kind: OperationKind, stage: Option<Stage>) {
	record_operation_outcome(kind, OperationOutcome::Failure);

	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"ias_provisioner_operation_failure_total",
			"operation" => kind.as_str(),
			"stage" => stage.map_or(LOCAL_STAGE_LABEL, Stage::as_str)
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = stage;
	}
}
