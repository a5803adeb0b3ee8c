//! Optional observability helpers for provisioning operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `ias_provisioner.operation` with the
//!   `operation` and `name` fields, plus `warn`/`info` events for rejected statuses and
//!   completed tenant changes.
//! - Enable `metrics` to increment the `ias_provisioner_operation_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`. Failures also increment
//!   `ias_provisioner_operation_failure_total`, labeled by `operation` + `stage`.

mod metrics;
mod tracing;

pub use self::metrics::*;
pub use self::tracing::*;

// self
use crate::_prelude::*;

/// Public operations observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
	/// Delete-then-recreate of an application.
	CreateApplication,
	/// Idempotent removal of an application.
	DeleteApplication,
}
impl OperationKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationKind::CreateApplication => "create_application",
			OperationKind::DeleteApplication => "delete_application",
		}
	}
}
impl Display for OperationKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationOutcome {
	/// Entry to a public operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl OperationOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationOutcome::Attempt => "attempt",
			OperationOutcome::Success => "success",
			OperationOutcome::Failure => "failure",
		}
	}
}
impl Display for OperationOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
