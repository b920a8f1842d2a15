//! Per-call deadline carrier.
//!
//! Cancellation needs no token: dropping the future returned by a client call aborts the
//! in-flight request and releases its connection. [`CallContext`] adds an optional deadline that
//! tightens the client-level timeout for a single call.

// self
use crate::{_prelude::*, error::TransportError};

/// Deadline attached to a single API call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallContext {
	deadline: Option<Instant>,
}
impl CallContext {
	/// Context without a deadline; only the client timeout applies.
	pub fn background() -> Self {
		Self::default()
	}

	/// Context that expires `timeout` from now.
	pub fn with_timeout(timeout: Duration) -> Self {
		Self { deadline: Instant::now().checked_add(timeout) }
	}

	/// Context that expires at `deadline`.
	pub fn with_deadline(deadline: Instant) -> Self {
		Self { deadline: Some(deadline) }
	}

	/// Returns the deadline, if any.
	pub fn deadline(&self) -> Option<Instant> {
		self.deadline
	}

	/// Computes the timeout for a request about to be sent, capped by `limit`.
	///
	/// Fails with [`TransportError::DeadlineExceeded`] once the deadline has passed.
	pub fn effective_timeout(&self, limit: Duration) -> Result<Duration, TransportError> {
		let Some(deadline) = self.deadline else {
			return Ok(limit);
		};
		let remaining = deadline.saturating_duration_since(Instant::now());

		if remaining.is_zero() {
			return Err(TransportError::DeadlineExceeded);
		}

		Ok(remaining.min(limit))
	}
}
