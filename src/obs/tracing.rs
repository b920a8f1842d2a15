// self
use crate::{_prelude::*, config::Endpoint};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// A span builder used by client calls.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Creates a new span tagged with the provided endpoint + stage.
	pub fn new(endpoint: Endpoint, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::info_span!("pocket_client.call", endpoint = endpoint.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (endpoint, stage);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
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

/// Emits a debug event right before a request leaves the client.
pub(crate) fn log_dispatch(endpoint: Endpoint, url: &Url, timeout: Duration) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(
			endpoint = endpoint.as_str(),
			url = url.as_str(),
			?timeout,
			"dispatching request"
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (endpoint, url, timeout);
	}
}

/// Emits a warning for a non-200 response.
pub(crate) fn log_api_error(endpoint: Endpoint, status: u16, message: Option<&str>) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(
			endpoint = endpoint.as_str(),
			status,
			error = message.unwrap_or_default(),
			"pocket api rejected request"
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (endpoint, status, message);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = CallSpan::new(Endpoint::Authorize, "instrument_wraps_future");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}

	#[test]
	fn log_helpers_accept_missing_headers() {
		let url = Url::parse("https://getpocket.com/v3/add").expect("Fixture URL should parse.");

		log_dispatch(Endpoint::Add, &url, Duration::from_secs(5));
		log_dispatch(Endpoint::Add, &url, Duration::MAX);
		log_api_error(Endpoint::Add, 401, None);
	}
}
