//! Pocket API client and the shared request dispatch.
//!
//! [`Client`] owns the consumer key, an immutable [`ClientConfig`], and a reqwest transport. The
//! public calls live in `oauth` (request token, authorization URL, access token exchange) and
//! `add` (saving items); every network call funnels through [`Client::dispatch`], which is the
//! only place that classifies transport and API failures.

mod add;
mod oauth;

pub use add::*;
pub use oauth::*;

// self
use crate::{
	_prelude::*,
	auth::ConsumerKey,
	config::{ClientConfig, Endpoint},
	context::CallContext,
	error::TransportError,
	http::{FormValues, ReqwestHttpClient, ResponseMetadata},
	obs::{self, CallOutcome, CallSpan},
};

/// Pocket API client.
///
/// The client is read-only after construction; clone it or share it behind a reference across
/// tasks. Drop a call's future to cancel it.
#[derive(Clone)]
pub struct Client {
	http_client: ReqwestHttpClient,
	consumer_key: ConsumerKey,
	config: Arc<ClientConfig>,
}
impl Client {
	/// Creates a client for the public Pocket API with the default 5 second timeout.
	///
	/// Consumer keys are issued at <https://getpocket.com/developer/apps/>.
	pub fn new(consumer_key: impl Into<String>) -> Result<Self> {
		Self::with_config(consumer_key, ClientConfig::default())
	}

	/// Creates a client using a custom configuration.
	pub fn with_config(consumer_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
		let consumer_key = ConsumerKey::new(consumer_key)?;
		let http_client = ReqwestHttpClient::with_timeout(config.timeout)?;

		Ok(Self { http_client, consumer_key, config: Arc::new(config) })
	}

	/// Creates a client that reuses a caller-provided transport.
	///
	/// The configured timeout is still applied to each request.
	pub fn with_http_client(
		consumer_key: impl Into<String>,
		config: ClientConfig,
		http_client: ReqwestHttpClient,
	) -> Result<Self> {
		let consumer_key = ConsumerKey::new(consumer_key)?;

		Ok(Self { http_client, consumer_key, config: Arc::new(config) })
	}

	/// Consumer key sent with every request.
	pub fn consumer_key(&self) -> &ConsumerKey {
		&self.consumer_key
	}

	/// Configuration the client was built with.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	async fn observe<T, Fut>(&self, endpoint: Endpoint, stage: &'static str, call: Fut) -> Result<T>
	where
		Fut: Future<Output = Result<T>>,
	{
		let span = CallSpan::new(endpoint, stage);

		obs::record_call_outcome(endpoint, CallOutcome::Attempt);

		let result = span.instrument(call).await;

		match &result {
			Ok(_) => obs::record_call_outcome(endpoint, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(endpoint, CallOutcome::Failure),
		}

		result
	}

	/// POSTs `body` as JSON to `endpoint` and decodes the form-encoded success body.
	async fn dispatch<B>(
		&self,
		ctx: &CallContext,
		endpoint: Endpoint,
		body: &B,
	) -> Result<FormValues>
	where
		B: Serialize,
	{
		let payload = serde_json::to_vec(body)?;
		let timeout = ctx.effective_timeout(self.config.timeout)?;
		let url = self.config.endpoints.url(endpoint);

		obs::log_dispatch(endpoint, url, timeout);

		let response = self.http_client.post_json(url, payload, timeout).await?;
		let meta = ResponseMetadata::from_parts(response.status().as_u16(), response.headers());

		if !meta.is_ok() {
			obs::log_api_error(endpoint, meta.status, meta.error.as_deref());

			return Err(meta.into_api_error());
		}

		let body = response.bytes().await.map_err(TransportError::from)?;

		Ok(FormValues::parse(&body))
	}
}
impl Debug for Client {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("consumer_key", &self.consumer_key)
			.field("base_url", &self.config.base_url.as_str())
			.field("timeout", &self.config.timeout)
			.finish()
	}
}
