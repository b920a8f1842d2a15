//! Transport primitives for Pocket API calls.
//!
//! Pocket accepts JSON request bodies but answers with `application/x-www-form-urlencoded`
//! payloads, and reports failures through the `X-Error`/`X-Error-Code` headers instead of the
//! body. [`ReqwestHttpClient`] owns the wire side, [`ResponseMetadata`] captures the status and
//! error headers, and [`FormValues`] is the decoded success body.

// std
use std::ops::Deref;
// crates.io
use reqwest::{
	Response,
	header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
// self
use crate::{
	_prelude::*,
	error::{ConfigError, TransportError},
};

/// Content type sent with every request body.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF8";
/// Header carrying Pocket's human-readable error message on non-200 responses.
pub const X_ERROR_HEADER: &str = "X-Error";
/// Header carrying Pocket's numeric error code on non-200 responses.
pub const X_ERROR_CODE_HEADER: &str = "X-Error-Code";

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client whose every request is bounded by `timeout`.
	pub fn with_timeout(timeout: Duration) -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().timeout(timeout).build()?;

		Ok(Self(client))
	}

	/// POSTs a pre-encoded JSON body and returns the raw response, whatever its status.
	pub(crate) async fn post_json(
		&self,
		url: &Url,
		body: Vec<u8>,
		timeout: Duration,
	) -> Result<Response, TransportError> {
		let response = self
			.0
			.post(url.clone())
			.header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
			.timeout(timeout)
			.body(body)
			.send()
			.await?;

		Ok(response)
	}
}
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// Status and error headers captured from a Pocket response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
	/// HTTP status code.
	pub status: u16,
	/// `X-Error` header value, if present.
	pub error: Option<String>,
	/// `X-Error-Code` header value, if present.
	pub error_code: Option<String>,
}
impl ResponseMetadata {
	/// Extracts metadata from a status code and header map.
	pub fn from_parts(status: u16, headers: &HeaderMap) -> Self {
		Self {
			status,
			error: header_text(headers, X_ERROR_HEADER),
			error_code: header_text(headers, X_ERROR_CODE_HEADER),
		}
	}

	/// Whether the status is exactly `200 OK`; Pocket signals every failure otherwise.
	pub fn is_ok(&self) -> bool {
		self.status == 200
	}

	/// Converts the metadata of a failed response into an API error.
	pub fn into_api_error(self) -> Error {
		Error::Api {
			status: self.status,
			message: self.error.unwrap_or_default(),
			code: self.error_code,
		}
	}
}

/// Decoded `application/x-www-form-urlencoded` response body.
///
/// Keys may repeat; [`get`](FormValues::get) returns the first value like most form decoders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, Vec<String>>);
impl FormValues {
	/// Decodes a form-encoded body. Malformed escapes are kept literally.
	pub fn parse(input: &[u8]) -> Self {
		let mut values = BTreeMap::<String, Vec<String>>::new();

		for (key, value) in url::form_urlencoded::parse(input) {
			values.entry(key.into_owned()).or_default().push(value.into_owned());
		}

		Self(values)
	}

	/// Returns the first value for `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).and_then(|values| values.first()).map(String::as_str)
	}

	/// Returns the first value for `key` when it is present and non-empty.
	pub fn get_non_empty(&self, key: &str) -> Option<&str> {
		self.get(key).filter(|value| !value.is_empty())
	}
}

// Header bytes outside visible ASCII are kept (lossily decoded) instead of dropping the message.
fn header_text(headers: &HeaderMap, name: &str) -> Option<String> {
	headers.get(name).map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}
