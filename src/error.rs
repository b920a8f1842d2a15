//! Client-level error types shared across configuration, transport, and API calls.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// A required input was missing; no request was sent.
	#[error(transparent)]
	Validation(#[from] ValidationError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Request payload could not be encoded as JSON.
	#[error("Request body could not be encoded as JSON.")]
	Encode(
		#[from]
		#[source]
		serde_json::Error,
	),
	/// Transport failure (DNS, TCP, TLS, timeouts).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Pocket answered with a non-success status.
	#[error("API Error: {message}")]
	Api {
		/// HTTP status code returned by Pocket.
		status: u16,
		/// Content of the `X-Error` response header; empty when the header is absent.
		message: String,
		/// Content of the `X-Error-Code` response header, when supplied.
		code: Option<String>,
	},
	/// A successful response omitted a field the call depends on.
	#[error("Empty {field} in API response.")]
	MissingField {
		/// Form field that was absent or empty.
		field: &'static str,
	},
}
impl Error {
	/// Returns the HTTP status for API errors.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Api { status, .. } => Some(*status),
			_ => None,
		}
	}
}

/// Input validation failures raised before any I/O happens.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ValidationError {
	/// A required value was empty.
	#[error("{field} is empty.")]
	Empty {
		/// Human-readable name of the missing value.
		field: &'static str,
	},
}
impl ValidationError {
	pub(crate) fn require(field: &'static str, value: &str) -> Result<(), Self> {
		if value.is_empty() { Err(Self::Empty { field }) } else { Ok(()) }
	}
}

/// Configuration failures raised while building a client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// A configured URL cannot be parsed.
	#[error("The {name} URL is invalid.")]
	InvalidUrl {
		/// Which URL failed validation.
		name: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// A configured URL uses a scheme other than `http` or `https`.
	#[error("The {name} URL must use http or https: {url}.")]
	UnsupportedScheme {
		/// Which URL failed validation.
		name: &'static str,
		/// URL that failed validation.
		url: String,
	},
	/// Request timeout must be positive.
	#[error("Request timeout must be greater than zero.")]
	ZeroTimeout,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, timeouts, deadlines).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the Pocket API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// The request did not complete within the allotted time.
	#[error("Request to the Pocket API timed out.")]
	Timeout {
		/// Transport-specific timeout error.
		#[source]
		source: BoxError,
	},
	/// The call context expired before the request was sent.
	#[error("Call deadline exceeded before the request was sent.")]
	DeadlineExceeded,
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		if e.is_timeout() { Self::Timeout { source: Box::new(e) } } else { Self::network(e) }
	}
}
