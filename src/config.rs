//! Immutable client configuration: API endpoints, authorization page, and request timeout.
//!
//! [`ClientConfig::default`] targets the public Pocket API. Use [`ClientConfig::builder`] to
//! point the client at a proxy or a local mock server; every URL is validated and resolved once
//! at build time so calls never re-parse configuration.

pub mod builder;

pub use builder::*;

// self
use crate::_prelude::*;

/// Base URL of the Pocket v3 API.
pub const DEFAULT_BASE_URL: &str = "https://getpocket.com/v3";
/// Page users visit to approve a request token.
pub const DEFAULT_AUTHORIZATION_URL: &str = "https://getpocket.com/auth/authorize";
/// Overall timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Pocket API endpoints reached by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
	/// Obtains a request token.
	RequestToken,
	/// Exchanges an authorized request token for an access token.
	Authorize,
	/// Saves an item to the user's list.
	Add,
}
impl Endpoint {
	/// Path relative to the API base URL.
	pub const fn path(self) -> &'static str {
		match self {
			Endpoint::RequestToken => "/oauth/request",
			Endpoint::Authorize => "/oauth/authorize",
			Endpoint::Add => "/add",
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Endpoint::RequestToken => "request_token",
			Endpoint::Authorize => "authorize",
			Endpoint::Add => "add",
		}
	}
}
impl Display for Endpoint {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Fully resolved endpoint URLs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiEndpoints {
	/// `POST /oauth/request`.
	pub request_token: Url,
	/// `POST /oauth/authorize`.
	pub authorize: Url,
	/// `POST /add`.
	pub add: Url,
}
impl ApiEndpoints {
	/// Returns the URL for `endpoint`.
	pub fn url(&self, endpoint: Endpoint) -> &Url {
		match endpoint {
			Endpoint::RequestToken => &self.request_token,
			Endpoint::Authorize => &self.authorize,
			Endpoint::Add => &self.add,
		}
	}
}

/// Validated configuration owned by a [`Client`](crate::Client).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
	/// API base URL every endpoint path is appended to.
	pub base_url: Url,
	/// Resolved endpoint URLs derived from `base_url`.
	pub endpoints: ApiEndpoints,
	/// Authorization page the user is sent to.
	pub authorization_url: Url,
	/// Upper bound for every request.
	pub timeout: Duration,
}
impl ClientConfig {
	/// Creates a builder seeded with the public Pocket defaults.
	pub fn builder() -> ClientConfigBuilder {
		ClientConfigBuilder::default()
	}
}
impl Default for ClientConfig {
	fn default() -> Self {
		Self::builder().build().unwrap_or_else(|_| unreachable!("built-in defaults are valid"))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn default_config_targets_pocket() {
		let config = ClientConfig::default();

		assert_eq!(
			config.endpoints.request_token.as_str(),
			"https://getpocket.com/v3/oauth/request"
		);
		assert_eq!(config.endpoints.authorize.as_str(), "https://getpocket.com/v3/oauth/authorize");
		assert_eq!(config.endpoints.url(Endpoint::Add).as_str(), "https://getpocket.com/v3/add");
		assert_eq!(config.authorization_url.as_str(), DEFAULT_AUTHORIZATION_URL);
		assert_eq!(config.timeout, Duration::from_secs(5));
	}

	#[test]
	fn endpoint_labels_are_stable() {
		assert_eq!(Endpoint::RequestToken.to_string(), "request_token");
		assert_eq!(Endpoint::Authorize.path(), "/oauth/authorize");
		assert_eq!(Endpoint::Add.as_str(), "add");
	}
}
