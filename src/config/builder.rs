//! Validating builder for [`ClientConfig`].

// self
use crate::{
	_prelude::*,
	config::{
		ApiEndpoints, ClientConfig, DEFAULT_AUTHORIZATION_URL, DEFAULT_BASE_URL, DEFAULT_TIMEOUT,
		Endpoint,
	},
	error::ConfigError,
};

/// Builder for [`ClientConfig`] values.
#[derive(Clone, Debug)]
pub struct ClientConfigBuilder {
	/// API base URL; endpoint paths are appended verbatim.
	pub base_url: String,
	/// Authorization page URL.
	pub authorization_url: String,
	/// Upper bound for every request.
	pub timeout: Duration,
}
impl ClientConfigBuilder {
	/// Overrides the API base URL.
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.base_url = url.into();

		self
	}

	/// Overrides the authorization page URL.
	pub fn authorization_url(mut self, url: impl Into<String>) -> Self {
		self.authorization_url = url.into();

		self
	}

	/// Overrides the request timeout.
	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ClientConfig, ConfigError> {
		if self.timeout.is_zero() {
			return Err(ConfigError::ZeroTimeout);
		}

		let base_url = parse_url("base", &self.base_url)?;
		let authorization_url = parse_url("authorization", &self.authorization_url)?;
		let endpoints = ApiEndpoints {
			request_token: resolve(&base_url, Endpoint::RequestToken)?,
			authorize: resolve(&base_url, Endpoint::Authorize)?,
			add: resolve(&base_url, Endpoint::Add)?,
		};

		Ok(ClientConfig { base_url, endpoints, authorization_url, timeout: self.timeout })
	}
}
impl Default for ClientConfigBuilder {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.into(),
			authorization_url: DEFAULT_AUTHORIZATION_URL.into(),
			timeout: DEFAULT_TIMEOUT,
		}
	}
}

fn parse_url(name: &'static str, raw: &str) -> Result<Url, ConfigError> {
	let url = Url::parse(raw).map_err(|source| ConfigError::InvalidUrl { name, source })?;

	match url.scheme() {
		"http" | "https" => Ok(url),
		_ => Err(ConfigError::UnsupportedScheme { name, url: url.to_string() }),
	}
}

// Paths are appended rather than joined so a base path such as `/v3` survives.
fn resolve(base: &Url, endpoint: Endpoint) -> Result<Url, ConfigError> {
	let joined = format!("{}{}", base.as_str().trim_end_matches('/'), endpoint.path());

	Url::parse(&joined).map_err(|source| ConfigError::InvalidUrl { name: "base", source })
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn base_path_is_preserved() {
		let config = ClientConfig::builder()
			.base_url("http://127.0.0.1:8080/v3/")
			.build()
			.expect("Local base URL should be accepted.");

		assert_eq!(
			config.endpoints.request_token.as_str(),
			"http://127.0.0.1:8080/v3/oauth/request"
		);
		assert_eq!(config.endpoints.add.path(), "/v3/add");
	}

	#[test]
	fn rejects_invalid_settings() {
		assert!(matches!(
			ClientConfig::builder().base_url("not a url").build(),
			Err(ConfigError::InvalidUrl { name: "base", .. })
		));
		assert!(matches!(
			ClientConfig::builder().authorization_url("ftp://getpocket.com/auth").build(),
			Err(ConfigError::UnsupportedScheme { name: "authorization", .. })
		));
		assert!(matches!(
			ClientConfig::builder().timeout(Duration::ZERO).build(),
			Err(ConfigError::ZeroTimeout)
		));
	}

	#[test]
	fn timeout_override_is_kept() {
		let config = ClientConfig::builder()
			.timeout(Duration::from_millis(250))
			.build()
			.expect("Positive timeout should be accepted.");

		assert_eq!(config.timeout, Duration::from_millis(250));
	}
}
