//! Request token → user authorization → access token handshake.
//!
//! 1. [`Client::get_request_token`] registers the redirect URL and returns a temporary token.
//! 2. [`Client::authorization_url`] builds the page the user must visit to approve the app.
//! 3. [`Client::authorize`] trades the approved request token for a permanent access token.

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, RequestToken},
	client::Client,
	config::Endpoint,
	context::CallContext,
	error::ValidationError,
};

#[derive(Debug, Serialize)]
struct RequestTokenRequest<'a> {
	consumer_key: &'a str,
	redirect_uri: &'a str,
}

#[derive(Debug, Serialize)]
struct AuthorizeRequest<'a> {
	consumer_key: &'a str,
	code: &'a str,
}

/// Result of a successful access token exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizeResponse {
	/// Permanent access token for the authorizing user.
	pub access_token: AccessToken,
	/// Pocket username; may be empty.
	pub username: String,
}

impl Client {
	/// Obtains a request token bound to `redirect_url`.
	pub async fn get_request_token(
		&self,
		ctx: &CallContext,
		redirect_url: &str,
	) -> Result<RequestToken> {
		const ENDPOINT: Endpoint = Endpoint::RequestToken;

		self.observe(ENDPOINT, "get_request_token", async move {
			ValidationError::require("Redirect URL", redirect_url)?;

			let body = RequestTokenRequest {
				consumer_key: self.consumer_key.expose(),
				redirect_uri: redirect_url,
			};
			let values = self.dispatch(ctx, ENDPOINT, &body).await?;
			let code = values.get_non_empty("code").ok_or(Error::MissingField { field: "code" })?;

			Ok(RequestToken::new(code)?)
		})
		.await
	}

	/// Formats the authorization page URL for a request token.
	///
	/// Both values are substituted verbatim; callers pass an already usable redirect URL.
	pub fn authorization_url(&self, request_token: &str, redirect_url: &str) -> Result<String> {
		ValidationError::require("Request token", request_token)?;
		ValidationError::require("Redirect URL", redirect_url)?;

		Ok(format!(
			"{}?request_token={request_token}&redirect_uri={redirect_url}",
			self.config.authorization_url
		))
	}

	/// Exchanges an approved request token for an access token.
	pub async fn authorize(
		&self,
		ctx: &CallContext,
		request_token: &str,
	) -> Result<AuthorizeResponse> {
		const ENDPOINT: Endpoint = Endpoint::Authorize;

		self.observe(ENDPOINT, "authorize", async move {
			ValidationError::require("Request token", request_token)?;

			let body =
				AuthorizeRequest { consumer_key: self.consumer_key.expose(), code: request_token };
			let values = self.dispatch(ctx, ENDPOINT, &body).await?;
			let access_token = values
				.get_non_empty("access_token")
				.ok_or(Error::MissingField { field: "access_token" })?;

			Ok(AuthorizeResponse {
				access_token: AccessToken::new(access_token)?,
				username: values.get("username").unwrap_or_default().to_owned(),
			})
		})
		.await
	}
}
