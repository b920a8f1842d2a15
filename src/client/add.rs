//! Saving items to a user's Pocket list.

// self
use crate::{
	_prelude::*, client::Client, config::Endpoint, context::CallContext, error::ValidationError,
};

/// Item to save on behalf of an authorized user.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AddInput {
	/// Page to save. Required.
	pub url: String,
	/// Title to use when Pocket cannot parse one from the page.
	pub title: Option<String>,
	/// Tags attached to the item.
	pub tags: Vec<String>,
	/// User access token obtained from [`Client::authorize`]. Required.
	pub access_token: String,
}
impl AddInput {
	/// Creates an input with the two required fields.
	pub fn new(url: impl Into<String>, access_token: impl Into<String>) -> Self {
		Self { url: url.into(), access_token: access_token.into(), ..Default::default() }
	}

	/// Sets the item title.
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());

		self
	}

	/// Replaces the item tags.
	pub fn with_tags<I, S>(mut self, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.tags = tags.into_iter().map(Into::into).collect();

		self
	}

	fn validate(&self) -> Result<(), ValidationError> {
		ValidationError::require("URL", &self.url)?;
		ValidationError::require("Access token", &self.access_token)?;

		Ok(())
	}

	fn to_request<'a>(&'a self, consumer_key: &'a str) -> AddRequest<'a> {
		AddRequest {
			url: &self.url,
			title: self.title.as_deref().filter(|title| !title.is_empty()),
			tags: (!self.tags.is_empty()).then(|| self.tags.join(",")),
			access_token: &self.access_token,
			consumer_key,
		}
	}
}
impl Debug for AddInput {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AddInput")
			.field("url", &self.url)
			.field("title", &self.title)
			.field("tags", &self.tags)
			.field("access_token", &"<redacted>")
			.finish()
	}
}

#[derive(Debug, Serialize)]
struct AddRequest<'a> {
	url: &'a str,
	#[serde(skip_serializing_if = "Option::is_none")]
	title: Option<&'a str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	tags: Option<String>,
	access_token: &'a str,
	consumer_key: &'a str,
}

impl Client {
	/// Saves an item to the user's list. The response body is discarded.
	pub async fn add(&self, ctx: &CallContext, input: AddInput) -> Result<()> {
		const ENDPOINT: Endpoint = Endpoint::Add;

		self.observe(ENDPOINT, "add", async move {
			input.validate()?;

			let body = input.to_request(self.consumer_key.expose());

			self.dispatch(ctx, ENDPOINT, &body).await?;

			Ok(())
		})
		.await
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn validate_requires_url_and_access_token() {
		assert_eq!(
			AddInput::new("", "token").validate(),
			Err(ValidationError::Empty { field: "URL" })
		);
		assert_eq!(
			AddInput::new("https://example.com", "").validate(),
			Err(ValidationError::Empty { field: "Access token" })
		);
		assert!(AddInput::new("https://example.com", "token").validate().is_ok());
	}

	#[test]
	fn tags_are_comma_joined() {
		let input =
			AddInput::new("https://example.com", "token").with_title("Example").with_tags([
				"qwe", "rty", "123",
			]);
		let body =
			serde_json::to_value(input.to_request("key")).expect("Add payload should encode.");

		assert_eq!(
			body,
			json!({
				"url": "https://example.com",
				"title": "Example",
				"tags": "qwe,rty,123",
				"access_token": "token",
				"consumer_key": "key",
			})
		);
	}

	#[test]
	fn empty_optional_fields_are_omitted() {
		let input = AddInput::new("https://example.com", "token").with_title("");
		let body =
			serde_json::to_value(input.to_request("key")).expect("Add payload should encode.");

		assert_eq!(
			body,
			json!({ "url": "https://example.com", "access_token": "token", "consumer_key": "key" })
		);
	}

	#[test]
	fn debug_redacts_access_token() {
		let input = AddInput::new("https://example.com", "very-secret");

		assert!(!format!("{input:?}").contains("very-secret"));
	}
}
