//! Redacted credential wrappers keeping consumer keys and tokens out of logs.
//!
//! Every wrapper rejects empty values on construction, so holding one proves the value was
//! supplied. Use `expose` only at the wire boundary.

// self
use crate::{_prelude::*, error::ValidationError};

macro_rules! def_secret {
	($name:ident, $doc:literal, $field:literal) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, Hash)]
		pub struct $name(String);
		impl $name {
			/// Wraps a non-empty credential value.
			pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
				let value = value.into();

				ValidationError::require($field, &value)?;

				Ok(Self(value))
			}

			/// Returns the inner value. Callers must avoid logging this string.
			pub fn expose(&self) -> &str {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				self.expose()
			}
		}
		impl TryFrom<String> for $name {
			type Error = ValidationError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				Self::new(value)
			}
		}
		impl TryFrom<&str> for $name {
			type Error = ValidationError;

			fn try_from(value: &str) -> Result<Self, Self::Error> {
				Self::new(value)
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.debug_tuple(stringify!($name)).field(&"<redacted>").finish()
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str("<redacted>")
			}
		}
	};
}

def_secret! { ConsumerKey, "Application consumer key issued by Pocket.", "Consumer key" }
def_secret! { RequestToken, "Temporary token awaiting user authorization.", "Request token" }
def_secret! { AccessToken, "Permanent per-user access token.", "Access token" }

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn secrets_reject_empty_values() {
		assert_eq!(
			ConsumerKey::new("").expect_err("Empty consumer key must be rejected."),
			ValidationError::Empty { field: "Consumer key" }
		);
		assert!(RequestToken::try_from("").is_err());
		assert!(AccessToken::try_from(String::new()).is_err());

		let key = ConsumerKey::new("1234-abcd").expect("Non-empty consumer key should be valid.");

		assert_eq!(key.expose(), "1234-abcd");
		assert_eq!(key.as_ref(), "1234-abcd");
	}

	#[test]
	fn secret_formatters_redact() {
		let token =
			AccessToken::new("super-secret").expect("Access token fixture should be valid.");

		assert_eq!(format!("{token:?}"), "AccessToken(\"<redacted>\")");
		assert_eq!(format!("{token}"), "<redacted>");
	}
}
