//! Async Pocket API client covering the request-token → authorize → access-token handshake and
//! saving items to a user's list.
//!
//! ```no_run
//! # async fn run() -> pocket_client::error::Result<()> {
//! use pocket_client::{AddInput, CallContext, Client};
//!
//! let client = Client::new("1234-abcd1234abcd1234abcd1234")?;
//! let ctx = CallContext::background();
//! let request_token = client.get_request_token(&ctx, "https://app.example.com/done").await?;
//! let url = client.authorization_url(request_token.expose(), "https://app.example.com/done")?;
//!
//! println!("Send your user to {url}.");
//!
//! // Once the user returns to the redirect URL:
//! let auth = client.authorize(&ctx, request_token.expose()).await?;
//!
//! client
//! 	.add(&ctx, AddInput::new("https://www.rust-lang.org", auth.access_token.expose()))
//! 	.await?;
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod http;
pub mod obs;

pub use client::{AddInput, AuthorizeResponse, Client};
pub use config::{ClientConfig, Endpoint};
pub use context::CallContext;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		sync::Arc,
		time::{Duration, Instant},
	};

	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::Serialize;
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
