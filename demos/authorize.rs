//! Walks through the Pocket authorization handshake: obtain a request token, send the user to the
//! authorization page, then exchange the approved token for an access token.
//!
//! Run with `POCKET_CONSUMER_KEY=<key> cargo run --example authorize`.

// std
use std::{env, io};
// crates.io
use color_eyre::{Result, eyre::WrapErr};
// self
use pocket_client::{CallContext, Client};

const REDIRECT_URL: &str = "http://localhost:8080/pocket/callback";

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let consumer_key =
		env::var("POCKET_CONSUMER_KEY").wrap_err("Set POCKET_CONSUMER_KEY to your app key.")?;
	let client = Client::new(consumer_key)?;
	let ctx = CallContext::background();
	let request_token = client.get_request_token(&ctx, REDIRECT_URL).await?;

	let authorize_url = client.authorization_url(request_token.expose(), REDIRECT_URL)?;

	println!("Open {authorize_url} and approve the app.");
	println!("Press Enter once Pocket redirects you.");

	io::stdin().read_line(&mut String::new())?;

	let auth = client.authorize(&ctx, request_token.expose()).await?;

	println!("Authorized as `{}`.", auth.username);
	println!("Access token: {}.", auth.access_token.expose());

	Ok(())
}
