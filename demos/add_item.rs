//! Saves a URL to Pocket with an existing access token.
//!
//! Run with `cargo run --example add_item -- <url> [tags...]` after exporting
//! `POCKET_CONSUMER_KEY` and `POCKET_ACCESS_TOKEN`.

// std
use std::{env, time::Duration};
// crates.io
use color_eyre::{
	Result,
	eyre::{WrapErr, eyre},
};
// self
use pocket_client::{AddInput, CallContext, Client};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let consumer_key =
		env::var("POCKET_CONSUMER_KEY").wrap_err("Set POCKET_CONSUMER_KEY to your app key.")?;
	let access_token = env::var("POCKET_ACCESS_TOKEN")
		.wrap_err("Set POCKET_ACCESS_TOKEN; run the `authorize` example to obtain one.")?;
	let mut args = env::args().skip(1);
	let url = args.next().ok_or_else(|| eyre!("Usage: add_item <url> [tags...]"))?;
	let client = Client::new(consumer_key)?;
	let input = AddInput::new(url.as_str(), access_token).with_tags(args);

	client.add(&CallContext::with_timeout(Duration::from_secs(3)), input).await?;

	println!("Saved {url}.");

	Ok(())
}
