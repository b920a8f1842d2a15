//! Credential models exchanged during the Pocket authorization handshake.

pub mod secret;

pub use secret::*;
