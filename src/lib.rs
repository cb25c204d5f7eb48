//! # temp-mail Client
//! Asynchronous wrapper around the temp-mail.org disposable email JSON API. It provides
//! simple methods to generate addresses, list domains, and read or delete the messages
//! sent to those addresses, using [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust developers who need throwaway addresses in integration tests, demos, or
//! automation scripts without running mail infrastructure. Configure with
//! [`ClientBuilder`], generate an address, poll for messages, then delete them when done.
//!
//! ## Runtime requirements
//! Async-only. Run it inside a Tokio (v1) runtime. HTTP calls use `reqwest`, and request
//! logging goes through `tracing` (install a subscriber to see it).
//!
//! ## Out of scope
//! This is not a general-purpose mail client, an SMTP sender, or a durable mailbox. It
//! only proxies the temp-mail.org service, and message payloads are returned as
//! untyped [`serde_json::Value`]s exactly as the service sends them.
//!
//! ## Errors
//! Empty arguments become [`Error::InvalidArgument`] before any request is sent.
//! Non-2xx statuses become [`Error::Status`]. Transport failures become
//! [`Error::Network`], and bodies that are not valid JSON become [`Error::Parse`].
//!
//! ## Example
//! ```no_run
//! use tempmail_client::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tempmail_client::Error> {
//!     let client = Client::new()?;
//!     let email = client.generate_email().await?;
//!     println!("Generated: {}", email);
//!
//!     let messages = client.get_messages(&email).await?;
//!     if let Some(list) = messages.as_array() {
//!         for msg in list {
//!             println!("From: {}, Subject: {}", msg["mail_from"], msg["mail_subject"]);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod mailbox;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL};
pub use error::Error;
pub use mailbox::{DEFAULT_LOCAL_PART_LEN, mailbox_id, random_address};

/// Result type alias for temp-mail operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
