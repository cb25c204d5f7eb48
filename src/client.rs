//! temp-mail.org async client implementation.
//!
//! This module provides an async [`Client`] and [`ClientBuilder`] for the temp-mail.org
//! JSON API. Every endpoint is a plain `GET` of the form
//! `/request/<operation>[/id/<id>]/format/json`.
//!
//! Typical flow:
//! 1) Build a client (`Client::new` or `Client::builder().build()`)
//! 2) Generate an address via [`Client::generate_email`]
//! 3) Poll the inbox via [`Client::get_messages`]
//! 4) Fetch a message or its raw source via [`Client::get_message`] / [`Client::get_message_source`]
//! 5) Optionally remove it via [`Client::delete_message`]

use crate::mailbox::{DEFAULT_LOCAL_PART_LEN, mailbox_id, random_address};
use crate::{Error, Result};
use rand::Rng;
use reqwest::Url;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api4.temp-mail.org";
const USER_AGENT_VALUE: &str = concat!("tempmail-client/", env!("CARGO_PKG_VERSION"));

/// Async client for the temp-mail.org disposable email service.
///
/// The client holds configuration and a pooled `reqwest::Client`; it keeps no
/// per-mailbox state, so one instance can serve any number of addresses and
/// concurrent calls. Cloning is cheap.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    proxy: Option<String>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("http", &"<reqwest::Client>")
            .field("base_url", &self.base_url.as_str())
            .field("proxy", &self.proxy)
            .finish()
    }
}

impl Client {
    /// Create a [`ClientBuilder`] for configuring a new client.
    ///
    /// # Examples
    /// ```no_run
    /// # use std::time::Duration;
    /// # use tempmail_client::Client;
    /// # fn main() -> Result<(), tempmail_client::Error> {
    /// let client = Client::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client with default settings.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    /// The API root requests are sent to.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Get the proxy URL configured for this client (if any).
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// List the domain suffixes the service currently hands out.
    ///
    /// Each entry already starts with `@` (e.g. `@example.com`).
    ///
    /// # Examples
    /// ```no_run
    /// # use tempmail_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), tempmail_client::Error> {
    /// let client = Client::new()?;
    /// for domain in client.list_domains().await? {
    ///     println!("{domain}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_domains(&self) -> Result<Vec<String>> {
        self.fetch_json(&["request", "domains"]).await
    }

    /// Generate a random address with a 7-character local part.
    ///
    /// Fetches the domain list, then builds the address locally. The address is not
    /// registered anywhere; temp-mail.org accepts mail for any local part.
    ///
    /// # Errors
    /// Returns [`Error::NoDomains`] if the service returns an empty domain list, or any
    /// error from [`Client::list_domains`].
    pub async fn generate_email(&self) -> Result<String> {
        self.generate_email_with_len(DEFAULT_LOCAL_PART_LEN).await
    }

    /// Generate a random address with a local part of `len` characters.
    pub async fn generate_email_with_len(&self, len: usize) -> Result<String> {
        let domains = self.list_domains().await?;
        random_address(&mut rand::rng(), &domains, len)
    }

    /// Generate a random address using the supplied random source.
    ///
    /// Useful for reproducible addresses in tests.
    ///
    /// # Examples
    /// ```no_run
    /// # use rand::SeedableRng;
    /// # use tempmail_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), tempmail_client::Error> {
    /// let client = Client::new()?;
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    /// let email = client.generate_email_with(&mut rng, 10).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn generate_email_with<R>(&self, rng: &mut R, len: usize) -> Result<String>
    where
        R: Rng + ?Sized,
    {
        let domains = self.list_domains().await?;
        random_address(rng, &domains, len)
    }

    /// Retrieve all messages delivered to `email`.
    ///
    /// The mailbox is looked up by the MD5 digest of the address (see
    /// [`mailbox_id`](crate::mailbox_id)). The service answers with an array of
    /// messages, or with a single object (typically an `error` entry) when the
    /// mailbox is empty; either is returned unchanged.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] without sending a request if `email` is empty
    /// or whitespace-only.
    ///
    /// # Examples
    /// ```no_run
    /// # use tempmail_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), tempmail_client::Error> {
    /// let client = Client::new()?;
    /// let email = client.generate_email().await?;
    /// let messages = client.get_messages(&email).await?;
    /// println!("{messages:#}");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_messages(&self, email: &str) -> Result<Value> {
        let email = require(email, "email")?;
        let id = mailbox_id(email);
        self.fetch_json(&["request", "mail", "id", id.as_str()]).await
    }

    /// Fetch a single message by its identifier.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] without sending a request if `mail_id` is empty
    /// or whitespace-only.
    pub async fn get_message(&self, mail_id: &str) -> Result<Value> {
        let mail_id = require(mail_id, "mail_id")?;
        self.fetch_json(&["request", "one_mail", "id", mail_id]).await
    }

    /// Fetch the raw source of a message.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] without sending a request if `mail_id` is empty
    /// or whitespace-only.
    pub async fn get_message_source(&self, mail_id: &str) -> Result<Value> {
        let mail_id = require(mail_id, "mail_id")?;
        self.fetch_json(&["request", "source", "id", mail_id]).await
    }

    /// Delete a message.
    ///
    /// Resolves with the status object reported by the service (e.g.
    /// `{"result": "success"}`); a failed deletion that still returns 2xx is not
    /// turned into an error.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] without sending a request if `mail_id` is empty
    /// or whitespace-only.
    pub async fn delete_message(&self, mail_id: &str) -> Result<Value> {
        let mail_id = require(mail_id, "mail_id")?;
        self.fetch_json(&["request", "delete", "id", mail_id]).await
    }

    /// GET an endpoint and decode the body as JSON.
    async fn fetch_json<T>(&self, segments: &[&str]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.fetch_text(segments).await?;
        let parsed = serde_json::from_str::<T>(&body)?;
        Ok(parsed)
    }

    /// GET an endpoint and return the body as text.
    ///
    /// Non-2xx responses become [`Error::Status`]; the body is not read in that case.
    #[instrument(level = "debug", skip(self))]
    async fn fetch_text(&self, segments: &[&str]) -> Result<String> {
        let url = self.endpoint(segments);
        debug!(%url, "GET");

        let response = self.http.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "temp-mail request failed");
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "response received");
        Ok(body)
    }

    /// Build `<base>/<segments...>/format/json`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `build` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(segments)
                .extend(["format", "json"]);
        }
        url
    }
}

/// Reject empty or whitespace-only required arguments.
fn require<'a>(value: &'a str, name: &'static str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(Error::InvalidArgument { name });
    }
    Ok(value)
}

/// Builder for configuring a temp-mail client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    proxy: Option<String>,
    danger_accept_invalid_certs: bool,
    user_agent: String,
    timeout: Option<Duration>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - Base URL `https://api4.temp-mail.org`
    /// - No proxy
    /// - `danger_accept_invalid_certs = false`
    /// - User agent `tempmail-client/<version>`
    /// - No request timeout
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            proxy: None,
            danger_accept_invalid_certs: false,
            user_agent: USER_AGENT_VALUE.to_string(),
            timeout: None,
        }
    }

    /// Override the API root (e.g. to point at a mock server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a proxy URL (e.g. `http://127.0.0.1:8080` or `socks5://127.0.0.1:9050`).
    ///
    /// This uses reqwest's proxy support for all requests.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Control whether to accept invalid TLS certificates (default: false).
    pub fn danger_accept_invalid_certs(mut self, value: bool) -> Self {
        self.danger_accept_invalid_certs = value;
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Apply a total timeout to every request.
    ///
    /// Requests that exceed it fail with [`Error::Network`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    ///
    /// No request is sent; the service needs no session bootstrap. Redirects are
    /// not followed, so a 3xx answer surfaces as [`Error::Status`].
    ///
    /// # Errors
    /// Returns [`Error::InvalidBaseUrl`] if the base URL does not parse or cannot
    /// carry a path, and [`Error::Network`] if the proxy or user agent is rejected
    /// by reqwest.
    pub fn build(self) -> Result<Client> {
        let base_url = Url::parse(&self.base_url).map_err(|e| Error::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl {
                url: self.base_url,
                reason: "URL cannot carry a path".to_string(),
            });
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .danger_accept_invalid_certs(self.danger_accept_invalid_certs)
            .user_agent(self.user_agent)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::none());

        if let Some(proxy_url) = &self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build()?;
        debug!(base_url = %base_url, proxy = ?self.proxy, "temp-mail client ready");

        Ok(Client {
            http,
            base_url,
            proxy: self.proxy,
        })
    }
}
