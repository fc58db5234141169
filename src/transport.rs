//! HTTP transport over reqwest.
//!
//! Executes a [`RequestDescriptor`] and returns the response body as JSON.
//! The default client is a shared pooled singleton; when a descriptor
//! carries proxy routing, a proxied client is built for that request.
//! No retries, no rate limiting, no timeout overrides beyond the client
//! defaults.

use std::{sync::LazyLock, time::Duration};

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    error::{BridgeError, Result},
    request::{ProxyConfig, RequestDescriptor},
};

/// Default HTTP client with connection pooling enabled.
///
/// Using a singleton avoids recreating the client per transport instance,
/// preserving connection pooling benefits across all default transports.
static DEFAULT_HTTP_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .pool_max_idle_per_host(10)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to create default HTTP client")
});

/// HTTP transport for seller API requests.
///
/// # Examples
///
/// ```rust,no_run
/// use teepublic_bridge::{
///     credentials::SellerCredentials,
///     request::{ItemConfig, Operation, Resource, build_request},
///     transport::HttpTransport,
/// };
///
/// # async fn example() -> teepublic_bridge::error::Result<()> {
/// let transport = HttpTransport::new();
/// let credentials = SellerCredentials::default();
/// let item = ItemConfig::new(Resource::Orders, Operation::List);
///
/// let descriptor = build_request(&credentials, &item)?;
/// let body = transport.send(&descriptor).await?;
/// println!("{body}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    /// Creates a transport backed by the shared pooled client.
    ///
    /// Default configuration:
    /// - Pool max idle per host: 10
    /// - Timeout: 30 seconds
    /// - Connect timeout: 10 seconds
    #[must_use]
    pub fn new() -> Self {
        Self { client: DEFAULT_HTTP_CLIENT.clone() }
    }

    /// Executes the request and parses the response body as JSON.
    ///
    /// An empty body yields JSON `null`; the caller decides how to shape it.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::Http`] on network failure
    /// - [`BridgeError::Transport`] on a non-2xx status or a non-JSON body
    /// - [`BridgeError::InvalidProxy`] if the client rejects the proxy
    #[instrument(skip(self, descriptor), fields(method = %descriptor.method, url = %descriptor.url))]
    pub async fn send(&self, descriptor: &RequestDescriptor) -> Result<Value> {
        let client = match &descriptor.proxy {
            Some(proxy) => proxied_client(proxy)?,
            None => self.client.clone(),
        };

        let mut request = client.request(descriptor.method.clone(), descriptor.url.as_str());

        for (name, value) in &descriptor.headers {
            request = request.header(name, value);
        }
        if !descriptor.query.is_empty() {
            request = request.query(&descriptor.query);
        }
        if let Some(body) = &descriptor.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(BridgeError::Transport(format!(
                "upstream returned status {}",
                status.as_u16()
            )));
        }

        let bytes = response.bytes().await.map_err(BridgeError::Http)?;
        debug!(bytes = bytes.len(), status = status.as_u16(), "response received");

        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| BridgeError::Transport(format!("invalid JSON response: {e}")))
    }
}

/// Builds a client routed through the resolved proxy.
fn proxied_client(proxy: &ProxyConfig) -> Result<Client> {
    let mut routing = reqwest::Proxy::all(proxy.endpoint())
        .map_err(|e| BridgeError::InvalidProxy(format!("{}: {e}", proxy.endpoint())))?;

    if let Some(auth) = &proxy.auth {
        routing = routing.basic_auth(&auth.username, &auth.password);
    }

    Client::builder()
        .proxy(routing)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .build()
        .map_err(BridgeError::Http)
}
