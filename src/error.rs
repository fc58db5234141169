//! Error types for the TeePublic seller bridge.
//!
//! This module defines all error types that can occur while building or
//! executing seller API requests. All errors implement the standard
//! [`std::error::Error`] trait via [`thiserror::Error`].
//!
//! # Error Categories
//!
//! - **Configuration errors** ([`BridgeError::Configuration`]): invalid or
//!   missing credentials
//! - **Validation errors** ([`BridgeError::MissingIdentifier`],
//!   [`BridgeError::InvalidPayload`], [`BridgeError::InvalidProxy`]): per-item
//!   parameter validation failures
//! - **Network errors** ([`BridgeError::Http`], [`BridgeError::Transport`]):
//!   HTTP communication failures
//!
//! # Examples
//!
//! ```
//! use teepublic_bridge::error::{BridgeError, Result};
//!
//! fn require_base_url(base_url: &str) -> Result<&str> {
//!     if base_url.is_empty() {
//!         return Err(BridgeError::Configuration("base URL is required".to_owned()));
//!     }
//!     Ok(base_url)
//! }
//! ```

use thiserror::Error;

/// Result type alias for bridge operations.
///
/// This is a convenience type that uses [`BridgeError`] as the error type.
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Errors that can occur in the TeePublic seller bridge.
///
/// All variants include contextual information about what went wrong.
/// The error messages are designed to be user-facing and actionable.
///
/// This type implements `#[must_use]` to ensure errors are not silently ignored.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Credentials are missing or invalid.
    ///
    /// Raised before any request is built, most commonly when the base URL
    /// is empty.
    #[error("Invalid credentials: {0}")]
    Configuration(String),

    /// A required resource identifier is absent.
    ///
    /// `get` and `sync` operations address a single record and need the
    /// resource-specific identifier (`orderId`, `designId`, or `payoutId`)
    /// unless a custom endpoint overrides the path entirely.
    #[error("Missing identifier: {0}")]
    MissingIdentifier(String),

    /// The `sync` payload text is not valid JSON.
    ///
    /// Structured payloads are passed through unchanged; only textual
    /// payloads are parsed and can fail here.
    #[error("Invalid JSON payload: {0}")]
    InvalidPayload(String),

    /// The proxy URL could not be parsed.
    ///
    /// Proxy URLs use the form `scheme://[user[:pass]@]host[:port]`. A
    /// malformed value fails the item rather than silently skipping the
    /// proxy.
    #[error("Invalid proxy URL: {0}")]
    InvalidProxy(String),

    /// The upstream API returned an unusable response.
    ///
    /// Covers non-2xx status codes and response bodies that are not valid
    /// JSON.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// HTTP request failed.
    ///
    /// This error wraps [`reqwest::Error`] and occurs when network
    /// communication with the marketplace fails: timeouts, connection
    /// refusals, DNS or TLS errors.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}
