//! TeePublic Seller Bridge: declarative HTTP adapter for the seller API.
//!
//! A Rust library that exposes three TeePublic seller resources (orders,
//! designs, and payouts) through `list`, `get`, and `sync` operations. It
//! translates per-item, UI-style parameters into an HTTP call and maps the
//! response back into a generic output record, one per input item, in input
//! order.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │   Input batch    │  one ItemConfig per item
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────────────────────────────────┐
//! │        teepublic-bridge (this crate)         │
//! │  ┌───────────────┐     ┌──────────────────┐  │
//! │  │ Request       │─────│ Executor /       │  │
//! │  │ Builder       │     │ Unwrapper        │  │
//! │  └───────────────┘     └──────────────────┘  │
//! └────────┬─────────────────────────────────────┘
//!          │ HTTPS (optional proxy, session cookie)
//! ┌────────▼─────────┐
//! │  TeePublic API   │  /api/seller/{orders,designs,payouts}
//! └──────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use teepublic_bridge::{
//!     SellerBridge,
//!     credentials::SellerCredentials,
//!     executor::FailurePolicy,
//!     request::{ItemConfig, Operation, Resource},
//! };
//!
//! # async fn example() -> teepublic_bridge::error::Result<()> {
//! let credentials = SellerCredentials::new(
//!     "https://www.teepublic.com",
//!     Some("_teepublic_session=abc123".to_owned()),
//!     None,
//! );
//! let bridge = SellerBridge::new(credentials);
//!
//! let mut get_design = ItemConfig::new(Resource::Designs, Operation::Get);
//! get_design.identifier = Some("design-42".to_owned());
//!
//! let items = vec![ItemConfig::new(Resource::Orders, Operation::List), get_design];
//!
//! let records = bridge.execute_batch(&items, FailurePolicy::ContinueOnFailure).await?;
//! for record in &records {
//!     println!("[{}] {}", record.index, record.json);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`credentials`]: batch-level credentials (base URL, session cookie, proxy)
//! - [`request`]: per-item configuration and request construction
//! - [`transport`]: HTTP execution over reqwest
//! - [`executor`]: sequential batch loop with per-item failure isolation
//! - [`error`]: error types shared across the crate
//!
//! # Behavior Notes
//!
//! - Items are processed strictly sequentially; output order matches input
//!   order by construction.
//! - The session cookie is an opaque pass-through string. This crate never
//!   implements the login flow; capture the cookie from an authenticated
//!   browser session.
//! - There are no retries, no rate limiting, and no pagination logic beyond
//!   passing query parameters through.

pub mod credentials;
pub mod error;
pub mod executor;
pub mod request;
pub mod transport;

pub use credentials::SellerCredentials;
pub use error::{BridgeError, Result};
pub use executor::{FailurePolicy, OutputRecord, SellerBridge};
pub use request::{ItemConfig, Operation, RequestDescriptor, Resource, build_request};
