//! Core building blocks for Battle.net Community API clients.
//!
//! This crate provides the pieces every resource accessor is built from:
//!
//! - [`Locale`]: the locale allow-list and the regional host each locale maps to
//! - [`Session`]: account key, locale and HTTP client shared by accessors
//! - [`Endpoint`]: immutable description of one API resource and the part of
//!   its JSON document to decode
//! - [`Cached`] / [`CachedMap`]: per-instance cache slots that are filled on
//!   first use and replaced only on a successful fetch
//! - [`ApiError`]: the error taxonomy shared by every accessor
//!
//! ## Locales
//!
//! | Locale | Host |
//! |--------|------|
//! | `en_US` | `us.api.battle.net` |
//! | `en_GB` | `eu.api.battle.net` |
//! | `ko_KR` | `kr.api.battle.net` |
//!
//! Any other locale, including the retired `zh_TW`, is rejected with
//! [`ApiError::UnsupportedLocale`] when the session is created.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bnet_core::{Cached, Endpoint, Session};
//! use serde_json::Value;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let session = Session::new("my-api-key", "en_GB")?;
//! let mut realms: Cached<Value> = Cached::new();
//!
//! let endpoint = Endpoint::new(["wow", "realm", "status"]);
//! // First call fetches, later calls are served from the slot
//! let status = session.load(&mut realms, &endpoint).await?;
//! println!("{status}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! Requests are logged through `tracing` at `debug` level with their path
//! and locale. The account key is never logged.

pub mod cache;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod locale;
pub mod ratio;
pub mod session;
pub mod transport;

pub use cache::{Cached, CachedMap, SlotState};
pub use config::ClientConfig;
pub use endpoint::{Endpoint, Shape};
pub use error::{ApiError, Result};
pub use locale::Locale;
pub use session::Session;

/// Arbitrary JSON document for endpoints exposed without a typed schema.
pub type Document = serde_json::Value;
