//! # Fake API Client
//!
//! Asynchronous client for the Fake API `accounts` resource.
//!
//! The library exposes:
//! - a [`Client`](application::client::Client) composition root owning one
//!   HTTP transport for the whole process
//! - generic CRUD services over any [`ApiResource`](presentation::resource::ApiResource)
//!   (`create`, `list`, `list_by_id`, `delete`)
//! - a [`Promise`](application::promise::Promise) to run an operation in the
//!   background and attach success or failure continuations
//! - status code based error classification through [`AppError`](error::AppError)
//!
//! ## Configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `BASE_API_URL` | `http://localhost:8080/v1` |
//! | `HTTP_CLIENT_REQ_TIME_OUT` | `1m` |
//! | `HTTP_RECORD_VERSION` | `0` |
//! | `HTTP_DEFAULT_PAGE_SIZE` | `2` |
//!
//! ## Example
//! ```ignore
//! use fake_api_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::from_env()?;
//!
//!     let accounts = client.accounts().list("", "").await?;
//!     for account in accounts {
//!         info!("{}", account);
//!     }
//!     Ok(())
//! }
//! ```

/// Application layer: client, configuration, services and promises
pub mod application;
/// Library constants
pub mod constants;
/// Error types
pub mod error;
/// Wire models and HTTP transport
pub mod model;
/// Prelude with the commonly used types
pub mod prelude;
/// Resource models
pub mod presentation;
/// Utilities
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
