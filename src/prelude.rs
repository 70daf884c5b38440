/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Fake API Client Prelude
//!
//! This module provides a convenient way to import the most commonly used types and traits
//! from the library. By importing this prelude, you get access to everything needed to
//! create, list, fetch and delete accounts, synchronously or through promises.
//!
//! ## Usage
//!
//! ```rust
//! use fake_api_client::prelude::*;
//!
//! let config = Config::default().with_base_url("http://localhost:8080/v1");
//! assert_eq!(config.default_page_size(), "2");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the client
pub use crate::config::Config;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types of the library
pub use crate::error::{AppError, ConfigError, RequestError, ResponseError};

// ============================================================================
// CLIENT, SERVICES AND PROMISES
// ============================================================================

/// Composition root
pub use crate::application::client::Client;

/// Resource service traits
pub use crate::application::interfaces::resource::{ResourceOperations, ResourceService};

/// Resource service implementations
pub use crate::application::services::{AccountServiceImpl, ResourceServiceImpl};

/// Deferred results
pub use crate::application::promise::{Outcome, Promise, ResourcePromise};

// ============================================================================
// TRANSPORT
// ============================================================================

/// HTTP transport
pub use crate::model::http::HttpClient;

/// Wire envelopes
pub use crate::model::envelope::{Body, ErrorResponse};

/// Pagination helper
pub use crate::model::pagination::build_pagination;

// ============================================================================
// RESOURCE MODELS
// ============================================================================

/// Account resource
pub use crate::presentation::account::{Account, Attributes};

/// Polymorphic resource
pub use crate::presentation::resource::{ApiResource, Resource};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};

/// Re-export reqwest status codes for error inspection
pub use reqwest::StatusCode;
