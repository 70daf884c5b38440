/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types for the Fake API client.
//!
//! Two kinds of failure are classified by the library itself:
//! - [`RequestError`]: the outbound request could not be built
//! - [`ResponseError`]: the server answered with an unexpected status code
//!
//! Transport failures and JSON (de)serialization failures are carried through
//! unmodified in [`AppError::Http`] and [`AppError::Json`].

use std::error::Error as StdError;
use thiserror::Error;

/// Boxed upstream cause attached to the library's own error kinds
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Local failure to construct a well-formed outbound request
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RequestError {
    /// Human readable description of the failure
    pub message: String,
    /// Underlying error, when there is one
    #[source]
    pub cause: Option<Cause>,
}

impl RequestError {
    /// Creates a request error without an upstream cause
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a request error wrapping the error that caused it
    pub fn caused_by<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }
}

/// The server responded with a status code other than the expected one
#[derive(Debug, Error)]
#[error(
    "request error with different status code, expected: {expected} but returned: {status_code} with error message: {message}"
)]
pub struct ResponseError {
    /// Status code the operation expected
    pub expected: u16,
    /// Status code the server actually returned
    pub status_code: u16,
    /// The server's `error_message`, or the local decode failure detail
    pub message: String,
    /// Decode failure of the error body, when there is one
    #[source]
    pub cause: Option<Cause>,
}

impl ResponseError {
    /// Creates a response error carrying the message decoded from the server
    pub fn new(expected: u16, status_code: u16, message: impl Into<String>) -> Self {
        Self {
            expected,
            status_code,
            message: message.into(),
            cause: None,
        }
    }

    /// Attaches the error that prevented decoding the server's error body
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.cause = Some(Box::new(cause));
        self
    }
}

/// Failure while loading the library configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable is present but cannot be parsed
    #[error("fail to convert: {key} with value: {value} in to {target}: {reason}")]
    InvalidValue {
        /// Environment variable name
        key: String,
        /// Raw value found in the environment
        value: String,
        /// Type the value was supposed to convert into
        target: &'static str,
        /// Parser message
        reason: String,
    },
}

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// The outbound request could not be built
    #[error(transparent)]
    Request(#[from] RequestError),
    /// The server answered with an unexpected status code
    #[error(transparent)]
    Response(#[from] ResponseError),
    /// Network level failure (DNS, connection, timeout)
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// JSON encode or decode failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// A background operation ended without producing a result
    #[error("operation interrupted: {0}")]
    Interrupted(String),
}

impl AppError {
    /// Status code returned by the server, when the error is a [`ResponseError`]
    pub fn status_code(&self) -> Option<u16> {
        self.as_response().map(|e| e.status_code)
    }

    /// Borrows the inner [`ResponseError`], if any
    pub fn as_response(&self) -> Option<&ResponseError> {
        match self {
            AppError::Response(e) => Some(e),
            _ => None,
        }
    }

    /// Borrows the inner [`RequestError`], if any
    pub fn as_request(&self) -> Option<&RequestError> {
        match self {
            AppError::Request(e) => Some(e),
            _ => None,
        }
    }
}
