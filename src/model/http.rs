/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! HTTP transport for the Fake API
//!
//! [`HttpClient`] owns the underlying `reqwest` client (and therefore its
//! connection pool). It is built once by the composition root and shared
//! through an `Arc`; every operation builds a request with
//! [`HttpClient::create_request`] and sends it with [`HttpClient::send`] or
//! [`HttpClient::send_no_content`], which validate the status code against the
//! one the operation expects.

use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::{AppError, Cause, RequestError, ResponseError};
use crate::model::envelope::{Body, ErrorResponse};
use crate::model::pagination::build_pagination;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, Request, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error};

const APPLICATION_JSON: &str = "application/json";

/// Transport client shared by every resource operation
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates the transport with the timeout taken from the configuration
    ///
    /// # Arguments
    /// * `config` - Shared, read-only library configuration
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Transport ready to use
    /// * `Err(AppError)` - If the underlying client cannot be built
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.client_timeout())
            .build()?;
        debug!(
            "HTTP client created for {} with timeout {:?}",
            config.base_url(),
            config.client_timeout()
        );
        Ok(Self {
            http_client,
            config,
        })
    }

    /// Configuration the transport was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// URL of a resource collection, e.g. `{base_url}/accounts`
    pub fn collection_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    /// URL of a single resource, e.g. `{base_url}/accounts/{id}`
    pub fn resource_url(&self, path: &str, id: &str) -> String {
        format!("{}{}/{}", self.config.base_url(), path, id)
    }

    /// Builds the pagination query fragment using the configured default page size
    ///
    /// See [`build_pagination`] for the exact rules.
    pub fn build_pagination(&self, page_number: &str, page_size: &str) -> String {
        build_pagination(page_number, page_size, self.config.default_page_size())
    }

    /// Creates a request object
    ///
    /// # Arguments
    /// * `method` - HTTP verb, e.g. `"POST"`
    /// * `url` - Absolute request URL
    /// * `body` - Optional JSON body; sets `Content-Type: application/json` when present
    ///
    /// # Returns
    /// * `Ok(Request)` - The request ready to be sent
    /// * `Err(AppError::Request)` - If the method or the URL are not valid
    pub fn create_request(
        &self,
        method: &str,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Request, AppError> {
        let fail = |cause: Cause| RequestError {
            message: format!("fail to create {method} request object: {cause}"),
            cause: Some(cause),
        };

        let verb = Method::from_bytes(method.as_bytes()).map_err(|e| fail(Box::new(e)))?;
        self.request(verb, url, body)
    }

    /// Creates a request object for an already typed HTTP verb
    ///
    /// # Returns
    /// * `Err(AppError::Request)` - If the URL is not valid
    pub fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Request, AppError> {
        let url = Url::parse(url).map_err(|e| RequestError {
            message: format!("fail to create {method} request object: {e}"),
            cause: Some(Box::new(e) as Cause),
        })?;

        let mut request = Request::new(method, url);
        if let Some(bytes) = body {
            request
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
            *request.body_mut() = Some(bytes.into());
        }
        Ok(request)
    }

    /// Sends a request and decodes the `{"data": ...}` envelope of the response
    ///
    /// # Arguments
    /// * `request` - Request built with [`HttpClient::create_request`]
    /// * `expected` - Status code the operation expects
    ///
    /// # Returns
    /// * `Ok(T)` - The decoded payload
    /// * `Err(AppError::Http)` - Network failure, unmodified
    /// * `Err(AppError::Response)` - The status code differs from `expected`
    /// * `Err(AppError::Json)` - The successful body could not be decoded
    pub async fn send<T: DeserializeOwned>(
        &self,
        request: Request,
        expected: StatusCode,
    ) -> Result<T, AppError> {
        let response = self.execute(request, expected).await?;
        let bytes = response.bytes().await?;
        let body: Body<T> = serde_json::from_slice(&bytes)?;
        Ok(body.into_inner())
    }

    /// Sends a request whose successful response carries no body (e.g. delete)
    ///
    /// Same status contract as [`HttpClient::send`], but no decode is attempted.
    pub async fn send_no_content(
        &self,
        request: Request,
        expected: StatusCode,
    ) -> Result<(), AppError> {
        self.execute(request, expected).await?;
        Ok(())
    }

    async fn execute(
        &self,
        mut request: Request,
        expected: StatusCode,
    ) -> Result<Response, AppError> {
        request
            .headers_mut()
            .insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));

        debug!("{} {}", request.method(), request.url());
        let response = self.http_client.execute(request).await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status == expected {
            return Ok(response);
        }
        Err(handle_unexpected_status(response, expected).await)
    }
}

/// Turns a response with an unexpected status code into a [`ResponseError`]
///
/// Only the first JSON value of the body is decoded as [`ErrorResponse`]; a
/// `null` body yields an empty message. When decoding fails the decode error
/// becomes both the message detail and the cause.
async fn handle_unexpected_status(response: Response, expected: StatusCode) -> AppError {
    let status = response.status();
    let decoded = match response.bytes().await {
        Ok(bytes) => decode_error_response(&bytes),
        Err(e) => Err(Box::new(e) as Cause),
    };

    let error = match decoded {
        Ok(error_response) => {
            ResponseError::new(expected.as_u16(), status.as_u16(), error_response.message)
        }
        Err(cause) => ResponseError {
            expected: expected.as_u16(),
            status_code: status.as_u16(),
            message: format!("fail to decode error response body with error message: {cause}"),
            cause: Some(cause),
        },
    };
    error!(
        "Request failed with status {} (expected {}): {}",
        status, expected, error.message
    );
    AppError::Response(error)
}

fn decode_error_response(bytes: &[u8]) -> Result<ErrorResponse, Cause> {
    let mut values =
        serde_json::Deserializer::from_slice(bytes).into_iter::<Option<ErrorResponse>>();
    match values.next() {
        Some(Ok(error_response)) => Ok(error_response.unwrap_or_default()),
        Some(Err(e)) => Err(Box::new(e) as Cause),
        None => Err("EOF while parsing the error response body".into()),
    }
}
