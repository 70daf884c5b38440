/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Composition root of the library
//!
//! A [`Client`] is built once at startup and cloned wherever it is needed; the
//! clones share the same configuration and the same HTTP transport.
//!
//! # Example
//! ```ignore
//! use fake_api_client::prelude::*;
//!
//! let client = Client::from_env()?;
//! let account = Account::new(id, organisation_id, attributes);
//!
//! let created = client.accounts().create(&account).await?;
//! let page = client.accounts().list("0", "").await?;
//! ```

use crate::application::config::Config;
use crate::application::promise::ResourcePromise;
use crate::application::services::{AccountServiceImpl, ResourceServiceImpl};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::presentation::resource::{ApiResource, Resource};
use std::future::Future;
use std::sync::Arc;
use tracing::info;

/// Entry point to the Fake API
#[derive(Debug, Clone)]
pub struct Client {
    config: Arc<Config>,
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client from an already validated configuration
    ///
    /// # Arguments
    /// * `config` - Configuration containing the API settings
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use
    /// * `Err(AppError)` - If the HTTP transport cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http_client = Arc::new(HttpClient::new(config.clone())?);
        info!("Client created for {}", config.base_url());
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Loads the configuration from the environment and creates the client
    ///
    /// # Returns
    /// * `Err(AppError::Config)` - If a configuration value is invalid
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::from_env()?)
    }

    /// Configuration the client was created with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shared HTTP transport
    pub fn http(&self) -> Arc<HttpClient> {
        self.http_client.clone()
    }

    /// Service for the accounts collection
    pub fn accounts(&self) -> AccountServiceImpl {
        self.resources()
    }

    /// Service for any resource collection
    pub fn resources<R: ApiResource>(&self) -> ResourceServiceImpl<R> {
        ResourceServiceImpl::new(self.http_client.clone())
    }

    /// Starts an operation in the background and returns its promise
    ///
    /// The closure receives a clone of this client, so the operation can own
    /// everything it needs.
    ///
    /// # Example
    /// ```ignore
    /// let promise = client.promise(move |client| async move { account.create(&client).await });
    /// promise.then(|resource| println!("{}", resource.id()));
    /// ```
    pub fn promise<F, Fut>(&self, operation: F) -> ResourcePromise
    where
        F: FnOnce(Client) -> Fut,
        Fut: Future<Output = Result<Resource, AppError>> + Send + 'static,
    {
        ResourcePromise::new(operation(self.clone()))
    }
}
