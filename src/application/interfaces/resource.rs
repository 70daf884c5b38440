use crate::application::client::Client;
use crate::error::AppError;
use crate::presentation::resource::{ApiResource, Resource};
use async_trait::async_trait;

/// Interface for the CRUD operations of a resource collection
#[async_trait]
pub trait ResourceService<R: ApiResource>: Send + Sync {
    /// Creates a resource
    ///
    /// Sends `POST {base}/{collection}` with the resource wrapped in the
    /// envelope and expects `201 Created`.
    ///
    /// # Returns
    /// * The resource as stored by the server, with its injected fields
    async fn create(&self, resource: &R) -> Result<R, AppError>;

    /// Lists resources, optionally paginated
    ///
    /// # Arguments
    /// * `page_number` - Page to fetch; empty lists every record
    /// * `page_size` - Page size; empty uses the configured default
    ///
    /// # Returns
    /// * The records of the page; an empty vector past the last page
    async fn list(&self, page_number: &str, page_size: &str) -> Result<Vec<R>, AppError>;

    /// Fetches one resource by id, expecting `200 OK`
    async fn list_by_id(&self, id: &str) -> Result<R, AppError>;

    /// Deletes one resource by id at the configured record version, expecting `204 No Content`
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

/// Remote operations available on every resource value
///
/// Results are returned as the polymorphic [`Resource`] so callers can handle
/// every resource type uniformly. The operations use the value's own id.
#[async_trait]
pub trait ResourceOperations: ApiResource {
    /// Creates this resource on the server
    async fn create(&self, client: &Client) -> Result<Resource, AppError>;

    /// Lists resources of this type
    async fn list(
        &self,
        client: &Client,
        page_number: &str,
        page_size: &str,
    ) -> Result<Vec<Resource>, AppError>;

    /// Fetches the server copy of this resource
    async fn list_by_id(&self, client: &Client) -> Result<Resource, AppError>;

    /// Deletes this resource from the server
    async fn delete(&self, client: &Client) -> Result<(), AppError>;
}
