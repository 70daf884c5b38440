use crate::application::client::Client;
use crate::application::interfaces::resource::{ResourceOperations, ResourceService};
use crate::constants::VERSION_LABEL;
use crate::error::AppError;
use crate::model::envelope::Body;
use crate::model::http::HttpClient;
use crate::presentation::resource::{ApiResource, Resource};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the resource service over the shared transport
pub struct ResourceServiceImpl<R> {
    client: Arc<HttpClient>,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceServiceImpl<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: ApiResource> ResourceServiceImpl<R> {
    /// Creates a new instance of the service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    /// Gets the transport used by the service
    pub fn http_client(&self) -> Arc<HttpClient> {
        self.client.clone()
    }
}

#[async_trait]
impl<R: ApiResource> ResourceService<R> for ResourceServiceImpl<R> {
    async fn create(&self, resource: &R) -> Result<R, AppError> {
        info!("Creating resource {} at {}", resource.id(), R::PATH);

        let body = serde_json::to_vec(&Body::new(resource))?;
        let url = self.client.collection_url(R::PATH);
        let request = self.client.request(Method::POST, &url, Some(body))?;

        let created: R = self.client.send(request, StatusCode::CREATED).await?;
        debug!("Resource created: {}", created.id());
        Ok(created)
    }

    async fn list(&self, page_number: &str, page_size: &str) -> Result<Vec<R>, AppError> {
        let pagination = self.client.build_pagination(page_number, page_size);
        let mut url = self.client.collection_url(R::PATH);
        if !pagination.is_empty() {
            url.push('?');
            url.push_str(&pagination);
        }
        info!("Listing resources at {}", url);

        let request = self.client.request(Method::GET, &url, None)?;
        let resources: Vec<R> = self.client.send(request, StatusCode::OK).await?;

        debug!("Resources obtained: {}", resources.len());
        Ok(resources)
    }

    async fn list_by_id(&self, id: &str) -> Result<R, AppError> {
        let url = self.client.resource_url(R::PATH, id);
        info!("Fetching resource {}", url);

        let request = self.client.request(Method::GET, &url, None)?;
        self.client.send(request, StatusCode::OK).await
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let url = format!(
            "{}?{}{}",
            self.client.resource_url(R::PATH, id),
            VERSION_LABEL,
            self.client.config().record_version()
        );
        info!("Deleting resource {}", url);

        let request = self.client.request(Method::DELETE, &url, None)?;
        self.client
            .send_no_content(request, StatusCode::NO_CONTENT)
            .await?;

        debug!("Resource {} deleted", id);
        Ok(())
    }
}

#[async_trait]
impl<R: ApiResource> ResourceOperations for R {
    async fn create(&self, client: &Client) -> Result<Resource, AppError> {
        let created = ResourceService::create(&client.resources::<R>(), self).await?;
        Ok(created.into())
    }

    async fn list(
        &self,
        client: &Client,
        page_number: &str,
        page_size: &str,
    ) -> Result<Vec<Resource>, AppError> {
        let resources = ResourceService::list(&client.resources::<R>(), page_number, page_size)
            .await?;
        Ok(resources.into_iter().map(Into::into).collect())
    }

    async fn list_by_id(&self, client: &Client) -> Result<Resource, AppError> {
        let resource = ResourceService::list_by_id(&client.resources::<R>(), self.id()).await?;
        Ok(resource.into())
    }

    async fn delete(&self, client: &Client) -> Result<(), AppError> {
        ResourceService::delete(&client.resources::<R>(), self.id()).await
    }
}
