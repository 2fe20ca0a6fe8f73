//! HTTP implementation of the [`Gateway`].
//!
//! Every operation is a single `GET {base_url}/api/{resource}[/{id}]`.
//! The `try_*` methods return typed errors; `fetch_collection` and
//! `fetch_by_id` apply the swallow-and-default policy on top of them.

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::gateway::{Gateway, GatewayError, or_empty, or_none};
use super::types::{ArticleDetail, Category, NewsArticle, Offer, Participant, Product};

/// Backend resources, named after their URL segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Participants,
    Category,
    Offers,
    Articles,
    CompanyProducts,
    Products,
}

impl Resource {
    pub fn path(self) -> &'static str {
        match self {
            Resource::Participants => "participants",
            Resource::Category => "category",
            Resource::Offers => "offers",
            Resource::Articles => "articles",
            Resource::CompanyProducts => "company-products",
            Resource::Products => "products",
        }
    }

    /// Whether a single record of this resource carries its own `id`.
    /// Article details come back as body-only documents.
    fn has_record_id(self) -> bool {
        !matches!(self, Resource::Articles)
    }
}

pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// `base_url` is the backend origin, e.g. `https://expo.example.com`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, resource: Resource, id: Option<i64>) -> String {
        match id {
            Some(id) => format!("{}/api/{}/{}", self.base_url, resource.path(), id),
            None => format!("{}/api/{}", self.base_url, resource.path()),
        }
    }

    async fn get_json(&self, url: &str) -> Result<Value, GatewayError> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| GatewayError::Parse(e.to_string()))
    }

    async fn get_collection<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, GatewayError> {
        let value = self.get_json(url).await?;
        if !value.is_array() {
            return Err(GatewayError::Invalid(format!("expected a list from {url}")));
        }
        serde_json::from_value(value).map_err(|e| GatewayError::Parse(e.to_string()))
    }

    pub async fn try_fetch_collection<T: DeserializeOwned>(
        &self,
        resource: Resource,
    ) -> Result<Vec<T>, GatewayError> {
        self.get_collection(&self.endpoint(resource, None)).await
    }

    /// Collection keyed by a parent id, e.g. `company-products/{company_id}`.
    pub async fn try_fetch_scoped_collection<T: DeserializeOwned>(
        &self,
        resource: Resource,
        scope_id: i64,
    ) -> Result<Vec<T>, GatewayError> {
        self.get_collection(&self.endpoint(resource, Some(scope_id))).await
    }

    /// Fetches one record. The body must be a JSON object, and for resources
    /// whose records carry ids it must have one.
    pub async fn try_fetch_by_id<T: DeserializeOwned>(
        &self,
        resource: Resource,
        id: i64,
    ) -> Result<T, GatewayError> {
        let url = self.endpoint(resource, Some(id));
        let value = self.get_json(&url).await?;
        match value.as_object() {
            None => {
                return Err(GatewayError::Invalid(format!(
                    "{} {id}: expected an object, got {value}",
                    resource.path()
                )));
            }
            Some(fields) if resource.has_record_id() && !fields.contains_key("id") => {
                return Err(GatewayError::Invalid(format!(
                    "{} {id}: record has no id",
                    resource.path()
                )));
            }
            Some(_) => {}
        }
        serde_json::from_value(value).map_err(|e| GatewayError::Parse(e.to_string()))
    }

    /// Fetches a collection; any failure is logged and yields an empty list.
    pub async fn fetch_collection<T: DeserializeOwned>(&self, resource: Resource) -> Vec<T> {
        or_empty(self.try_fetch_collection(resource).await, resource.path())
    }

    /// Fetches a single record; any failure is logged and yields `None`.
    pub async fn fetch_by_id<T: DeserializeOwned>(&self, resource: Resource, id: i64) -> Option<T> {
        or_none(
            self.try_fetch_by_id(resource, id).await,
            &format!("{} {id}", resource.path()),
        )
    }
}

#[async_trait]
impl Gateway for ApiClient {
    async fn participants(&self) -> Result<Vec<Participant>, GatewayError> {
        self.try_fetch_collection(Resource::Participants).await
    }

    async fn participant(&self, id: i64) -> Result<Participant, GatewayError> {
        self.try_fetch_by_id(Resource::Participants, id).await
    }

    async fn categories(&self) -> Result<Vec<Category>, GatewayError> {
        self.try_fetch_collection(Resource::Category).await
    }

    async fn category(&self, id: i64) -> Result<Category, GatewayError> {
        self.try_fetch_by_id(Resource::Category, id).await
    }

    async fn offers(&self) -> Result<Vec<Offer>, GatewayError> {
        self.try_fetch_collection(Resource::Offers).await
    }

    async fn offer(&self, id: i64) -> Result<Offer, GatewayError> {
        self.try_fetch_by_id(Resource::Offers, id).await
    }

    async fn articles(&self) -> Result<Vec<NewsArticle>, GatewayError> {
        self.try_fetch_collection(Resource::Articles).await
    }

    async fn article(&self, id: i64) -> Result<ArticleDetail, GatewayError> {
        self.try_fetch_by_id(Resource::Articles, id).await
    }

    async fn company_products(&self, company_id: i64) -> Result<Vec<Product>, GatewayError> {
        self.try_fetch_scoped_collection(Resource::CompanyProducts, company_id)
            .await
    }

    async fn product(&self, id: i64) -> Result<Product, GatewayError> {
        self.try_fetch_by_id(Resource::Products, id).await
    }
}
