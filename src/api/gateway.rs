use std::fmt;

use async_trait::async_trait;
use log::warn;

use super::types::{ArticleDetail, Category, NewsArticle, Offer, Participant, Product};

/// Everything that can go wrong fetching from the backend.
///
/// Callers that only need "something or nothing" collapse these with
/// [`or_empty`] / [`or_none`]; the variants exist so failures stay testable.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// Transport-level failure (DNS, connection refused, body read).
    Network(String),
    /// Backend answered with a non-2xx status.
    Status { status: u16, url: String },
    /// Body was not the JSON shape we expected.
    Parse(String),
    /// Body parsed but is not a usable record (null, not an object, no id).
    Invalid(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Network(msg) => write!(f, "network error: {msg}"),
            GatewayError::Status { status, url } => write!(f, "HTTP {status} from {url}"),
            GatewayError::Parse(msg) => write!(f, "parse error: {msg}"),
            GatewayError::Invalid(msg) => write!(f, "invalid record: {msg}"),
        }
    }
}

impl std::error::Error for GatewayError {}

/// One typed method per backend endpoint.
///
/// `ApiClient` talks HTTP; tests plug in an in-memory fake.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// `GET /api/participants`
    async fn participants(&self) -> Result<Vec<Participant>, GatewayError>;
    /// `GET /api/participants/{id}`
    async fn participant(&self, id: i64) -> Result<Participant, GatewayError>;
    /// `GET /api/category`
    async fn categories(&self) -> Result<Vec<Category>, GatewayError>;
    /// `GET /api/category/{id}`
    async fn category(&self, id: i64) -> Result<Category, GatewayError>;
    /// `GET /api/offers`
    async fn offers(&self) -> Result<Vec<Offer>, GatewayError>;
    /// `GET /api/offers/{id}`
    async fn offer(&self, id: i64) -> Result<Offer, GatewayError>;
    /// `GET /api/articles`
    async fn articles(&self) -> Result<Vec<NewsArticle>, GatewayError>;
    /// `GET /api/articles/{id}`
    async fn article(&self, id: i64) -> Result<ArticleDetail, GatewayError>;
    /// `GET /api/company-products/{company_id}`
    async fn company_products(&self, company_id: i64) -> Result<Vec<Product>, GatewayError>;
    /// `GET /api/products/{id}`
    async fn product(&self, id: i64) -> Result<Product, GatewayError>;
}

/// Collection fallback: log the failure and carry on with nothing.
pub fn or_empty<T>(result: Result<Vec<T>, GatewayError>, what: &str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            warn!("Error fetching {what}: {e}");
            Vec::new()
        }
    }
}

/// Single-entity fallback: log the failure and return `None`.
pub fn or_none<T>(result: Result<T, GatewayError>, what: &str) -> Option<T> {
    match result {
        Ok(item) => Some(item),
        Err(e) => {
            warn!("Error fetching {what}: {e}");
            None
        }
    }
}
