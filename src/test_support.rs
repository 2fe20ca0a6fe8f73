//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use async_trait::async_trait;

use crate::api::{
    ArticleDetail, Category, Gateway, GatewayError, NewsArticle, Offer, Participant, Product,
};

/// In-memory backend. Unknown ids answer like a 404.
#[derive(Default)]
pub struct FakeGateway {
    participants: Vec<Participant>,
    categories: Vec<Category>,
    offers: Vec<Offer>,
    articles: Vec<(NewsArticle, ArticleDetail)>,
    products: HashMap<i64, Vec<Product>>,
    participant_delays: HashMap<i64, Duration>,
    failing_participants: HashSet<i64>,
    collections_fail: bool,
}

fn not_found(resource: &str, id: i64) -> GatewayError {
    GatewayError::Status {
        status: 404,
        url: format!("fake://api/{resource}/{id}"),
    }
}

fn collection_down() -> GatewayError {
    GatewayError::Network("connection refused".to_string())
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_participant(mut self, participant: Participant) -> Self {
        self.participants.push(participant);
        self
    }

    pub fn with_category(mut self, id: i64, name: &str) -> Self {
        self.categories.push(Category {
            id,
            name: name.to_string(),
        });
        self
    }

    pub fn with_offers(mut self, offers: Vec<Offer>) -> Self {
        self.offers.extend(offers);
        self
    }

    pub fn with_article(mut self, article: NewsArticle, text: &str) -> Self {
        let detail = ArticleDetail {
            image: None,
            article_text: text.to_string(),
        };
        self.articles.push((article, detail));
        self
    }

    pub fn with_products(mut self, company_id: i64, products: Vec<Product>) -> Self {
        self.products.insert(company_id, products);
        self
    }

    /// Delays the single-participant lookup for `id`.
    pub fn with_participant_delay(mut self, id: i64, delay: Duration) -> Self {
        self.participant_delays.insert(id, delay);
        self
    }

    /// The single-participant lookup for `id` returns a record without an id.
    pub fn with_failing_participant(mut self, id: i64) -> Self {
        self.failing_participants.insert(id);
        self
    }

    /// Every collection endpoint behaves as if the backend were down.
    pub fn failing_collections(mut self) -> Self {
        self.collections_fail = true;
        self
    }

    fn collection<T: Clone>(&self, items: &[T]) -> Result<Vec<T>, GatewayError> {
        if self.collections_fail {
            Err(collection_down())
        } else {
            Ok(items.to_vec())
        }
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn participants(&self) -> Result<Vec<Participant>, GatewayError> {
        self.collection(&self.participants)
    }

    async fn participant(&self, id: i64) -> Result<Participant, GatewayError> {
        if let Some(delay) = self.participant_delays.get(&id) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing_participants.contains(&id) {
            return Err(GatewayError::Invalid(format!("participants {id}: record has no id")));
        }
        self.participants
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| not_found("participants", id))
    }

    async fn categories(&self) -> Result<Vec<Category>, GatewayError> {
        self.collection(&self.categories)
    }

    async fn category(&self, id: i64) -> Result<Category, GatewayError> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| not_found("category", id))
    }

    async fn offers(&self) -> Result<Vec<Offer>, GatewayError> {
        self.collection(&self.offers)
    }

    async fn offer(&self, id: i64) -> Result<Offer, GatewayError> {
        self.offers
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| not_found("offers", id))
    }

    async fn articles(&self) -> Result<Vec<NewsArticle>, GatewayError> {
        let list: Vec<NewsArticle> = self.articles.iter().map(|(a, _)| a.clone()).collect();
        self.collection(&list)
    }

    async fn article(&self, id: i64) -> Result<ArticleDetail, GatewayError> {
        self.articles
            .iter()
            .find(|(a, _)| a.id == id)
            .map(|(_, detail)| detail.clone())
            .ok_or_else(|| not_found("articles", id))
    }

    async fn company_products(&self, company_id: i64) -> Result<Vec<Product>, GatewayError> {
        let products = self.products.get(&company_id).cloned().unwrap_or_default();
        self.collection(&products)
    }

    async fn product(&self, id: i64) -> Result<Product, GatewayError> {
        self.products
            .values()
            .flatten()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| not_found("products", id))
    }
}

pub fn participant(id: i64, name: &str, category: Option<i64>) -> Participant {
    Participant {
        id,
        name: name.to_string(),
        category,
        logo: None,
        description: None,
        phone_number: None,
        email: None,
    }
}

pub fn offer(id: i64, company: Option<i64>) -> Offer {
    Offer {
        id,
        name: format!("Offer {id}"),
        description: None,
        company,
    }
}

pub fn product(id: i64, name: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        image: None,
        description: None,
    }
}

pub fn article(id: i64, headline: &str) -> NewsArticle {
    NewsArticle {
        id,
        headline: headline.to_string(),
        created_at: None,
    }
}

/// Creates a test App pointed at a dummy media origin.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(crate::Screen::Participants, "https://expo.test".to_string())
}
