pub mod client;
pub mod gateway;
pub mod types;

pub use client::{ApiClient, Resource};
pub use gateway::{Gateway, GatewayError, or_empty, or_none};
pub use types::{
    ArticleDetail, Category, CompanyProducts, EnrichedOffer, NewsArticle, NO_COMPANY, Offer,
    OfferDetails, Participant, Product, UNKNOWN_COMPANY, UNTITLED, media_url, or_untitled,
};
