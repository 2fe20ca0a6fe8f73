//! # Resolver
//!
//! Composes [`Gateway`](crate::api::Gateway) calls into the shapes each screen
//! shows. Failures never abort a screen: lists fall back to empty, nested
//! lookups to a placeholder, and detail loads report an error the screen
//! state can ignore.
//!
//! ```text
//!   Action ──► update() ──► Effect ──► resolver::load_*() ──► Gateway
//!                 ▲                            │
//!                 └──────── Action::*Loaded ◄──┘
//! ```

pub mod fanout;
pub mod news;
pub mod offers;
pub mod participants;

pub use fanout::fetch_indexed;
pub use news::{load_article_detail, load_articles};
pub use offers::{load_offer_details, load_offers_with_companies};
pub use participants::{
    load_company_products, load_participant_details, load_participants_and_categories,
    load_product_detail,
};
