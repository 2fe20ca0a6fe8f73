//! # Application State
//!
//! Core business state for the guide. Domain logic only; presentation
//! state (cursor positions, list widgets) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── screen: Screen                  // active tab
//! ├── media_url: String               // origin for logos / images
//! ├── status_message: String          // status bar text
//! ├── participants: ParticipantsScreen
//! │   ├── participants: ListSlot<Participant>
//! │   ├── categories: Vec<Category>   // read-only once loaded
//! │   ├── view / filter               // alphabetical | by category
//! │   ├── detail: DetailSlot<Participant>
//! │   ├── products: DetailSlot<CompanyProducts>
//! │   └── product_detail: DetailSlot<Product>
//! ├── offers: OffersScreen
//! │   ├── offers: ListSlot<EnrichedOffer>
//! │   └── detail: DetailSlot<OfferDetails>
//! └── news: NewsScreen
//!     ├── articles: ListSlot<NewsArticle>
//!     ├── selected: Option<NewsArticle>
//!     └── detail: DetailSlot<ArticleDetail>
//! ```
//!
//! Each screen owns its state; nothing is shared between screens.
//! State changes only happen through `update(app, action)` in action.rs.

use crate::Screen;
use crate::api::{
    ArticleDetail, Category, CompanyProducts, EnrichedOffer, NewsArticle, OfferDetails,
    Participant, Product,
};
use crate::core::listing::{self, CategoryFilter};
use crate::core::slot::{DetailSlot, ListSlot};

/// How the participants list is arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParticipantView {
    /// Filtered, then sorted by name.
    #[default]
    Alphabetical,
    /// Filtered, in the order the backend returned them.
    ByCategory,
}

impl ParticipantView {
    pub fn toggle(self) -> Self {
        match self {
            ParticipantView::Alphabetical => ParticipantView::ByCategory,
            ParticipantView::ByCategory => ParticipantView::Alphabetical,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ParticipantView::Alphabetical => "A-Z",
            ParticipantView::ByCategory => "By type",
        }
    }
}

#[derive(Debug, Default)]
pub struct ParticipantsScreen {
    pub participants: ListSlot<Participant>,
    pub categories: Vec<Category>,
    pub view: ParticipantView,
    pub filter: CategoryFilter,
    pub detail: DetailSlot<Participant>,
    pub products: DetailSlot<CompanyProducts>,
    pub product_detail: DetailSlot<Product>,
}

impl ParticipantsScreen {
    /// Rows as currently displayed. Recomputed from the loaded list every
    /// time; nothing is cached.
    pub fn visible(&self) -> Vec<&Participant> {
        let mut rows = listing::filter_by_category(self.participants.items(), self.filter);
        if self.view == ParticipantView::Alphabetical {
            listing::sort_by_name(&mut rows);
        }
        rows
    }

    pub fn category_name(&self, id: Option<i64>) -> &str {
        listing::category_name(&self.categories, id)
    }

    pub fn filter_label(&self) -> String {
        match self.filter {
            CategoryFilter::All => "All".to_string(),
            CategoryFilter::Category(id) => self.category_name(Some(id)).to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct OffersScreen {
    pub offers: ListSlot<EnrichedOffer>,
    pub detail: DetailSlot<OfferDetails>,
}

#[derive(Debug, Default)]
pub struct NewsScreen {
    pub articles: ListSlot<NewsArticle>,
    /// List-form article shown while its detail loads.
    pub selected: Option<NewsArticle>,
    pub detail: DetailSlot<ArticleDetail>,
}

pub struct App {
    pub screen: Screen,
    pub media_url: String,
    pub status_message: String,
    pub participants: ParticipantsScreen,
    pub offers: OffersScreen,
    pub news: NewsScreen,
}

impl App {
    pub fn new(screen: Screen, media_url: String) -> Self {
        Self {
            screen,
            media_url,
            status_message: String::from("Welcome to the Expo!"),
            participants: ParticipantsScreen::default(),
            offers: OffersScreen::default(),
            news: NewsScreen::default(),
        }
    }

    /// Whether the active screen is still waiting for its list.
    pub fn is_loading(&self) -> bool {
        match self.screen {
            Screen::Participants => self.participants.participants.is_loading(),
            Screen::Offers => self.offers.offers.is_loading(),
            Screen::News => self.news.articles.is_loading(),
        }
    }
}
