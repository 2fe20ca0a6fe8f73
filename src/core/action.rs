//! # Actions
//!
//! Everything that can happen in the guide becomes an `Action`.
//! User opens the Offers tab? That's `Action::OpenScreen(Screen::Offers)`.
//! An offer's details arrive? That's `Action::OfferDetailsLoaded { .. }`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the adapter must run (usually a fetch). No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Detail loads carry the [`Ticket`] handed out when they started, so a
//! result that arrives after a newer selection (or a close) is dropped.

use log::{debug, info, warn};

use crate::Screen;
use crate::api::{
    ArticleDetail, Category, CompanyProducts, EnrichedOffer, GatewayError, NewsArticle,
    OfferDetails, Participant, Product,
};
use crate::core::listing::CategoryFilter;
use crate::core::slot::{Resolution, Ticket};
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    /// Tab became visible. Triggers its list load the first time.
    OpenScreen(Screen),
    Quit,

    // Participants
    ParticipantsLoaded {
        participants: Vec<Participant>,
        categories: Vec<Category>,
    },
    SelectParticipant(i64),
    ParticipantDetailsLoaded {
        ticket: Ticket,
        result: Result<Participant, GatewayError>,
    },
    CloseParticipantDetails,
    ToggleParticipantView,
    SetCategoryFilter(CategoryFilter),
    CycleCategoryFilter,
    ShowProducts(i64),
    ProductsLoaded {
        ticket: Ticket,
        company_id: i64,
        products: Vec<Product>,
    },
    CloseProducts,
    SelectProduct(i64),
    ProductDetailLoaded {
        ticket: Ticket,
        result: Result<Product, GatewayError>,
    },
    CloseProductDetail,

    // Offers
    OffersLoaded(Vec<EnrichedOffer>),
    SelectOffer(i64),
    OfferDetailsLoaded {
        ticket: Ticket,
        result: Result<OfferDetails, GatewayError>,
    },
    CloseOfferDetails,

    // News
    ArticlesLoaded(Vec<NewsArticle>),
    SelectArticle(i64),
    ArticleDetailLoaded {
        ticket: Ticket,
        result: Result<ArticleDetail, GatewayError>,
    },
    CloseArticle,
}

/// Work the adapter has to perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    LoadParticipants,
    LoadParticipantDetails { ticket: Ticket, id: i64 },
    LoadCompanyProducts { ticket: Ticket, company_id: i64 },
    LoadProductDetail { ticket: Ticket, id: i64 },
    LoadOffers,
    LoadOfferDetails { ticket: Ticket, id: i64 },
    LoadArticles,
    LoadArticleDetail { ticket: Ticket, id: i64 },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::OpenScreen(screen) => {
            app.screen = screen;
            open_screen(app, screen)
        }
        Action::Quit => Effect::Quit,

        Action::ParticipantsLoaded {
            participants,
            categories,
        } => {
            info!(
                "Participants ready: {} participants, {} categories",
                participants.len(),
                categories.len()
            );
            app.participants.participants.finish(participants);
            app.participants.categories = categories;
            Effect::None
        }
        Action::SelectParticipant(id) => {
            let ticket = app.participants.detail.begin();
            Effect::LoadParticipantDetails { ticket, id }
        }
        Action::ParticipantDetailsLoaded { ticket, result } => {
            let outcome = app.participants.detail.resolve(ticket, result);
            report(app, outcome, "participant details");
            Effect::None
        }
        Action::CloseParticipantDetails => {
            app.participants.detail.close();
            Effect::None
        }
        Action::ToggleParticipantView => {
            app.participants.view = app.participants.view.toggle();
            app.status_message = format!("View: {}", app.participants.view.label());
            Effect::None
        }
        Action::SetCategoryFilter(filter) => {
            app.participants.filter = filter;
            app.status_message = format!("Category: {}", app.participants.filter_label());
            Effect::None
        }
        Action::CycleCategoryFilter => {
            let next = app.participants.filter.next(&app.participants.categories);
            update(app, Action::SetCategoryFilter(next))
        }
        Action::ShowProducts(company_id) => {
            let ticket = app.participants.products.begin();
            Effect::LoadCompanyProducts { ticket, company_id }
        }
        Action::ProductsLoaded {
            ticket,
            company_id,
            products,
        } => {
            let outcome = app.participants.products.resolve(
                ticket,
                Ok(CompanyProducts {
                    company_id,
                    products,
                }),
            );
            report(app, outcome, "company products");
            Effect::None
        }
        Action::CloseProducts => {
            app.participants.product_detail.close();
            app.participants.products.close();
            Effect::None
        }
        Action::SelectProduct(id) => {
            let ticket = app.participants.product_detail.begin();
            Effect::LoadProductDetail { ticket, id }
        }
        Action::ProductDetailLoaded { ticket, result } => {
            let outcome = app.participants.product_detail.resolve(ticket, result);
            report(app, outcome, "product detail");
            Effect::None
        }
        Action::CloseProductDetail => {
            app.participants.product_detail.close();
            Effect::None
        }

        Action::OffersLoaded(offers) => {
            info!("Offers ready: {}", offers.len());
            app.offers.offers.finish(offers);
            Effect::None
        }
        Action::SelectOffer(id) => {
            let ticket = app.offers.detail.begin();
            Effect::LoadOfferDetails { ticket, id }
        }
        Action::OfferDetailsLoaded { ticket, result } => {
            let outcome = app.offers.detail.resolve(ticket, result);
            report(app, outcome, "offer details");
            Effect::None
        }
        Action::CloseOfferDetails => {
            app.offers.detail.close();
            Effect::None
        }

        Action::ArticlesLoaded(articles) => {
            info!("News ready: {} articles", articles.len());
            app.news.articles.finish(articles);
            Effect::None
        }
        Action::SelectArticle(id) => {
            let Some(article) = app.news.articles.items().iter().find(|a| a.id == id) else {
                warn!("Article {id} is not in the loaded list");
                return Effect::None;
            };
            // The headline switches immediately, so the old body must go.
            app.news.selected = Some(article.clone());
            app.news.detail.close();
            let ticket = app.news.detail.begin();
            Effect::LoadArticleDetail { ticket, id }
        }
        Action::ArticleDetailLoaded { ticket, result } => {
            let outcome = app.news.detail.resolve(ticket, result);
            report(app, outcome, "article details");
            Effect::None
        }
        Action::CloseArticle => {
            app.news.selected = None;
            app.news.detail.close();
            Effect::None
        }
    }
}

fn open_screen(app: &mut App, screen: Screen) -> Effect {
    let started = match screen {
        Screen::Participants => app.participants.participants.begin(),
        Screen::Offers => app.offers.offers.begin(),
        Screen::News => app.news.articles.begin(),
    };
    if !started {
        return Effect::None;
    }
    match screen {
        Screen::Participants => Effect::LoadParticipants,
        Screen::Offers => Effect::LoadOffers,
        Screen::News => Effect::LoadArticles,
    }
}

fn report(app: &mut App, outcome: Resolution, what: &str) {
    match outcome {
        Resolution::Applied => {}
        Resolution::Failed(e) => {
            warn!("Failed to load {what}: {e}");
            app.status_message = format!("Could not load {what}");
        }
        Resolution::Stale => debug!("Discarded superseded {what}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::slot::DetailPhase;
    use crate::core::state::ParticipantView;
    use crate::test_support::{article, offer, participant, test_app};

    #[test]
    fn test_open_screen_loads_once() {
        let mut app = test_app();
        assert_eq!(
            update(&mut app, Action::OpenScreen(Screen::Offers)),
            Effect::LoadOffers
        );
        assert!(app.is_loading());
        assert_eq!(
            update(&mut app, Action::OpenScreen(Screen::Offers)),
            Effect::None
        );
        update(&mut app, Action::OffersLoaded(vec![]));
        assert!(!app.is_loading());
        assert_eq!(
            update(&mut app, Action::OpenScreen(Screen::Offers)),
            Effect::None
        );
    }

    #[test]
    fn test_last_selection_wins() {
        let mut app = test_app();
        let Effect::LoadParticipantDetails { ticket: a, id: 1 } =
            update(&mut app, Action::SelectParticipant(1))
        else {
            panic!("expected a detail load");
        };
        let Effect::LoadParticipantDetails { ticket: b, id: 2 } =
            update(&mut app, Action::SelectParticipant(2))
        else {
            panic!("expected a detail load");
        };

        // B answers first, A afterwards.
        update(
            &mut app,
            Action::ParticipantDetailsLoaded {
                ticket: b,
                result: Ok(participant(2, "B", None)),
            },
        );
        update(
            &mut app,
            Action::ParticipantDetailsLoaded {
                ticket: a,
                result: Ok(participant(1, "A", None)),
            },
        );

        assert_eq!(app.participants.detail.shown().map(|p| p.id), Some(2));
    }

    #[test]
    fn test_invalid_participant_keeps_prior_detail() {
        let mut app = test_app();
        let Effect::LoadParticipantDetails { ticket, .. } =
            update(&mut app, Action::SelectParticipant(1))
        else {
            panic!("expected a detail load");
        };
        update(
            &mut app,
            Action::ParticipantDetailsLoaded {
                ticket,
                result: Ok(participant(1, "A", None)),
            },
        );

        let Effect::LoadParticipantDetails { ticket, .. } =
            update(&mut app, Action::SelectParticipant(2))
        else {
            panic!("expected a detail load");
        };
        update(
            &mut app,
            Action::ParticipantDetailsLoaded {
                ticket,
                result: Err(GatewayError::Invalid("record has no id".into())),
            },
        );

        assert_eq!(app.participants.detail.shown().map(|p| p.id), Some(1));
        assert_eq!(app.status_message, "Could not load participant details");
    }

    #[test]
    fn test_close_returns_to_no_selection_and_drops_late_result() {
        let mut app = test_app();
        let Effect::LoadOfferDetails { ticket, .. } = update(&mut app, Action::SelectOffer(1))
        else {
            panic!("expected a detail load");
        };
        update(&mut app, Action::CloseOfferDetails);
        update(
            &mut app,
            Action::OfferDetailsLoaded {
                ticket,
                result: Ok(OfferDetails {
                    offer: offer(1, None),
                    company: None,
                }),
            },
        );
        assert_eq!(app.offers.detail.phase(), DetailPhase::NoSelection);
    }

    #[test]
    fn test_select_article_shows_headline_while_loading() {
        let mut app = test_app();
        update(&mut app, Action::ArticlesLoaded(vec![article(4, "Opening")]));

        let effect = update(&mut app, Action::SelectArticle(4));
        assert!(matches!(effect, Effect::LoadArticleDetail { id: 4, .. }));
        assert_eq!(app.news.selected.as_ref().map(|a| a.id), Some(4));
        assert_eq!(app.news.detail.phase(), DetailPhase::Loading);
    }

    #[test]
    fn test_select_unknown_article_is_ignored() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::SelectArticle(9)), Effect::None);
        assert!(app.news.selected.is_none());
    }

    #[test]
    fn test_close_products_also_closes_product_detail() {
        let mut app = test_app();
        let Effect::LoadCompanyProducts { ticket, company_id } =
            update(&mut app, Action::ShowProducts(5))
        else {
            panic!("expected a products load");
        };
        update(
            &mut app,
            Action::ProductsLoaded {
                ticket,
                company_id,
                products: vec![],
            },
        );
        assert_eq!(app.participants.products.phase(), DetailPhase::Showing);

        update(&mut app, Action::SelectProduct(10));
        update(&mut app, Action::CloseProducts);
        assert_eq!(app.participants.products.phase(), DetailPhase::NoSelection);
        assert_eq!(
            app.participants.product_detail.phase(),
            DetailPhase::NoSelection
        );
    }

    #[test]
    fn test_cycle_category_filter() {
        let mut app = test_app();
        update(
            &mut app,
            Action::ParticipantsLoaded {
                participants: vec![participant(1, "A", Some(3))],
                categories: vec![Category {
                    id: 3,
                    name: "Food".into(),
                }],
            },
        );
        update(&mut app, Action::CycleCategoryFilter);
        assert_eq!(app.participants.filter, CategoryFilter::Category(3));
        assert_eq!(app.status_message, "Category: Food");
        update(&mut app, Action::CycleCategoryFilter);
        assert_eq!(app.participants.filter, CategoryFilter::All);
    }

    #[test]
    fn test_toggle_view() {
        let mut app = test_app();
        update(&mut app, Action::ToggleParticipantView);
        assert_eq!(app.participants.view, ParticipantView::ByCategory);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
