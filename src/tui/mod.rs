//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 250ms, only redraws on events or when a
//!   background fetch reports back.
//!
//! ## Fetches
//!
//! Every `Effect` that needs the network becomes one tokio task. The task
//! calls into `resolver` and sends the matching `*Loaded` action back over
//! an mpsc channel; the loop drains that channel between frames. Tasks are
//! never aborted: a result for a superseded selection is dropped by
//! `update()` when its ticket no longer matches.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::Screen;
use crate::api::{ApiClient, Gateway};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::slot::DetailPhase;
use crate::core::state::App;
use crate::resolver;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
#[derive(Debug, Default)]
pub struct TuiState {
    pub participants_list: ListState,
    pub offers_list: ListState,
    pub news_list: ListState,
    pub products_list: ListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn build_gateway(config: &ResolvedConfig) -> Arc<dyn Gateway> {
    Arc::new(ApiClient::new(config.base_url.clone()))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let gateway = build_gateway(&config);
    let mut app = App::new(config.screen, config.media_url.clone());
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    // Channel for actions from background fetches
    let (tx, rx) = mpsc::channel();

    spawn_effect(open_start_screen(&mut app), &gateway, &tx);

    let start_time = Instant::now();
    let mut needs_redraw = true;

    'main: loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            clamp_selections(&app, &mut tui);
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Drain every pending key before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = action_for(&app, &mut tui, event) else {
                continue;
            };
            debug!("Key produced action: {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => break 'main,
                effect => spawn_effect(effect, &gateway, &tx),
            }
        }

        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => break 'main,
                effect => spawn_effect(effect, &gateway, &tx),
            }
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

/// Kicks off the list load of whichever tab the app starts on.
fn open_start_screen(app: &mut App) -> Effect {
    let screen = app.screen;
    update(app, Action::OpenScreen(screen))
}

/// Translates a key into an action, letting the topmost overlay claim it first.
fn action_for(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        _ => {}
    }

    if let Some(overlay) = overlay_action(app, tui, &event) {
        return overlay;
    }

    match event {
        TuiEvent::NextTab => Some(Action::OpenScreen(app.screen.next())),
        TuiEvent::PrevTab => Some(Action::OpenScreen(app.screen.previous())),
        TuiEvent::JumpTab(screen) => Some(Action::OpenScreen(screen)),
        // Nothing left to close
        TuiEvent::Escape => Some(Action::Quit),
        _ => list_action(app, tui, event),
    }
}

/// `Some(..)` when an overlay is open on the active screen: the overlay
/// consumes the key even if it maps to nothing.
fn overlay_action(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Option<Action>> {
    let closing = matches!(event, TuiEvent::Escape);
    match app.screen {
        Screen::Participants => {
            let screen = &app.participants;
            if screen.product_detail.phase() != DetailPhase::NoSelection {
                return Some(closing.then_some(Action::CloseProductDetail));
            }
            if screen.products.phase() != DetailPhase::NoSelection {
                let products = screen
                    .products
                    .shown()
                    .map(|cp| cp.products.as_slice())
                    .unwrap_or(&[]);
                let action = match event {
                    TuiEvent::Escape => Some(Action::CloseProducts),
                    TuiEvent::CursorUp => {
                        move_cursor(&mut tui.products_list, products.len(), -1);
                        None
                    }
                    TuiEvent::CursorDown => {
                        move_cursor(&mut tui.products_list, products.len(), 1);
                        None
                    }
                    TuiEvent::Submit => tui
                        .products_list
                        .selected()
                        .and_then(|i| products.get(i))
                        .map(|p| Action::SelectProduct(p.id)),
                    _ => None,
                };
                return Some(action);
            }
            if screen.detail.phase() != DetailPhase::NoSelection {
                let action = match event {
                    TuiEvent::Escape => Some(Action::CloseParticipantDetails),
                    TuiEvent::ShowProducts => screen.detail.shown().map(|p| {
                        tui.products_list.select(Some(0));
                        Action::ShowProducts(p.id)
                    }),
                    _ => None,
                };
                return Some(action);
            }
            None
        }
        Screen::Offers => (app.offers.detail.phase() != DetailPhase::NoSelection)
            .then(|| closing.then_some(Action::CloseOfferDetails)),
        Screen::News => app
            .news
            .selected
            .is_some()
            .then(|| closing.then_some(Action::CloseArticle)),
    }
}

fn list_action(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    match app.screen {
        Screen::Participants => {
            let rows = app.participants.visible();
            let state = &mut tui.participants_list;
            let selected = state.selected().and_then(|i| rows.get(i)).map(|p| p.id);
            match event {
                TuiEvent::CursorUp => move_cursor(state, rows.len(), -1),
                TuiEvent::CursorDown => move_cursor(state, rows.len(), 1),
                TuiEvent::Submit => return selected.map(Action::SelectParticipant),
                TuiEvent::ShowProducts => {
                    tui.products_list.select(Some(0));
                    return selected.map(Action::ShowProducts);
                }
                TuiEvent::ToggleView => {
                    state.select(Some(0));
                    return Some(Action::ToggleParticipantView);
                }
                TuiEvent::CycleFilter => {
                    state.select(Some(0));
                    return Some(Action::CycleCategoryFilter);
                }
                _ => {}
            }
            None
        }
        Screen::Offers => {
            let offers = app.offers.offers.items();
            let state = &mut tui.offers_list;
            match event {
                TuiEvent::CursorUp => move_cursor(state, offers.len(), -1),
                TuiEvent::CursorDown => move_cursor(state, offers.len(), 1),
                TuiEvent::Submit => {
                    return state
                        .selected()
                        .and_then(|i| offers.get(i))
                        .map(|o| Action::SelectOffer(o.offer.id));
                }
                _ => {}
            }
            None
        }
        Screen::News => {
            let articles = app.news.articles.items();
            let state = &mut tui.news_list;
            match event {
                TuiEvent::CursorUp => move_cursor(state, articles.len(), -1),
                TuiEvent::CursorDown => move_cursor(state, articles.len(), 1),
                TuiEvent::Submit => {
                    return state
                        .selected()
                        .and_then(|i| articles.get(i))
                        .map(|a| Action::SelectArticle(a.id));
                }
                _ => {}
            }
            None
        }
    }
}

fn move_cursor(state: &mut ListState, len: usize, delta: isize) {
    if len == 0 {
        state.select(None);
        return;
    }
    let current = state.selected().unwrap_or(0);
    let next = current.saturating_add_signed(delta).min(len - 1);
    state.select(Some(next));
}

/// Keeps each cursor on an existing row after lists load or shrink.
fn clamp_selections(app: &App, tui: &mut TuiState) {
    fn clamp(state: &mut ListState, len: usize) {
        match (state.selected(), len) {
            (_, 0) => state.select(None),
            (None, _) => state.select(Some(0)),
            (Some(i), len) if i >= len => state.select(Some(len - 1)),
            _ => {}
        }
    }
    clamp(&mut tui.participants_list, app.participants.visible().len());
    clamp(&mut tui.offers_list, app.offers.offers.items().len());
    clamp(&mut tui.news_list, app.news.articles.items().len());
    let products = app
        .participants
        .products
        .shown()
        .map_or(0, |cp| cp.products.len());
    clamp(&mut tui.products_list, products);
}

fn spawn_effect(effect: Effect, gateway: &Arc<dyn Gateway>, tx: &mpsc::Sender<Action>) {
    if matches!(effect, Effect::None | Effect::Quit) {
        return;
    }
    info!("Spawning fetch: {:?}", effect);
    let gateway = Arc::clone(gateway);
    let tx = tx.clone();
    tokio::spawn(async move {
        let gateway = gateway.as_ref();
        let action = match effect {
            Effect::None | Effect::Quit => return,
            Effect::LoadParticipants => {
                let (participants, categories) =
                    resolver::load_participants_and_categories(gateway).await;
                Action::ParticipantsLoaded {
                    participants,
                    categories,
                }
            }
            Effect::LoadParticipantDetails { ticket, id } => Action::ParticipantDetailsLoaded {
                ticket,
                result: resolver::load_participant_details(gateway, id).await,
            },
            Effect::LoadCompanyProducts { ticket, company_id } => Action::ProductsLoaded {
                ticket,
                company_id,
                products: resolver::load_company_products(gateway, company_id).await,
            },
            Effect::LoadProductDetail { ticket, id } => Action::ProductDetailLoaded {
                ticket,
                result: resolver::load_product_detail(gateway, id).await,
            },
            Effect::LoadOffers => {
                Action::OffersLoaded(resolver::load_offers_with_companies(gateway).await)
            }
            Effect::LoadOfferDetails { ticket, id } => Action::OfferDetailsLoaded {
                ticket,
                result: resolver::load_offer_details(gateway, id).await,
            },
            Effect::LoadArticles => Action::ArticlesLoaded(resolver::load_articles(gateway).await),
            Effect::LoadArticleDetail { ticket, id } => Action::ArticleDetailLoaded {
                ticket,
                result: resolver::load_article_detail(gateway, id).await,
            },
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver fetch result: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::slot::DetailPhase;
    use crate::test_support::{FakeGateway, article, offer, participant, product, test_app};

    fn loaded_app() -> App {
        let mut app = test_app();
        update(
            &mut app,
            Action::ParticipantsLoaded {
                participants: vec![participant(7, "Zed", None), participant(3, "amir", None)],
                categories: vec![],
            },
        );
        app
    }

    #[test]
    fn test_submit_selects_visible_row() {
        let app = loaded_app();
        let mut tui = TuiState::new();
        clamp_selections(&app, &mut tui);

        // Alphabetical: amir (3) comes first.
        assert!(matches!(
            action_for(&app, &mut tui, TuiEvent::Submit),
            Some(Action::SelectParticipant(3))
        ));
        action_for(&app, &mut tui, TuiEvent::CursorDown);
        assert!(matches!(
            action_for(&app, &mut tui, TuiEvent::Submit),
            Some(Action::SelectParticipant(7))
        ));
    }

    #[test]
    fn test_start_screen_loads_its_list() {
        let mut app = App::new(Screen::News, "https://expo.test".to_string());
        assert_eq!(open_start_screen(&mut app), Effect::LoadArticles);
        assert!(app.is_loading());
        assert_eq!(open_start_screen(&mut app), Effect::None);
    }

    #[test]
    fn test_cursor_stops_at_ends() {
        let mut state = ListState::default();
        move_cursor(&mut state, 2, -1);
        assert_eq!(state.selected(), Some(0));
        move_cursor(&mut state, 2, 1);
        move_cursor(&mut state, 2, 1);
        assert_eq!(state.selected(), Some(1));
        move_cursor(&mut state, 0, 1);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_escape_closes_topmost_overlay_first() {
        let mut app = loaded_app();
        let mut tui = TuiState::new();
        update(&mut app, Action::SelectParticipant(3));
        update(&mut app, Action::ShowProducts(3));
        update(&mut app, Action::SelectProduct(10));

        assert!(matches!(
            action_for(&app, &mut tui, TuiEvent::Escape),
            Some(Action::CloseProductDetail)
        ));
        update(&mut app, Action::CloseProductDetail);
        assert!(matches!(
            action_for(&app, &mut tui, TuiEvent::Escape),
            Some(Action::CloseProducts)
        ));
        update(&mut app, Action::CloseProducts);
        assert!(matches!(
            action_for(&app, &mut tui, TuiEvent::Escape),
            Some(Action::CloseParticipantDetails)
        ));
        update(&mut app, Action::CloseParticipantDetails);
        assert!(matches!(
            action_for(&app, &mut tui, TuiEvent::Escape),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn test_tabs_are_blocked_while_overlay_open() {
        let mut app = test_app();
        update(&mut app, Action::OpenScreen(Screen::News));
        update(&mut app, Action::ArticlesLoaded(vec![article(1, "Opening")]));
        update(&mut app, Action::SelectArticle(1));
        let mut tui = TuiState::new();

        assert!(action_for(&app, &mut tui, TuiEvent::NextTab).is_none());
        assert!(matches!(
            action_for(&app, &mut tui, TuiEvent::Quit),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn test_tab_keys_switch_screens() {
        let app = test_app();
        let mut tui = TuiState::new();
        assert!(matches!(
            action_for(&app, &mut tui, TuiEvent::PrevTab),
            Some(Action::OpenScreen(Screen::News))
        ));
        assert!(matches!(
            action_for(&app, &mut tui, TuiEvent::JumpTab(Screen::Offers)),
            Some(Action::OpenScreen(Screen::Offers))
        ));
    }

    #[test]
    fn test_toggle_view_resets_cursor() {
        let app = loaded_app();
        let mut tui = TuiState::new();
        tui.participants_list.select(Some(1));
        assert!(matches!(
            action_for(&app, &mut tui, TuiEvent::ToggleView),
            Some(Action::ToggleParticipantView)
        ));
        assert_eq!(tui.participants_list.selected(), Some(0));
    }

    #[tokio::test]
    async fn test_spawned_fetch_reports_back() {
        let gateway: Arc<dyn Gateway> = Arc::new(
            FakeGateway::new()
                .with_participant(participant(5, "Acme", None))
                .with_offers(vec![offer(1, Some(5))])
                .with_products(5, vec![product(10, "Widget")]),
        );
        let (tx, rx) = mpsc::channel();

        spawn_effect(Effect::LoadOffers, &gateway, &tx);
        spawn_effect(
            Effect::LoadCompanyProducts {
                ticket: 1,
                company_id: 5,
            },
            &gateway,
            &tx,
        );

        let mut app = test_app();
        update(&mut app, Action::OpenScreen(Screen::Offers));
        let ticket = app.participants.products.begin();
        assert_eq!(ticket, 1);

        let mut received = 0;
        let deadline = Instant::now() + Duration::from_secs(2);
        while received < 2 && Instant::now() < deadline {
            match rx.try_recv() {
                Ok(action) => {
                    update(&mut app, action);
                    received += 1;
                }
                Err(_) => tokio::time::sleep(Duration::from_millis(5)).await,
            }
        }

        assert_eq!(received, 2);
        assert_eq!(app.offers.offers.items()[0].company_name, "Acme");
        assert_eq!(app.participants.products.phase(), DetailPhase::Showing);
    }
}
