use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Paragraph, Tabs};

use crate::Screen;
use crate::api::{
    ArticleDetail, NewsArticle, OfferDetails, Participant, Product, media_url, or_untitled,
};
use crate::core::slot::DetailPhase;
use crate::core::state::{App, ParticipantsScreen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{DetailPopup, ProductList, TitleBar};

const HELP: &str = " ↑↓ Move  Enter Open  Tab Switch  q Quit ";
const PARTICIPANT_HELP: &str = " ↑↓ Move  Enter Open  p Products  v View  c Category  Tab Switch  q Quit ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Min(0)]);
    let [title_area, tabs_area, main_area] = layout.areas(frame.area());

    let loading_frame = app.is_loading().then_some(spinner_frame);
    TitleBar::new(
        app.screen.title().to_string(),
        app.status_message.clone(),
        loading_frame,
    )
    .render(frame, title_area);

    let tabs = Tabs::new(Screen::ALL.iter().map(|s| s.title()))
        .select(app.screen.index())
        .block(Block::bordered())
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, tabs_area);

    match app.screen {
        Screen::Participants => draw_participants(frame, main_area, app, tui),
        Screen::Offers => draw_offers(frame, main_area, app, tui),
        Screen::News => draw_news(frame, main_area, app, tui),
    }
}

fn list_block(title: String, help: &'static str) -> Block<'static> {
    Block::bordered()
        .title(title)
        .title_bottom(Line::from(help).centered())
        .border_style(Style::default().fg(Color::DarkGray))
}

fn highlight() -> Style {
    Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

fn draw_placeholder(frame: &mut Frame, area: Rect, block: Block, message: &str) {
    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

// ============================================================================
// Participants
// ============================================================================

fn draw_participants(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let screen = &app.participants;
    let title = format!(
        " Participants | {} | Category: {} ",
        screen.view.label(),
        screen.filter_label()
    );
    let block = list_block(title, PARTICIPANT_HELP);

    let rows = screen.visible();
    if screen.participants.is_loading() {
        draw_placeholder(frame, area, block, "Loading participants...");
    } else if rows.is_empty() {
        draw_placeholder(frame, area, block, "No participants to show.");
    } else {
        let items: Vec<ListItem> = rows
            .iter()
            .map(|p| {
                ListItem::new(Line::from(vec![
                    Span::styled(p.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    Span::styled(
                        screen.category_name(p.category).to_string(),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();
        let list = List::new(items).block(block).highlight_style(highlight());
        frame.render_stateful_widget(list, area, &mut tui.participants_list);
    }

    if screen.detail.phase() != DetailPhase::NoSelection {
        let lines = match screen.detail.shown() {
            Some(p) if !screen.detail.is_loading() => participant_lines(screen, p, &app.media_url),
            _ => vec![Line::from("Loading...")],
        };
        let title = screen
            .detail
            .shown()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "Participant".to_string());
        DetailPopup::new(title, lines).render(frame, area);
    }

    if screen.products.phase() != DetailPhase::NoSelection {
        let products = screen
            .products
            .shown()
            .map(|cp| cp.products.as_slice())
            .unwrap_or(&[]);
        ProductList {
            products,
            loading: screen.products.is_loading(),
            state: &mut tui.products_list,
        }
        .render(frame, area);
    }

    if screen.product_detail.phase() != DetailPhase::NoSelection {
        let (title, lines) = match screen.product_detail.shown() {
            Some(p) if !screen.product_detail.is_loading() => {
                (or_untitled(&p.name).to_string(), product_lines(p, &app.media_url))
            }
            _ => ("Product".to_string(), vec![Line::from("Loading...")]),
        };
        DetailPopup::new(title, lines).nested().render(frame, area);
    }
}

fn labelled<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Cyan)),
        Span::raw(value),
    ])
}

pub fn participant_lines<'a>(
    screen: &ParticipantsScreen,
    p: &'a Participant,
    media_origin: &str,
) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    if let Some(logo) = media_url(media_origin, p.logo.as_deref()) {
        lines.push(labelled("Logo: ", logo));
    }
    if p.category.is_some() {
        lines.push(labelled(
            "Category: ",
            screen.category_name(p.category).to_string(),
        ));
    }
    if let Some(description) = &p.description {
        lines.push(Line::from(""));
        lines.push(Line::from(description.as_str()));
        lines.push(Line::from(""));
    }
    if let Some(phone) = &p.phone_number {
        lines.push(labelled("Phone: ", phone.clone()));
    }
    if let Some(email) = &p.email {
        lines.push(labelled("Email: ", email.clone()));
    }
    lines
}

pub fn product_lines<'a>(p: &'a Product, media_origin: &str) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    if let Some(image) = media_url(media_origin, p.image.as_deref()) {
        lines.push(labelled("Image: ", image));
    }
    if let Some(description) = &p.description {
        lines.push(Line::from(description.as_str()));
    }
    lines
}

// ============================================================================
// Offers
// ============================================================================

fn draw_offers(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let screen = &app.offers;
    let block = list_block(" Expo Offers ".to_string(), HELP);

    let offers = screen.offers.items();
    if screen.offers.is_loading() {
        draw_placeholder(frame, area, block, "Loading offers...");
    } else if offers.is_empty() {
        draw_placeholder(frame, area, block, "No offers yet.");
    } else {
        let items: Vec<ListItem> = offers
            .iter()
            .map(|o| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        or_untitled(&o.offer.name).to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        o.company_name.clone(),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();
        let list = List::new(items).block(block).highlight_style(highlight());
        frame.render_stateful_widget(list, area, &mut tui.offers_list);
    }

    if screen.detail.phase() != DetailPhase::NoSelection {
        let (title, lines) = match screen.detail.shown() {
            Some(details) if !screen.detail.is_loading() => {
                (
                    or_untitled(&details.offer.name).to_string(),
                    offer_lines(details, &app.media_url),
                )
            }
            _ => ("Offer".to_string(), vec![Line::from("Loading...")]),
        };
        DetailPopup::new(title, lines).render(frame, area);
    }
}

pub fn offer_lines<'a>(details: &'a OfferDetails, media_origin: &str) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    if let Some(company) = &details.company {
        if let Some(logo) = media_url(media_origin, company.logo.as_deref()) {
            lines.push(labelled("Logo: ", logo));
        }
        lines.push(labelled("By: ", company.name.clone()));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Offer Details:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(
        details.offer.description.as_deref().unwrap_or_default(),
    ));
    lines
}

// ============================================================================
// News
// ============================================================================

fn draw_news(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let screen = &app.news;
    let block = list_block(" Expo News ".to_string(), HELP);

    let articles = screen.articles.items();
    if screen.articles.is_loading() {
        draw_placeholder(frame, area, block, "Loading news...");
    } else if articles.is_empty() {
        draw_placeholder(frame, area, block, "No news yet.");
    } else {
        let items: Vec<ListItem> = articles
            .iter()
            .map(|a| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        or_untitled(&a.headline).to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        a.published_label(),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();
        let list = List::new(items).block(block).highlight_style(highlight());
        frame.render_stateful_widget(list, area, &mut tui.news_list);
    }

    if let Some(article) = &screen.selected {
        let detail = screen.detail.shown();
        let lines = article_lines(article, detail, &app.media_url);
        DetailPopup::new(or_untitled(&article.headline), lines).render(frame, area);
    }
}

pub fn article_lines<'a>(
    article: &'a NewsArticle,
    detail: Option<&'a ArticleDetail>,
    media_origin: &str,
) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(
            article.published_label(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];
    match detail {
        Some(detail) => {
            if let Some(image) = media_url(media_origin, detail.image.as_deref()) {
                lines.push(labelled("Image: ", image));
            }
            lines.push(Line::from(detail.article_text.as_str()));
        }
        None => lines.push(Line::from("Loading content...")),
    }
    lines
}
