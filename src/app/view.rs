// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the header, the active screen's content, and the footer into one
//! scrollable page, and stacks the carousel overlay above everything while a
//! gallery session is open.

use super::{App, Message, Screen};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{carousel, footer, header, listing, styles, theme};
use chrono::Datelike;
use iced::widget::image::Handle;
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Scrollable, Stack, Text},
    Element, Length,
};

/// Widget id of the page scrollable, used to reset the scroll position on
/// navigation.
pub(super) const PAGE_SCROLL_ID: &str = "page-scroll";

const HERO_WELCOME: &str = "Welcome to";
const HERO_TAGLINE: &str = "Beautifully Crafted Nikah Namas to Celebrate Your Sacred Union.";
const FEATURED_HEADING: &str = "Featured Designs";

/// Renders the full application view.
pub fn view(app: &App) -> Element<'_, Message> {
    let header_view = header::view(header::ViewContext {
        logo: logo_handle(app),
        categories: &app.categories,
        menu_open: app.menu_open,
        home_active: app.screen == Screen::Home,
        active_category: app.screen.category_slug(),
    })
    .map(Message::Header);

    let listing_view = listing::view(listing::ViewContext {
        products: &app.products,
        images: &app.images,
        loading: app.products_loading,
    })
    .map(Message::Listing);

    let content: Element<'_, Message> = match &app.screen {
        Screen::Home => view_home(app, listing_view),
        Screen::Category { slug } => view_category(app, slug, listing_view),
    };

    let footer_view = footer::view(footer::ViewContext {
        site: &app.site_config,
        categories: &app.categories,
        logo: logo_handle(app),
        year: chrono::Local::now().year(),
    })
    .map(Message::Footer);

    let page = Scrollable::new(
        Column::new()
            .width(Length::Fill)
            .push(content)
            .push(footer_view),
    )
    .id(iced::widget::Id::new(PAGE_SCROLL_ID))
    .width(Length::Fill)
    .height(Length::Fill);

    let base = Container::new(
        Column::new().push(header_view).push(page),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page);

    if app.gallery.is_open() {
        let overlay = carousel::view(&app.gallery, &app.images).map(Message::Carousel);
        Stack::new().push(base).push(overlay).into()
    } else {
        base.into()
    }
}

/// The fetched remote logo, or the generated placeholder.
fn logo_handle(app: &App) -> Handle {
    app.site_config
        .logo()
        .and_then(|url| app.images.handle(url))
        .cloned()
        .unwrap_or_else(crate::ui::placeholder::logo)
}

fn view_home<'a>(app: &'a App, listing_view: Element<'a, Message>) -> Element<'a, Message> {
    let hero = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(
            Text::new(HERO_WELCOME)
                .size(typography::TITLE_SM)
                .color(theme::muted_text_color()),
        )
        .push(
            Text::new(app.site_config.site_name().to_string())
                .size(typography::DISPLAY)
                .color(theme::accent_color()),
        )
        .push(
            Text::new(HERO_TAGLINE)
                .size(typography::BODY)
                .color(theme::text_color()),
        );

    let heading = Text::new(FEATURED_HEADING)
        .size(typography::TITLE_LG)
        .color(theme::overlay_text_color());

    Column::new()
        .spacing(spacing::XL)
        .padding([spacing::XXL, spacing::LG])
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(hero)
        .push(heading)
        .push(listing_view)
        .into()
}

fn view_category<'a>(
    app: &'a App,
    slug: &str,
    listing_view: Element<'a, Message>,
) -> Element<'a, Message> {
    // Title from the locally known category list; empty when the slug is not
    // (or not yet) known.
    let title = app
        .categories
        .iter()
        .find(|category| category.slug == slug)
        .map(|category| category.name.clone())
        .unwrap_or_default();

    Column::new()
        .spacing(spacing::XL)
        .padding([spacing::XXL, spacing::LG])
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(
            Text::new(title)
                .size(typography::TITLE_LG)
                .color(theme::overlay_text_color()),
        )
        .push(listing_view)
        .into()
}
