// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! All state transitions happen synchronously here; asynchronous work (HTTP
//! fetches) is expressed as `Task`s whose completions re-enter `update` as
//! messages. Fetch failures degrade to empty/default display state and are
//! logged — no error crosses a component boundary.

use super::view::PAGE_SCROLL_ID;
use super::{App, Message, Screen};
use crate::catalog::Product;
use crate::error::Error;
use crate::images;
use crate::ui::carousel;
use crate::ui::footer::{self, Event as FooterEvent};
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::listing;
use iced::Task;

pub(super) fn handle_header_message(app: &mut App, message: header::Message) -> Task<Message> {
    match header::update(message, &mut app.menu_open) {
        HeaderEvent::None => Task::none(),
        HeaderEvent::NavigateHome => navigate(app, Screen::Home),
        HeaderEvent::NavigateCategory(slug) => navigate(app, Screen::Category { slug }),
    }
}

pub(super) fn handle_footer_message(app: &mut App, message: footer::Message) -> Task<Message> {
    match footer::update(message) {
        FooterEvent::NavigateHome => navigate(app, Screen::Home),
        FooterEvent::NavigateCategory(slug) => navigate(app, Screen::Category { slug }),
    }
}

pub(super) fn handle_listing_message(app: &mut App, message: listing::Message) -> Task<Message> {
    match message {
        listing::Message::CardPressed(index) => {
            let Some(product) = app.products.get(index) else {
                return Task::none();
            };
            // A product without photos never opens a session.
            if !product.has_images() {
                return Task::none();
            }

            // Snapshot the image list: the session stays valid even if the
            // product list is refetched while the carousel is open.
            let snapshot = product.images.clone();
            let urls: Vec<String> = snapshot.iter().map(|image| image.image.clone()).collect();
            app.gallery.open(snapshot, 0);

            let mut tasks = Vec::new();
            for url in urls {
                tasks.push(fetch_image(app, &url));
            }
            Task::batch(tasks)
        }
    }
}

pub(super) fn handle_carousel_message(app: &mut App, message: carousel::Message) -> Task<Message> {
    match message {
        carousel::Message::Next => app.gallery.next(),
        carousel::Message::Previous => app.gallery.previous(),
        carousel::Message::Close => app.gallery.close(),
    }
    Task::none()
}

pub(super) fn handle_site_config_fetched(
    app: &mut App,
    result: Result<crate::catalog::SiteConfig, Error>,
) -> Task<Message> {
    match result {
        Ok(site_config) => {
            app.site_config = site_config;
            match app.site_config.logo().map(str::to_owned) {
                Some(logo_url) => fetch_image(app, &logo_url),
                None => Task::none(),
            }
        }
        Err(err) => {
            // Header and footer fall back to the hardcoded site name and the
            // generated placeholder logo.
            tracing::warn!(error = %err, "failed to fetch site configuration");
            Task::none()
        }
    }
}

pub(super) fn handle_categories_fetched(
    app: &mut App,
    result: Result<Vec<crate::catalog::Category>, Error>,
) -> Task<Message> {
    match result {
        Ok(categories) => app.categories = categories,
        Err(err) => {
            // Dropdown and footer links simply do not render.
            tracing::warn!(error = %err, "failed to fetch categories");
            app.categories = Vec::new();
        }
    }
    Task::none()
}

pub(super) fn handle_products_fetched(
    app: &mut App,
    generation: u64,
    result: Result<Vec<Product>, Error>,
) -> Task<Message> {
    if generation != app.products_generation {
        tracing::debug!(
            generation,
            current = app.products_generation,
            "dropping stale product fetch result"
        );
        return Task::none();
    }

    app.products_loading = false;
    match result {
        Ok(products) => {
            app.products = products;
            let covers: Vec<String> = app
                .products
                .iter()
                .filter_map(|product| product.cover_image())
                .map(|cover| cover.image.clone())
                .collect();

            let mut tasks = Vec::new();
            for url in covers {
                tasks.push(fetch_image(app, &url));
            }
            Task::batch(tasks)
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to fetch products");
            app.products = Vec::new();
            Task::none()
        }
    }
}

pub(super) fn handle_image_fetched(
    app: &mut App,
    url: String,
    result: Result<iced::widget::image::Handle, Error>,
) -> Task<Message> {
    match result {
        Ok(handle) => app.images.insert_ready(&url, handle),
        Err(err) => {
            // Terminal for this URL: the placeholder renders instead and the
            // fetch is not retried.
            tracing::warn!(error = %err, url, "failed to fetch image");
            app.images.insert_failed(&url);
        }
    }
    Task::none()
}

/// Switches to `screen`, closes the dropdown, issues the view's product fetch
/// under a fresh generation, and resets the page scroll position.
pub(super) fn navigate(app: &mut App, screen: Screen) -> Task<Message> {
    app.menu_open = false;
    app.screen = screen;
    Task::batch([fetch_products(app), scroll_to_top()])
}

/// Issues the product fetch for the current screen. Bumps the generation so
/// any still-in-flight fetch for a previous view is dropped on completion.
pub(super) fn fetch_products(app: &mut App) -> Task<Message> {
    app.products_generation += 1;
    app.products_loading = true;
    let generation = app.products_generation;
    let client = app.client.clone();

    match &app.screen {
        Screen::Home => Task::perform(
            async move { client.fetch_featured_products().await },
            move |result| Message::ProductsFetched { generation, result },
        ),
        Screen::Category { slug } => {
            let slug = slug.clone();
            Task::perform(
                async move { client.fetch_products_by_category(&slug).await },
                move |result| Message::ProductsFetched { generation, result },
            )
        }
    }
}

/// Fetches and decodes one remote image, unless the URL is already cached
/// (loading, ready, or failed).
pub(super) fn fetch_image(app: &mut App, url: &str) -> Task<Message> {
    if !app.images.begin(url) {
        return Task::none();
    }

    let client = app.client.clone();
    let url = url.to_string();
    Task::perform(
        async move {
            let result = match client.fetch_image_bytes(&url).await {
                Ok(bytes) => images::decode_handle(bytes),
                Err(err) => Err(err),
            };
            (url, result)
        },
        |(url, result)| Message::ImageFetched { url, result },
    )
}

fn scroll_to_top() -> Task<Message> {
    use iced::widget::scrollable::RelativeOffset;
    use iced::widget::{operation, Id};
    operation::snap_to(Id::new(PAGE_SCROLL_ID), RelativeOffset { x: 0.0, y: 0.0 })
}
