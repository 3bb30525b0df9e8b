// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the catalog views and the
//! carousel overlay.
//!
//! The `App` struct wires together the fetched catalog data (site
//! configuration, categories, products), the per-URL image cache, and the
//! single gallery session, and translates messages into side effects like
//! HTTP fetches and scroll resets. Policy decisions (window sizing, stale
//! fetch handling, fallback behavior) stay close to the main update loop so
//! user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog::{CatalogClient, Category, Product, SiteConfig};
use crate::config;
use crate::gallery::GallerySession;
use crate::images::ImageCache;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state bridging the catalog data and UI components.
pub struct App {
    client: CatalogClient,
    screen: Screen,
    site_config: SiteConfig,
    categories: Vec<Category>,
    /// Products of the active view (featured or one category).
    products: Vec<Product>,
    products_loading: bool,
    /// Generation counter tying product fetch completions to the view that
    /// issued them; stale completions are dropped.
    products_generation: u64,
    /// Whether the categories dropdown is open.
    menu_open: bool,
    /// The single carousel session; closed most of the time.
    gallery: GallerySession,
    images: ImageCache,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("gallery_open", &self.gallery.is_open())
            .field("product_count", &self.products.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = config::Config::default();
        let client = CatalogClient::new(&config.api_base_url());
        Self {
            client,
            screen: Screen::Home,
            site_config: SiteConfig::default(),
            categories: Vec::new(),
            products: Vec::new(),
            products_loading: false,
            products_generation: 0,
            menu_open: false,
            gallery: GallerySession::new(),
            images: ImageCache::new(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the startup fetches:
    /// site configuration, categories, and the home view's featured products.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut app_config = match config::load() {
            Ok(loaded) => loaded,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load settings, using defaults");
                config::Config::default()
            }
        };
        if let Some(api_url) = flags.api_url {
            app_config.api_base_url = Some(api_url);
        }

        let client = CatalogClient::new(&app_config.api_base_url());
        let mut app = App {
            client,
            ..Self::default()
        };

        let site_config_client = app.client.clone();
        let site_config_task = Task::perform(
            async move { site_config_client.fetch_site_config().await },
            Message::SiteConfigFetched,
        );

        let categories_client = app.client.clone();
        let categories_task = Task::perform(
            async move { categories_client.fetch_categories().await },
            Message::CategoriesFetched,
        );

        let products_task = update::fetch_products(&mut app);

        (
            app,
            Task::batch([site_config_task, categories_task, products_task]),
        )
    }

    fn title(&self) -> String {
        let site_name = self.site_config.site_name();
        match &self.screen {
            Screen::Home => site_name.to_string(),
            Screen::Category { slug } => {
                let category_name = self
                    .categories
                    .iter()
                    .find(|category| category.slug == *slug)
                    .map(|category| category.name.as_str());
                match category_name {
                    Some(name) => format!("{name} - {site_name}"),
                    None => site_name.to_string(),
                }
            }
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.gallery.is_open())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(header_message) => update::handle_header_message(self, header_message),
            Message::Footer(footer_message) => update::handle_footer_message(self, footer_message),
            Message::Listing(listing_message) => {
                update::handle_listing_message(self, listing_message)
            }
            Message::Carousel(carousel_message) => {
                update::handle_carousel_message(self, carousel_message)
            }
            Message::SiteConfigFetched(result) => {
                update::handle_site_config_fetched(self, result)
            }
            Message::CategoriesFetched(result) => update::handle_categories_fetched(self, result),
            Message::ProductsFetched { generation, result } => {
                update::handle_products_fetched(self, generation, result)
            }
            Message::ImageFetched { url, result } => {
                update::handle_image_fetched(self, url, result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
