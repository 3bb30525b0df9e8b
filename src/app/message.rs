// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::{Category, Product, SiteConfig};
use crate::error::Error;
use crate::ui::carousel;
use crate::ui::footer;
use crate::ui::header;
use crate::ui::listing;
use iced::widget::image;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Footer(footer::Message),
    Listing(listing::Message),
    Carousel(carousel::Message),
    /// Result of the startup site configuration fetch.
    SiteConfigFetched(Result<SiteConfig, Error>),
    /// Result of the startup category list fetch.
    CategoriesFetched(Result<Vec<Category>, Error>),
    /// Result of a product fetch issued on view entry. `generation` ties the
    /// completion to the view that requested it; stale results are dropped.
    ProductsFetched {
        generation: u64,
        result: Result<Vec<Product>, Error>,
    },
    /// Result of fetching and decoding one remote image.
    ImageFetched {
        url: String,
        result: Result<image::Handle, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional catalog service address overriding the configured one.
    pub api_url: Option<String>,
}
