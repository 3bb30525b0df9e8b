// SPDX-License-Identifier: MPL-2.0
//! Listing surface: the grid of product cards for a view.
//!
//! Each card shows the product's cover image (first photo), a photo-count
//! badge when there is more than one, the name, and a truncated description.
//! Pressing a card with at least one photo asks the application to open the
//! carousel at that product's first image; cards without photos are inert.

use crate::catalog::Product;
use crate::images::{ImageCache, ImageState};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{placeholder, styles, theme};
use iced::widget::image::Image;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Stack, Text},
    ContentFit, Element, Length,
};

/// Number of cards per grid row.
const GRID_COLUMNS: usize = 3;

/// Contextual data needed to render the listing.
pub struct ViewContext<'a> {
    pub products: &'a [Product],
    pub images: &'a ImageCache,
    /// Whether the product fetch for this view is still in flight.
    pub loading: bool,
}

/// Messages emitted by the listing.
#[derive(Debug, Clone)]
pub enum Message {
    /// A card was pressed; the payload is the product's index in the
    /// rendered list.
    CardPressed(usize),
}

/// Render the listing grid (or its loading indicator).
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.loading {
        return Container::new(
            Text::new("Loading...")
                .size(typography::BODY)
                .color(theme::muted_text_color()),
        )
        .width(Length::Fill)
        .padding(spacing::XXL)
        .align_x(Horizontal::Center)
        .into();
    }

    let mut grid = Column::new().spacing(spacing::LG).width(Length::Fill);

    for (row_index, chunk) in ctx.products.chunks(GRID_COLUMNS).enumerate() {
        let mut row = Row::new().spacing(spacing::LG);
        for (column_index, product) in chunk.iter().enumerate() {
            let product_index = row_index * GRID_COLUMNS + column_index;
            row = row.push(build_card(ctx.images, product, product_index));
        }
        grid = grid.push(row);
    }

    Container::new(grid)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn build_card<'a>(
    images: &'a ImageCache,
    product: &'a Product,
    product_index: usize,
) -> Element<'a, Message> {
    let cover = build_cover(images, product);

    let name = Text::new(product.name.clone())
        .size(typography::TITLE_SM)
        .color(theme::overlay_text_color());

    let description = Text::new(product.short_description())
        .size(typography::BODY_SM)
        .color(theme::muted_text_color());

    let body = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .push(name)
        .push(description);

    let content = Column::new().push(cover).push(body);

    let card = button(content)
        .padding(0.0)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::button::card);

    // Cards without photos must never open a carousel session.
    if product.has_images() {
        card.on_press(Message::CardPressed(product_index)).into()
    } else {
        card.into()
    }
}

fn build_cover<'a>(images: &'a ImageCache, product: &'a Product) -> Element<'a, Message> {
    let handle = product
        .cover_image()
        .and_then(|cover| match images.state(&cover.image) {
            Some(ImageState::Ready(handle)) => Some(handle.clone()),
            // Loading or failed covers fall back to the placeholder.
            _ => None,
        })
        .unwrap_or_else(placeholder::cover);

    let cover_image = Image::new(handle)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
        .content_fit(ContentFit::Cover);

    let mut stack = Stack::new().push(cover_image);

    if product.images.len() > 1 {
        let badge = Container::new(
            Text::new(format!("{} photos", product.images.len())).size(typography::CAPTION),
        )
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::badge);

        stack = stack.push(
            Container::new(badge)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::XS)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Bottom),
        );
    }

    stack.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductImage;

    fn product(id: u64, image_count: usize) -> Product {
        Product {
            id,
            name: format!("Design {id}"),
            description: Some("An elegant hand-finished invitation card.".to_string()),
            is_featured: false,
            images: (0..image_count)
                .map(|i| ProductImage {
                    id: Some(i as u64),
                    image: format!("/media/product_images/{id}-{i}.jpg"),
                })
                .collect(),
        }
    }

    #[test]
    fn listing_view_renders_cards() {
        let products = vec![product(1, 3), product(2, 1), product(3, 0), product(4, 2)];
        let images = ImageCache::new();
        let ctx = ViewContext {
            products: &products,
            images: &images,
            loading: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn listing_view_renders_loading_state() {
        let images = ImageCache::new();
        let ctx = ViewContext {
            products: &[],
            images: &images,
            loading: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn listing_view_renders_empty_list() {
        let images = ImageCache::new();
        let ctx = ViewContext {
            products: &[],
            images: &images,
            loading: false,
        };
        let _element = view(ctx);
    }
}
