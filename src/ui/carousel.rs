// SPDX-License-Identifier: MPL-2.0
//! Full-window carousel overlay.
//!
//! Stacked above the page while a gallery session is open: a dimmed backdrop
//! (press to close), the current photo centered in an event-opaque area so
//! presses on the image never reach the backdrop handler, previous/next
//! arrows, a close button, and a position counter.

use crate::gallery::GallerySession;
use crate::images::{ImageCache, ImageState};
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::{placeholder, styles, theme};
use iced::widget::image::Image;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, mouse_area, opaque, Container, Space, Stack, Text},
    ContentFit, Element, Length,
};

/// Messages emitted by the carousel overlay.
#[derive(Debug, Clone)]
pub enum Message {
    Next,
    Previous,
    Close,
}

/// Render the overlay for an open session.
///
/// Callers only invoke this while the session is open; a closed session
/// renders an empty element (nothing is stacked above the page).
pub fn view<'a>(session: &'a GallerySession, images: &'a ImageCache) -> Element<'a, Message> {
    let Some(current) = session.current_image() else {
        return Space::new().width(Length::Shrink).height(Length::Shrink).into();
    };

    // Backdrop layer: pressing anywhere not captured above closes the session.
    let backdrop = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::Close);

    // Image layer: `opaque` captures presses on the photo itself, keeping
    // "press to dismiss" distinct from "press inside the viewer".
    let photo: Element<'a, Message> = match images.state(&current.image) {
        Some(ImageState::Ready(handle)) => Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fixed(sizing::CAROUSEL_MAX_WIDTH))
            .height(Length::Fixed(sizing::CAROUSEL_MAX_HEIGHT))
            .into(),
        Some(ImageState::Loading) | None => Text::new("Loading...")
            .size(typography::BODY)
            .color(theme::overlay_text_color())
            .into(),
        Some(ImageState::Failed) => Image::new(placeholder::cover())
            .content_fit(ContentFit::Contain)
            .width(Length::Fixed(sizing::CAROUSEL_MAX_WIDTH))
            .height(Length::Fixed(sizing::CAROUSEL_MAX_HEIGHT))
            .into(),
    };

    let photo_layer = Container::new(opaque(photo))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let mut stack = Stack::new().push(backdrop).push(photo_layer);

    if session.len() > 1 {
        stack = stack
            .push(build_arrow("◀", Message::Previous, Horizontal::Left))
            .push(build_arrow("▶", Message::Next, Horizontal::Right))
            .push(build_counter(session));
    }

    stack = stack.push(build_close_button());

    stack.into()
}

fn build_arrow<'a>(
    glyph: &'a str,
    message: Message,
    side: Horizontal,
) -> Element<'a, Message> {
    let arrow = button(Text::new(glyph).size(typography::TITLE_SM))
        .on_press(message)
        .padding(spacing::SM)
        .style(styles::button_overlay(
            theme::overlay_text_color(),
            opacity::OVERLAY_SUBTLE,
            opacity::OVERLAY_MEDIUM,
        ));

    Container::new(arrow)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(side)
        .align_y(Vertical::Center)
        .into()
}

fn build_close_button<'a>() -> Element<'a, Message> {
    let close = button(Text::new("×").size(typography::TITLE_SM))
        .on_press(Message::Close)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::overlay_dark());

    Container::new(close)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top)
        .into()
}

fn build_counter<'a>(session: &GallerySession) -> Element<'a, Message> {
    let Some(current) = session.current_index() else {
        return Space::new().width(Length::Shrink).height(Length::Shrink).into();
    };

    let counter = Container::new(
        Text::new(format!("{}/{}", current + 1, session.len())).size(typography::BODY),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(styles::overlay::indicator(12.0));

    Container::new(counter)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::SM)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductImage;

    fn open_session(count: usize) -> GallerySession {
        let mut session = GallerySession::new();
        session.open(
            (0..count)
                .map(|i| ProductImage {
                    id: Some(i as u64),
                    image: format!("/media/product_images/{i}.jpg"),
                })
                .collect(),
            0,
        );
        session
    }

    #[test]
    fn carousel_view_renders_open_session() {
        let session = open_session(3);
        let images = ImageCache::new();
        let _element = view(&session, &images);
    }

    #[test]
    fn carousel_view_renders_single_image_session() {
        let session = open_session(1);
        let images = ImageCache::new();
        let _element = view(&session, &images);
    }

    #[test]
    fn carousel_view_renders_failed_image() {
        let session = open_session(2);
        let mut images = ImageCache::new();
        images.begin("/media/product_images/0.jpg");
        images.insert_failed("/media/product_images/0.jpg");
        let _element = view(&session, &images);
    }

    #[test]
    fn carousel_view_renders_nothing_when_closed() {
        let session = GallerySession::new();
        let images = ImageCache::new();
        let _element = view(&session, &images);
    }
}
