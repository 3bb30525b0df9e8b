// SPDX-License-Identifier: MPL-2.0
//! Navigation header for app-level navigation.
//!
//! Renders the site logo, the Home link, and a "Categories" dropdown menu
//! populated from the fetched category list. The dropdown closes when an item
//! is selected or when any navigation happens elsewhere.

use crate::catalog::Category;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    /// Remote logo handle when fetched; the placeholder otherwise.
    pub logo: Handle,
    pub categories: &'a [Category],
    pub menu_open: bool,
    /// Whether the home view is active (highlights the Home link).
    pub home_active: bool,
    /// Slug of the active category view, if any.
    pub active_category: Option<&'a str>,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    PressLogo,
    PressHome,
    ToggleCategories,
    SelectCategory(String),
    CloseMenu,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    NavigateHome,
    NavigateCategory(String),
}

/// Process a header message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::PressLogo | Message::PressHome => {
            *menu_open = false;
            Event::NavigateHome
        }
        Message::ToggleCategories => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::SelectCategory(slug) => {
            *menu_open = false;
            Event::NavigateCategory(slug)
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
    }
}

/// Render the header bar, with the dropdown panel below it when open.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_bar(&ctx));

    if ctx.menu_open && !ctx.categories.is_empty() {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let logo = button(
        Image::new(ctx.logo.clone())
            .height(Length::Fixed(sizing::LOGO_HEIGHT)),
    )
    .on_press(Message::PressLogo)
    .padding(0.0)
    .style(styles::button::nav_link(false));

    let home_link = button(Text::new("Home").size(typography::BODY))
        .on_press(Message::PressHome)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::nav_link(ctx.home_active));

    let mut nav = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(home_link);

    if !ctx.categories.is_empty() {
        let chevron = if ctx.menu_open { "▴" } else { "▾" };
        let categories_button = button(
            Text::new(format!("Categories {chevron}")).size(typography::BODY),
        )
        .on_press(Message::ToggleCategories)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::nav_link(ctx.active_category.is_some()));

        nav = nav.push(categories_button);
    }

    let bar = Row::new()
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(logo)
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(nav);

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .style(styles::container::header_bar)
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut menu_column = Column::new().spacing(spacing::XXS);

    for category in ctx.categories {
        let active = ctx.active_category == Some(category.slug.as_str());
        let item = button(Text::new(category.name.clone()).size(typography::BODY))
            .on_press(Message::SelectCategory(category.slug.clone()))
            .padding([spacing::XS, spacing::SM])
            .width(Length::Fill)
            .style(styles::button::dropdown_item(active));
        menu_column = menu_column.push(item);
    }

    let panel = Container::new(menu_column)
        .width(Length::Fixed(sizing::DROPDOWN_WIDTH))
        .padding(spacing::XS)
        .style(styles::container::dropdown_panel);

    // Anchor the panel under the right edge of the bar.
    Container::new(panel)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding([0.0, spacing::LG])
        .into()
}
