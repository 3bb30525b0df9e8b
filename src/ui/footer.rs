// SPDX-License-Identifier: MPL-2.0
//! Page footer with the site blurb, quick links, contact rows, and the
//! copyright line.
//!
//! Contact entries are informational rows (a desktop window has no `tel:` or
//! `wa.me` anchors); the WhatsApp row shows the `wa.me` address derived from
//! the configured number.

use crate::catalog::{Category, SiteConfig};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{styles, theme};
use iced::widget::image::{Handle, Image};
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

const ABOUT_BLURB: &str = "Beautifully crafted Nikah Namas to make your marriage memorable. \
    We provide unique and personalized designs to celebrate your sacred union.";

/// Contextual data needed to render the footer.
pub struct ViewContext<'a> {
    pub site: &'a SiteConfig,
    pub categories: &'a [Category],
    pub logo: Handle,
    /// Current year for the copyright line.
    pub year: i32,
}

/// Messages emitted by the footer's quick links.
#[derive(Debug, Clone)]
pub enum Message {
    PressHome,
    PressCategory(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    NavigateHome,
    NavigateCategory(String),
}

/// Process a footer message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::PressHome => Event::NavigateHome,
        Message::PressCategory(slug) => Event::NavigateCategory(slug),
    }
}

/// Render the footer.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let columns = Row::new()
        .spacing(spacing::XL)
        .push(build_about(&ctx))
        .push(build_quick_links(&ctx))
        .push(build_contact(&ctx));

    let copyright = Text::new(format!(
        "© {} {}. All Rights Reserved.",
        ctx.year,
        ctx.site.site_name()
    ))
    .size(typography::BODY_SM)
    .color(theme::muted_text_color());

    let content = Column::new()
        .spacing(spacing::XL)
        .push(columns)
        .push(
            Container::new(copyright)
                .width(Length::Fill)
                .center_x(Length::Fill),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .style(styles::container::footer)
        .into()
}

fn build_about<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let logo = Image::new(ctx.logo.clone()).height(Length::Fixed(sizing::LOGO_HEIGHT));

    let blurb = Text::new(ABOUT_BLURB)
        .size(typography::BODY)
        .color(theme::muted_text_color());

    Column::new()
        .spacing(spacing::MD)
        .width(Length::FillPortion(2))
        .push(logo)
        .push(blurb)
        .into()
}

fn build_quick_links<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut links = Column::new()
        .spacing(spacing::XS)
        .push(section_heading("Quick Links"))
        .push(link_button("Home", Message::PressHome));

    for category in ctx.categories {
        links = links.push(link_button(
            &category.name,
            Message::PressCategory(category.slug.clone()),
        ));
    }

    Container::new(links)
        .width(Length::FillPortion(1))
        .into()
}

fn build_contact<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut contact = Column::new()
        .spacing(spacing::XS)
        .push(section_heading("Contact Us"));

    if let Some(phone) = ctx.site.phone_number() {
        contact = contact.push(contact_row(format!("Phone: {phone}")));
    }

    if let Some(whatsapp) = ctx.site.whatsapp_number() {
        contact = contact.push(contact_row(format!("WhatsApp: {whatsapp}")));
        if let Some(digits) = ctx.site.whatsapp_digits() {
            contact = contact.push(contact_row(format!("wa.me/{digits}")));
        }
    }

    if let Some(facebook) = ctx.site.facebook_link() {
        contact = contact.push(contact_row(format!("Facebook: {facebook}")));
    }

    if let Some(instagram) = ctx.site.instagram_link() {
        contact = contact.push(contact_row(format!("Instagram: {instagram}")));
    }

    Container::new(contact)
        .width(Length::FillPortion(1))
        .into()
}

fn section_heading<'a>(label: &'a str) -> Element<'a, Message> {
    Text::new(label)
        .size(typography::BODY)
        .color(theme::overlay_text_color())
        .into()
}

fn link_button<'a>(label: &str, message: Message) -> Element<'a, Message> {
    button(Text::new(label.to_string()).size(typography::BODY_SM))
        .on_press(message)
        .padding([spacing::XXS, 0.0])
        .style(styles::button::nav_link(false))
        .into()
}

fn contact_row<'a>(label: String) -> Element<'a, Message> {
    Row::new()
        .align_y(Vertical::Center)
        .push(
            Text::new(label)
                .size(typography::BODY_SM)
                .color(theme::muted_text_color()),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::placeholder;

    fn sample_config() -> SiteConfig {
        SiteConfig {
            site_name: Some("Zaujain Nikah Point".to_string()),
            logo: None,
            phone_number: Some("+92 300 1234567".to_string()),
            whatsapp_number: Some("+92 300 1234567".to_string()),
            facebook_link: Some("https://facebook.com/zaujain".to_string()),
            instagram_link: None,
        }
    }

    #[test]
    fn footer_view_renders_with_full_config() {
        let site = sample_config();
        let categories = vec![Category {
            id: 1,
            name: "Floral".to_string(),
            slug: "floral".to_string(),
        }];
        let ctx = ViewContext {
            site: &site,
            categories: &categories,
            logo: placeholder::logo(),
            year: 2026,
        };
        let _element = view(ctx);
    }

    #[test]
    fn footer_view_renders_with_empty_config() {
        let site = SiteConfig::default();
        let ctx = ViewContext {
            site: &site,
            categories: &[],
            logo: placeholder::logo(),
            year: 2026,
        };
        let _element = view(ctx);
    }

    #[test]
    fn quick_links_navigate() {
        assert!(matches!(update(Message::PressHome), Event::NavigateHome));
        assert!(matches!(
            update(Message::PressCategory("classic".to_string())),
            Event::NavigateCategory(slug) if slug == "classic"
        ));
    }
}
