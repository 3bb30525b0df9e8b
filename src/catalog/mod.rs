// SPDX-License-Identifier: MPL-2.0
//! Catalog domain types as served by the remote catalog service.
//!
//! These are plain `serde` models of the JSON payloads described in the
//! service API; the application never mutates them. Helper methods capture
//! the small display rules (cover image, contact formatting, description
//! truncation) so the UI layers stay declarative.

mod client;

pub use client::CatalogClient;

use crate::config::FALLBACK_SITE_NAME;
use serde::Deserialize;

/// Maximum description length shown on a product card before truncation.
const CARD_DESCRIPTION_MAX_CHARS: usize = 100;

/// One photo of a product. The `image` field is the URL the bytes are
/// fetched from; order within [`Product::images`] defines carousel traversal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductImage {
    #[serde(default)]
    pub id: Option<u64>,
    pub image: String,
}

/// A product category. `slug` addresses the category view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

/// A catalog product with its ordered photo list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub images: Vec<ProductImage>,
}

impl Product {
    /// The first image, used as the card thumbnail.
    #[must_use]
    pub fn cover_image(&self) -> Option<&ProductImage> {
        self.images.first()
    }

    /// Whether a card press may open the carousel for this product.
    #[must_use]
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }

    /// Description truncated for the card, with an ellipsis only when text
    /// was actually cut.
    #[must_use]
    pub fn short_description(&self) -> String {
        let description = self.description.as_deref().unwrap_or("");
        let mut chars = description.char_indices();
        match chars.nth(CARD_DESCRIPTION_MAX_CHARS) {
            Some((byte_index, _)) => format!("{}...", &description[..byte_index]),
            None => description.to_string(),
        }
    }
}

/// Remote site configuration. Every field is optional; the service serializes
/// blank text fields as empty strings, which the accessors treat as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub whatsapp_number: Option<String>,
    #[serde(default)]
    pub facebook_link: Option<String>,
    #[serde(default)]
    pub instagram_link: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

impl SiteConfig {
    /// Site name, falling back to the hardcoded default when the remote
    /// configuration is missing or blank.
    #[must_use]
    pub fn site_name(&self) -> &str {
        non_empty(self.site_name.as_deref()).unwrap_or(FALLBACK_SITE_NAME)
    }

    /// Logo URL path, if configured.
    #[must_use]
    pub fn logo(&self) -> Option<&str> {
        non_empty(self.logo.as_deref())
    }

    #[must_use]
    pub fn phone_number(&self) -> Option<&str> {
        non_empty(self.phone_number.as_deref())
    }

    #[must_use]
    pub fn whatsapp_number(&self) -> Option<&str> {
        non_empty(self.whatsapp_number.as_deref())
    }

    /// WhatsApp number reduced to digits, the form `wa.me` links expect.
    /// Returns `None` when the configured number contains no digits at all.
    #[must_use]
    pub fn whatsapp_digits(&self) -> Option<String> {
        let digits: String = self
            .whatsapp_number()?
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        if digits.is_empty() {
            None
        } else {
            Some(digits)
        }
    }

    #[must_use]
    pub fn facebook_link(&self) -> Option<&str> {
        non_empty(self.facebook_link.as_deref())
    }

    #[must_use]
    pub fn instagram_link(&self) -> Option<&str> {
        non_empty(self.instagram_link.as_deref())
    }

    /// Whether any contact row should be rendered in the footer.
    #[must_use]
    pub fn has_contact_info(&self) -> bool {
        self.phone_number().is_some()
            || self.whatsapp_number().is_some()
            || self.facebook_link().is_some()
            || self.instagram_link().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_with_description(description: &str) -> Product {
        Product {
            id: 1,
            name: "Classic Gold".to_string(),
            description: Some(description.to_string()),
            is_featured: false,
            images: Vec::new(),
        }
    }

    #[test]
    fn cover_image_is_first_image() {
        let product = Product {
            id: 7,
            name: "Floral Set".to_string(),
            description: None,
            is_featured: true,
            images: vec![
                ProductImage {
                    id: Some(1),
                    image: "/media/product_images/a.jpg".to_string(),
                },
                ProductImage {
                    id: Some(2),
                    image: "/media/product_images/b.jpg".to_string(),
                },
            ],
        };
        assert_eq!(
            product.cover_image().map(|i| i.image.as_str()),
            Some("/media/product_images/a.jpg")
        );
        assert!(product.has_images());
    }

    #[test]
    fn product_without_images_has_no_cover() {
        let product = product_with_description("anything");
        assert!(product.cover_image().is_none());
        assert!(!product.has_images());
    }

    #[test]
    fn short_description_passes_through_short_text() {
        let product = product_with_description("A short blurb.");
        assert_eq!(product.short_description(), "A short blurb.");
    }

    #[test]
    fn short_description_truncates_long_text_with_ellipsis() {
        let long = "x".repeat(150);
        let product = product_with_description(&long);
        let short = product.short_description();
        assert_eq!(short.chars().count(), 103); // 100 chars + "..."
        assert!(short.ends_with("..."));
    }

    #[test]
    fn short_description_does_not_add_ellipsis_at_exact_limit() {
        let exact = "y".repeat(100);
        let product = product_with_description(&exact);
        assert_eq!(product.short_description(), exact);
    }

    #[test]
    fn short_description_handles_multibyte_text() {
        let long = "é".repeat(120);
        let product = product_with_description(&long);
        let short = product.short_description();
        assert!(short.ends_with("..."));
        assert_eq!(short.chars().count(), 103);
    }

    #[test]
    fn site_name_falls_back_when_missing_or_blank() {
        let empty = SiteConfig::default();
        assert_eq!(empty.site_name(), FALLBACK_SITE_NAME);

        let blank = SiteConfig {
            site_name: Some("   ".to_string()),
            ..SiteConfig::default()
        };
        assert_eq!(blank.site_name(), FALLBACK_SITE_NAME);

        let named = SiteConfig {
            site_name: Some("Atelier Cards".to_string()),
            ..SiteConfig::default()
        };
        assert_eq!(named.site_name(), "Atelier Cards");
    }

    #[test]
    fn whatsapp_digits_strips_formatting() {
        let config = SiteConfig {
            whatsapp_number: Some("+92 (300) 123-4567".to_string()),
            ..SiteConfig::default()
        };
        assert_eq!(config.whatsapp_digits().as_deref(), Some("923001234567"));
    }

    #[test]
    fn whatsapp_digits_is_none_without_digits() {
        let config = SiteConfig {
            whatsapp_number: Some("call me".to_string()),
            ..SiteConfig::default()
        };
        assert_eq!(config.whatsapp_digits(), None);
    }

    #[test]
    fn blank_fields_do_not_count_as_contact_info() {
        let config = SiteConfig {
            phone_number: Some(String::new()),
            whatsapp_number: Some("  ".to_string()),
            ..SiteConfig::default()
        };
        assert!(!config.has_contact_info());
    }

    #[test]
    fn decodes_product_payload() {
        let payload = r#"
            [{
                "id": 3,
                "name": "Royal Blue",
                "description": "Hand-finished invitation card.",
                "category": 1,
                "category_name": "Premium",
                "is_featured": true,
                "images": [
                    {"id": 10, "image": "/media/product_images/royal-1.jpg"},
                    {"id": 11, "image": "/media/product_images/royal-2.jpg"}
                ]
            }]
        "#;
        let products: Vec<Product> = serde_json::from_str(payload).expect("payload should decode");
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].images.len(), 2);
        assert!(products[0].is_featured);
    }

    #[test]
    fn decodes_site_config_with_null_logo() {
        let payload = r#"
            {
                "site_name": "Zaujain Nikah Point",
                "logo": null,
                "phone_number": "",
                "whatsapp_number": "",
                "facebook_link": "",
                "instagram_link": ""
            }
        "#;
        let config: SiteConfig = serde_json::from_str(payload).expect("payload should decode");
        assert_eq!(config.logo(), None);
        assert!(!config.has_contact_info());
    }
}
