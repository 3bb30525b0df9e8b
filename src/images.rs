// SPDX-License-Identifier: MPL-2.0
//! Remote image decoding and the per-URL handle cache.
//!
//! Product photos and the site logo arrive as encoded bytes over HTTP. The
//! bytes are decoded eagerly with the `image` crate so a broken payload is
//! detected at fetch time (and falls back to the placeholder) instead of
//! failing silently inside the renderer.

use crate::error::Result;
use iced::widget::image;
use std::collections::HashMap;

/// Lifecycle of one remote image URL.
#[derive(Debug, Clone)]
pub enum ImageState {
    /// Fetch issued, bytes not yet decoded.
    Loading,
    /// Decoded and ready to render.
    Ready(image::Handle),
    /// Fetch or decode failed. Terminal: the URL is not retried and the
    /// placeholder is rendered instead.
    Failed,
}

/// Cache of fetched images keyed by URL.
///
/// Entries are never evicted; a browsing session touches at most a few dozen
/// catalog photos.
#[derive(Debug, Clone, Default)]
pub struct ImageCache {
    entries: HashMap<String, ImageState>,
}

impl ImageCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `url` as loading and reports whether a fetch should be issued.
    /// Returns `false` when the URL is already loading, ready, or failed.
    pub fn begin(&mut self, url: &str) -> bool {
        if self.entries.contains_key(url) {
            return false;
        }
        self.entries.insert(url.to_string(), ImageState::Loading);
        true
    }

    pub fn insert_ready(&mut self, url: &str, handle: image::Handle) {
        self.entries
            .insert(url.to_string(), ImageState::Ready(handle));
    }

    pub fn insert_failed(&mut self, url: &str) {
        self.entries.insert(url.to_string(), ImageState::Failed);
    }

    #[must_use]
    pub fn state(&self, url: &str) -> Option<&ImageState> {
        self.entries.get(url)
    }

    /// The decoded handle for `url`, if the fetch has completed successfully.
    #[must_use]
    pub fn handle(&self, url: &str) -> Option<&image::Handle> {
        match self.entries.get(url) {
            Some(ImageState::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    #[must_use]
    pub fn has_failed(&self, url: &str) -> bool {
        matches!(self.entries.get(url), Some(ImageState::Failed))
    }
}

/// Decodes encoded image bytes (JPEG, PNG, ...) into an Iced image handle.
///
/// # Errors
///
/// Returns an error if the bytes are not a decodable image.
pub fn decode_handle(bytes: Vec<u8>) -> Result<image::Handle> {
    let decoded = image_rs::load_from_memory(&bytes)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(image::Handle::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_handle() -> image::Handle {
        image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn begin_requests_fetch_only_once() {
        let mut cache = ImageCache::new();
        assert!(cache.begin("/media/a.jpg"));
        assert!(!cache.begin("/media/a.jpg"));
        assert!(matches!(
            cache.state("/media/a.jpg"),
            Some(ImageState::Loading)
        ));
    }

    #[test]
    fn ready_entries_expose_their_handle() {
        let mut cache = ImageCache::new();
        cache.begin("/media/a.jpg");
        cache.insert_ready("/media/a.jpg", sample_handle());
        assert!(cache.handle("/media/a.jpg").is_some());
        assert!(!cache.has_failed("/media/a.jpg"));
    }

    #[test]
    fn failed_entries_are_not_retried() {
        let mut cache = ImageCache::new();
        cache.begin("/media/broken.jpg");
        cache.insert_failed("/media/broken.jpg");
        assert!(cache.has_failed("/media/broken.jpg"));
        // A later begin() must not resurrect the fetch.
        assert!(!cache.begin("/media/broken.jpg"));
    }

    #[test]
    fn unknown_urls_have_no_state() {
        let cache = ImageCache::new();
        assert!(cache.state("/media/unknown.jpg").is_none());
        assert!(cache.handle("/media/unknown.jpg").is_none());
        assert!(!cache.has_failed("/media/unknown.jpg"));
    }

    #[test]
    fn decode_handle_rejects_garbage_bytes() {
        let result = decode_handle(vec![0, 1, 2, 3, 4]);
        assert!(result.is_err());
    }

    #[test]
    fn decode_handle_accepts_a_valid_png() {
        // Encode a 2x2 image through the same crate that decodes it.
        let mut bytes = Vec::new();
        let buffer = image_rs::RgbaImage::from_pixel(2, 2, image_rs::Rgba([120, 40, 200, 255]));
        image_rs::DynamicImage::ImageRgba8(buffer)
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image_rs::ImageFormat::Png,
            )
            .expect("encoding to png should succeed");

        assert!(decode_handle(bytes).is_ok());
    }
}
