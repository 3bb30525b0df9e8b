// SPDX-License-Identifier: MPL-2.0
//! Carousel session state machine.
//!
//! A [`GallerySession`] owns the image list being viewed full-screen and the
//! current position within it. Exactly one session exists (a field of the
//! application root); it is either closed (nothing rendered, navigation keys
//! inert) or open over a non-empty, immutable snapshot of one product's
//! photos. Navigation wraps circularly in both directions, so the current
//! index is always valid while the session is open.

use crate::catalog::ProductImage;

/// The transient open/closed viewing state of the image carousel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GallerySession {
    images: Vec<ProductImage>,
    current_index: usize,
    open: bool,
}

impl GallerySession {
    /// Creates a closed session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the session over `images`, starting at `initial_index`.
    ///
    /// The image list is snapshotted: later catalog refreshes cannot change
    /// what an open session displays. Requests with an empty list or an
    /// out-of-range index leave the session closed; callers are expected to
    /// guard, so this is a programming error rather than a runtime failure.
    pub fn open(&mut self, images: Vec<ProductImage>, initial_index: usize) {
        if images.is_empty() || initial_index >= images.len() {
            tracing::debug!(
                initial_index,
                image_count = images.len(),
                "refusing to open gallery session"
            );
            return;
        }
        self.images = images;
        self.current_index = initial_index;
        self.open = true;
    }

    /// Advances to the next image, wrapping from the last back to the first.
    /// Ignored while closed.
    pub fn next(&mut self) {
        if self.open {
            self.current_index = (self.current_index + 1) % self.images.len();
        }
    }

    /// Steps back to the previous image, wrapping from the first to the last.
    /// Ignored while closed.
    pub fn previous(&mut self) {
        if self.open {
            let len = self.images.len();
            self.current_index = (self.current_index + len - 1) % len;
        }
    }

    /// Closes the session and drops the image snapshot. Idempotent.
    pub fn close(&mut self) {
        self.images = Vec::new();
        self.current_index = 0;
        self.open = false;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The image currently displayed, or `None` while closed.
    #[must_use]
    pub fn current_image(&self) -> Option<&ProductImage> {
        if self.open {
            self.images.get(self.current_index)
        } else {
            None
        }
    }

    /// Current position (0-indexed), or `None` while closed.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        if self.open {
            Some(self.current_index)
        } else {
            None
        }
    }

    /// Number of images in the open session; zero while closed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// The snapshotted image list. Empty while closed.
    #[must_use]
    pub fn images(&self) -> &[ProductImage] {
        &self.images
    }
}
