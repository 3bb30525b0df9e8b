// SPDX-License-Identifier: MPL-2.0
//! `card_gallery` is a native catalog browser for wedding invitation card
//! designs, built with the Iced GUI framework.
//!
//! All catalog data (site configuration, categories, products, photos) comes
//! from a remote HTTP JSON service; the application renders it, routes
//! between a home view and per-category views, and offers a full-window
//! carousel for browsing a product's photos.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gallery;
pub mod images;
pub mod ui;
