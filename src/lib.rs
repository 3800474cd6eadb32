// SPDX-License-Identifier: MPL-2.0
//! `iced_tiles` is a reorderable tile grid built with the Iced GUI framework.
//!
//! Tiles are laid out in a fixed number of columns and can be dragged onto
//! one another to swap places. The [`grid`] module holds the pure layout and
//! ordering logic; [`ui::grid`] turns it into an Iced component; [`app`]
//! hosts the component in a small image-arranging application.

#![doc(html_root_url = "https://docs.rs/iced_tiles/0.1.0")]

pub mod app;
pub mod directory_scanner;
pub mod error;
pub mod grid;
pub mod i18n;
pub mod ui;
