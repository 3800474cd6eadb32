// SPDX-License-Identifier: MPL-2.0
//! Image tiles rendered inside the reorderable grid.

use crate::ui::design_tokens::{accent_for, spacing, typography};
use crate::ui::grid::{GridItem, Message, TileView};
use crate::ui::styles;
use iced::widget::{image, text, Column, Container, Stack};
use iced::{alignment, ContentFit, Element, Length};
use std::path::{Path, PathBuf};

/// A tile showing an image file, or a flat accent color when there is none.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTile {
    pub id: String,
    pub path: Option<PathBuf>,
    pub label: Option<String>,
}

impl ImageTile {
    /// Tile for an image on disk, identified by its file name.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let id = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let label = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned());
        Self {
            id,
            path: Some(path.to_path_buf()),
            label,
        }
    }

    /// Placeholder tile without an image.
    #[must_use]
    pub fn placeholder(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: None,
            label: Some(label.into()),
        }
    }
}

impl GridItem for ImageTile {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Placeholder tiles shown when no image folder is available.
#[must_use]
pub fn sample_tiles(count: usize) -> Vec<ImageTile> {
    (1..=count)
        .map(|n| ImageTile::placeholder(format!("sample-{n}"), n.to_string()))
        .collect()
}

/// Renders a tile's content. `locked_label` is shown on tiles that cannot
/// be dragged.
pub fn render<'a>(tile: &TileView<'a, ImageTile>, locked_label: &str) -> Element<'a, Message> {
    let item = tile.item;

    let body: Element<'a, Message> = match &item.path {
        Some(path) => image(image::Handle::from_path(path))
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Container::new(text(item.label.clone().unwrap_or_default()).size(typography::TITLE_MD))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::placeholder(accent_for(&item.id)))
            .into(),
    };

    let mut caption = Column::new().spacing(2.0);
    if item.path.is_some() {
        if let Some(label) = &item.label {
            caption = caption.push(text(label.clone()).size(typography::BODY));
        }
    }
    if !tile.is_draggable {
        caption = caption.push(text(locked_label.to_owned()).size(typography::CAPTION));
    }

    let overlay = Container::new(
        Container::new(caption)
            .padding([spacing::XS / 2.0, spacing::XS])
            .width(Length::Fill)
            .style(styles::container::caption),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(alignment::Vertical::Bottom);

    let has_caption = (item.path.is_some() && item.label.is_some()) || !tile.is_draggable;
    let content: Element<'a, Message> = if has_caption {
        Stack::new().push(body).push(overlay).into()
    } else {
        body
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .into()
}
