// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::app::config::DEFAULT_WINDOW_WIDTH;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::grid::{self, State as GridState};
use crate::ui::image_grid::{self, ImageTile};
use crate::ui::styles;
use iced::widget::{scrollable, text, Column, Container};
use iced::{Element, Length};

/// Space between the window edge and the page content.
pub const PAGE_PADDING: f32 = spacing::LG;

/// Grid width assumed until the grid reports its measured width.
pub const INITIAL_GRID_WIDTH: f32 = DEFAULT_WINDOW_WIDTH - 2.0 * PAGE_PADDING;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub grid: &'a GridState<ImageTile>,
    pub status: String,
}

/// Renders the heading, the grid and the status bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let locked_label = ctx.i18n.tr("tile-locked");

    let tiles = grid::view(ctx.grid, move |tile| image_grid::render(tile, &locked_label))
        .map(Message::Grid);

    let header = Column::new()
        .spacing(spacing::XS / 2.0)
        .push(text(ctx.i18n.tr("heading")).size(typography::TITLE_MD))
        .push(text(ctx.i18n.tr("subheading")).size(typography::CAPTION));

    let status = Container::new(text(ctx.status).size(typography::CAPTION))
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(styles::container::status);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(
            scrollable(tiles)
                .height(Length::Fill)
                .on_scroll(|viewport| {
                    Message::Grid(grid::Message::ViewportScrolled(viewport.absolute_offset()))
                }),
        )
        .push(status);

    Container::new(content)
        .padding(PAGE_PADDING)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
