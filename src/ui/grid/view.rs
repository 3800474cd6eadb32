// SPDX-License-Identifier: MPL-2.0
//! Renders the grid as a stack of absolutely placed tiles.
//!
//! Each tile is its own layer, pinned inside the grid bounds. Whatever part
//! of the live position falls outside those bounds, and the lift of the
//! active tile, is applied by a [`float`] so dragged tiles can leave the
//! grid without being squeezed by its layout. Layers follow
//! [`State::tile_views`] so the active tile is drawn above the others.
//!
//! The grid measures its own width with a [`sensor`] and reports it as
//! [`Message::ContainerResized`].

use super::component::{GridItem, Message, State, TileView};
use crate::grid::GridLayout;
use crate::ui::styles;
use iced::mouse;
use iced::widget::{self, float, mouse_area, pin, sensor, Column, Container, Stack};
use iced::{Element, Length, Point, Theme, Vector};

/// Scale applied to the tile being dragged.
pub const ACTIVE_SCALE: f32 = 1.05;

/// Renders every tile; `render_item` supplies the tile content.
pub fn view<'a, T, F>(state: &'a State<T>, render_item: F) -> Element<'a, Message>
where
    T: GridItem,
    F: Fn(&TileView<'a, T>) -> Element<'a, Message>,
{
    let layout = *state.layout();
    let base = Column::new()
        .width(Length::Fixed(layout.content_width()))
        .height(Length::Fixed(layout.container_height));

    let stack = state
        .tile_views()
        .into_iter()
        .fold(Stack::new().push(base), |stack, tile| {
            let content = render_item(&tile);
            stack.push(place_tile(&tile, &layout, content))
        });

    let grid = Container::new(
        stack
            .width(Length::Fixed(layout.content_width()))
            .height(Length::Fixed(layout.container_height)),
    )
    .width(Length::Fill);

    sensor(grid)
        .on_resize(|size| Message::ContainerResized(size.width))
        .into()
}

/// Where a tile layer is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Placement {
    /// Pinned top-left corner, inside the grid bounds.
    anchor: Point,
    /// Remainder of the live position beyond the grid bounds.
    overflow: Vector,
    scale: f32,
}

impl Placement {
    fn of<T>(tile: &TileView<'_, T>, layout: &GridLayout) -> Self {
        let max_x = (layout.content_width() - layout.tile_width).max(0.0);
        let max_y = (layout.container_height - layout.tile_height).max(0.0);
        let anchor = Point::new(
            tile.position.x.clamp(0.0, max_x),
            tile.position.y.clamp(0.0, max_y),
        );

        Self {
            anchor,
            overflow: tile.position - anchor,
            scale: if tile.is_active { ACTIVE_SCALE } else { 1.0 },
        }
    }
}

/// Widget id carried by the tile body, when a test id prefix is set.
fn tile_widget_id<T>(tile: &TileView<'_, T>) -> Option<widget::Id> {
    tile.test_id.clone().map(widget::Id::from)
}

fn place_tile<'a, T: GridItem>(
    tile: &TileView<'a, T>,
    layout: &GridLayout,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let placement = Placement::of(tile, layout);
    let is_active = tile.is_active;

    let mut body = Container::new(content)
        .width(Length::Fixed(layout.tile_width))
        .height(Length::Fixed(layout.tile_height))
        .style(move |theme: &Theme| styles::container::tile(theme, is_active));
    if let Some(id) = tile_widget_id(tile) {
        body = body.id(id);
    }

    let body: Element<'a, Message> = if tile.is_draggable {
        let interaction = if is_active {
            mouse::Interaction::Grabbing
        } else {
            mouse::Interaction::Grab
        };
        mouse_area(body)
            .on_press(Message::TilePressed(tile.item.id().to_owned()))
            .interaction(interaction)
            .into()
    } else {
        body.into()
    };

    let overflow = placement.overflow;
    let lifted = float(body)
        .scale(placement.scale)
        .translate(move |_bounds, _viewport| overflow);

    pin(lifted)
        .x(placement.anchor.x)
        .y(placement.anchor.y)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
