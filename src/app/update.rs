// SPDX-License-Identifier: MPL-2.0
//! Grid message handling for the application.

use super::Status;
use crate::ui::grid::{self, Effect, GridItem, State as GridState};
use crate::ui::image_grid::ImageTile;

/// State touched while handling a grid message.
pub struct UpdateContext<'a> {
    pub grid: &'a mut GridState<ImageTile>,
    pub tiles: &'a mut Vec<ImageTile>,
    pub status: &'a mut Status,
    pub last_pressed: &'a mut Option<String>,
}

/// Forwards `message` to the grid and applies the resulting effect.
pub fn handle_grid_message(ctx: &mut UpdateContext<'_>, message: grid::Message) {
    if let grid::Message::TilePressed(id) = &message {
        *ctx.last_pressed = Some(id.clone());
    }

    let effect = ctx.grid.handle(message);
    apply_effect(ctx, effect);
}

/// Adopts a reported order as the new collection.
pub fn apply_effect(ctx: &mut UpdateContext<'_>, effect: Effect<ImageTile>) {
    let Effect::OrderChanged { positions, order } = effect else {
        return;
    };

    if let Some(id) = ctx.last_pressed.take() {
        if let Some(slot) = positions.slot_of(&id) {
            tracing::info!(id = %id, slot, "tile moved");
            *ctx.status = Status::Moved { id, slot };
        }
    }

    tracing::debug!(
        order = ?order.iter().map(GridItem::id).collect::<Vec<_>>(),
        "order changed"
    );
    *ctx.tiles = order;
    // Feeding the reported order back matches the current positions, so the
    // grid reports nothing new.
    let echo = ctx.grid.set_items(ctx.tiles.clone());
    debug_assert!(matches!(echo, Effect::None));
}
