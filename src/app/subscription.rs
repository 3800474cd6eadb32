// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native pointer and window events are translated into grid messages.
//! Animation frames are only requested while a tile is gliding. The grid
//! width is reported by the grid view itself.

use super::Message;
use crate::ui::grid;
use iced::{event, mouse, window, Event, Subscription};

/// Pointer and window events routed to the grid.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| route_event(&event))
}

/// Frame ticks, only while `animating`.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(|at| Message::Grid(grid::Message::Tick(at)))
    } else {
        Subscription::none()
    }
}

/// Translates one native event. Events are routed regardless of capture
/// status since tiles sit inside widgets that capture presses.
fn route_event(event: &Event) -> Option<Message> {
    let message = match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            grid::Message::PointerMoved(*position)
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            grid::Message::PointerReleased
        }
        Event::Window(window::Event::Unfocused) => grid::Message::PointerLost,
        _ => return None,
    };
    Some(Message::Grid(message))
}
