// SPDX-License-Identifier: MPL-2.0
//! Framework-independent core of the reorderable tile grid.
//!
//! ```text
//! container width ──► layout ──► geometry (slot → pixel) ──► tile rest position
//! gesture delta ──► drag session ──► geometry (pixel → slot) ──► positions (swap)
//! ```
//!
//! Nothing here touches widgets or event delivery; `ui::grid` wires these
//! pieces to Iced.

pub mod drag;
pub mod geometry;
pub mod layout;
pub mod positions;
pub mod spring;

pub use drag::DragSession;
pub use geometry::{clamp, pixel_to_slot, slot_to_pixel, GridMetrics};
pub use layout::{GridLayout, MIN_TILE_WIDTH, TILE_ASPECT_RATIO};
pub use positions::Positions;
pub use spring::SpringPoint;
