// SPDX-License-Identifier: MPL-2.0
//! Iced component hosting the reorderable grid.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator: items, positions, layout, observers)
//!     ├── pointer  - absolute cursor → cumulative delta for the grabbed tile
//!     ├── tile     - per-tile drag session and glide animation
//!     └── view     - stacked, absolutely placed tiles
//! ```

pub mod component;
pub mod pointer;
pub mod tile;
pub mod view;

pub use component::{
    test_id, Draggable, Effect, GridItem, Message, Settings, State, TileView, DEFAULT_COLUMNS,
    DEFAULT_SPACING,
};
pub use view::view;
