// SPDX-License-Identifier: MPL-2.0
//! Reorderable grid component.
//!
//! Owns the item collection, the authoritative [`Positions`], one
//! [`tile::State`] per item and the derived [`GridLayout`]. Gesture
//! messages move tiles visually; only a release touches the positions, via
//! a single pairwise swap. Observers learn about order changes through
//! [`Effect::OrderChanged`], emitted at most once per distinct order.

use super::pointer::Tracker;
use super::tile;
use crate::grid::{pixel_to_slot, slot_to_pixel, GridLayout, Positions};
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Point, Vector};
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default number of columns.
pub const DEFAULT_COLUMNS: usize = 3;

/// Default gap between tiles and around the grid, in pixels.
pub const DEFAULT_SPACING: f32 = 12.0;

/// Longest frame step fed to the springs; longer stalls are not replayed.
const MAX_FRAME_STEP: Duration = Duration::from_millis(64);

/// Anything the grid can lay out. Only the identity matters to the grid.
pub trait GridItem: Clone {
    /// Stable identity, unique within a collection.
    fn id(&self) -> &str;
}

/// Whether tiles may be dragged.
pub enum Draggable<T> {
    /// Same answer for every item.
    Fixed(bool),
    /// Decided per item, on every render and every gesture start.
    Predicate(Arc<dyn Fn(&T) -> bool + Send + Sync>),
}

impl<T> Draggable<T> {
    pub fn predicate(f: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self::Predicate(Arc::new(f))
    }

    #[must_use]
    pub fn allows(&self, item: &T) -> bool {
        match self {
            Self::Fixed(value) => *value,
            Self::Predicate(f) => f(item),
        }
    }
}

impl<T> Default for Draggable<T> {
    fn default() -> Self {
        Self::Fixed(true)
    }
}

impl<T> Clone for Draggable<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Fixed(value) => Self::Fixed(*value),
            Self::Predicate(f) => Self::Predicate(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for Draggable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Grid configuration supplied by the host.
#[derive(Debug, Clone)]
pub struct Settings<T> {
    pub columns: usize,
    pub spacing: f32,
    pub draggable: Draggable<T>,
    /// When set, tiles carry the identifier `<prefix>-<id>`.
    pub test_id_prefix: Option<String>,
    /// Container width that overrides layout reports when positive.
    pub fixed_width: Option<f32>,
}

impl<T> Default for Settings<T> {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            spacing: DEFAULT_SPACING,
            draggable: Draggable::default(),
            test_id_prefix: None,
            fixed_width: None,
        }
    }
}

/// Messages for the grid component.
#[derive(Debug, Clone)]
pub enum Message {
    /// The host layout reported a new container width.
    ContainerResized(f32),
    /// The pointer went down on a tile.
    TilePressed(String),
    /// Absolute cursor position.
    PointerMoved(Point),
    /// Scroll offset of the viewport hosting the grid.
    ViewportScrolled(AbsoluteOffset),
    PointerReleased,
    /// The host lost the pointer (window unfocused, gesture abandoned).
    PointerLost,
    /// Direct gesture delivery for hosts with their own gesture source.
    Tile { id: String, message: tile::Message },
    /// Animation frame.
    Tick(Instant),
}

/// Effects produced by the grid component.
#[derive(Debug, Clone)]
pub enum Effect<T> {
    None,
    /// The resolved order differs from the last one reported.
    OrderChanged {
        positions: Positions,
        /// Items sorted by slot.
        order: Vec<T>,
    },
}

/// Render request for one tile.
#[derive(Debug, Clone)]
pub struct TileView<'a, T> {
    pub item: &'a T,
    pub position: Point,
    pub is_active: bool,
    pub is_draggable: bool,
    pub test_id: Option<String>,
}

/// Builds the deterministic `<prefix>-<id>` identifier.
#[must_use]
pub fn test_id(prefix: Option<&str>, id: &str) -> Option<String> {
    prefix.map(|prefix| format!("{prefix}-{id}"))
}

/// Grid component state.
#[derive(Debug, Clone)]
pub struct State<T> {
    items: Vec<T>,
    positions: Positions,
    tiles: HashMap<String, tile::State>,
    settings: Settings<T>,
    /// Last positive width reported by the host layout.
    layout_width: f32,
    layout: GridLayout,
    pointer: Tracker,
    last_tick: Option<Instant>,
    last_notified: Option<Positions>,
}

impl<T: GridItem> State<T> {
    /// Mounts the grid. Initial slots follow the order of `items`.
    ///
    /// `initial_width` seeds the container width until the host reports
    /// one. The returned effect reports the initial order.
    pub fn new(items: Vec<T>, settings: Settings<T>, initial_width: f32) -> (Self, Effect<T>) {
        let positions = Positions::from_ids(items.iter().map(GridItem::id));
        let mut state = Self {
            items,
            positions,
            tiles: HashMap::new(),
            settings,
            layout_width: initial_width,
            layout: GridLayout::compute(0.0, 0, 0.0, 0),
            pointer: Tracker::default(),
            last_tick: None,
            last_notified: None,
        };
        state.relayout();
        let effect = state.notify();
        (state, effect)
    }

    /// Replaces the item collection and reconciles slots.
    pub fn set_items(&mut self, items: Vec<T>) -> Effect<T> {
        self.items = items;
        let reconciled = match self.positions.reconcile(self.items.iter().map(GridItem::id)) {
            Cow::Owned(next) => Some(next),
            Cow::Borrowed(_) => None,
        };
        if let Some(next) = reconciled {
            tracing::debug!(count = next.len(), "positions reconciled");
            self.positions = next;
        }
        self.relayout();
        self.notify()
    }

    /// Replaces the grid settings and lays the tiles out again.
    pub fn set_settings(&mut self, settings: Settings<T>) {
        self.settings = settings;
        self.relayout();
    }

    /// Handle a grid message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect<T> {
        match msg {
            Message::ContainerResized(width) => {
                if width > 0.0 && width != self.layout_width {
                    self.layout_width = width;
                    self.relayout();
                }
                Effect::None
            }
            Message::TilePressed(id) => {
                if self.is_draggable(&id) && self.pointer.grab(&id) {
                    self.handle_tile(&id, tile::Message::Grab)
                } else {
                    Effect::None
                }
            }
            Message::PointerMoved(position) => {
                if let Some((id, delta)) = self.pointer.cursor_moved(position) {
                    if let Some(tile) = self.tiles.get_mut(id) {
                        tile.handle(tile::Message::Move(delta));
                    }
                }
                Effect::None
            }
            Message::ViewportScrolled(offset) => {
                let offset = Vector::new(offset.x, offset.y);
                if let Some((id, delta)) = self.pointer.scrolled(offset) {
                    if let Some(tile) = self.tiles.get_mut(id) {
                        tile.handle(tile::Message::Move(delta));
                    }
                }
                Effect::None
            }
            Message::PointerReleased => match self.pointer.release() {
                Some(id) => self.handle_tile(&id, tile::Message::Release),
                None => Effect::None,
            },
            Message::PointerLost => match self.pointer.release() {
                Some(id) => self.handle_tile(&id, tile::Message::Cancel),
                None => Effect::None,
            },
            Message::Tile { id, message } => {
                if message == tile::Message::Grab && !self.is_draggable(&id) {
                    return Effect::None;
                }
                let ends_gesture =
                    matches!(message, tile::Message::Release | tile::Message::Cancel);
                if ends_gesture && self.pointer.grabbed() == Some(id.as_str()) {
                    self.pointer.release();
                }
                self.handle_tile(&id, message)
            }
            Message::Tick(now) => {
                self.tick(now);
                Effect::None
            }
        }
    }

    fn handle_tile(&mut self, id: &str, msg: tile::Message) -> Effect<T> {
        let Some(tile) = self.tiles.get_mut(id) else {
            return Effect::None;
        };
        match tile.handle(msg) {
            tile::Effect::Released(position) => self.commit_release(id, position),
            tile::Effect::Cancelled => {
                tracing::debug!(id = %id, "drag cancelled");
                Effect::None
            }
            tile::Effect::None => Effect::None,
        }
    }

    /// Resolves the slot under `position` and swaps `id` into it.
    fn commit_release(&mut self, id: &str, position: Point) -> Effect<T> {
        let target = pixel_to_slot(position, &self.layout.metrics(), self.positions.len());

        let swapped = match self.positions.resolve_swap(id, target) {
            Cow::Owned(next) => Some(next),
            Cow::Borrowed(_) => None,
        };
        let Some(next) = swapped else {
            tracing::debug!(id = %id, slot = target, "drop on own slot");
            return Effect::None;
        };

        tracing::debug!(id = %id, slot = target, "tile swapped");
        self.positions = next;
        self.relayout();
        self.notify()
    }

    fn tick(&mut self, now: Instant) {
        let dt = self
            .last_tick
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last))
            .min(MAX_FRAME_STEP);

        for tile in self.tiles.values_mut() {
            tile.tick(dt);
        }

        self.last_tick = if self.is_animating() { Some(now) } else { None };
    }

    /// Recomputes the layout and points every tile at its slot, creating
    /// tiles for new items and dropping tiles for removed ones.
    fn relayout(&mut self) {
        self.layout = GridLayout::compute(
            self.container_width(),
            self.settings.columns,
            self.settings.spacing,
            self.positions.len(),
        );
        let metrics = self.layout.metrics();

        let positions = &self.positions;
        self.tiles.retain(|id, _| positions.slot_of(id).is_some());

        for (id, slot) in self.positions.iter() {
            let rest = slot_to_pixel(slot, &metrics);
            self.tiles
                .entry(id.to_owned())
                .and_modify(|tile| tile.set_rest(rest))
                .or_insert_with(|| tile::State::new(rest));
        }
    }

    /// Emits `OrderChanged` unless these positions were already reported.
    fn notify(&mut self) -> Effect<T> {
        if self.last_notified.as_ref() == Some(&self.positions) {
            return Effect::None;
        }
        self.last_notified = Some(self.positions.clone());
        Effect::OrderChanged {
            positions: self.positions.clone(),
            order: self.ordered_items().into_iter().cloned().collect(),
        }
    }

    fn is_draggable(&self, id: &str) -> bool {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .is_some_and(|item| self.settings.draggable.allows(item))
    }

    /// Width used for layout: the configured fixed width when positive,
    /// otherwise the last reported width.
    #[must_use]
    pub fn container_width(&self) -> f32 {
        match self.settings.fixed_width {
            Some(width) if width > 0.0 => width,
            _ => self.layout_width,
        }
    }

    /// Items sorted by slot, one entry per identity.
    #[must_use]
    pub fn ordered_items(&self) -> Vec<&T> {
        let mut seen = HashSet::new();
        let mut ordered: Vec<&T> = self
            .items
            .iter()
            .filter(|&item| seen.insert(item.id()))
            .collect();
        ordered.sort_by_key(|item| self.positions.slot_of(item.id()).unwrap_or(0));
        ordered
    }

    /// Render requests in paint order: by slot, active tiles last.
    #[must_use]
    pub fn tile_views(&self) -> Vec<TileView<'_, T>> {
        let prefix = self.settings.test_id_prefix.as_deref();
        let mut views: Vec<TileView<'_, T>> = self
            .ordered_items()
            .into_iter()
            .filter_map(|item| {
                let tile = self.tiles.get(item.id())?;
                Some(TileView {
                    item,
                    position: tile.display_position(),
                    is_active: tile.is_active(),
                    is_draggable: self.settings.draggable.allows(item),
                    test_id: test_id(prefix, item.id()),
                })
            })
            .collect();
        views.sort_by_key(|view| view.is_active);
        views
    }

    #[must_use]
    pub fn positions(&self) -> &Positions {
        &self.positions
    }

    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn tile(&self, id: &str) -> Option<&tile::State> {
        self.tiles.get(id)
    }

    /// Whether any tile is gliding and needs animation frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tiles.values().any(tile::State::is_animating)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.tiles.values().any(tile::State::is_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Card(&'static str);

    impl GridItem for Card {
        fn id(&self) -> &str {
            self.0
        }
    }

    fn cards(ids: &[&'static str]) -> Vec<Card> {
        ids.iter().copied().map(Card).collect()
    }

    fn two_columns() -> Settings<Card> {
        Settings {
            columns: 2,
            spacing: 10.0,
            ..Settings::default()
        }
    }

    fn order_of(effect: &Effect<Card>) -> Option<Vec<&'static str>> {
        match effect {
            Effect::OrderChanged { order, .. } => Some(order.iter().map(|card| card.0).collect()),
            Effect::None => None,
        }
    }

    /// Drags `id` so its top-left corner lands on `target`.
    fn drag_to(state: &mut State<Card>, id: &str, target: Point) -> Effect<Card> {
        let start = state.tile(id).unwrap().display_position();
        state.handle(Message::PointerMoved(start));
        state.handle(Message::TilePressed(id.to_string()));
        state.handle(Message::PointerMoved(target));
        state.handle(Message::PointerReleased)
    }

    #[test]
    fn mount_reports_initial_order_once() {
        let (mut state, effect) = State::new(cards(&["a", "b", "c"]), two_columns(), 230.0);
        assert_eq!(order_of(&effect), Some(vec!["a", "b", "c"]));

        let again = state.set_items(cards(&["a", "b", "c"]));
        assert!(order_of(&again).is_none());
    }

    #[test]
    fn dragging_onto_occupied_cell_swaps_pair() {
        let (mut state, _) = State::new(cards(&["A", "B", "C", "D"]), two_columns(), 230.0);
        let target = slot_to_pixel(3, &state.layout().metrics());

        let effect = drag_to(&mut state, "A", target);

        assert_eq!(order_of(&effect), Some(vec!["D", "B", "C", "A"]));
        assert_eq!(state.positions().slot_of("D"), Some(0));
        assert_eq!(state.positions().slot_of("A"), Some(3));
        assert!(state.positions().is_bijection());
    }

    #[test]
    fn dropping_on_own_cell_changes_nothing() {
        let (mut state, _) = State::new(cards(&["a", "b", "c"]), two_columns(), 230.0);
        let before = state.positions().clone();
        let home = state.tile("b").unwrap().rest();

        let effect = drag_to(&mut state, "b", home + iced::Vector::new(20.0, -15.0));

        assert!(order_of(&effect).is_none());
        assert_eq!(*state.positions(), before);
    }

    #[test]
    fn out_of_range_drop_lands_on_last_slot() {
        let (mut state, _) = State::new(cards(&["a", "b", "c"]), two_columns(), 230.0);
        let effect = drag_to(&mut state, "a", Point::new(9000.0, 9000.0));
        assert_eq!(order_of(&effect), Some(vec!["c", "b", "a"]));
    }

    #[test]
    fn moves_do_not_touch_positions() {
        let (mut state, _) = State::new(cards(&["a", "b"]), two_columns(), 230.0);
        state.handle(Message::PointerMoved(Point::ORIGIN));
        state.handle(Message::TilePressed("a".into()));
        state.handle(Message::PointerMoved(Point::new(500.0, 0.0)));

        assert_eq!(state.positions().slot_of("a"), Some(0));
        assert!(state.is_dragging());
        assert_eq!(
            state.tile("a").unwrap().display_position(),
            Point::new(510.0, 10.0)
        );
    }

    #[test]
    fn non_draggable_items_ignore_presses() {
        let settings = Settings {
            draggable: Draggable::predicate(|card: &Card| card.0 != "a"),
            ..two_columns()
        };
        let (mut state, _) = State::new(cards(&["a", "b"]), settings, 230.0);

        let effect = drag_to(&mut state, "a", Point::new(120.0, 10.0));
        assert!(order_of(&effect).is_none());
        assert!(!state.is_dragging());

        let views = state.tile_views();
        assert!(!views[0].is_draggable);
        assert!(views[1].is_draggable);
    }

    #[test]
    fn fixed_false_disables_every_tile() {
        let settings = Settings {
            draggable: Draggable::Fixed(false),
            ..two_columns()
        };
        let (mut state, _) = State::new(cards(&["a", "b"]), settings, 230.0);
        state.handle(Message::Tile {
            id: "b".into(),
            message: tile::Message::Grab,
        });
        assert!(!state.is_dragging());
    }

    #[test]
    fn pointer_lost_cancels_without_reorder() {
        let (mut state, _) = State::new(cards(&["a", "b"]), two_columns(), 230.0);
        state.handle(Message::PointerMoved(Point::ORIGIN));
        state.handle(Message::TilePressed("a".into()));
        state.handle(Message::PointerMoved(Point::new(110.0, 0.0)));

        let effect = state.handle(Message::PointerLost);
        assert!(order_of(&effect).is_none());
        assert!(!state.is_dragging());
        assert!(state.is_animating());
        assert_eq!(state.positions().slot_of("a"), Some(0));
    }

    #[test]
    fn shrinking_collection_renumbers_survivors() {
        let (mut state, _) = State::new(cards(&["A", "B", "C"]), two_columns(), 230.0);
        let effect = state.set_items(cards(&["A", "C"]));

        assert_eq!(order_of(&effect), Some(vec!["A", "C"]));
        assert_eq!(state.positions().slot_of("C"), Some(1));
        assert!(state.tile("B").is_none());
    }

    #[test]
    fn growing_collection_appends() {
        let (mut state, _) = State::new(cards(&["A", "B"]), two_columns(), 230.0);
        let effect = state.set_items(cards(&["C", "A", "B"]));

        assert_eq!(order_of(&effect), Some(vec!["A", "B", "C"]));
        assert!(state.tile("C").is_some());
    }

    #[test]
    fn feeding_order_back_is_silent() {
        let (mut state, _) = State::new(cards(&["A", "B", "C", "D"]), two_columns(), 230.0);
        let target = slot_to_pixel(3, &state.layout().metrics());
        drag_to(&mut state, "A", target);

        let reordered: Vec<Card> = state.ordered_items().into_iter().cloned().collect();
        let effect = state.set_items(reordered);
        assert!(order_of(&effect).is_none());
    }

    #[test]
    fn resize_relayouts_and_ignores_bogus_widths() {
        let (mut state, _) = State::new(cards(&["a", "b"]), two_columns(), 230.0);
        assert_eq!(state.layout().tile_width, 100.0);

        state.handle(Message::ContainerResized(0.0));
        state.handle(Message::ContainerResized(-50.0));
        assert_eq!(state.layout().tile_width, 100.0);

        state.handle(Message::ContainerResized(430.0));
        assert_eq!(state.layout().tile_width, 200.0);
        assert_eq!(state.tile("b").unwrap().rest(), Point::new(220.0, 10.0));
        assert!(state.is_animating());
    }

    #[test]
    fn narrow_container_floors_tile_width() {
        let (state, _) = State::new(cards(&["a", "b"]), two_columns(), 10.0);
        assert_eq!(state.layout().tile_width, crate::grid::MIN_TILE_WIDTH);
    }

    #[test]
    fn fixed_width_overrides_reports() {
        let settings = Settings {
            fixed_width: Some(430.0),
            ..two_columns()
        };
        let (mut state, _) = State::new(cards(&["a"]), settings, 230.0);
        state.handle(Message::ContainerResized(999.0));
        assert_eq!(state.container_width(), 430.0);
        assert_eq!(state.layout().tile_width, 200.0);
    }

    #[test]
    fn ticks_settle_animation() {
        let (mut state, _) = State::new(cards(&["a", "b"]), two_columns(), 230.0);
        state.handle(Message::ContainerResized(430.0));

        let start = Instant::now();
        for frame in 0..300 {
            state.handle(Message::Tick(start + Duration::from_millis(16 * frame)));
        }
        assert!(!state.is_animating());
        assert_eq!(
            state.tile("b").unwrap().display_position(),
            Point::new(220.0, 10.0)
        );
    }

    #[test]
    fn active_tile_is_painted_last() {
        let (mut state, _) = State::new(cards(&["a", "b", "c"]), two_columns(), 230.0);
        state.handle(Message::TilePressed("a".into()));

        let views = state.tile_views();
        assert_eq!(views.last().map(|view| view.item.0), Some("a"));
        assert!(views.last().unwrap().is_active);
    }

    #[test]
    fn test_ids_use_prefix() {
        let settings = Settings {
            test_id_prefix: Some("tile".into()),
            ..two_columns()
        };
        let (state, _) = State::new(cards(&["a"]), settings, 230.0);
        assert_eq!(state.tile_views()[0].test_id.as_deref(), Some("tile-a"));
        assert_eq!(test_id(None, "a"), None);
    }

    #[test]
    fn release_while_other_tile_drags_keeps_its_baseline() {
        let (mut state, _) = State::new(cards(&["A", "B", "C", "D"]), two_columns(), 230.0);
        let metrics = state.layout().metrics();

        state.handle(Message::Tile {
            id: "B".into(),
            message: tile::Message::Grab,
        });
        state.handle(Message::Tile {
            id: "B".into(),
            message: tile::Message::Move(iced::Vector::new(7.0, 7.0)),
        });
        let b_live = state.tile("B").unwrap().display_position();

        state.handle(Message::Tile {
            id: "A".into(),
            message: tile::Message::Grab,
        });
        state.handle(Message::Tile {
            id: "A".into(),
            message: tile::Message::Move(slot_to_pixel(3, &metrics) - slot_to_pixel(0, &metrics)),
        });
        let effect = state.handle(Message::Tile {
            id: "A".into(),
            message: tile::Message::Release,
        });

        assert_eq!(order_of(&effect), Some(vec!["D", "B", "C", "A"]));
        assert_eq!(state.tile("B").unwrap().display_position(), b_live);
        assert!(state.tile("B").unwrap().is_active());
    }

    #[test]
    fn direct_release_frees_the_pointer() {
        let (mut state, _) = State::new(cards(&["a", "b", "c"]), two_columns(), 230.0);
        state.handle(Message::TilePressed("a".into()));
        state.handle(Message::Tile {
            id: "a".into(),
            message: tile::Message::Release,
        });
        assert!(!state.is_dragging());

        state.handle(Message::TilePressed("b".into()));
        assert!(state.tile("b").unwrap().is_active());

        state.handle(Message::Tile {
            id: "b".into(),
            message: tile::Message::Cancel,
        });
        state.handle(Message::TilePressed("c".into()));
        assert!(state.tile("c").unwrap().is_active());
    }

    #[test]
    fn direct_release_of_other_tile_keeps_the_pointer() {
        let (mut state, _) = State::new(cards(&["a", "b"]), two_columns(), 230.0);
        state.handle(Message::TilePressed("a".into()));
        state.handle(Message::Tile {
            id: "b".into(),
            message: tile::Message::Release,
        });

        state.handle(Message::TilePressed("b".into()));
        assert!(state.tile("a").unwrap().is_active());
        assert!(!state.tile("b").unwrap().is_active());
    }

    #[test]
    fn scrolling_mid_drag_carries_the_tile() {
        let (mut state, _) = State::new(cards(&["A", "B", "C", "D"]), two_columns(), 230.0);
        let metrics = state.layout().metrics();
        let start = state.tile("A").unwrap().display_position();

        state.handle(Message::PointerMoved(start));
        state.handle(Message::TilePressed("A".into()));
        let row = slot_to_pixel(2, &metrics).y - slot_to_pixel(0, &metrics).y;
        state.handle(Message::ViewportScrolled(AbsoluteOffset { x: 0.0, y: row }));

        let live = state.tile("A").unwrap().display_position();
        assert_eq!(live, Point::new(start.x, start.y + row));

        let effect = state.handle(Message::PointerReleased);
        assert_eq!(order_of(&effect), Some(vec!["C", "B", "A", "D"]));
    }
}
