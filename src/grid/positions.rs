// SPDX-License-Identifier: MPL-2.0
//! Authoritative slot assignment for every item in the grid.
//!
//! [`Positions`] maps an item identity to its slot. Reachable states keep
//! the map a bijection onto `[0, len)`: [`Positions::reconcile`] renumbers
//! densely and [`Positions::resolve_swap`] only ever exchanges two slots.
//!
//! Both operations return a [`Cow`]: `Cow::Borrowed(self)` means nothing
//! changed, so callers can skip downstream notifications.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};

/// Mapping from item identity to slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Positions {
    slots: BTreeMap<String, usize>,
}

impl Positions {
    /// Assigns slots in the order the identities are given.
    ///
    /// Repeated identities keep their first slot; later repeats are skipped.
    pub fn from_ids<'a, I>(ids: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut slots = BTreeMap::new();
        for id in ids {
            let next = slots.len();
            slots.entry(id.to_owned()).or_insert(next);
        }
        Self { slots }
    }

    /// Slot currently held by `id`.
    #[must_use]
    pub fn slot_of(&self, id: &str) -> Option<usize> {
        self.slots.get(id).copied()
    }

    /// Identity currently holding `slot`.
    #[must_use]
    pub fn occupant(&self, slot: usize) -> Option<&str> {
        self.slots
            .iter()
            .find(|(_, &s)| s == slot)
            .map(|(id, _)| id.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates `(id, slot)` pairs in identity order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.slots.iter().map(|(id, &slot)| (id.as_str(), slot))
    }

    /// Identities sorted by slot.
    #[must_use]
    pub fn ordered_ids(&self) -> Vec<&str> {
        let mut ids: Vec<(&str, usize)> = self.iter().collect();
        ids.sort_by_key(|&(_, slot)| slot);
        ids.into_iter().map(|(id, _)| id).collect()
    }

    /// Whether every slot in `[0, len)` is held by exactly one identity.
    #[must_use]
    pub fn is_bijection(&self) -> bool {
        let mut seen = vec![false; self.slots.len()];
        for &slot in self.slots.values() {
            match seen.get_mut(slot) {
                Some(taken) if !*taken => *taken = true,
                _ => return false,
            }
        }
        true
    }

    /// Rebuilds the map for a new item collection.
    ///
    /// Survivors keep their relative order and are renumbered from `0`;
    /// identities not seen before are appended in collection order;
    /// identities missing from `ids` are dropped. Returns the map itself
    /// when the result would be identical.
    pub fn reconcile<'a, I>(&self, ids: I) -> Cow<'_, Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = HashSet::new();
        let mut survivors: Vec<(&str, usize)> = Vec::new();
        let mut newcomers: Vec<&str> = Vec::new();

        for id in ids {
            if !seen.insert(id) {
                tracing::warn!(id = %id, "duplicate item identity ignored");
                continue;
            }
            match self.slot_of(id) {
                Some(slot) => survivors.push((id, slot)),
                None => newcomers.push(id),
            }
        }

        survivors.sort_by_key(|&(_, slot)| slot);

        let next = Self::from_ids(
            survivors
                .into_iter()
                .map(|(id, _)| id)
                .chain(newcomers),
        );

        if next == *self {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(next)
        }
    }

    /// Moves `id` to `target`, exchanging slots with the current occupant.
    ///
    /// This is a single pairwise swap: tiles between the two slots do not
    /// shift. Returns the map itself when `id` is unknown or already at
    /// `target`. A `target` with no occupant simply receives `id`.
    pub fn resolve_swap(&self, id: &str, target: usize) -> Cow<'_, Self> {
        let Some(current) = self.slot_of(id) else {
            return Cow::Borrowed(self);
        };
        if current == target {
            return Cow::Borrowed(self);
        }

        let mut next = self.clone();
        if let Some(occupant) = self.occupant(target) {
            next.slots.insert(occupant.to_owned(), current);
        }
        next.slots.insert(id.to_owned(), target);

        Cow::Owned(next)
    }
}
