//! Slot module - the staging row picked tiles move into
//!
//! Tiles are kept in insertion order in fixed-size, stack-allocated storage.
//! Capacity is an overflow threshold checked by the session after each move, not a
//! limit enforced on insertion.

use arrayvec::ArrayVec;

use crate::types::{TileKind, SLOT_CAPACITY, SLOT_STORAGE, TILE_KIND_COUNT};

/// Result of one [`Slot::auto_clear`] pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotClear {
    /// Kinds that formed at least one triple, in palette order.
    pub kinds: ArrayVec<TileKind, TILE_KIND_COUNT>,
    /// Total tiles removed.
    pub removed: usize,
}

impl SlotClear {
    /// The "match occurred" signal.
    pub fn matched(&self) -> bool {
        !self.kinds.is_empty()
    }
}

/// Ordered collection of picked tiles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slot {
    tiles: ArrayVec<TileKind, SLOT_STORAGE>,
}

impl Slot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a slot holding `tiles` in order (no clearing is applied).
    ///
    /// Returns `None` if `tiles` does not fit the backing storage.
    pub fn from_tiles(tiles: &[TileKind]) -> Option<Self> {
        let mut slot = Self::new();
        for &kind in tiles {
            if !slot.insert(kind) {
                return None;
            }
        }
        Some(slot)
    }

    /// Append a tile.
    ///
    /// Going past [`SLOT_CAPACITY`] is allowed. Returns false only when the backing
    /// storage itself is full, in which case the slot is unchanged.
    pub fn insert(&mut self, kind: TileKind) -> bool {
        self.tiles.try_push(kind).is_ok()
    }

    /// Remove every complete triple.
    ///
    /// For each kind with `n >= 3` copies, the earliest `3 * (n / 3)` copies go; the
    /// remaining `n % 3` keep their relative order. Running it again without an
    /// insert in between changes nothing.
    pub fn auto_clear(&mut self) -> SlotClear {
        let mut counts = [0usize; TILE_KIND_COUNT];
        for kind in &self.tiles {
            counts[kind.index()] += 1;
        }

        let mut budget = [0usize; TILE_KIND_COUNT];
        let mut report = SlotClear::default();
        for kind in TileKind::ALL {
            let n = counts[kind.index()];
            if n >= 3 {
                budget[kind.index()] = n - n % 3;
                report.kinds.push(kind);
            }
        }
        if !report.matched() {
            return report;
        }

        let before = self.tiles.len();
        self.tiles.retain(|kind| {
            let left = &mut budget[kind.index()];
            if *left > 0 {
                *left -= 1;
                false
            } else {
                true
            }
        });
        report.removed = before - self.tiles.len();
        report
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// More than [`SLOT_CAPACITY`] tiles are waiting.
    pub fn is_overflowing(&self) -> bool {
        self.tiles.len() > SLOT_CAPACITY
    }

    /// No more tiles can be stored at all.
    pub fn is_full(&self) -> bool {
        self.tiles.is_full()
    }

    /// Tiles left to right in insertion order.
    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    pub fn count_of(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|k| **k == kind).count()
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }
}
