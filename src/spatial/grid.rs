//! Board storage keyed by coordinate
//!
//! The store owns every placed tile record for one board. It is the single
//! source of truth the placement rules read their neighborhood counts from,
//! and the surface the snapshot codec captures and restores. Single-writer,
//! single-reader, synchronous; one record per coordinate.

use crate::io::error::{BoardError, Result};
use crate::spatial::tiles::{Coordinate, TileRecord};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Associative store mapping each occupied cell to its placed record
///
/// Backed by a hash map; the placement algorithm only relies on the keyed
/// `get`/`contains`/`insert` contract, so any associative container would
/// satisfy it.
#[derive(Clone, Debug, Default)]
pub struct BoardGrid {
    tiles: HashMap<Coordinate, TileRecord>,
}

impl BoardGrid {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the record at a coordinate, if one has been placed
    pub fn get(&self, coordinate: Coordinate) -> Option<&TileRecord> {
        self.tiles.get(&coordinate)
    }

    /// Whether a coordinate is already occupied
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.tiles.contains_key(&coordinate)
    }

    /// Store a record at its coordinate
    ///
    /// Occupancy must be checked with [`Self::contains`] before generating
    /// into a cell; a rejected insert is a caller logic error, never retried.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateCoordinate`] if the record's coordinate
    /// is already occupied. The store is unchanged in that case.
    pub fn insert(&mut self, record: TileRecord) -> Result<()> {
        match self.tiles.entry(record.coordinate) {
            Entry::Occupied(_) => Err(BoardError::DuplicateCoordinate {
                coordinate: record.coordinate,
            }),
            Entry::Vacant(slot) => {
                let _ = slot.insert(record);
                Ok(())
            }
        }
    }

    /// Remove every record; idempotent
    pub fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether no cells are occupied
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over every stored record exactly once
    ///
    /// Iteration order is unspecified; callers needing a stable order sort
    /// the yielded records themselves (snapshot capture does).
    pub fn records(&self) -> impl Iterator<Item = &TileRecord> {
        self.tiles.values()
    }
}
