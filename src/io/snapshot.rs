//! Snapshot capture, restore, and JSON file codec
//!
//! A snapshot is the persisted form of a board: a list of position→category
//! cells. Capture and restore are exactly symmetric on coordinate and
//! category; tile height is not persisted and is re-derived on restore.

use crate::io::error::{BoardError, Result};
use crate::spatial::grid::BoardGrid;
use crate::spatial::tiles::{Category, Coordinate, TileRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One persisted board cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotCell {
    /// Persisted position `[x, 0, y]`
    ///
    /// The middle axis is a holdover from persisting with a 3-component
    /// position type; it stays 0 while tile height is fixed. Old snapshot
    /// data stays readable this way.
    pub position: [i32; 3],
    /// Category the cell carries
    pub category: Category,
}

impl SnapshotCell {
    /// Build a cell from a placed record
    pub const fn from_record(record: &TileRecord) -> Self {
        Self {
            position: [record.coordinate.x, 0, record.coordinate.y],
            category: record.category,
        }
    }

    /// The board coordinate this cell restores to
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.position[0], self.position[2])
    }
}

/// Persisted form of a board
///
/// Stored as a cell list rather than a keyed map so that a duplicated
/// position in a corrupted file survives decoding and is rejected by
/// [`LevelSnapshot::restore`] instead of being silently collapsed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    cells: Vec<SnapshotCell>,
}

impl LevelSnapshot {
    /// Build a snapshot from raw cells, preserving their order
    pub const fn new(cells: Vec<SnapshotCell>) -> Self {
        Self { cells }
    }

    /// Capture every record of a board
    ///
    /// Cells are sorted row-major so the persisted file is byte-stable no
    /// matter which order the store yields records in.
    pub fn capture(board: &BoardGrid) -> Self {
        let mut cells: Vec<SnapshotCell> = board.records().map(SnapshotCell::from_record).collect();
        cells.sort_by_key(|cell| (cell.position[2], cell.position[0]));
        Self { cells }
    }

    /// Rehydrate a board from this snapshot
    ///
    /// Clears the board first, then inserts one height-1 record per cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateSnapshotKey`] if two cells share a
    /// coordinate. A well-formed persisted file cannot contain duplicates, so
    /// this denotes input corruption; the board is cleared again before
    /// returning, never left half-loaded.
    pub fn restore(&self, board: &mut BoardGrid) -> Result<()> {
        board.clear();

        for cell in &self.cells {
            let coordinate = cell.coordinate();
            if board.contains(coordinate) {
                board.clear();
                return Err(BoardError::DuplicateSnapshotKey {
                    position: cell.position,
                });
            }
            board.insert(TileRecord::new(coordinate, cell.category))?;
        }

        Ok(())
    }

    /// The persisted cells in their stored order
    pub fn cells(&self) -> &[SnapshotCell] {
        &self.cells
    }

    /// Number of persisted cells
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the snapshot holds no cells
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Look up the persisted category at a coordinate
    pub fn category_at(&self, coordinate: Coordinate) -> Option<Category> {
        self.cells
            .iter()
            .find(|cell| cell.coordinate() == coordinate)
            .map(|cell| cell.category)
    }

    /// Decode a snapshot from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a valid
    /// snapshot document.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| BoardError::SnapshotRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&text).map_err(|e| BoardError::SnapshotParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Encode this snapshot to a JSON file
    ///
    /// Creates missing parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails, the parent directory cannot be
    /// created, or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text =
            serde_json::to_string_pretty(self).map_err(|e| BoardError::SnapshotEncode { source: e })?;

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| BoardError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        std::fs::write(path, text).map_err(|e| BoardError::SnapshotWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
