//! Tile value types: coordinates, terrain categories, and placed records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer grid position identifying a single board cell
///
/// Equality and hashing are structural, so a coordinate can serve as the
/// unique key into the board store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Column index, growing eastward
    pub x: i32,
    /// Row index, growing southward in fill order
    pub y: i32,
}

impl Coordinate {
    /// Create a coordinate from column and row indices
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The directly adjacent cell to the west
    pub const fn west(self) -> Self {
        Self::new(self.x - 1, self.y)
    }

    /// The directly adjacent cell to the north
    ///
    /// North is the previously filled row, so this neighbor is always
    /// committed by the time the current row is being decided.
    pub const fn north(self) -> Self {
        Self::new(self.x, self.y - 1)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Terrain kind assigned to a board cell
///
/// `Plain` is the default category: it carries no placement constraint and is
/// legal at every cell. The other categories are placed under density and
/// water-adjacency rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Unconstrained default terrain
    Plain,
    /// Wooded terrain, clusters near water up to a density cap
    Forest,
    /// Water terrain, spreads from existing water up to a density cap
    Water,
}

impl Category {
    /// Every category in its stable universe ordering
    ///
    /// The ordering is load-bearing: the legal-category list presented to the
    /// random draw follows it, with the default category first, so a seeded
    /// source reproduces the same board.
    pub const ALL: [Self; 3] = [Self::Plain, Self::Forest, Self::Water];

    /// Position of this category within [`Category::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Plain => 0,
            Self::Forest => 1,
            Self::Water => 2,
        }
    }

    /// Whether this is the default category, legal at every cell
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Plain)
    }

    /// Human-readable category name
    pub const fn label(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Forest => "forest",
            Self::Water => "water",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One placed board cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileRecord {
    /// Cell position, unique within a board
    pub coordinate: Coordinate,
    /// Terrain category assigned to the cell
    pub category: Category,
    /// Elevation in tile units, fixed at 1 in current scope
    pub height: i32,
}

impl TileRecord {
    /// Create a record at the standard elevation
    pub const fn new(coordinate: Coordinate, category: Category) -> Self {
        Self {
            coordinate,
            category,
            height: 1,
        }
    }

    /// World-space anchor for visual placement: `[x, height, y]`
    ///
    /// Read only by rendering consumers; nothing in generation or persistence
    /// depends on it.
    pub const fn center(&self) -> [i32; 3] {
        [self.coordinate.x, self.height, self.coordinate.y]
    }
}
