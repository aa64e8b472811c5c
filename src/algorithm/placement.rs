//! Neighborhood counting and per-category placement legality
//!
//! A constrained category is placeable at a cell depending on how many
//! same-category records already sit in its scan window and, in the
//! mid-density band, whether the cell touches committed water. The default
//! category is exempt from all of it.

use crate::algorithm::bitset::CategorySet;
use crate::spatial::grid::BoardGrid;
use crate::spatial::tiles::{Category, Coordinate};

/// Density parameters governing where a constrained category may be placed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementConstraint {
    /// Scan window half-width in cells
    pub range: i32,
    /// Nearby same-category count at which the category becomes illegal
    pub max_density: usize,
}

/// A constrained category paired with its placement parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryRule {
    /// The non-default category the constraint applies to
    pub category: Category,
    /// Its density parameters
    pub constraint: PlacementConstraint,
}

/// Count already-placed records of `category` near `origin`
///
/// The scan window spans `x ∈ [x-range, x+range]` but only `y ∈ [y-range, y]`:
/// rows below the origin are never inspected. Under row-major fill those rows
/// hold nothing yet, so the window simply reads what the store can answer at
/// decision time. The asymmetry is kept even for partially restored boards
/// where later rows may exist; widening the window would change every
/// generated board.
pub fn count_nearby(
    board: &BoardGrid,
    origin: Coordinate,
    category: Category,
    range: i32,
) -> usize {
    let mut similar = 0;
    for y in (origin.y - range)..=origin.y {
        for x in (origin.x - range)..=(origin.x + range) {
            if let Some(record) = board.get(Coordinate::new(x, y)) {
                if record.category == category {
                    similar += 1;
                }
            }
        }
    }
    similar
}

/// Whether the west or north neighbor of `origin` is committed water
///
/// Only these two neighbors are ever inspected: they are the cells guaranteed
/// to precede `origin` in fill order.
pub fn has_adjacent_water(board: &BoardGrid, origin: Coordinate) -> bool {
    [origin.west(), origin.north()]
        .into_iter()
        .any(|neighbor| {
            board
                .get(neighbor)
                .is_some_and(|record| record.category == Category::Water)
        })
}

/// Evaluate whether a constrained category may be placed at `origin`
///
/// The first occurrence in an empty neighborhood is always allowed. In the
/// band between one occurrence and the density cap, placement additionally
/// requires water on the west or north neighbor. At or past the cap the
/// category is illegal.
pub fn is_placeable(
    board: &BoardGrid,
    origin: Coordinate,
    category: Category,
    constraint: PlacementConstraint,
) -> bool {
    let nearby = count_nearby(board, origin, category, constraint.range);

    if nearby == 0 {
        true
    } else if nearby < constraint.max_density {
        has_adjacent_water(board, origin)
    } else {
        false
    }
}

/// Build the legal-category set for a cell
///
/// Default categories are unconditionally present, so the result is never
/// empty; each rule contributes its category when its constraint admits it.
pub fn legal_categories(
    board: &BoardGrid,
    origin: Coordinate,
    rules: &[CategoryRule],
) -> CategorySet {
    let mut legal = CategorySet::new();

    for category in Category::ALL {
        if category.is_default() {
            legal.insert(category);
        }
    }

    for rule in rules {
        if is_placeable(board, origin, rule.category, rule.constraint) {
            legal.insert(rule.category);
        }
    }

    legal
}
