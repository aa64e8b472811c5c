//! Fixed-size bitset over the terrain category universe

use crate::spatial::tiles::Category;
use bitvec::prelude::{BitVec, bitvec};
use std::fmt;

/// Set of categories tracked as one bit per entry of [`Category::ALL`]
///
/// Provides O(1) membership testing and, through [`CategorySet::to_vec`], a
/// stable universe-ordered view. The legal-category list handed to the random
/// draw is produced this way, so insertion order never influences selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategorySet {
    bits: BitVec,
}

impl CategorySet {
    /// Create a set with no categories present
    pub fn new() -> Self {
        Self {
            bits: bitvec![0; Category::ALL.len()],
        }
    }

    /// Create a set containing every category
    pub fn all() -> Self {
        Self {
            bits: bitvec![1; Category::ALL.len()],
        }
    }

    /// Insert a category
    pub fn insert(&mut self, category: Category) {
        self.bits.set(category.index(), true);
    }

    /// Test category membership
    pub fn contains(&self, category: Category) -> bool {
        self.bits.get(category.index()).as_deref() == Some(&true)
    }

    /// Test if no categories are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count categories in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract members as a vector in [`Category::ALL`] order
    pub fn to_vec(&self) -> Vec<Category> {
        self.bits
            .iter_ones()
            .filter_map(|index| Category::ALL.get(index).copied())
            .collect()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CategorySet({} categories: {:?})", self.count(), self.to_vec())
    }
}
