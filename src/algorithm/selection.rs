//! Injected randomness and uniform category selection

use crate::algorithm::bitset::CategorySet;
use crate::spatial::tiles::Category;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Uniform integer draws over `[0, bound)`
///
/// Generation takes its randomness through this capability rather than a
/// process-wide generator, so a seeded implementation reproduces the same
/// board and tests can script exact draw sequences.
pub trait UniformSource {
    /// Draw a uniformly distributed index in `[0, bound)`
    ///
    /// Callers guarantee `bound >= 1`.
    fn pick(&mut self, bound: usize) -> usize;
}

/// Seeded random source for reproducible stochastic choices
#[derive(Debug)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random source from a seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl UniformSource for RandomSelector {
    /// # Panics
    ///
    /// Panics if `bound` is zero, which violates the trait contract.
    fn pick(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}

/// Draw one category uniformly from the legal set
///
/// The set is flattened to its stable universe-ordered list before the draw,
/// so equal seeds yield equal picks regardless of how the set was assembled.
/// Returns `None` only for an empty set.
pub fn choose_category<R>(legal: &CategorySet, source: &mut R) -> Option<Category>
where
    R: UniformSource + ?Sized,
{
    let options = legal.to_vec();
    if options.is_empty() {
        return None;
    }

    let index = source.pick(options.len());
    options.get(index).copied()
}
