//! Random input for [`Tree::build`]: a sorted run of distinct values.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::array_gen::ArrayGen;
//!
//! let values = ArrayGen::new(5).seed(17).generate().unwrap();
//!
//! assert_eq!(values.len(), 5);
//! assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
//! assert!(values.iter().all(|x| *x < 100));
//! ```

use std::collections::BTreeSet;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::error::GenerateError;
use crate::tree::Tree;

/// Values are drawn from `0..DEFAULT_UPPER_BOUND` unless configured otherwise.
pub const DEFAULT_UPPER_BOUND: u32 = 100;

/// Generates `count` distinct random values in ascending order.
#[derive(Debug, Clone)]
pub struct ArrayGen {
    count: usize,
    upper_bound: u32,
    seed: Option<u64>,
}

impl ArrayGen {
    /// A generator for `count` values below [`DEFAULT_UPPER_BOUND`], seeded from the thread RNG.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            upper_bound: DEFAULT_UPPER_BOUND,
            seed: None,
        }
    }

    /// Draws values from `0..upper_bound` instead.
    pub fn upper_bound(mut self, upper_bound: u32) -> Self {
        self.upper_bound = upper_bound;
        self
    }

    /// Makes the output reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Draws random values until `count` distinct ones have been seen and returns them sorted.
    ///
    /// # Errors
    ///
    /// [`GenerateError::RangeTooSmall`] if `0..upper_bound` holds fewer than `count` values.
    pub fn generate(&self) -> Result<Vec<u32>, GenerateError> {
        if self.count > self.upper_bound as usize {
            return Err(GenerateError::RangeTooSmall {
                count: self.count,
                upper_bound: self.upper_bound,
            });
        }

        let seed = self.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut rng = Pcg64::seed_from_u64(seed);

        let mut values = BTreeSet::new();
        while values.len() < self.count {
            values.insert(rng.gen_range(0..self.upper_bound));
        }

        Ok(values.into_iter().collect())
    }
}

impl Tree<u32> {
    /// Builds a balanced tree of `count` random values below [`DEFAULT_UPPER_BOUND`].
    ///
    /// # Errors
    ///
    /// [`GenerateError::RangeTooSmall`] if `count` is larger than [`DEFAULT_UPPER_BOUND`].
    pub fn random(count: usize) -> Result<Self, GenerateError> {
        Ok(Self::build(ArrayGen::new(count).generate()?))
    }
}
