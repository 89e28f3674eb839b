use serde::{Deserialize, Serialize};

/// Shape of a board and the limits used while drawing it from the source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub categories: usize,
    pub clues_per_category: usize,
    /// How many categories are requested from the source to sample from.
    pub pool_size: usize,
    /// Resampling budget when the pool lists the same category twice.
    pub sample_attempts: usize,
}

impl BoardConfig {
    pub const DEFAULT_CATEGORIES: usize = 6;
    pub const DEFAULT_CLUES_PER_CATEGORY: usize = 5;
    pub const DEFAULT_POOL_SIZE: usize = 100;
    pub const DEFAULT_SAMPLE_ATTEMPTS: usize = 3;

    pub const fn new_unchecked(
        categories: usize,
        clues_per_category: usize,
        pool_size: usize,
        sample_attempts: usize,
    ) -> Self {
        Self {
            categories,
            clues_per_category,
            pool_size,
            sample_attempts,
        }
    }

    pub fn new(
        categories: usize,
        clues_per_category: usize,
        pool_size: usize,
        sample_attempts: usize,
    ) -> Self {
        let categories = categories.max(1);
        let clues_per_category = clues_per_category.max(1);
        let pool_size = pool_size.max(categories);
        let sample_attempts = sample_attempts.max(1);
        Self::new_unchecked(categories, clues_per_category, pool_size, sample_attempts)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_CATEGORIES,
            Self::DEFAULT_CLUES_PER_CATEGORY,
            Self::DEFAULT_POOL_SIZE,
            Self::DEFAULT_SAMPLE_ATTEMPTS,
        )
    }
}
