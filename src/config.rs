// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use getset::CopyGetters;

use crate::errs::SkipListError;

/// The smallest height that still leaves one express lane above the base.
pub const MIN_HEIGHT: usize = 2;

/// Default number of levels, base level included.
pub const DEFAULT_HEIGHT: usize = 5;

/// Default chance of each independent promotion trial succeeding.
pub const DEFAULT_PROBABILITY: f64 = 0.35;

/// Construction parameters for a [`SkipList`].
///
/// [`SkipList`]: crate::skiplist::SkipList
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct SkipListConfig {
    /// Total levels, base included. Fixed for the life of the list.
    height: usize,
    /// Success probability of a single promotion trial.
    probability: f64,
    /// Seed for the promotion generator. `None` draws from entropy.
    seed: Option<u64>,
}

impl Default for SkipListConfig {
    fn default() -> Self {
        SkipListConfig {
            height: DEFAULT_HEIGHT,
            probability: DEFAULT_PROBABILITY,
            seed: None,
        }
    }
}

impl SkipListConfig {
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of express lanes above the base level.
    pub fn lanes(&self) -> usize {
        self.height.saturating_sub(1)
    }

    pub fn validate(&self) -> Result<(), SkipListError> {
        if self.height < MIN_HEIGHT {
            return Err(SkipListError::InvalidHeight(self.height));
        }
        if !(self.probability > 0.0 && self.probability < 1.0) {
            return Err(SkipListError::InvalidProbability(self.probability));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::{
            SkipListConfig,
            DEFAULT_HEIGHT,
            DEFAULT_PROBABILITY,
        },
        errs::SkipListError,
    };

    #[test]
    fn test_default_is_valid() {
        let config = SkipListConfig::default();
        assert_eq!(config.height(), DEFAULT_HEIGHT);
        assert_eq!(config.probability(), DEFAULT_PROBABILITY);
        assert_eq!(config.seed(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_height_too_small() {
        for height in 0..2 {
            let config = SkipListConfig::default().with_height(height);
            assert_eq!(config.validate(), Err(SkipListError::InvalidHeight(height)));
        }
        assert!(SkipListConfig::default().with_height(2).validate().is_ok());
    }

    #[test]
    fn test_probability_bounds() {
        for p in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let config = SkipListConfig::default().with_probability(p);
            assert!(matches!(
                config.validate(),
                Err(SkipListError::InvalidProbability(_))
            ));
        }
    }

    #[test]
    fn test_builder() {
        let config = SkipListConfig::default()
            .with_height(8)
            .with_probability(0.5)
            .with_seed(42);
        assert_eq!(config.height(), 8);
        assert_eq!(config.lanes(), 7);
        assert_eq!(config.probability(), 0.5);
        assert_eq!(config.seed(), Some(42));
    }
}
