// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use rand::{
    rngs::SmallRng,
    Rng,
    SeedableRng,
};

use crate::errs::SkipListError;

/// Upon the insertion of a new node in the list, the node is promoted into
/// some number of express lanes as determined by a `LevelGenerator`.
pub trait LevelGenerator {
    /// The number of express lanes this generator draws promotions for.
    fn total(&self) -> usize;
    /// Generate a promotion count for a new node in the range `[0, total]`.
    ///
    /// Zero keeps the node on the base level only. The list stops promoting
    /// once it runs out of lanes, so larger values are harmless.
    fn random(&mut self) -> usize;
}

/// A level generator which will produce binomially distributed numbers.
///
/// Every promotion runs `total` independent trials that each succeed with
/// probability `p`, and the promotion count is the number of successes. This
/// is not the usual geometric "stop at the first failure" scheme: a node can
/// be promoted several lanes up even when an early trial fails, which pushes
/// the expected tower height up.
#[derive(Debug, Clone)]
pub struct BinomialLevelGenerator {
    total: usize,
    p: f64,
    rng: SmallRng,
}

impl BinomialLevelGenerator {
    /// Create a new BinomialLevelGenerator over `total` express lanes with
    /// `p` as the chance of any single trial succeeding, seeded from entropy.
    pub fn new(total: usize, p: f64) -> Result<Self, SkipListError> {
        Self::from_rng(total, p, SmallRng::from_entropy())
    }

    /// Same as [`BinomialLevelGenerator::new`] but reproducible.
    pub fn with_seed(total: usize, p: f64, seed: u64) -> Result<Self, SkipListError> {
        Self::from_rng(total, p, SmallRng::seed_from_u64(seed))
    }

    fn from_rng(total: usize, p: f64, rng: SmallRng) -> Result<Self, SkipListError> {
        if total == 0 {
            return Err(SkipListError::InvalidHeight(total + 1));
        }
        if !(p > 0.0 && p < 1.0) {
            return Err(SkipListError::InvalidProbability(p));
        }
        Ok(BinomialLevelGenerator { total, p, rng })
    }

    pub fn p(&self) -> f64 {
        self.p
    }
}

impl LevelGenerator for BinomialLevelGenerator {
    fn random(&mut self) -> usize {
        let p = self.p;
        (0..self.total).filter(|_| self.rng.gen_bool(p)).count()
    }

    fn total(&self) -> usize {
        self.total
    }
}
