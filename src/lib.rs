// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

/// Construction parameters and their defaults.
pub mod config;
pub mod errs;

/// A [`skip list`] with a fixed number of express lanes.
///
/// [`skip list`]: https://en.wikipedia.org/wiki/Skip_list
pub mod skiplist;

pub use config::SkipListConfig;
pub use errs::SkipListError;
pub use skiplist::{
    BinomialLevelGenerator,
    LevelGenerator,
    SkipList,
};
