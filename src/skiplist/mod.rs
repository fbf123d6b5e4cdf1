// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

//! A skiplist keeps every value on a sorted base chain and lets some nodes
//! join a fixed number of express lanes above it, so insertion can skip long
//! runs of the chain instead of walking it.
//!
//! Each new node is promoted into the lanes by a `LevelGenerator`. The default
//! one counts successes over independent trials (a binomial distribution),
//! unlike the geometric scheme most skiplists use. Custom generators can be
//! plugged in when reproducible or scripted promotions are needed.

mod level_generator;
mod render;
#[allow(clippy::module_inception)]
pub mod skiplist;
mod skipnode;

pub use level_generator::{
    BinomialLevelGenerator,
    LevelGenerator,
};
pub use skiplist::SkipList;
