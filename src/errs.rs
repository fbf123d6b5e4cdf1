// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SkipListError {
    #[error("height must be at least 2, got {0}")]
    InvalidHeight(usize),
    #[error("promotion probability must be in (0, 1), got {0}")]
    InvalidProbability(f64),
}
