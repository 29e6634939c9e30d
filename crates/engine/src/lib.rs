// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! zh-engine: runs the classifier across an inventory

mod error;
mod scanner;

pub use error::ScanError;
pub use scanner::{ScanOptions, ScanReport, Scanner, DEFAULT_CONCURRENCY};
