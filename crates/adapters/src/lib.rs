// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! zh-adapters: inventory sources for scheduled jobs and their executions

pub mod inventory;

pub use inventory::{
    FileInventory, Inventory, InventoryError, JoinStrategy, KubeInventory, Scope,
    DEFAULT_LABEL_KEY,
};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use inventory::{FakeInventory, InventoryCall};
