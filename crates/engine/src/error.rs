// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scan errors

use thiserror::Error;
use zh_adapters::InventoryError;

/// Errors that abort a whole scan.
///
/// Per-job history lookups never produce one of these; they degrade to a
/// fixed verdict instead.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to list scheduled jobs: {0}")]
    Inventory(#[from] InventoryError),
}
