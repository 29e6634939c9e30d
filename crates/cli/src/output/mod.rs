// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering. Only zombies are written; healthy jobs are counted in
//! the table header and nowhere else.

mod csv;
mod json;
mod table;

use clap::ValueEnum;
use serde::Deserialize;
use std::io::Write;
use zh_engine::ScanReport;

#[cfg(test)]
#[path = "fixtures.rs"]
mod fixtures;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Table,
    /// One row per zombie with a header line
    Csv,
    /// Pretty-printed document
    Json,
}

/// Write `report` to `out` in `format`. Color applies to the table only.
pub fn render(
    report: &ScanReport,
    format: OutputFormat,
    colorize: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => table::write(report, colorize, out)?,
        OutputFormat::Csv => csv::write(report, out)?,
        OutputFormat::Json => json::write(report, out)?,
    }
    out.flush()?;
    Ok(())
}
