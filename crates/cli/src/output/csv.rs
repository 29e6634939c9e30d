// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::borrow::Cow;
use std::io::{self, Write};
use zh_engine::ScanReport;

const HEADER: &str =
    "Name,Namespace,Schedule,DaysSinceSuccess,TotalJobs,FailedJobs,Confidence,Suspended";

pub(super) fn write(report: &ScanReport, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    for z in report.zombies() {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{}",
            field(&z.name),
            field(&z.namespace),
            field(&z.schedule),
            z.days_since_success,
            z.total_jobs,
            z.failed_jobs,
            z.confidence,
            z.is_suspended,
        )?;
    }
    Ok(())
}

/// RFC 4180: quote fields containing a delimiter, quote, or line break.
fn field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
#[path = "csv_tests.rs"]
mod tests;
