// Copyright (c) Till contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::models::Entry;
use crate::summary::Totals;
use crate::utils::{format_currency, format_date};

// Page geometry in points, A4 portrait. The cursor starts below the top
// margin, drops per row, and a new page begins once it falls under the
// bottom limit.
const PAGE_HEIGHT: f32 = 842.0;
const TOP_MARGIN: f32 = 50.0;
const ROW_STEP: f32 = 20.0;
const BOTTOM_LIMIT: f32 = 100.0;

const DESC_WIDTH: usize = 32;

/// A printable, paginated report. Pages are plain text lines; `Display`
/// joins them with form feeds so the document prints page-per-sheet.
pub struct Document {
    pub pages: Vec<Vec<String>>,
}

impl Document {
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_string())
            .with_context(|| format!("Write report to {}", path.display()))?;
        Ok(())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                f.write_str("\x0c")?;
            }
            for line in page {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

/// Lays out the already-fetched entries and their totals into pages.
/// Single pass, no sorting, fixed columns; long descriptions are cut to
/// fit their column.
pub fn render(entries: &[Entry], totals: &Totals, start: NaiveDate, end: NaiveDate) -> Document {
    let mut doc = Document {
        pages: vec![Vec::new()],
    };
    let mut y = PAGE_HEIGHT - TOP_MARGIN;

    doc.pages[0].push(format!(
        "Cash report: {} to {}",
        format_date(start),
        format_date(end)
    ));
    y -= 30.0;
    doc.pages[0].push(format!(
        "{:<6} {:<10} {:<DESC_WIDTH$} {:<8} {:>14}",
        "ID", "Date", "Description", "Kind", "Amount (R$)"
    ));
    y -= 15.0;
    doc.pages[0].push("-".repeat(6 + 1 + 10 + 1 + DESC_WIDTH + 1 + 8 + 1 + 14));
    y -= 15.0;

    for e in entries {
        let page = doc.pages.last_mut().unwrap();
        page.push(format!(
            "{:<6} {:<10} {:<DESC_WIDTH$} {:<8} {:>14}",
            e.id,
            format_date(e.occurred_on),
            truncate(&e.description, DESC_WIDTH),
            e.kind.as_str(),
            format_currency(&e.amount)
        ));
        y -= ROW_STEP;
        if y < BOTTOM_LIMIT {
            doc.pages.push(Vec::new());
            y = PAGE_HEIGHT - TOP_MARGIN;
        }
    }

    let page = doc.pages.last_mut().unwrap();
    page.push(String::new());
    page.push(summary_line("Total inflows:", &totals.inflow_total));
    page.push(summary_line("Total outflows:", &totals.outflow_total));
    page.push(summary_line("Balance:", &totals.balance));
    doc
}

fn summary_line(label: &str, amount: &rust_decimal::Decimal) -> String {
    let width = 6 + 1 + 10 + 1 + DESC_WIDTH + 1 + 8 + 1 + 14;
    let pad = width.saturating_sub(label.len());
    format!("{}{:>pad$}", label, format_currency(amount))
}

fn truncate(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}
