// Copyright (c) Till contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::Result;

use crate::report::render;
use crate::store::Ledger;
use crate::summary::summarize;
use crate::utils::parse_range;

pub fn handle(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let (start, end) = parse_range(
        sub.get_one::<String>("from").map(|s| s.as_str()),
        sub.get_one::<String>("to").map(|s| s.as_str()),
    )?;
    let out = sub.get_one::<String>("out").unwrap();

    let entries = ledger.query_range(start, end)?;
    let totals = summarize(&entries);
    let doc = render(&entries, &totals, start, end);
    doc.write_to(Path::new(out))?;
    println!(
        "Report written to {} ({} entries, {} pages)",
        out,
        entries.len(),
        doc.pages.len()
    );
    Ok(())
}
