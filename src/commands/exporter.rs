// Copyright (c) Till contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::Ledger;
use crate::utils::parse_range;

pub fn handle(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let (start, end) = parse_range(
        sub.get_one::<String>("from").map(|s| s.as_str()),
        sub.get_one::<String>("to").map(|s| s.as_str()),
    )?;

    let entries = ledger.query_range(start, end)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id",
                "kind",
                "description",
                "amount",
                "occurred_on",
                "payment_method",
            ])?;
            for e in &entries {
                wtr.write_record([
                    e.id.to_string(),
                    e.kind.to_string(),
                    e.description.clone(),
                    format!("{:.2}", e.amount),
                    e.occurred_on.to_string(),
                    e.payment_method.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&entries)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} entries to {}", entries.len(), out);
    Ok(())
}
