// Copyright (c) Till contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use anyhow::Result;

use crate::models::{Entry, EntryKind, PaymentMethod};
use crate::store::Ledger;
use crate::summary::summarize;
use crate::utils::{
    format_currency, format_date, maybe_print_json, parse_currency, parse_range, pretty_table,
};

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, sub)?,
        Some(("edit", sub)) => edit(ledger, sub)?,
        Some(("rm", sub)) => rm(ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let kind = EntryKind::from_str(sub.get_one::<String>("kind").unwrap())?;
    let description = sub.get_one::<String>("description").unwrap();
    let amount = parse_currency(sub.get_one::<String>("amount").unwrap())?;
    let occurred_on = match sub.get_one::<String>("date") {
        Some(s) => crate::utils::parse_date_input(s)?,
        None => chrono::Local::now().date_naive(),
    };
    let method = PaymentMethod::from_str(sub.get_one::<String>("method").unwrap())?;

    let id = ledger.create(kind, description, amount, occurred_on, method)?;
    println!(
        "Recorded entry #{}: {} {} on {} via {}",
        id,
        kind,
        format_currency(&amount),
        format_date(occurred_on),
        method
    );
    Ok(())
}

fn edit(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let kind = EntryKind::from_str(sub.get_one::<String>("kind").unwrap())?;
    let description = sub.get_one::<String>("description").unwrap();
    let amount = parse_currency(sub.get_one::<String>("amount").unwrap())?;
    // edit forms without a method fall back to cash
    let method = match sub.get_one::<String>("method") {
        Some(s) => PaymentMethod::from_str(s)?,
        None => PaymentMethod::Cash,
    };

    ledger.update(id, kind, description, amount, method)?;
    println!("Updated entry #{}", id);
    Ok(())
}

fn rm(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    ledger.delete(id)?;
    println!("Removed entry #{}", id);
    Ok(())
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let entries = query_rows(ledger, sub)?;
    let totals = summarize(&entries);

    if !maybe_print_json(json_flag, jsonl_flag, &entries)? {
        let rows: Vec<Vec<String>> = entries
            .iter()
            .map(|e| {
                vec![
                    e.id.to_string(),
                    format_date(e.occurred_on),
                    e.kind.to_string(),
                    e.description.clone(),
                    e.payment_method.to_string(),
                    format_currency(&e.amount),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Kind", "Description", "Method", "Amount"],
                rows,
            )
        );
        println!(
            "Inflows: {}   Outflows: {}   Balance: {}",
            format_currency(&totals.inflow_total),
            format_currency(&totals.outflow_total),
            format_currency(&totals.balance)
        );
    }
    Ok(())
}

pub fn query_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<Vec<Entry>> {
    let (start, end) = parse_range(
        sub.get_one::<String>("from").map(|s| s.as_str()),
        sub.get_one::<String>("to").map(|s| s.as_str()),
    )?;
    Ok(ledger.query_range(start, end)?)
}
