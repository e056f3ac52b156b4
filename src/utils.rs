// Copyright (c) Till contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Local, NaiveDate};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::{LedgerError, Result};

/// Display pattern used everywhere the user sees or types a date. Storage
/// is always canonical `YYYY-MM-DD`.
const DATE_DISPLAY_FMT: &str = "%d-%m-%Y";

/// Locale amount shape: optional `R$` marker already stripped, period
/// thousands grouping, comma decimals. No sign; amounts are non-negative.
static CURRENCY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d{1,3}(?:\.\d{3})+|\d+)(?:,\d{1,2})?$").unwrap());

/// Strict parse of a `dd-mm-yyyy` display date. Invalid calendar dates
/// (e.g. 31-02-2024) are rejected; there are no fallback formats.
pub fn parse_date_input(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_DISPLAY_FMT)
        .map_err(|_| LedgerError::Format(format!("invalid date '{}', expected dd-mm-yyyy", s)))
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_DISPLAY_FMT).to_string()
}

/// Resolves an optional from/to pair, defaulting either bound to today.
pub fn parse_range(from: Option<&str>, to: Option<&str>) -> Result<(NaiveDate, NaiveDate)> {
    let today = Local::now().date_naive();
    let start = match from {
        Some(s) => parse_date_input(s)?,
        None => today,
    };
    let end = match to {
        Some(s) => parse_date_input(s)?,
        None => today,
    };
    Ok((start, end))
}

/// Renders an amount in the display locale: `R$ 1.234,56`. Entry amounts
/// are non-negative, but a balance can dip below zero and keeps its sign.
pub fn format_currency(amount: &Decimal) -> String {
    let fixed = format!("{:.2}", amount.round_dp(2));
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (fixed, "00".to_string()),
    };
    // group digits only; the sign sits outside the grouping
    let (sign, digits_str) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part.as_str()),
    };
    let mut grouped = String::new();
    let digits: Vec<char> = digits_str.chars().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }
    format!("R$ {}{},{}", sign, grouped, frac_part)
}

/// Parses locale currency text back to a canonical decimal: strips the
/// `R$` marker and whitespace, drops grouping periods, and turns the comma
/// into a decimal point. Negative or malformed text fails.
pub fn parse_currency(text: &str) -> Result<Decimal> {
    let t = text.trim();
    let t = t.strip_prefix("R$").unwrap_or(t).trim_start();
    if !CURRENCY_RE.is_match(t) {
        return Err(LedgerError::Format(format!(
            "invalid amount '{}', expected e.g. 1.234,56",
            text
        )));
    }
    let canonical = t.replace('.', "").replace(',', ".");
    canonical
        .parse::<Decimal>()
        .map_err(|_| LedgerError::Format(format!("invalid amount '{}'", text)))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    let last = headers.len().saturating_sub(1);
    for r in rows {
        // amounts sit in the last column, keep them right-aligned
        t.add_row(r.into_iter().enumerate().map(|(i, v)| {
            if i == last {
                Cell::new(v).set_alignment(CellAlignment::Right)
            } else {
                Cell::new(v)
            }
        }));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> anyhow::Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
