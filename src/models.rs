// Copyright (c) Till contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// One ledger record. Fields are always addressed by name; `id` and
/// `occurred_on` are immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub kind: EntryKind,
    pub description: String,
    pub amount: Decimal,
    pub occurred_on: NaiveDate,
    pub payment_method: PaymentMethod,
}

/// The two mutually exclusive categories of cash movement. An entry's kind
/// decides which aggregate bucket it contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryKind {
    Inflow,
    Outflow,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Inflow => "INFLOW",
            EntryKind::Outflow => "OUTFLOW",
        }
    }
}

impl FromStr for EntryKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INFLOW" => Ok(EntryKind::Inflow),
            "OUTFLOW" => Ok(EntryKind::Outflow),
            _ => Err(LedgerError::Format(format!(
                "unknown entry kind '{}', expected inflow or outflow",
                s
            ))),
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of payment methods. Required on new entries; edits fall back
/// to `Cash` when no method is supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Pix,
    Card,
    Check,
    StoreCredit,
    Invoice,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "CASH",
            PaymentMethod::Pix => "PIX",
            PaymentMethod::Card => "CARD",
            PaymentMethod::Check => "CHECK",
            PaymentMethod::StoreCredit => "STORE_CREDIT",
            PaymentMethod::Invoice => "INVOICE",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "CASH" => Ok(PaymentMethod::Cash),
            "PIX" => Ok(PaymentMethod::Pix),
            "CARD" => Ok(PaymentMethod::Card),
            "CHECK" => Ok(PaymentMethod::Check),
            "STORE_CREDIT" => Ok(PaymentMethod::StoreCredit),
            "INVOICE" => Ok(PaymentMethod::Invoice),
            _ => Err(LedgerError::Format(format!(
                "unknown payment method '{}', expected one of cash, pix, card, check, store-credit, invoice",
                s
            ))),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
