// Copyright (c) Till contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Entry, EntryKind};

/// Aggregate totals over a queried range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub inflow_total: Decimal,
    pub outflow_total: Decimal,
    pub balance: Decimal,
}

impl Totals {
    pub fn zero() -> Self {
        Totals {
            inflow_total: Decimal::ZERO,
            outflow_total: Decimal::ZERO,
            balance: Decimal::ZERO,
        }
    }
}

/// Sums each entry into the bucket its kind selects. Decimal accumulation,
/// so many small amounts never drift the way floats would.
pub fn summarize(entries: &[Entry]) -> Totals {
    let mut inflow = Decimal::ZERO;
    let mut outflow = Decimal::ZERO;
    for e in entries {
        match e.kind {
            EntryKind::Inflow => inflow += e.amount,
            EntryKind::Outflow => outflow += e.amount,
        }
    }
    Totals {
        inflow_total: inflow,
        outflow_total: outflow,
        balance: inflow - outflow,
    }
}
