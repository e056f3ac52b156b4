// Copyright (c) Till contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use rust_decimal::Decimal;

use crate::error::{LedgerError, Result};
use crate::models::{Entry, EntryKind, PaymentMethod};

/// The ledger store. Owns the single database connection; all mutating
/// calls commit durably before returning (autocommit, one statement each).
pub struct Ledger {
    conn: Connection,
}

impl Ledger {
    /// Wraps an already-initialized connection (see `db::open_or_init`).
    pub fn new(conn: Connection) -> Self {
        Ledger { conn }
    }

    /// Records a new entry and returns its assigned id. The description
    /// must be non-empty and the amount non-negative; amounts are stored
    /// at fixed 2-decimal precision, dates in canonical `YYYY-MM-DD` form.
    pub fn create(
        &self,
        kind: EntryKind,
        description: &str,
        amount: Decimal,
        occurred_on: NaiveDate,
        payment_method: PaymentMethod,
    ) -> Result<i64> {
        let description = description.trim();
        validate(description, amount)?;
        self.conn.execute(
            "INSERT INTO entries(kind, description, amount, occurred_on, payment_method)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                kind.as_str(),
                description,
                amount.round_dp(2).to_string(),
                occurred_on.to_string(),
                payment_method.as_str()
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Overwrites every mutable field of an existing entry. `id` and
    /// `occurred_on` never change after creation.
    pub fn update(
        &self,
        id: i64,
        kind: EntryKind,
        description: &str,
        amount: Decimal,
        payment_method: PaymentMethod,
    ) -> Result<()> {
        let description = description.trim();
        validate(description, amount)?;
        let n = self.conn.execute(
            "UPDATE entries SET kind=?1, description=?2, amount=?3, payment_method=?4 WHERE id=?5",
            params![
                kind.as_str(),
                description,
                amount.round_dp(2).to_string(),
                payment_method.as_str(),
                id
            ],
        )?;
        if n == 0 {
            return Err(LedgerError::NotFound(id));
        }
        Ok(())
    }

    /// Removes an entry permanently. Ids are never reused.
    pub fn delete(&self, id: i64) -> Result<()> {
        let n = self
            .conn
            .execute("DELETE FROM entries WHERE id=?1", params![id])?;
        if n == 0 {
            return Err(LedgerError::NotFound(id));
        }
        Ok(())
    }

    /// Returns every entry with `occurred_on` between `start` and `end`
    /// inclusive, ordered by date then id.
    pub fn query_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Entry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, kind, description, amount, occurred_on, payment_method
             FROM entries WHERE occurred_on BETWEEN ?1 AND ?2
             ORDER BY occurred_on, id",
        )?;
        let mut rows = stmt.query(params![start.to_string(), end.to_string()])?;
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            out.push(entry_from_row(r)?);
        }
        Ok(out)
    }

    pub fn count(&self) -> Result<i64> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM entries", [], |r| r.get(0))?;
        Ok(n)
    }
}

fn validate(description: &str, amount: Decimal) -> Result<()> {
    if description.is_empty() {
        return Err(LedgerError::Validation(
            "description must not be empty".into(),
        ));
    }
    if amount.is_sign_negative() {
        return Err(LedgerError::Validation(format!(
            "amount must not be negative: {}",
            amount
        )));
    }
    Ok(())
}

fn entry_from_row(r: &Row<'_>) -> Result<Entry> {
    let kind_s: String = r.get(1)?;
    let amount_s: String = r.get(3)?;
    Ok(Entry {
        id: r.get(0)?,
        kind: EntryKind::from_str(&kind_s)?,
        description: r.get(2)?,
        amount: Decimal::from_str(&amount_s)
            .map_err(|_| LedgerError::Format(format!("corrupt stored amount '{}'", amount_s)))?,
        occurred_on: r.get(4)?,
        payment_method: r
            .get::<_, Option<String>>(5)?
            .map(|s| PaymentMethod::from_str(&s))
            .transpose()?
            .unwrap_or_default(),
    })
}
