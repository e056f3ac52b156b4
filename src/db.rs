// Copyright (c) Till contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("dev.till", "Till", "till"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("till.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("Open in-memory DB")?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS entries(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        kind TEXT NOT NULL CHECK(kind IN ('INFLOW','OUTFLOW')),
        description TEXT NOT NULL,
        amount TEXT NOT NULL,
        occurred_on TEXT NOT NULL,
        payment_method TEXT NOT NULL DEFAULT 'CASH'
    );
    CREATE INDEX IF NOT EXISTS idx_entries_occurred_on ON entries(occurred_on);
    "#,
    )?;
    ensure_payment_method_column(conn)?;
    Ok(())
}

/// Early databases predate the payment_method column; add it in place so
/// existing rows survive, defaulting them to CASH.
fn ensure_payment_method_column(conn: &Connection) -> Result<()> {
    let mut stmt = conn.prepare("PRAGMA table_info(entries)")?;
    let cols = stmt.query_map([], |r| r.get::<_, String>(1))?;
    for col in cols {
        if col? == "payment_method" {
            return Ok(());
        }
    }
    conn.execute(
        "ALTER TABLE entries ADD COLUMN payment_method TEXT NOT NULL DEFAULT 'CASH'",
        [],
    )?;
    Ok(())
}
