// Copyright (c) Till contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use till::db;
use till::error::LedgerError;
use till::models::{EntryKind, PaymentMethod};
use till::store::Ledger;

fn setup() -> Ledger {
    Ledger::new(db::open_in_memory().unwrap())
}

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn create_then_query_returns_identical_fields() {
    let ledger = setup();
    let id = ledger
        .create(
            EntryKind::Inflow,
            "morning sales",
            dec("150.75"),
            d("2024-01-05"),
            PaymentMethod::Pix,
        )
        .unwrap();

    let got = ledger.query_range(d("2024-01-05"), d("2024-01-05")).unwrap();
    assert_eq!(got.len(), 1);
    let e = &got[0];
    assert_eq!(e.id, id);
    assert_eq!(e.kind, EntryKind::Inflow);
    assert_eq!(e.description, "morning sales");
    assert_eq!(e.amount, dec("150.75"));
    assert_eq!(e.occurred_on, d("2024-01-05"));
    assert_eq!(e.payment_method, PaymentMethod::Pix);
}

#[test]
fn range_bounds_are_inclusive() {
    let ledger = setup();
    for day in ["2024-01-01", "2024-01-15", "2024-01-31", "2024-02-01"] {
        ledger
            .create(
                EntryKind::Inflow,
                "x",
                dec("1.00"),
                d(day),
                PaymentMethod::Cash,
            )
            .unwrap();
    }
    let got = ledger.query_range(d("2024-01-01"), d("2024-01-31")).unwrap();
    assert_eq!(got.len(), 3);
    assert!(got.iter().all(|e| e.occurred_on <= d("2024-01-31")));
}

#[test]
fn query_orders_by_date_then_id() {
    let ledger = setup();
    // inserted out of date order on purpose
    let late = ledger
        .create(
            EntryKind::Outflow,
            "later",
            dec("2.00"),
            d("2024-03-20"),
            PaymentMethod::Cash,
        )
        .unwrap();
    let early = ledger
        .create(
            EntryKind::Inflow,
            "earlier",
            dec("1.00"),
            d("2024-03-01"),
            PaymentMethod::Cash,
        )
        .unwrap();

    let got = ledger.query_range(d("2024-03-01"), d("2024-03-31")).unwrap();
    assert_eq!(got[0].id, early);
    assert_eq!(got[1].id, late);
}

#[test]
fn delete_is_permanent_and_second_delete_fails() {
    let ledger = setup();
    let id = ledger
        .create(
            EntryKind::Outflow,
            "supplies",
            dec("20.00"),
            d("2024-01-10"),
            PaymentMethod::Card,
        )
        .unwrap();

    ledger.delete(id).unwrap();
    let got = ledger.query_range(d("2020-01-01"), d("2030-12-31")).unwrap();
    assert!(got.iter().all(|e| e.id != id));

    match ledger.delete(id) {
        Err(LedgerError::NotFound(missing)) => assert_eq!(missing, id),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn update_overwrites_all_mutable_fields() {
    let ledger = setup();
    let id = ledger
        .create(
            EntryKind::Inflow,
            "typo",
            dec("10.00"),
            d("2024-01-10"),
            PaymentMethod::Cash,
        )
        .unwrap();

    ledger
        .update(
            id,
            EntryKind::Outflow,
            "corrected",
            dec("12.50"),
            PaymentMethod::Invoice,
        )
        .unwrap();

    let got = ledger.query_range(d("2024-01-10"), d("2024-01-10")).unwrap();
    let e = &got[0];
    assert_eq!(e.kind, EntryKind::Outflow);
    assert_eq!(e.description, "corrected");
    assert_eq!(e.amount, dec("12.50"));
    assert_eq!(e.payment_method, PaymentMethod::Invoice);
    // occurred_on untouched
    assert_eq!(e.occurred_on, d("2024-01-10"));
}

#[test]
fn update_missing_id_fails_and_leaves_rows_alone() {
    let ledger = setup();
    ledger
        .create(
            EntryKind::Inflow,
            "only row",
            dec("5.00"),
            d("2024-01-10"),
            PaymentMethod::Cash,
        )
        .unwrap();
    let before = ledger.count().unwrap();

    let res = ledger.update(
        9999,
        EntryKind::Inflow,
        "ghost",
        dec("1.00"),
        PaymentMethod::Cash,
    );
    assert!(matches!(res, Err(LedgerError::NotFound(9999))));
    assert_eq!(ledger.count().unwrap(), before);
}

#[test]
fn empty_description_and_negative_amount_are_rejected() {
    let ledger = setup();
    let res = ledger.create(
        EntryKind::Inflow,
        "   ",
        dec("1.00"),
        d("2024-01-10"),
        PaymentMethod::Cash,
    );
    assert!(matches!(res, Err(LedgerError::Validation(_))));

    let res = ledger.create(
        EntryKind::Inflow,
        "negative",
        dec("-1.00"),
        d("2024-01-10"),
        PaymentMethod::Cash,
    );
    assert!(matches!(res, Err(LedgerError::Validation(_))));
    assert_eq!(ledger.count().unwrap(), 0);
}

#[test]
fn legacy_table_gains_payment_method_without_data_loss() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE entries(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            kind TEXT NOT NULL,
            description TEXT NOT NULL,
            amount TEXT NOT NULL,
            occurred_on TEXT NOT NULL
        );
        INSERT INTO entries(kind, description, amount, occurred_on)
        VALUES ('INFLOW', 'pre-migration row', '42.00', '2023-12-01');
        "#,
    )
    .unwrap();

    db::init_schema(&conn).unwrap();
    let ledger = Ledger::new(conn);

    let got = ledger.query_range(d("2023-12-01"), d("2023-12-01")).unwrap();
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].description, "pre-migration row");
    assert_eq!(got[0].amount, dec("42.00"));
    // absent method defaults to cash
    assert_eq!(got[0].payment_method, PaymentMethod::Cash);
}
