// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use finfolio::models::{AssetClass, TransactionType};
use finfolio::store::PortfolioStore;
use rusqlite::Connection;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::tempdir;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

#[test]
fn unavailable_store_is_a_noop_everywhere() {
    let mut store = PortfolioStore::unavailable();
    assert!(!store.is_available());

    assert!(!store.create_asset("AAPL", date(), dec!(1), dec!(100), AssetClass::Equity));
    assert!(store.read_assets().is_empty());
    assert!(!store.update_asset("x", dec!(1), dec!(1)));
    assert!(!store.delete_asset("x"));
    assert!(!store.create_transaction("x", TransactionType::Buy, dec!(1), dec!(1), dec!(1)));
    assert!(store.read_transactions_by_asset("x").is_empty());

    let s = store.portfolio_summary();
    assert_eq!(s.total_assets, 0);
    assert_eq!(s.total_cost, Decimal::ZERO);
    assert!(s.breakdown.is_empty());
}

#[test]
fn bootstrap_is_idempotent_across_reopens() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("finfolio.sqlite");

    for _ in 0..2 {
        let store = PortfolioStore::attach(Connection::open(&path).unwrap()).unwrap();
        assert!(store.is_available());
    }

    let conn = Connection::open(&path).unwrap();
    let users: i64 = conn
        .query_row("SELECT COUNT(*) FROM users", [], |r| r.get(0))
        .unwrap();
    assert_eq!(users, 1);

    let (user_id, name): (String, String) = conn
        .query_row("SELECT user_id, name FROM users", [], |r| {
            Ok((r.get(0)?, r.get(1)?))
        })
        .unwrap();
    assert_eq!(user_id, "single_user_123");
    assert_eq!(name, "User Portfolio");
}

#[test]
fn assets_persist_across_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("finfolio.sqlite");

    {
        let store = PortfolioStore::attach(Connection::open(&path).unwrap()).unwrap();
        assert!(store.create_asset("VTI", date(), dec!(12), dec!(2500.00), AssetClass::Equity));
    }

    let store = PortfolioStore::attach(Connection::open(&path).unwrap()).unwrap();
    let assets = store.read_assets();
    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].ticker, "VTI");
    assert_eq!(assets[0].cost_basis, dec!(2500.00));
}
