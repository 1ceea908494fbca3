// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, Utc};
use finfolio::models::{AssetClass, TransactionType};
use finfolio::store::PortfolioStore;
use rusqlite::Connection;
use rust_decimal_macros::dec;

fn setup_with_asset() -> (PortfolioStore, String) {
    let store = PortfolioStore::attach(Connection::open_in_memory().unwrap()).unwrap();
    store.create_asset(
        "AAPL",
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        dec!(10),
        dec!(1500.00),
        AssetClass::Equity,
    );
    let id = store.read_assets()[0].asset_id.clone();
    (store, id)
}

#[test]
fn listed_most_recent_first() {
    let (store, id) = setup_with_asset();
    assert!(store.create_transaction(&id, TransactionType::Buy, dec!(10), dec!(150.00), dec!(1500.00)));
    assert!(store.create_transaction(&id, TransactionType::Sell, dec!(4), dec!(180.00), dec!(720.00)));

    let txs = store.read_transactions_by_asset(&id);
    assert_eq!(txs.len(), 2);
    assert_eq!(txs[0].transaction_type, TransactionType::Sell);
    assert_eq!(txs[1].transaction_type, TransactionType::Buy);
}

#[test]
fn timestamps_are_stamped_by_the_layer() {
    let (store, id) = setup_with_asset();
    let before = Utc::now();
    store.create_transaction(&id, TransactionType::Dividend, dec!(0), dec!(0), dec!(12.34));
    let after = Utc::now();

    let txs = store.read_transactions_by_asset(&id);
    assert_eq!(txs.len(), 1);
    assert!(txs[0].transaction_date >= before - chrono::Duration::seconds(1));
    assert!(txs[0].transaction_date <= after + chrono::Duration::seconds(1));
}

#[test]
fn total_amount_is_persisted_verbatim() {
    let (store, id) = setup_with_asset();
    // 2 x 10.00 would be 20.00; the store must keep the caller's figure.
    store.create_transaction(&id, TransactionType::Buy, dec!(2), dec!(10.00), dec!(999.99));

    let txs = store.read_transactions_by_asset(&id);
    assert_eq!(txs[0].total_amount, dec!(999.99));
}

#[test]
fn transaction_for_unknown_asset_is_rejected() {
    let (store, _) = setup_with_asset();
    assert!(!store.create_transaction(
        "no-such-asset",
        TransactionType::Buy,
        dec!(1),
        dec!(1.00),
        dec!(1.00)
    ));
}

#[test]
fn delete_asset_removes_all_its_transactions() {
    let (mut store, id) = setup_with_asset();
    for i in 1..=3 {
        store.create_transaction(
            &id,
            TransactionType::Buy,
            dec!(1),
            dec!(10.00) * rust_decimal::Decimal::from(i),
            dec!(10.00) * rust_decimal::Decimal::from(i),
        );
    }
    assert_eq!(store.read_transactions_by_asset(&id).len(), 3);

    assert!(store.delete_asset(&id));

    assert!(store.read_transactions_by_asset(&id).is_empty());
    assert!(store.read_assets().is_empty());
}
