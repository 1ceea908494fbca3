// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finfolio::store::PortfolioStore;
use finfolio::{cli, commands};
use rusqlite::Connection;
use rust_decimal_macros::dec;

fn setup() -> PortfolioStore {
    PortfolioStore::attach(Connection::open_in_memory().unwrap()).unwrap()
}

fn asset_matches(args: &[&str]) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(args.to_vec());
    if let Some(("asset", sub)) = matches.subcommand() {
        sub.clone()
    } else {
        panic!("no asset subcommand");
    }
}

#[test]
fn asset_add_trims_and_uppercases_cli_inputs() {
    let mut store = setup();
    let sub = asset_matches(&[
        "finfolio",
        "asset",
        "add",
        "--ticker",
        " aapl ",
        "--date",
        " 2024-03-15 ",
        "--shares",
        " 10.5 ",
        "--cost-basis",
        " 1520.40 ",
        "--class",
        " Equity ",
    ]);
    commands::assets::handle(&mut store, &sub).unwrap();

    let assets = store.read_assets();
    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].ticker, "AAPL");
    assert_eq!(assets[0].shares, dec!(10.5));
    assert_eq!(assets[0].cost_basis, dec!(1520.40));
}

#[test]
fn asset_add_rejects_unknown_class() {
    let mut store = setup();
    let sub = asset_matches(&[
        "finfolio",
        "asset",
        "add",
        "--ticker",
        "AAPL",
        "--date",
        "2024-03-15",
        "--shares",
        "1",
        "--cost-basis",
        "100",
        "--class",
        "Junk",
    ]);
    assert!(commands::assets::handle(&mut store, &sub).is_err());
    assert!(store.read_assets().is_empty());
}

#[test]
fn tx_add_computes_the_total_before_persisting() {
    let store = setup();
    store.create_asset(
        "AAPL",
        chrono::NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        dec!(10),
        dec!(1500.00),
        finfolio::models::AssetClass::Equity,
    );
    let id = store.read_assets()[0].asset_id.clone();

    let matches = cli::build_cli().get_matches_from([
        "finfolio",
        "tx",
        "add",
        "--asset",
        id.as_str(),
        "--type",
        "Buy",
        "--quantity",
        "3",
        "--price",
        "19.99",
    ]);
    if let Some(("tx", sub)) = matches.subcommand() {
        commands::transactions::handle(&store, sub).unwrap();
    } else {
        panic!("no tx subcommand");
    }

    let txs = store.read_transactions_by_asset(&id);
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].total_amount, dec!(59.97));
}
