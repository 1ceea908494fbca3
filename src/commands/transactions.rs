// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TransactionType;
use crate::store::PortfolioStore;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;

pub fn handle(store: &PortfolioStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &PortfolioStore, sub: &clap::ArgMatches) -> Result<()> {
    let asset_id = sub.get_one::<String>("asset").map(|s| s.trim()).unwrap();
    let tx_type = TransactionType::parse_str(sub.get_one::<String>("type").unwrap().trim())?;
    let quantity = parse_decimal(sub.get_one::<String>("quantity").unwrap().trim())?;
    let price = parse_decimal(sub.get_one::<String>("price").unwrap().trim())?;

    // The store never derives the total; it is computed here, caller-side.
    let total_amount = (quantity * price).round_dp(2);

    if store.create_transaction(asset_id, tx_type, quantity, price, total_amount) {
        println!(
            "Recorded {} {} @ {} (total {}) for asset {}",
            tx_type.to_str(),
            quantity,
            fmt_money(&price),
            fmt_money(&total_amount),
            asset_id
        );
    } else {
        println!("Failed to record transaction for asset {}", asset_id);
    }
    Ok(())
}

fn list(store: &PortfolioStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let asset_id = sub.get_one::<String>("asset").map(|s| s.trim()).unwrap();
    let transactions = store.read_transactions_by_asset(asset_id);
    if !maybe_print_json(json_flag, jsonl_flag, &transactions)? {
        let rows = transactions
            .into_iter()
            .map(|t| {
                vec![
                    t.transaction_id,
                    t.transaction_date.format("%Y-%m-%d %H:%M:%S").to_string(),
                    t.transaction_type.to_str().to_string(),
                    t.quantity.to_string(),
                    fmt_money(&t.price),
                    fmt_money(&t.total_amount),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Date", "Type", "Qty", "Price", "Total"], rows)
        );
    }
    Ok(())
}
