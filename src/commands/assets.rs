// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::AssetClass;
use crate::store::PortfolioStore;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::Result;

pub fn handle(store: &mut PortfolioStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("update", sub)) => update(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &PortfolioStore, sub: &clap::ArgMatches) -> Result<()> {
    let ticker = sub
        .get_one::<String>("ticker")
        .map(|s| s.trim().to_uppercase())
        .unwrap();
    let date = parse_date(sub.get_one::<String>("date").unwrap().trim())?;
    let shares = parse_decimal(sub.get_one::<String>("shares").unwrap().trim())?;
    let cost_basis = parse_decimal(sub.get_one::<String>("cost-basis").unwrap().trim())?;
    let class = AssetClass::parse_str(sub.get_one::<String>("class").unwrap().trim())?;

    if store.create_asset(&ticker, date, shares, cost_basis, class) {
        println!(
            "Added asset {} ({}, {} shares, cost {})",
            ticker,
            class.to_str(),
            shares,
            fmt_money(&cost_basis)
        );
    } else {
        println!("Failed to add asset {}", ticker);
    }
    Ok(())
}

fn list(store: &PortfolioStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let assets = store.read_assets();
    if !maybe_print_json(json_flag, jsonl_flag, &assets)? {
        let rows = assets
            .into_iter()
            .map(|a| {
                vec![
                    a.asset_id,
                    a.ticker,
                    a.purchase_date.to_string(),
                    a.shares.to_string(),
                    fmt_money(&a.cost_basis),
                    a.asset_class.to_str().to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Ticker", "Purchased", "Shares", "Cost Basis", "Class"],
                rows
            )
        );
    }
    Ok(())
}

fn update(store: &PortfolioStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").map(|s| s.trim()).unwrap();
    let shares = parse_decimal(sub.get_one::<String>("shares").unwrap().trim())?;
    let cost_basis = parse_decimal(sub.get_one::<String>("cost-basis").unwrap().trim())?;

    if store.update_asset(id, shares, cost_basis) {
        println!(
            "Updated asset {} ({} shares, cost {})",
            id,
            shares,
            fmt_money(&cost_basis)
        );
    } else {
        println!("No asset updated for id {}", id);
    }
    Ok(())
}

fn remove(store: &mut PortfolioStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").map(|s| s.trim()).unwrap();
    if store.delete_asset(id) {
        println!("Removed asset {} and its transactions", id);
    } else {
        println!("No asset removed for id {}", id);
    }
    Ok(())
}
