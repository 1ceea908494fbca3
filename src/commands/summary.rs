// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::PortfolioStore;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(store: &PortfolioStore, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let summary = store.portfolio_summary();
    if maybe_print_json(json_flag, false, &summary)? {
        return Ok(());
    }

    let metrics = vec![
        vec!["Total assets".into(), summary.total_assets.to_string()],
        vec!["Total cost".into(), fmt_money(&summary.total_cost)],
        vec!["Current value".into(), fmt_money(&summary.current_value)],
        vec!["Gain/loss".into(), fmt_money(&summary.gain_loss)],
        vec![
            "Gain/loss %".into(),
            format!("{:.2}", summary.gain_loss_percent),
        ],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], metrics));

    let breakdown = summary
        .breakdown
        .iter()
        .map(|(class, cost)| vec![class.clone(), fmt_money(cost)])
        .collect();
    println!("{}", pretty_table(&["Class", "Cost Basis"], breakdown));
    Ok(())
}
