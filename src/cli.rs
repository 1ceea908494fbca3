// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{arg, Command};

pub fn build_cli() -> Command {
    Command::new("finfolio")
        .about("Single-user portfolio tracker with cost-basis metrics")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(Command::new("init").about("Create the database and default user"))
        .subcommand(
            Command::new("asset")
                .about("Manage portfolio assets")
                .subcommand(
                    Command::new("add")
                        .about("Add an asset to the portfolio")
                        .arg(arg!(--ticker <TICKER> "Ticker symbol").required(true))
                        .arg(arg!(--date <DATE> "Purchase date, YYYY-MM-DD").required(true))
                        .arg(arg!(--shares <SHARES> "Share quantity").required(true))
                        .arg(
                            arg!(--"cost-basis" <AMOUNT> "Total acquisition cost").required(true),
                        )
                        .arg(
                            arg!(--class <CLASS> "Equity, 'Fixed Income', Crypto or Other")
                                .required(true),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("List all assets")
                        .arg(arg!(--json "Print JSON"))
                        .arg(arg!(--jsonl "Print JSON lines")),
                )
                .subcommand(
                    Command::new("update")
                        .about("Change an asset's shares and cost basis")
                        .arg(arg!(--id <ASSET_ID> "Asset identifier").required(true))
                        .arg(arg!(--shares <SHARES> "New share quantity").required(true))
                        .arg(arg!(--"cost-basis" <AMOUNT> "New cost basis").required(true)),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete an asset and its transaction history")
                        .arg(arg!(--id <ASSET_ID> "Asset identifier").required(true)),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction against an asset")
                        .arg(arg!(--asset <ASSET_ID> "Asset identifier").required(true))
                        .arg(arg!(--"type" <TYPE> "Buy, Sell or Dividend").required(true))
                        .arg(arg!(--quantity <QTY> "Unit quantity").required(true))
                        .arg(arg!(--price <PRICE> "Unit price").required(true)),
                )
                .subcommand(
                    Command::new("list")
                        .about("List an asset's transactions, most recent first")
                        .arg(arg!(--asset <ASSET_ID> "Asset identifier").required(true))
                        .arg(arg!(--json "Print JSON"))
                        .arg(arg!(--jsonl "Print JSON lines")),
                ),
        )
        .subcommand(
            Command::new("summary")
                .about("Portfolio metrics and asset-class breakdown")
                .arg(arg!(--json "Print JSON")),
        )
        .subcommand(Command::new("doctor").about("Check referential integrity"))
}
