// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use finfolio::{cli, commands, config::Config, store::PortfolioStore};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let matches = cli::build_cli().get_matches();

    let cfg = Config::from_env();
    // A missing store is not fatal: commands run against a degraded store
    // and report failure notices instead.
    let mut store = match &cfg {
        Ok(cfg) => PortfolioStore::open(cfg),
        Err(e) => {
            error!("resolving configuration: {:#}", e);
            PortfolioStore::unavailable()
        }
    };

    match matches.subcommand() {
        Some(("init", _)) => match (&cfg, store.is_available()) {
            (Ok(cfg), true) => println!("Database initialized at {}", cfg.db_path.display()),
            _ => println!("Database unavailable"),
        },
        Some(("asset", sub)) => commands::assets::handle(&mut store, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&store, sub)?,
        Some(("summary", sub)) => commands::summary::handle(&store, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
