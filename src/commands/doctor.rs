// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::PortfolioStore;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(store: &PortfolioStore) -> Result<()> {
    if !store.is_available() {
        println!("doctor: store unavailable, nothing to check");
        return Ok(());
    }
    let issues = store.integrity_report();
    if issues.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        let rows = issues
            .into_iter()
            .map(|i| vec![i.issue, i.detail])
            .collect();
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
