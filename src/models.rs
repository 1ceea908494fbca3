// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub asset_id: String,
    pub user_id: String,
    pub ticker: String,
    pub purchase_date: NaiveDate,
    pub shares: Decimal,
    pub cost_basis: Decimal,
    pub asset_class: AssetClass,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub asset_id: String,
    pub transaction_date: DateTime<Utc>,
    pub transaction_type: TransactionType,
    pub quantity: Decimal,
    pub price: Decimal,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetClass {
    Equity,
    #[serde(rename = "Fixed Income")]
    FixedIncome,
    Crypto,
    Other,
}

impl AssetClass {
    pub fn parse_str(s: &str) -> Result<AssetClass> {
        match s {
            "Equity" => Ok(AssetClass::Equity),
            "Fixed Income" => Ok(AssetClass::FixedIncome),
            "Crypto" => Ok(AssetClass::Crypto),
            "Other" => Ok(AssetClass::Other),
            other => Err(anyhow::anyhow!("Unknown asset class '{}'", other)),
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            AssetClass::Equity => "Equity",
            AssetClass::FixedIncome => "Fixed Income",
            AssetClass::Crypto => "Crypto",
            AssetClass::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Buy,
    Sell,
    Dividend,
}

impl TransactionType {
    pub fn parse_str(s: &str) -> Result<TransactionType> {
        match s {
            "Buy" => Ok(TransactionType::Buy),
            "Sell" => Ok(TransactionType::Sell),
            "Dividend" => Ok(TransactionType::Dividend),
            other => Err(anyhow::anyhow!("Unknown transaction type '{}'", other)),
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => "Buy",
            TransactionType::Sell => "Sell",
            TransactionType::Dividend => "Dividend",
        }
    }
}

/// Read-side portfolio metrics for a single dashboard render.
///
/// `Default` is the all-zero summary; it is both the empty-portfolio result
/// and what a degraded store hands back.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PortfolioSummary {
    pub total_assets: i64,
    pub total_cost: Decimal,
    pub current_value: Decimal,
    pub gain_loss: Decimal,
    pub gain_loss_percent: Decimal,
    pub breakdown: BTreeMap<String, Decimal>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IntegrityIssue {
    pub issue: String,
    pub detail: String,
}
