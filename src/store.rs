// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;
use tracing::{debug, error, warn};

use crate::config::Config;
use crate::db;
use crate::error::StoreError;
use crate::models::{
    Asset, AssetClass, IntegrityIssue, PortfolioSummary, Transaction, TransactionType,
};
use crate::utils::{new_id, parse_date};

/// Owner of the single long-lived connection to the backing store.
///
/// The store is fail-soft: if the connection cannot be opened it degrades
/// instead of erroring, and every operation first checks availability and
/// returns its empty/false sentinel when degraded. Internal failures
/// (driver errors, constraint violations, undecodable rows) are absorbed at
/// this boundary the same way, with a log line saying what was swallowed.
pub struct PortfolioStore {
    conn: Option<Connection>,
}

impl PortfolioStore {
    /// Opens the database and bootstraps schema and default user. Never
    /// fails: on any error the store comes up degraded.
    pub fn open(cfg: &Config) -> PortfolioStore {
        let opened = Connection::open(&cfg.db_path)
            .map_err(StoreError::from)
            .and_then(PortfolioStore::attach);
        match opened {
            Ok(store) => store,
            Err(e) => {
                error!("portfolio store degraded: {}", e);
                PortfolioStore::unavailable()
            }
        }
    }

    /// Wraps an existing connection, running the schema and default-user
    /// bootstrap on it. Tests hand in `Connection::open_in_memory()`.
    pub fn attach(conn: Connection) -> Result<PortfolioStore, StoreError> {
        db::init_schema(&conn)?;
        db::ensure_default_user(&conn)?;
        Ok(PortfolioStore { conn: Some(conn) })
    }

    /// Explicit degraded state: every operation on this store is a no-op.
    pub fn unavailable() -> PortfolioStore {
        PortfolioStore { conn: None }
    }

    pub fn is_available(&self) -> bool {
        self.conn.is_some()
    }

    fn conn(&self) -> Result<&Connection, StoreError> {
        self.conn.as_ref().ok_or(StoreError::Unavailable)
    }

    // --- Assets ---

    pub fn create_asset(
        &self,
        ticker: &str,
        purchase_date: NaiveDate,
        shares: Decimal,
        cost_basis: Decimal,
        asset_class: AssetClass,
    ) -> bool {
        match self.try_create_asset(ticker, purchase_date, shares, cost_basis, asset_class) {
            Ok(()) => true,
            Err(e) => {
                absorbed("create_asset", &e);
                false
            }
        }
    }

    fn try_create_asset(
        &self,
        ticker: &str,
        purchase_date: NaiveDate,
        shares: Decimal,
        cost_basis: Decimal,
        asset_class: AssetClass,
    ) -> Result<(), StoreError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO assets(asset_id, user_id, ticker, purchase_date, shares, cost_basis, asset_class)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                new_id(),
                db::DEFAULT_USER_ID,
                ticker,
                purchase_date.to_string(),
                shares.round_dp(6).to_string(),
                cost_basis.round_dp(2).to_string(),
                asset_class.to_str(),
            ],
        )?;
        Ok(())
    }

    /// All asset rows in natural storage order.
    pub fn read_assets(&self) -> Vec<Asset> {
        self.try_read_assets().unwrap_or_else(|e| {
            absorbed("read_assets", &e);
            Vec::new()
        })
    }

    fn try_read_assets(&self) -> Result<Vec<Asset>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT asset_id, user_id, ticker, purchase_date, shares, cost_basis, asset_class
             FROM assets",
        )?;
        let rows = stmt.query_map([], |r| {
            Ok((
                r.get::<_, String>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, String>(2)?,
                r.get::<_, String>(3)?,
                r.get::<_, String>(4)?,
                r.get::<_, String>(5)?,
                r.get::<_, String>(6)?,
            ))
        })?;
        let mut assets = Vec::new();
        for row in rows {
            let (asset_id, user_id, ticker, date_s, shares_s, cost_s, class_s) = row?;
            assets.push(Asset {
                asset_id,
                user_id,
                ticker,
                purchase_date: date_column("purchase_date", date_s)?,
                shares: decimal_column("shares", shares_s)?,
                cost_basis: decimal_column("cost_basis", cost_s)?,
                asset_class: class_column(class_s)?,
            });
        }
        Ok(assets)
    }

    /// Updates the two mutable fields only. False when no row matched.
    pub fn update_asset(&self, asset_id: &str, shares: Decimal, cost_basis: Decimal) -> bool {
        match self.try_update_asset(asset_id, shares, cost_basis) {
            Ok(matched) => matched,
            Err(e) => {
                absorbed("update_asset", &e);
                false
            }
        }
    }

    fn try_update_asset(
        &self,
        asset_id: &str,
        shares: Decimal,
        cost_basis: Decimal,
    ) -> Result<bool, StoreError> {
        let conn = self.conn()?;
        let changed = conn.execute(
            "UPDATE assets SET shares=?1, cost_basis=?2 WHERE asset_id=?3",
            params![
                shares.round_dp(6).to_string(),
                cost_basis.round_dp(2).to_string(),
                asset_id
            ],
        )?;
        Ok(changed > 0)
    }

    /// Deletes dependent transactions, then the asset, as one unit of work.
    /// False when the asset did not exist.
    pub fn delete_asset(&mut self, asset_id: &str) -> bool {
        match self.try_delete_asset(asset_id) {
            Ok(existed) => existed,
            Err(e) => {
                absorbed("delete_asset", &e);
                false
            }
        }
    }

    fn try_delete_asset(&mut self, asset_id: &str) -> Result<bool, StoreError> {
        let conn = self.conn.as_mut().ok_or(StoreError::Unavailable)?;
        let tx = conn.transaction()?;
        tx.execute(
            "DELETE FROM transactions WHERE asset_id=?1",
            params![asset_id],
        )?;
        let deleted = tx.execute("DELETE FROM assets WHERE asset_id=?1", params![asset_id])?;
        tx.commit()?;
        Ok(deleted > 0)
    }

    // --- Transactions ---

    /// `total_amount` is the caller's quantity x price; the store persists
    /// it verbatim rather than rederiving it.
    pub fn create_transaction(
        &self,
        asset_id: &str,
        transaction_type: TransactionType,
        quantity: Decimal,
        price: Decimal,
        total_amount: Decimal,
    ) -> bool {
        match self.try_create_transaction(asset_id, transaction_type, quantity, price, total_amount)
        {
            Ok(()) => true,
            Err(e) => {
                absorbed("create_transaction", &e);
                false
            }
        }
    }

    fn try_create_transaction(
        &self,
        asset_id: &str,
        transaction_type: TransactionType,
        quantity: Decimal,
        price: Decimal,
        total_amount: Decimal,
    ) -> Result<(), StoreError> {
        let conn = self.conn()?;
        let stamped = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        conn.execute(
            "INSERT INTO transactions(transaction_id, asset_id, transaction_date, transaction_type, quantity, price, total_amount)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                new_id(),
                asset_id,
                stamped,
                transaction_type.to_str(),
                quantity.round_dp(6).to_string(),
                price.round_dp(2).to_string(),
                total_amount.round_dp(2).to_string(),
            ],
        )?;
        Ok(())
    }

    /// Per-asset history, most recent first. Rowid breaks same-instant ties.
    pub fn read_transactions_by_asset(&self, asset_id: &str) -> Vec<Transaction> {
        self.try_read_transactions_by_asset(asset_id)
            .unwrap_or_else(|e| {
                absorbed("read_transactions_by_asset", &e);
                Vec::new()
            })
    }

    fn try_read_transactions_by_asset(
        &self,
        asset_id: &str,
    ) -> Result<Vec<Transaction>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT transaction_id, asset_id, transaction_date, transaction_type, quantity, price, total_amount
             FROM transactions WHERE asset_id=?1
             ORDER BY transaction_date DESC, rowid DESC",
        )?;
        let rows = stmt.query_map(params![asset_id], |r| {
            Ok((
                r.get::<_, String>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, String>(2)?,
                r.get::<_, String>(3)?,
                r.get::<_, String>(4)?,
                r.get::<_, String>(5)?,
                r.get::<_, String>(6)?,
            ))
        })?;
        let mut transactions = Vec::new();
        for row in rows {
            let (transaction_id, asset_id, date_s, type_s, qty_s, price_s, total_s) = row?;
            transactions.push(Transaction {
                transaction_id,
                asset_id,
                transaction_date: datetime_column("transaction_date", date_s)?,
                transaction_type: type_column(type_s)?,
                quantity: decimal_column("quantity", qty_s)?,
                price: decimal_column("price", price_s)?,
                total_amount: decimal_column("total_amount", total_s)?,
            });
        }
        Ok(transactions)
    }

    // --- Reporting and aggregation ---

    /// Point-in-time portfolio metrics: three reads, no writes.
    ///
    /// `current_value` is total cost with a fixed 5% markup. That placeholder
    /// is part of the observable contract and is kept as-is.
    pub fn portfolio_summary(&self) -> PortfolioSummary {
        self.try_portfolio_summary().unwrap_or_else(|e| {
            absorbed("portfolio_summary", &e);
            PortfolioSummary::default()
        })
    }

    fn try_portfolio_summary(&self) -> Result<PortfolioSummary, StoreError> {
        let conn = self.conn()?;

        let total_assets: i64 =
            conn.query_row("SELECT COUNT(DISTINCT ticker) FROM assets", [], |r| r.get(0))?;

        // Cost sums are aggregated in Decimal rather than in SQL, which
        // would coerce the text columns to floats.
        let mut cost_stmt = conn.prepare("SELECT cost_basis FROM assets")?;
        let cost_rows = cost_stmt.query_map([], |r| r.get::<_, String>(0))?;
        let mut total_cost = Decimal::ZERO;
        for row in cost_rows {
            total_cost += decimal_column("cost_basis", row?)?;
        }

        let current_value = total_cost * dec!(1.05);
        let gain_loss = current_value - total_cost;
        let gain_loss_percent = if total_cost > Decimal::ZERO {
            (gain_loss / total_cost) * dec!(100)
        } else {
            Decimal::ZERO
        };

        let mut class_stmt = conn.prepare("SELECT asset_class, cost_basis FROM assets")?;
        let class_rows = class_stmt.query_map([], |r| {
            Ok((r.get::<_, String>(0)?, r.get::<_, String>(1)?))
        })?;
        let mut breakdown: BTreeMap<String, Decimal> = BTreeMap::new();
        for row in class_rows {
            let (class, cost_s) = row?;
            *breakdown.entry(class).or_insert(Decimal::ZERO) +=
                decimal_column("cost_basis", cost_s)?;
        }

        Ok(PortfolioSummary {
            total_assets,
            total_cost,
            current_value,
            gain_loss,
            gain_loss_percent,
            breakdown,
        })
    }

    /// Referential-integrity sweep for the doctor command. The schema's
    /// foreign keys prevent these under normal operation; a database file
    /// written by other tooling may still carry them.
    pub fn integrity_report(&self) -> Vec<IntegrityIssue> {
        self.try_integrity_report().unwrap_or_else(|e| {
            absorbed("integrity_report", &e);
            Vec::new()
        })
    }

    fn try_integrity_report(&self) -> Result<Vec<IntegrityIssue>, StoreError> {
        let conn = self.conn()?;
        let mut issues = Vec::new();

        let mut stmt = conn.prepare(
            "SELECT transaction_id, asset_id FROM transactions
             WHERE asset_id NOT IN (SELECT asset_id FROM assets)",
        )?;
        let mut cur = stmt.query([])?;
        while let Some(r) = cur.next()? {
            let tid: String = r.get(0)?;
            let aid: String = r.get(1)?;
            issues.push(IntegrityIssue {
                issue: "transaction_without_asset".into(),
                detail: format!("{} -> {}", tid, aid),
            });
        }

        let mut stmt2 = conn.prepare(
            "SELECT asset_id, user_id FROM assets
             WHERE user_id NOT IN (SELECT user_id FROM users)",
        )?;
        let mut cur2 = stmt2.query([])?;
        while let Some(r) = cur2.next()? {
            let aid: String = r.get(0)?;
            let uid: Option<String> = r.get(1)?;
            issues.push(IntegrityIssue {
                issue: "asset_without_user".into(),
                detail: format!("{} -> {}", aid, uid.unwrap_or_else(|| "(null)".into())),
            });
        }

        Ok(issues)
    }
}

fn absorbed(op: &str, err: &StoreError) {
    match err {
        StoreError::Unavailable => debug!("{} skipped, store unavailable", op),
        other => warn!("{} absorbed: {}", op, other),
    }
}

fn decimal_column(column: &'static str, value: String) -> Result<Decimal, StoreError> {
    Decimal::from_str_exact(&value).map_err(|_| StoreError::Corrupt { column, value })
}

fn date_column(column: &'static str, value: String) -> Result<NaiveDate, StoreError> {
    parse_date(&value).map_err(|_| StoreError::Corrupt { column, value })
}

fn datetime_column(column: &'static str, value: String) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(&value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| StoreError::Corrupt { column, value })
}

fn class_column(value: String) -> Result<AssetClass, StoreError> {
    AssetClass::parse_str(&value).map_err(|_| StoreError::Corrupt {
        column: "asset_class",
        value,
    })
}

fn type_column(value: String) -> Result<TransactionType, StoreError> {
    TransactionType::parse_str(&value).map_err(|_| StoreError::Corrupt {
        column: "transaction_type",
        value,
    })
}
