// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::{params, Connection};

use crate::error::StoreError;

/// Well-known identifier of the sole user row (single-tenant design).
pub const DEFAULT_USER_ID: &str = "single_user_123";
pub const DEFAULT_USER_NAME: &str = "User Portfolio";

/// Idempotent schema creation, safe to run on every startup.
///
/// Primary keys are layer-generated UUID strings; decimal columns are stored
/// as canonical decimal text so shares keep 6 fractional digits and currency
/// amounts keep 2. Transactions hang off assets, assets off the single user.
pub fn init_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS users(
        user_id TEXT PRIMARY KEY,
        name TEXT
    );

    CREATE TABLE IF NOT EXISTS assets(
        asset_id TEXT PRIMARY KEY,
        user_id TEXT REFERENCES users(user_id),
        ticker TEXT NOT NULL,
        purchase_date TEXT NOT NULL,
        shares TEXT NOT NULL,
        cost_basis TEXT NOT NULL,
        asset_class TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS transactions(
        transaction_id TEXT PRIMARY KEY,
        asset_id TEXT NOT NULL REFERENCES assets(asset_id),
        transaction_date TEXT NOT NULL,
        transaction_type TEXT NOT NULL,
        quantity TEXT NOT NULL,
        price TEXT NOT NULL,
        total_amount TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_asset ON transactions(asset_id);
    "#,
    )?;
    Ok(())
}

/// Inserts the well-known user iff the table is empty. Never a second row.
pub fn ensure_default_user(conn: &Connection) -> Result<(), StoreError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |r| r.get(0))?;
    if count == 0 {
        conn.execute(
            "INSERT INTO users(user_id, name) VALUES (?1, ?2)",
            params![DEFAULT_USER_ID, DEFAULT_USER_NAME],
        )?;
    }
    Ok(())
}
