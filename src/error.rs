// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Internal failure taxonomy for the persistence layer.
///
/// These never escape the public store API: every operation absorbs them at
/// the boundary and returns its empty/false sentinel instead. The variants
/// exist so the log line can say which kind of failure was absorbed.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store never got a connection and runs in degraded mode.
    #[error("store unavailable")]
    Unavailable,

    /// Driver-level failure, including constraint violations.
    #[error("database operation failed: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A stored value could not be decoded back into its model type.
    #[error("corrupt {column} value '{value}'")]
    Corrupt {
        column: &'static str,
        value: String,
    },
}
