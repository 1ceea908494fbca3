// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::env;
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Finfolio", "finfolio"));

/// Environment override for the database location.
pub const DB_ENV: &str = "FINFOLIO_DB";

/// Connection configuration for the backing store.
///
/// With an embedded store the whole connection setup collapses to one
/// parameter, the database path. It is environment-supplied (`FINFOLIO_DB`,
/// with `.env` support) and falls back to the platform data dir.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        dotenvy::dotenv().ok();
        if let Ok(path) = env::var(DB_ENV) {
            return Ok(Config {
                db_path: PathBuf::from(path),
            });
        }
        Ok(Config {
            db_path: default_db_path()?,
        })
    }
}

fn default_db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("finfolio.sqlite"))
}
