// src/config/mod.rs
//
// Runtime configuration
//
// Precedence, highest first: command-line flags, environment, defaults.

pub mod cli;

use std::path::PathBuf;

use crate::db::get_database_path;
use crate::domain::{Principal, ValidationPolicy};
use crate::error::{AppError, AppResult};

pub use cli::CliConfig;

pub const ENV_DB_PATH: &str = "LIVESTOCK_DB_PATH";
pub const ENV_CALLER: &str = "LIVESTOCK_CALLER";
pub const ENV_VALIDATION: &str = "LIVESTOCK_VALIDATION";
pub const ENV_POOL_SIZE: &str = "LIVESTOCK_POOL_SIZE";

pub const DEFAULT_POOL_SIZE: u32 = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct RegistryConfig {
    /// SQLite file holding the records
    pub database_path: PathBuf,
    /// Keep records in memory only; `database_path` is ignored
    pub in_memory: bool,
    pub validation: ValidationPolicy,
    /// Principal recorded as owner of created records
    pub caller: Principal,
    pub pool_size: u32,
}

impl RegistryConfig {
    /// Build from process environment and defaults
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source and defaults
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = match lookup(ENV_DB_PATH) {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => get_database_path().unwrap_or_else(|e| {
                log::warn!("{}; falling back to ./registry.db", e);
                PathBuf::from("registry.db")
            }),
        };

        let validation = match lookup(ENV_VALIDATION) {
            Some(value) => value
                .parse::<ValidationPolicy>()
                .map_err(|e| AppError::Other(format!("{}: {}", ENV_VALIDATION, e)))?,
            None => ValidationPolicy::default(),
        };

        let caller = lookup(ENV_CALLER)
            .map(Principal::new)
            .unwrap_or_else(Principal::anonymous);

        let pool_size = match lookup(ENV_POOL_SIZE) {
            Some(value) => value.trim().parse::<u32>().map_err(|e| {
                AppError::Other(format!("{} must be a positive integer: {}", ENV_POOL_SIZE, e))
            })?,
            None => DEFAULT_POOL_SIZE,
        };

        let config = Self {
            database_path,
            in_memory: false,
            validation,
            caller,
            pool_size,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.caller.as_str().trim().is_empty() {
            return Err(AppError::Other("caller principal cannot be empty".to_string()));
        }
        if self.pool_size == 0 {
            return Err(AppError::Other("pool size must be at least 1".to_string()));
        }
        Ok(())
    }
}
