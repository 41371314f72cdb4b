// src/config/cli.rs

use std::path::PathBuf;

use clap::Parser;

use crate::config::RegistryConfig;
use crate::domain::{Principal, ValidationPolicy};
use crate::error::AppResult;

/// Serve the livestock registry as JSON lines over stdin/stdout
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "livestock-registry", version, about)]
pub struct CliConfig {
    /// SQLite database file (overrides LIVESTOCK_DB_PATH)
    #[arg(long = "db", value_name = "PATH")]
    pub database_path: Option<PathBuf>,

    /// Keep records in memory only
    #[arg(long, conflicts_with = "database_path")]
    pub in_memory: bool,

    /// Principal recorded as owner of created records (overrides LIVESTOCK_CALLER)
    #[arg(long)]
    pub caller: Option<String>,

    /// Payload validation: strict or permissive (overrides LIVESTOCK_VALIDATION)
    #[arg(long)]
    pub validation: Option<ValidationPolicy>,

    /// Maximum pooled database connections (overrides LIVESTOCK_POOL_SIZE)
    #[arg(long)]
    pub pool_size: Option<u32>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Layer the flags that were given on top of `base`
    pub fn apply(&self, mut base: RegistryConfig) -> AppResult<RegistryConfig> {
        if let Some(path) = &self.database_path {
            base.database_path = path.clone();
        }
        if self.in_memory {
            base.in_memory = true;
        }
        if let Some(caller) = &self.caller {
            base.caller = Principal::new(caller.clone());
        }
        if let Some(validation) = self.validation {
            base.validation = validation;
        }
        if let Some(pool_size) = self.pool_size {
            base.pool_size = pool_size;
        }

        base.validate()?;
        Ok(base)
    }
}
