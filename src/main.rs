// src/main.rs
//
// Livestock registry server: JSON lines in on stdin, JSON lines out on stdout.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use livestock_registry::application::{handle_line, AppState};
use livestock_registry::config::{CliConfig, RegistryConfig};
use livestock_registry::db::{
    create_connection_pool, create_memory_pool, get_connection, get_database_stats,
    initialize_database, verify_database_integrity,
};
use livestock_registry::events::EventBus;
use livestock_registry::infrastructure::{StaticIdentity, SystemClock, UuidGenerator};
use livestock_registry::logger;
use livestock_registry::repositories::{
    LivestockRepository, RecordStore, SqliteRecordStore, StoreLivestockRepository,
};
use livestock_registry::services::LivestockService;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    logger::init_logger(cli.verbose);

    // 1. CONFIGURATION
    let config = cli
        .apply(RegistryConfig::from_env()?)
        .context("invalid configuration")?;
    log::debug!("Configuration: {:?}", config);

    // 2. INFRASTRUCTURE
    let pool = if config.in_memory {
        log::info!("Using in-memory store; records will not survive exit");
        Arc::new(create_memory_pool()?)
    } else {
        log::info!("Using database at {}", config.database_path.display());
        Arc::new(create_connection_pool(&config.database_path, config.pool_size)?)
    };

    // Initialize schema (idempotent)
    {
        let conn = get_connection(&pool)?;
        initialize_database(&conn)?;
        verify_database_integrity(&conn).context("database failed integrity check")?;

        let stats = get_database_stats(&conn)?;
        log::info!(
            "Registry holds {} records ({} bytes)",
            stats.record_count,
            stats.size_bytes
        );
    }

    // 3. REPOSITORIES
    let store: Arc<dyn RecordStore> = Arc::new(SqliteRecordStore::new(pool.clone()));
    let livestock_repo: Arc<dyn LivestockRepository> =
        Arc::new(StoreLivestockRepository::new(store));

    // 4. SERVICES
    let livestock_service = Arc::new(LivestockService::new(
        livestock_repo,
        Arc::new(SystemClock::new()),
        Arc::new(StaticIdentity::new(config.caller.clone())),
        Arc::new(UuidGenerator),
        Arc::new(EventBus::new()),
        config.validation,
    ));

    // 5. APPLICATION STATE
    let state = AppState::new(livestock_service);

    // 6. SERVE
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read request")?;
        if line.trim().is_empty() {
            continue;
        }

        let reply = handle_line(&state, &line);
        serde_json::to_writer(&mut stdout, &reply)?;
        writeln!(stdout)?;
        stdout.flush()?;
    }

    log::info!("Input closed, shutting down");
    Ok(())
}
