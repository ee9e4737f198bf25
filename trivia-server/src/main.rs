//! trivia - serve the trivia API over PostgreSQL

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{self, migrations, PgStore};
use trivia_server::tracing_setup::{self, TracingConfig};
use trivia_server::{run_server, ServerConfig};

/// Trivia question API server
#[derive(Parser, Debug)]
#[command(name = "trivia", version, about)]
struct Args {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TRIVIA_BIND", default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Connection pool size
    #[arg(long, env = "TRIVIA_MAX_CONNECTIONS", default_value_t = db::pool::DEFAULT_MAX_CONNECTIONS)]
    max_connections: u32,

    /// Do not create missing tables on startup
    #[arg(long)]
    skip_migrations: bool,

    /// Insert the six default categories if they are missing
    #[arg(long)]
    seed_categories: bool,

    /// Debug logging (RUST_LOG still wins)
    #[arg(long)]
    debug: bool,

    /// Export traces over OTLP (requires the `telemetry` feature)
    #[arg(long)]
    otel: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    tracing_setup::init(&TracingConfig {
        debug: args.debug,
        otel: args.otel,
    })?;

    let result = run(args).await;
    tracing_setup::shutdown_otel();
    result
}

async fn run(args: Args) -> Result<()> {
    let pool = db::create_pool_with_options(&args.database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;
    tracing::info!(max_connections = args.max_connections, "Connected to database");

    if args.skip_migrations {
        tracing::info!("Skipping migrations");
    } else {
        migrations::run(&pool).await.context("Migrations failed")?;
    }

    if args.seed_categories {
        migrations::seed_categories(&pool)
            .await
            .context("Seeding categories failed")?;
    }

    let store = Arc::new(PgStore::new(pool));
    let config = ServerConfig {
        bind_addr: args.bind,
    };

    tracing::info!("Starting trivia server on {}", config.bind_addr);
    run_server(store, config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "trivia",
            "--database-url",
            "postgres://localhost/trivia",
            "--bind",
            "0.0.0.0:8080",
            "--seed-categories",
        ])
        .unwrap();
        assert_eq!(args.bind.port(), 8080);
        assert!(args.seed_categories);
        assert!(!args.skip_migrations);
    }
}
