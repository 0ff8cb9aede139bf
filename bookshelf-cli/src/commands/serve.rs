//! HTTP server command
//!
//! Opens the database (creating the books table if needed), then serves
//! until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use bookshelf_server::db::DEFAULT_MAX_CONNECTIONS;
use bookshelf_server::{run_server, Database, DatabaseConfig, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "BOOKSHELF_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Database file path (created if missing)
    #[arg(long, env = "BOOKSHELF_DB_PATH", default_value = "books.db")]
    pub db_path: PathBuf,

    /// Maximum open database connections
    #[arg(
        long,
        env = "BOOKSHELF_MAX_CONNECTIONS",
        default_value_t = DEFAULT_MAX_CONNECTIONS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_connections: u32,

    /// Request timeout in seconds
    #[arg(
        long,
        env = "BOOKSHELF_REQUEST_TIMEOUT",
        default_value = "30",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long, env = "BOOKSHELF_CORS_PERMISSIVE")]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = DatabaseConfig {
        path: args.db_path,
        max_connections: args.max_connections,
    };

    tracing::info!("Opening database at {}", db_config.path.display());
    let db = Database::connect(&db_config)
        .await
        .with_context(|| format!("Failed to open database {}", db_config.path.display()))?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        request_timeout: Duration::from_secs(args.timeout),
    };

    // Run server (blocks until shutdown)
    run_server(db, config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_server_defaults() {
        let args = ServeArgs::try_parse_from(["serve"]).unwrap();
        let server = ServerConfig::default();
        let db = DatabaseConfig::default();

        assert_eq!(args.bind, server.bind_addr);
        assert_eq!(args.db_path, db.path);
        assert_eq!(args.max_connections, db.max_connections);
        assert_eq!(Duration::from_secs(args.timeout), server.request_timeout);
        assert!(!args.cors_permissive);
    }

    #[test]
    fn flags_override_defaults() {
        let args = ServeArgs::try_parse_from([
            "serve",
            "--bind",
            "0.0.0.0:9000",
            "--db-path",
            "/tmp/library.db",
            "--max-connections",
            "4",
            "--cors-permissive",
        ])
        .unwrap();

        assert_eq!(args.bind.port(), 9000);
        assert_eq!(args.db_path, PathBuf::from("/tmp/library.db"));
        assert_eq!(args.max_connections, 4);
        assert!(args.cors_permissive);
    }

    #[test]
    fn rejects_zero_connections_and_timeout() {
        assert!(ServeArgs::try_parse_from(["serve", "--max-connections", "0"]).is_err());
        assert!(ServeArgs::try_parse_from(["serve", "--timeout", "0"]).is_err());
        assert!(ServeArgs::try_parse_from(["serve", "--timeout", "1"]).is_ok());
    }

    #[test]
    fn rejects_bad_bind_address() {
        assert!(ServeArgs::try_parse_from(["serve", "--bind", "localhost"]).is_err());
    }
}
