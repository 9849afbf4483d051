//! Server configuration.
//!
//! Resolution order per field: CLI flag, then `ZOO_*` environment variable,
//! then the default.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

const DB_FILE_NAME: &str = "zoo_database.db";

/// Zoo Keeper - zoo, animal, enclosure and worker records over HTTP.
#[derive(Parser, Debug, Clone)]
#[command(name = "zoo-keeper", version, about)]
pub struct Config {
    /// Interface to bind.
    #[arg(long, env = "ZOO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind.
    #[arg(short = 'p', long, env = "ZOO_PORT", default_value_t = 8000)]
    pub port: u16,

    /// SQLite store file. Defaults to `zoo/zoo_database.db` under the
    /// platform data directory.
    #[arg(short = 'd', long, env = "ZOO_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// HTML file served at `/`.
    #[arg(long, env = "ZOO_INDEX_HTML", default_value = "index.html")]
    pub index_html: PathBuf,

    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins if set.
    #[arg(short = 'l', long, env = "ZOO_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

fn app_data_dir() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("zoo")
}

impl Config {
    pub fn resolve_db_path(&self) -> PathBuf {
        self.db_path
            .clone()
            .unwrap_or_else(|| app_data_dir().join(DB_FILE_NAME))
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}
