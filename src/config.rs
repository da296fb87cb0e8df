use clap::{Args, Parser, ValueEnum};

#[derive(Clone, Debug, Default, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub database: DatabaseConfig,

    #[command(flatten)]
    pub pagination: PaginationConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "MESSAGE_BOARD_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "MESSAGE_BOARD_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Port for the liveness and readiness probes
    #[arg(long, env = "MESSAGE_BOARD_MGMT_PORT", default_value_t = 9090)]
    pub mgmt_port: u16,

    /// Seconds a single request may run before it is answered with 504
    #[arg(long, env = "MESSAGE_BOARD_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Seconds to wait for in-flight work after a shutdown signal
    #[arg(long, env = "MESSAGE_BOARD_SHUTDOWN_TIMEOUT_SECS", default_value_t = 5)]
    pub shutdown_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            mgmt_port: 9090,
            request_timeout_secs: 30,
            shutdown_timeout_secs: 5,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL. Messages are kept in memory when unset.
    #[arg(long = "database-url", env = "MESSAGE_BOARD_DATABASE_URL")]
    pub url: Option<String>,

    #[arg(long, env = "MESSAGE_BOARD_DB_MAX_CONNECTIONS", default_value_t = 20)]
    pub max_connections: u32,

    #[arg(long, env = "MESSAGE_BOARD_DB_MIN_CONNECTIONS", default_value_t = 0)]
    pub min_connections: u32,

    #[arg(long, env = "MESSAGE_BOARD_DB_ACQUIRE_TIMEOUT_SECS", default_value_t = 5)]
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { url: None, max_connections: 20, min_connections: 0, acquire_timeout_secs: 5 }
    }
}

#[derive(Clone, Debug, Args)]
pub struct PaginationConfig {
    /// Page size used when a list request does not specify one
    #[arg(long, env = "MESSAGE_BOARD_DEFAULT_PAGE_SIZE", default_value_t = 10)]
    pub default_page_size: u32,

    /// Largest page size a client may request
    #[arg(long, env = "MESSAGE_BOARD_MAX_PAGE_SIZE", default_value_t = 100)]
    pub max_page_size: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { default_page_size: 10, max_page_size: 100 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, Default, Args)]
pub struct TelemetryConfig {
    /// OTLP gRPC endpoint for traces and metrics (e.g. http://localhost:4317)
    #[arg(long, env = "MESSAGE_BOARD_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,

    #[arg(long, env = "MESSAGE_BOARD_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Config {
    #[must_use]
    pub fn load() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_cli_defaults() {
        let parsed = Config::try_parse_from(["message-board"]).unwrap();
        let defaults = Config::default();

        assert_eq!(parsed.server.port, defaults.server.port);
        assert_eq!(parsed.server.mgmt_port, defaults.server.mgmt_port);
        assert_eq!(parsed.pagination.default_page_size, defaults.pagination.default_page_size);
        assert_eq!(parsed.pagination.max_page_size, defaults.pagination.max_page_size);
        assert_eq!(parsed.telemetry.log_format, LogFormat::Text);
    }

    #[test]
    fn test_database_url_flag() {
        let parsed =
            Config::try_parse_from(["message-board", "--database-url", "postgres://localhost/messages"]).unwrap();
        assert_eq!(parsed.database.url.as_deref(), Some("postgres://localhost/messages"));
    }
}
