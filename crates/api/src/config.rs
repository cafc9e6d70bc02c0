/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `9090`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on pooled database connections (default: `10`).
    pub db_max_connections: u32,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `9090`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DB_MAX_CONNECTIONS`   | `10`                       |
    /// | `LOG_FORMAT`           | `pretty`                   |
    ///
    /// Panics on unparseable values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "9090".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = lookup("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let db_max_connections: u32 = lookup("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|| "10".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => panic!("LOG_FORMAT must be 'pretty' or 'json', got '{other}'"),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_max_connections,
            log_format,
        }
    }
}
