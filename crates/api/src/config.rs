use std::str::FromStr;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. A value that
/// fails to parse is reported and replaced by its default.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Page size used when a list request does not name one (default: `10`).
    pub default_page_size: i64,
    /// Upper bound for a requested page size (default: `100`).
    pub max_page_size: i64,
}

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var             | Default   |
    /// |---------------------|-----------|
    /// | `HOST`              | `0.0.0.0` |
    /// | `PORT`              | `3000`    |
    /// | `DEFAULT_PAGE_SIZE` | `10`      |
    /// | `MAX_PAGE_SIZE`     | `100`     |
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = std::env::var("HOST").unwrap_or(defaults.host);
        let port = env_or("PORT", defaults.port);
        let max_page_size = env_or("MAX_PAGE_SIZE", defaults.max_page_size).max(1);
        let default_page_size =
            env_or("DEFAULT_PAGE_SIZE", defaults.default_page_size).clamp(1, max_page_size);

        Self {
            host,
            port,
            default_page_size,
            max_page_size,
        }
    }
}

fn env_or<T: FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, %default, "Invalid value, using default");
            default
        }),
        Err(_) => default,
    }
}
