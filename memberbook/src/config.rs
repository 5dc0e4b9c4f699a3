//! Memberbook configuration

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
}

/// Connection parameters consumed by the resource layer.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL (env: DATABASE_URL)
    pub database_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig {
                database_url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite:memberbook.db".into()),
            },
        }
    }
}
