use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    /// Absolute origin used as the base of hypermedia links, e.g. `https://api.example.com`.
    /// When unset, links are built from the `Host` header of each request.
    pub app_url: Option<String>,

    pub server_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            app_url: std::env::var("APP_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            server_address: std::env::var("SERVER_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string()),
        })
    }
}
