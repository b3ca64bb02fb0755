/// Configuration management for the comment service
///
/// Everything is loaded from environment variables with development
/// defaults; the admin job binaries reuse the same `Config`.
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// HTTP API target for the bulk jobs
    pub api: ApiConfig,
    /// Bulk delete identifier range
    pub purge: PurgeConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Max connections in pool
    pub max_connections: u32,
}

/// Base URL the bulk jobs issue requests against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

/// Inclusive identifier range swept by the bulk delete job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurgeConfig {
    pub first_id: i64,
    pub last_id: i64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            app: AppConfig {
                env: app_env.clone(),
                host: std::env::var("COMMENT_SERVICE_HOST")
                    .unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("COMMENT_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
            },
            cors: {
                let allowed_origins = match std::env::var("CORS_ALLOWED_ORIGINS") {
                    Ok(value) => value,
                    Err(_) if app_env.eq_ignore_ascii_case("production") => {
                        return Err("CORS_ALLOWED_ORIGINS must be set in production".to_string())
                    }
                    Err(_) => "http://localhost:3000".to_string(),
                };

                if app_env.eq_ignore_ascii_case("production") && allowed_origins.trim() == "*" {
                    return Err("CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string());
                }

                CorsConfig { allowed_origins }
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgresql://localhost/comments".to_string()),
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|c| c.parse().ok())
                    .unwrap_or(10),
            },
            api: ApiConfig {
                base_url: std::env::var("COMMENT_API_BASE_URL")
                    .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string()),
            },
            purge: {
                let first_id = parse_env_or_default("COMMENT_PURGE_FIRST_ID", 1)?;
                let last_id = parse_env_or_default("COMMENT_PURGE_LAST_ID", 21)?;
                if first_id > last_id {
                    return Err(format!(
                        "COMMENT_PURGE_FIRST_ID ({}) must not exceed COMMENT_PURGE_LAST_ID ({})",
                        first_id, last_id
                    ));
                }
                PurgeConfig { first_id, last_id }
            },
        })
    }
}

fn parse_env_or_default(key: &str, default: i64) -> Result<i64, String> {
    match std::env::var(key) {
        Ok(val) => val
            .parse()
            .map_err(|e| format!("Failed to parse {}='{}': {}", key, val, e)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "APP_ENV",
            "COMMENT_SERVICE_HOST",
            "COMMENT_SERVICE_PORT",
            "CORS_ALLOWED_ORIGINS",
            "DATABASE_URL",
            "DATABASE_MAX_CONNECTIONS",
            "COMMENT_API_BASE_URL",
            "COMMENT_PURGE_FIRST_ID",
            "COMMENT_PURGE_LAST_ID",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_when_env_is_empty() {
        clear_env();
        let cfg = Config::from_env().expect("config loads");
        assert_eq!(cfg.app.port, 8080);
        assert_eq!(cfg.api.base_url, "http://127.0.0.1:8080");
        assert_eq!(cfg.purge.first_id, 1);
        assert_eq!(cfg.purge.last_id, 21);
    }

    #[test]
    #[serial]
    fn purge_range_overrides_are_read() {
        clear_env();
        std::env::set_var("COMMENT_PURGE_FIRST_ID", "3");
        std::env::set_var("COMMENT_PURGE_LAST_ID", "19");
        let cfg = Config::from_env().expect("config loads");
        assert_eq!(cfg.purge.first_id, 3);
        assert_eq!(cfg.purge.last_id, 19);
        clear_env();
    }

    #[test]
    #[serial]
    fn inverted_purge_range_is_rejected() {
        clear_env();
        std::env::set_var("COMMENT_PURGE_FIRST_ID", "10");
        std::env::set_var("COMMENT_PURGE_LAST_ID", "2");
        assert!(Config::from_env().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn production_requires_explicit_cors_origins() {
        clear_env();
        std::env::set_var("APP_ENV", "production");
        assert!(Config::from_env().is_err());

        std::env::set_var("CORS_ALLOWED_ORIGINS", "*");
        assert!(Config::from_env().is_err());

        std::env::set_var("CORS_ALLOWED_ORIGINS", "https://example.com");
        assert!(Config::from_env().is_ok());
        clear_env();
    }
}
