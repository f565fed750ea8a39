//! Configuration module
//!
//! Application configuration is resolved once at process start from the
//! environment (with `.env` support) and validated before anything connects
//! to the database or the media service.

use std::env;

const DB_MAX_CONNECTIONS: u32 = 20;
const DB_TIMEOUT_SECS: u64 = 30;
const MAX_VIDEO_SIZE_MB: usize = 70;
const MAX_IMAGE_SIZE_MB: usize = 10;
const CLOUD_UPLOAD_TIMEOUT_SECS: u64 = 120;
const DEFAULT_CLOUD_API_URL: &str = "https://api.mediacloud.io";
const DEFAULT_CLOUD_DELIVERY_URL: &str = "https://media.mediacloud.io";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    /// Shared secret used to verify identity-provider tokens.
    pub auth_token_secret: String,
    // Hosted media service credentials
    pub cloud_name: String,
    pub cloud_api_key: String,
    pub cloud_api_secret: String,
    pub cloud_api_url: String,
    pub cloud_delivery_url: String,
    pub cloud_upload_timeout_seconds: u64,
    // Upload limits
    pub max_video_size_bytes: usize,
    pub max_image_size_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let config = Config {
            server_port: parse_env("SERVER_PORT", 3000)?,
            environment,
            cors_origins,
            database_url: env::var("DATABASE_URL").unwrap_or_default(),
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", DB_MAX_CONNECTIONS)?,
            db_timeout_seconds: parse_env("DB_TIMEOUT_SECONDS", DB_TIMEOUT_SECS)?,
            auth_token_secret: env::var("AUTH_TOKEN_SECRET").unwrap_or_default(),
            cloud_name: env::var("MEDIA_CLOUD_NAME").unwrap_or_default(),
            cloud_api_key: env::var("MEDIA_CLOUD_API_KEY").unwrap_or_default(),
            cloud_api_secret: env::var("MEDIA_CLOUD_API_SECRET").unwrap_or_default(),
            cloud_api_url: env::var("MEDIA_CLOUD_API_URL")
                .unwrap_or_else(|_| DEFAULT_CLOUD_API_URL.to_string()),
            cloud_delivery_url: env::var("MEDIA_CLOUD_DELIVERY_URL")
                .unwrap_or_else(|_| DEFAULT_CLOUD_DELIVERY_URL.to_string()),
            cloud_upload_timeout_seconds: parse_env(
                "CLOUD_UPLOAD_TIMEOUT_SECS",
                CLOUD_UPLOAD_TIMEOUT_SECS,
            )?,
            max_video_size_bytes: parse_env("MAX_VIDEO_SIZE_MB", MAX_VIDEO_SIZE_MB)?
                * 1024
                * 1024,
            max_image_size_bytes: parse_env("MAX_IMAGE_SIZE_MB", MAX_IMAGE_SIZE_MB)?
                * 1024
                * 1024,
        };

        Ok(config)
    }

    /// Fail fast on misconfiguration. The media service credentials are
    /// required at process start; without them every upload would fail.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.database_url.is_empty() {
            anyhow::bail!("DATABASE_URL is required");
        }
        if self.auth_token_secret.len() < 32 {
            anyhow::bail!("AUTH_TOKEN_SECRET is required and must be at least 32 characters");
        }
        if self.cloud_name.is_empty()
            || self.cloud_api_key.is_empty()
            || self.cloud_api_secret.is_empty()
        {
            anyhow::bail!(
                "Media service credentials not found: set MEDIA_CLOUD_NAME, MEDIA_CLOUD_API_KEY and MEDIA_CLOUD_API_SECRET"
            );
        }
        if self.max_video_size_bytes == 0 || self.max_image_size_bytes == 0 {
            anyhow::bail!("Upload size limits must be greater than zero");
        }
        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, anyhow::Error>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid {}: {}", name, e)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            server_port: 3000,
            environment: "test".to_string(),
            cors_origins: vec!["*".to_string()],
            database_url: "postgres://localhost/medley".to_string(),
            db_max_connections: 5,
            db_timeout_seconds: 30,
            auth_token_secret: "test-secret-key-min-32-characters-long!!".to_string(),
            cloud_name: "demo".to_string(),
            cloud_api_key: "key".to_string(),
            cloud_api_secret: "secret".to_string(),
            cloud_api_url: DEFAULT_CLOUD_API_URL.to_string(),
            cloud_delivery_url: DEFAULT_CLOUD_DELIVERY_URL.to_string(),
            cloud_upload_timeout_seconds: 120,
            max_video_size_bytes: 70 * 1024 * 1024,
            max_image_size_bytes: 10 * 1024 * 1024,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_missing_cloud_credentials_rejected() {
        let mut config = valid_config();
        config.cloud_api_secret = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Media service credentials"));
    }

    #[test]
    fn test_missing_database_url_rejected() {
        let mut config = valid_config();
        config.database_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_short_token_secret_rejected() {
        let mut config = valid_config();
        config.auth_token_secret = "short".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_is_production() {
        let mut config = valid_config();
        assert!(!config.is_production());
        config.environment = "Production".to_string();
        assert!(config.is_production());
    }
}
