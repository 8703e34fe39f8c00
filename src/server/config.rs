use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STORAGE_BUCKET: &str = "car-images";
const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_UPLOAD_BODY_LIMIT: usize = 50 * 1024 * 1024;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    pub storage_url: String,
    pub storage_service_key: String,
    pub storage_bucket: String,
    /// Largest multipart body accepted by the image upload, in bytes.
    pub upload_body_limit: usize,

    pub jwt_secret: String,

    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// Only `DATABASE_URL` is required. Credentials fall back to empty strings, so a
    /// missing secret surfaces when it is first used rather than at startup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        let upload_body_limit = match lookup("UPLOAD_BODY_LIMIT") {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "UPLOAD_BODY_LIMIT".to_string(),
                    value,
                })?,
            None => DEFAULT_UPLOAD_BODY_LIMIT,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            storage_url: lookup("STORAGE_URL").unwrap_or_default(),
            storage_service_key: lookup("STORAGE_SERVICE_KEY").unwrap_or_default(),
            storage_bucket: lookup("STORAGE_BUCKET")
                .unwrap_or_else(|| DEFAULT_STORAGE_BUCKET.to_string()),
            upload_body_limit,
            jwt_secret: lookup("JWT_SECRET").unwrap_or_default(),
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    /// Socket address string to bind, e.g. `0.0.0.0:3000`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
