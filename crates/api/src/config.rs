use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `90`).
    ///
    /// Must exceed the recognition timeout so a slow backend surfaces as the
    /// dedicated timeout error rather than a generic request timeout.
    pub request_timeout_secs: u64,
    /// URL of the external recognition endpoint.
    pub ocr_url: String,
    /// Timeout for recognition calls in seconds (default: `60`).
    pub ocr_timeout_secs: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                |
    /// |------------------------|----------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                              |
    /// | `PORT`                 | `3000`                                 |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`                |
    /// | `REQUEST_TIMEOUT_SECS` | `90`                                   |
    /// | `OCR_URL`              | `http://localhost:8001/extract_isbns`  |
    /// | `OCR_TIMEOUT_SECS`     | `60`                                   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "90".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let ocr_url = std::env::var("OCR_URL")
            .unwrap_or_else(|_| "http://localhost:8001/extract_isbns".into());

        let ocr_timeout_secs: u64 = std::env::var("OCR_TIMEOUT_SECS")
            .unwrap_or_else(|_| komitrack_ocr::DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("OCR_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            ocr_url,
            ocr_timeout_secs,
            jwt,
        }
    }
}
