//! Server configuration.

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Default port for the HTTP API.
pub const DEFAULT_PORT: u16 = 17020;

/// HTTP server configuration.
///
/// Host and port come from CLI flags (or `PAGE_COMPOSER_HOST` /
/// `PAGE_COMPOSER_PORT`); allowed CORS origins come from
/// `PAGE_COMPOSER_CORS_ORIGINS`, comma-separated.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `None` allows any origin.
    pub cors_origins: Option<Vec<String>>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            cors_origins: cors_origins_from_env(),
        }
    }

    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn cors_layer(&self) -> CorsLayer {
        match &self.cors_origins {
            Some(origins) => {
                let origins: Vec<HeaderValue> = origins
                    .iter()
                    .filter_map(|origin| match origin.parse() {
                        Ok(value) => Some(value),
                        Err(_) => {
                            tracing::warn!("Ignoring invalid CORS origin: {:?}", origin);
                            None
                        }
                    })
                    .collect();
                if origins.is_empty() {
                    tracing::warn!("No valid CORS origins configured; cross-origin requests will be rejected");
                }
                CorsLayer::new().allow_origin(AllowOrigin::list(origins))
            }
            None => CorsLayer::permissive(),
        }
    }
}

fn cors_origins_from_env() -> Option<Vec<String>> {
    std::env::var("PAGE_COMPOSER_CORS_ORIGINS")
        .ok()
        .map(|s| parse_origins(&s))
        .filter(|origins| !origins.is_empty())
}

fn parse_origins(s: &str) -> Vec<String> {
    s.split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}
