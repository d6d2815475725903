use std::{env, net::IpAddr, net::SocketAddr, time::Duration};

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};
use tracing::warn;

const DEFAULT_DATABASE_URL: &str = "sqlite://data/algoviz.db?mode=rwc";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost,http://localhost:80";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a valid {expected}, got '{value}'")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error("Invalid CORS origin '{0}'")]
    InvalidOrigin(String),
    #[error("Wildcard CORS origins are not allowed in production")]
    WildcardInProduction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub cors_origins: CorsOrigins,
    pub environment: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = parse_var("HOST", "127.0.0.1", "IP address")?;
        let port = parse_var("PORT", "8000", "port number")?;
        let max_connections = parse_var("DATABASE_MAX_CONNECTIONS", "5", "connection count")?;
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let cors_origins = parse_origins(
            &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
        );

        let config = ServerConfig {
            host,
            port,
            database_url,
            max_connections,
            cors_origins,
            environment,
        };
        config.validate()?;

        Ok(config)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match &self.cors_origins {
            CorsOrigins::Any if self.is_production() => Err(ConfigError::WildcardInProduction),
            CorsOrigins::Any => {
                warn!("CORS allows any origin (development only)");
                Ok(())
            }
            CorsOrigins::List(origins) => {
                for origin in origins {
                    HeaderValue::from_str(origin)
                        .map_err(|_| ConfigError::InvalidOrigin(origin.clone()))?;
                }
                Ok(())
            }
        }
    }

    /// Browsers reject credentialed responses carrying wildcard CORS
    /// headers, so credentials are only enabled for an explicit origin list.
    pub fn cors_layer(&self) -> CorsLayer {
        let layer = CorsLayer::new().max_age(Duration::from_secs(3600));

        match &self.cors_origins {
            CorsOrigins::Any => layer
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
            CorsOrigins::List(origins) => {
                let origins: Vec<HeaderValue> = origins
                    .iter()
                    .filter_map(|origin| HeaderValue::from_str(origin).ok())
                    .collect();

                layer
                    .allow_origin(origins)
                    .allow_methods(AllowMethods::list([
                        Method::GET,
                        Method::POST,
                        Method::PATCH,
                        Method::OPTIONS,
                    ]))
                    .allow_headers(AllowHeaders::mirror_request())
                    .allow_credentials(true)
            }
        }
    }
}

fn parse_var<T: std::str::FromStr>(
    key: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    let value = env::var(key).unwrap_or_else(|_| default.to_string());
    value.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
        key,
        expected,
        value,
    })
}

pub fn parse_origins(raw: &str) -> CorsOrigins {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| origin.trim_end_matches('/').to_string())
        .collect();

    if origins.iter().any(|origin| origin == "*") {
        CorsOrigins::Any
    } else {
        CorsOrigins::List(origins)
    }
}
