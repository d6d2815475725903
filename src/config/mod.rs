pub mod server;

pub use server::{ConfigError, CorsOrigins, ServerConfig};
