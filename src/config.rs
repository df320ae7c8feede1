use std::env;

use tracing::warn;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origin: None,
        }
    }
}

impl ServerConfig {
    /// Reads `SERVER_HOST`, `SERVER_PORT` and `CORS_ORIGIN`.
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("SERVER_HOST").ok(),
            env::var("SERVER_PORT").ok(),
            env::var("CORS_ORIGIN").ok(),
        )
    }

    fn from_vars(host: Option<String>, port: Option<String>, cors_origin: Option<String>) -> Self {
        let port = match port {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!("SERVER_PORT={} is not a valid port, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            host: host
                .filter(|h| !h.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            cors_origin: cors_origin.filter(|o| !o.trim().is_empty()),
        }
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
