use std::env;
use std::str::FromStr;

use jsonwebtoken::Algorithm;
use thiserror::Error;

/// Minimum length for the JWT signing secret. Anything shorter is refused at
/// startup rather than weakening every token the process would ever sign.
pub const MIN_SECRET_LENGTH: usize = 32;

/// Errors raised while loading or validating configuration. All of these are
/// startup-fatal: the process must refuse to run with a broken configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },

    #[error("JWT_SECRET must be at least {MIN_SECRET_LENGTH} characters (got {0})")]
    WeakSecret(usize),

    #[error("Unsupported JWT algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Allowed CORS origins; a single "*" entry means any origin.
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_algorithm: String,
    pub jwt_expiry_days: u64,
}

impl AppConfig {
    /// Load configuration from the environment and validate it once.
    ///
    /// The returned value is immutable and handed to the server state by
    /// reference; nothing re-reads the environment after startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            server: ServerConfig {
                port: parse_var("PORT", 3000)?,
                cors_origins: env::var("CORS_ORIGINS")
                    .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                    .unwrap_or_else(|_| vec!["*".to_string()]),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS", 5)?,
                connect_timeout_secs: parse_var("DATABASE_CONNECT_TIMEOUT", 30)?,
            },
            security: SecurityConfig {
                jwt_secret: env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?,
                jwt_algorithm: env::var("JWT_ALGORITHM").unwrap_or_else(|_| "HS256".to_string()),
                jwt_expiry_days: parse_var("JWT_EXPIRY_DAYS", 7)?,
            },
        };

        config.security.validate()?;
        Ok(config)
    }
}

impl SecurityConfig {
    /// Validate the signing configuration. Called once at load time; a weak
    /// secret or unknown algorithm is a fatal configuration error, never a
    /// per-request one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.len() < MIN_SECRET_LENGTH {
            return Err(ConfigError::WeakSecret(self.jwt_secret.len()));
        }
        self.algorithm()?;
        Ok(())
    }

    pub fn algorithm(&self) -> Result<Algorithm, ConfigError> {
        Algorithm::from_str(&self.jwt_algorithm)
            .map_err(|_| ConfigError::UnsupportedAlgorithm(self.jwt_algorithm.clone()))
    }

    pub fn token_expiry(&self) -> chrono::Duration {
        chrono::Duration::days(self.jwt_expiry_days as i64)
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidVar { name, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn security(secret: &str) -> SecurityConfig {
        SecurityConfig {
            jwt_secret: secret.to_string(),
            jwt_algorithm: "HS256".to_string(),
            jwt_expiry_days: 7,
        }
    }

    #[test]
    fn rejects_31_char_secret() {
        let cfg = security(&"x".repeat(31));
        assert!(matches!(cfg.validate(), Err(ConfigError::WeakSecret(31))));
    }

    #[test]
    fn accepts_32_char_secret() {
        let cfg = security(&"x".repeat(32));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_unknown_algorithm() {
        let mut cfg = security(&"x".repeat(32));
        cfg.jwt_algorithm = "ROT13".to_string();
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn default_expiry_is_seven_days() {
        let cfg = security(&"x".repeat(32));
        assert_eq!(cfg.token_expiry(), chrono::Duration::days(7));
    }
}
