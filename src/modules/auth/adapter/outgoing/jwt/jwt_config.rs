use std::env;

use crate::config::{parse_or, required, ConfigError};

const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = required(&lookup, "JWT_SECRET")?;

        // HS256 requires at least 32 bytes
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET".to_string(),
                reason: format!("must be at least {MIN_SECRET_LEN} characters long"),
            });
        }

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| "forum".to_string());

        Ok(Self {
            secret_key,
            issuer,
        })
    }
}
