use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,
    pub environment: String,

    // CORS
    pub cors_allowed_origins: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string()),
        })
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.host.trim().is_empty() {
            anyhow::bail!("HOST is empty");
        }
        if self.port == 0 {
            anyhow::bail!("PORT must be nonzero");
        }

        match self.environment.as_str() {
            "development" | "staging" | "production" => {}
            other => tracing::warn!("Unrecognized ENVIRONMENT '{}'", other),
        }
        if self.environment == "production" && self.cors_allowed_origins.trim() == "*" {
            tracing::warn!("Permissive CORS origins in production");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "development".to_string(),
            cors_allowed_origins: "*".to_string(),
        }
    }

    #[test]
    fn default_config_passes_validation() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_host() {
        let mut config = test_config();
        config.host = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_port() {
        let mut config = test_config();
        config.port = 0;
        assert!(config.validate().is_err());
    }
}
