use std::fmt;

use thiserror::Error;

use crate::punchout::domain::model::enums::deployment_environment::DeploymentEnvironment;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STOREFRONT_BASE_URL: &str = "http://localhost:8002";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppConfigError {
    #[error("PUNCHOUT_JWT_SECRET (or JWT_SECRET) must be set to a non-empty value")]
    MissingSigningSecret,

    #[error("invalid value for {variable}: {reason}")]
    InvalidValue {
        variable: &'static str,
        reason: String,
    },
}

/// Shared HMAC secret for punchout tokens. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningSecret(String);

impl SigningSecret {
    pub fn new(value: String) -> Result<Self, AppConfigError> {
        if value.trim().is_empty() {
            return Err(AppConfigError::MissingSigningSecret);
        }
        Ok(Self(value))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(***)")
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub punchout_signing_secret: SigningSecret,
    pub storefront_base_url: String,
    pub environment: DeploymentEnvironment,
    pub punchout_token_leeway_seconds: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let secret = non_empty("PUNCHOUT_JWT_SECRET")
            .or_else(|| non_empty("JWT_SECRET"))
            .ok_or(AppConfigError::MissingSigningSecret)?;

        let port = match non_empty("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| AppConfigError::InvalidValue {
                variable: "PORT",
                reason: format!("'{raw}' is not a valid port"),
            })?,
            None => DEFAULT_PORT,
        };

        let environment = match non_empty("APP_ENV") {
            Some(raw) => raw.parse::<DeploymentEnvironment>().map_err(|_| AppConfigError::InvalidValue {
                variable: "APP_ENV",
                reason: format!("'{raw}' is not one of development, production"),
            })?,
            None => DeploymentEnvironment::Development,
        };

        let storefront_base_url = non_empty("STOREFRONT_BASE_URL")
            .or_else(|| non_empty("NEXT_PUBLIC_BASE_URL"))
            .unwrap_or_else(|| DEFAULT_STOREFRONT_BASE_URL.to_string());
        let has_http_scheme = storefront_base_url.starts_with("http://")
            || storefront_base_url.starts_with("https://");
        if !has_http_scheme {
            return Err(AppConfigError::InvalidValue {
                variable: "STOREFRONT_BASE_URL",
                reason: "must be an absolute http(s) origin".to_string(),
            });
        }

        let punchout_token_leeway_seconds = match non_empty("PUNCHOUT_TOKEN_LEEWAY_SECONDS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| AppConfigError::InvalidValue {
                variable: "PUNCHOUT_TOKEN_LEEWAY_SECONDS",
                reason: format!("'{raw}' is not a non-negative integer"),
            })?,
            None => 0,
        };

        Ok(Self {
            port,
            punchout_signing_secret: SigningSecret::new(secret)?,
            storefront_base_url: storefront_base_url.trim_end_matches('/').to_string(),
            environment,
            punchout_token_leeway_seconds,
        })
    }
}
