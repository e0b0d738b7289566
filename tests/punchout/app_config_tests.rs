use std::collections::HashMap;

use punchout_bridge::{
    config::app_config::{AppConfig, AppConfigError},
    punchout::domain::model::enums::deployment_environment::DeploymentEnvironment,
};

fn load(entries: &[(&str, &str)]) -> Result<AppConfig, AppConfigError> {
    let env: HashMap<String, String> = entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    AppConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn from_lookup_applies_defaults() {
    let config = load(&[("PUNCHOUT_JWT_SECRET", "s3cret")]).expect("valid config");

    assert_eq!(config.port, 8000);
    assert_eq!(config.storefront_base_url, "http://localhost:8002");
    assert_eq!(config.environment, DeploymentEnvironment::Development);
    assert_eq!(config.punchout_token_leeway_seconds, 0);
    assert_eq!(config.punchout_signing_secret.as_bytes(), b"s3cret");
}

#[test]
fn from_lookup_fails_without_signing_secret() {
    assert_eq!(load(&[]).err(), Some(AppConfigError::MissingSigningSecret));
    assert_eq!(
        load(&[("PUNCHOUT_JWT_SECRET", "   ")]).err(),
        Some(AppConfigError::MissingSigningSecret)
    );
}

#[test]
fn from_lookup_accepts_legacy_variable_names() {
    let config = load(&[
        ("JWT_SECRET", "legacy"),
        ("NEXT_PUBLIC_BASE_URL", "https://shop.example/"),
    ])
    .expect("valid config");

    assert_eq!(config.punchout_signing_secret.as_bytes(), b"legacy");
    assert_eq!(config.storefront_base_url, "https://shop.example");
}

#[test]
fn from_lookup_parses_production_environment() {
    let config = load(&[("PUNCHOUT_JWT_SECRET", "s3cret"), ("APP_ENV", "prod")])
        .expect("valid config");

    assert_eq!(config.environment, DeploymentEnvironment::Production);
    assert!(config.environment.requires_secure_cookies());
}

#[test]
fn from_lookup_rejects_invalid_values() {
    assert!(matches!(
        load(&[("PUNCHOUT_JWT_SECRET", "s3cret"), ("APP_ENV", "staging")]),
        Err(AppConfigError::InvalidValue { variable: "APP_ENV", .. })
    ));
    assert!(matches!(
        load(&[("PUNCHOUT_JWT_SECRET", "s3cret"), ("PORT", "eighty")]),
        Err(AppConfigError::InvalidValue { variable: "PORT", .. })
    ));
    assert!(matches!(
        load(&[("PUNCHOUT_JWT_SECRET", "s3cret"), ("STOREFRONT_BASE_URL", "shop.example")]),
        Err(AppConfigError::InvalidValue { variable: "STOREFRONT_BASE_URL", .. })
    ));
}

#[test]
fn signing_secret_is_not_printed() {
    let config = load(&[("PUNCHOUT_JWT_SECRET", "s3cret")]).expect("valid config");

    assert!(!format!("{config:?}").contains("s3cret"));
}
