use std::sync::Arc;

use axum::Router;

use crate::{
    config::app_config::AppConfig,
    punchout::{
        application::{
            acl::jwt_punchout_token_verifier_impl::JwtPunchoutTokenVerifierImpl,
            command_services::punchout_session_command_service_impl::PunchoutSessionCommandServiceImpl,
        },
        domain::services::{
            deep_link_router::DeepLinkRouter, session_cookie_issuer::SessionCookieIssuer,
        },
        infrastructure::time::system_clock::SystemClock,
        interfaces::rest::controllers::punchout_rest_controller::{
            PunchoutRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_punchout_router(config: &AppConfig) -> Result<Router, String> {
    if !config
        .storefront_base_url
        .chars()
        .all(|c| c.is_ascii_graphic())
    {
        return Err(format!(
            "storefront base url '{}' is not a valid Location header value",
            config.storefront_base_url
        ));
    }

    let token_verifier = Arc::new(JwtPunchoutTokenVerifierImpl::new(
        &config.punchout_signing_secret,
        Arc::new(SystemClock),
        config.punchout_token_leeway_seconds,
    ));

    let command_service = Arc::new(PunchoutSessionCommandServiceImpl::new(
        token_verifier,
        DeepLinkRouter::new(),
        SessionCookieIssuer::new(config.environment),
    ));

    Ok(router(PunchoutRestControllerState {
        command_service,
        storefront_base_url: Arc::from(config.storefront_base_url.as_str()),
    }))
}
