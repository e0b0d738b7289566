use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderName, HeaderValue, StatusCode, header},
    response::{AppendHeaders, IntoResponse, Response},
    routing::get,
};
use axum_extra::extract::cookie::{Cookie, SameSite};
use uuid::Uuid;
use validator::Validate;

use crate::punchout::{
    domain::{
        model::{
            commands::establish_punchout_session_command::EstablishPunchoutSessionCommand,
            entities::punchout_session_outcome::PunchoutSessionOutcome,
            enums::{
                redirect_target::RedirectTarget, same_site_policy::SameSitePolicy,
                verification_failure::VerificationFailure,
            },
            value_objects::cookie_directive::CookieDirective,
        },
        services::punchout_session_command_service::PunchoutSessionCommandService,
    },
    interfaces::rest::resources::{
        health_resource::HealthResource, punchout_login_query_resource::PunchoutLoginQueryResource,
    },
};

#[derive(Clone)]
pub struct PunchoutRestControllerState {
    pub command_service: Arc<dyn PunchoutSessionCommandService>,
    pub storefront_base_url: Arc<str>,
}

pub const PUNCHOUT_LOGIN_PATH: &str = "/api/punchout/login";

pub fn router(state: PunchoutRestControllerState) -> Router {
    Router::new()
        .route(PUNCHOUT_LOGIN_PATH, get(punchout_login))
        .route("/health", get(health))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/punchout/login",
    tag = "punchout",
    params(PunchoutLoginQueryResource),
    responses(
        (status = 307, description = "Redirect into the storefront; session cookies are set only for a verified token")
    )
)]
pub async fn punchout_login(
    State(state): State<PunchoutRestControllerState>,
    query: Result<Query<PunchoutLoginQueryResource>, QueryRejection>,
) -> Response {
    let attempt_id = Uuid::now_v7();
    let span = tracing::info_span!("punchout_login", %attempt_id);

    span.in_scope(|| {
        let outcome = match parse_command(query) {
            Ok(command) => state.command_service.handle_establish(command),
            Err(failure) => {
                tracing::warn!(
                    reason = failure.as_str(),
                    "punchout request rejected before verification"
                );
                PunchoutSessionOutcome::fallback(failure)
            }
        };

        tracing::debug!(
            session = outcome.state().as_str(),
            target = outcome.target().as_path(),
            cookies = outcome.cookies().len(),
            "punchout redirect issued"
        );

        redirect_response(&state.storefront_base_url, &outcome)
    })
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "punchout",
    responses((status = 200, description = "Service is up", body = HealthResource))
)]
pub async fn health() -> Json<HealthResource> {
    Json(HealthResource {
        status: "ok".to_string(),
    })
}

fn parse_command(
    query: Result<Query<PunchoutLoginQueryResource>, QueryRejection>,
) -> Result<EstablishPunchoutSessionCommand, VerificationFailure> {
    let Query(resource) = query.map_err(|rejection| {
        tracing::debug!(error = %rejection, "unparseable punchout query string");
        VerificationFailure::MalformedClaims
    })?;

    if let Err(validation_error) = resource.validate() {
        tracing::debug!(error = %validation_error, "punchout query failed validation");
        return Err(VerificationFailure::MalformedClaims);
    }

    EstablishPunchoutSessionCommand::new(resource.token)
}

/// Always a redirect. Cookies are attached all-or-nothing; values are
/// percent-encoded on the wire so free-text claims cannot add attributes.
pub fn redirect_response(storefront_base_url: &str, outcome: &PunchoutSessionOutcome) -> Response {
    let cookies = match set_cookie_headers(outcome.cookies()) {
        Some(headers) => headers,
        None => {
            tracing::error!("cookie directive could not be encoded; dropping punchout session");
            return redirect_response(
                storefront_base_url,
                &PunchoutSessionOutcome::fallback(VerificationFailure::MalformedClaims),
            );
        }
    };

    (
        StatusCode::TEMPORARY_REDIRECT,
        [(header::LOCATION, location(storefront_base_url, outcome.target()))],
        AppendHeaders(cookies),
    )
        .into_response()
}

fn location(storefront_base_url: &str, target: RedirectTarget) -> HeaderValue {
    HeaderValue::from_str(&format!("{}{}", storefront_base_url, target.as_path()))
        .unwrap_or_else(|_| HeaderValue::from_static(target.as_path()))
}

fn set_cookie_headers(directives: &[CookieDirective]) -> Option<Vec<(HeaderName, HeaderValue)>> {
    directives
        .iter()
        .map(|directive| {
            HeaderValue::from_str(&to_cookie(directive).encoded().to_string())
                .ok()
                .map(|value| (header::SET_COOKIE, value))
        })
        .collect()
}

fn to_cookie(directive: &CookieDirective) -> Cookie<'static> {
    let same_site = match directive.same_site() {
        SameSitePolicy::Lax => SameSite::Lax,
    };

    Cookie::build((directive.name().as_str(), directive.value().to_string()))
        .http_only(directive.http_only())
        .secure(directive.secure())
        .same_site(same_site)
        .path(directive.path())
        .max_age(time::Duration::seconds(directive.max_age().num_seconds()))
        .build()
}
