use chrono::Duration;

use crate::punchout::domain::model::{
    entities::punchout_claims::PunchoutClaims,
    enums::{deployment_environment::DeploymentEnvironment, punchout_cookie_name::PunchoutCookieName},
    value_objects::cookie_directive::CookieDirective,
};

pub const PUNCHOUT_COOKIE_MAX_AGE_HOURS: i64 = 24;
pub const SESSION_CREDENTIAL_MAX_AGE_DAYS: i64 = 7;

/// Turns verified claims into cookie directives. Output depends only on the
/// claims and the deployment environment.
#[derive(Clone, Copy, Debug)]
pub struct SessionCookieIssuer {
    environment: DeploymentEnvironment,
}

impl SessionCookieIssuer {
    pub fn new(environment: DeploymentEnvironment) -> Self {
        Self { environment }
    }

    /// Order: company id, session credential, procurement session id, return url.
    pub fn issue(&self, claims: &PunchoutClaims) -> Vec<CookieDirective> {
        let secure = self.environment.requires_secure_cookies();
        let punchout_max_age = Duration::hours(PUNCHOUT_COOKIE_MAX_AGE_HOURS);
        let mut cookies = Vec::with_capacity(4);

        cookies.push(CookieDirective::new(
            PunchoutCookieName::CompanyId,
            claims.company_id().value().to_string(),
            punchout_max_age,
            true,
            secure,
        ));

        if let Some(session_token) = claims.downstream_session_token() {
            cookies.push(CookieDirective::new(
                PunchoutCookieName::SessionCredential,
                session_token.value().to_string(),
                Duration::days(SESSION_CREDENTIAL_MAX_AGE_DAYS),
                true,
                secure,
            ));
        }

        if let Some(procurement_session_id) = claims.procurement_session_id() {
            cookies.push(CookieDirective::new(
                PunchoutCookieName::ProcurementSessionId,
                procurement_session_id.value().to_string(),
                punchout_max_age,
                true,
                secure,
            ));
        }

        // Read by the storefront's "transfer cart" script, so not http-only.
        if let Some(return_post_url) = claims.return_post_url() {
            cookies.push(CookieDirective::new(
                PunchoutCookieName::ReturnPostUrl,
                return_post_url.value().to_string(),
                punchout_max_age,
                false,
                secure,
            ));
        }

        cookies
    }
}
