use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::punchout::{
    domain::{
        model::{
            commands::establish_punchout_session_command::EstablishPunchoutSessionCommand,
            entities::punchout_session_outcome::PunchoutSessionOutcome,
            enums::verification_failure::VerificationFailure,
            value_objects::punchout_token::PunchoutToken,
        },
        services::{
            deep_link_router::DeepLinkRouter,
            punchout_session_command_service::PunchoutSessionCommandService,
            session_cookie_issuer::SessionCookieIssuer,
        },
    },
    interfaces::acl::punchout_token_verifier::PunchoutTokenVerifier,
};

pub struct PunchoutSessionCommandServiceImpl {
    token_verifier: Arc<dyn PunchoutTokenVerifier>,
    deep_link_router: DeepLinkRouter,
    cookie_issuer: SessionCookieIssuer,
}

impl PunchoutSessionCommandServiceImpl {
    pub fn new(
        token_verifier: Arc<dyn PunchoutTokenVerifier>,
        deep_link_router: DeepLinkRouter,
        cookie_issuer: SessionCookieIssuer,
    ) -> Self {
        Self {
            token_verifier,
            deep_link_router,
            cookie_issuer,
        }
    }

    fn establish(&self, token: &PunchoutToken) -> PunchoutSessionOutcome {
        match self.token_verifier.verify(token) {
            Ok(claims) => {
                let target = self.deep_link_router.route(&claims);
                let cookies = self.cookie_issuer.issue(&claims);

                if claims.is_authenticated() {
                    tracing::info!(
                        company_id = claims.company_id().value(),
                        target = target.as_path(),
                        "punchout session established with downstream credential"
                    );
                } else {
                    tracing::warn!(
                        company_id = claims.company_id().value(),
                        target = target.as_path(),
                        "punchout token carried no downstream credential; buyer browses anonymously"
                    );
                }

                PunchoutSessionOutcome::established(target, cookies, claims.is_authenticated())
            }
            Err(failure) => {
                tracing::warn!(
                    reason = failure.as_str(),
                    token_fingerprint = %token_fingerprint(token),
                    "punchout token rejected; falling back to anonymous catalog"
                );
                PunchoutSessionOutcome::fallback(failure)
            }
        }
    }
}

impl PunchoutSessionCommandService for PunchoutSessionCommandServiceImpl {
    fn handle_establish(&self, command: EstablishPunchoutSessionCommand) -> PunchoutSessionOutcome {
        match command.token() {
            Some(token) => self.establish(token),
            None => {
                tracing::debug!("no punchout token on request; plain anonymous visit");
                PunchoutSessionOutcome::fallback(VerificationFailure::MissingToken)
            }
        }
    }
}

/// Short digest for correlating rejected tokens in logs without writing them out.
pub fn token_fingerprint(token: &PunchoutToken) -> String {
    let digest = Sha256::digest(token.value().as_bytes());
    format!("{:x}", digest)[..16].to_string()
}
