use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, errors::ErrorKind};
use serde::Deserialize;

use crate::{
    config::app_config::SigningSecret,
    punchout::{
        domain::model::{
            entities::punchout_claims::PunchoutClaims,
            enums::verification_failure::VerificationFailure,
            value_objects::{
                claim_value::{ClaimValue, present},
                company_id::CompanyId,
                punchout_token::PunchoutToken,
            },
        },
        interfaces::acl::{clock::Clock, punchout_token_verifier::PunchoutTokenVerifier},
    },
};

/// Claim names as emitted by the upstream punchout issuer. Anything else in
/// the payload is dropped by serde.
#[derive(Debug, Deserialize)]
struct RawPunchoutClaims {
    #[serde(default)]
    b2b_company_id: Option<String>,
    #[serde(default)]
    medusa_jwt: Option<String>,
    #[serde(default)]
    session_id: Option<String>,
    #[serde(default)]
    sku: Option<String>,
    #[serde(default)]
    browser_form_post_url: Option<String>,
    #[serde(default)]
    exp: Option<i64>,
}

pub struct JwtPunchoutTokenVerifierImpl {
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
    leeway_seconds: i64,
}

impl JwtPunchoutTokenVerifierImpl {
    pub fn new(secret: &SigningSecret, clock: Arc<dyn Clock>, leeway_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the injected clock below.
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            clock,
            leeway_seconds: i64::try_from(leeway_seconds).unwrap_or(i64::MAX),
        }
    }

    fn map_decode_error(kind: &ErrorKind) -> VerificationFailure {
        match kind {
            ErrorKind::InvalidSignature
            | ErrorKind::InvalidAlgorithm
            | ErrorKind::InvalidAlgorithmName
            | ErrorKind::InvalidKeyFormat => VerificationFailure::InvalidSignature,
            ErrorKind::ExpiredSignature => VerificationFailure::Expired,
            _ => VerificationFailure::MalformedClaims,
        }
    }

    fn check_expiry(&self, exp: Option<i64>) -> Result<(), VerificationFailure> {
        let exp = exp.ok_or(VerificationFailure::MalformedClaims)?;
        let now = self.clock.now().timestamp();

        if exp.saturating_add(self.leeway_seconds) <= now {
            return Err(VerificationFailure::Expired);
        }

        Ok(())
    }
}

impl PunchoutTokenVerifier for JwtPunchoutTokenVerifierImpl {
    fn verify(&self, token: &PunchoutToken) -> Result<PunchoutClaims, VerificationFailure> {
        let raw = decode::<RawPunchoutClaims>(token.value(), &self.decoding_key, &self.validation)
            .map_err(|error| Self::map_decode_error(error.kind()))?
            .claims;

        self.check_expiry(raw.exp)?;

        let company_id = raw
            .b2b_company_id
            .ok_or(VerificationFailure::MalformedClaims)
            .and_then(CompanyId::new)?;

        Ok(PunchoutClaims::from_verified(
            company_id,
            ClaimValue::optional(raw.medusa_jwt),
            ClaimValue::optional(raw.session_id),
            present(raw.sku),
            ClaimValue::optional(raw.browser_form_post_url),
        ))
    }
}
