use crate::punchout::domain::model::{
    entities::punchout_claims::PunchoutClaims, enums::verification_failure::VerificationFailure,
    value_objects::punchout_token::PunchoutToken,
};

pub trait PunchoutTokenVerifier: Send + Sync {
    /// Checks, in order: signature, expiry, claim structure.
    fn verify(&self, token: &PunchoutToken) -> Result<PunchoutClaims, VerificationFailure>;
}
