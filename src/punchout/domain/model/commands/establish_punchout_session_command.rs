use crate::punchout::domain::model::{
    enums::verification_failure::VerificationFailure,
    value_objects::punchout_token::PunchoutToken,
};

#[derive(Clone, Debug)]
pub struct EstablishPunchoutSessionCommand {
    token: Option<PunchoutToken>,
}

impl EstablishPunchoutSessionCommand {
    /// A missing or blank token is a plain visit, not an error.
    pub fn new(raw_token: Option<String>) -> Result<Self, VerificationFailure> {
        let token = match raw_token.filter(|value| !value.trim().is_empty()) {
            Some(raw) => Some(PunchoutToken::new(raw)?),
            None => None,
        };

        Ok(Self { token })
    }

    pub fn token(&self) -> Option<&PunchoutToken> {
        self.token.as_ref()
    }
}
