use lazy_static::lazy_static;
use regex::Regex;

use crate::punchout::domain::model::enums::verification_failure::VerificationFailure;

lazy_static! {
    static ref COMPACT_JWS_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+$").expect("valid regex");
}

/// Opaque token taken from the `token` query parameter. Only its outer
/// shape is checked here; nothing inside it is trusted until verified.
#[derive(Clone, Eq, PartialEq)]
pub struct PunchoutToken(String);

impl PunchoutToken {
    pub fn new(value: String) -> Result<Self, VerificationFailure> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(VerificationFailure::MissingToken);
        }

        if !COMPACT_JWS_REGEX.is_match(trimmed) {
            return Err(VerificationFailure::MalformedClaims);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for PunchoutToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PunchoutToken({} bytes)", self.0.len())
    }
}
