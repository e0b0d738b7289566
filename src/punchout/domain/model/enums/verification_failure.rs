use thiserror::Error;

/// Why a punchout token did not yield claims. Kept for server-side
/// diagnostics only; every variant produces the same HTTP response.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum VerificationFailure {
    #[error("punchout token is missing")]
    MissingToken,

    #[error("punchout token signature is invalid")]
    InvalidSignature,

    #[error("punchout token has expired")]
    Expired,

    #[error("punchout token claims are malformed")]
    MalformedClaims,
}

impl VerificationFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingToken => "missing_token",
            Self::InvalidSignature => "invalid_signature",
            Self::Expired => "expired",
            Self::MalformedClaims => "malformed_claims",
        }
    }
}
