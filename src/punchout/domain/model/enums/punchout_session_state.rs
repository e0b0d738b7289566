use crate::punchout::domain::model::enums::verification_failure::VerificationFailure;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PunchoutSessionState {
    /// Verified token carrying a downstream session credential.
    Authenticated,
    /// Verified token without a downstream credential; company is still known.
    Anonymous,
    /// No usable token; plain anonymous visitor.
    Fallback(VerificationFailure),
}

impl PunchoutSessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authenticated => "authenticated",
            Self::Anonymous => "anonymous",
            Self::Fallback(_) => "fallback",
        }
    }
}
