#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PunchoutCookieName {
    SessionCredential,
    CompanyId,
    ProcurementSessionId,
    ReturnPostUrl,
}

impl PunchoutCookieName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SessionCredential => "_medusa_jwt",
            Self::CompanyId => "_punchout_b2b_company",
            Self::ProcurementSessionId => "_punchout_session_id",
            Self::ReturnPostUrl => "_punchout_return_url",
        }
    }
}
