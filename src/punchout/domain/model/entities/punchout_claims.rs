use crate::punchout::domain::model::value_objects::{
    claim_value::ClaimValue, company_id::CompanyId,
};

/// Claim set of a punchout token that passed verification.
///
/// Only a token verifier inside this crate can build one, so holding a
/// `PunchoutClaims` is proof that signature, expiry and structure were checked.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PunchoutClaims {
    company_id: CompanyId,
    downstream_session_token: Option<ClaimValue>,
    procurement_session_id: Option<ClaimValue>,
    sku: Option<String>,
    return_post_url: Option<ClaimValue>,
}

impl PunchoutClaims {
    pub(crate) fn from_verified(
        company_id: CompanyId,
        downstream_session_token: Option<ClaimValue>,
        procurement_session_id: Option<ClaimValue>,
        sku: Option<String>,
        return_post_url: Option<ClaimValue>,
    ) -> Self {
        Self {
            company_id,
            downstream_session_token,
            procurement_session_id,
            sku,
            return_post_url,
        }
    }

    pub fn company_id(&self) -> &CompanyId {
        &self.company_id
    }

    pub fn downstream_session_token(&self) -> Option<&ClaimValue> {
        self.downstream_session_token.as_ref()
    }

    pub fn procurement_session_id(&self) -> Option<&ClaimValue> {
        self.procurement_session_id.as_ref()
    }

    pub fn sku(&self) -> Option<&str> {
        self.sku.as_deref()
    }

    pub fn return_post_url(&self) -> Option<&ClaimValue> {
        self.return_post_url.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.downstream_session_token.is_some()
    }
}
