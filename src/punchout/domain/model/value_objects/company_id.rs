use crate::punchout::domain::model::enums::verification_failure::VerificationFailure;

/// Buying organization identifier. Free text from the procurement request,
/// e.g. "Acme Corp"; only blank values are rejected.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CompanyId(String);

impl CompanyId {
    pub fn new(value: String) -> Result<Self, VerificationFailure> {
        if value.trim().is_empty() {
            return Err(VerificationFailure::MalformedClaims);
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
