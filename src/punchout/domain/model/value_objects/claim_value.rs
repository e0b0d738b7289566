/// An optional claim counts as present only when it has non-blank content.
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

/// A verified optional claim value, kept exactly as the issuer sent it.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ClaimValue(String);

impl ClaimValue {
    pub fn optional(value: Option<String>) -> Option<Self> {
        present(value).map(Self)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
