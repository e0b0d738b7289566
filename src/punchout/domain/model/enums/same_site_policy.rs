#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SameSitePolicy {
    Lax,
}

impl SameSitePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lax => "Lax",
        }
    }
}
