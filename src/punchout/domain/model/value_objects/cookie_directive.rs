use chrono::Duration;

use crate::punchout::domain::model::enums::{
    punchout_cookie_name::PunchoutCookieName, same_site_policy::SameSitePolicy,
};

pub const COOKIE_PATH: &str = "/";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CookieDirective {
    name: PunchoutCookieName,
    value: String,
    max_age: Duration,
    http_only: bool,
    secure: bool,
    same_site: SameSitePolicy,
    path: &'static str,
}

impl CookieDirective {
    pub fn new(
        name: PunchoutCookieName,
        value: String,
        max_age: Duration,
        http_only: bool,
        secure: bool,
    ) -> Self {
        Self {
            name,
            value,
            max_age,
            http_only,
            secure,
            same_site: SameSitePolicy::Lax,
            path: COOKIE_PATH,
        }
    }

    pub fn name(&self) -> PunchoutCookieName {
        self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    pub fn http_only(&self) -> bool {
        self.http_only
    }

    pub fn secure(&self) -> bool {
        self.secure
    }

    pub fn same_site(&self) -> SameSitePolicy {
        self.same_site
    }

    pub fn path(&self) -> &'static str {
        self.path
    }
}
