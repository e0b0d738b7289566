use crate::punchout::domain::model::{
    enums::{
        punchout_session_state::PunchoutSessionState, redirect_target::RedirectTarget,
        verification_failure::VerificationFailure,
    },
    value_objects::cookie_directive::CookieDirective,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PunchoutSessionOutcome {
    target: RedirectTarget,
    cookies: Vec<CookieDirective>,
    state: PunchoutSessionState,
}

impl PunchoutSessionOutcome {
    pub fn established(
        target: RedirectTarget,
        cookies: Vec<CookieDirective>,
        authenticated: bool,
    ) -> Self {
        let state = if authenticated {
            PunchoutSessionState::Authenticated
        } else {
            PunchoutSessionState::Anonymous
        };

        Self {
            target,
            cookies,
            state,
        }
    }

    /// Anonymous catalog visit with no cookies, whatever went wrong.
    pub fn fallback(failure: VerificationFailure) -> Self {
        Self {
            target: RedirectTarget::default(),
            cookies: Vec::new(),
            state: PunchoutSessionState::Fallback(failure),
        }
    }

    pub fn target(&self) -> RedirectTarget {
        self.target
    }

    pub fn cookies(&self) -> &[CookieDirective] {
        &self.cookies
    }

    pub fn state(&self) -> PunchoutSessionState {
        self.state
    }
}
