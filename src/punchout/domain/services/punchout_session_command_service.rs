use crate::punchout::domain::model::{
    commands::establish_punchout_session_command::EstablishPunchoutSessionCommand,
    entities::punchout_session_outcome::PunchoutSessionOutcome,
};

pub trait PunchoutSessionCommandService: Send + Sync {
    /// Never fails: every problem collapses into an anonymous fallback outcome.
    fn handle_establish(&self, command: EstablishPunchoutSessionCommand) -> PunchoutSessionOutcome;
}
