pub mod punchout_claims;
pub mod punchout_session_outcome;
