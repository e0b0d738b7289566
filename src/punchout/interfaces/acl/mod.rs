pub mod clock;
pub mod punchout_token_verifier;
