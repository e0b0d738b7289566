pub mod claim_value;
pub mod company_id;
pub mod cookie_directive;
pub mod punchout_token;
