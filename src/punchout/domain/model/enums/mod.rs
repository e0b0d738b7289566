pub mod deployment_environment;
pub mod punchout_cookie_name;
pub mod punchout_session_state;
pub mod redirect_target;
pub mod same_site_policy;
pub mod verification_failure;
